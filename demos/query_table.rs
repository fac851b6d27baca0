//! Filter a parsed record file by description substring and show the chart
//! axes that a renderer would consume.
//!
//! Usage: cargo run --example query_table -- <records-file> <substring>

use santander_statement_rs::{Table, prepare_plot_data};

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(path), Some(needle)) = (args.next(), args.next()) else {
        eprintln!("usage: query_table <records-file> <substring>");
        std::process::exit(2);
    };

    let result = Table::load_records(&path)
        .map(|table| table.query(&needle))
        .and_then(|matches| prepare_plot_data(&matches).map(|series| (matches, series)));

    match result {
        Ok((matches, series)) => {
            println!("{}", matches.to_delimited());
            println!();
            for (date, amount) in series.dates.iter().zip(&series.amounts) {
                println!("{date}  {amount:>10.2}");
            }
        }
        Err(e) => {
            eprintln!("Query failed: {e}");
            std::process::exit(1);
        }
    }
}
