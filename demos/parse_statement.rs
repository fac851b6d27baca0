//! Convert a Santander .txt export into the delimited record format.
//!
//! Usage: cargo run --example parse_statement -- <input.txt> <output>

use santander_statement_rs::parse_statement_file;

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: parse_statement <input.txt> <output>");
        std::process::exit(2);
    };

    match parse_statement_file(&input, &output) {
        Ok(()) => println!("Wrote {output}"),
        Err(e) => {
            eprintln!("Failed to parse {input}: {e}");
            std::process::exit(1);
        }
    }
}
