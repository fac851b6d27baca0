//! Parse Santander plain-text statement exports into a queryable table.
//!
//! ```rust,ignore
//! use santander_statement_rs::{ParserBuilder, Table, prepare_plot_data};
//!
//! let entries = ParserBuilder::new()
//!     .content(&file_content)
//!     .parse_into()?;
//!
//! let table = Table::from_entries(entries);
//! let takeaways = table.query("JUST EAT");
//! let series = prepare_plot_data(&takeaways)?;
//! ```

mod builder;
mod types;

pub mod errors;
pub mod ingest;
pub mod parsers;
pub mod plot;
pub mod table;

pub use builder::{FileFormat, ParsedEntry, ParserBuilder};
pub use ingest::{decode_latin1, parse_statement_file};
pub use parsers::prelude::*;
pub use plot::{PlotSeries, prepare_plot_data};
pub use table::{TABLE_HEADER, Table};
pub use types::Transaction;
