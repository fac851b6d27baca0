pub mod dto;
pub mod parser;
pub mod types;

pub mod prelude {
    pub use super::dto::StatementEntry;
    pub use super::parser::{FIELD_SEPARATOR, SantanderParser, to_delimited};
    pub use super::types::StatementDate;
}
