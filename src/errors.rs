use thiserror::Error;

/// Errors that can occur while parsing and reporting on bank statements
#[derive(Error, Debug)]
pub enum StatementParseError {
    /// Generic parse failure (detail in the message)
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// File format is not supported by the library
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// Failed to read the file content from disk
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was called without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    // ── Statement scanner errors ────────────────────────────────────────────

    /// A statement line is missing its expected field label, the labels are
    /// out of order, or the final record is incomplete
    #[error("Malformed statement at line {line}: {reason}")]
    MalformedStatement { line: usize, reason: String },

    /// Input byte is not valid text in the ISO-8859-1 statement encoding
    #[error("Invalid ISO-8859-1 byte 0x{byte:02X} at offset {offset}")]
    InvalidEncoding { offset: usize, byte: u8 },

    // ── Table and reporting errors ──────────────────────────────────────────

    /// A table file line does not split into exactly four fields
    #[error("Malformed table row {row}: expected 4 fields, found {fields}")]
    MalformedTableRow { row: usize, fields: usize },

    /// Date field does not match the DD/MM/YYYY statement format
    #[error("Invalid statement date format")]
    StatementDateInvalidFormat,

    /// Amount or balance field is not a signed decimal number
    #[error("Invalid amount format: {0:?}")]
    AmountInvalidFormat(String),

    /// A table row could not be projected onto the plot axes
    #[error("Plot preparation failed at row {row}: {reason}")]
    PlotFieldInvalid { row: usize, reason: String },

    /// Error while writing the CSV export
    #[error("CSV export failed: {0}")]
    CsvWriteFailed(#[from] csv::Error),
}

/// Convenient alias for Result with our main error type
pub type StatementResult<T> = Result<T, StatementParseError>;
