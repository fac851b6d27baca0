use std::fs;
use std::path::Path;

use crate::errors::{StatementParseError, StatementResult};
use crate::parsers::prelude::{FIELD_SEPARATOR, StatementEntry};
use serde::{Deserialize, Serialize};

/// Display header written at row 0 of every table file. The label order
/// (BALANCE before AMOUNT) is historical and does not mirror the record
/// field order on disk; treat it as a caption, not a schema.
pub const TABLE_HEADER: [&str; 4] = ["DATE", "BALANCE", "AMOUNT", "DESCRIPTION"];

/// An in-memory statement table: one header row followed by records in
/// statement order. Tables are built once per load or parse and never
/// mutated; `query` produces a fresh table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<StatementEntry>,
}

impl Table {
    /// Build a table from parsed records, attaching the fixed display header
    pub fn from_entries(rows: Vec<StatementEntry>) -> Self {
        Self {
            header: TABLE_HEADER.iter().map(|s| s.to_string()).collect(),
            rows,
        }
    }

    /// Parse a table file: line 0 is the header, every following line is one
    /// record with fields split on the five-space separator
    pub fn from_delimited(content: &str) -> StatementResult<Self> {
        let mut lines = content.lines();

        let header = match lines.next() {
            Some(line) => line.split(FIELD_SEPARATOR).map(str::to_string).collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            rows.push(split_record(line, idx + 1)?);
        }

        Ok(Self { header, rows })
    }

    /// Parse a headerless record file (the ingestion output) and attach the
    /// fixed display header
    pub fn from_delimited_records(content: &str) -> StatementResult<Self> {
        let mut rows = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            rows.push(split_record(line, idx + 1)?);
        }
        Ok(Self::from_entries(rows))
    }

    pub fn load(path: impl AsRef<Path>) -> StatementResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_delimited(&content)
    }

    pub fn load_records(path: impl AsRef<Path>) -> StatementResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_delimited_records(&content)
    }

    /// Render the table in its on-disk form: header line, then records in
    /// field order, no trailing newline
    pub fn to_delimited(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.header.join(FIELD_SEPARATOR));
        for row in &self.rows {
            lines.push(row.fields().join(FIELD_SEPARATOR));
        }
        lines.join("\n")
    }

    pub fn write(&self, path: impl AsRef<Path>) -> StatementResult<()> {
        fs::write(path, self.to_delimited())?;
        Ok(())
    }

    /// Export as RFC-4180 CSV with proper quoting. Columns follow the header
    /// labels, so BALANCE and DESCRIPTION swap places relative to the
    /// delimited format.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> StatementResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(TABLE_HEADER)?;
        for row in &self.rows {
            writer.write_record([&row.date, &row.balance, &row.amount, &row.description])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Keep the header plus every record whose description contains `needle`
    /// as a literal, case-sensitive substring; record order is preserved
    pub fn query(&self, needle: &str) -> Self {
        Self {
            header: self.header.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| row.description.contains(needle))
                .cloned()
                .collect(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[StatementEntry] {
        &self.rows
    }

    /// Number of data rows (the header is not counted)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn split_record(line: &str, row: usize) -> StatementResult<StatementEntry> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match fields.as_slice() {
        [date, description, amount, balance] => {
            Ok(StatementEntry::new(*date, *description, *amount, *balance))
        }
        other => Err(StatementParseError::MalformedTableRow {
            row,
            fields: other.len(),
        }),
    }
}
