use crate::errors::StatementParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date field as it appears in a Santander statement export.
///
/// The export uses a single fixed format:
/// - DD/MM/YYYY
///
/// This wrapper centralizes the parsing and validation logic; downstream
/// code converts to `NaiveDate` exactly once, at the reporting boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDate(String);

impl StatementDate {
    /// Parse the date string as strict DD/MM/YYYY
    pub fn parse(&self) -> Result<NaiveDate, StatementParseError> {
        let s = self.0.trim();

        NaiveDate::parse_from_str(s, "%d/%m/%Y")
            .map_err(|_| StatementParseError::StatementDateInvalidFormat)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StatementDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StatementDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<StatementDate> for NaiveDate {
    type Error = StatementParseError;

    fn try_from(date: StatementDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
