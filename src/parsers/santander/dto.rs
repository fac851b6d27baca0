use serde::{Deserialize, Serialize};

/// One statement record exactly as extracted from the export: field labels and
/// currency markers stripped, values otherwise untouched. Field order is the
/// record order of the source file (date, description, amount, balance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub balance: String,
}

impl StatementEntry {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
            balance: balance.into(),
        }
    }

    /// Fields in record order, as written to and read from disk
    pub fn fields(&self) -> [&str; 4] {
        [&self.date, &self.description, &self.amount, &self.balance]
    }
}
