use super::dto::StatementEntry;
use crate::errors::{StatementParseError, StatementResult};
use crate::parsers::traits::Parser;

/// Fields of a record are joined with exactly five ASCII spaces on disk.
/// There is no quoting, so a field containing this run of spaces cannot be
/// represented (accepted limitation of the format).
pub const FIELD_SEPARATOR: &str = "     ";

/// Number of preamble lines (date range, blank, account number, blank) at the
/// top of every export. The offset is fixed, not content-detected.
const HEADER_LINES: usize = 4;

const CURRENCY_SUFFIX: &str = " GBP";

/// The field label the scanner expects next. Every record lists its four
/// fields in this fixed order; anything else is a malformed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expecting {
    Date,
    Description,
    Amount,
    Balance,
}

impl Expecting {
    fn label(self) -> &'static str {
        match self {
            Expecting::Date => "Date",
            Expecting::Description => "Description",
            Expecting::Amount => "Amount",
            Expecting::Balance => "Balance",
        }
    }

    fn next(self) -> Self {
        match self {
            Expecting::Date => Expecting::Description,
            Expecting::Description => Expecting::Amount,
            Expecting::Amount => Expecting::Balance,
            Expecting::Balance => Expecting::Date,
        }
    }
}

pub struct SantanderParser;

impl SantanderParser {
    /// Scan statement lines into records, reporting 1-based line numbers on
    /// failure. Blank lines between records are ignored; a missing or
    /// out-of-order field label aborts the scan instead of misaligning every
    /// record after it.
    pub fn scan<'a, I>(lines: I) -> StatementResult<Vec<StatementEntry>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = Vec::new();
        let mut expecting = Expecting::Date;
        let mut date = String::new();
        let mut description = String::new();
        let mut amount = String::new();
        let mut last_line = 0;

        for (number, raw) in lines.into_iter().enumerate().map(|(i, l)| (i + 1, l)) {
            last_line = number;
            if number <= HEADER_LINES {
                continue;
            }

            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let value = strip_label(line, expecting.label()).ok_or_else(|| {
                StatementParseError::MalformedStatement {
                    line: number,
                    reason: format!(
                        "expected `{}:` field, found {:?}",
                        expecting.label(),
                        line
                    ),
                }
            })?;

            match expecting {
                Expecting::Date => date = value.to_string(),
                Expecting::Description => description = value.to_string(),
                Expecting::Amount => amount = strip_currency(value).to_string(),
                Expecting::Balance => {
                    entries.push(StatementEntry::new(
                        std::mem::take(&mut date),
                        std::mem::take(&mut description),
                        std::mem::take(&mut amount),
                        strip_currency(value),
                    ));
                }
            }
            expecting = expecting.next();
        }

        if expecting != Expecting::Date {
            return Err(StatementParseError::MalformedStatement {
                line: last_line,
                reason: format!(
                    "statement ends mid-record, missing `{}:` field",
                    expecting.label()
                ),
            });
        }

        Ok(entries)
    }
}

impl Parser for SantanderParser {
    type Output = StatementEntry;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        let has_txt_extension = filename
            .map(|name| name.to_lowercase().ends_with(".txt"))
            .unwrap_or(false);

        // The export always opens with its covered date range
        let first_line = content.lines().next().unwrap_or("");
        let looks_like_statement = first_line.trim_start().starts_with("From:");

        match filename {
            Some(_) => has_txt_extension && looks_like_statement,
            None => looks_like_statement,
        }
    }

    fn parse(content: &str) -> Result<Vec<Self::Output>, String> {
        Self::scan(content.lines()).map_err(|e| e.to_string())
    }
}

/// Render records to the on-disk form: fields joined with the five-space
/// separator, one record per line, no trailing newline.
pub fn to_delimited(entries: &[StatementEntry]) -> String {
    entries
        .iter()
        .map(|e| e.fields().join(FIELD_SEPARATOR))
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .map(str::trim)
}

fn strip_currency(value: &str) -> &str {
    value.strip_suffix(CURRENCY_SUFFIX).unwrap_or(value).trim()
}
