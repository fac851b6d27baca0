use std::fs;

use crate::{errors::StatementParseError, parsers::prelude::*, types::Transaction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParsedEntry {
    Santander(StatementEntry),
}

impl TryFrom<ParsedEntry> for StatementEntry {
    type Error = StatementParseError;

    fn try_from(parsed: ParsedEntry) -> Result<Self, Self::Error> {
        match parsed {
            ParsedEntry::Santander(entry) => Ok(entry),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "santander-txt")]
    SantanderTxt,
}

impl FileFormat {
    fn parse_raw(&self, content: &str) -> Result<Vec<ParsedEntry>, StatementParseError> {
        match self {
            FileFormat::SantanderTxt => {
                let entries = SantanderParser::parse(content)
                    .map_err(StatementParseError::ParseFailed)?;
                Ok(entries.into_iter().map(ParsedEntry::Santander).collect())
            }
        }
    }

    fn parse<T>(&self, content: &str) -> Result<Vec<T>, StatementParseError>
    where
        T: TryFrom<ParsedEntry, Error = StatementParseError>,
    {
        self.parse_raw(content)?
            .into_iter()
            .map(T::try_from)
            .collect()
    }

    fn detect(filename: Option<&str>, content: Option<&str>) -> Result<Self, StatementParseError> {
        if let Some(content) = content {
            if SantanderParser::is_supported(filename, content) {
                return Ok(FileFormat::SantanderTxt);
            }
        }

        if let Some(filename) = filename {
            if let Some(ext) = filename.split('.').next_back() {
                if ext.eq_ignore_ascii_case("txt") {
                    return Ok(FileFormat::SantanderTxt);
                }
            }
        }

        Err(StatementParseError::UnsupportedFormat)
    }
}

#[derive(Default)]
pub struct ParserBuilder {
    content: Option<String>,
    filepath: Option<String>,
    format: Option<FileFormat>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn parse(self) -> Result<Vec<Transaction>, StatementParseError> {
        self.parse_into::<Transaction>()
    }

    pub fn parse_into<T>(self) -> Result<Vec<T>, StatementParseError>
    where
        T: TryFrom<ParsedEntry, Error = StatementParseError>,
    {
        let format = self.format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(
                self.filepath.as_deref(),
                self.content.as_deref(),
            ))?;

        let content = self.content
            .map(Ok)
            .unwrap_or_else(|| {
                self.filepath
                    .ok_or(StatementParseError::MissingContentAndFilepath)
                    .and_then(|path| fs::read_to_string(path).map_err(Into::into))
            })?;

        format.parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE_STATEMENT: &str = "\
From: 31/12/2011 to 31/12/2012

Account: XXXX XXXX XXXX XXXX

Date: 29/12/2012
Description: CARD PAYMENT TO WWW.JUST EAT.CO.UK,10.45 GBP, RATE 1.00/GBP ON 26-12-2012
Amount: -10.45 GBP
Balance: 3472.63 GBP";

    #[test]
    fn test_builder_missing_content() {
        let result: Result<Vec<Transaction>, _> = ParserBuilder::new().parse();
        assert!(matches!(result, Err(StatementParseError::UnsupportedFormat)));
    }

    #[test]
    fn test_builder_with_format() {
        let builder = ParserBuilder::new()
            .content("test")
            .format(FileFormat::SantanderTxt);

        assert!(builder.format.is_some());
        assert_eq!(builder.format.unwrap(), FileFormat::SantanderTxt);
    }

    #[test]
    fn test_builder_new() {
        let builder = ParserBuilder::new();
        assert!(builder.content.is_none());
        assert!(builder.filepath.is_none());
        assert!(builder.format.is_none());
    }

    #[test]
    fn test_builder_content() {
        let builder = ParserBuilder::new().content("test content");
        assert_eq!(builder.content.unwrap(), "test content");
    }

    #[test]
    fn test_builder_filename() {
        let builder = ParserBuilder::new().filename("statement.txt");
        assert_eq!(builder.filepath.unwrap(), "statement.txt");
    }

    #[rstest]
    #[case(Some("statement.txt"), Some(SAMPLE_STATEMENT), true)] // extension + content
    #[case(None, Some(SAMPLE_STATEMENT), true)]                  // content sniff only
    #[case(Some("statement.txt"), None, true)]                   // extension fallback
    #[case(Some("statement.qfx"), None, false)]                  // unknown extension
    #[case(None, Some("random text"), false)]                    // unrecognizable content
    #[case(None, None, false)]
    fn test_format_detection(
        #[case] filename: Option<&str>,
        #[case] content: Option<&str>,
        #[case] should_detect: bool,
    ) {
        let result = FileFormat::detect(filename, content);
        if should_detect {
            assert_eq!(result.unwrap(), FileFormat::SantanderTxt);
        } else {
            assert!(matches!(result, Err(StatementParseError::UnsupportedFormat)));
        }
    }

    #[test]
    fn test_parse_sample_statement() {
        let transactions = ParserBuilder::new()
            .content(SAMPLE_STATEMENT)
            .parse()
            .unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0].date,
            NaiveDate::from_ymd_opt(2012, 12, 29).unwrap()
        );
        assert_eq!(
            transactions[0].amount,
            Decimal::from_str("-10.45").unwrap()
        );
        assert_eq!(
            transactions[0].balance,
            Decimal::from_str("3472.63").unwrap()
        );
    }

    #[test]
    fn test_parse_with_explicit_format() {
        let transactions = ParserBuilder::new()
            .content(SAMPLE_STATEMENT)
            .format(FileFormat::SantanderTxt)
            .parse()
            .unwrap();

        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn test_parse_into_raw_entries() {
        let entries: Vec<StatementEntry> = ParserBuilder::new()
            .content(SAMPLE_STATEMENT)
            .parse_into()
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "29/12/2012");
        assert_eq!(entries[0].balance, "3472.63");
    }

    #[test]
    fn test_parse_raw_entries() {
        let entries: Vec<ParsedEntry> = FileFormat::SantanderTxt
            .parse_raw(SAMPLE_STATEMENT)
            .unwrap();

        assert_eq!(entries.len(), 1);
        let ParsedEntry::Santander(entry) = &entries[0];
        assert_eq!(entry.amount, "-10.45");
    }
}
