use crate::builder::ParsedEntry;
use crate::errors::StatementParseError;
use crate::parsers::prelude::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully typed statement transaction. Raw records carry every field as a
/// string; conversion to this type is where dates and money are validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub balance: Decimal,
}

impl TryFrom<ParsedEntry> for Transaction {
    type Error = StatementParseError;

    fn try_from(parsed: ParsedEntry) -> Result<Self, Self::Error> {
        match parsed {
            ParsedEntry::Santander(entry) => entry.try_into(),
        }
    }
}

impl TryFrom<StatementEntry> for Transaction {
    type Error = StatementParseError;

    fn try_from(entry: StatementEntry) -> Result<Self, Self::Error> {
        let date = StatementDate::from(entry.date).parse()?;
        let amount = parse_money(&entry.amount)?;
        let balance = parse_money(&entry.balance)?;

        Ok(Transaction {
            date,
            description: entry.description,
            amount,
            balance,
        })
    }
}

fn parse_money(value: &str) -> Result<Decimal, StatementParseError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| StatementParseError::AmountInvalidFormat(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_test_entry() -> StatementEntry {
        StatementEntry::new(
            "29/12/2012",
            "CARD PAYMENT TO WWW.JUST EAT.CO.UK,10.45 GBP, RATE 1.00/GBP ON 26-12-2012",
            "-10.45",
            "3472.63",
        )
    }

    #[rstest]
    #[case("29/12/2012", "-10.45", "3472.63", true)]
    #[case("28/12/2012", "-10.00", "3483.08", true)]
    #[case("01/01/2011", "23.00", "1344.08", true)]
    #[case("2012-12-29", "-10.45", "3472.63", false)] // ISO date not accepted
    #[case("29/12/2012", "ten pounds", "3472.63", false)] // non-numeric amount
    #[case("29/12/2012", "-10.45", "", false)] // empty balance
    fn test_transaction_from_statement_entry(
        #[case] date: &str,
        #[case] amount: &str,
        #[case] balance: &str,
        #[case] should_succeed: bool,
    ) {
        let entry = StatementEntry::new(date, "TEST PAYMENT", amount, balance);

        let result: Result<Transaction, _> = entry.try_into();

        if should_succeed {
            assert!(result.is_ok());
            let transaction = result.unwrap();
            assert_eq!(transaction.description, "TEST PAYMENT");
            assert_eq!(transaction.amount, Decimal::from_str(amount).unwrap());
            assert_eq!(transaction.balance, Decimal::from_str(balance).unwrap());
        } else {
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_transaction_from_parsed_entry() {
        let parsed = ParsedEntry::Santander(create_test_entry());

        let result: Result<Transaction, _> = parsed.try_into();
        assert!(result.is_ok());

        let transaction = result.unwrap();
        assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2012, 12, 29).unwrap());
        assert_eq!(transaction.amount, Decimal::from_str("-10.45").unwrap());
    }

    #[test]
    fn test_transaction_serialization() {
        let transaction = Transaction {
            date: NaiveDate::from_ymd_opt(2012, 12, 29).unwrap(),
            description: "CARD PAYMENT TO WWW.JUST EAT.CO.UK".to_string(),
            amount: Decimal::from_str("-10.45").unwrap(),
            balance: Decimal::from_str("3472.63").unwrap(),
        };

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains("JUST EAT"));
        assert!(json.contains("-10.45"));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, transaction);
    }
}
