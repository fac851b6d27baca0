use crate::errors::{StatementParseError, StatementResult};
use crate::parsers::prelude::StatementDate;
use crate::table::Table;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parallel per-row axes for a balance/amount-over-time chart. Rows keep the
/// statement's own order, which for most exports is newest-first; sorting is
/// left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub dates: Vec<NaiveDate>,
    pub amounts: Vec<f64>,
}

/// Project a table onto chart axes: one `(date, amount)` pair per data row,
/// header skipped. The first field that fails to parse aborts the whole
/// projection; there is no partial output.
pub fn prepare_plot_data(table: &Table) -> StatementResult<PlotSeries> {
    let mut dates = Vec::with_capacity(table.len());
    let mut amounts = Vec::with_capacity(table.len());

    for (idx, row) in table.rows().iter().enumerate() {
        let row_number = idx + 1; // row 0 is the header

        let date = StatementDate::from(row.date.as_str()).parse().map_err(|_| {
            StatementParseError::PlotFieldInvalid {
                row: row_number,
                reason: format!("invalid date {:?}", row.date),
            }
        })?;

        let amount = row
            .amount
            .trim()
            .parse::<Decimal>()
            .ok()
            .and_then(|d| d.to_f64())
            .ok_or_else(|| StatementParseError::PlotFieldInvalid {
                row: row_number,
                reason: format!("invalid amount {:?}", row.amount),
            })?;

        dates.push(date);
        amounts.push(amount);
    }

    Ok(PlotSeries { dates, amounts })
}
