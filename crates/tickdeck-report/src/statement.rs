use tickdeck_core::StatementTable;

use crate::error::ReportError;

/// One labeled line of a reshaped statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub label: String,
    pub values: Vec<String>,
}

/// A statement pivoted for display: line items as rows, fiscal periods
/// as columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshapedStatement {
    pub periods: Vec<String>,
    pub lines: Vec<StatementLine>,
}

/// Pivot a provider statement into display orientation.
///
/// The provider table is reports x fields with the first three fields
/// holding identity metadata: symbol, currency, then the fiscal period
/// stamp. The pivot turns fields into rows, drops the first two, and
/// promotes the period stamps to column headers.
///
/// # Errors
///
/// Returns [`ReportError::EmptyStatement`] when the table has no reports
/// or fewer fields than the metadata prefix.
pub fn reshape(table: &StatementTable) -> Result<ReshapedStatement, ReportError> {
    if table.is_empty() || table.field_count() < 3 {
        return Err(ReportError::EmptyStatement);
    }

    let column_values = |field_index: usize| -> Vec<String> {
        table
            .reports
            .iter()
            .map(|report| report[field_index].clone())
            .collect()
    };

    let periods = column_values(2);
    let lines = (3..table.field_count())
        .map(|field_index| StatementLine {
            label: table.fields[field_index].clone(),
            values: column_values(field_index),
        })
        .collect();

    Ok(ReshapedStatement { periods, lines })
}
