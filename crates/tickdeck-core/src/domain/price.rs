use serde::{Deserialize, Serialize};
use time::Date;

use crate::ValidationError;

/// Single named column of a price table.
///
/// Cells are nullable because providers deliver sparse series (halted
/// sessions, missing adjusted closes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl PriceColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName);
        }
        for value in values.iter().flatten() {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteValue { field: "price" });
            }
        }
        Ok(Self { name, values })
    }
}

/// Date-indexed price history as handed over by a market-data provider.
///
/// The column set varies by provider response shape, which is why columns
/// are named rather than fixed fields; the report layer resolves the close
/// column by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub dates: Vec<Date>,
    pub columns: Vec<PriceColumn>,
}

impl PriceTable {
    pub fn new(dates: Vec<Date>, columns: Vec<PriceColumn>) -> Result<Self, ValidationError> {
        for pair in dates.windows(2) {
            if pair[0] >= pair[1] {
                return Err(ValidationError::DatesNotSorted);
            }
        }

        for (index, column) in columns.iter().enumerate() {
            if column.values.len() != dates.len() {
                return Err(ValidationError::ColumnLengthMismatch {
                    name: column.name.clone(),
                    len: column.values.len(),
                    expected: dates.len(),
                });
            }
            if columns[..index].iter().any(|c| c.name == column.name) {
                return Err(ValidationError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }

        Ok(Self { dates, columns })
    }

    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn column(&self, name: &str) -> Option<&PriceColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }
}
