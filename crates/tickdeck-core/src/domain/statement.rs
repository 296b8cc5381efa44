use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Financial statement exactly as the fundamentals provider hands it over:
/// one row per annual report, one column per field.
///
/// Field order is what the report reshape keys off: the first three fields
/// are metadata (ticker, reported currency, fiscal period end) followed by
/// the statement line items. Values stay as provider strings; the dashboard
/// displays them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTable {
    pub fields: Vec<String>,
    pub reports: Vec<Vec<String>>,
}

impl StatementTable {
    pub fn new(fields: Vec<String>, reports: Vec<Vec<String>>) -> Result<Self, ValidationError> {
        for (row, field) in fields.iter().enumerate() {
            if field.trim().is_empty() {
                return Err(ValidationError::EmptyStatementLabel { row });
            }
        }

        for (report, values) in reports.iter().enumerate() {
            if values.len() != fields.len() {
                return Err(ValidationError::RaggedStatementReport {
                    report,
                    len: values.len(),
                    expected: fields.len(),
                });
            }
        }

        Ok(Self { fields, reports })
    }

    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            reports: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty() || self.fields.is_empty()
    }

    pub fn report_count(&self) -> usize {
        self.reports.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
