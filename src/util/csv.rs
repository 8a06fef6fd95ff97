//! CSV header-based field access.
//!
//! Import files are keyed by header name rather than column position, so that
//! column order and unknown extra columns never matter. Fields are trimmed and
//! empty cells are treated as absent.

use std::collections::HashMap;

use crate::error::validation::ValidationError;

/// Case-sensitive header-name to column-index lookup for one CSV file.
pub struct HeaderIndex(HashMap<String, usize>);

impl HeaderIndex {
    pub fn new(headers: &csv::StringRecord) -> Self {
        Self(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.trim().to_string(), i))
                .collect(),
        )
    }

    /// Returns the trimmed cell under `name`, or None when the column is
    /// missing or the cell is empty.
    pub fn get(&self, record: &csv::StringRecord, name: &str) -> Option<String> {
        let idx = *self.0.get(name)?;
        let value = record.get(idx)?.trim();

        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Like [`HeaderIndex::get`] but rejects missing/empty cells.
    pub fn require(
        &self,
        record: &csv::StringRecord,
        name: &'static str,
    ) -> Result<String, ValidationError> {
        self.get(record, name)
            .ok_or(ValidationError::MissingField(name))
    }

    /// Parses an optional integer cell, rejecting non-numeric values.
    pub fn get_i32(
        &self,
        record: &csv::StringRecord,
        name: &'static str,
    ) -> Result<Option<i32>, ValidationError> {
        self.get(record, name)
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|_| ValidationError::InvalidField {
                        field: name,
                        reason: format!("{:?} is not an integer", value),
                    })
            })
            .transpose()
    }

    /// Parses a required integer cell.
    pub fn require_i32(
        &self,
        record: &csv::StringRecord,
        name: &'static str,
    ) -> Result<i32, ValidationError> {
        self.get_i32(record, name)?
            .ok_or(ValidationError::MissingField(name))
    }
}
