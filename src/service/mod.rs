//! Business logic services.
//!
//! One service per entity. Services validate typed requests before any
//! repository call, convert models to DTOs, and own CSV import/export. Bulk
//! import is an explicit best-effort batch: rows are written sequentially,
//! per-row failures are collected into the report, nothing is rolled back.

pub mod auth;
pub mod college;
pub mod course;
pub mod faculty;
pub mod fee;
pub mod notice;
pub mod student;
pub mod syllabus;
pub mod timetable;

use crate::{
    error::validation::ValidationError,
    model::api::{ImportReportDto, IMPORT_ERROR_CAP},
};

/// Rejects empty or whitespace-only required text fields.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Records one failed import row, capping the carried error strings.
///
/// `line` is the 1-based line in the file, the header row being line 1.
pub(crate) fn record_import_failure(report: &mut ImportReportDto, line: usize, message: String) {
    report.skipped += 1;

    if report.errors.len() < IMPORT_ERROR_CAP {
        report.errors.push(format!("row {}: {}", line, message));
    }
}
