use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Outcome of a bulk CSV import.
///
/// Rows are written sequentially; a failed row does not abort the batch.
/// The error list is capped, `skipped` carries the full count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportReportDto {
    /// Number of rows written successfully
    pub imported: usize,
    /// Number of rows rejected or failed
    pub skipped: usize,
    /// Per-row error messages, capped at [`IMPORT_ERROR_CAP`] entries
    pub errors: Vec<String>,
}

/// Maximum number of per-row error strings carried by an import report.
pub const IMPORT_ERROR_CAP: usize = 20;
