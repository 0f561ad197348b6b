//! Spreadsheet export of harvested records
//!
//! Writes one worksheet with a header row of [`COLUMNS`] and one row per
//! record. An empty record list writes nothing. Write failures are returned
//! to the caller; there is no partial-write recovery.

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::record::{COLUMNS, PlaceRecord};

/// Name of the worksheet holding the records
pub const WORKSHEET_NAME: &str = "Places";

/// Errors that can occur while writing the spreadsheet
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Workbook could not be assembled or saved
    #[error("Failed to write spreadsheet '{}': {source}", path.display())]
    Xlsx {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}

/// What the exporter did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// File written with this many data rows (header excluded)
    Written { path: PathBuf, rows: usize },
    /// Nothing to write; no file was created
    Skipped,
}

/// Write `records` to an `.xlsx` file at `path`
///
/// # Errors
///
/// Returns [`ExportError`] when the workbook cannot be built or saved.
pub fn export_records(records: &[PlaceRecord], path: &Path) -> Result<ExportOutcome, ExportError> {
    if records.is_empty() {
        warn!("No data to save.");
        return Ok(ExportOutcome::Skipped);
    }

    let xlsx_error = |source| ExportError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(WORKSHEET_NAME).map_err(xlsx_error)?;

    let header = Format::new().set_bold();
    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header)
            .map_err(xlsx_error)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, value) in record.row().iter().enumerate() {
            worksheet
                .write_string(row, col as u16, *value)
                .map_err(xlsx_error)?;
        }
    }

    workbook.save(path).map_err(xlsx_error)?;

    info!(
        "Data saved successfully to '{}' ({} rows)",
        path.display(),
        records.len()
    );

    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: records.len(),
    })
}
