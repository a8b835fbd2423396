//! CSV input reading and name-column selection.
//!
//! The reader expects a header row. The column holding full names is either
//! named explicitly by the user or auto-detected against a list of common
//! header spellings; when neither matches, the first column is used with a
//! warning, mirroring what people actually export from HR spreadsheets.

use crate::constants::NAME_COLUMN_CANDIDATES;
use crate::error::AppError;
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{info, warn};

/// Picks the index of the name column.
///
/// An explicitly requested column must match a header (case-insensitive,
/// trimmed) or the call fails listing the available headers. Without a
/// request, headers are scanned against [`NAME_COLUMN_CANDIDATES`]; a total
/// miss falls back to the first column. An empty header slice is an error,
/// never a panic.
pub fn detect_name_column(headers: &[String], requested: Option<&str>) -> Result<usize, AppError> {
    let Some(first_header) = headers.first() else {
        return Err(AppError::NoColumns);
    };

    if let Some(wanted) = requested {
        return headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted.trim()))
            .ok_or_else(|| AppError::column_not_found(wanted, headers));
    }

    for (index, header) in headers.iter().enumerate() {
        if NAME_COLUMN_CANDIDATES
            .iter()
            .any(|candidate| header.trim().eq_ignore_ascii_case(candidate))
        {
            return Ok(index);
        }
    }

    warn!(
        fallback = first_header.as_str(),
        "could not auto-detect a name column, using the first column"
    );
    Ok(0)
}

/// Name column extracted from one input file.
#[derive(Debug)]
pub struct Roster {
    /// Raw name strings in row order, with empty cells already dropped
    pub names: Vec<String>,
    /// Header of the column the names came from
    pub column: String,
    /// Total data rows in the file, including rows whose name cell was
    /// empty or missing
    pub rows_read: usize,
}

/// Reads the name column out of a CSV file.
///
/// Returns the raw name strings in row order plus the header of the column
/// they came from and the total row count. Rows whose name cell is empty or
/// whitespace-only are skipped; short rows (fewer cells than the name
/// column index) are too.
pub fn read_names(path: &Path, column: Option<&str>) -> Result<Roster, AppError> {
    if !path.exists() {
        return Err(AppError::input_not_found(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::empty_input(path.display().to_string()));
    }

    let index = detect_name_column(&headers, column)?;
    info!(column = headers[index].as_str(), "selected name column");

    let mut names = Vec::new();
    let mut rows_read = 0;
    for record in reader.records() {
        let record = record?;
        rows_read += 1;
        if let Some(cell) = record.get(index) {
            let cell = cell.trim();
            if !cell.is_empty() {
                names.push(cell.to_string());
            }
        }
    }

    Ok(Roster {
        names,
        column: headers[index].clone(),
        rows_read,
    })
}
