//! Input sheet loading.
//!
//! Reads the "IP Address" and "Subnet Mask" columns from a workbook (first
//! worksheet) or a CSV file into [`InputRow`]s.

use crate::config::{IP_COLUMN, MASK_COLUMN};
use crate::models::InputRow;
use calamine::{open_workbook_auto, Data, Reader};
use std::error::Error;
use std::path::Path;

/// Read input rows from `path`, choosing the reader by file extension.
///
/// # Returns
/// * `Ok(Vec<InputRow>)` - Rows in sheet order, header excluded
/// * `Err` - If the file cannot be opened or lacks a required column
pub fn read_rows(path: &Path) -> Result<Vec<InputRow>, Box<dyn Error>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let rows = match ext.as_str() {
        "csv" => read_csv_rows(path)?,
        _ => read_workbook_rows(path)?,
    };
    log::info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read rows from a CSV file with a header line.
///
/// Cells are decoded lossily, so a row with invalid UTF-8 reaches the
/// summarizer (and is skipped there) instead of failing the whole file.
pub fn read_csv_rows(path: &Path) -> Result<Vec<InputRow>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(decode_cell)
        .collect();
    let find_column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("'{}' has no '{name}' column", path.display()))
    };
    let ip_col = find_column(IP_COLUMN)?;
    let mask_col = find_column(MASK_COLUMN)?;

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(InputRow {
            ip: record.get(ip_col).map(decode_cell).unwrap_or_default(),
            mask: record.get(mask_col).map(decode_cell).unwrap_or_default(),
        });
    }
    Ok(rows)
}

fn decode_cell(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

/// Read rows from the first worksheet of an Excel or OpenDocument workbook.
pub fn read_workbook_rows(path: &Path) -> Result<Vec<InputRow>, Box<dyn Error>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| format!("'{}' contains no worksheets", path.display()))?
        .map_err(|e| format!("cannot read first worksheet of '{}': {e}", path.display()))?;

    let mut sheet_rows = range.rows();
    let header: Vec<String> = sheet_rows
        .next()
        .map(|cells| cells.iter().map(cell_to_string).collect())
        .unwrap_or_default();

    let find_column = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("'{}' has no '{name}' column", path.display()))
    };
    let ip_col = find_column(IP_COLUMN)?;
    let mask_col = find_column(MASK_COLUMN)?;

    let rows = sheet_rows
        .map(|cells| InputRow {
            ip: cells.get(ip_col).map(cell_to_string).unwrap_or_default(),
            mask: cells.get(mask_col).map(cell_to_string).unwrap_or_default(),
        })
        .collect();
    Ok(rows)
}

/// Render a cell as text. Whole numbers lose their ".0" so a mask typed as
/// `24` stays a prefix length.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
