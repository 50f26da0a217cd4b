//! Summary table files (CSV or JSON).

use crate::models::{SummaryRecord, SUMMARY_COLUMNS};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// File format of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Csv,
    Json,
}

impl SummaryFormat {
    /// Pick the format from a file extension; anything but `.json` is CSV.
    pub fn from_path(path: &Path) -> SummaryFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SummaryFormat::Json,
            _ => SummaryFormat::Csv,
        }
    }
}

/// Write the summary to `path`.
///
/// CSV output always starts with the header line, even with no records.
/// JSON output is an array of records indented by two spaces.
pub fn write_summary(
    records: &[SummaryRecord],
    path: &Path,
    format: SummaryFormat,
) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)
        .map_err(|e| format!("failed to create summary '{}': {e}", path.display()))?;

    match format {
        SummaryFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer.write_record(SUMMARY_COLUMNS)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        SummaryFormat::Json => {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush()?;
        }
    }

    log::info!("→ Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Read a summary previously written by [`write_summary`].
pub fn read_summary(path: &Path) -> Result<Vec<SummaryRecord>, Box<dyn Error>> {
    let records = match SummaryFormat::from_path(path) {
        SummaryFormat::Csv => {
            let mut reader = csv::Reader::from_path(path)
                .map_err(|e| format!("cannot read summary '{}': {e}", path.display()))?;
            let mut records = Vec::new();
            for record in reader.deserialize::<SummaryRecord>() {
                records.push(record?);
            }
            records
        }
        SummaryFormat::Json => {
            let file = File::open(path)
                .map_err(|e| format!("cannot read summary '{}': {e}", path.display()))?;
            let mut json_deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
            serde_path_to_error::deserialize(&mut json_deserializer).map_err(|e| {
                format!(
                    "Error parsing summary '{}': path={} error={}",
                    path.display(),
                    e.path(),
                    e
                )
            })?
        }
    };
    log::debug!("Read {} summary rows from {}", records.len(), path.display());
    Ok(records)
}
