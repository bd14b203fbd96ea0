//! ZIP packaging of generated records.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::generate::batch::Record;

/// Builds a ZIP archive holding one pretty-printed JSON file per record.
///
/// Entries are written in record order, each newline-terminated, matching
/// the individual file artifacts byte for byte.
///
/// # Errors
///
/// Returns an error when an entry cannot be serialized or written.
pub fn zip_records(records: &[Record]) -> Result<Vec<u8>, String> {
    let mut buffer = Vec::new();
    {
        let cursor = Cursor::new(&mut buffer);
        let mut zip = ZipWriter::new(cursor);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for record in records {
            zip.start_file(record.filename.clone(), options)
                .map_err(|e| format!("Failed to start ZIP entry {}: {e}", record.filename))?;
            let text = render_record(record)?;
            zip.write_all(text.as_bytes())
                .map_err(|e| format!("Failed to write ZIP entry {}: {e}", record.filename))?;
        }

        zip.finish().map_err(|e| format!("Failed to finish ZIP archive: {e}"))?;
    }
    Ok(buffer)
}

/// Renders one record the way it is written to disk: pretty-printed JSON
/// with a trailing newline.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_record(record: &Record) -> Result<String, String> {
    let text = serde_json::to_string_pretty(&record.body)
        .map_err(|e| format!("Failed to serialize {}: {e}", record.filename))?;
    Ok(text + "\n")
}

/// Derives the archive filename for a batch of `n` records.
#[must_use]
pub fn archive_name(n: usize) -> String {
    format!("apds_payloads_{n}.zip")
}
