use std::path::{Path, PathBuf};

use engine_logging::engine_info;
use wpharvest_core::{ExportOptions, FlatRow};

use crate::persist::{AtomicFileWriter, PersistError};

pub const DEFAULT_OUTPUT_FILENAME: &str = "articles.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub row_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    Buffer(String),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Serializes `rows` as UTF-8 CSV with a header matching `options`.
pub fn render_csv(rows: &[FlatRow], options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(options.csv_headers())?;
    for row in rows {
        let mut record = vec![
            row.url.as_str(),
            row.title.as_str(),
            row.content.as_str(),
            row.image_url.as_str(),
        ];
        if options.include_categories {
            record.push(row.categories.as_deref().unwrap_or_default());
        }
        if options.include_tags {
            record.push(row.tags.as_deref().unwrap_or_default());
        }
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))
}

/// Renders and atomically writes `{dir}/{filename}`.
pub fn export_csv(
    dir: &Path,
    filename: &str,
    rows: &[FlatRow],
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let bytes = render_csv(rows, options)?;
    let output_path = AtomicFileWriter::new(dir).write(filename, &bytes)?;
    engine_info!("wrote {} rows to {:?}", rows.len(), output_path);
    Ok(ExportSummary {
        row_count: rows.len(),
        output_path,
    })
}
