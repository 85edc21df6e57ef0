//! Writes the stored result set to files for use outside the tool.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use common::{
    flat_record::FlatRecord,
    search_const::{CSV_EXPORT_FILENAME, XLSX_EXPORT_FILENAME},
};

pub mod csv_export;
pub mod xlsx_export;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn default_filename(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_EXPORT_FILENAME,
            ExportFormat::Xlsx => XLSX_EXPORT_FILENAME,
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            other => anyhow::bail!("unknown export format {other:?} (expected csv or xlsx)"),
        }
    }
}

/// Writes `rows` in `format`. Without an explicit `output` the fixed filename
/// inside `export_dir` is used. Returns the path written.
pub fn export_rows(
    rows: &[FlatRecord],
    format: ExportFormat,
    export_dir: &Path,
    output: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => export_dir.join(format.default_filename()),
    };
    match format {
        ExportFormat::Csv => csv_export::write_csv_file(rows, &path)?,
        ExportFormat::Xlsx => xlsx_export::write_xlsx_file(rows, &path)?,
    }
    tracing::info!("exported {} rows as {} to {}", rows.len(), format, path.display());
    Ok(path)
}
