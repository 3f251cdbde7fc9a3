// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::options::{ExportFormat, ExportOptions},
    csv::to_delimited_string,
    data::DataSet,
    error::ExportError,
    model::StockRow,
};

/// Render `rows` in the chosen format (Copy and Export share this).
pub fn to_export_string(export: &ExportOptions, rows: &[StockRow]) -> Result<String, ExportError> {
    match export.format.delim() {
        Some(sep) => {
            let ds = DataSet::from_stock_rows(rows);
            Ok(to_delimited_string(&ds.headers, &ds.rows, export.include_headers, sep))
        }
        None => {
            debug_assert_eq!(export.format, ExportFormat::Json);
            let mut s = serde_json::to_string_pretty(rows)?;
            s.push('\n');
            Ok(s)
        }
    }
}

/// Write the export file at `export.out_path()`, creating parent directories.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, rows: &[StockRow]) -> Result<PathBuf, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(export, rows)?;
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
