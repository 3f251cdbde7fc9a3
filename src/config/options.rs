// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;
use crate::core::retry::RetryPolicy;
use crate::model::CoercionPolicy;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: s!(MARKET_SUMMARY_URL),
            user_agent: s!(USER_AGENT),
            timeout: REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// CSS selector of the market-summary table
    pub selector: String,
    pub coercion: CoercionPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            selector: s!(DEFAULT_TABLE_SELECTOR),
            coercion: CoercionPolicy::Numeric,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats; `None` for JSON.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, where the extension follows the format unless the
    /// user typed one of their own.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let name = match &self.out_path.user_ext {
            Some(ext) => join!(&*stem, ".", ext),
            None => join!(&*stem, ".", self.format.ext()),
        };
        self.out_path.dir.join(name)
    }

    /// Parse GUI text into dir + stem. A format extension (csv/tsv/json) is
    /// dropped so it follows later format changes; any other one is kept.
    pub fn set_path(&mut self, text: &str) {
        self.store_path(text, false);
    }

    /// Use `text` as the exact file name, whatever its extension.
    pub fn set_path_exact(&mut self, text: &str) {
        self.store_path(text, true);
    }

    fn store_path(&mut self, text: &str, keep_any_ext: bool) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .filter(|e| keep_any_ext || !is_format_ext(e));
    }
}

fn is_format_ext(ext: &str) -> bool {
    [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Json]
        .iter()
        .any(|f| f.ext().eq_ignore_ascii_case(ext))
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
