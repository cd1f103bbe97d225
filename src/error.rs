use std::io;

use thiserror::Error;

/// Notice shown when the chosen file is not an Excel workbook
pub const WRONG_FILE_TYPE_NOTICE: &str = "لطفا یک فایل اکسل (xlsx یا xls) انتخاب کنید";

/// Notice shown for any failure while reading or parsing a workbook
pub const UNREADABLE_WORKBOOK_NOTICE: &str = "مشکلی در خواندن فایل اکسل پیش آمد";

/// Notice shown when writing a workbook fails
pub const EXPORT_FAILED_NOTICE: &str = "مشکلی در ساخت فایل اکسل پیش آمد";

/// Errors raised while turning an uploaded file into employee records
///
/// Field-level problems never show up here: a workbook either normalizes
/// completely or the upload is rejected with one of these variants.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file name does not end in `.xlsx` or `.xls`
    #[error("unsupported file type: {0}")]
    WrongFileType(String),

    /// The file could not be read from disk
    #[error("failed to read workbook: {0}")]
    Io(#[from] io::Error),

    /// The bytes could not be parsed as a workbook
    #[error("failed to parse workbook: {0}")]
    Workbook(String),

    /// The workbook parsed but contains no worksheet
    #[error("workbook contains no sheets")]
    NoSheets,
}

impl LoadError {
    /// User-facing notice for this failure
    pub fn notice(&self) -> &'static str {
        match self {
            LoadError::WrongFileType(_) => WRONG_FILE_TYPE_NOTICE,
            _ => UNREADABLE_WORKBOOK_NOTICE,
        }
    }
}

#[cfg(feature = "xlsx")]
impl From<calamine::Error> for LoadError {
    fn from(error: calamine::Error) -> Self {
        LoadError::Workbook(error.to_string())
    }
}

/// Errors raised while writing the template or a dataset export
#[derive(Debug, Error)]
pub enum ExportError {
    #[cfg(feature = "xlsx")]
    #[error("xlsx writer error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to write file: {0}")]
    Io(#[from] io::Error),

    #[error("Excel support requires the 'xlsx' feature")]
    Unsupported,
}

impl ExportError {
    pub fn notice(&self) -> &'static str {
        EXPORT_FAILED_NOTICE
    }
}

/// Errors raised while loading a [`crate::config::DashboardConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}
