use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Input directory '{path}' does not exist")]
    InputNotFound { path: PathBuf },

    #[error("Input path '{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory '{path}': {cause}")]
    DirectoryRead { path: PathBuf, cause: walkdir::Error },

    #[error("Index file '{path}' not found")]
    IndexFileNotFound { path: PathBuf },

    #[error("Failed to read index file '{path}': {cause}")]
    IndexFileRead { path: PathBuf, cause: io::Error },

    #[error("No URL column found in header of '{path}'")]
    MissingUrlColumn { path: PathBuf },

    #[error("Index file '{path}' has a header but no data row")]
    MissingDataRow { path: PathBuf },

    #[error(
        "Malformed row {line} in '{path}': expected more than {url_column} columns, found {found}"
    )]
    MalformedRow {
        path: PathBuf,
        line: usize,
        url_column: usize,
        found: usize,
    },

    #[error("No results found. Please check the directory structure and index files.")]
    NoResults,

    #[error("Plate barcode '{barcode}' is not an integer")]
    NonNumericBarcode { barcode: String },

    #[error("Failed to write CSV file '{path}': {cause}")]
    CsvWrite { path: PathBuf, cause: csv::Error },
}

pub type Result<T> = std::result::Result<T, ScanError>;
