use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export error: could not flush CSV output: {0}")]
    Flush(String),
    #[error("Export error: CSV output is not valid UTF-8")]
    Encoding,
    #[error("Export error: could not write file: {0}")]
    Io(#[from] io::Error)
}
