use std::io;

use thiserror::Error;

/// Dataset-level ingestion failures.
///
/// Row-level defects never show up here, they are dropped by the parser and the
/// normalizer. The messages are written to be shown to the user as-is.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid file type: [{0}] is not a CSV file, please upload a valid CSV file")]
    NotCsv(String),
    #[error("Unreadable file: {0}")]
    Unreadable(#[from] io::Error),
    #[error("Empty or invalid CSV: a header line and at least one data line are required")]
    TooFewLines,
    #[error("Empty or invalid CSV: no data rows could be parsed")]
    NoRows,
    #[error("No transactions found: the CSV has no amount column (accepted headers: amount, value, total, transaction_amount)")]
    MissingAmountColumn,
    #[error("No transactions found: no row had both a valid amount and a valid date, please check the amount and date columns")]
    NoValidTransactions
}

impl IngestError {
    /// Whether the file itself was rejected, as opposed to its content.
    pub fn is_structural(&self) -> bool {
        matches!(self, IngestError::NotCsv(_) | IngestError::Unreadable(_) | IngestError::TooFewLines)
    }
}
