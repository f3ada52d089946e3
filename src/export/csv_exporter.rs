use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::export::errors::ExportError;
use crate::models::Transaction;

pub const DEFAULT_EXPORT_FILENAME: &str = "filtered-payouts.csv";

/// Serializes transactions with the fixed column order
/// `transactionId,payoutId,amount,status,recipient,paymentMethod,date`.
///
/// Dates are written as ISO-8601 UTC timestamps and any value containing the
/// delimiter is quoted. Values are written as they are, nothing is re-validated.
/// Returns `None` when there is nothing to export.
pub fn to_csv(transactions: &[Transaction]) -> Result<Option<String>, ExportError> {
    if transactions.is_empty() {
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    let bytes = writer.into_inner()
        .map_err(|error| ExportError::Flush(error.to_string()))?;

    String::from_utf8(bytes)
        .map(Some)
        .map_err(|_| ExportError::Encoding)
}

/// Writes the CSV export to `path`.
///
/// A silent no-op for an empty collection; the returned row count lets callers
/// tell the two cases apart.
pub async fn export_csv(transactions: &[Transaction], path: &Path) -> Result<usize, ExportError> {
    let Some(csv) = to_csv(transactions)? else {
        return Ok(0);
    };

    fs::write(path, csv).await?;
    info!("Exported [{}] transactions to [{}]", transactions.len(), path.display());

    Ok(transactions.len())
}
