mod csv_parser;
mod errors;
mod header_resolver;
mod normalizer;

use std::path::Path;
use tracing::{debug, info};

use crate::models::Transaction;

use header_resolver::CanonicalField;

pub use csv_parser::parse;
pub use errors::IngestError;
pub use header_resolver::resolve_headers;
pub use normalizer::normalize;

/// Loose file type check: the file has to declare itself as CSV through its extension.
pub fn ensure_csv(path: &Path) -> Result<(), IngestError> {
    let is_csv = path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    if is_csv {
        Ok(())
    } else {
        Err(IngestError::NotCsv(path.display().to_string()))
    }
}

/// Runs parse, header resolution and normalization over the full text of a file.
///
/// Pure: nothing is retained between calls, so every invocation starts with a fresh
/// synthetic ID counter.
///
/// # Errors
/// Returns the dataset-level `IngestError` describing why nothing could be loaded.
pub fn ingest(text: &str) -> Result<Vec<Transaction>, IngestError> {
    let rows = parse(text);

    if rows.is_empty() {
        let logical_lines = text.lines().filter(|line| !line.trim().is_empty()).count();

        return Err(if logical_lines < 2 { IngestError::TooFewLines } else { IngestError::NoRows });
    }

    let headers = resolve_headers(&rows);
    debug!("Resolved [{}] of [{}] canonical fields", headers.len(), CanonicalField::ALL.len());

    let transactions = normalize(&rows, &headers)?;

    if transactions.is_empty() {
        return Err(IngestError::NoValidTransactions);
    }

    info!("Normalized [{}] transactions from [{}] parsed rows", transactions.len(), rows.len());

    Ok(transactions)
}
