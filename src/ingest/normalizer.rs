use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

use crate::ingest::csv_parser::RawRow;
use crate::ingest::errors::IngestError;
use crate::ingest::header_resolver::{CanonicalField, HeaderMap};
use crate::models::{Status, Transaction};

const NOT_AVAILABLE: &str = "N/A";

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S"
];

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y"
];

/// Hands out `generated_{row}_{occurrence}` identifiers for rows without one.
///
/// Occurrences are counted per grouping key (date, recipient, amount), so rows that
/// are otherwise identical still receive distinct identifiers. A generator must not
/// outlive a single ingestion pass.
#[derive(Debug, Default)]
pub struct IdGenerator {
    occurrences: HashMap<String, usize>
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `index` is the 0-based position of the row in the parsed sequence.
    pub fn next_id(&mut self, index: usize, date: Option<&str>, recipient: Option<&str>, amount: f64) -> String {
        let date = date.map(str::to_string).unwrap_or_else(|| Utc::now().to_rfc3339());
        let recipient = recipient.map(str::to_string).unwrap_or_else(|| format!("recipient_{index}"));
        let key = format!("{date}-{recipient}-{amount}");

        let occurrence = self.occurrences.entry(key).or_insert(0);
        *occurrence += 1;

        format!("generated_{}_{}", index + 1, occurrence)
    }
}

/// Turns parsed rows into canonical transactions, preserving order.
///
/// Rows with an unparseable amount or date are dropped silently (logged at debug level).
///
/// # Errors
/// Returns `IngestError::MissingAmountColumn` when no amount column was resolved, since
/// no row of such a dataset can ever produce a transaction.
pub fn normalize(rows: &[RawRow], headers: &HeaderMap) -> Result<Vec<Transaction>, IngestError> {
    let Some(amount_header) = headers.get(CanonicalField::Amount) else {
        return Err(IngestError::MissingAmountColumn);
    };

    let mut ids = IdGenerator::new();
    let mut transactions = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let value = |field: CanonicalField| {
            headers.get(field)
                .and_then(|header| row.get(header))
                .filter(|value| !value.is_empty())
        };

        let raw_amount = row.get(amount_header).unwrap_or_default();
        let Some(amount) = clean_amount(raw_amount) else {
            debug!("Row [{}] dropped: unparseable amount [{raw_amount}]", index + 1);
            continue;
        };

        let raw_date = value(CanonicalField::Date);
        let recipient = value(CanonicalField::Recipient);

        let transaction_id = match value(CanonicalField::TransactionId) {
            Some(transaction_id) => transaction_id.to_string(),
            None => ids.next_id(index, raw_date, recipient, amount)
        };

        let Some(date) = raw_date.and_then(parse_date) else {
            debug!("Row [{}] dropped: missing or unparseable date [{}]", index + 1, raw_date.unwrap_or_default());
            continue;
        };

        transactions.push(Transaction {
            transaction_id,
            payout_id: value(CanonicalField::PayoutId).unwrap_or_default().to_string(),
            amount,
            status: Status::from_raw(value(CanonicalField::Status)),
            recipient: recipient.unwrap_or(NOT_AVAILABLE).to_string(),
            payment_method: value(CanonicalField::PaymentMethod).unwrap_or(NOT_AVAILABLE).to_string(),
            date
        });
    }

    Ok(transactions)
}

/// Keeps only digits, `.` and `-`, then parses what is left.
///
/// Returns `None` unless the result is a finite number, so `$1,200.00` becomes `1200.0`
/// while `abc` or an empty cell is rejected.
pub fn clean_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars()
        .filter(|character| character.is_ascii_digit() || *character == '.' || *character == '-')
        .collect();

    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Parses the date formats commonly found in payout exports.
///
/// Values carrying an offset are converted to UTC, values without one are taken as UTC,
/// and date-only values land on midnight.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
        }
    }

    None
}
