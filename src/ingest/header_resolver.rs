use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::debug;

use crate::ingest::csv_parser::{normalize_header, RawRow};

/// The seven attributes every vendor export is normalized toward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CanonicalField {
    TransactionId,
    PayoutId,
    Amount,
    Status,
    Recipient,
    PaymentMethod,
    Date
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 7] = [
        CanonicalField::TransactionId,
        CanonicalField::PayoutId,
        CanonicalField::Amount,
        CanonicalField::Status,
        CanonicalField::Recipient,
        CanonicalField::PaymentMethod,
        CanonicalField::Date
    ];

    /// Accepted header spellings, highest priority first.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::TransactionId => &["transaction_id", "transactionid", "id"],
            CanonicalField::PayoutId => &["payout_id", "payoutid"],
            CanonicalField::Amount => &["amount", "value", "total", "transaction_amount"],
            CanonicalField::Status => &["status", "state"],
            CanonicalField::Recipient => &["recipient", "to", "receiver", "recipient_name"],
            CanonicalField::PaymentMethod => &["payment_method", "paymentmethod", "method", "payment_type"],
            CanonicalField::Date => &["date", "timestamp", "created_at", "created"]
        }
    }
}

impl Display for CanonicalField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CanonicalField::TransactionId => "transactionId",
            CanonicalField::PayoutId => "payoutId",
            CanonicalField::Amount => "amount",
            CanonicalField::Status => "status",
            CanonicalField::Recipient => "recipient",
            CanonicalField::PaymentMethod => "paymentMethod",
            CanonicalField::Date => "date"
        };

        formatter.write_str(name)
    }
}

/// Canonical field to the observed header it was resolved from.
///
/// Resolved once per dataset and never mutated afterwards. Fields without a
/// matching header are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    resolved: HashMap<CanonicalField, String>
}

impl HeaderMap {
    /// Resolves each canonical field against the observed headers.
    ///
    /// The first synonym (in priority order) that matches any observed header wins.
    /// Observed headers are compared after header normalization, so `Payment Method`
    /// and `payment_method` are equivalent.
    pub fn resolve<'a>(observed: impl IntoIterator<Item = &'a str>) -> Self {
        let mut observed: Vec<(String, &str)> = observed.into_iter()
            .map(|header| (normalize_header(header), header))
            .collect();

        //NOTE: Sorting keeps the outcome independent of column order when two headers normalize identically
        observed.sort();

        let mut resolved = HashMap::new();

        for field in CanonicalField::ALL {
            let found = field.synonyms().iter().find_map(|synonym| {
                observed.iter().find(|(normalized, _)| normalized == synonym).map(|(_, original)| *original)
            });

            if let Some(header) = found {
                debug!("Resolved [{field}] from header [{header}]");
                resolved.insert(field, header.to_string());
            }
        }

        Self { resolved }
    }

    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.resolved.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }
}

/// Resolves the header map from the headers of the first row.
pub fn resolve_headers(rows: &[RawRow]) -> HeaderMap {
    match rows.first() {
        Some(row) => HeaderMap::resolve(row.headers()),
        None => HeaderMap::default()
    }
}
