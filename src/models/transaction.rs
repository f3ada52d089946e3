use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::models::Status;

/// A single canonical payout record.
///
/// Instances are only built by the normalizer, which guarantees a finite `amount`,
/// a valid `date` and a non-empty `transaction_id`. The serde field names double
/// as the export header, so field order here is the export column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Source identifier, or a `generated_{row}_{occurrence}` identifier.
    pub transaction_id: String,
    /// Payout batch identifier, empty when the source has none.
    pub payout_id: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub status: Status,
    /// Defaults to `N/A`.
    pub recipient: String,
    /// Defaults to `N/A`.
    pub payment_method: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub date: DateTime<Utc>
}

//NOTE: Plain decimal notation, exponent forms would not survive the amount cleaning on re-import
fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(amount)
}

fn serialize_timestamp<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}
