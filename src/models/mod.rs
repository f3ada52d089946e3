mod errors;
#[cfg(test)]
mod tests;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

pub use errors::StatusParseError;
pub use transaction::Transaction;

/// The closed set of payout states every source spelling is folded into.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Status {
    Completed,
    Pending,
    Failed
}

impl Status {
    /// Display order used by the status series and the summary cards.
    pub const ALL: [Status; 3] = [Status::Completed, Status::Pending, Status::Failed];

    /// Folds a raw vendor status into a canonical one.
    ///
    /// Matching is case-insensitive. Anything unrecognised, including an absent
    /// or empty value, is treated as `Completed`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let raw = raw.map(|value| value.trim().to_lowercase()).unwrap_or_default();

        match raw.as_str() {
            "pending" | "processing" | "in_progress" => Status::Pending,
            "failed" | "error" | "declined" => Status::Failed,
            _ => Status::Completed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::Pending => "Pending",
            Status::Failed => "Failed"
        }
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Strict parsing of the canonical names, used for filter selections.
impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Status::ALL.into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| StatusParseError::Unknown(value.to_string()))
    }
}
