use chrono::NaiveDate;

use crate::models::{Status, Transaction};

/// Optional inclusive day bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>
}

impl DateRange {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }
}

/// The filter selection owned by the dashboard.
///
/// Each constraint left at its default (no statuses, empty recipient, open range)
/// imposes no restriction; active constraints are combined with a logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub statuses: Vec<Status>,
    pub recipient: String,
    pub date_range: DateRange
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.recipient.is_empty() && self.date_range == DateRange::default()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let status_match = self.statuses.is_empty() || self.statuses.contains(&transaction.status);
        let recipient_match = transaction.recipient.to_lowercase().contains(&self.recipient.to_lowercase());

        //NOTE: Time of day is ignored, both sides are compared as UTC calendar days
        let date_match = self.date_range.contains(transaction.date.date_naive());

        status_match && recipient_match && date_match
    }
}

/// Returns the ordered subsequence of `transactions` accepted by `filters`.
pub fn filter(transactions: &[Transaction], filters: &Filters) -> Vec<Transaction> {
    transactions.iter()
        .filter(|transaction| filters.matches(transaction))
        .cloned()
        .collect()
}
