use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Status, Transaction};

/// Sum of amounts for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize
}

/// Top-level indicators shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_volume: f64,
    pub completed: usize,
    pub pending: usize,
    pub failed: usize
}

impl Summary {
    pub fn count_for(&self, status: Status) -> usize {
        match status {
            Status::Completed => self.completed,
            Status::Pending => self.pending,
            Status::Failed => self.failed
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    /// Ascending by date, days without transactions are omitted.
    pub time_series: Vec<DailyTotal>,
    /// Always Completed, Pending, Failed in that order.
    pub status_series: [StatusCount; 3],
    pub summary: Summary
}

pub fn aggregate(transactions: &[Transaction]) -> Aggregates {
    Aggregates {
        time_series: time_series(transactions),
        status_series: status_series(transactions),
        summary: summarize(transactions)
    }
}

pub fn time_series(transactions: &[Transaction]) -> Vec<DailyTotal> {
    let mut daily_totals = BTreeMap::<NaiveDate, f64>::new();

    for transaction in transactions {
        *daily_totals.entry(transaction.date.date_naive()).or_insert(0.0) += transaction.amount;
    }

    daily_totals.into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

pub fn status_series(transactions: &[Transaction]) -> [StatusCount; 3] {
    Status::ALL.map(|status| StatusCount {
        status,
        count: transactions.iter().filter(|transaction| transaction.status == status).count()
    })
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    transactions.iter().fold(Summary::default(), |mut summary, transaction| {
        summary.count += 1;
        summary.total_volume += transaction.amount;

        match transaction.status {
            Status::Completed => summary.completed += 1,
            Status::Pending => summary.pending += 1,
            Status::Failed => summary.failed += 1
        }

        summary
    })
}
