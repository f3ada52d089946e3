use clap::ValueEnum;
use std::cmp::Ordering;

use crate::models::Transaction;

pub const ROWS_PER_PAGE: usize = 10;

#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum, Debug)]
pub enum SortKey {
    #[default]
    Date,
    Amount
}

#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum, Debug)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc
}

/// Ordering of the transaction listing, newest first unless changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sorting {
    pub key: SortKey,
    pub direction: SortDirection
}

impl Sorting {
    /// Selecting the active key flips its direction, selecting another key starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = match (self.key == key, self.direction) {
            (true, SortDirection::Asc) => SortDirection::Desc,
            _ => SortDirection::Asc
        };

        Self { key, direction }
    }

    fn compare(&self, left: &Transaction, right: &Transaction) -> Ordering {
        let ordering = match self.key {
            SortKey::Date => left.date.cmp(&right.date),
            SortKey::Amount => left.amount.total_cmp(&right.amount)
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse()
        }
    }
}

/// One page of the sorted listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based, clamped into the available range.
    pub number: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub rows: Vec<Transaction>
}

/// Stable sort: transactions with equal keys keep their load order.
pub fn sort(transactions: &[Transaction], sorting: Sorting) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|left, right| sorting.compare(left, right));

    sorted
}

pub fn paginate(transactions: &[Transaction], page: usize) -> Page {
    let total_rows = transactions.len();
    let total_pages = total_rows.div_ceil(ROWS_PER_PAGE);
    let number = page.clamp(1, total_pages.max(1));

    let rows = transactions.iter()
        .skip((number - 1) * ROWS_PER_PAGE)
        .take(ROWS_PER_PAGE)
        .cloned()
        .collect();

    Page { number, total_pages, total_rows, rows }
}
