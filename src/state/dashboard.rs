use std::path::Path;

use crate::analysis::{aggregate, filter, paginate, sort, Aggregates, Filters, Page, SortKey, Sorting};
use crate::export::{export_csv, ExportError};
use crate::ingest::{ingest, IngestError};
use crate::models::Transaction;

/// The loaded dataset, the active filter selection and the listing order.
///
/// All mutation goes through explicit transitions: a successful upload replaces the
/// collection wholesale and clears the filters, a failed one changes nothing. The
/// listing order survives uploads. Every derived view is recomputed from scratch on
/// request.
#[derive(Debug, Default)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    filters: Filters,
    sorting: Sorting
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests the full text of an uploaded file and returns the number of loaded transactions.
    pub fn upload(&mut self, text: &str) -> Result<usize, IngestError> {
        let transactions = ingest(text)?;

        self.transactions = transactions;
        self.reset_filters();

        Ok(self.transactions.len())
    }

    pub fn total_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
    }

    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
    }

    pub fn filtered(&self) -> Vec<Transaction> {
        filter(&self.transactions, &self.filters)
    }

    pub fn sorting(&self) -> Sorting {
        self.sorting
    }

    pub fn set_sorting(&mut self, sorting: Sorting) {
        self.sorting = sorting;
    }

    pub fn toggle_sorting(&mut self, key: SortKey) {
        self.sorting = self.sorting.toggle(key);
    }

    /// One page of the filtered view in the current listing order.
    pub fn listing(&self, page: usize) -> Page {
        paginate(&sort(&self.filtered(), self.sorting), page)
    }

    pub fn aggregates(&self) -> Aggregates {
        aggregate(&self.filtered())
    }

    /// Exports the filtered view, returning how many rows were written (zero means no file).
    pub async fn export(&self, path: &Path) -> Result<usize, ExportError> {
        export_csv(&self.filtered(), path).await
    }
}
