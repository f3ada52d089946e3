use super::DashboardState;

use anyhow::Result;
use tempfile::tempdir;

use crate::analysis::{Filters, SortDirection, SortKey, Sorting};
use crate::ingest::IngestError;
use crate::models::Status;

const FIRST_UPLOAD: &str = "id,amount,status,recipient,date\n1,100.50,completed,Bob,2024-01-05\n2,-5,pending,Ann,2024-01-06";
const SECOND_UPLOAD: &str = "transaction_id,value,state,receiver,created_at\nA,10,failed,Zoe,2024-02-01";

fn pending_only() -> Filters {
    Filters { statuses: vec![Status::Pending], ..Filters::default() }
}

#[test]
fn test_upload_loads_transactions_and_filters_narrow_the_view() -> Result<()> {
    let mut state = DashboardState::new();

    assert_eq!(state.upload(FIRST_UPLOAD)?, 2);

    state.set_filters(pending_only());
    let filtered = state.filtered();

    assert_eq!(state.total_count(), 2);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].transaction_id, "2");

    Ok(())
}

#[test]
fn test_new_upload_replaces_dataset_and_resets_filters() -> Result<()> {
    let mut state = DashboardState::new();
    state.upload(FIRST_UPLOAD)?;
    state.set_filters(pending_only());

    state.upload(SECOND_UPLOAD)?;

    assert_eq!(state.total_count(), 1);
    assert!(state.filters().is_empty());
    assert_eq!(state.filtered()[0].transaction_id, "A");

    Ok(())
}

#[test]
fn test_failed_upload_leaves_state_untouched() -> Result<()> {
    let mut state = DashboardState::new();
    state.upload(FIRST_UPLOAD)?;
    state.set_filters(pending_only());

    let result = state.upload("id,recipient,date\n1,Bob,2024-01-01");

    assert!(matches!(result, Err(IngestError::MissingAmountColumn)));
    assert_eq!(state.total_count(), 2);
    assert_eq!(state.filters(), &pending_only());

    Ok(())
}

#[test]
fn test_aggregates_follow_the_filtered_view() -> Result<()> {
    let mut state = DashboardState::new();
    state.upload(FIRST_UPLOAD)?;

    assert_eq!(state.aggregates().summary.count, 2);

    state.set_filters(pending_only());
    let aggregates = state.aggregates();

    assert_eq!(aggregates.summary.count, 1);
    assert_eq!(aggregates.summary.total_volume, -5.0);
    assert_eq!(aggregates.time_series.len(), 1);

    state.reset_filters();

    assert_eq!(state.aggregates().summary.count, 2);

    Ok(())
}

#[test]
fn test_listing_pages_through_the_filtered_view_in_sort_order() -> Result<()> {
    let mut state = DashboardState::new();
    state.upload("id,amount,status,date\n1,30,completed,2024-01-01\n2,10,pending,2024-01-03\n3,20,completed,2024-01-02")?;

    let newest_first: Vec<_> = state.listing(1).rows.iter().map(|transaction| transaction.transaction_id.clone()).collect();

    assert_eq!(newest_first, vec!["2", "3", "1"]);

    state.toggle_sorting(SortKey::Amount);
    state.set_filters(Filters { statuses: vec![Status::Completed], ..Filters::default() });

    let page = state.listing(1);
    let cheapest_first: Vec<_> = page.rows.iter().map(|transaction| transaction.transaction_id.clone()).collect();

    assert_eq!(state.sorting(), Sorting { key: SortKey::Amount, direction: SortDirection::Asc });
    assert_eq!(cheapest_first, vec!["3", "1"]);
    assert_eq!(page.total_rows, 2);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

#[test]
fn test_sorting_survives_a_new_upload() -> Result<()> {
    let mut state = DashboardState::new();
    let by_amount = Sorting { key: SortKey::Amount, direction: SortDirection::Desc };

    state.set_sorting(by_amount);
    state.upload(FIRST_UPLOAD)?;
    state.upload(SECOND_UPLOAD)?;

    assert_eq!(state.sorting(), by_amount);

    Ok(())
}

#[tokio::test]
async fn test_export_writes_the_filtered_view() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("filtered-payouts.csv");

    let mut state = DashboardState::new();
    state.upload(FIRST_UPLOAD)?;
    state.set_filters(pending_only());

    assert_eq!(state.export(&path).await?, 1);

    let written = std::fs::read_to_string(&path)?;

    assert!(written.lines().nth(1).is_some_and(|line| line.starts_with("2,,-5,Pending,Ann,N/A,")));

    Ok(())
}
