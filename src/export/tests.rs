use super::csv_exporter::to_csv;
use super::export_csv;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use crate::ingest::{normalize, parse, resolve_headers};
use crate::models::{Status, Transaction};

fn create_transaction(transaction_id: &str, amount: f64, status: Status, recipient: &str) -> Result<Transaction> {
    let date = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).single()
        .ok_or_else(|| anyhow!("Invalid test timestamp"))?;

    Ok(Transaction {
        transaction_id: transaction_id.to_string(),
        payout_id: "po-1".to_string(),
        amount,
        status,
        recipient: recipient.to_string(),
        payment_method: "ach".to_string(),
        date
    })
}

#[test]
fn test_export_writes_fixed_header_and_iso_timestamps() -> Result<()> {
    let csv = to_csv(&[create_transaction("tx-1", 100.5, Status::Pending, "Bob")?])?
        .ok_or_else(|| anyhow!("Export produced nothing"))?;
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some("transactionId,payoutId,amount,status,recipient,paymentMethod,date"));
    assert_eq!(lines.next(), Some("tx-1,po-1,100.5,Pending,Bob,ach,2024-01-05T10:30:00.000Z"));
    assert_eq!(lines.next(), None);

    Ok(())
}

#[test]
fn test_export_quotes_values_containing_the_delimiter() -> Result<()> {
    let csv = to_csv(&[create_transaction("tx-1", 1200.0, Status::Completed, "Smith, John")?])?
        .ok_or_else(|| anyhow!("Export produced nothing"))?;

    assert!(csv.contains(",1200,Completed,\"Smith, John\",ach,"));

    Ok(())
}

#[test]
fn test_export_of_nothing_is_a_no_op() -> Result<()> {
    assert_eq!(to_csv(&[])?, None);

    Ok(())
}

#[test]
fn test_exported_csv_parses_back_into_the_same_records() -> Result<()> {
    let transactions = vec![
        create_transaction("tx-1", 100.5, Status::Completed, "Smith, John")?,
        create_transaction("tx-2", -5.0, Status::Pending, "Ann")?,
        create_transaction("tx-3", 0.1, Status::Failed, "N/A")?,
        create_transaction("tx-4", 12.0, Status::Completed, "Bob \"B\"")?,
        create_transaction("tx-5", 3.5, Status::Pending, "\"Quoted\", Inc")?,
    ];

    let csv = to_csv(&transactions)?.ok_or_else(|| anyhow!("Export produced nothing"))?;
    let rows = parse(&csv);
    let reparsed = normalize(&rows, &resolve_headers(&rows))?;

    assert_eq!(reparsed, transactions);

    Ok(())
}

#[tokio::test]
async fn test_export_file_is_written_only_when_there_is_data() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("filtered-payouts.csv");

    assert_eq!(export_csv(&[], &path).await?, 0);
    assert!(!path.exists());

    let transactions = vec![create_transaction("tx-1", 10.0, Status::Completed, "Bob")?];

    assert_eq!(export_csv(&transactions, &path).await?, 1);

    let written = std::fs::read_to_string(&path)?;

    assert_eq!(written.lines().count(), 2);

    Ok(())
}
