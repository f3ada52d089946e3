mod analysis;
mod export;
mod ingest;
mod models;
mod state;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tokio::fs;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::analysis::{DateRange, Filters, SortDirection, SortKey, Sorting};
use crate::export::DEFAULT_EXPORT_FILENAME;
use crate::ingest::{ensure_csv, IngestError};
use crate::models::Status;
use crate::state::DashboardState;
use crate::types::Usd;

/// Load a payout CSV export, filter it, summarize it and optionally re-export it.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Payout CSV file
    input: PathBuf,

    /// Only keep these statuses (Completed, Pending, Failed)
    #[arg(long, value_delimiter = ',')]
    status: Vec<Status>,

    /// Only keep recipients containing this text (case-insensitive)
    #[arg(long, default_value = "")]
    recipient: String,

    /// Only keep payouts on or after this day (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Only keep payouts on or before this day (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Write the filtered payouts to a CSV file
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILENAME)]
    export: Option<PathBuf>,

    /// Print one page of the filtered transactions
    #[arg(long)]
    list: bool,

    /// Listing page to print, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Listing sort column
    #[arg(long, value_enum, default_value_t)]
    sort: SortKey,

    /// Listing sort direction
    #[arg(long, value_enum, default_value_t)]
    order: SortDirection,

    /// Verbosity of the log written to stderr
    #[arg(long, value_enum, default_value_t)]
    log_level: LogLevel
}

#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    #[default]
    Error
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR
        }
    }
}

impl Cli {
    fn filters(&self) -> Filters {
        let mut statuses = Vec::new();

        for status in &self.status {
            if !statuses.contains(status) {
                statuses.push(*status);
            }
        }

        Filters {
            statuses,
            recipient: self.recipient.clone(),
            date_range: DateRange { from: self.from, to: self.to }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.into());

    let mut dashboard = DashboardState::new();

    let timer = Instant::now();

    if let Err(error) = upload(&mut dashboard, &cli).await {
        error!("{error}");
        eprintln!("{error}");
        exit(if error.is_structural() { 2 } else { 1 });
    }

    info!("Loaded transactions in: {:?}", timer.elapsed());

    dashboard.set_filters(cli.filters());
    dashboard.set_sorting(Sorting { key: cli.sort, direction: cli.order });

    if !dashboard.filters().is_empty() {
        info!("Applying filters: {:?}", dashboard.filters());
    }

    write_report_to_stdout(&dashboard)?;

    if cli.list {
        write_listing_to_stdout(&dashboard, cli.page)?;
    }

    if let Some(path) = &cli.export {
        match dashboard.export(path).await? {
            0 => eprintln!("Export skipped: no data to export"),
            rows => eprintln!("Export successful: {} rows exported to {}", rows, path.display())
        }
    }

    Ok(())
}

async fn upload(dashboard: &mut DashboardState, cli: &Cli) -> Result<usize, IngestError> {
    ensure_csv(&cli.input)?;

    //NOTE: The whole file is read at once, every later stage works on the fully materialized text
    let text = fs::read_to_string(&cli.input).await?;

    dashboard.upload(&text)
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(dashboard: &DashboardState) -> Result<()> {
    let aggregates = dashboard.aggregates();
    let summary = &aggregates.summary;
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "{} of {} transactions shown", summary.count, dashboard.total_count())?;
    writeln!(output)?;
    writeln!(output, "Total Volume: {}", Usd(summary.total_volume))?;
    writeln!(output, "Total Payouts: {}", summary.count)?;

    for status in Status::ALL {
        writeln!(output, "{}: {}", status, summary.count_for(status))?;
    }

    writeln!(output)?;
    writeln!(output, "date,total")?;

    for entry in &aggregates.time_series {
        writeln!(output, "{},{:.2}", entry.date, entry.total)?;
    }

    writeln!(output)?;
    writeln!(output, "status,count")?;

    for entry in &aggregates.status_series {
        writeln!(output, "{},{}", entry.status, entry.count)?;
    }

    output.flush()?;

    Ok(())
}

fn write_listing_to_stdout(dashboard: &DashboardState, page: usize) -> Result<()> {
    let page = dashboard.listing(page);
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output)?;
    writeln!(output, "{:<24} {:<10} {:<24} {:>14} Status", "Transaction ID", "Date", "Recipient", "Amount")?;

    if page.rows.is_empty() {
        writeln!(output, "No results found.")?;
    }

    for transaction in &page.rows {
        writeln!(
            output,
            "{:<24} {:<10} {:<24} {:>14} {}",
            transaction.transaction_id,
            transaction.date.date_naive(),
            transaction.recipient,
            Usd(transaction.amount).to_string(),
            transaction.status
        )?;
    }

    writeln!(output, "{} transactions total. Page {} of {}", page.total_rows, page.number, page.total_pages)?;

    output.flush()?;

    Ok(())
}
