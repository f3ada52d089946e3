mod csv_exporter;
mod errors;
#[cfg(test)]
mod tests;

pub use csv_exporter::{export_csv, DEFAULT_EXPORT_FILENAME};
pub use errors::ExportError;
