use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use tracing::{debug, warn};

/// One data line keyed by its normalized header.
///
/// Only lives for the duration of a single ingestion pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: HashMap<String, String>
}

impl RawRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Splits raw CSV text into rows, in file order.
///
/// Every physical line is read on its own, so a defect stays local to its line:
/// whitespace-only lines are skipped, lines with an unbalanced quote or a field count
/// different from the header are dropped, and input without a header plus at least one
/// data line yields an empty vector rather than an error.
pub fn parse(text: &str) -> Vec<RawRow> {
    if logical_line_count(text) < 2 {
        return Vec::new();
    }

    let mut lines = text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let headers: Vec<String> = match lines.next().map(|(_, line)| read_fields(line)) {
        Some(Some(fields)) => fields.iter().map(|field| normalize_header(field)).collect(),
        _ => {
            warn!("CSV header could not be read");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();

    for (index, line) in lines {
        let Some(values) = read_fields(line) else {
            debug!("Line [{}] dropped: unbalanced quotes", index + 1);
            continue;
        };

        if values.len() != headers.len() {
            debug!("Line [{}] dropped: expected [{}] fields, found [{}]", index + 1, headers.len(), values.len());
            continue;
        }

        let fields = headers.iter().cloned().zip(values).collect();

        rows.push(RawRow::new(fields));
    }

    rows
}

/// Lower-cases a header token and replaces internal spaces with underscores.
pub fn normalize_header(header: &str) -> String {
    clean_token(header).to_lowercase().replace(' ', "_")
}

/// Strips surrounding whitespace and one optional quote character on each side.
fn clean_token(token: &str) -> &str {
    let token = token.trim();
    let token = token.strip_prefix('"').unwrap_or(token);
    let token = token.strip_suffix('"').unwrap_or(token);

    token.trim()
}

/// Reads the fields of a single line, unquoting and unescaping quoted values.
fn read_fields(line: &str) -> Option<Vec<String>> {
    let tokens = split_tokens(line)?;

    //NOTE: Tokens are re-joined without the padding around delimiters, so a quote after `, ` still opens a field
    let joined = tokens.join(",");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(joined.as_bytes());

    let mut record = StringRecord::new();

    match reader.read_record(&mut record) {
        Ok(true) => Some(record.iter().map(str::to_string).collect()),
        Ok(false) => None,
        Err(error) => {
            warn!("CSV record error: {error}");
            None
        }
    }
}

/// Splits a line on the commas outside quotes and trims each token.
///
/// Returns `None` when a quote is still open at the end of the line.
fn split_tokens(line: &str) -> Option<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (position, character) in line.char_indices() {
        match character {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                tokens.push(line[start..position].trim());
                start = position + 1;
            }
            _ => {}
        }
    }

    if in_quotes {
        return None;
    }

    tokens.push(line[start..].trim());

    Some(tokens)
}

fn logical_line_count(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
