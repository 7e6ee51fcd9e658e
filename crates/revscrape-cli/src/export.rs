//! JSON and CSV output for scrape results.
//!
//! The JSON file is the batch result verbatim. CSV files are one per
//! listing, one row per review, with nested objects flattened into dotted
//! column names (`consumer.displayName`).

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use revscrape_scraper::parse::extract_business_unit;
use revscrape_scraper::{ReviewRecord, ScrapeResult};

/// Write the batch result as a pretty-printed JSON array of `{url, reviews}`.
pub(crate) fn write_json(results: &[ScrapeResult], path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating JSON output {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)
        .with_context(|| format!("writing JSON output {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

/// Flatten one review into `dotted.key -> cell` pairs.
///
/// Objects recurse; empty objects produce no columns. Arrays stay whole and
/// are rendered as compact JSON. Strings are written raw, `null` as an empty
/// cell, other scalars via their JSON text.
pub(crate) fn flatten_record(record: &ReviewRecord) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (key, value) in record {
        flatten_into(key, value, &mut out);
    }
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{prefix}.{key}"), nested, out);
            }
        }
        Value::Null => {
            out.insert(prefix.to_owned(), String::new());
        }
        Value::String(s) => {
            out.insert(prefix.to_owned(), s.clone());
        }
        other => {
            out.insert(prefix.to_owned(), other.to_string());
        }
    }
}

/// Row-oriented view of a listing's reviews.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ReviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Build a table whose columns are the union of every record's flattened
/// keys, in first-seen order. Cells a record lacks are left empty.
pub(crate) fn reviews_to_table(reviews: &[ReviewRecord]) -> ReviewTable {
    let flattened: Vec<BTreeMap<String, String>> = reviews.iter().map(flatten_record).collect();

    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for row in &flattened {
        for key in row.keys() {
            if seen.insert(key.as_str()) {
                headers.push(key.clone());
            }
        }
    }

    let rows = flattened
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| row.get(h).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    ReviewTable { headers, rows }
}

/// Write a listing's reviews as CSV. An empty review list yields an empty file.
pub(crate) fn write_csv(reviews: &[ReviewRecord], path: &Path) -> anyhow::Result<()> {
    let table = reviews_to_table(reviews);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV output {}", path.display()))?;
    if !table.headers.is_empty() {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// `<business-unit>_reviews.csv`, with anything outside `[A-Za-z0-9._-]`
/// replaced so the name is safe on every filesystem.
pub(crate) fn csv_file_name(url: &str) -> String {
    let stem = extract_business_unit(url)
        .or_else(|| url.trim_end_matches('/').rsplit('/').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("listing");
    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}_reviews.csv")
}
