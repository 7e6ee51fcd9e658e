//! The `scrape` command: collect targets, run the batch, export the results.
//!
//! Per-listing failures are reported and skipped. The command only fails
//! when no listing succeeded or the output cannot be written.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use revscrape_core::{AppConfig, MAX_PAGES_CEILING};
use revscrape_scraper::{BatchReport, ClientSettings, ReviewClient};

use crate::export;

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Listing URLs whose path contains `review/<business-unit>`
    pub urls: Vec<String>,

    /// YAML file with a `targets:` list of listing URLs
    #[arg(long)]
    pub targets_file: Option<PathBuf>,

    /// Maximum review pages to fetch per listing (defaults to `REVSCRAPE_DEFAULT_MAX_PAGES`)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGES_CEILING)))]
    pub max_pages: Option<u32>,

    /// Where to write the combined JSON output
    #[arg(long, default_value = "companies_data.json")]
    pub out: PathBuf,

    /// Directory for one `<listing>_reviews.csv` per succeeded listing
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,
}

/// Run a scrape and write its outputs.
///
/// # Errors
///
/// Returns an error if no targets are given, the targets file is invalid,
/// the HTTP client cannot be built, an output file cannot be written, or
/// every listing failed.
pub(crate) async fn run_scrape(config: &AppConfig, args: ScrapeArgs) -> anyhow::Result<()> {
    let targets = collect_targets(&args.urls, args.targets_file.as_deref())?;
    if targets.is_empty() {
        anyhow::bail!("no listing URLs given; pass them as arguments or via --targets-file");
    }

    let max_pages = args.max_pages.unwrap_or(config.default_max_pages);
    let client = ReviewClient::new(&client_settings(config))?;

    tracing::info!(targets = targets.len(), max_pages, "starting review scrape");
    let report = client.scrape_many(targets, max_pages).await;

    export::write_json(&report.results, &args.out)?;
    tracing::info!(path = %args.out.display(), "wrote JSON output");

    if let Some(dir) = &args.csv_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating CSV directory {}", dir.display()))?;
        for result in &report.results {
            let path = dir.join(export::csv_file_name(&result.url));
            export::write_csv(&result.reviews, &path)?;
            tracing::info!(url = %result.url, path = %path.display(), "wrote CSV output");
        }
    }

    print_summary(&report);

    if report.all_failed() {
        anyhow::bail!("all {} listings failed", report.failures.len());
    }
    Ok(())
}

fn client_settings(config: &AppConfig) -> ClientSettings {
    ClientSettings {
        request_timeout_secs: config.request_timeout_secs,
        connect_timeout_secs: config.connect_timeout_secs,
        user_agent: config.user_agent.clone(),
        accept_language: config.accept_language.clone(),
    }
}

/// Merge positional URLs with the targets file, dropping blanks and repeats
/// while keeping first-seen order.
fn collect_targets(urls: &[String], targets_file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let mut targets: Vec<String> = urls
        .iter()
        .flat_map(|u| u.lines())
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_owned)
        .collect();

    if let Some(path) = targets_file {
        let file = revscrape_core::load_targets(path)?;
        targets.extend(file.targets);
    }

    let mut seen = std::collections::HashSet::new();
    targets.retain(|t| seen.insert(t.clone()));
    Ok(targets)
}

fn print_summary(report: &BatchReport) {
    println!(
        "Scraped {} reviews from {}/{} listings",
        report.review_count(),
        report.results.len(),
        report.attempted()
    );
    for result in &report.results {
        println!("  ok      {} ({} reviews)", result.url, result.reviews.len());
    }
    for failure in &report.failures {
        println!("  failed  {}: {}", failure.url, failure.error);
    }
}
