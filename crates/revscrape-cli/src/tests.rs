use super::*;

#[test]
fn parses_scrape_with_urls_and_max_pages() {
    let cli = Cli::try_parse_from([
        "revscrape",
        "scrape",
        "https://www.trustpilot.com/review/a.io",
        "https://www.trustpilot.com/review/b.io",
        "--max-pages",
        "2",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Scrape(args)) => {
            assert_eq!(args.urls.len(), 2);
            assert_eq!(args.max_pages, Some(2));
            assert_eq!(args.out.to_str(), Some("companies_data.json"));
            assert!(args.csv_dir.is_none());
            assert!(args.targets_file.is_none());
        }
        other => panic!("expected scrape command, got: {other:?}"),
    }
}

#[test]
fn scrape_max_pages_defaults_to_none() {
    let cli = Cli::try_parse_from(["revscrape", "scrape", "https://h/review/a.io"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Scrape(ScrapeArgs {
            max_pages: None,
            ..
        }))
    ));
}

#[test]
fn scrape_rejects_zero_max_pages() {
    let result = Cli::try_parse_from(["revscrape", "scrape", "--max-pages", "0"]);
    assert!(result.is_err());
}

#[test]
fn scrape_rejects_max_pages_above_fifty() {
    let result = Cli::try_parse_from(["revscrape", "scrape", "--max-pages", "51"]);
    assert!(result.is_err());
}

#[test]
fn parses_scrape_outputs_and_targets_file() {
    let cli = Cli::try_parse_from([
        "revscrape",
        "scrape",
        "--targets-file",
        "config/targets.yaml",
        "--out",
        "out/reviews.json",
        "--csv-dir",
        "out/csv",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Scrape(args)) => {
            assert!(args.urls.is_empty());
            assert_eq!(
                args.targets_file.as_deref().and_then(|p| p.to_str()),
                Some("config/targets.yaml")
            );
            assert_eq!(args.out.to_str(), Some("out/reviews.json"));
            assert_eq!(
                args.csv_dir.as_deref().and_then(|p| p.to_str()),
                Some("out/csv")
            );
        }
        other => panic!("expected scrape command, got: {other:?}"),
    }
}

#[test]
fn parses_config_command() {
    let cli = Cli::try_parse_from(["revscrape", "config"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Config)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["revscrape"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
