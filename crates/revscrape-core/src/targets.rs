use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Marker that precedes the business-unit slug in every listing URL.
const LISTING_MARKER: &str = "review/";

/// A YAML file listing the review pages to scrape:
///
/// ```yaml
/// targets:
///   - https://www.trustpilot.com/review/www.example.com
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsFile {
    pub targets: Vec<String>,
}

/// Load and validate a targets file.
///
/// Entries are trimmed before validation.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_targets(path: &Path) -> Result<TargetsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TargetsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut targets_file: TargetsFile = serde_yaml::from_str(&content)?;
    for target in &mut targets_file.targets {
        *target = target.trim().to_string();
    }

    validate_targets(&targets_file)?;

    Ok(targets_file)
}

fn validate_targets(targets_file: &TargetsFile) -> Result<(), ConfigError> {
    if targets_file.targets.is_empty() {
        return Err(ConfigError::Validation(
            "targets list must contain at least one URL".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for target in &targets_file.targets {
        if target.is_empty() {
            return Err(ConfigError::Validation(
                "target URL must be non-empty".to_string(),
            ));
        }

        if !target.contains(LISTING_MARKER) {
            return Err(ConfigError::Validation(format!(
                "target '{target}' is not a listing URL; expected a '{LISTING_MARKER}<slug>' path"
            )));
        }

        if !seen.insert(target.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate target: '{target}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn file_with(targets: &[&str]) -> TargetsFile {
        TargetsFile {
            targets: targets.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn validate_accepts_listing_urls() {
        let targets = file_with(&[
            "https://www.trustpilot.com/review/www.example.com",
            "https://www.trustpilot.com/review/acme.io",
        ]);
        assert!(validate_targets(&targets).is_ok());
    }

    #[test]
    fn validate_rejects_empty_list() {
        let err = validate_targets(&file_with(&[])).unwrap_err();
        assert!(err.to_string().contains("at least one URL"));
    }

    #[test]
    fn validate_rejects_url_without_marker() {
        let err =
            validate_targets(&file_with(&["https://www.trustpilot.com/categories"])).unwrap_err();
        assert!(err.to_string().contains("not a listing URL"));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let err = validate_targets(&file_with(&[
            "https://www.trustpilot.com/review/acme.io",
            "https://www.trustpilot.com/review/acme.io",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("duplicate target"));
    }

    #[test]
    fn load_targets_trims_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "targets:\n  - \"  https://www.trustpilot.com/review/acme.io  \""
        )
        .unwrap();

        let loaded = load_targets(file.path()).unwrap();
        assert_eq!(
            loaded.targets,
            vec!["https://www.trustpilot.com/review/acme.io".to_string()]
        );
    }

    #[test]
    fn load_targets_reports_missing_file() {
        let err = load_targets(Path::new("/nonexistent/targets.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::TargetsFileIo { .. }));
    }

    #[test]
    fn load_targets_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "targets: 12").unwrap();
        let err = load_targets(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TargetsFileParse(_)));
    }
}
