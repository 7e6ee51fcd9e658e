use crate::app_config::{AppConfig, Environment, MAX_PAGES_CEILING};
use crate::ConfigError;

/// Desktop Chrome user agent. The review site rejects requests that do not
/// look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";

pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("REVSCRAPE_ENV", "development"));
    let log_level = or_default("REVSCRAPE_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("REVSCRAPE_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64("REVSCRAPE_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("REVSCRAPE_USER_AGENT", DEFAULT_USER_AGENT);
    let accept_language = or_default("REVSCRAPE_ACCEPT_LANGUAGE", DEFAULT_ACCEPT_LANGUAGE);

    let default_max_pages = parse_u32("REVSCRAPE_DEFAULT_MAX_PAGES", "10")?;
    if !(1..=MAX_PAGES_CEILING).contains(&default_max_pages) {
        return Err(ConfigError::InvalidEnvVar {
            var: "REVSCRAPE_DEFAULT_MAX_PAGES".to_string(),
            reason: format!("must be between 1 and {MAX_PAGES_CEILING}, got {default_max_pages}"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        accept_language,
        default_max_pages,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
