use crate::app_config::{AppConfig, Environment, MAX_HISTOGRAM_BINS};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("WAVESS_ENV", "development"))?;
    let log_level = or_default("WAVESS_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("WAVESS_DATA_DIR", "./data"));
    let posts_file = or_default("WAVESS_POSTS_FILE", "linkedin_post.csv");
    let audience_file = or_default("WAVESS_AUDIENCE_FILE", "audience_data.csv");
    let comments_file = or_default("WAVESS_COMMENTS_FILE", "comments_data.csv");
    let top_keywords = parse_usize("WAVESS_TOP_KEYWORDS", "5")?;
    let histogram_bins = parse_usize("WAVESS_HISTOGRAM_BINS", "10")?;
    let lexicon_path = lookup("WAVESS_LEXICON_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    if top_keywords == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "WAVESS_TOP_KEYWORDS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if histogram_bins > MAX_HISTOGRAM_BINS {
        return Err(ConfigError::InvalidEnvVar {
            var: "WAVESS_HISTOGRAM_BINS".to_string(),
            reason: format!("must be at most {MAX_HISTOGRAM_BINS}"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        posts_file,
        audience_file,
        comments_file,
        top_keywords,
        histogram_bins,
        lexicon_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "WAVESS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
