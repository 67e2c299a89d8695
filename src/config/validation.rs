use crate::config::CrawlConfig;
use crate::ConfigError;

/// Validates the crawl configuration
///
/// The seed URL is not checked here: a malformed seed is a runtime fetch
/// failure, not a usage error.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.phrase.trim().is_empty() {
        return Err(ConfigError::Validation(
            "query phrase cannot be empty".to_string(),
        ));
    }

    if config.result_cap < 1 {
        return Err(ConfigError::Validation(format!(
            "result cap must be a positive integer, got {}",
            config.result_cap
        )));
    }

    if config.iteration_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "iteration limit must be >= 1, got {}",
            config.iteration_limit
        )));
    }

    if config.fetch_timeout.is_zero() {
        return Err(ConfigError::Validation(
            "fetch timeout must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
