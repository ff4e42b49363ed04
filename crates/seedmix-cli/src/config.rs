//! Environment configuration for the emitters.
//!
//! There is no configuration file. The only knob is the log filter, read
//! from `LOG_LEVEL` and overridable with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Filter used when `LOG_LEVEL` is unset or empty
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter used with `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `seedmix_crypto=trace`
    pub level: String,
}

impl LogConfig {
    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOG_LEVEL_ENV) {
            Some(level) if !level.trim().is_empty() => Self {
                level: level.trim().to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Force debug logging when `verbose` is set.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = VERBOSE_LOG_LEVEL.to_string();
        }
        self
    }

    /// Parse the directive into a filter.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the directive is malformed.
    pub fn filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        EnvFilter::try_new(&self.level)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_level_from_env() {
        let config = LogConfig::from_lookup(|key| {
            assert_eq!(key, LOG_LEVEL_ENV);
            Some(" info ".to_string())
        });
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_empty_level_uses_default() {
        let config = LogConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_verbose_overrides_env() {
        let config = LogConfig::from_lookup(|_| Some("error".to_string())).with_verbose(true);
        assert_eq!(config.level, VERBOSE_LOG_LEVEL);

        let quiet = LogConfig::from_lookup(|_| Some("error".to_string())).with_verbose(false);
        assert_eq!(quiet.level, "error");
    }

    #[test]
    fn test_filter_parses_directives() {
        let config = LogConfig {
            level: "seedmix_crypto=trace,warn".to_string(),
        };
        assert!(config.filter().is_ok());
    }

    #[test]
    fn test_filter_rejects_malformed_directive() {
        let config = LogConfig {
            level: "seedmix_crypto=notalevel".to_string(),
        };
        assert!(config.filter().is_err());
    }
}
