//! Clock configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::display::LABEL_PREFIX;

/// Element id the dashboard page gives its clock.
pub const DEFAULT_ELEMENT_ID: &str = "currentDateTime";

/// Default schedule period.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1000);

/// Settings for one clock updater and its schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Id of the output surface to write.
    pub element_id: String,
    /// Time between scheduled ticks.
    pub period: Duration,
    /// Text placed before the rendered instant.
    pub prefix: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            period: DEFAULT_PERIOD,
            prefix: LABEL_PREFIX.to_string(),
        }
    }
}

impl ClockConfig {
    /// Builds a config from an element id and a period in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error when the element id is blank or the period is zero.
    pub fn new(element_id: impl Into<String>, period_ms: u64) -> Result<Self, String> {
        let element_id = element_id.into();
        if element_id.trim().is_empty() {
            return Err("Element id must not be empty".to_string());
        }
        if period_ms == 0 {
            return Err("Period must be at least 1 ms".to_string());
        }
        Ok(Self { element_id, period: Duration::from_millis(period_ms), ..Self::default() })
    }
}

/// Loads `.env` from the working directory if one exists.
///
/// Values already present in the environment win over the file. This runs
/// before logging is set up, so the outcome is returned for
/// [`log_dotenv`] to report afterwards.
pub fn load_dotenv() -> dotenvy::Result<PathBuf> {
    dotenvy::dotenv()
}

/// Logs the outcome of [`load_dotenv`]. A missing file is not worth a line.
pub fn log_dotenv(outcome: &dotenvy::Result<PathBuf>) {
    match outcome {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => {
            if let Some(problem) = dotenv_problem(err) {
                tracing::warn!(error = %problem, "ignoring unreadable .env");
            }
        }
    }
}

fn dotenv_problem(err: &dotenvy::Error) -> Option<String> {
    (!err.not_found()).then(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_page() {
        let config = ClockConfig::default();
        assert_eq!(config.element_id, "currentDateTime");
        assert_eq!(config.period, Duration::from_secs(1));
        assert_eq!(config.prefix, "Current Date and Time: ");
    }

    #[test]
    fn new_accepts_custom_values() {
        let config = ClockConfig::new("clock", 250).unwrap();
        assert_eq!(config.element_id, "clock");
        assert_eq!(config.period, Duration::from_millis(250));
        assert_eq!(config.prefix, LABEL_PREFIX);
    }

    #[test]
    fn rejects_zero_period() {
        let err = ClockConfig::new("clock", 0).unwrap_err();
        assert!(err.contains("Period"));
    }

    #[test]
    fn missing_dotenv_is_quiet_but_unreadable_one_is_reported() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(dotenv_problem(&missing), None);

        let malformed = dotenvy::Error::LineParse("KEY VALUE".into(), 3);
        assert!(dotenv_problem(&malformed).is_some());

        let denied = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(dotenv_problem(&denied).is_some());
    }

    #[test]
    fn rejects_blank_element_id() {
        assert!(ClockConfig::new("  ", 1000).is_err());
    }
}
