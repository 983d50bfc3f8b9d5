//! Gather configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use fpkit_error::ConfigError;

/// Tuning for a [`Gather`](crate::Gather).
///
/// Loads from any serde format; missing fields take their defaults:
///
/// ```rust
/// use fpkit_gather::GatherConfig;
///
/// let cfg: GatherConfig = serde_json::from_str(r#"{ "concurrency_limit": 4 }"#).unwrap();
/// assert_eq!(cfg.concurrency_limit, Some(4));
/// assert_eq!(serde_json::from_str::<GatherConfig>("{}").unwrap(), GatherConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GatherConfig {
    /// Maximum number of tasks polled at once; `None` runs every task
    /// concurrently.
    pub concurrency_limit: Option<usize>,
}

impl GatherConfig {
    /// Limits how many tasks are in flight at once.
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = Some(limit);
        self
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency_limit == Some(0) {
            return Err(ConfigError::validation(
                "concurrency_limit must be greater than 0",
            ));
        }
        Ok(())
    }

    pub(crate) fn window(&self) -> usize {
        self.concurrency_limit.unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(GatherConfig::default(), true)]
    #[case(GatherConfig::default().with_concurrency_limit(1), true)]
    #[case(GatherConfig::default().with_concurrency_limit(0), false)]
    fn validate_cases(#[case] cfg: GatherConfig, #[case] valid: bool) {
        assert_eq!(cfg.validate().is_ok(), valid);
    }

    #[test]
    fn zero_limit_message() {
        let err = GatherConfig::default()
            .with_concurrency_limit(0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: concurrency_limit must be greater than 0"
        );
    }

    #[test]
    fn unlimited_window() {
        assert_eq!(GatherConfig::default().window(), usize::MAX);
        assert_eq!(GatherConfig::default().with_concurrency_limit(3).window(), 3);
    }
}
