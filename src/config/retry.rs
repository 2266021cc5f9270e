//! Retry settings for the signed-request loop.

use std::time::Duration;

use super::ConfigError;

/// Number of attempts SES requests get by default: one initial send plus two
/// retries.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Configuration for retry behavior.
///
/// Every response with a status above 200 consumes one attempt. Once
/// `max_attempts` sends have failed the client gives up and reports
/// [`SesError::RetriesExhausted`](crate::error::SesError::RetriesExhausted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of sends, including the first one.
    pub max_attempts: u32,

    /// Fixed pause between attempts. Zero retries immediately.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::ZERO,
        }
    }
}

impl RetryConfig {
    /// Create a retry configuration with the given attempt budget.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// A configuration that sends exactly once.
    pub fn no_retry() -> Self {
        Self::new(1)
    }

    /// Set the pause between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Whether another attempt is allowed after `attempts` sends have failed.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_query::config::RetryConfig;
    ///
    /// let config = RetryConfig::default();
    /// assert!(config.has_budget(1));
    /// assert!(config.has_budget(2));
    /// assert!(!config.has_budget(3));
    /// ```
    pub fn has_budget(&self, attempts: u32) -> bool {
        attempts < self.max_attempts
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidRetry {
                message: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_config() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.delay, Duration::ZERO);
    }

    #[test]
    fn test_budget_counts_initial_attempt() {
        let config = RetryConfig::new(3);
        assert!(config.has_budget(0));
        assert!(config.has_budget(2));
        assert!(!config.has_budget(3));

        let once = RetryConfig::no_retry();
        assert!(!once.has_budget(1));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = RetryConfig::new(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRetry { .. })
        ));
        assert!(RetryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_with_delay() {
        let config = RetryConfig::default().with_delay(Duration::from_millis(250));
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.max_attempts, 3);
    }
}
