//! Task polling options

use std::time::Duration;

use crate::error::Result;
use crate::limits::ValidationError;

/// Default pause between two task status fetches (50ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Default overall wait budget (5s)
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(5000);

/// How often and how long to poll a task before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

impl PollOptions {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Build from signed millisecond values, rejecting zero and negatives
    pub fn from_millis(interval_ms: i64, timeout_ms: i64) -> Result<Self> {
        let interval = positive_millis("poll interval", interval_ms)?;
        let timeout = positive_millis("poll timeout", timeout_ms)?;
        Ok(Self::new(interval, timeout))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ValidationError::ZeroPollInterval.into());
        }
        if self.timeout.is_zero() {
            return Err(ValidationError::ZeroPollTimeout.into());
        }
        Ok(())
    }
}

fn positive_millis(name: &'static str, value: i64) -> Result<Duration> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { name, value }.into());
    }
    Ok(Duration::from_millis(value as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let options = PollOptions::default();
        assert_eq!(options.interval, Duration::from_millis(50));
        assert_eq!(options.timeout, Duration::from_millis(5000));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_durations_rejected() {
        let options = PollOptions::default().with_interval(Duration::ZERO);
        assert!(matches!(options.validate(), Err(Error::InvalidArgument(_))));

        let options = PollOptions::default().with_timeout(Duration::ZERO);
        assert!(matches!(options.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_from_millis() {
        let options = PollOptions::from_millis(10, 100).unwrap();
        assert_eq!(options.interval, Duration::from_millis(10));

        let err = PollOptions::from_millis(-5, 100).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: poll interval must be positive, got -5"
        );
        assert!(PollOptions::from_millis(50, 0).is_err());
    }
}
