// src/core/retry.rs
//
// Bounded retry with linear backoff. The n-th retry (1-based) waits
// `backoff * n`; only the configured status codes (and transport failures)
// trigger a retry.

use std::time::Duration;

use crate::config::consts::{ RETRY_BACKOFF, RETRY_STATUSES, RETRY_TOTAL };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub total: u32,
    pub backoff: Duration,
    pub statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            total: RETRY_TOTAL,
            backoff: RETRY_BACKOFF,
            statuses: RETRY_STATUSES.to_vec(),
        }
    }
}

impl RetryPolicy {
    pub fn max_attempts(&self) -> u32 {
        self.total + 1
    }

    /// Delay before retry number `retry` (1 = first retry).
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        self.backoff.saturating_mul(retry)
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.statuses.contains(&status)
    }
}

/// Transport failures worth another attempt (as opposed to e.g. a bad URL).
pub fn is_retryable_network_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_linearly() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for_retry(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for_retry(2), Duration::from_secs(2));
        assert_eq!(policy.delay_for_retry(5), Duration::from_secs(5));
    }

    #[test]
    fn defaults_match_market_summary_session() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 6);
        for code in [500, 502, 503, 504] {
            assert!(policy.is_retryable_status(code));
        }
        assert!(!policy.is_retryable_status(404));
        assert!(!policy.is_retryable_status(429));
    }

}
