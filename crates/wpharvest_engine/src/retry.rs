use std::time::Duration;

/// Transport-level retry policy applied to every GET.
///
/// Retries happen on the statuses in `status_forcelist` and on transient
/// transport failures (timeouts, refused or reset connections). The delay
/// before retry `n` (1-based) is `backoff_factor * 2^(n-1)`, capped at
/// `max_backoff`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; `0` disables retrying.
    pub max_retries: u32,
    pub backoff_factor: Duration,
    pub max_backoff: Duration,
    pub status_forcelist: Vec<u16>,
    /// Honour `Retry-After` (seconds) on 429 and 503 responses.
    pub respect_retry_after: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: Duration::from_secs(1),
            max_backoff: Duration::from_secs(120),
            status_forcelist: vec![429, 500, 502, 503, 504],
            respect_retry_after: true,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries, used for the one-shot site probe.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn retries_status(&self, status: u16) -> bool {
        self.status_forcelist.contains(&status)
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let exp = 1u32 << retry.saturating_sub(1).min(16);
        self.backoff_factor.saturating_mul(exp).min(self.max_backoff)
    }

    /// Delay for a retried response, preferring the server's `Retry-After`.
    pub fn delay_for_status(&self, retry: u32, status: u16, retry_after: Option<&str>) -> Duration {
        if self.respect_retry_after && matches!(status, 429 | 503) {
            if let Some(secs) = retry_after.and_then(|v| v.trim().parse::<u64>().ok()) {
                return Duration::from_secs(secs).min(self.max_backoff);
            }
        }
        self.backoff(retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backoff_doubles_from_one_second() {
        let p = RetryPolicy::default();
        assert_eq!(p.backoff(1), Duration::from_secs(1));
        assert_eq!(p.backoff(2), Duration::from_secs(2));
        assert_eq!(p.backoff(3), Duration::from_secs(4));
    }

    #[test]
    fn backoff_is_capped() {
        let p = RetryPolicy {
            max_backoff: Duration::from_secs(5),
            ..RetryPolicy::default()
        };
        assert_eq!(p.backoff(10), Duration::from_secs(5));
    }

    #[test]
    fn only_forcelisted_statuses_retry() {
        let p = RetryPolicy::default();
        for status in [429, 500, 502, 503, 504] {
            assert!(p.retries_status(status), "{status} should retry");
        }
        assert!(!p.retries_status(404));
        assert!(!p.retries_status(501));
    }

    #[test]
    fn retry_after_overrides_backoff_for_throttling() {
        let p = RetryPolicy::default();
        assert_eq!(
            p.delay_for_status(1, 429, Some("7")),
            Duration::from_secs(7)
        );
        assert_eq!(p.delay_for_status(1, 500, Some("7")), Duration::from_secs(1));
        assert_eq!(
            p.delay_for_status(2, 503, Some("not-a-number")),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn disabled_policy_has_no_retries() {
        assert_eq!(RetryPolicy::disabled().max_retries, 0);
    }
}
