//! Fixed-interval throttle shared by everything that talks to one service family.
//!
//! MusicBrainz asks anonymous clients for at most 1 request per second, so the
//! interval never drops below one second regardless of the configured rate.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Floor for the spacing between permitted calls.
const MIN_INTERVAL: Duration = Duration::from_millis(1000);

/// Enforces a minimum spacing between calls to [`RateLimiter::wait`].
///
/// The next-allowed instant is pushed forward on every call, not only when the
/// caller had to sleep, so bursts after an idle gap are still spaced out.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    /// `None` until the first call
    next_allowed: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter for the given requests-per-second.
    ///
    /// Non-positive or non-finite rates are treated as 1 req/sec.
    pub fn new(requests_per_second: f64) -> Self {
        Self {
            min_interval: interval_for(requests_per_second),
            next_allowed: Mutex::new(None),
        }
    }

    /// Effective spacing between permitted calls
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Suspend until the caller may issue its request.
    ///
    /// The lock is held across the sleep, so waiters are released one at a
    /// time in arrival order.
    pub async fn wait(&self) {
        let mut next_allowed = self.next_allowed.lock().await;

        if let Some(at) = *next_allowed {
            let now = Instant::now();
            if at > now {
                tracing::trace!("Rate limiter sleeping {:?}", at - now);
                tokio::time::sleep_until(at).await;
            }
        }

        *next_allowed = Some(Instant::now() + self.min_interval);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn interval_for(requests_per_second: f64) -> Duration {
    let rps = if requests_per_second.is_finite() && requests_per_second > 0.0 {
        requests_per_second
    } else {
        1.0
    };
    Duration::from_secs_f64(1.0 / rps).max(MIN_INTERVAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_clamped_to_one_second() {
        assert_eq!(RateLimiter::new(5.0).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::new(1.0).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::new(0.5).min_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_rates_fall_back_to_one_per_second() {
        assert_eq!(RateLimiter::new(0.0).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::new(-3.0).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::new(f64::NAN).min_interval(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_wait_is_immediate() {
        let limiter = RateLimiter::new(1.0);
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn test_high_rate_still_spaced_by_one_second() {
        let limiter = RateLimiter::new(5.0);
        let mut completions = Vec::new();
        for _ in 0..3 {
            limiter.wait().await;
            completions.push(Instant::now());
        }
        for pair in completions.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(1000));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_half_rate_spaced_by_two_seconds() {
        let limiter = RateLimiter::new(0.5);
        limiter.wait().await;
        let first = Instant::now();
        limiter.wait().await;
        assert!(Instant::now() - first >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_wait_after_idle_gap() {
        let limiter = RateLimiter::new(1.0);
        limiter.wait().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        let before = Instant::now();
        limiter.wait().await;
        assert_eq!(Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_waiters_are_serialized() {
        let limiter = std::sync::Arc::new(RateLimiter::new(1.0));
        let start = Instant::now();

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let limiter = limiter.clone();
                tokio::spawn(async move {
                    limiter.wait().await;
                    Instant::now()
                })
            })
            .collect();

        let mut times = Vec::new();
        for handle in handles {
            times.push(handle.await.unwrap());
        }
        times.sort();

        assert_eq!(times[0], start);
        assert!(times[1] - times[0] >= Duration::from_secs(1));
        assert!(times[2] - times[1] >= Duration::from_secs(1));
    }
}
