// Bounded polling for asynchronous remote jobs (file batches, runs)

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Interval and overall deadline of a polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            timeout: Duration::from_secs(600),
        }
    }
}

impl PollConfig {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }
}

/// Last observed value of a polled resource
#[derive(Debug, Clone)]
pub struct Polled<T> {
    pub value: T,
    /// Deadline elapsed before the value became terminal
    pub timed_out: bool,
    /// Number of fetches issued (the initial value is not counted)
    pub attempts: u32,
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error("Polling failed after {attempts} attempts: {source}")]
    Fetch {
        attempts: u32,
        #[source]
        source: anyhow::Error,
    },
}

/// Poll until `is_done` holds or the deadline elapses.
///
/// `initial` is the value returned by the create call; it is checked before
/// the first fetch. On timeout the last observed value is returned with
/// `timed_out` set rather than an error, so callers can report its status.
pub async fn poll_until<T, F, Fut, P>(
    config: &PollConfig,
    initial: T,
    is_done: P,
    mut fetch: F,
) -> Result<Polled<T>, PollError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
    P: Fn(&T) -> bool,
{
    let deadline = Instant::now() + config.timeout;
    let mut current = initial;
    let mut attempts = 0u32;

    loop {
        if is_done(&current) {
            return Ok(Polled {
                value: current,
                timed_out: false,
                attempts,
            });
        }

        let now = Instant::now();
        if now >= deadline {
            tracing::warn!(attempts, "polling deadline elapsed");
            return Ok(Polled {
                value: current,
                timed_out: true,
                attempts,
            });
        }

        tokio::time::sleep(config.interval.min(deadline - now)).await;

        attempts += 1;
        tracing::debug!(attempts, "polling remote resource");
        current = fetch()
            .await
            .map_err(|source| PollError::Fetch { attempts, source })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast() -> PollConfig {
        PollConfig::new(Duration::from_millis(5), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_initial_value_already_done() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let polled = poll_until(&fast(), 10u32, |v| *v >= 10, || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(0u32) }
        })
        .await
        .unwrap();

        assert_eq!(polled.value, 10);
        assert!(!polled.timed_out);
        assert_eq!(polled.attempts, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_polls_until_done() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let polled = poll_until(&fast(), 0u32, |v| *v == 3, move || {
            let next = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok(next) }
        })
        .await
        .unwrap();

        assert_eq!(polled.value, 3);
        assert_eq!(polled.attempts, 3);
        assert!(!polled.timed_out);
    }

    #[tokio::test]
    async fn test_deadline_returns_last_value() {
        let config = PollConfig::new(Duration::from_millis(5), Duration::from_millis(30));

        let polled = poll_until(&config, "queued", |s| *s == "completed", || async {
            Ok("in_progress")
        })
        .await
        .unwrap();

        assert!(polled.timed_out);
        assert_eq!(polled.value, "in_progress");
        assert!(polled.attempts >= 1);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result = poll_until(&fast(), 0u32, |_| false, || async {
            Err::<u32, _>(anyhow::anyhow!("boom"))
        })
        .await;

        match result {
            Err(PollError::Fetch { attempts, source }) => {
                assert_eq!(attempts, 1);
                assert!(source.to_string().contains("boom"));
            }
            Ok(_) => panic!("expected fetch error"),
        }
    }
}
