use std::future::Future;
use std::time::Duration;

/// All attempts failed; `source` is the error from the last one.
#[derive(Debug)]
pub(crate) struct Exhausted<E> {
    pub attempts: u32,
    pub source: E,
}

/// Run `op` until it succeeds or `max_retries` retries are spent.
/// The wait before retry N is `N * base_delay`.
pub(crate) async fn with_retry<T, E, F, Fut>(
    max_retries: u32,
    base_delay: Duration,
    mut op: F,
) -> Result<T, Exhausted<E>>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(source) => {
                attempt += 1;
                if attempt > max_retries {
                    return Err(Exhausted {
                        attempts: attempt,
                        source,
                    });
                }

                tracing::warn!("request failed ({source}), retrying (attempt {attempt}/{max_retries})");
                tokio::time::sleep(base_delay * attempt).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn propagates_after_exhausting_retries() {
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = with_retry(3, Duration::from_millis(1000), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>("connection refused") }
        })
        .await;

        let exhausted = result.unwrap_err();
        assert_eq!(exhausted.attempts, 4);
        assert_eq!(exhausted.source, "connection refused");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_retrying_on_first_success() {
        let calls = AtomicU32::new(0);

        let result = with_retry(3, Duration::from_millis(1000), || {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call < 2 {
                    Err("timed out")
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_is_linear() {
        let start = tokio::time::Instant::now();

        let _: Result<(), _> = with_retry(3, Duration::from_millis(1000), || async {
            Err::<(), _>("boom")
        })
        .await;

        // 1s + 2s + 3s between the four attempts.
        assert_eq!(start.elapsed(), Duration::from_millis(6000));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_never_sleeps() {
        let start = tokio::time::Instant::now();

        let result = with_retry(3, Duration::from_millis(1000), || async { Ok::<_, &str>(1) }).await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
