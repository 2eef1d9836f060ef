use std::future::Future;
use std::time::Duration;

use futures_util::future::join_all;

pub const BATCH_SIZE: usize = 5;
pub const BATCH_DELAY: Duration = Duration::from_millis(1000);

/// Run `op` over every item, `batch_size` at a time. Operations inside a
/// batch run concurrently and the whole batch settles before the next one
/// starts; `delay` elapses between consecutive batches, not after the last.
///
/// The returned future must not borrow the item — clone what it needs
/// before going async.
pub async fn run_in_batches<T, R, F, Fut>(
    items: &[T],
    batch_size: usize,
    delay: Duration,
    mut op: F,
) -> Vec<R>
where
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = R>,
{
    assert!(batch_size > 0);

    let mut results = Vec::with_capacity(items.len());
    let mut batches = items.chunks(batch_size).enumerate().peekable();

    while let Some((index, batch)) = batches.next() {
        tracing::info!("processing batch {}", index + 1);
        results.extend(join_all(batch.iter().map(&mut op)).await);

        if batches.peek().is_some() {
            tracing::info!("waiting {}ms before next batch", delay.as_millis());
            tokio::time::sleep(delay).await;
        }
    }

    results
}
