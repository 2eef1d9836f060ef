use std::time::Duration;

use chrono::Utc;
use cyclewatch_fmp::FetchError;
use cyclewatch_store::{DataPoint, SeriesDescriptor, SeriesDocument, SeriesMetadata, SeriesStore, StoreError};
use thiserror::Error;

use crate::batch::{BATCH_DELAY, BATCH_SIZE, run_in_batches};
use crate::normalize::{NormalizeError, normalize};
use crate::source::PriceHistory;

/// Provider-side cap on points returned by a full download.
pub const FULL_DOWNLOAD_CAP: u32 = 6000;
/// Pacing pause between consecutive series in an incremental run.
pub const SERIES_DELAY: Duration = Duration::from_millis(1000);

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error("stored series has no data points; run a full download")]
    EmptyDocument,
}

#[derive(Debug, PartialEq)]
pub enum SeriesOutcome {
    /// Full download wrote a fresh document with this many points.
    Downloaded { points: usize },
    /// Incremental update appended this many new points.
    Updated { new_points: usize },
    /// Upstream had nothing newer; the document was left untouched.
    NoNewData,
}

pub type SeriesResult = Result<SeriesOutcome, SeriesError>;

/// Per-series outcomes of one run over the configured descriptor set,
/// keyed by descriptor key.
#[derive(Debug)]
pub struct SeriesReport {
    pub results: Vec<(String, SeriesResult)>,
}

impl SeriesReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, result)| result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

/// The sole writer of series documents. Fetches through a [`PriceHistory`]
/// source, reconciles against the store, persists whole documents.
pub struct UpdateEngine<S> {
    source: S,
    store: SeriesStore,
}

impl<S: PriceHistory> UpdateEngine<S> {
    pub fn new(source: S, store: SeriesStore) -> Self {
        Self { source, store }
    }

    /// Bootstrap one series: fetch up to the provider cap and overwrite any
    /// existing document. Zero historical points is a hard failure and
    /// nothing is written.
    pub async fn download_series(&self, descriptor: &SeriesDescriptor) -> SeriesResult {
        let response = self
            .source
            .full_history(&descriptor.symbol, FULL_DOWNLOAD_CAP)
            .await?;
        let data = normalize(response.historical)?;

        let document = SeriesDocument {
            last_updated: Utc::now(),
            metadata: SeriesMetadata {
                symbol: descriptor.symbol.clone(),
                name: descriptor.name.clone(),
                data_points: data.len(),
            },
            data,
        };
        self.store.write(&descriptor.key, &document)?;

        Ok(SeriesOutcome::Downloaded {
            points: document.data.len(),
        })
    }

    /// Append points newer than the last stored date. Never falls back to a
    /// full download on its own: an unreadable or empty document is surfaced
    /// as an error and left to the operator.
    pub async fn update_series(&self, descriptor: &SeriesDescriptor) -> SeriesResult {
        let mut document = self.store.read(&descriptor.key)?;
        let last_date = document.last_date().ok_or(SeriesError::EmptyDocument)?;

        let response = self
            .source
            .history_since(&descriptor.symbol, last_date)
            .await?;
        if response.historical.is_empty() {
            return Ok(SeriesOutcome::NoNewData);
        }

        // Upstream's `from` filter is inclusive and re-returns the boundary
        // date; keep strictly newer points only.
        let fresh: Vec<DataPoint> = normalize(response.historical)?
            .into_iter()
            .filter(|point| point.date > last_date)
            .collect();

        if fresh.is_empty() {
            return Ok(SeriesOutcome::NoNewData);
        }

        let new_points = fresh.len();
        document.data.extend(fresh);
        document.metadata.data_points = document.data.len();
        document.last_updated = Utc::now();
        self.store.write(&descriptor.key, &document)?;

        Ok(SeriesOutcome::Updated { new_points })
    }

    /// Full bootstrap of every configured series, batched with concurrent
    /// fetches inside each batch. Per-series failures are collected, never
    /// propagated to siblings.
    pub async fn download_all(&self, descriptors: &[SeriesDescriptor]) -> SeriesReport {
        let results = run_in_batches(descriptors, BATCH_SIZE, BATCH_DELAY, |descriptor| {
            let descriptor = descriptor.clone();
            async move {
                tracing::info!("downloading {} data", descriptor.name);
                let result = self.download_series(&descriptor).await;
                report_series(&descriptor, &result);
                (descriptor.key, result)
            }
        })
        .await;

        SeriesReport { results }
    }

    /// Incremental refresh of every configured series, strictly sequential
    /// with a pacing pause between consecutive series.
    pub async fn update_all(&self, descriptors: &[SeriesDescriptor]) -> SeriesReport {
        let mut results = Vec::with_capacity(descriptors.len());

        for (index, descriptor) in descriptors.iter().enumerate() {
            tracing::info!("updating {} data", descriptor.name);
            let result = self.update_series(descriptor).await;
            report_series(descriptor, &result);
            results.push((descriptor.key.clone(), result));

            if index + 1 < descriptors.len() {
                tokio::time::sleep(SERIES_DELAY).await;
            }
        }

        SeriesReport { results }
    }
}

fn report_series(descriptor: &SeriesDescriptor, result: &SeriesResult) {
    match result {
        Ok(SeriesOutcome::Downloaded { points }) => {
            tracing::info!("{}: saved {points} data points", descriptor.name);
        }
        Ok(SeriesOutcome::Updated { new_points }) => {
            tracing::info!("{}: appended {new_points} new data points", descriptor.name);
        }
        Ok(SeriesOutcome::NoNewData) => {
            tracing::info!("{}: no new data", descriptor.name);
        }
        Err(err) => {
            tracing::warn!("{}: {err}", descriptor.name);
        }
    }
}
