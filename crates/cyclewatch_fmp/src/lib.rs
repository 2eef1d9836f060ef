pub mod historical;
pub mod method;
mod retry;

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use method::Method;

/// Retries after the first attempt, not total attempts.
pub const MAX_RETRIES: u32 = 3;
pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("API error: {0}")]
    Api(String),
}

pub struct FmpClient {
    api_key: String,
    reqwest: Client,
}

impl FmpClient {
    pub fn new(api_key: &str) -> Self {
        let reqwest = ClientBuilder::new()
            .build()
            .expect("Failed to build reqwest client");

        Self {
            api_key: api_key.to_string(),
            reqwest,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> reqwest::Result<T> {
        let response = self
            .reqwest
            .get(url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }

    /// Issue one call, retrying failed attempts (network error, non-2xx,
    /// malformed body) with linear backoff.
    pub async fn call<M: Method>(&self, params: M::Params) -> Result<M::Response, FetchError> {
        let url = M::url(&params);

        retry::with_retry(MAX_RETRIES, RETRY_BASE_DELAY, || self.get(&url, &params))
            .await
            .map_err(|exhausted| FetchError::RetriesExhausted {
                attempts: exhausted.attempts,
                source: exhausted.source,
            })
    }
}
