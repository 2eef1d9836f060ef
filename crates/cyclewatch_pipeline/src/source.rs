use chrono::NaiveDate;
use cyclewatch_fmp::historical::{
    HistoricalPriceFull, HistoricalPriceParams, HistoricalPriceResponse,
};
use cyclewatch_fmp::{FetchError, FmpClient};

/// Upstream daily price history, by symbol. Tests substitute a scripted
/// implementation.
#[allow(async_fn_in_trait)]
pub trait PriceHistory {
    /// Up to `cap` most recent points.
    async fn full_history(
        &self,
        symbol: &str,
        cap: u32,
    ) -> Result<HistoricalPriceResponse, FetchError>;

    /// Points on or after `from` (inclusive on the upstream side).
    async fn history_since(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<HistoricalPriceResponse, FetchError>;
}

impl<P: PriceHistory> PriceHistory for &P {
    async fn full_history(
        &self,
        symbol: &str,
        cap: u32,
    ) -> Result<HistoricalPriceResponse, FetchError> {
        (**self).full_history(symbol, cap).await
    }

    async fn history_since(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<HistoricalPriceResponse, FetchError> {
        (**self).history_since(symbol, from).await
    }
}

impl PriceHistory for FmpClient {
    async fn full_history(
        &self,
        symbol: &str,
        cap: u32,
    ) -> Result<HistoricalPriceResponse, FetchError> {
        self.call::<HistoricalPriceFull>(
            HistoricalPriceParams::builder()
                .symbol(symbol)
                .timeseries(cap)
                .build(),
        )
        .await
    }

    async fn history_since(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<HistoricalPriceResponse, FetchError> {
        self.call::<HistoricalPriceFull>(
            HistoricalPriceParams::builder().symbol(symbol).from(from).build(),
        )
        .await
    }
}
