use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::method::Method;

#[derive(Serialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct HistoricalPriceParams {
    /// Path segment, not a query parameter. Pre-escaped symbols
    /// (e.g. `%5EGSPC`) pass through untouched.
    #[serde(skip)]
    pub symbol: String,

    #[serde(rename = "serietype")]
    #[builder(default = SerieType::Line)]
    pub serie_type: SerieType,

    /// Cap on the number of most recent points returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeseries: Option<u32>,

    /// Start date. Inclusive on the upstream side: the boundary day is
    /// returned again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SerieType {
    #[default]
    Line,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoricalPriceResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    /// Daily records, newest first. A missing key decodes as empty.
    #[serde(default)]
    pub historical: Vec<HistoricalEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoricalEntry {
    pub date: String,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(rename = "changePercent", default)]
    pub change_percent: Option<f64>,
}

pub struct HistoricalPriceFull;

impl Method for HistoricalPriceFull {
    const PATH: &'static str = "https://financialmodelingprep.com/api/v3/historical-price-full";

    type Response = HistoricalPriceResponse;
    type Params = HistoricalPriceParams;

    fn url(params: &Self::Params) -> String {
        format!("{}/{}", Self::PATH, params.symbol)
    }
}
