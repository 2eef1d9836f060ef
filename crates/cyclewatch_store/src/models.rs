use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One tracked series. The full set is fixed at configuration time.
#[derive(Debug, Clone)]
pub struct SeriesDescriptor {
    /// Short key, also the file-name stem (e.g. `sp500`).
    pub key: String,
    /// Upstream symbol as it appears in the request path, pre-escaped
    /// (e.g. `%5EGSPC`).
    pub symbol: String,
    /// Display name.
    pub name: String,
}

impl SeriesDescriptor {
    pub fn new(key: &str, symbol: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }
}

/// One trading-day observation. `date` is the sole ordering and dedup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub symbol: String,
    pub name: String,
    /// Must always equal `data.len()`.
    #[serde(rename = "dataPoints")]
    pub data_points: usize,
}

/// The persisted unit: one JSON document per series, points oldest first
/// with strictly increasing dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDocument {
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
    pub metadata: SeriesMetadata,
    pub data: Vec<DataPoint>,
}

impl SeriesDocument {
    /// Date of the chronologically latest stored point.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.data.last().map(|point| point.date)
    }
}
