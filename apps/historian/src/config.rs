use cyclewatch_store::SeriesDescriptor;
use std::env;

/// Runtime configuration, read once at startup and passed by parameter —
/// no component looks up the environment on its own.
pub struct Config {
    pub api_key: String,
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("FMP_API_KEY")
            .map_err(|_| "FMP_API_KEY environment variable not found")?;

        let data_dir = env::var("HISTORIAN_DATA_DIR").unwrap_or_else(|_| "data".to_string());

        Ok(Config { api_key, data_dir })
    }
}

/// The tracked index set, fixed per deployment. Symbols are pre-escaped
/// for the request path.
pub fn tracked_indices() -> Vec<SeriesDescriptor> {
    vec![
        SeriesDescriptor::new("sp500", "%5EGSPC", "S&P 500"),
        SeriesDescriptor::new("nasdaq", "%5EIXIC", "NASDAQ"),
        SeriesDescriptor::new("growth", "IWF", "Russell Growth ETF"),
        SeriesDescriptor::new("value", "IWD", "Russell Value ETF"),
        SeriesDescriptor::new("sox", "SOXX", "Philadelphia Semiconductor Index"),
    ]
}
