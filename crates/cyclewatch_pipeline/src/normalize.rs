use chrono::NaiveDate;
use cyclewatch_fmp::historical::HistoricalEntry;
use cyclewatch_store::DataPoint;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("no historical data in response")]
    EmptyHistory,
    #[error("unparseable date {date:?}: {source}")]
    BadDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Shape upstream records into the canonical chronological series.
/// Upstream returns newest first; the stored order is oldest first.
pub fn normalize(historical: Vec<HistoricalEntry>) -> Result<Vec<DataPoint>, NormalizeError> {
    if historical.is_empty() {
        return Err(NormalizeError::EmptyHistory);
    }

    let mut points = historical
        .into_iter()
        .map(|entry| {
            let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").map_err(|source| {
                NormalizeError::BadDate {
                    date: entry.date.clone(),
                    source,
                }
            })?;

            Ok(DataPoint {
                date,
                close: entry.close,
                volume: entry.volume,
                change: entry.change,
                change_percent: entry.change_percent,
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    points.reverse();
    Ok(points)
}
