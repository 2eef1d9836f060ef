pub mod batch;
pub mod normalize;
pub mod source;
pub mod update;

pub use source::PriceHistory;
pub use update::{
    FULL_DOWNLOAD_CAP, SeriesError, SeriesOutcome, SeriesReport, SeriesResult, UpdateEngine,
};
