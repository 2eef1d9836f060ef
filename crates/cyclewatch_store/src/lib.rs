pub mod models;
pub mod store;

pub use models::{DataPoint, SeriesDescriptor, SeriesDocument, SeriesMetadata};
pub use store::{SeriesStore, StoreError};
