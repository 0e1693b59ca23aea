//! OHLCV domain — aggregated candlestick bars, chart fetch state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod query;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use query::OhlcvQuery;
pub use state::{ChartState, FetchGeneration};

/// One aggregated OHLCV bar.
///
/// Field order matches the positional order of the query's selected columns
/// (time, id, open, close, min, max, volume); rows map to records by
/// position, never by column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvRecord {
    /// Bucket start time, ISO-8601, as the database sent it.
    pub time_received_iso: String,
    /// Instrument identifier.
    pub stk_no: String,
    /// First price in the bucket.
    pub open: f64,
    /// Last price in the bucket.
    pub close: f64,
    /// Minimum price in the bucket.
    pub min: f64,
    /// Maximum price in the bucket.
    pub max: f64,
    /// Summed volume in the bucket.
    pub volume: f64,
}

impl OhlcvRecord {
    /// Parse the bucket start time, if it is a valid RFC 3339 timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.time_received_iso)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
