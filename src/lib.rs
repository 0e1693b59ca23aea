//! # QuestDB OHLCV SDK
//!
//! A small Rust SDK for querying OHLCV (open/high/low/close/volume)
//! candlestick data from QuestDB's HTTP query endpoint and normalizing the
//! tabular response into typed records for a chart view.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain types, query builder, state
//!    containers (always available, WASM-safe)
//! 2. **HTTP** — `QuestDbHttp`, a thin wrapper around the `/exec` endpoint
//! 3. **High-Level Client** — `QuestDbClient` with a nested `ohlcv()`
//!    sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use questdb_ohlcv_sdk::prelude::*;
//!
//! let client = QuestDbClient::builder()
//!     .base_url("http://127.0.0.1:9000")
//!     .build();
//!
//! let query = client.ohlcv().query("1155.KL");
//! let bars = client.ohlcv().fetch(&query).await?;
//! ```
//!
//! For chart views that need request lifecycle state (data / loading /
//! error), use [`domain::ohlcv::ChartState`] with the `_into` fetch methods:
//!
//! ```rust,ignore
//! let mut state = ChartState::new();
//! client.ohlcv().fetch_into(&mut state, &query).await;
//! assert!(!state.loading());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and table-name constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client for the QuestDB query endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `QuestDbClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{StkNo, TimeRange, Timeframe};

    // Domain types
    pub use crate::domain::ohlcv::{ChartState, OhlcvQuery, OhlcvRecord};

    // Wire types
    pub use crate::domain::ohlcv::wire::ExecResponse;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_HTTP_URL, DEFAULT_TABLE};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{OhlcvClient, QuestDbClient, QuestDbClientBuilder};
}
