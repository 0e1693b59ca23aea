//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `query.rs` — Pure query builders (structured inputs → SQL text)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods (for view-driven data)
//! - `client.rs` — Sub-client with HTTP methods

pub mod ohlcv;
