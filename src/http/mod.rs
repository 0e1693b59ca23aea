//! HTTP client layer — `QuestDbHttp` over the `/exec` query endpoint.

pub mod client;

pub use client::QuestDbHttp;
