//! High-level client — `QuestDbClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::ohlcv::client::Ohlcv;
use crate::http::QuestDbHttp;
use crate::network;

// Re-export sub-client types for convenience.
pub use crate::domain::ohlcv::client::Ohlcv as OhlcvClient;

/// The primary entry point for the QuestDB OHLCV SDK.
///
/// Provides nested sub-client accessors per domain: `client.ohlcv()`.
#[derive(Clone)]
pub struct QuestDbClient {
    pub(crate) http: QuestDbHttp,
    table: String,
}

impl QuestDbClient {
    pub fn builder() -> QuestDbClientBuilder {
        QuestDbClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn ohlcv(&self) -> Ohlcv<'_> {
        Ohlcv { client: self }
    }

    /// Table name seeded into queries built via sub-clients.
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct QuestDbClientBuilder {
    base_url: String,
    table: String,
}

impl Default for QuestDbClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_HTTP_URL.to_string(),
            table: network::DEFAULT_TABLE.to_string(),
        }
    }
}

impl QuestDbClientBuilder {
    /// QuestDB's HTTP endpoint, or a reverse-proxy prefix forwarding to it.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    /// Override base URL and table from `QDB_HTTP_URL` / `QDB_TABLE`, when
    /// set. Unset variables keep the builder's current values.
    pub fn from_env(mut self) -> Self {
        if let Ok(url) = std::env::var("QDB_HTTP_URL") {
            self.base_url = url;
        }
        if let Ok(table) = std::env::var("QDB_TABLE") {
            self.table = table;
        }
        self
    }

    pub fn build(self) -> QuestDbClient {
        QuestDbClient {
            http: QuestDbHttp::new(&self.base_url),
            table: self.table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = QuestDbClient::builder().build();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
        assert_eq!(client.table(), "qdb");
    }

    #[test]
    fn test_builder_overrides() {
        let client = QuestDbClient::builder()
            .base_url("http://example.com/qdb/")
            .table("ticks")
            .build();
        assert_eq!(client.base_url(), "http://example.com/qdb");
        assert_eq!(client.table(), "ticks");
    }

    #[test]
    fn test_sub_client_query_uses_client_table() {
        let client = QuestDbClient::builder().table("ticks").build();
        let sql = client.ohlcv().query("1155.KL").to_sql();
        assert!(sql.contains("FROM ticks "));
    }
}
