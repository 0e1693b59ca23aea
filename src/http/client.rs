//! Low-level HTTP client — `QuestDbHttp`.
//!
//! One method for QuestDB's `/exec` query endpoint. Returns wire types
//! (conversion to domain types happens at the sub-client boundary).

use crate::domain::ohlcv::wire::ExecResponse;
use crate::error::HttpError;
use crate::network::EXEC_PATH;

use reqwest::Client;
use std::time::Duration;

/// Low-level HTTP client for QuestDB's query API.
///
/// The base URL is either the database's own HTTP endpoint
/// (`http://127.0.0.1:9000`) or a reverse-proxy prefix that forwards to it
/// (e.g. `http://<host>/qdb` — see [`crate::network::PROXY_PREFIX`]).
#[derive(Clone)]
pub struct QuestDbHttp {
    base_url: String,
    client: Client,
}

impl QuestDbHttp {
    pub fn new(base_url: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a SQL query against `/exec` and parse the tabular response.
    ///
    /// The query string is URL-encoded into the `query` parameter. A non-2xx
    /// status maps to [`HttpError::QueryFailed`] carrying the status text.
    pub async fn exec(&self, query: &str) -> Result<ExecResponse, HttpError> {
        let url = format!(
            "{}{}?query={}",
            self.base_url,
            EXEC_PATH,
            urlencoding::encode(query)
        );

        tracing::debug!(url = %url, "executing QuestDB query");

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(HttpError::QueryFailed {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .map(str::to_owned)
                    .unwrap_or_else(|| status.as_u16().to_string()),
            });
        }

        Ok(resp.json::<ExecResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let http = QuestDbHttp::new("http://127.0.0.1:9000/");
        assert_eq!(http.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_exec_url_encodes_query() {
        let encoded = urlencoding::encode("SELECT 'a b';");
        assert_eq!(encoded, "SELECT%20%27a%20b%27%3B");
    }
}
