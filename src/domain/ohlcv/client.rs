//! OHLCV sub-client — candlestick queries.

use super::convert::rows_to_records;
use super::state::ChartState;
use super::{OhlcvQuery, OhlcvRecord};
use crate::client::QuestDbClient;
use crate::error::SdkError;

/// Sub-client for OHLCV operations.
pub struct Ohlcv<'a> {
    pub(crate) client: &'a QuestDbClient,
}

impl<'a> Ohlcv<'a> {
    /// Start a query for an instrument, seeded with the client's table.
    pub fn query(&self, stk_no: impl Into<crate::shared::StkNo>) -> OhlcvQuery {
        OhlcvQuery::new(stk_no).table(self.client.table())
    }

    /// Fetch and normalize bars for a built query.
    ///
    /// A response without a `dataset` yields an empty vec here; the
    /// stale-data-preserving variant is [`fetch_into`](Self::fetch_into).
    pub async fn fetch(&self, query: &OhlcvQuery) -> Result<Vec<OhlcvRecord>, SdkError> {
        Ok(self.execute(&query.to_sql()).await?.unwrap_or_default())
    }

    /// Fetch and normalize bars for a pre-built query string.
    ///
    /// The string is sent verbatim, so it must come from trusted input —
    /// prefer [`OhlcvQuery`], which escapes its literals. An empty string
    /// returns no rows without issuing a request.
    pub async fn fetch_raw(&self, raw: &str) -> Result<Vec<OhlcvRecord>, SdkError> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.execute(raw).await?.unwrap_or_default())
    }

    /// Fetch a built query, recording the outcome on `state`.
    ///
    /// Failures never propagate: the caller observes them only through
    /// `state.error()` / `state.loading()`.
    pub async fn fetch_into(&self, state: &mut ChartState, query: &OhlcvQuery) {
        self.fetch_raw_into(state, &query.to_sql()).await;
    }

    /// Fetch a pre-built query string, recording the outcome on `state`.
    ///
    /// An empty string is a no-op: no request is issued and no state field
    /// changes.
    pub async fn fetch_raw_into(&self, state: &mut ChartState, raw: &str) {
        if raw.is_empty() {
            return;
        }

        let generation = state.begin_fetch();
        match self.execute(raw).await {
            Ok(records) => {
                state.apply_success(generation, records);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch OHLCV data");
                state.apply_error(generation, &e);
            }
        }
    }

    /// Execute a query and map the dataset, if one came back.
    async fn execute(&self, query: &str) -> Result<Option<Vec<OhlcvRecord>>, SdkError> {
        let resp = self.client.http.exec(query).await?;
        match resp.dataset {
            Some(rows) => Ok(Some(rows_to_records(&rows)?)),
            None => Ok(None),
        }
    }
}
