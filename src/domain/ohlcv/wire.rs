//! Wire types for QuestDB's `/exec` response.

use serde::Deserialize;
use serde_json::Value;

/// One response row: column values in the query's selection order.
pub type Row = Vec<Value>;

/// Column metadata as `/exec` reports it. Informational only — row mapping
/// is positional, not name-based.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// Raw `/exec` response.
///
/// Only `dataset` is behaviorally relevant; a response without it is treated
/// as reporting no rows. Fields QuestDB adds beyond these (`timings`,
/// `explain`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnMeta>>,
    #[serde(default)]
    pub dataset: Option<Vec<Row>>,
    #[serde(default)]
    pub count: Option<u64>,
}
