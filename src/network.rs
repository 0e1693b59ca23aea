//! Network URL and table-name constants for the QuestDB OHLCV SDK.

/// Default QuestDB HTTP endpoint.
pub const DEFAULT_HTTP_URL: &str = "http://127.0.0.1:9000";

/// Default table holding tick data.
pub const DEFAULT_TABLE: &str = "qdb";

/// Path of QuestDB's SQL query endpoint, relative to the base URL.
pub const EXEC_PATH: &str = "/exec";

/// Path prefix commonly used when fronting QuestDB with a path-rewriting
/// reverse proxy (the proxy strips the prefix before forwarding). A client
/// behind such a proxy uses `http://<host>/qdb` as its base URL.
pub const PROXY_PREFIX: &str = "/qdb";
