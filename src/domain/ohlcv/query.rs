//! Pure OHLCV query builder — structured inputs to SQL text.
//!
//! Building the query is independent of executing it, so the rendered SQL
//! can be tested without any HTTP traffic. String literals are escaped on
//! render; callers never interpolate identifiers themselves.

use crate::network::DEFAULT_TABLE;
use crate::shared::{StkNo, TimeRange, Timeframe};

/// Price column aggregated into open/close/min/max.
const PRICE_COLUMN: &str = "best_bid_price";

/// Column summed into volume.
const VOLUME_COLUMN: &str = "volume";

/// Timestamp column used for bucketing and range filtering.
const TIME_COLUMN: &str = "time_received_iso";

/// Instrument identifier column.
const ID_COLUMN: &str = "stk_no";

/// A `SAMPLE BY` aggregation query over one instrument's tick data.
///
/// Selected column order is the contract the row-to-record mapping relies
/// on: (time, id, open, close, min, max, volume).
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvQuery {
    table: String,
    stk_no: StkNo,
    timeframe: Timeframe,
    range: TimeRange,
}

impl Default for OhlcvQuery {
    fn default() -> Self {
        Self::new("1155.KL")
    }
}

impl OhlcvQuery {
    pub fn new(stk_no: impl Into<StkNo>) -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            stk_no: stk_no.into(),
            timeframe: Timeframe::default(),
            range: TimeRange::default(),
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    pub fn range(mut self, range: impl Into<TimeRange>) -> Self {
        self.range = range.into();
        self
    }

    pub fn stk_no(&self) -> &StkNo {
        &self.stk_no
    }

    /// Render the query as a single-line SQL string.
    pub fn to_sql(&self) -> String {
        format!(
            "SELECT {time}, {id}, \
             first({price}) AS open, \
             last({price}) AS close, \
             min({price}) AS min, \
             max({price}) AS max, \
             sum({volume}) AS volume \
             FROM {table} \
             WHERE {id} = '{stk_no}' AND {time} IN '{range}' \
             SAMPLE BY {tf};",
            time = TIME_COLUMN,
            id = ID_COLUMN,
            price = PRICE_COLUMN,
            volume = VOLUME_COLUMN,
            table = self.table,
            stk_no = escape_literal(self.stk_no.as_str()),
            range = escape_literal(self.range.as_str()),
            tf = self.timeframe.as_str(),
        )
    }
}

/// Escape a string literal for embedding between single quotes.
///
/// QuestDB escapes an embedded quote by doubling it, so an instrument
/// identifier from outside the program cannot terminate the literal.
fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_renders_expected_sql() {
        let sql = OhlcvQuery::default().to_sql();
        assert_eq!(
            sql,
            "SELECT time_received_iso, stk_no, \
             first(best_bid_price) AS open, \
             last(best_bid_price) AS close, \
             min(best_bid_price) AS min, \
             max(best_bid_price) AS max, \
             sum(volume) AS volume \
             FROM qdb \
             WHERE stk_no = '1155.KL' AND time_received_iso IN '$now - 14d..$now' \
             SAMPLE BY 15m;"
        );
    }

    #[test]
    fn test_builder_overrides() {
        let sql = OhlcvQuery::new("7113.KL")
            .table("ticks")
            .timeframe(Timeframe::Hour1)
            .range(TimeRange::last_days(3))
            .to_sql();
        assert!(sql.contains("FROM ticks "));
        assert!(sql.contains("stk_no = '7113.KL'"));
        assert!(sql.contains("IN '$now - 3d..$now'"));
        assert!(sql.ends_with("SAMPLE BY 1h;"));
    }

    #[test]
    fn test_quote_in_identifier_cannot_break_out_of_literal() {
        let sql = OhlcvQuery::new("O'Brien").to_sql();
        assert!(sql.contains("stk_no = 'O''Brien'"));
        // The doubled quote keeps the literal balanced.
        assert_eq!(sql.matches('\'').count() % 2, 0);
    }

    #[test]
    fn test_injection_attempt_stays_inside_literal() {
        let sql = OhlcvQuery::new("x'; DROP TABLE qdb; --").to_sql();
        assert!(sql.contains("stk_no = 'x''; DROP TABLE qdb; --'"));
    }
}
