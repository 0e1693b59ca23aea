//! Conversions from wire rows to domain records.

use super::wire::Row;
use super::OhlcvRecord;
use crate::error::SdkError;
use serde_json::Value;

/// Columns a row must carry, in selection order.
const EXPECTED_COLUMNS: usize = 7;

fn field_str(row: &Row, idx: usize, name: &str) -> Result<String, SdkError> {
    match &row[idx] {
        Value::String(s) => Ok(s.clone()),
        other => Err(SdkError::Validation(format!(
            "column {idx} ({name}): expected string, got {other}"
        ))),
    }
}

fn field_f64(row: &Row, idx: usize, name: &str) -> Result<f64, SdkError> {
    row[idx].as_f64().ok_or_else(|| {
        SdkError::Validation(format!(
            "column {idx} ({name}): expected number, got {}",
            row[idx]
        ))
    })
}

impl TryFrom<&Row> for OhlcvRecord {
    type Error = SdkError;

    /// Positional mapping: (time, id, open, close, min, max, volume).
    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        if row.len() < EXPECTED_COLUMNS {
            return Err(SdkError::Validation(format!(
                "row has {} columns, expected at least {EXPECTED_COLUMNS}",
                row.len()
            )));
        }

        Ok(Self {
            time_received_iso: field_str(row, 0, "time_received_iso")?,
            stk_no: field_str(row, 1, "stk_no")?,
            open: field_f64(row, 2, "open")?,
            close: field_f64(row, 3, "close")?,
            min: field_f64(row, 4, "min")?,
            max: field_f64(row, 5, "max")?,
            volume: field_f64(row, 6, "volume")?,
        })
    }
}

/// Map every dataset row into a record, in order.
pub(crate) fn rows_to_records(rows: &[Row]) -> Result<Vec<OhlcvRecord>, SdkError> {
    rows.iter().map(OhlcvRecord::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> Row {
        vec![
            json!("2024-01-01T00:00:00Z"),
            json!("1155.KL"),
            json!(1.0),
            json!(1.2),
            json!(0.9),
            json!(1.3),
            json!(1000),
        ]
    }

    #[test]
    fn test_row_maps_positionally() {
        let rec = OhlcvRecord::try_from(&sample_row()).unwrap();
        assert_eq!(rec.time_received_iso, "2024-01-01T00:00:00Z");
        assert_eq!(rec.stk_no, "1155.KL");
        assert_eq!(rec.open, 1.0);
        assert_eq!(rec.close, 1.2);
        assert_eq!(rec.min, 0.9);
        assert_eq!(rec.max, 1.3);
        assert_eq!(rec.volume, 1000.0);
    }

    #[test]
    fn test_integer_volume_widens_to_f64() {
        let rec = OhlcvRecord::try_from(&sample_row()).unwrap();
        assert_eq!(rec.volume, 1000.0);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let row: Row = sample_row().into_iter().take(5).collect();
        let err = OhlcvRecord::try_from(&row).unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let mut row = sample_row();
        row[2] = json!(null);
        let err = OhlcvRecord::try_from(&row).unwrap_err();
        assert!(err.to_string().contains("open"));
    }

    #[test]
    fn test_rows_to_records_preserves_order_and_count() {
        let mut second = sample_row();
        second[0] = json!("2024-01-01T00:15:00Z");
        let recs = rows_to_records(&[sample_row(), second]).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].time_received_iso, "2024-01-01T00:15:00Z");
    }
}
