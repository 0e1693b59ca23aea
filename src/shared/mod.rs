//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format QuestDB sends, so they can be used directly
//! in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── StkNo ───────────────────────────────────────────────────────────────────

/// Newtype for instrument identifiers (e.g. `"1155.KL"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StkNo(String);

impl StkNo {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StkNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StkNo {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StkNo {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for StkNo {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StkNo(s.to_string()))
    }
}

impl Serialize for StkNo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StkNo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(StkNo(s))
    }
}

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Candle bucket width for `SAMPLE BY` aggregation.
///
/// Serializes to QuestDB's literal bucket-width tokens (`"15m"`, `"1h"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "10m")]
    Minute10,
    #[default]
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hour2,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "6h")]
    Hour6,
    #[serde(rename = "8h")]
    Hour8,
    #[serde(rename = "12h")]
    Hour12,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "3d")]
    Day3,
    #[serde(rename = "1w")]
    Week1,
    #[serde(rename = "1M")]
    Month1,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute10 => "10m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour2 => "2h",
            Self::Hour4 => "4h",
            Self::Hour6 => "6h",
            Self::Hour8 => "8h",
            Self::Hour12 => "12h",
            Self::Day1 => "1d",
            Self::Day3 => "3d",
            Self::Week1 => "1w",
            Self::Month1 => "1M",
        }
    }

    pub const ALL: [Timeframe; 15] = [
        Self::Minute1,
        Self::Minute5,
        Self::Minute10,
        Self::Minute15,
        Self::Minute30,
        Self::Hour1,
        Self::Hour2,
        Self::Hour4,
        Self::Hour6,
        Self::Hour8,
        Self::Hour12,
        Self::Day1,
        Self::Day3,
        Self::Week1,
        Self::Month1,
    ];
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.as_str() == s)
            .ok_or_else(|| format!("unknown timeframe token: {s}"))
    }
}

// ─── TimeRange ───────────────────────────────────────────────────────────────

/// A QuestDB relative time-range expression, e.g. `"$now - 14d..$now"`.
///
/// Used verbatim in the `time_received_iso IN '<range>'` filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeRange(String);

impl TimeRange {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The trailing window `$now - {days}d..$now`.
    pub fn last_days(days: u32) -> Self {
        Self(format!("$now - {days}d..$now"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::last_days(14)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TimeRange {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TimeRange {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for TimeRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TimeRange(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stk_no_serde() {
        let id = StkNo::from("1155.KL");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1155.KL\"");
        let back: StkNo = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_timeframe_default_is_fifteen_minutes() {
        assert_eq!(Timeframe::default(), Timeframe::Minute15);
        assert_eq!(Timeframe::default().as_str(), "15m");
    }

    #[test]
    fn test_timeframe_tokens_round_trip() {
        for tf in Timeframe::ALL {
            let parsed: Timeframe = tf.as_str().parse().unwrap();
            assert_eq!(parsed, tf);
            let json = serde_json::to_string(&tf).unwrap();
            let back: Timeframe = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tf);
        }
    }

    #[test]
    fn test_timeframe_month_token_is_uppercase() {
        // 1M (month) is case-distinct from 1m (minute)
        assert_eq!(Timeframe::Month1.as_str(), "1M");
        assert_eq!("1m".parse::<Timeframe>().unwrap(), Timeframe::Minute1);
        assert_eq!("1M".parse::<Timeframe>().unwrap(), Timeframe::Month1);
    }

    #[test]
    fn test_timeframe_rejects_unknown_token() {
        assert!("7m".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_time_range_default() {
        assert_eq!(TimeRange::default().as_str(), "$now - 14d..$now");
    }

    #[test]
    fn test_time_range_last_days() {
        assert_eq!(TimeRange::last_days(3).as_str(), "$now - 3d..$now");
    }
}
