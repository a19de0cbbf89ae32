//! Public API surface for the parity backend.
//!
//! This file consolidates the domain records and result types shared by the
//! repository, service and HTTP layers. All types derive `Serialize` so the
//! HTTP layer can render them directly or wrap them in its own DTOs.

pub use crate::models::Parity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Default number of records returned by a history query.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Largest history page a caller may request.
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Check record identifier, assigned sequentially by the store.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CheckId(pub u64);

impl CheckId {
    pub fn new(value: u64) -> Self {
        CheckId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// One parity evaluation as stored in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecord {
    pub id: CheckId,
    pub value: i64,
    pub parity: Parity,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl CheckRecord {
    pub fn is_even(&self) -> bool {
        self.parity.is_even()
    }

    pub fn is_odd(&self) -> bool {
        self.parity.is_odd()
    }
}

/// Aggregate counts over the whole history.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_checks: usize,
    pub even_count: usize,
    pub odd_count: usize,
    pub last_check: Option<CheckRecord>,
}

/// Outcome of a single parity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityResult {
    pub id: CheckId,
    pub number: i64,
    pub parity: Parity,
    pub is_even: bool,
    pub is_odd: bool,
    pub description: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl From<CheckRecord> for ParityResult {
    fn from(record: CheckRecord) -> Self {
        Self {
            id: record.id,
            number: record.value,
            parity: record.parity,
            is_even: record.is_even(),
            is_odd: record.is_odd(),
            description: Parity::describe(record.value),
            timestamp: record.timestamp,
        }
    }
}

/// A page of recent history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPage {
    pub history: Vec<CheckRecord>,
    pub count: usize,
    /// Effective limit applied to the query.
    pub limit: usize,
}

/// Share of the history held by one parity.
///
/// Stored in basis points (hundredths of a percent). `Undefined` is used
/// when the history is empty and serializes as the number `0`; defined
/// values serialize as two-decimal strings such as `"50.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentage {
    Undefined,
    BasisPoints(u32),
}

impl Percentage {
    /// `count / total * 100` rounded half-to-even at two decimals.
    ///
    /// Complementary counts always sum to exactly `100.00`.
    pub fn from_counts(count: usize, total: usize) -> Self {
        if total == 0 {
            return Percentage::Undefined;
        }

        let numerator = count as u128 * 10_000;
        let total = total as u128;
        let quotient = numerator / total;
        let twice_remainder = (numerator % total) * 2;

        let rounded = if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
            quotient + 1
        } else {
            quotient
        };

        Percentage::BasisPoints(rounded as u32)
    }

    pub fn basis_points(&self) -> u32 {
        match self {
            Percentage::Undefined => 0,
            Percentage::BasisPoints(bp) => *bp,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.basis_points() as f64 / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Undefined => f.write_str("0"),
            Percentage::BasisPoints(bp) => write!(f, "{}.{:02}", bp / 100, bp % 100),
        }
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Percentage::Undefined => serializer.serialize_u8(0),
            Percentage::BasisPoints(_) => serializer.collect_str(self),
        }
    }
}

/// Statistics over the whole history, including percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityStats {
    pub total_checks: usize,
    pub even_count: usize,
    pub odd_count: usize,
    pub even_percentage: Percentage,
    pub odd_percentage: Percentage,
    pub last_check: Option<CheckRecord>,
}

impl From<HistoryStats> for ParityStats {
    fn from(stats: HistoryStats) -> Self {
        Self {
            total_checks: stats.total_checks,
            even_count: stats.even_count,
            odd_count: stats.odd_count,
            even_percentage: Percentage::from_counts(stats.even_count, stats.total_checks),
            odd_percentage: Percentage::from_counts(stats.odd_count, stats.total_checks),
            last_check: stats.last_check,
        }
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
