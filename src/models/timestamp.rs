//! Timestamp field
//!
//! ISO-8601 text that is validated on read and written back verbatim.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Offset-less form, e.g. `2023-05-01T09:30:00` or `2023-05-01T09:30:00.000`
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// == Timestamp ==
/// A creation or due time.
///
/// The server never orders or compares these, so the original text is kept
/// as-is and a load/save cycle leaves it byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp(String);

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    /// Accepts RFC 3339 (with offset) or a naive ISO-8601 date-time.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if DateTime::parse_from_rfc3339(raw).is_err() {
            NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)?;
        }
        Ok(Self(raw.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}
