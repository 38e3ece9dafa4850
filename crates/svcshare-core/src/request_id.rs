//! Envelope request-ID generation.
//!
//! The request ID is a correlation token for logs and platform support, not a
//! deduplication key. Two strategies share the same wire type.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use uuid::Uuid;

use crate::defaults::REQUEST_ID_SUFFIX_RANGE;

/// How [`generate`] builds request IDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestIdStrategy {
    /// Unix seconds followed by a zero-padded six-digit random suffix.
    #[default]
    TimestampRandom,
    /// Random UUID v4 without hyphens.
    Uuid,
}

impl fmt::Display for RequestIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimestampRandom => f.write_str("timestamp"),
            Self::Uuid => f.write_str("uuid"),
        }
    }
}

impl FromStr for RequestIdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" | "timestamp_random" => Ok(Self::TimestampRandom),
            "uuid" => Ok(Self::Uuid),
            other => Err(format!(
                "unknown request ID strategy '{}' (expected 'timestamp' or 'uuid')",
                other
            )),
        }
    }
}

/// Generate a request ID with the given strategy.
pub fn generate(strategy: RequestIdStrategy) -> String {
    match strategy {
        RequestIdStrategy::TimestampRandom => timestamp_random(),
        RequestIdStrategy::Uuid => Uuid::new_v4().simple().to_string(),
    }
}

fn timestamp_random() -> String {
    let suffix = rand::thread_rng().gen_range(0..REQUEST_ID_SUFFIX_RANGE);
    format!("{}{:06}", chrono::Utc::now().timestamp(), suffix)
}
