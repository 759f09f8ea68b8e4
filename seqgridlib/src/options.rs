//! Input options for grid generation.
//!
//! `GridConfig` is the only configuration the pipeline takes: which
//! sequence to generate and how long it should be.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SeqgridError;

/// Sequence type used when none is given
pub const DEFAULT_SEQUENCE_TYPE: &str = "primes";

/// Sequence length used when none is given
pub const DEFAULT_LIMIT: usize = 10;

/// Largest limit the pipeline accepts
pub const MAX_LIMIT: usize = 1_000;

/// Algorithm used to produce the base sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// First `limit` primes
    Primes,
    /// Fixed seven-element Fibonacci run
    Fibonacci,
}

impl SequenceKind {
    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceKind::Primes => "primes",
            SequenceKind::Fibonacci => "fibonacci",
        }
    }

    /// Whether this kind honors the requested length
    pub fn uses_limit(&self) -> bool {
        matches!(self, SequenceKind::Primes)
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SequenceKind {
    type Err = SeqgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primes" => Ok(SequenceKind::Primes),
            "fibonacci" => Ok(SequenceKind::Fibonacci),
            _ => Err(SeqgridError::UnsupportedSequenceType(s.to_string())),
        }
    }
}

/// Configuration passed to the pipeline entry point.
///
/// `sequence_type` stays a raw string so unknown kinds are reported by the
/// generator rather than rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Sequence kind name ("primes" or "fibonacci")
    pub sequence_type: String,
    /// Requested sequence length (ignored for fibonacci)
    pub limit: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            sequence_type: DEFAULT_SEQUENCE_TYPE.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl GridConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the sequence type
    pub fn sequence_type(mut self, sequence_type: impl Into<String>) -> Self {
        self.sequence_type = sequence_type.into();
        self
    }

    /// Builder: set the limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GridConfig::default();
        assert_eq!(config.sequence_type, "primes");
        assert_eq!(config.limit, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = GridConfig::new().sequence_type("fibonacci").limit(3);
        assert_eq!(config.sequence_type, "fibonacci");
        assert_eq!(config.limit, 3);
    }

    #[test]
    fn test_sequence_kind_from_str() {
        assert_eq!(
            "primes".parse::<SequenceKind>().unwrap(),
            SequenceKind::Primes
        );
        assert_eq!(
            "fibonacci".parse::<SequenceKind>().unwrap(),
            SequenceKind::Fibonacci
        );
    }

    #[test]
    fn test_sequence_kind_is_case_sensitive() {
        let err = "Primes".parse::<SequenceKind>().unwrap_err();
        assert!(matches!(err, SeqgridError::UnsupportedSequenceType(ref s) if s == "Primes"));
    }

    #[test]
    fn test_sequence_kind_display_matches_parse() {
        for kind in [SequenceKind::Primes, SequenceKind::Fibonacci] {
            assert_eq!(kind.to_string().parse::<SequenceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_sequence_kind_serde_name() {
        let json = serde_json::to_string(&SequenceKind::Fibonacci).unwrap();
        assert_eq!(json, "\"fibonacci\"");
    }
}
