//! Base sequence generation.
//!
//! A [`Sequence`] is the ordered list of values that drives the table: its
//! values become the header row, the sidebar column and the factors of every
//! cell.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::SequenceKind;
use crate::Result;

/// Length of the Fibonacci run, independent of the requested limit
pub const FIBONACCI_LEN: usize = 7;

/// Ordered base values of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<u64>,
}

impl Sequence {
    /// Values in order
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<u64>> for Sequence {
    fn from(values: Vec<u64>) -> Self {
        Self { values }
    }
}

impl SequenceKind {
    /// Produce the sequence for this kind.
    ///
    /// `limit` is the number of primes to produce; Fibonacci always yields
    /// [`FIBONACCI_LEN`] values and ignores it.
    pub fn generate(self, limit: usize) -> Sequence {
        let values = match self {
            SequenceKind::Primes => primes(limit),
            SequenceKind::Fibonacci => fibonacci(),
        };
        debug!(kind = %self, limit, len = values.len(), "generated sequence");
        Sequence::from(values)
    }
}

/// Generate a sequence from its kind name.
///
/// Fails with [`SeqgridError::UnsupportedSequenceType`](crate::SeqgridError::UnsupportedSequenceType)
/// when `kind` is not a known sequence.
pub fn generate(kind: &str, limit: usize) -> Result<Sequence> {
    let kind: SequenceKind = kind.parse()?;
    Ok(kind.generate(limit))
}

/// First `limit` primes by trial division against the primes found so far.
fn primes(limit: usize) -> Vec<u64> {
    let mut found: Vec<u64> = Vec::new();
    let mut candidate = 2u64;

    while found.len() < limit {
        if found.iter().all(|prime| candidate % prime != 0) {
            found.push(candidate);
        }
        candidate += 1;
    }

    found
}

fn fibonacci() -> Vec<u64> {
    let mut values = vec![1u64, 1];
    while values.len() < FIBONACCI_LEN {
        let n = values.len();
        values.push(values[n - 1] + values[n - 2]);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqgridError;

    fn is_prime(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_first_ten_primes() {
        let seq = generate("primes", 10).unwrap();
        assert_eq!(seq.values(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_primes_are_complete_and_increasing() {
        for limit in 1..=60 {
            let seq = generate("primes", limit).unwrap();
            assert_eq!(seq.len(), limit);
            assert!(seq.values().iter().all(|&n| is_prime(n)));
            assert!(seq.values().windows(2).all(|w| w[0] < w[1]));

            // No prime skipped: the sequence is exactly the primes up to its last value
            let last = *seq.values().last().unwrap();
            let expected: Vec<u64> = (2..=last).filter(|&n| is_prime(n)).collect();
            assert_eq!(seq.values(), expected.as_slice());
        }
    }

    #[test]
    fn test_primes_zero_limit_is_empty() {
        let seq = generate("primes", 0).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_fibonacci_ignores_limit() {
        for limit in [0, 1, 3, 7, 10, 100] {
            let seq = generate("fibonacci", limit).unwrap();
            assert_eq!(seq.values(), &[1, 1, 2, 3, 5, 8, 13]);
        }
    }

    #[test]
    fn test_unknown_kind() {
        for limit in [0, 5, 10] {
            let err = generate("squares", limit).unwrap_err();
            assert!(matches!(err, SeqgridError::UnsupportedSequenceType(ref s) if s == "squares"));
        }
    }

    #[test]
    fn test_kind_generate_matches_named() {
        assert_eq!(
            SequenceKind::Primes.generate(4),
            generate("primes", 4).unwrap()
        );
    }

    #[test]
    fn test_sequence_serializes_as_array() {
        let seq = Sequence::from(vec![2, 3, 5]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[2,3,5]");
    }
}
