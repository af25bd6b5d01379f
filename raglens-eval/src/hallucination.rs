//! Aggregate hallucination rate over citation records.

use raglens_core::types::CitationRecord;

use crate::rounding::round_f32;

/// Percentage of sentences with no supporting chunk, in `[0, 100]`,
/// rounded to 2 decimals.
///
/// An empty record list yields `0.0`: "no sentences" is deliberately not
/// treated as "fully hallucinated".
#[must_use]
pub fn hallucination_rate(records: &[CitationRecord]) -> f32 {
    if records.is_empty() {
        return 0.0;
    }

    let unsupported = records.iter().filter(|r| !r.is_supported()).count();

    #[allow(clippy::cast_precision_loss)]
    round_f32(unsupported as f32 * 100.0 / records.len() as f32, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(citations: Vec<usize>) -> CitationRecord {
        CitationRecord::new("a sentence.", citations, 0.5)
    }

    #[test]
    fn test_empty_records_is_zero() {
        assert_relative_eq!(hallucination_rate(&[]), 0.0);
    }

    #[test]
    fn test_all_supported_is_zero() {
        let records = vec![record(vec![0]), record(vec![1, 2])];
        assert_relative_eq!(hallucination_rate(&records), 0.0);
    }

    #[test]
    fn test_all_unsupported_is_hundred() {
        let records = vec![record(vec![]), record(vec![])];
        assert_relative_eq!(hallucination_rate(&records), 100.0);
    }

    #[test]
    fn test_mixed() {
        let records = vec![record(vec![0]), record(vec![]), record(vec![1]), record(vec![])];
        assert_relative_eq!(hallucination_rate(&records), 50.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let records = vec![record(vec![]), record(vec![0]), record(vec![0])];
        assert_relative_eq!(hallucination_rate(&records), 33.33, epsilon = 1e-4);
    }
}
