//! Cosine similarity between embedding vectors.

use raglens_core::{RaglensError, Result};

/// Compute the cosine similarity between two vectors.
///
/// Returns `dot(a, b) / (‖a‖·‖b‖)`, a symmetric score in `[-1, 1]`.
/// Deterministic given the same vectors; no side effects.
///
/// # Errors
///
/// Fails explicitly instead of producing NaN when either vector has zero
/// magnitude (the embedding of empty text), or when the vectors have
/// different lengths. Callers must guard against empty-text embeddings
/// before scoring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(RaglensError::validation(format!(
            "vector length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    if a.is_empty() {
        return Err(RaglensError::validation("cannot compare empty vectors"));
    }

    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(RaglensError::validation(
            "cosine similarity is undefined for zero-magnitude vectors",
        ));
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_vectors() {
        let v = vec![0.3, 0.5, 0.2];
        assert_relative_eq!(cosine_similarity(&v, &v).unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_relative_eq!(cosine_similarity(&a, &b).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert_relative_eq!(cosine_similarity(&a, &b).unwrap(), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_magnitude_is_error() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert!(cosine_similarity(&a, &b).is_err());
        assert!(cosine_similarity(&b, &a).is_err());
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let a = vec![1.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!(cosine_similarity(&a, &b).is_err());
    }

    #[test]
    fn test_empty_vectors_are_error() {
        assert!(cosine_similarity(&[], &[]).is_err());
    }
}
