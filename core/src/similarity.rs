/// Sum of pairwise products.
pub fn dot<I: IntoIterator<Item = (f64, f64)>>(pairs: I) -> f64 {
    pairs.into_iter().fold(0.0, |acc, (x, y)| acc + x * y)
}

/// Euclidean length.
pub fn magnitude<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(0.0, |acc, x| acc + x * x).sqrt()
}

/// Cosine of the angle between `a` and `b`, in `[-1, 1]`.
///
/// Returns 0.0 when either vector has zero magnitude. Both vectors must come
/// from the same vocabulary; mismatched lengths panic in debug builds.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors from different vocabularies");
    let norm_a = magnitude(a.iter().copied());
    let norm_b = magnitude(b.iter().copied());
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a.iter().copied().zip(b.iter().copied())) / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = [0.3, -1.2, 4.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn opposite_and_orthogonal() {
        assert!((cosine_similarity(&[1.0, 0.0], &[-2.0, 0.0]) + 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 5.0]), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "vectors from different vocabularies")]
    fn mismatched_lengths_panic_in_debug() {
        cosine_similarity(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn symmetric() {
        let a = [0.1, 0.7, -0.2];
        let b = [0.4, 0.0, 0.9];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }
}
