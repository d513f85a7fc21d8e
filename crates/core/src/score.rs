//! Movie score arithmetic.
//!
//! Scores are stored at full precision and rounded to two decimal places
//! only when reported, ties going to the even neighbour.

/// Round a score to two decimal places, ties to even.
///
/// Rounding is decided on the exact binary value of `score`, so `4.135`
/// (stored as slightly less than 4.135) rounds down. Scaling by 100 first
/// would turn such values into exact ties.
///
/// ```
/// use dsmovie_core::score::round_score;
///
/// assert_eq!(round_score(4.375), 4.38);
/// assert_eq!(round_score(4.625), 4.62);
/// assert_eq!(round_score(4.135), 4.13);
/// assert_eq!(round_score(3.0), 3.0);
/// ```
pub fn round_score(score: f64) -> f64 {
    format!("{score:.2}").parse().unwrap_or(score)
}

/// Arithmetic mean of the given user scores, `0.0` for an empty slice.
pub fn mean_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
