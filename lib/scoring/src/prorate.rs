use crate::missing::Missingness;

/// Whether a respondent has few enough missing items to be scored
///
/// Only a missing proportion strictly above the tolerance fails; a
/// respondent exactly at the tolerance is scored.
#[inline]
pub fn passes_gate(missingness: &Missingness, tolerance: f64) -> bool {
    missingness.missing_proportion <= tolerance
}

/// Drop a single score when its respondent exceeds the tolerance
#[inline]
pub fn gate_score(score: Option<f64>, missingness: &Missingness, tolerance: f64) -> Option<f64> {
    score.filter(|_| passes_gate(missingness, tolerance))
}

/// Apply the tolerance gate to every respondent, in row order
pub fn apply_gate(
    scores: Vec<Option<f64>>,
    missingness: &[Missingness],
    tolerance: f64,
) -> Vec<Option<f64>> {
    scores
        .into_iter()
        .zip(missingness)
        .map(|(score, m)| gate_score(score, m, tolerance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(valid_count: usize, missing_proportion: f64) -> Missingness {
        Missingness { valid_count, missing_proportion }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(passes_gate(&m(3, 0.25), 0.25));
        assert!(!passes_gate(&m(3, 0.25), 0.2));
        assert_eq!(gate_score(Some(12.0), &m(3, 0.25), 0.25), Some(12.0));
    }

    #[test]
    fn test_gate_nulls_over_tolerance() {
        assert_eq!(gate_score(Some(75.0), &m(3, 0.25), 0.2), None);
    }

    #[test]
    fn test_gate_keeps_missing_missing() {
        assert_eq!(gate_score(None, &m(0, 1.0), 1.0), None);
    }

    #[test]
    fn test_apply_gate_preserves_order() {
        let scores = vec![Some(1.0), Some(2.0), Some(3.0)];
        let missingness = [m(4, 0.0), m(1, 0.75), m(2, 0.5)];
        assert_eq!(
            apply_gate(scores, &missingness, 0.5),
            vec![Some(1.0), None, Some(3.0)]
        );
    }

    #[test]
    fn test_zero_tolerance() {
        assert!(passes_gate(&m(4, 0.0), 0.0));
        assert!(!passes_gate(&m(3, 0.25), 0.0));
    }
}
