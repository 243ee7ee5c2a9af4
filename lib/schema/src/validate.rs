use crate::options::ScoringOptions;
use scalescore_core::{Error, Result};
use tracing::trace;

/// Check that scoring options are complete and consistent
///
/// Runs before any table is touched and returns the first problem found:
/// tolerance outside [0, 1], a rescaled score kind without a response
/// range, reverse coding without a response range, a malformed range,
/// or a blank score name.
pub fn validate_options(options: &ScoringOptions) -> Result<()> {
    let tolerance = options.missing_tolerance;
    if !(0.0..=1.0).contains(&tolerance) {
        return Err(Error::InvalidTolerance(tolerance));
    }

    if options.score_kind.requires_range() && options.response_range.is_none() {
        return Err(Error::RangeRequiredForKind(options.score_kind.to_string()));
    }

    if !options.reverse_items.designates_nothing() && options.response_range.is_none() {
        return Err(Error::RangeRequiredForReverse);
    }

    if let Some(range) = &options.response_range {
        range.check()?;
    }

    if options.score_name.trim().is_empty() {
        return Err(Error::EmptyScoreName);
    }

    trace!(score_name = %options.score_name, kind = %options.score_kind, "scoring options valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ScoreKind;
    use crate::range::ResponseRange;
    use scalescore_core::{ColumnSpec, ErrorKind};

    fn options() -> ScoringOptions {
        ScoringOptions {
            response_range: Some(ResponseRange { min: 0.0, max: 4.0 }),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_options() {
        assert!(validate_options(&options()).is_ok());
    }

    #[test]
    fn test_tolerance_bounds() {
        for ok in [0.0, 0.5, 1.0] {
            let opts = ScoringOptions { missing_tolerance: ok, ..options() };
            assert!(validate_options(&opts).is_ok());
        }
        for bad in [-0.01, 1.01, f64::NAN] {
            let opts = ScoringOptions { missing_tolerance: bad, ..options() };
            let err = validate_options(&opts).unwrap_err();
            assert!(matches!(err, Error::InvalidTolerance(_)));
            assert_eq!(err.kind(), ErrorKind::Parameter);
        }
    }

    #[test]
    fn test_rescaled_kinds_need_range() {
        for kind in [ScoreKind::Hundred, ScoreKind::Pomp] {
            let opts = ScoringOptions {
                score_kind: kind,
                response_range: None,
                ..Default::default()
            };
            assert_eq!(
                validate_options(&opts),
                Err(Error::RangeRequiredForKind(kind.to_string()))
            );
        }
    }

    #[test]
    fn test_sum_and_mean_need_no_range() {
        for kind in [ScoreKind::Sum, ScoreKind::Mean] {
            let opts = ScoringOptions {
                score_kind: kind,
                response_range: None,
                ..Default::default()
            };
            assert!(validate_options(&opts).is_ok());
        }
    }

    #[test]
    fn test_reverse_needs_range() {
        let opts = ScoringOptions {
            score_kind: ScoreKind::Mean,
            reverse_items: ColumnSpec::names(["q1"]),
            response_range: None,
            ..Default::default()
        };
        assert_eq!(validate_options(&opts), Err(Error::RangeRequiredForReverse));

        // Reversing nothing does not need a range
        let opts = ScoringOptions {
            reverse_items: ColumnSpec::none(),
            ..opts
        };
        assert!(validate_options(&opts).is_ok());
    }

    #[test]
    fn test_malformed_range() {
        let opts = ScoringOptions {
            response_range: Some(ResponseRange { min: 4.0, max: 0.0 }),
            ..Default::default()
        };
        assert_eq!(
            validate_options(&opts),
            Err(Error::InvalidRange { min: 4.0, max: 0.0 })
        );
    }

    #[test]
    fn test_blank_score_name() {
        let opts = ScoringOptions {
            score_name: "  ".to_string(),
            ..options()
        };
        assert_eq!(validate_options(&opts), Err(Error::EmptyScoreName));
    }

    #[test]
    fn test_first_failure_wins() {
        let opts = ScoringOptions {
            missing_tolerance: 2.0,
            response_range: None,
            ..Default::default()
        };
        assert_eq!(validate_options(&opts), Err(Error::InvalidTolerance(2.0)));
    }
}
