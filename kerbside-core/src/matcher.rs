//! Road-name similarity scoring.
//!
//! The [`RoadNameMatcher`] trait scores how closely a candidate road name
//! matches a desired one. [`FuzzyRoadNameMatcher`] is the default strategy,
//! based on edit distance with direction-token awareness.

use crate::{Percent, RoadName};

/// Score the similarity of two road names as a percentage.
///
/// Implementations must be pure (no side effects) and must return a score
/// in `[0, 100]`; the [`Percent`] type enforces the range. They need not
/// be commutative: `desired` is the name the caller asked for, and
/// asymmetric strategies may weight it differently.
/// Matchers must be thread-safe (`Send` + `Sync`) so configurations can
/// be shared across concurrent queries.
///
/// # Examples
///
/// ```
/// use kerbside_core::{Percent, RoadName, RoadNameMatcher};
///
/// struct ExactMatcher;
///
/// impl RoadNameMatcher for ExactMatcher {
///     fn matches(&self, candidate: &RoadName, desired: &RoadName) -> Percent {
///         if candidate.eq_ignore_case(desired) {
///             Percent::HUNDRED
///         } else {
///             Percent::ZERO
///         }
///     }
/// }
///
/// # fn main() -> Result<(), kerbside_core::RoadNameError> {
/// let matcher = ExactMatcher;
/// let a = RoadName::new("Main St")?;
/// let b = RoadName::new("MAIN ST")?;
/// assert_eq!(matcher.matches(&a, &b), Percent::HUNDRED);
/// # Ok(())
/// # }
/// ```
pub trait RoadNameMatcher: Send + Sync {
    /// Return the closeness of `candidate` to `desired`.
    fn matches(&self, candidate: &RoadName, desired: &RoadName) -> Percent;
}

/// Edit-distance matcher with direction-token awareness.
///
/// Scoring proceeds in order:
///
/// 1. Case-insensitive equality scores 100.
/// 2. If both names carry a direction token and the tokens differ, the
///    names belong to different carriageways and score 0 outright.
/// 3. Otherwise the Levenshtein distance between the lowercased names is
///    scaled against the desired name's length:
///    `(length - distance) * 100 / length`, clamped into `[0, 100]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzyRoadNameMatcher;

impl RoadNameMatcher for FuzzyRoadNameMatcher {
    fn matches(&self, candidate: &RoadName, desired: &RoadName) -> Percent {
        if candidate.eq_ignore_case(desired) {
            return Percent::HUNDRED;
        }
        if let (Some(candidate_direction), Some(desired_direction)) =
            (candidate.direction(), desired.direction())
        {
            if candidate_direction != desired_direction {
                return Percent::ZERO;
            }
        }

        let desired_lower = desired.as_str().to_lowercase();
        let length = desired_lower.chars().count();
        if length == 0 {
            return Percent::ZERO;
        }
        let distance = strsim::levenshtein(&candidate.as_str().to_lowercase(), &desired_lower);

        let length = length as f64;
        let raw = (length - distance as f64) * 100.0 / length;
        Percent::clamped(raw)
    }
}
