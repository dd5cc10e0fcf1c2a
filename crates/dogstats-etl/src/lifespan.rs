//! Free-text lifespan normalization
//!
//! The breed API reports lifespans as loosely formatted text like
//! `"10 - 12 years"`. Depending on the spacing around the hyphen the string
//! tokenizes into either 3 or 4 whitespace-delimited tokens; both shapes are
//! accepted and any other count is malformed. A malformed string is a
//! record-granular failure: the caller skips the lifespan row for that one
//! breed and keeps going.

use thiserror::Error;

/// Errors from lifespan text normalization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifespanParseError {
    #[error("lifespan text {raw:?} has {found} token(s), expected 3 or 4")]
    TokenCount { raw: String, found: usize },

    #[error("lifespan token {token:?} is not an integer year count")]
    InvalidNumber { token: String },

    #[error("inverted lifespan range: min {min} > max {max}")]
    InvertedRange { min: i64, max: i64 },

    #[error("lifespan bounds must be positive years, got ({min}, {max})")]
    NonPositive { min: i64, max: i64 },
}

/// A validated lifespan range in whole years, `min <= max`, both positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifespanRange {
    pub min: i64,
    pub max: i64,
}

impl LifespanRange {
    /// Midpoint of the range, the single-number estimate used for ranking
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }
}

/// Parse a free-text lifespan range like `"10 - 12 years"` into a
/// validated [`LifespanRange`].
///
/// Tokenizes on whitespace and accepts the two shapes observed upstream:
/// `["10", "-", "12", "years"]` and `["10", "-", "12years"]`. The first
/// token is the lower bound; the third, with any trailing `years`/`year`
/// unit stripped, is the upper bound. The source never validates ordering,
/// so inverted or non-positive ranges are rejected here.
pub fn parse_lifespan(raw: &str) -> Result<LifespanRange, LifespanParseError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();

    if tokens.len() != 3 && tokens.len() != 4 {
        return Err(LifespanParseError::TokenCount {
            raw: raw.to_string(),
            found: tokens.len(),
        });
    }

    let min = parse_year_token(tokens[0])?;
    let max = parse_year_token(strip_unit(tokens[2]))?;

    if min <= 0 || max <= 0 {
        return Err(LifespanParseError::NonPositive { min, max });
    }
    if min > max {
        return Err(LifespanParseError::InvertedRange { min, max });
    }

    Ok(LifespanRange { min, max })
}

/// Nominal "breed age" metric: the first whitespace-delimited token of the
/// raw lifespan text, defaulting to 0 when absent or non-numeric.
pub fn nominal_age(raw: &str) -> i64 {
    raw.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

fn parse_year_token(token: &str) -> Result<i64, LifespanParseError> {
    token
        .parse()
        .map_err(|_| LifespanParseError::InvalidNumber {
            token: token.to_string(),
        })
}

/// Strip a trailing `years`/`year` unit (any case) and surrounding whitespace
fn strip_unit(token: &str) -> &str {
    let trimmed = token.trim();
    for unit in ["years", "year"] {
        let Some(split) = trimmed.len().checked_sub(unit.len()) else {
            continue;
        };
        if trimmed.is_char_boundary(split) && trimmed[split..].eq_ignore_ascii_case(unit) {
            return trimmed[..split].trim_end();
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_token_range() {
        let range = parse_lifespan("10 - 12 years").unwrap();
        assert_eq!(range, LifespanRange { min: 10, max: 12 });
    }

    #[test]
    fn test_three_token_range_with_attached_unit() {
        let range = parse_lifespan("10 - 12years").unwrap();
        assert_eq!(range, LifespanRange { min: 10, max: 12 });
    }

    #[test]
    fn test_three_token_range_without_unit() {
        let range = parse_lifespan("8 - 10").unwrap();
        assert_eq!(range, LifespanRange { min: 8, max: 10 });
    }

    #[test]
    fn test_unit_case_and_singular() {
        assert_eq!(
            parse_lifespan("1 - 1 Year").unwrap(),
            LifespanRange { min: 1, max: 1 }
        );
        assert_eq!(
            parse_lifespan("10 - 12 YEARS").unwrap(),
            LifespanRange { min: 10, max: 12 }
        );
    }

    #[test]
    fn test_wrong_token_count_is_malformed() {
        assert!(matches!(
            parse_lifespan("12 years"),
            Err(LifespanParseError::TokenCount { found: 2, .. })
        ));
        assert!(matches!(
            parse_lifespan(""),
            Err(LifespanParseError::TokenCount { found: 0, .. })
        ));
        assert!(matches!(
            parse_lifespan("about 10 - 12 years"),
            Err(LifespanParseError::TokenCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_non_numeric_bound_is_malformed() {
        assert!(matches!(
            parse_lifespan("ten - 12 years"),
            Err(LifespanParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_lifespan("10 - twelve years"),
            Err(LifespanParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        // The upstream source never checks ordering; we reject it.
        assert_eq!(
            parse_lifespan("12 - 10 years"),
            Err(LifespanParseError::InvertedRange { min: 12, max: 10 })
        );
    }

    #[test]
    fn test_non_positive_bounds_rejected() {
        assert!(matches!(
            parse_lifespan("0 - 12 years"),
            Err(LifespanParseError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_midpoint() {
        let range = parse_lifespan("8 - 10 years").unwrap();
        assert_eq!(range.midpoint(), 9.0);

        let odd = parse_lifespan("9 - 12 years").unwrap();
        assert_eq!(odd.midpoint(), 10.5);
    }

    #[test]
    fn test_nominal_age() {
        assert_eq!(nominal_age("10 - 12 years"), 10);
        assert_eq!(nominal_age(""), 0);
        assert_eq!(nominal_age("about ten years"), 0);
    }
}
