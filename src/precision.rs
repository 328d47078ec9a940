//! Precision constants for measurement comparisons.
//!
//! Tolerances for deciding when a dimension counts as zero and when two
//! measures coincide. Degeneracy checks on the shape types go through
//! these values rather than exact `== 0.0` tests.

/// Confusion tolerance for checking coincidence of two measures.
/// Two lengths are considered equal if their difference < CONFUSION.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Square of CONFUSION, for comparing squared quantities (areas).
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Computational tolerance at machine epsilon level.
/// For low-level numerical comparisons, NOT geometric comparisons.
pub const COMPUTATIONAL: f64 = f64::EPSILON;

/// Returns true if two measures coincide within CONFUSION.
#[inline]
pub fn is_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < CONFUSION
}

/// Returns true if a measure is zero within CONFUSION.
#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() < CONFUSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(CONFUSION, 1.0e-7);
        assert_eq!(SQUARE_CONFUSION, CONFUSION * CONFUSION);
        assert_eq!(COMPUTATIONAL, f64::EPSILON);
    }

    #[test]
    fn test_is_equal() {
        assert!(is_equal(1.0, 1.0 + 1.0e-9));
        assert!(!is_equal(1.0, 1.0 + 1.0e-6));
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(-1.0e-9));
        assert!(!is_zero(1.0e-6));
    }
}
