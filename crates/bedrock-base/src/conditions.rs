// Boolean condition helpers
// Non-failing counterparts of the validation checks

use crate::soft::SoftNumber;

pub fn is_null<T>(instance: &Option<T>) -> bool {
    instance.is_none()
}

pub fn not_null<T>(instance: &Option<T>) -> bool {
    instance.is_some()
}

pub fn equals<T: PartialEq + ?Sized>(primary: &T, secondary: &T) -> bool {
    primary == secondary
}

/// Always the exact negation of [`equals`].
pub fn not_equals<T: PartialEq + ?Sized>(primary: &T, secondary: &T) -> bool {
    !equals(primary, secondary)
}

/// Equality where either side may be absent; two absent values are equal.
pub fn equals_optional<T: PartialEq>(primary: Option<&T>, secondary: Option<&T>) -> bool {
    primary == secondary
}

pub fn not_equals_optional<T: PartialEq>(primary: Option<&T>, secondary: Option<&T>) -> bool {
    !equals_optional(primary, secondary)
}

/// Numeric equality across soft number types, compared after widening
/// both sides, like mixed-width primitive comparison.
pub fn numeric_equals<A: SoftNumber, B: SoftNumber>(primary: &A, secondary: &B) -> bool {
    primary.widen() == secondary.widen()
}

pub fn numeric_not_equals<A: SoftNumber, B: SoftNumber>(primary: &A, secondary: &B) -> bool {
    !numeric_equals(primary, secondary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soft::{SoftByte, SoftDouble, SoftInteger, SoftLong};

    #[test]
    fn test_null_checks() {
        assert!(is_null::<u8>(&None));
        assert!(not_null(&Some(1)));
        assert!(!not_null::<u8>(&None));
    }

    #[test]
    fn test_not_equals_negates_equals() {
        let cases = [(None, None), (Some(1), None), (None, Some(1)), (Some(1), Some(1)), (Some(1), Some(2))];
        for (left, right) in cases {
            assert_eq!(not_equals(&left, &right), !equals(&left, &right));
            assert_eq!(
                not_equals_optional(left.as_ref(), right.as_ref()),
                !equals_optional(left.as_ref(), right.as_ref())
            );
        }
        assert!(equals_optional::<u8>(None, None));
        assert!(equals("abc", "abc"));
    }

    #[test]
    fn test_numeric_equality_widens() {
        assert!(numeric_equals(&SoftByte::new(7), &SoftLong::new(7)));
        assert!(numeric_equals(&SoftInteger::new(2), &SoftDouble::new(2.0)));
        assert!(numeric_not_equals(&SoftInteger::new(2), &SoftDouble::new(2.5)));
    }
}
