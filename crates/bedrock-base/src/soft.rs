// Soft primitives
// Value wrappers exposing primitive arithmetic through one uniform interface

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A wrapper around a single primitive value.
pub trait SoftPrimitive {
    type Native: Copy;

    fn to_native(&self) -> Self::Native;
}

/// A soft number widened to the largest representation of its family.
/// Used to pass operands between soft numbers of different widths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Wide {
    Integer(i64),
    Float(f64),
}

impl Wide {
    pub fn as_f64(self) -> f64 {
        match self {
            Wide::Integer(value) => value as f64,
            Wide::Float(value) => value,
        }
    }
}

/// Mixed comparisons promote the integer side to floating point.
impl PartialEq for Wide {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Wide::Integer(left), Wide::Integer(right)) => left == right,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Wide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Wide::Integer(left), Wide::Integer(right)) => Some(left.cmp(right)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

/// Arithmetic on a soft number.
///
/// Every operation returns a new value of the receiver's type. Operands of
/// any soft number type are first narrowed to the receiver's native type,
/// the way a primitive cast would. Integer arithmetic wraps on overflow;
/// integer division or remainder by zero panics like the native operators.
pub trait SoftNumber: SoftPrimitive + Sized {
    /// Negate the value.
    fn invert(&self) -> Self;
    fn increment(&self) -> Self;
    fn decrement(&self) -> Self;
    fn add<N: SoftNumber>(&self, operand: &N) -> Self;
    fn subtract<N: SoftNumber>(&self, operand: &N) -> Self;
    fn multiply<N: SoftNumber>(&self, operand: &N) -> Self;
    fn divide<N: SoftNumber>(&self, operand: &N) -> Self;
    /// The quotient with the fractional part discarded.
    fn divide_without_remainder<N: SoftNumber>(&self, operand: &N) -> Self;
    /// The remainder of the division, with the sign of the receiver.
    fn divide_by_module<N: SoftNumber>(&self, operand: &N) -> Self;
    fn widen(&self) -> Wide;
}

macro_rules! soft_integer {
    ($(#[$meta:meta])* $name:ident, $native:ty, $via:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($native);

        impl $name {
            pub const fn new(value: $native) -> Self {
                Self(value)
            }

            fn narrow(operand: Wide) -> $native {
                match operand {
                    Wide::Integer(value) => value as $native,
                    Wide::Float(value) => (value as $via) as $native,
                }
            }

            fn operand<N: SoftNumber>(operand: &N) -> $native {
                Self::narrow(operand.widen())
            }
        }

        impl SoftPrimitive for $name {
            type Native = $native;

            fn to_native(&self) -> $native {
                self.0
            }
        }

        impl SoftNumber for $name {
            fn invert(&self) -> Self {
                Self(self.0.wrapping_neg())
            }

            fn increment(&self) -> Self {
                Self(self.0.wrapping_add(1))
            }

            fn decrement(&self) -> Self {
                Self(self.0.wrapping_sub(1))
            }

            fn add<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0.wrapping_add(Self::operand(operand)))
            }

            fn subtract<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0.wrapping_sub(Self::operand(operand)))
            }

            fn multiply<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0.wrapping_mul(Self::operand(operand)))
            }

            fn divide<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0.wrapping_div(Self::operand(operand)))
            }

            fn divide_without_remainder<N: SoftNumber>(&self, operand: &N) -> Self {
                self.divide(operand)
            }

            fn divide_by_module<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0.wrapping_rem(Self::operand(operand)))
            }

            fn widen(&self) -> Wide {
                Wide::Integer(i64::from(self.0))
            }
        }

        impl From<$native> for $name {
            fn from(value: $native) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

macro_rules! soft_float {
    ($(#[$meta:meta])* $name:ident, $native:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($native);

        impl $name {
            pub const fn new(value: $native) -> Self {
                Self(value)
            }

            fn operand<N: SoftNumber>(operand: &N) -> $native {
                match operand.widen() {
                    Wide::Integer(value) => value as $native,
                    Wide::Float(value) => value as $native,
                }
            }
        }

        impl SoftPrimitive for $name {
            type Native = $native;

            fn to_native(&self) -> $native {
                self.0
            }
        }

        impl SoftNumber for $name {
            fn invert(&self) -> Self {
                Self(-self.0)
            }

            fn increment(&self) -> Self {
                Self(self.0 + 1.0)
            }

            fn decrement(&self) -> Self {
                Self(self.0 - 1.0)
            }

            fn add<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0 + Self::operand(operand))
            }

            fn subtract<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0 - Self::operand(operand))
            }

            fn multiply<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0 * Self::operand(operand))
            }

            fn divide<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0 / Self::operand(operand))
            }

            fn divide_without_remainder<N: SoftNumber>(&self, operand: &N) -> Self {
                let divisor = Self::operand(operand);
                Self((self.0 - self.0 % divisor) / divisor)
            }

            fn divide_by_module<N: SoftNumber>(&self, operand: &N) -> Self {
                Self(self.0 % Self::operand(operand))
            }

            fn widen(&self) -> Wide {
                Wide::Float(f64::from(self.0))
            }
        }

        impl From<$native> for $name {
            fn from(value: $native) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

soft_integer!(
    /// An 8-bit signed integer.
    SoftByte, i8, i32
);
soft_integer!(
    /// A 16-bit signed integer.
    SoftShort, i16, i32
);
soft_integer!(
    /// A 32-bit signed integer.
    SoftInteger, i32, i32
);
soft_integer!(
    /// A 64-bit signed integer.
    SoftLong, i64, i64
);
soft_float!(
    /// A 32-bit float.
    SoftFloat, f32
);
soft_float!(
    /// A 64-bit float.
    SoftDouble, f64
);

//-----------------------------------------------------------------------------
// Soft boolean
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoftBoolean(bool);

impl SoftBoolean {
    pub const TRUE: SoftBoolean = SoftBoolean(true);
    pub const FALSE: SoftBoolean = SoftBoolean(false);

    pub const fn of(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    pub fn invert(self) -> Self {
        Self::of(!self.0)
    }

    pub fn and(self, operand: SoftBoolean) -> Self {
        Self::of(self.0 && operand.0)
    }

    pub fn or(self, operand: SoftBoolean) -> Self {
        Self::of(self.0 || operand.0)
    }

    pub fn xor(self, operand: SoftBoolean) -> Self {
        Self::of(self.0 ^ operand.0)
    }
}

impl SoftPrimitive for SoftBoolean {
    type Native = bool;

    fn to_native(&self) -> bool {
        self.0
    }
}

impl From<bool> for SoftBoolean {
    fn from(value: bool) -> Self {
        Self::of(value)
    }
}

impl fmt::Display for SoftBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_arithmetic() {
        let seven = SoftInteger::new(7);
        assert_eq!(seven.add(&SoftByte::new(3)).to_native(), 10);
        assert_eq!(seven.subtract(&SoftLong::new(10)).to_native(), -3);
        assert_eq!(seven.multiply(&SoftShort::new(2)).to_native(), 14);
        assert_eq!(seven.divide(&SoftInteger::new(2)).to_native(), 3);
        assert_eq!(seven.divide_without_remainder(&SoftInteger::new(2)).to_native(), 3);
        assert_eq!(seven.divide_by_module(&SoftInteger::new(2)).to_native(), 1);
        assert_eq!(seven.invert().to_native(), -7);
        assert_eq!(seven.increment().decrement(), seven);
    }

    #[test]
    fn test_integer_wraps() {
        assert_eq!(SoftByte::new(i8::MAX).increment().to_native(), i8::MIN);
        assert_eq!(SoftInteger::new(i32::MIN).invert().to_native(), i32::MIN);
        assert_eq!(SoftByte::new(1).add(&SoftInteger::new(256)).to_native(), 1);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let _ = SoftInteger::new(1).divide(&SoftInteger::new(0));
    }

    #[test]
    fn test_float_operand_truncates_for_integers() {
        assert_eq!(SoftInteger::new(10).add(&SoftDouble::new(2.9)).to_native(), 12);
        assert_eq!(SoftLong::new(10).subtract(&SoftFloat::new(-1.5)).to_native(), 11);
    }

    #[test]
    fn test_float_arithmetic() {
        let value = SoftDouble::new(7.5);
        assert_eq!(value.divide(&SoftInteger::new(2)).to_native(), 3.75);
        assert_eq!(value.divide_without_remainder(&SoftInteger::new(2)).to_native(), 3.0);
        assert_eq!(value.divide_by_module(&SoftInteger::new(2)).to_native(), 1.5);
        assert_eq!(SoftFloat::new(1.0).divide(&SoftFloat::new(0.0)).to_native(), f32::INFINITY);
    }

    #[test]
    fn test_soft_boolean() {
        assert_eq!(SoftBoolean::TRUE.and(SoftBoolean::FALSE), SoftBoolean::FALSE);
        assert_eq!(SoftBoolean::TRUE.or(SoftBoolean::FALSE), SoftBoolean::TRUE);
        assert_eq!(SoftBoolean::TRUE.xor(SoftBoolean::TRUE), SoftBoolean::FALSE);
        assert_eq!(SoftBoolean::FALSE.invert(), SoftBoolean::TRUE);
        assert_eq!(SoftBoolean::of(true).to_string(), "true");
        assert!(SoftBoolean::from(true).to_native());
    }

    #[test]
    fn test_wide_mixed_comparison() {
        assert_eq!(Wide::Integer(3), Wide::Float(3.0));
        assert!(Wide::Integer(3) < Wide::Float(3.5));
    }

    proptest! {
        #[test]
        fn integer_operations_delegate_to_native(a: i32, b: i32) {
            let left = SoftInteger::new(a);
            let right = SoftInteger::new(b);
            prop_assert_eq!(left.add(&right).to_native(), a.wrapping_add(b));
            prop_assert_eq!(left.subtract(&right).to_native(), a.wrapping_sub(b));
            prop_assert_eq!(left.multiply(&right).to_native(), a.wrapping_mul(b));
            if b != 0 {
                prop_assert_eq!(left.divide(&right).to_native(), a.wrapping_div(b));
                prop_assert_eq!(left.divide_by_module(&right).to_native(), a.wrapping_rem(b));
            }
        }

        #[test]
        fn long_operands_narrow_like_casts(a: i16, b: i64) {
            let result = SoftShort::new(a).add(&SoftLong::new(b)).to_native();
            prop_assert_eq!(result, a.wrapping_add(b as i16));
        }
    }
}
