//! Bounded numeric refinements over the integer primitives and the
//! arbitrary-precision decimal representation.
//!
//! Boundary semantics are inclusive at the named boundary: positive excludes
//! zero, non-negative and non-positive include it. A strictly stronger
//! guarantee widens freely into a weaker one ([`Positive`] into
//! [`NonNegative`]); no converse conversion exists.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

use dashu::{Integer, Rational};

use crate::error::RefinementError;

mod private {
    use dashu::Rational;

    pub trait Sealed {}

    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for Rational {}
}

/// Raw numeric types the refinements are defined over.
///
/// Sealed: the arithmetic closure arguments below are only sound for types
/// whose `Add`/`Mul` agree with the ordering against zero.
pub trait RefinedNumeric:
    Clone + Ord + fmt::Display + Add<Output = Self> + Mul<Output = Self> + private::Sealed
{
    fn zero() -> Self;
    fn one() -> Self;
}

macro_rules! refined_integer {
    ($($raw:ty),+) => {$(
        impl RefinedNumeric for $raw {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }
        }
    )+};
}

refined_integer!(i16, i32, i64);

impl RefinedNumeric for Rational {
    fn zero() -> Self {
        Rational::from(Integer::from(0))
    }

    fn one() -> Self {
        Rational::from(Integer::from(1))
    }
}

//-----------------------------------------------------------------------------
// The three refinement wrappers
//-----------------------------------------------------------------------------

macro_rules! refinement {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $($ord:ident)|+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<T: RefinedNumeric>(T);

        impl<T: RefinedNumeric> $name<T> {
            /// Validating factory: `None` when the raw value violates the
            /// refinement predicate, otherwise the refined value wrapping
            /// exactly the input.
            pub fn try_new(raw: T) -> Option<Self> {
                if matches!(raw.cmp(&T::zero()), $(Ordering::$ord)|+) {
                    Some(Self(raw))
                } else {
                    None
                }
            }

            #[doc = concat!(
                "Throwing factory: fails with a [`RefinementError`] naming ",
                "the value when it is not ", $label, "."
            )]
            pub fn new(raw: T) -> Result<Self, RefinementError> {
                Self::try_new(raw.clone()).ok_or_else(|| RefinementError::new($label, raw))
            }

            /// The raw value.
            pub fn get(&self) -> T {
                self.0.clone()
            }

            /// Unwraps into the raw value.
            pub fn into_inner(self) -> T {
                self.0
            }

            /// The smaller of the two refined values; closed within the
            /// refinement.
            pub fn min(self, other: Self) -> Self {
                if self.0 <= other.0 {
                    self
                } else {
                    other
                }
            }
        }

        impl<T: RefinedNumeric> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        #[cfg(feature = "serde")]
        impl<T: RefinedNumeric + serde::Serialize> serde::Serialize for $name<T> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        // Deserialization re-validates, so serde input cannot bypass the
        // constructor gate.
        #[cfg(feature = "serde")]
        impl<'de, T: RefinedNumeric + serde::Deserialize<'de>> serde::Deserialize<'de>
            for $name<T>
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = T::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

refinement! {
    /// A value strictly greater than zero.
    Positive, "positive number", Greater
}

refinement! {
    /// A value greater than or equal to zero.
    NonNegative, "non-negative number", Greater | Equal
}

refinement! {
    /// A value less than or equal to zero.
    NonPositive, "non-positive number", Less | Equal
}

//-----------------------------------------------------------------------------
// Widening and closed arithmetic
//-----------------------------------------------------------------------------

/// A positive value always satisfies the non-negative predicate; the
/// converse direction does not exist.
impl<T: RefinedNumeric> From<Positive<T>> for NonNegative<T> {
    fn from(value: Positive<T>) -> Self {
        NonNegative(value.0)
    }
}

impl<T: RefinedNumeric> Positive<T> {
    /// The smallest useful positive value.
    pub fn one() -> Self {
        Positive(T::one())
    }

    /// Folds further non-negative amounts into this value; adding a
    /// non-negative amount to a positive value cannot make it non-positive.
    pub fn sum_with(self, values: impl IntoIterator<Item = NonNegative<T>>) -> Self {
        Positive(values.into_iter().fold(self.0, |acc, value| acc + value.0))
    }

    /// Folds further positive factors into this value; a product of
    /// positives is positive.
    pub fn multiply_with(self, values: impl IntoIterator<Item = Positive<T>>) -> Self {
        Positive(values.into_iter().fold(self.0, |acc, value| acc * value.0))
    }
}

impl<T: RefinedNumeric> NonNegative<T> {
    /// Folds further non-negative amounts into this value.
    pub fn sum_with(self, values: impl IntoIterator<Item = NonNegative<T>>) -> Self {
        NonNegative(values.into_iter().fold(self.0, |acc, value| acc + value.0))
    }
}

impl<T: RefinedNumeric> Add<NonNegative<T>> for Positive<T> {
    type Output = Positive<T>;

    fn add(self, rhs: NonNegative<T>) -> Self::Output {
        Positive(self.0 + rhs.0)
    }
}

impl<T: RefinedNumeric> Add for Positive<T> {
    type Output = Positive<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Positive(self.0 + rhs.0)
    }
}

impl<T: RefinedNumeric> Add for NonNegative<T> {
    type Output = NonNegative<T>;

    fn add(self, rhs: Self) -> Self::Output {
        NonNegative(self.0 + rhs.0)
    }
}

impl<T: RefinedNumeric> Add for NonPositive<T> {
    type Output = NonPositive<T>;

    fn add(self, rhs: Self) -> Self::Output {
        NonPositive(self.0 + rhs.0)
    }
}

impl<T: RefinedNumeric> Mul for Positive<T> {
    type Output = Positive<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Positive(self.0 * rhs.0)
    }
}

//-----------------------------------------------------------------------------
// Raw conversions per base type
//-----------------------------------------------------------------------------

macro_rules! raw_conversions {
    ($($raw:ty),+) => {$(
        impl From<Positive<$raw>> for $raw {
            fn from(value: Positive<$raw>) -> $raw {
                value.into_inner()
            }
        }

        impl From<NonNegative<$raw>> for $raw {
            fn from(value: NonNegative<$raw>) -> $raw {
                value.into_inner()
            }
        }

        impl From<NonPositive<$raw>> for $raw {
            fn from(value: NonPositive<$raw>) -> $raw {
                value.into_inner()
            }
        }

        impl TryFrom<$raw> for Positive<$raw> {
            type Error = RefinementError;

            fn try_from(raw: $raw) -> Result<Self, Self::Error> {
                Positive::new(raw)
            }
        }

        impl TryFrom<$raw> for NonNegative<$raw> {
            type Error = RefinementError;

            fn try_from(raw: $raw) -> Result<Self, Self::Error> {
                NonNegative::new(raw)
            }
        }

        impl TryFrom<$raw> for NonPositive<$raw> {
            type Error = RefinementError;

            fn try_from(raw: $raw) -> Result<Self, Self::Error> {
                NonPositive::new(raw)
            }
        }
    )+};
}

raw_conversions!(i16, i32, i64, Rational);

//-----------------------------------------------------------------------------
// Aliases for the concrete refinements
//-----------------------------------------------------------------------------

pub type PositiveShort = Positive<i16>;
pub type PositiveInt = Positive<i32>;
pub type PositiveLong = Positive<i64>;
pub type PositiveDecimal = Positive<Rational>;

pub type NonNegativeShort = NonNegative<i16>;
pub type NonNegativeInt = NonNegative<i32>;
pub type NonNegativeLong = NonNegative<i64>;
pub type NonNegativeDecimal = NonNegative<Rational>;

pub type NonPositiveShort = NonPositive<i16>;
pub type NonPositiveInt = NonPositive<i32>;
pub type NonPositiveLong = NonPositive<i64>;
pub type NonPositiveDecimal = NonPositive<Rational>;

#[cfg(test)]
mod tests {
    use super::*;
    use dashu::integer::UBig;

    #[test]
    fn test_positive_excludes_zero() {
        assert!(PositiveInt::try_new(0).is_none());
        assert!(PositiveInt::try_new(-3).is_none());
        assert_eq!(PositiveInt::try_new(3).map(|v| v.get()), Some(3));
    }

    #[test]
    fn test_non_negative_includes_zero() {
        assert_eq!(NonNegativeInt::try_new(0).map(|v| v.get()), Some(0));
        assert!(NonNegativeInt::try_new(-1).is_none());
    }

    #[test]
    fn test_non_positive_includes_zero() {
        assert_eq!(NonPositiveLong::try_new(0).map(|v| v.get()), Some(0));
        assert_eq!(NonPositiveLong::try_new(-5).map(|v| v.get()), Some(-5));
        assert!(NonPositiveLong::try_new(5).is_none());
    }

    #[test]
    fn test_round_trip_preserves_the_raw_value() {
        let refined = PositiveShort::try_new(12).unwrap();
        assert_eq!(i16::from(refined), 12);
    }

    #[test]
    fn test_new_reports_value_and_refinement() {
        let error = PositiveInt::new(-3).unwrap_err();
        assert_eq!(error.to_string(), "'-3' is not a valid positive number");

        let error = NonNegativeInt::new(-1).unwrap_err();
        assert!(error.to_string().contains("non-negative"));
    }

    #[test]
    fn test_widening_preserves_the_value() {
        let positive = PositiveInt::try_new(4).unwrap();
        let widened: NonNegativeInt = positive.into();
        assert_eq!(widened.get(), 4);
    }

    #[test]
    fn test_addition_is_closed() {
        let positive = PositiveInt::try_new(2).unwrap();
        let amount = NonNegativeInt::try_new(0).unwrap();
        assert_eq!((positive + amount).get(), 2);

        let a = NonNegativeInt::try_new(1).unwrap();
        let b = NonNegativeInt::try_new(2).unwrap();
        assert_eq!((a + b).get(), 3);

        let c = NonPositiveInt::try_new(-1).unwrap();
        let d = NonPositiveInt::try_new(-2).unwrap();
        assert_eq!((c + d).get(), -3);
    }

    #[test]
    fn test_multiplication_of_positives() {
        let a = PositiveLong::try_new(3).unwrap();
        let b = PositiveLong::try_new(4).unwrap();
        assert_eq!((a * b).get(), 12);
    }

    #[test]
    fn test_sum_with_and_multiply_with_fold_in_order() {
        let base = PositiveInt::one();
        let summed = base.sum_with(vec![
            NonNegativeInt::try_new(2).unwrap(),
            NonNegativeInt::try_new(3).unwrap(),
        ]);
        assert_eq!(summed.get(), 6);

        let product = PositiveInt::try_new(2).unwrap()
            .multiply_with(vec![PositiveInt::try_new(5).unwrap()]);
        assert_eq!(product.get(), 10);
    }

    #[test]
    fn test_min_is_closed() {
        let a = PositiveInt::try_new(3).unwrap();
        let b = PositiveInt::try_new(7).unwrap();
        assert_eq!(a.min(b).get(), 3);
    }

    #[test]
    fn test_decimal_refinements_use_exact_rationals() {
        let half = Rational::from_parts(Integer::from(1), UBig::from(2u8));
        let refined = PositiveDecimal::try_new(half.clone()).unwrap();
        assert_eq!(refined.get(), half);

        let negative_half = Rational::from_parts(Integer::from(-1), UBig::from(2u8));
        assert!(PositiveDecimal::try_new(negative_half.clone()).is_none());
        assert!(NonPositiveDecimal::try_new(negative_half).is_some());

        assert!(NonNegativeDecimal::try_new(Rational::zero()).is_some());
    }

    #[test]
    fn test_display_renders_the_raw_value() {
        assert_eq!(PositiveInt::try_new(8).unwrap().to_string(), "8");
    }
}
