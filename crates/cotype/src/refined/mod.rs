//! Refinement types: single-field wrappers whose validating factories are
//! the only construction paths.
//!
//! A refinement wraps one raw value together with a predicate that held at
//! construction time; since the field is private and no mutator exists, the
//! predicate holds for the value's lifetime and downstream holders never
//! re-check it. Operators are exposed only where the predicate is closed
//! under the operation.

pub mod digit;
pub mod numeric;
pub mod string;

pub use digit::{filter_digits, Digit, Digits};
pub use numeric::{NonNegative, NonPositive, Positive, RefinedNumeric};
pub use string::NonEmptyString;
