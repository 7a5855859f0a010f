//! Closed algebraic value types.
//!
//! This crate provides a small algebra of immutable value types for code that
//! wants illegal states to be unrepresentable after construction:
//!
//! - [`Unit`] — the zero-information value with exactly one instance.
//! - The coproduct family ([`Coproduct2`] .. [`Coproduct8`]) — generic tagged
//!   sums with exhaustive [`fold`](Coproduct2::fold) matching, per-branch
//!   accessors, and runtime-to-static construction from `dyn Any` values.
//! - Extension traits over `Option` and `Result` ([`OptionExt`],
//!   [`ResultExt`] and their async counterparts) adding the combinators the
//!   standard library lacks.
//! - Refinement types ([`Positive`], [`NonNegative`], [`NonPositive`],
//!   [`Digit`], [`NonEmptyString`]) whose validating factories are the only
//!   construction paths, so a holder of the type can trust its invariant
//!   without re-checking.
//! - [`NonEmpty`] — an ordered sequence guaranteed by construction to hold at
//!   least one element.
//! - Error aggregation over `anyhow::Error` with order-preserving
//!   [`AggregateError`] composites.
//!
//! All types are immutable values; equality and hashing are pure functions of
//! the stored data, so concurrent read access needs no synchronization.

pub mod coproduct;
pub mod error;
pub mod nonempty;
pub mod option;
pub mod refined;
pub mod result;
pub mod unit;

pub use coproduct::{
    Coproduct2, Coproduct3, Coproduct4, Coproduct5, Coproduct6, Coproduct7, Coproduct8,
};
pub use error::{aggregate, aggregate_non_empty, try_all, AggregateError, CoproductError, RefinementError};
pub use nonempty::NonEmpty;
pub use option::{OptionAsyncExt, OptionExt};
pub use refined::digit::{filter_digits, Digit, Digits};
pub use refined::numeric::{NonNegative, NonPositive, Positive, RefinedNumeric};
pub use refined::numeric::{
    NonNegativeDecimal, NonNegativeInt, NonNegativeLong, NonNegativeShort, NonPositiveDecimal,
    NonPositiveInt, NonPositiveLong, NonPositiveShort, PositiveDecimal, PositiveInt, PositiveLong,
    PositiveShort,
};
pub use refined::string::NonEmptyString;
pub use result::{ResultAsyncExt, ResultExt};
pub use unit::Unit;
