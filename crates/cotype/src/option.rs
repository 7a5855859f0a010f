//! Combinators over `Option` beyond what the standard library provides.
//!
//! `std::option::Option` already is the absence-safe two-state sum: `map`,
//! `and_then`, `filter`, `unwrap_or_else` (lazy), `or_else`, `flatten` and
//! `ok_or_else` cover most of the combinator surface, with the laziness
//! guarantees this crate relies on. The extension traits below add the rest:
//! an exhaustive match with both handlers named at the call site, the dual
//! empty-channel combinators, the degenerate-coproduct view, and the
//! asynchronous forms.

use std::any::type_name;
use std::future::Future;

use crate::coproduct::Coproduct2;
use crate::unit::Unit;

/// Synchronous `Option` combinators.
pub trait OptionExt<T>: Sized {
    /// Exhaustive match on the two states. Exactly one handler runs: the
    /// value handler with the payload when present, the empty handler
    /// otherwise.
    fn match_either<R>(self, if_value: impl FnOnce(T) -> R, if_empty: impl FnOnce() -> R) -> R;

    /// Produces a value only on the empty channel: a present option becomes
    /// empty, an empty option becomes `Some(f())`. `f` is never invoked on a
    /// present option.
    fn map_empty<B>(self, f: impl FnOnce() -> B) -> Option<B>;

    /// Like [`map_empty`](OptionExt::map_empty) with a flattened result.
    fn flat_map_empty<B>(self, f: impl FnOnce() -> Option<B>) -> Option<B>;

    /// Returns the payload, panicking on an empty option with a message
    /// naming the absent payload type.
    ///
    /// This is the only failing operation over options and it is always
    /// avoidable: prefer [`match_either`](OptionExt::match_either),
    /// `unwrap_or_else`, or `ok_or_else` followed by `?`.
    fn get(self) -> T;

    /// The option viewed as a degenerate two-branch coproduct, with [`Unit`]
    /// as the empty branch.
    fn into_coproduct(self) -> Coproduct2<T, Unit>;
}

impl<T> OptionExt<T> for Option<T> {
    fn match_either<R>(self, if_value: impl FnOnce(T) -> R, if_empty: impl FnOnce() -> R) -> R {
        match self {
            Some(value) => if_value(value),
            None => if_empty(),
        }
    }

    fn map_empty<B>(self, f: impl FnOnce() -> B) -> Option<B> {
        match self {
            Some(_) => None,
            None => Some(f()),
        }
    }

    fn flat_map_empty<B>(self, f: impl FnOnce() -> Option<B>) -> Option<B> {
        match self {
            Some(_) => None,
            None => f(),
        }
    }

    fn get(self) -> T {
        match self {
            Some(value) => value,
            None => panic!(
                "an empty Option<{}> does not have a value",
                type_name::<T>()
            ),
        }
    }

    fn into_coproduct(self) -> Coproduct2<T, Unit> {
        match self {
            Some(value) => Coproduct2::First(value),
            None => Coproduct2::Second(Unit),
        }
    }
}

/// Asynchronous `Option` combinators.
///
/// Each combinator suspends at the single point it awaits the supplied
/// computation and resumes with the wrapped result; there is no fan-out, no
/// retry, and a failure of the supplied future propagates to the caller
/// unwrapped. The supplied computation is never started on the empty path.
#[allow(async_fn_in_trait)]
pub trait OptionAsyncExt<T>: Sized {
    /// Awaits `f` only when the value is present and wraps its result.
    async fn map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Option<B>
    where
        Fut: Future<Output = B>;

    /// Awaits `f` only when the value is present and flattens its result.
    async fn flat_map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Option<B>
    where
        Fut: Future<Output = Option<B>>;

    /// Returns the payload when present; otherwise awaits the supplier.
    async fn get_or_else_async<Fut>(self, f: impl FnOnce() -> Fut) -> T
    where
        Fut: Future<Output = T>;
}

impl<T> OptionAsyncExt<T> for Option<T> {
    async fn map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Option<B>
    where
        Fut: Future<Output = B>,
    {
        match self {
            Some(value) => Some(f(value).await),
            None => None,
        }
    }

    async fn flat_map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Option<B>
    where
        Fut: Future<Output = Option<B>>,
    {
        match self {
            Some(value) => f(value).await,
            None => None,
        }
    }

    async fn get_or_else_async<Fut>(self, f: impl FnOnce() -> Fut) -> T
    where
        Fut: Future<Output = T>,
    {
        match self {
            Some(value) => value,
            None => f().await,
        }
    }
}
