//! Combinators over `Result` beyond what the standard library provides.
//!
//! `std::result::Result` is the success-or-typed-error sum: `and_then` is
//! the success-channel flat map, `or_else` the error-channel one, `ok()` and
//! `err()` the branch projections. The extensions below add the exhaustive
//! match, the discouraged re-throwing extractor, the degenerate-coproduct
//! view, and the asynchronous forms. Aggregation of several errors into one
//! lives in [`crate::error`].

use std::fmt;
use std::future::Future;

use crate::coproduct::Coproduct2;

/// Synchronous `Result` combinators.
pub trait ResultExt<T, E>: Sized {
    /// Exhaustive match on the two states. Exactly one handler runs: the
    /// success handler with the value, or the error handler with the error.
    fn match_either<R>(self, if_ok: impl FnOnce(T) -> R, if_err: impl FnOnce(E) -> R) -> R;

    /// Returns the success value, panicking on an error with the error's
    /// rendering.
    ///
    /// This is the re-throwing extractor and it is always avoidable: prefer
    /// [`match_either`](ResultExt::match_either) or `?`. To fail with a
    /// transformed error instead, use `map_err` followed by `?`.
    fn get(self) -> T
    where
        E: fmt::Display;

    /// The result viewed as a degenerate two-branch coproduct with the error
    /// as the second branch.
    fn into_coproduct(self) -> Coproduct2<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn match_either<R>(self, if_ok: impl FnOnce(T) -> R, if_err: impl FnOnce(E) -> R) -> R {
        match self {
            Ok(value) => if_ok(value),
            Err(error) => if_err(error),
        }
    }

    fn get(self) -> T
    where
        E: fmt::Display,
    {
        match self {
            Ok(value) => value,
            Err(error) => panic!("called get on an error result: {}", error),
        }
    }

    fn into_coproduct(self) -> Coproduct2<T, E> {
        match self {
            Ok(value) => Coproduct2::First(value),
            Err(error) => Coproduct2::Second(error),
        }
    }
}

/// Asynchronous `Result` combinators.
///
/// Same contract as [`crate::option::OptionAsyncExt`]: one sequential
/// suspension point, no fan-out, and failures of the supplied future
/// propagate unwrapped. The supplied computation is never started on the
/// channel it does not belong to.
#[allow(async_fn_in_trait)]
pub trait ResultAsyncExt<T, E>: Sized {
    /// Awaits `f` only on the success channel and wraps its result.
    async fn map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Result<B, E>
    where
        Fut: Future<Output = B>;

    /// Awaits `f` only on the success channel and flattens its result.
    async fn flat_map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Result<B, E>
    where
        Fut: Future<Output = Result<B, E>>;

    /// Awaits `f` only on the error channel and flattens its result,
    /// possibly changing the error type.
    async fn flat_map_err_async<F, Fut>(self, f: impl FnOnce(E) -> Fut) -> Result<T, F>
    where
        Fut: Future<Output = Result<T, F>>;
}

impl<T, E> ResultAsyncExt<T, E> for Result<T, E> {
    async fn map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Result<B, E>
    where
        Fut: Future<Output = B>,
    {
        match self {
            Ok(value) => Ok(f(value).await),
            Err(error) => Err(error),
        }
    }

    async fn flat_map_async<B, Fut>(self, f: impl FnOnce(T) -> Fut) -> Result<B, E>
    where
        Fut: Future<Output = Result<B, E>>,
    {
        match self {
            Ok(value) => f(value).await,
            Err(error) => Err(error),
        }
    }

    async fn flat_map_err_async<F, Fut>(self, f: impl FnOnce(E) -> Fut) -> Result<T, F>
    where
        Fut: Future<Output = Result<T, F>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => f(error).await,
        }
    }
}
