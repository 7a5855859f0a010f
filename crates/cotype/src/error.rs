//! Error types and exception aggregation.
//!
//! The crate distinguishes three failure shapes. Absence (`None`) and typed
//! domain errors (`Err`) are first-class return values and never surface
//! here. [`RefinementError`] and [`CoproductError`] mark invariant
//! violations: a known-invalid value handed to a non-optional constructor,
//! or a dynamic value that matches no candidate branch. [`AggregateError`]
//! is the composite used when several independent errors must travel as one
//! value, with the inner order preserved exactly.

use std::fmt;

use thiserror::Error;

use crate::nonempty::NonEmpty;

//-----------------------------------------------------------------------------
// Invariant violations
//-----------------------------------------------------------------------------

/// Failure of a refinement constructor: the raw value does not satisfy the
/// refinement predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {refinement}")]
pub struct RefinementError {
    refinement: &'static str,
    value: String,
}

impl RefinementError {
    pub(crate) fn new(refinement: &'static str, value: impl fmt::Display) -> Self {
        Self {
            refinement,
            value: value.to_string(),
        }
    }

    /// Name of the refinement the value was checked against.
    pub fn refinement(&self) -> &'static str {
        self.refinement
    }

    /// Rendering of the offending value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Failure of dynamic coproduct construction: the value matched no candidate
/// branch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoproductError {
    /// The runtime type of the value is none of the candidate branch types.
    #[error("the value's runtime type matches no candidate branch of [{candidates}]")]
    NoMatchingType { candidates: String },

    /// The value compares equal to none of the candidate branch values.
    #[error("the value equals no candidate branch value of [{candidates}]")]
    NoMatchingValue { candidates: String },
}

impl CoproductError {
    pub(crate) fn no_matching_type(candidates: &[&str]) -> Self {
        Self::NoMatchingType {
            candidates: candidates.join(", "),
        }
    }

    pub(crate) fn no_matching_value(candidates: &[&str]) -> Self {
        Self::NoMatchingValue {
            candidates: candidates.join(", "),
        }
    }
}

//-----------------------------------------------------------------------------
// Aggregation
//-----------------------------------------------------------------------------

/// An ordered collection of at least two errors travelling as one value.
///
/// Built by [`aggregate`] and [`aggregate_non_empty`]; the inner list equals
/// the input order exactly.
#[derive(Debug)]
pub struct AggregateError {
    errors: Vec<anyhow::Error>,
}

impl AggregateError {
    /// The inner errors, in the order they were aggregated.
    pub fn errors(&self) -> &[anyhow::Error] {
        &self.errors
    }

    /// Consumes the composite, returning the ordered inner errors.
    pub fn into_errors(self) -> Vec<anyhow::Error> {
        self.errors
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors occurred: ", self.errors.len())?;
        for (position, error) in self.errors.iter().enumerate() {
            if position > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

/// Collapses a sequence of errors into at most one error value.
///
/// No errors yield `None`; a single error is returned verbatim without
/// wrapping; two or more are combined into an [`AggregateError`] whose inner
/// order equals the input order.
pub fn aggregate(errors: impl IntoIterator<Item = anyhow::Error>) -> Option<anyhow::Error> {
    let mut errors: Vec<anyhow::Error> = errors.into_iter().collect();
    match errors.len() {
        0 => None,
        1 => errors.pop(),
        count => {
            log::debug!("aggregating {} errors into a composite", count);
            Some(anyhow::Error::new(AggregateError { errors }))
        }
    }
}

/// Collapses a sequence of errors that is non-empty by type.
///
/// Same rule as [`aggregate`], with the zero-error case unreachable by
/// construction instead of by runtime check.
pub fn aggregate_non_empty(errors: NonEmpty<anyhow::Error>) -> anyhow::Error {
    let mut errors = errors.into_vec();
    if errors.len() == 1 {
        errors.swap_remove(0)
    } else {
        anyhow::Error::new(AggregateError { errors })
    }
}

/// Collects every success, or aggregates every error by the [`aggregate`]
/// rule, preserving order on both channels.
pub fn try_all<T>(
    results: impl IntoIterator<Item = anyhow::Result<T>>,
) -> anyhow::Result<Vec<T>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }
    match aggregate(errors) {
        None => Ok(values),
        Some(error) => Err(error),
    }
}
