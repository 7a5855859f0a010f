//! The unit type: a product of zero types with exactly one value.

use std::fmt;

/// The canonical "no payload" marker.
///
/// `Unit` carries no information, so every instance is equal to every other
/// and there is nothing to mutate. It is used as the empty branch of
/// degenerate coproducts (see [`OptionExt::into_coproduct`]) and as the
/// argument of continuations that logically take no input.
///
/// [`OptionExt::into_coproduct`]: crate::option::OptionExt::into_coproduct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_has_a_single_value() {
        assert_eq!(Unit, Unit::default());
        assert_eq!(Unit.clone(), Unit);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit.to_string(), "()");
    }
}
