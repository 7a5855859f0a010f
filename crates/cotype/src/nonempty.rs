//! An ordered sequence that is non-empty by construction.

use std::num::NonZeroUsize;

use crate::error::RefinementError;

/// A read-only ordered sequence holding at least one element.
///
/// The invariant is established once by the validating factories and never
/// re-checked: the type is immutable and every combinator is closed under
/// non-emptiness, so [`first`](NonEmpty::first) cannot fail and
/// [`len`](NonEmpty::len) is statically at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmpty<T> {
    items: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Validating factory: `None` when the input is empty, otherwise a
    /// sequence with the input's length and order.
    pub fn try_new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// A single-element sequence.
    pub fn of(head: T) -> Self {
        Self { items: vec![head] }
    }

    /// An infallible sequence from a guaranteed head and an arbitrary tail.
    pub fn from_head_tail(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(1 + tail.len());
        items.push(head);
        items.extend(tail);
        Self { items }
    }

    /// Validating factory over optional elements: discards the empty options
    /// first and then applies the same emptiness gate as
    /// [`try_new`](NonEmpty::try_new).
    pub fn try_flat(items: impl IntoIterator<Item = Option<T>>) -> Option<Self> {
        Self::try_new(items.into_iter().flatten().collect())
    }

    /// The first element. Cannot fail.
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Number of elements, statically at least one.
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.items.len()).expect("non-empty by construction")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Element-wise mapping; the length, and therefore the invariant, is
    /// preserved.
    pub fn map<B>(self, f: impl FnMut(T) -> B) -> NonEmpty<B> {
        NonEmpty {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Appends further elements; a non-empty sequence stays non-empty.
    pub fn concat(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = RefinementError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_new(items)
            .ok_or_else(|| RefinementError::new("non-empty sequence", "sequence of length 0"))
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmpty<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmpty<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_new(items)
            .ok_or_else(|| serde::de::Error::custom("expected a sequence with at least one element"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_empty_input() {
        assert_eq!(NonEmpty::<i32>::try_new(Vec::new()), None);
    }

    #[test]
    fn test_try_new_preserves_length_and_order() {
        let items = NonEmpty::try_new(vec![3, 1, 2]).unwrap();
        assert_eq!(items.len().get(), 3);
        assert_eq!(items.as_slice(), &[3, 1, 2]);
        assert_eq!(*items.first(), 3);
    }

    #[test]
    fn test_single_element_factory() {
        let items = NonEmpty::of(7);
        assert_eq!(items.len().get(), 1);
        assert_eq!(*items.first(), 7);
    }

    #[test]
    fn test_from_head_tail_keeps_the_head_first() {
        let items = NonEmpty::from_head_tail(1, vec![2, 3]);
        assert_eq!(items.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_try_flat_discards_empty_options() {
        let items = NonEmpty::try_flat(vec![None, Some(1), None, Some(2)]).unwrap();
        assert_eq!(items.as_slice(), &[1, 2]);

        assert_eq!(NonEmpty::<i32>::try_flat(vec![None, None]), None);
    }

    #[test]
    fn test_map_preserves_the_invariant() {
        let items = NonEmpty::from_head_tail(1, vec![2]).map(|v| v * 10);
        assert_eq!(items.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_concat_extends_in_order() {
        let items = NonEmpty::of(1).concat(vec![2, 3]);
        assert_eq!(items.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_from_reports_a_refinement_error() {
        let error = NonEmpty::<i32>::try_from(Vec::new()).unwrap_err();
        assert!(error.to_string().contains("non-empty sequence"));
    }
}
