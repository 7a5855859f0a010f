//! The non-empty string refinement.

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::{Add, Deref};

use crate::error::RefinementError;

/// A string guaranteed to contain at least one non-whitespace character.
///
/// Whitespace-only input counts as empty, matching the intuition that such a
/// string carries no content. The exposed operations are closed under the
/// invariant: case mapping cannot empty a string, and neither can appending
/// to one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Validating factory: `None` when the input is empty or whitespace-only.
    pub fn try_new(value: String) -> Option<Self> {
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Throwing factory: fails with a [`RefinementError`] when the input is
    /// empty or whitespace-only.
    pub fn new(value: String) -> Result<Self, RefinementError> {
        match Self::try_new(value) {
            Some(refined) => Ok(refined),
            None => Err(RefinementError::new(
                "non-empty string",
                "empty or whitespace-only input",
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, statically at least one.
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.0.len()).expect("non-empty by construction")
    }

    /// Lowercased copy; case mapping preserves non-emptiness.
    pub fn to_lowercase(&self) -> Self {
        Self(self.0.to_lowercase())
    }

    /// Uppercased copy; case mapping preserves non-emptiness.
    pub fn to_uppercase(&self) -> Self {
        Self(self.0.to_uppercase())
    }

    /// Appends arbitrary text; a non-empty string stays non-empty.
    pub fn concat(&self, suffix: impl AsRef<str>) -> Self {
        let mut value = self.0.clone();
        value.push_str(suffix.as_ref());
        Self(value)
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> String {
        value.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = RefinementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = RefinementError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl Add<&str> for NonEmptyString {
    type Output = NonEmptyString;

    fn add(self, suffix: &str) -> NonEmptyString {
        self.concat(suffix)
    }
}

impl PartialEq<str> for NonEmptyString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NonEmptyString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NonEmptyString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NonEmptyString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace_input() {
        assert!(NonEmptyString::try_new(String::new()).is_none());
        assert!(NonEmptyString::try_new("   \t\n".to_string()).is_none());
    }

    #[test]
    fn test_accepts_content_and_preserves_it() {
        let value = NonEmptyString::try_new(" hello ".to_string()).unwrap();
        assert_eq!(value, " hello ");
        assert_eq!(value.len().get(), 7);
    }

    #[test]
    fn test_new_reports_a_refinement_error() {
        let error = NonEmptyString::new("".to_string()).unwrap_err();
        assert!(error.to_string().contains("non-empty string"));
    }

    #[test]
    fn test_case_mapping_is_closed() {
        let value = NonEmptyString::try_new("MiXeD".to_string()).unwrap();
        assert_eq!(value.to_lowercase(), "mixed");
        assert_eq!(value.to_uppercase(), "MIXED");
    }

    #[test]
    fn test_concat_stays_non_empty() {
        let value = NonEmptyString::try_new("ab".to_string()).unwrap();
        assert_eq!(value.concat("cd"), "abcd");
        let appended = NonEmptyString::try_new("x".to_string()).unwrap() + "";
        assert_eq!(appended, "x");
    }

    #[test]
    fn test_deref_exposes_str_methods() {
        let value = NonEmptyString::try_new("prefix:rest".to_string()).unwrap();
        assert!(value.starts_with("prefix"));
    }
}
