//! Bounded label types: container path labels and record keys.
//!
//! Both types enforce a fixed byte capacity by silent truncation at
//! construction — oversized input is cut down, never rejected. Truncation
//! lands on a UTF-8 character boundary, so the stored label is always a
//! valid string of at most the capacity in bytes.

use std::fmt;

/// Byte capacity of a container path label.
pub const PATH_LABEL_CAPACITY: usize = 255;

/// Byte capacity of a record key.
pub const RECORD_KEY_CAPACITY: usize = 127;

/// Truncate `s` to at most `cap` bytes, backing off to a char boundary.
fn truncate(s: &str, cap: usize) -> &str {
    if s.len() <= cap {
        return s;
    }
    let mut end = cap;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// A container's path label, capped at [`PATH_LABEL_CAPACITY`] bytes.
///
/// The root's path label is the empty string; every node stores the label
/// supplied at creation, truncated silently if oversized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathLabel(String);

impl PathLabel {
    /// Create a path label, truncating silently at the capacity.
    pub fn new(label: &str) -> Self {
        Self(truncate(label, PATH_LABEL_CAPACITY).to_owned())
    }

    /// The empty label (the root's path).
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the stored label in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stored label is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PathLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for PathLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A record's key, capped at [`RECORD_KEY_CAPACITY`] bytes.
///
/// Same truncation contract as [`PathLabel`], at the smaller record-key
/// capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RecordKey(String);

impl RecordKey {
    /// Create a record key, truncating silently at the capacity.
    pub fn new(key: &str) -> Self {
        Self(truncate(key, RECORD_KEY_CAPACITY).to_owned())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the stored key in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stored key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for RecordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_stored_verbatim() {
        let label = PathLabel::new("users/active");
        assert_eq!(label.as_str(), "users/active");
        assert_eq!(label.len(), 12);
    }

    #[test]
    fn oversized_label_truncated_to_capacity() {
        let input = "x".repeat(400);
        let label = PathLabel::new(&input);
        assert_eq!(label.len(), PATH_LABEL_CAPACITY);
        assert_eq!(label.as_str(), &input[..PATH_LABEL_CAPACITY]);
    }

    #[test]
    fn exact_capacity_label_kept_whole() {
        let input = "p".repeat(PATH_LABEL_CAPACITY);
        let label = PathLabel::new(&input);
        assert_eq!(label.as_str(), input);
    }

    #[test]
    fn oversized_key_truncated_to_capacity() {
        let input = "k".repeat(200);
        let key = RecordKey::new(&input);
        assert_eq!(key.len(), RECORD_KEY_CAPACITY);
        assert_eq!(key.as_str(), &input[..RECORD_KEY_CAPACITY]);
    }

    #[test]
    fn truncation_backs_off_to_char_boundary() {
        // 'é' is two bytes; 128 of them puts the 127-byte cut mid-char.
        let input = "é".repeat(128);
        let key = RecordKey::new(&input);
        assert_eq!(key.len(), 126);
        assert!(key.as_str().chars().all(|c| c == 'é'));
    }

    #[test]
    fn empty_label_is_default() {
        assert_eq!(PathLabel::empty(), PathLabel::default());
        assert!(PathLabel::empty().is_empty());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn path_label_never_exceeds_capacity(s in ".*") {
                let label = PathLabel::new(&s);
                prop_assert!(label.len() <= PATH_LABEL_CAPACITY);
            }

            #[test]
            fn record_key_is_prefix_of_input(s in ".*") {
                let key = RecordKey::new(&s);
                prop_assert!(s.starts_with(key.as_str()));
                prop_assert!(key.len() <= RECORD_KEY_CAPACITY);
            }
        }
    }
}
