// ABOUTME: Typed version components with a three-way comparison.
// ABOUTME: Numeric runs compare by value, anything mixed falls back to text order.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One atomic fragment of a tag.
///
/// Both variants keep the exact source text so a key can be rejoined into
/// the original tag. A `Numeric` holds only ASCII digits; a `Textual` never
/// contains an ASCII digit.
#[derive(Debug, Clone)]
pub enum Component {
    Numeric(String),
    Textual(String),
}

impl Component {
    /// Build a component from a fragment, choosing the variant by content.
    pub fn from_fragment(fragment: &str) -> Self {
        if !fragment.is_empty() && fragment.bytes().all(|b| b.is_ascii_digit()) {
            Component::Numeric(fragment.to_string())
        } else {
            Component::Textual(fragment.to_string())
        }
    }

    /// Source text of this component.
    pub fn as_str(&self) -> &str {
        match self {
            Component::Numeric(s) | Component::Textual(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Component::Numeric(_))
    }

}

/// Three-way comparison of two components.
///
/// Two numerics compare by value without parsing, so digit runs of any
/// length are ordered correctly. Any other pairing compares source text.
/// Textual components never start with an ASCII digit, so a mixed pair is
/// decided by its first character and the order stays total.
pub fn compare(left: &Component, right: &Component) -> Ordering {
    match (left, right) {
        (Component::Numeric(l), Component::Numeric(r)) => compare_digits(l, r),
        _ => left.as_str().cmp(right.as_str()),
    }
}

fn compare_digits(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len()
        .cmp(&right.len())
        .then_with(|| left.cmp(right))
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Component {}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `compare`: numerics equal up to leading zeros.
        match self {
            Component::Numeric(digits) => {
                0u8.hash(state);
                digits.trim_start_matches('0').hash(state);
            }
            Component::Textual(text) => {
                1u8.hash(state);
                text.hash(state);
            }
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Component {
        Component::Numeric(s.to_string())
    }

    fn text(s: &str) -> Component {
        Component::Textual(s.to_string())
    }

    #[test]
    fn fragment_kind_is_chosen_by_content() {
        assert!(Component::from_fragment("42").is_numeric());
        assert!(!Component::from_fragment("rc").is_numeric());
        assert!(!Component::from_fragment(".").is_numeric());
        assert!(!Component::from_fragment("").is_numeric());
    }

    #[test]
    fn numerics_compare_by_value() {
        assert_eq!(compare(&num("9"), &num("10")), Ordering::Less);
        assert_eq!(compare(&num("10"), &num("9")), Ordering::Greater);
        assert_eq!(compare(&num("007"), &num("7")), Ordering::Equal);
        assert_eq!(compare(&num("0"), &num("000")), Ordering::Equal);
    }

    #[test]
    fn numerics_beyond_u64_still_order() {
        let big = num("123456789012345678901234567890");
        let bigger = num("123456789012345678901234567891");
        assert_eq!(compare(&big, &bigger), Ordering::Less);
        assert_eq!(compare(&bigger, &num("9")), Ordering::Greater);
    }

    #[test]
    fn mixed_pairs_fall_back_to_text() {
        // '.' sorts before digits, letters sort after them.
        assert_eq!(compare(&text("."), &num("1")), Ordering::Less);
        assert_eq!(compare(&num("1"), &text("alpine")), Ordering::Less);
        assert_eq!(compare(&text("_"), &num("99")), Ordering::Greater);
    }

    #[test]
    fn textuals_compare_lexicographically() {
        assert_eq!(compare(&text("alpine"), &text("slim")), Ordering::Less);
        assert_eq!(compare(&text("-"), &text(".")), Ordering::Less);
        assert_eq!(text("bookworm"), text("bookworm"));
    }
}
