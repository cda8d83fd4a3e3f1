// ABOUTME: Candidate tag filters applied before ranking.
// ABOUTME: Release-only, same-shape and no-named-releases predicates.

use crate::version::VersionKey;

/// Substrings that mark a tag as a pre-release.
///
/// Matched as plain substrings of the whole tag, so `stable` or `bookworm`
/// count as pre-releases too.
pub const PRERELEASE_MARKERS: [&str; 5] = ["a", "alpha", "b", "beta", "rc"];

/// Which filters to apply to candidate tags. All are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFilters {
    /// Drop tags containing any of [`PRERELEASE_MARKERS`].
    pub release_only: bool,
    /// Drop tags whose component count differs from the current tag.
    pub same_shape: bool,
    /// Drop tags whose first component is a word, like `ubuntu-20.04`.
    pub no_named_releases: bool,
}

impl Default for TagFilters {
    fn default() -> Self {
        Self {
            release_only: true,
            same_shape: true,
            no_named_releases: true,
        }
    }
}

impl TagFilters {
    /// Filters with every predicate turned off.
    pub fn none() -> Self {
        Self {
            release_only: false,
            same_shape: false,
            no_named_releases: false,
        }
    }

    /// Whether `candidate` survives every enabled filter.
    pub fn accepts(&self, candidate: &VersionKey, current: &VersionKey) -> bool {
        if self.release_only && is_prerelease(&candidate.join()) {
            return false;
        }
        if self.same_shape && candidate.len() != current.len() {
            return false;
        }
        if self.no_named_releases && starts_with_word(candidate) {
            return false;
        }
        true
    }
}

pub fn is_prerelease(tag: &str) -> bool {
    PRERELEASE_MARKERS.iter().any(|marker| tag.contains(marker))
}

/// True when the first component is nothing but ASCII letters.
///
/// A key without components has no version to offer and counts as named.
pub fn starts_with_word(key: &VersionKey) -> bool {
    match key.first() {
        Some(first) => first.as_str().chars().all(|c| c.is_ascii_alphabetic()),
        None => true,
    }
}
