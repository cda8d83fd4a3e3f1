// ABOUTME: Version tokenization and ordering for registry tags.
// ABOUTME: Turns tag strings into comparable component sequences.

mod component;
mod key;

pub use component::{Component, compare};
pub use key::{VersionKey, tokenize};
