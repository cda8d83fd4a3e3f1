// ABOUTME: Tag tokenizer producing ordered version keys.
// ABOUTME: Splits tags into digit, word and separator runs.

use super::component::Component;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Ordered tokenization of a tag.
///
/// Keys compare component by component; when one key is a prefix of the
/// other, the shorter one sorts first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey {
    components: Vec<Component>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Digit,
    Word,
    Separator,
}

impl CharClass {
    /// Only ASCII `0-9` count as digits. Other Unicode decimal digits
    /// (`\u{0663}`) are word characters and compare as text.
    fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            CharClass::Digit
        } else if c.is_alphanumeric() || c == '_' {
            CharClass::Word
        } else {
            CharClass::Separator
        }
    }
}

/// Split a tag into its version key.
///
/// Every character lands in exactly one maximal run of digits, word
/// characters or separators, so rejoining the key yields the input.
pub fn tokenize(tag: &str) -> VersionKey {
    let mut components = Vec::new();
    let mut start = 0;
    let mut current: Option<CharClass> = None;

    for (idx, c) in tag.char_indices() {
        let class = CharClass::of(c);
        match current {
            Some(prev) if prev == class => {}
            Some(_) => {
                components.push(Component::from_fragment(&tag[start..idx]));
                start = idx;
                current = Some(class);
            }
            None => current = Some(class),
        }
    }

    if start < tag.len() {
        components.push(Component::from_fragment(&tag[start..]));
    }

    VersionKey { components }
}

impl VersionKey {
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn first(&self) -> Option<&Component> {
        self.components.first()
    }

    /// Rejoin the component texts into the original tag.
    pub fn join(&self) -> String {
        self.components.iter().map(Component::as_str).collect()
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            f.write_str(component.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for VersionKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(tokenize(s))
    }
}
