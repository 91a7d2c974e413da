use crate::domain::errors::{DomainError, DomainResult, SlugViolation};
use crate::domain::slug::services::create_slug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A title as supplied by a caller. Any string is a valid title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn slug(&self) -> Slug {
        Slug::from_title(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Title {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Title {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A string made only of `a-z`, `0-9` and `-`, with no `--`.
///
/// Empty slugs and slugs with a leading or trailing hyphen are valid: they
/// are legitimate outputs of [`create_slug`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        match find_violation(&value) {
            Some(reason) => Err(DomainError::InvalidSlug { value, reason }),
            None => Ok(Self(value)),
        }
    }

    pub fn from_title(title: &str) -> Self {
        Self(create_slug(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn find_violation(value: &str) -> Option<SlugViolation> {
    let mut previous_was_hyphen = false;
    for (index, ch) in value.char_indices() {
        match ch {
            'a'..='z' | '0'..='9' => previous_was_hyphen = false,
            '-' if previous_was_hyphen => {
                return Some(SlugViolation::RepeatedHyphen { index });
            }
            '-' => previous_was_hyphen = true,
            _ => return Some(SlugViolation::Character { ch, index }),
        }
    }
    None
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
