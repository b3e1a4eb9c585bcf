use std::fmt;

use unicode_normalization::UnicodeNormalization;

use super::DomainError;
use super::path::strip_extension;

/// A filename reduced to a single safe path component.
///
/// Separators become word breaks, accents are decomposed, remaining non-ASCII
/// and shell-unsafe characters are dropped, and leading/trailing `.`/`_` are trimmed, so the result can be
/// joined onto a storage directory without escaping it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SanitizedFilename(String);

impl SanitizedFilename {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let sanitized = sanitize(raw);
        if sanitized.is_empty() {
            Err(DomainError::InvalidFilename(raw.to_string()))
        } else {
            Ok(Self(sanitized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its last extension removed (`a.tar.gz` -> `a.tar`).
    pub fn basename(&self) -> &str {
        strip_extension(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn sanitize(raw: &str) -> String {
    // NFKD first so accented letters keep their ASCII base
    let spaced: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

impl fmt::Display for SanitizedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for SanitizedFilename {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SanitizedFilename> for String {
    fn from(value: SanitizedFilename) -> Self {
        value.into_inner()
    }
}
