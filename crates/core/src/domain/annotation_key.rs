use std::fmt;

use super::path::{is_single_component, strip_extension};
use super::{DomainError, SanitizedFilename};

/// Storage key of an annotation document: the image basename.
///
/// Images that differ only by extension (`a.png`, `a.jpg`) share one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationKey(String);

impl AnnotationKey {
    pub const EXTENSION: &'static str = "json";

    /// Derives the key from a client-supplied image filename.
    ///
    /// The name is used as given, minus its last extension. Only names whose
    /// annotation file would not be a single path component are rejected.
    pub fn from_filename(raw: &str) -> Result<Self, DomainError> {
        let key = Self(strip_extension(raw).to_string());
        if key.0.is_empty() || !is_single_component(&key.file_name()) {
            return Err(DomainError::InvalidAnnotationName(raw.to_string()));
        }
        Ok(key)
    }

    pub fn from_sanitized(name: &SanitizedFilename) -> Self {
        Self(name.basename().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the annotation file on disk, `<basename>.json`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, Self::EXTENSION)
    }
}

impl fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
