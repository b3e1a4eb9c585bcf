pub mod domain;

pub use domain::{AnnotationKey, DomainError, SanitizedFilename, UploadOutcome, is_single_component};
