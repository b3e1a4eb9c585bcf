mod annotation_key;
mod error;
mod filename;
mod path;
mod upload;

pub use annotation_key::AnnotationKey;
pub use error::DomainError;
pub use filename::SanitizedFilename;
pub use path::is_single_component;
pub use upload::UploadOutcome;
