use super::{AnnotationKey, SanitizedFilename};

/// Result of handling an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The image was stored, and the annotation too when one was supplied.
    Uploaded {
        filename: SanitizedFilename,
        annotation: Option<AnnotationKey>,
    },
    /// The request carried no image part; nothing was written.
    NoImage,
}

impl UploadOutcome {
    pub fn uploaded(filename: SanitizedFilename, annotation: Option<AnnotationKey>) -> Self {
        Self::Uploaded {
            filename,
            annotation,
        }
    }

    /// The image a listing view should highlight after this upload.
    pub fn selected(&self) -> Option<&SanitizedFilename> {
        match self {
            Self::Uploaded { filename, .. } => Some(filename),
            Self::NoImage => None,
        }
    }
}
