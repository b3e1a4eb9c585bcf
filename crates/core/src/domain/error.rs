use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid filename: {0:?}. nothing safe remains after sanitization")]
    InvalidFilename(String),
    #[error("invalid annotation name: {0:?}. it must name a single file")]
    InvalidAnnotationName(String),
}
