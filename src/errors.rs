// ABOUTME: Error types for the text-slides application
// ABOUTME: Provides structured error handling for segmentation, export and watching

use std::path::PathBuf;
use thiserror::Error;

/// Message shown when an operation needs at least one slide
pub const EMPTY_PRESENTATION_MESSAGE: &str =
    "Please add some text and split it into slides first.";

#[derive(Error, Debug)]
pub enum SlidesError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("{}", EMPTY_PRESENTATION_MESSAGE)]
    EmptyPresentation,

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our SlidesError
impl From<anyhow::Error> for SlidesError {
    fn from(err: anyhow::Error) -> Self {
        SlidesError::UnknownError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for SlidesError {
    fn from(err: zip::result::ZipError) -> Self {
        SlidesError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SlidesError>;
