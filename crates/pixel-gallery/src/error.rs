//! Error types for pixel-gallery operations.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Invalid grid data: {0}")]
    InvalidGrid(String),

    #[error("Too many requests. Please wait a moment before saving again.")]
    RateLimited,

    #[error("Artwork not found: {0}")]
    NotFound(Uuid),

    #[error("Not authorized to modify artwork {0}")]
    Forbidden(Uuid),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
