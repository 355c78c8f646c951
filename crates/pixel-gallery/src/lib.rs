//! # pixel-gallery
//!
//! Storage rules for the club's pixel-art editor: grid shape validation,
//! a per-member save rate limit, and a gallery where only an artwork's owner
//! may delete it.
//!
//! ## Modules
//!
//! - [`grid`] — `rows` x `cols` matrix validation
//! - [`rate_limit`] — fixed-window limiter keyed by user id
//! - [`store`] — the gallery itself
//! - [`error`] — Error types

pub mod error;
pub mod grid;
pub mod rate_limit;
pub mod store;

pub use error::GalleryError;
pub use grid::{validate_grid, PixelGrid, MAX_DIMENSION};
pub use rate_limit::FixedWindowLimiter;
pub use store::{Artwork, Gallery, NewArtwork, GALLERY_LIMIT};
