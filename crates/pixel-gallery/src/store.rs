//! In-memory pixel-art gallery with owner-checked mutation.
//!
//! Identity comes from the caller: every mutating call takes the id of an
//! already-authenticated user.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{GalleryError, Result};
use crate::grid::PixelGrid;
use crate::rate_limit::FixedWindowLimiter;

pub const TITLE_MAX_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
/// Page size of the public gallery.
pub const GALLERY_LIMIT: usize = 50;

fn default_public() -> bool {
    true
}

/// A save request as submitted by the editor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArtwork {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub rows: usize,
    pub cols: usize,
    pub grid: Vec<Vec<String>>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub grid: PixelGrid,
    pub is_public: bool,
    /// `None` once the owning account has been removed.
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn truncate_chars(text: Option<String>, max: usize) -> Option<String> {
    text.map(|t| t.chars().take(max).collect())
}

#[derive(Debug, Default)]
pub struct Gallery {
    artworks: Vec<Artwork>,
    limiter: FixedWindowLimiter,
}

impl Gallery {
    pub fn new(limiter: FixedWindowLimiter) -> Self {
        Self {
            artworks: Vec::new(),
            limiter,
        }
    }

    /// Store a new drawing for `user`.
    ///
    /// The rate limit is checked before the grid, so rejected drawings still
    /// count against the user's window. Title and description are cut to
    /// [`TITLE_MAX_CHARS`] and [`DESCRIPTION_MAX_CHARS`].
    pub fn save(&mut self, user: &str, new: NewArtwork, now: DateTime<Utc>) -> Result<&Artwork> {
        if !self.limiter.check(user, now) {
            return Err(GalleryError::RateLimited);
        }
        let grid = PixelGrid::new(new.rows, new.cols, new.grid)?;

        let artwork = Artwork {
            id: Uuid::new_v4(),
            title: truncate_chars(new.title, TITLE_MAX_CHARS),
            description: truncate_chars(new.description, DESCRIPTION_MAX_CHARS),
            grid,
            is_public: new.is_public,
            owner: Some(user.to_string()),
            created_at: now,
            updated_at: now,
        };
        info!(id = %artwork.id, user, rows = artwork.grid.rows(), cols = artwork.grid.cols(), "artwork saved");

        self.artworks.push(artwork);
        Ok(&self.artworks[self.artworks.len() - 1])
    }

    /// A public artwork by id. Private artworks are reported as absent.
    pub fn get_public(&self, id: Uuid) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id && a.is_public)
    }

    /// Newest public artworks, at most `limit`.
    pub fn public_art(&self, limit: usize) -> Vec<&Artwork> {
        let mut art = self.newest_first(|a| a.is_public);
        art.truncate(limit);
        art
    }

    /// Public artworks by one member, newest first.
    pub fn public_by_user(&self, user: &str) -> Vec<&Artwork> {
        self.newest_first(|a| a.is_public && a.owner.as_deref() == Some(user))
    }

    /// Everything `user` owns, private drawings included, newest first.
    pub fn by_owner(&self, user: &str) -> Vec<&Artwork> {
        self.newest_first(|a| a.owner.as_deref() == Some(user))
    }

    /// Delete an artwork owned by `user`.
    pub fn delete(&mut self, user: &str, id: Uuid) -> Result<Artwork> {
        let index = self
            .artworks
            .iter()
            .position(|a| a.id == id)
            .ok_or(GalleryError::NotFound(id))?;

        if self.artworks[index].owner.as_deref() != Some(user) {
            debug!(%id, user, "delete refused for non-owner");
            return Err(GalleryError::Forbidden(id));
        }

        info!(%id, user, "artwork deleted");
        Ok(self.artworks.remove(index))
    }

    /// Detach a removed account from its artworks, keeping the drawings.
    /// Returns how many artworks were detached.
    pub fn forget_owner(&mut self, user: &str) -> usize {
        let mut detached = 0;
        for artwork in self
            .artworks
            .iter_mut()
            .filter(|a| a.owner.as_deref() == Some(user))
        {
            artwork.owner = None;
            detached += 1;
        }
        detached
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Matching artworks ordered by creation time, latest first. Artworks
    /// saved at the same instant list the later save first.
    fn newest_first(&self, keep: impl Fn(&Artwork) -> bool) -> Vec<&Artwork> {
        let mut art: Vec<&Artwork> = self.artworks.iter().rev().filter(|&a| keep(a)).collect();
        art.sort_by_key(|a| Reverse(a.created_at));
        art
    }
}
