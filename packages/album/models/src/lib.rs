//! Core data models for photo albums.
//!
//! This crate provides the fundamental data structures for representing albums,
//! their authors, and their photo sequences, along with the mutation input types
//! consumed by the album interaction layer.
//!
//! # Main Types
//!
//! * [`Album`] - Represents a photo album with its author and ordered photos
//! * [`Author`] - Represents the user that owns an album
//! * [`Photo`] - Represents a single photo with its caption and location
//! * [`CreateAlbumInput`] / [`UpdateAlbumInput`] - Inputs for album mutations
//!
//! # Features
//!
//! * `api` - Enables the raw API record types and their domain conversions

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};

/// Raw API record types and their conversions into the domain models.
///
/// Every record field is optional on the wire; conversions are total and
/// substitute defaults for anything absent.
#[cfg(feature = "api")]
pub mod api;

/// Represents the user that owns an album.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique identifier for the author
    pub id: String,
    /// Display name of the author
    pub username: String,
}

impl Default for Author {
    /// The author produced from an empty source record.
    fn default() -> Self {
        Self {
            id: String::new(),
            username: "unknown".to_string(),
        }
    }
}

/// Represents a single photo within an album.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique identifier for the photo
    pub id: String,
    /// Caption displayed alongside the photo
    pub alt: String,
    /// Location of the photo asset
    pub url: String,
}

impl Default for Photo {
    /// The photo produced from an empty source record.
    fn default() -> Self {
        Self {
            id: String::new(),
            alt: "no title".to_string(),
            url: String::new(),
        }
    }
}

/// Represents a photo album.
///
/// The `url` field is always derived from the album `id` and is never supplied
/// by callers or by the remote API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Unique identifier for the album
    pub id: String,
    /// User-editable display title
    pub title: String,
    /// Derived application path for the album
    pub url: String,
    /// The user that owns the album
    pub author: Author,
    /// Ordered photo sequence
    pub photos: Vec<Photo>,
}

impl Album {
    /// Returns the derived application path for an album id.
    #[must_use]
    pub fn url_for(id: &str) -> String {
        format!("/albums/{id}")
    }
}

impl Default for Album {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            url: Self::url_for(""),
            author: Author::default(),
            photos: vec![],
        }
    }
}

/// A client-supplied photo, e.g. from a file upload.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoInput {
    /// Caption for the uploaded photo
    pub alt: String,
    /// Location of the uploaded photo asset
    pub url: String,
}

/// Input for creating a new album.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumInput {
    /// Title for the new album
    pub title: String,
    /// Photos for the new album, required non-empty
    pub photos: Vec<PhotoInput>,
}

/// Partial input for updating an existing album.
///
/// Each present field is validated independently before the update is allowed
/// to fire.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumInput {
    /// Replacement title, if any
    pub title: Option<String>,
    /// Replacement photo sequence, if any
    pub photos: Option<Vec<PhotoInput>>,
}

impl UpdateAlbumInput {
    /// Creates an input that only replaces the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            photos: None,
        }
    }

    /// Creates an input that only replaces the photo sequence.
    #[must_use]
    pub fn photos(photos: Vec<PhotoInput>) -> Self {
        Self {
            title: None,
            photos: Some(photos),
        }
    }

    /// Whether no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.photos.is_none()
    }
}
