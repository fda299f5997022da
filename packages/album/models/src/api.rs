//! Raw album API records and their mapping into the domain models.
//!
//! Every field on these records is optional on the wire. Conversion into the
//! domain types is total: absent data degrades to defaults and never raises.
//! All defaulting lives here so call sites never branch on missing fields.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Album, Author, Photo};

/// Raw user record attached to an album.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    /// Unique identifier for the user
    pub id: Option<String>,
    /// Display name of the user
    pub username: Option<String>,
}

impl From<&ApiUser> for Author {
    fn from(user: &ApiUser) -> Self {
        Self {
            id: user.id.clone().unwrap_or_default(),
            username: user
                .username
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// Raw photo record within an album's photo page.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiPhoto {
    /// Unique identifier for the photo
    pub id: Option<String>,
    /// Title of the photo, used as its caption
    pub title: Option<String>,
    /// Location of the photo asset
    pub url: Option<String>,
}

impl From<&ApiPhoto> for Photo {
    fn from(photo: &ApiPhoto) -> Self {
        Self {
            id: photo.id.clone().unwrap_or_default(),
            alt: photo
                .title
                .clone()
                .unwrap_or_else(|| "no title".to_string()),
            url: photo.url.clone().unwrap_or_default(),
        }
    }
}

/// Page wrapper around the photo records of a single album.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiPhotoPage {
    /// The photo records in this page
    pub data: Option<Vec<Option<ApiPhoto>>>,
}

impl ApiPhotoPage {
    /// Maps every photo record in this page, independently defaulting each.
    #[must_use]
    pub fn photos(&self) -> Vec<Photo> {
        self.data
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|photo| photo.as_ref().map_or_else(Photo::default, Into::into))
            .collect()
    }
}

/// Raw album record.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiAlbum {
    /// Unique identifier for the album
    pub id: Option<String>,
    /// Display title of the album
    pub title: Option<String>,
    /// The user record that owns the album
    pub user: Option<ApiUser>,
    /// The album's photo page
    pub photos: Option<ApiPhotoPage>,
}

impl From<&ApiAlbum> for Album {
    fn from(album: &ApiAlbum) -> Self {
        let id = album.id.clone().unwrap_or_default();

        Self {
            url: Self::url_for(&id),
            id,
            title: album.title.clone().unwrap_or_default(),
            author: album.user.as_ref().map_or_else(Author::default, Into::into),
            photos: album
                .photos
                .as_ref()
                .map_or_else(Vec::new, ApiPhotoPage::photos),
        }
    }
}

/// Page wrapper around a list of album records.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiAlbumPage {
    /// The album records in this page
    pub data: Option<Vec<Option<ApiAlbum>>>,
}

impl ApiAlbumPage {
    /// Maps every album record in this page, independently defaulting each.
    #[must_use]
    pub fn albums(&self) -> Vec<Album> {
        self.data
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|album| album.as_ref().map_or_else(Album::default, Into::into))
            .collect()
    }
}

/// The two shapes an albums query can respond with.
///
/// A single-album response is treated as a one-element list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AlbumsData {
    /// A page of album records
    Albums {
        /// The album page
        albums: ApiAlbumPage,
    },
    /// A single album record
    Album {
        /// The album record, if any was found
        album: Option<ApiAlbum>,
    },
}

/// An albums query result as supplied by the remote collaborator.
///
/// `data` may be entirely absent, e.g. while `loading` is set or after the
/// query failed with `error`.
#[derive(Default, Debug, Clone)]
pub struct AlbumsResponse {
    /// The response payload, if any
    pub data: Option<AlbumsData>,
    /// Whether the query is still in flight
    pub loading: bool,
    /// The transport error the query failed with, if any
    pub error: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl AlbumsResponse {
    /// Maps the response payload into a dense album list.
    ///
    /// Absent data yields an empty list. A single-album response yields a
    /// one-element list.
    #[must_use]
    pub fn albums(&self) -> Vec<Album> {
        match &self.data {
            Some(AlbumsData::Albums { albums }) => albums.albums(),
            Some(AlbumsData::Album { album: Some(album) }) => vec![album.into()],
            Some(AlbumsData::Album { album: None }) | None => vec![],
        }
    }

    /// Maps the first album of the response payload, if any.
    #[must_use]
    pub fn album(&self) -> Option<Album> {
        self.albums().into_iter().next()
    }
}
