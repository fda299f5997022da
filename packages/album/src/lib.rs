//! The album interaction layer.
//!
//! This crate decides which album models and operations the application has
//! access to. It maps raw query responses into domain models and gates every
//! mutation behind the business rules in `albumbox_validation` before the
//! injected [`AlbumApi`] collaborator is allowed to fire.
//!
//! The collaborator owns transport, caching, and retries; this layer only
//! decides *whether* a mutation fires, and with what arguments.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

use albumbox_album_models::{Album, CreateAlbumInput, UpdateAlbumInput, api::AlbumsResponse};
use async_trait::async_trait;
use thiserror::Error;

pub use albumbox_validation::{ValidationResult, validate_photos, validate_title};

/// Error returned by a collaborator's create mutation.
#[derive(Debug, Error)]
pub enum CreateAlbumError {
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Error returned by a collaborator's update mutation.
#[derive(Debug, Error)]
pub enum UpdateAlbumError {
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Error returned by a collaborator's delete mutation.
#[derive(Debug, Error)]
pub enum DeleteAlbumError {
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// The mutation callables injected by the remote collaborator.
///
/// Implementations are asynchronous and surface their own loading/error
/// state; the interaction layer never interprets their outcome.
#[async_trait]
pub trait AlbumApi: Send + Sync {
    /// Creates an album from a validated input.
    ///
    /// # Errors
    ///
    /// * If the remote create mutation fails
    async fn create_album(&self, input: &CreateAlbumInput) -> Result<Album, CreateAlbumError>;

    /// Applies a validated partial update to an existing album.
    ///
    /// # Errors
    ///
    /// * If the remote update mutation fails
    async fn update_album(
        &self,
        album_id: &str,
        input: &UpdateAlbumInput,
    ) -> Result<Album, UpdateAlbumError>;

    /// Deletes an existing album.
    ///
    /// # Errors
    ///
    /// * If the remote delete mutation fails
    async fn delete_album(&self, album_id: &str) -> Result<(), DeleteAlbumError>;
}

/// The model set the interaction layer exposes to presentation.
#[derive(Default, Debug, Clone)]
pub struct AlbumsModels {
    /// Every album mapped from the query response
    pub albums: Vec<Album>,
    /// The first album of the response, if any
    pub album: Option<Album>,
    /// Whether the query is still in flight
    pub is_loading: bool,
    /// The transport error the query failed with, if any
    pub error: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl From<&AlbumsResponse> for AlbumsModels {
    fn from(response: &AlbumsResponse) -> Self {
        let albums = response.albums();

        Self {
            album: albums.first().cloned(),
            albums,
            is_loading: response.loading,
            error: response.error.clone(),
        }
    }
}

/// A create intent bridged into the synchronous UI layer.
pub type CreateAlbumAction = Arc<dyn Fn(CreateAlbumInput) + Send + Sync>;

/// An update intent bridged into the synchronous UI layer.
pub type UpdateAlbumAction = Arc<dyn Fn(&str, UpdateAlbumInput) + Send + Sync>;

/// The album operations exposed to presentation.
///
/// Every mutating operation validates its input first and is a no-op when
/// validation fails. Validation results themselves are discoverable through
/// [`validate_title`] and [`validate_photos`].
#[derive(Clone)]
pub struct Albums {
    api: Arc<dyn AlbumApi>,
}

impl Albums {
    #[must_use]
    pub fn new(api: Arc<dyn AlbumApi>) -> Self {
        Self { api }
    }

    /// Maps a query response into the exposed model set.
    #[must_use]
    pub fn models(response: &AlbumsResponse) -> AlbumsModels {
        response.into()
    }

    /// Creates an album if its title and photos pass validation.
    ///
    /// Suppressed entirely when any rule fails.
    pub async fn create_album(&self, input: &CreateAlbumInput) {
        let title = validate_title(&input.title);
        if !title.is_valid {
            log::debug!("create_album: suppressed: {:?}", title.error_message);
            return;
        }

        let photos = validate_photos(&input.photos);
        if !photos.is_valid {
            log::debug!("create_album: suppressed: {:?}", photos.error_message);
            return;
        }

        if let Err(e) = self.api.create_album(input).await {
            log::error!("create_album: mutation failed: {e:?}");
        }
    }

    /// Applies a partial update if every present field passes validation.
    ///
    /// Partial validity never yields a partial mutation: one invalid present
    /// field suppresses the entire call. An input with no present fields is
    /// a no-op.
    pub async fn update_album(&self, album_id: &str, input: &UpdateAlbumInput) {
        if input.is_empty() {
            log::debug!("update_album: no fields present for album_id={album_id}");
            return;
        }

        if let Some(title) = &input.title {
            let result = validate_title(title);
            if !result.is_valid {
                log::debug!("update_album: suppressed: {:?}", result.error_message);
                return;
            }
        }

        if let Some(photos) = &input.photos {
            let result = validate_photos(photos);
            if !result.is_valid {
                log::debug!("update_album: suppressed: {:?}", result.error_message);
                return;
            }
        }

        if let Err(e) = self.api.update_album(album_id, input).await {
            log::error!("update_album: mutation failed: {e:?}");
        }
    }

    /// Deletes an album. No validation applies to deletes.
    pub async fn delete_album(&self, album_id: &str) {
        if let Err(e) = self.api.delete_album(album_id).await {
            log::error!("delete_album: mutation failed: {e:?}");
        }
    }

    /// Bridges [`Self::create_album`] into a synchronous action.
    ///
    /// The returned action spawns the gated operation onto the ambient tokio
    /// runtime and must only be invoked from within one.
    #[must_use]
    pub fn create_album_action(&self) -> CreateAlbumAction {
        let albums = self.clone();

        Arc::new(move |input: CreateAlbumInput| {
            let albums = albums.clone();
            tokio::spawn(async move {
                albums.create_album(&input).await;
            });
        })
    }

    /// Bridges [`Self::update_album`] into a synchronous action.
    ///
    /// The returned action spawns the gated operation onto the ambient tokio
    /// runtime and must only be invoked from within one.
    #[must_use]
    pub fn update_album_action(&self) -> UpdateAlbumAction {
        let albums = self.clone();

        Arc::new(move |album_id: &str, input: UpdateAlbumInput| {
            let albums = albums.clone();
            let album_id = album_id.to_string();
            tokio::spawn(async move {
                albums.update_album(&album_id, &input).await;
            });
        })
    }
}
