//! The draft state behind the create-album form.
//!
//! The form buffers a draft title and photo list while the user assembles a
//! new album. Saving forwards the draft to the interaction layer, which owns
//! the gating; the per-field messages here exist so the form can display
//! every failing field at once instead of the first one only.

use std::sync::RwLock;

use albumbox_album::CreateAlbumAction;
use albumbox_album_models::{CreateAlbumInput, PhotoInput};
use albumbox_validation::{validate_photos, validate_title};

struct FormState {
    title: String,
    photos: Vec<PhotoInput>,
}

/// The validation messages for every failing draft field.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FormErrorMessages {
    /// Message for the draft title, if it is invalid
    pub title: Option<String>,
    /// Message for the draft photos, if they are invalid
    pub photos: Option<String>,
}

/// UI state for the create-album form.
pub struct AlbumForm {
    state: RwLock<FormState>,
    create_album: CreateAlbumAction,
}

impl AlbumForm {
    #[must_use]
    pub fn new(create_album: CreateAlbumAction) -> Self {
        Self {
            state: RwLock::new(FormState {
                title: String::new(),
                photos: vec![],
            }),
            create_album,
        }
    }

    /// Replaces the draft title.
    ///
    /// # Panics
    ///
    /// * If the form state `RwLock` is poisoned
    pub fn set_title(&self, title: impl Into<String>) {
        self.state.write().unwrap().title = title.into();
    }

    /// Appends one uploaded photo to the draft.
    ///
    /// # Panics
    ///
    /// * If the form state `RwLock` is poisoned
    pub fn add_photo(&self, alt: impl Into<String>, url: impl Into<String>) {
        self.state.write().unwrap().photos.push(PhotoInput {
            alt: alt.into(),
            url: url.into(),
        });
    }

    /// Removes the draft photo at `index`. Out-of-range indices are ignored.
    ///
    /// # Panics
    ///
    /// * If the form state `RwLock` is poisoned
    pub fn remove_photo_at_index(&self, index: usize) {
        let mut state = self.state.write().unwrap();
        if index < state.photos.len() {
            state.photos.remove(index);
        } else {
            log::debug!("remove_photo_at_index: no photo at index={index}");
        }
    }

    /// Forwards the draft to the interaction layer's create operation.
    ///
    /// The draft itself is left untouched; whether the album actually gets
    /// created is the interaction layer's decision.
    ///
    /// # Panics
    ///
    /// * If the form state `RwLock` is poisoned
    pub fn save_album(&self) {
        let input = {
            let state = self.state.read().unwrap();
            CreateAlbumInput {
                title: state.title.clone(),
                photos: state.photos.clone(),
            }
        };

        (self.create_album)(input);
    }

    /// The draft title.
    ///
    /// # Panics
    ///
    /// * If the form state `RwLock` is poisoned
    #[must_use]
    pub fn title(&self) -> String {
        self.state.read().unwrap().title.clone()
    }

    /// The draft photos.
    ///
    /// # Panics
    ///
    /// * If the form state `RwLock` is poisoned
    #[must_use]
    pub fn photos(&self) -> Vec<PhotoInput> {
        self.state.read().unwrap().photos.clone()
    }

    /// The validation messages for the current draft, one per failing field.
    ///
    /// # Panics
    ///
    /// * If the form state `RwLock` is poisoned
    #[must_use]
    pub fn error_messages(&self) -> FormErrorMessages {
        let state = self.state.read().unwrap();

        FormErrorMessages {
            title: validate_title(&state.title).error_message,
            photos: validate_photos(&state.photos).error_message,
        }
    }
}
