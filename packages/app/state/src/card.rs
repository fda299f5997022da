//! The inline-edit state machine behind a single album card.
//!
//! A card starts out viewing its album title. An edit intent flips it into
//! editing, where the title is buffered locally. Pressing Enter commits the
//! buffer through the interaction layer, but only when the buffer passes
//! title validation; an invalid buffer keeps the card editing and surfaces
//! the validation message instead.
//!
//! The confirmation listener captures the buffer by value, so it is
//! re-installed on every buffer change. Validation must always evaluate the
//! latest buffer, never a stale one.

use std::sync::{Arc, RwLock};

use albumbox_album::UpdateAlbumAction;
use albumbox_album_models::{Album, UpdateAlbumInput};
use albumbox_validation::validate_title;

use crate::events::{Key, KeydownEvents, ListenerHandle};

struct CardState {
    /// Locally buffered title, edited before any commit
    title: String,
    /// The canonical title last seen on the source album
    committed_title: String,
    editing: bool,
}

/// UI state for one album card.
///
/// Every card owns its buffer and edit flag independently; any number of
/// cards may be editing at the same time without interacting.
pub struct AlbumCard {
    album_id: String,
    url: String,
    username: String,
    state: Arc<RwLock<CardState>>,
    keydown: KeydownEvents,
    update_album: UpdateAlbumAction,
    subscription: RwLock<Option<ListenerHandle>>,
}

impl AlbumCard {
    /// Creates the card state for an album and installs its confirmation
    /// listener.
    #[must_use]
    pub fn new(album: &Album, keydown: KeydownEvents, update_album: UpdateAlbumAction) -> Self {
        let card = Self {
            album_id: album.id.clone(),
            url: album.url.clone(),
            username: album.author.username.clone(),
            state: Arc::new(RwLock::new(CardState {
                title: album.title.clone(),
                committed_title: album.title.clone(),
                editing: false,
            })),
            keydown,
            update_album,
            subscription: RwLock::new(None),
        };

        card.subscribe();

        card
    }

    /// Installs the confirmation listener for the current buffer, replacing
    /// any previously installed one.
    fn subscribe(&self) {
        let title = self.state.read().unwrap().title.clone();
        let state = Arc::clone(&self.state);
        let album_id = self.album_id.clone();
        let update_album = self.update_album.clone();

        let handle = self.keydown.on_keydown(move |event| {
            if event.key != Key::Enter {
                return;
            }

            let result = validate_title(&title);
            if result.is_valid {
                update_album(&album_id, UpdateAlbumInput::title(title.clone()));
                state.write().unwrap().editing = false;
            } else {
                log::debug!(
                    "confirmation ignored for album_id={album_id}: {:?}",
                    result.error_message
                );
            }
        });

        *self.subscription.write().unwrap() = Some(handle);
    }

    /// Replaces the buffered title and re-installs the confirmation listener
    /// so it evaluates the new buffer.
    ///
    /// # Panics
    ///
    /// * If the card state `RwLock` is poisoned
    pub fn set_title(&self, title: impl Into<String>) {
        self.state.write().unwrap().title = title.into();
        self.subscribe();
    }

    /// Flips the card between viewing and editing. Edit intents are never
    /// validation-gated.
    ///
    /// # Panics
    ///
    /// * If the card state `RwLock` is poisoned
    pub fn set_editing(&self, editing: bool) {
        self.state.write().unwrap().editing = editing;
    }

    /// Adopts an externally changed canonical title as the new baseline,
    /// e.g. after a successful update round-trip.
    ///
    /// # Panics
    ///
    /// * If the card state `RwLock` is poisoned
    pub fn sync_album(&self, album: &Album) {
        let resubscribe = {
            let mut state = self.state.write().unwrap();
            if album.title == state.committed_title {
                false
            } else {
                state.committed_title = album.title.clone();
                state.title = album.title.clone();
                true
            }
        };

        if resubscribe {
            self.subscribe();
        }
    }

    /// The currently buffered title.
    ///
    /// # Panics
    ///
    /// * If the card state `RwLock` is poisoned
    #[must_use]
    pub fn title(&self) -> String {
        self.state.read().unwrap().title.clone()
    }

    /// The album's derived application path.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The album author's display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether the card is editing.
    ///
    /// # Panics
    ///
    /// * If the card state `RwLock` is poisoned
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.state.read().unwrap().editing
    }

    /// The validation message for the current buffer, if it is invalid.
    ///
    /// # Panics
    ///
    /// * If the card state `RwLock` is poisoned
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        validate_title(&self.state.read().unwrap().title).error_message
    }
}

#[cfg(test)]
mod test {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use albumbox_album::UpdateAlbumAction;
    use albumbox_album_models::{Album, Author, UpdateAlbumInput};
    use pretty_assertions::assert_eq;

    use crate::{
        card::AlbumCard,
        events::{Key, KeydownEvent, KeydownEvents},
    };

    const ENTER: KeydownEvent = KeydownEvent { key: Key::Enter };

    #[derive(Default)]
    struct RecordedUpdates {
        calls: AtomicUsize,
        last: Mutex<Option<(String, UpdateAlbumInput)>>,
    }

    fn recorded_action() -> (UpdateAlbumAction, Arc<RecordedUpdates>) {
        let updates = Arc::new(RecordedUpdates::default());
        let recorded = updates.clone();
        let action: UpdateAlbumAction = Arc::new(move |album_id: &str, input: UpdateAlbumInput| {
            recorded.calls.fetch_add(1, Ordering::SeqCst);
            *recorded.last.lock().unwrap() = Some((album_id.to_string(), input));
        });

        (action, updates)
    }

    fn album(id: &str, title: &str) -> Album {
        Album {
            id: id.to_string(),
            title: title.to_string(),
            url: Album::url_for(id),
            author: Author {
                id: "0".to_string(),
                username: "username 0".to_string(),
            },
            photos: vec![],
        }
    }

    #[test_log::test]
    fn starts_viewing_with_the_album_title_buffered() {
        let (action, _updates) = recorded_action();
        let card = AlbumCard::new(&album("0", "title 0"), KeydownEvents::new(), action);

        assert!(!card.is_editing());
        assert_eq!(card.title(), "title 0");
        assert_eq!(card.url(), "/albums/0");
        assert_eq!(card.username(), "username 0");
    }

    #[test_log::test]
    fn an_edit_intent_is_never_gated() {
        let (action, _updates) = recorded_action();
        let card = AlbumCard::new(&album("0", "a-b"), KeydownEvents::new(), action);

        card.set_editing(true);

        assert!(card.is_editing());
    }

    #[test_log::test]
    fn a_valid_confirmation_commits_the_buffer_and_returns_to_viewing() {
        let (action, updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        card.set_editing(true);
        card.set_title("new title");
        events.emit(&ENTER);

        assert!(!card.is_editing());
        assert_eq!(updates.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *updates.last.lock().unwrap(),
            Some(("0".to_string(), UpdateAlbumInput::title("new title")))
        );
    }

    #[test_log::test]
    fn an_invalid_confirmation_stays_editing_and_surfaces_the_message() {
        let (action, updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        card.set_editing(true);
        card.set_title("a-b");
        events.emit(&ENTER);

        assert!(card.is_editing());
        assert_eq!(updates.calls.load(Ordering::SeqCst), 0);
        assert!(card.error_message().is_some());
    }

    #[test_log::test]
    fn confirmation_evaluates_the_latest_buffer() {
        let (action, updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        card.set_editing(true);
        card.set_title("abcd");
        card.set_title("abcde");
        events.emit(&ENTER);

        assert_eq!(updates.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *updates.last.lock().unwrap(),
            Some(("0".to_string(), UpdateAlbumInput::title("abcde")))
        );
    }

    #[test_log::test]
    fn non_confirmation_keys_are_ignored() {
        let (action, updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        card.set_editing(true);
        events.emit(&KeydownEvent { key: Key::Char('a') });

        assert!(card.is_editing());
        assert_eq!(updates.calls.load(Ordering::SeqCst), 0);
    }

    #[test_log::test]
    fn each_valid_confirmation_fires_one_call() {
        let (action, updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        card.set_title("abcde");
        events.emit(&ENTER);
        events.emit(&ENTER);

        assert_eq!(updates.calls.load(Ordering::SeqCst), 2);
    }

    #[test_log::test]
    fn sync_album_adopts_an_externally_changed_title() {
        let (action, _updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        card.set_title("draft");
        card.sync_album(&album("0", "canonical"));

        assert_eq!(card.title(), "canonical");
        assert_eq!(card.error_message(), None);
    }

    #[test_log::test]
    fn sync_album_with_an_unchanged_title_keeps_the_buffer() {
        let (action, _updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        card.set_title("draft");
        card.sync_album(&album("0", "title 0"));

        assert_eq!(card.title(), "draft");
    }

    #[test_log::test]
    fn cards_edit_independently() {
        let (action_a, updates_a) = recorded_action();
        let (action_b, updates_b) = recorded_action();
        let events = KeydownEvents::new();
        let card_a = AlbumCard::new(&album("0", "title 0"), events.clone(), action_a);
        let card_b = AlbumCard::new(&album("1", "title 1"), events.clone(), action_b);

        card_a.set_editing(true);
        card_b.set_editing(true);
        card_a.set_title("a-b");
        card_b.set_title("brand new");
        events.emit(&ENTER);

        assert!(card_a.is_editing());
        assert!(!card_b.is_editing());
        assert_eq!(updates_a.calls.load(Ordering::SeqCst), 0);
        assert_eq!(updates_b.calls.load(Ordering::SeqCst), 1);
    }

    #[test_log::test]
    fn dropping_the_card_uninstalls_its_listener() {
        let (action, updates) = recorded_action();
        let events = KeydownEvents::new();
        let card = AlbumCard::new(&album("0", "title 0"), events.clone(), action);

        drop(card);
        events.emit(&ENTER);

        assert_eq!(updates.calls.load(Ordering::SeqCst), 0);
    }
}
