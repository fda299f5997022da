//! Keydown listener registration.
//!
//! The presentation layer owns a [`KeydownEvents`] registry and reports every
//! keydown into it. Components subscribe through [`KeydownEvents::on_keydown`]
//! and hold on to the returned [`ListenerHandle`]; dropping the handle
//! uninstalls the listener. Nothing here is ambient global state.

use std::{
    collections::BTreeMap,
    sync::{
        Arc, RwLock, Weak,
        atomic::{AtomicU64, Ordering},
    },
};

/// A key reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The confirmation key
    Enter,
    /// Any other key
    Char(char),
}

/// A single keydown occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeydownEvent {
    /// The key that was pressed
    pub key: Key,
}

type KeydownCallback = Box<dyn Fn(&KeydownEvent) + Send + Sync>;
type Listeners = Arc<RwLock<BTreeMap<u64, KeydownCallback>>>;

/// A registry of keydown listeners.
///
/// Clones share the same listener set, so the registry can be handed to every
/// component of a page.
#[derive(Default, Clone)]
pub struct KeydownEvents {
    listeners: Listeners,
    next_id: Arc<AtomicU64>,
}

impl KeydownEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a listener and returns the handle that keeps it installed.
    ///
    /// # Panics
    ///
    /// * If the listeners `RwLock` is poisoned
    pub fn on_keydown(
        &self,
        listener: impl Fn(&KeydownEvent) + Send + Sync + 'static,
    ) -> ListenerHandle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners
            .write()
            .unwrap()
            .insert(id, Box::new(listener));

        ListenerHandle {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Dispatches a keydown to every currently installed listener.
    ///
    /// # Panics
    ///
    /// * If the listeners `RwLock` is poisoned
    pub fn emit(&self, event: &KeydownEvent) {
        log::trace!("emit: event={event:?}");
        let listeners = self.listeners.read().unwrap();
        for listener in listeners.values() {
            listener(event);
        }
    }
}

/// Keeps a keydown listener installed for as long as it lives.
///
/// Dropping the handle uninstalls the listener; later emits no longer reach
/// it.
pub struct ListenerHandle {
    id: u64,
    listeners: Weak<RwLock<BTreeMap<u64, KeydownCallback>>>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut listeners) = listeners.write() {
                listeners.remove(&self.id);
            }
        }
    }
}
