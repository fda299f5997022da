//! Per-component UI state for the album app.
//!
//! Each controller here owns the state of a single on-screen component and
//! calls back into the `albumbox_album` interaction layer; controllers never
//! share state with each other.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// The inline-edit state machine behind a single album card.
pub mod card;

/// Keydown listener registration with scoped teardown.
pub mod events;

/// The draft state behind the create-album form.
pub mod form;
