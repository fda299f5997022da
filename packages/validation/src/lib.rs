//! Business rules gating album mutations.
//!
//! The rules are pure functions: identical input always produces an identical
//! [`ValidationResult`], with no state carried between calls. A failing result
//! is a value, never an error.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use albumbox_album_models::PhotoInput;
use serde::{Deserialize, Serialize};

/// The minimum number of characters an album title requires.
pub const MIN_TITLE_LEN: usize = 5;

/// The character album titles may not contain.
pub const ILLEGAL_TITLE_CHAR: char = '-';

/// The outcome of evaluating a rule-set against an input.
///
/// Produced fresh on every call and never persisted.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the input passed every rule
    pub is_valid: bool,
    /// Human-readable message for the first failing rule
    pub error_message: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    /// A failing result carrying the message for the failed rule.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

/// Validates an album title.
///
/// Rules are evaluated in a fixed order and exactly one result is returned:
/// the length rule first, then the illegal-character rule. Length is measured
/// in characters, not bytes.
#[must_use]
pub fn validate_title(title: &str) -> ValidationResult {
    if title.chars().count() < MIN_TITLE_LEN {
        log::trace!("validate_title failed: title={title} is too short");
        return ValidationResult::invalid(format!(
            "An album title requires at least {MIN_TITLE_LEN} characters"
        ));
    }

    if title.contains(ILLEGAL_TITLE_CHAR) {
        log::trace!("validate_title failed: title={title} contains {ILLEGAL_TITLE_CHAR}");
        return ValidationResult::invalid(format!(
            "An album title cannot contain the '{ILLEGAL_TITLE_CHAR}' character"
        ));
    }

    ValidationResult::valid()
}

/// Validates an album's photo sequence.
#[must_use]
pub fn validate_photos(photos: &[PhotoInput]) -> ValidationResult {
    if photos.is_empty() {
        log::trace!("validate_photos failed: no photos");
        return ValidationResult::invalid("An album requires at least one photo");
    }

    ValidationResult::valid()
}
