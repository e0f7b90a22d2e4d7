//! Per-character display derivation
//!
//! Pure functions run at render time: which image to show and which badge
//! category a status falls into.

use crate::indicators::{HasCategory, StatusCategory};
use futurama_rs::Character;

/// Local placeholder shown when a character has no usable image
pub const FALLBACK_IMAGE: &str = "/futurama-logo.png";

/// Pick the image reference for a character
///
/// A non-blank `image` is returned unchanged; an empty or whitespace-only one
/// yields [`FALLBACK_IMAGE`].
pub fn resolve_image(character: &Character) -> &str {
    resolve_image_str(&character.image)
}

/// Same as [`resolve_image`], on the raw field
///
/// # Examples
///
/// ```
/// use futurama_roster_core::presenter::{resolve_image_str, FALLBACK_IMAGE};
///
/// assert_eq!(resolve_image_str(""), FALLBACK_IMAGE);
/// assert_eq!(resolve_image_str("https://x/y.png"), "https://x/y.png");
/// ```
pub fn resolve_image_str(image: &str) -> &str {
    if image.trim().is_empty() {
        FALLBACK_IMAGE
    } else {
        image
    }
}

/// The image currently shown for one row
///
/// Starts at the resolved reference. When the renderer reports a load
/// failure the slot switches to the fallback, once. A failing fallback is
/// left alone, so there is no substitution loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    source: String,
    substituted: bool,
}

impl ImageSlot {
    pub fn new(image: &str) -> Self {
        Self {
            source: resolve_image_str(image).to_string(),
            substituted: false,
        }
    }

    pub fn for_character(character: &Character) -> Self {
        Self::new(&character.image)
    }

    /// Reference to load
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the slot points at the fallback (initially or after substitution)
    ///
    /// Matches on containment since renderers often resolve the asset path
    /// to an absolute URL.
    pub fn is_fallback(&self) -> bool {
        self.source.contains(FALLBACK_IMAGE)
    }

    /// Whether a load failure caused a switch to the fallback
    pub fn was_substituted(&self) -> bool {
        self.substituted
    }

    /// Report that loading `source()` failed
    ///
    /// Returns true if the slot switched to the fallback.
    pub fn on_load_error(&mut self) -> bool {
        if self.is_fallback() {
            return false;
        }
        tracing::debug!("image {} failed, using fallback", self.source);
        self.source = FALLBACK_IMAGE.to_string();
        self.substituted = true;
        true
    }
}

/// Display-ready values for one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub status: String,
    pub species: String,
    pub created_at: String,
    pub image: ImageSlot,
    pub category: StatusCategory,
}

impl CharacterRow {
    pub fn from_character(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            gender: character.gender.clone(),
            status: character.status.as_str().to_string(),
            species: character.species.clone(),
            created_at: character.created_at.clone(),
            image: ImageSlot::for_character(character),
            category: character.category(),
        }
    }
}

/// Build rows for a list of characters, preserving order
pub fn present_all(characters: &[Character]) -> Vec<CharacterRow> {
    characters.iter().map(CharacterRow::from_character).collect()
}
