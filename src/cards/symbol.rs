//! Symbol table - the faces that can be dealt.
//!
//! Cards never carry their glyph. They hold a `FaceId` into the session's
//! `SymbolSet`, and two cards match when their face ids are equal.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig};

/// Identifier of a face in a `SymbolSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u16);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// Ordered, duplicate-free set of glyphs.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{FaceId, SymbolSet};
/// use memory_match::core::GameConfig;
///
/// let symbols = SymbolSet::from_config(&GameConfig::default()).unwrap();
///
/// assert_eq!(symbols.len(), 8);
/// assert_eq!(symbols.glyph(FaceId::new(0)), Some("🌟"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    glyphs: Vec<String>,
}

impl SymbolSet {
    /// Build the symbol table for a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            glyphs: config.symbols.clone(),
        })
    }

    /// Get the glyph for a face.
    #[must_use]
    pub fn glyph(&self, face: FaceId) -> Option<&str> {
        self.glyphs.get(face.0 as usize).map(String::as_str)
    }

    /// Number of symbols (pairs on the board).
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over every face id in the set.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> {
        (0..self.glyphs.len() as u16).map(FaceId)
    }
}
