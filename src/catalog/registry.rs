//! Card catalog for entry lookup.
//!
//! The `CardCatalog` stores every minted card's static attributes and is
//! built once at process start, either programmatically with
//! [`CardCatalog::register`] or from the minted JSON with
//! [`CardCatalog::from_json_str`] / [`CardCatalog::load`]. After that it
//! is read-only and shared by reference with every `Card` constructor.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::entry::{CardId, CatalogEntry};
use crate::error::CatalogError;

/// Immutable mapping from card id to static attributes.
///
/// ## Example
///
/// ```
/// use cryptids_engine::{CardCatalog, CardId, CatalogEntry};
///
/// let json = r#"{
///     "0": { "card_type": "cryptid", "name": "Mothman", "class": "cosmic",
///            "summon_level": 2, "hp": 340, "attack": 410,
///            "summon_type": "normal", "damage_type": "blood",
///            "modifier": "stun" }
/// }"#;
///
/// let catalog = CardCatalog::from_json_str(json).unwrap();
/// assert_eq!(catalog.get(CardId::new(0)).unwrap().name(), "Mothman");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    entries: FxHashMap<CardId, CatalogEntry>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry.
    ///
    /// Panics if an entry with the same ID already exists.
    pub fn register(&mut self, id: CardId, entry: CatalogEntry) {
        if self.entries.contains_key(&id) {
            panic!("Card with ID {:?} already registered", id);
        }
        self.entries.insert(id, entry);
    }

    /// Build a catalog from the minted JSON format: an object keyed by
    /// stringified integer id.
    ///
    /// Fails fast with a [`CatalogError`] on unparseable data, an
    /// unrecognised `card_type`, or a non-integer key.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: FxHashMap<String, CatalogEntry> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut catalog = Self::new();
        for (key, entry) in raw {
            let id: u32 = key
                .parse()
                .map_err(|_| CatalogError::InvalidKey(key.clone()))?;
            catalog.entries.insert(CardId::new(id), entry);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_json_str(&json)
    }

    /// Get an entry by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    /// Check if an ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (id, entry) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &CatalogEntry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }
}
