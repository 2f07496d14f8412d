//! Error taxonomy for the engine.
//!
//! Every fallible operation returns a typed error; the engine never
//! swallows its own domain errors. Kinds:
//!
//! - **Validation**: malformed external data ([`CatalogError`]).
//! - **Illegal move**: a rule violation on a well-formed request
//!   (occupied slot, wrong card kind, unplayable card). The UI/AI layer
//!   is expected to pre-filter these, so they are logged at error
//!   severity where raised and surfaced unchanged.
//! - **Resource exhausted**: drawing from an empty deck.
//! - **Index out of range**: invalid position into a collection.
//!
//! All checks run before any mutation, so a failed operation leaves the
//! player state untouched.

use thiserror::Error;

use crate::catalog::{CardId, CardType};

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, GameError>;

/// Failure to build the card catalog or type chart from external data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The backing JSON could not be parsed (includes unrecognised
    /// `card_type` tags).
    #[error("failed to parse catalog data: {0}")]
    Parse(String),

    /// A catalog key was not a stringified integer id.
    #[error("invalid catalog key {0:?}: expected an integer card id")]
    InvalidKey(String),

    /// A deck selection referenced an id the catalog does not contain.
    #[error("card {0} not present in catalog")]
    UnknownCard(CardId),
}

/// A rule or resource violation raised by an engine operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// Summoning into a field slot that already holds a cryptid.
    #[error("field slot {slot} is already occupied")]
    SlotOccupied { slot: usize },

    /// Attacking (or targeting) a field slot with no cryptid in it.
    #[error("field slot {slot} is empty")]
    EmptySlot { slot: usize },

    /// A cryptid-only operation on a magic card, or vice versa.
    #[error("expected a {expected} card, found a {actual} card")]
    WrongCardKind {
        expected: CardType,
        actual: CardType,
    },

    /// The card's summonable/playable flag is not set.
    #[error("card {name:?} is not playable")]
    NotPlayable { name: String },

    /// The cryptid cannot attack this turn (dead, stunned, or summoned
    /// this turn).
    #[error("cryptid {name:?} cannot attack this turn")]
    CannotAttack { name: String },

    /// Drawing from a deck with zero cards. Callers must check
    /// `deck_count() > 0` first; this is a caller error, not a soft
    /// no-op.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    /// Invalid positional index into a card collection.
    #[error("index {index} out of range for collection of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// Field slot index beyond the configured field size.
    #[error("field slot {slot} out of range for a field of {field_size} slots")]
    InvalidSlot { slot: usize, field_size: usize },

    /// Catalog/data validation failure.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
