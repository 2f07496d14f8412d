//! # cryptids-engine
//!
//! A turn-based collectible-card game engine for the Cryptids card game.
//!
//! Two combatants each hold a deck, hand, discard pile, and a field of
//! summoned creatures ("cryptids") plus magic cards in play. The engine
//! enforces the rules for drawing, summoning, attacking, discarding,
//! status effects, and end-of-turn state transitions, and resolves a
//! type-effectiveness combat calculation with one-level overspill
//! redistribution.
//!
//! ## Design Principles
//!
//! 1. **Synchronous core**: a single-threaded, turn-by-turn simulation.
//!    Callers (a UI event loop or an AI driver) invoke operations and
//!    get either updated state or a typed error back. No callbacks.
//!
//! 2. **Cards never die**: every card is built once from catalog data
//!    when a deck is assembled and only ever moves between locations.
//!    The total card count per player is invariant for a whole match.
//!
//! 3. **Data-driven catalog**: card definitions and the type chart load
//!    from JSON; rules never hardcode individual cards.
//!
//! ## Modules
//!
//! - `catalog`: Card definitions, ids, the type-effectiveness chart
//! - `card`: Runtime card state and the status lifecycle
//! - `player`: Card-location bookkeeping and combat resolution
//! - `board`: Thin two-player turn coordinator
//! - `config`: Game-rule constants and overrides
//! - `rng`: Seeded RNG for deterministic shuffles
//! - `error`: The engine's error taxonomy

pub mod board;
pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

// Re-export commonly used types
pub use crate::board::{Action, GameBoard};
pub use crate::card::{Card, CardKind, CryptidState, Location, MagicState};
pub use crate::catalog::{
    CardCatalog, CardClass, CardId, CardType, CatalogEntry, CryptidData, DamageType, Influence,
    MagicData, Modifier, SummonType, TypeChart, TypeRelation,
};
pub use crate::config::GameConfig;
pub use crate::error::{CatalogError, EngineResult, GameError};
pub use crate::player::{Origin, Player};
pub use crate::rng::GameRng;
