//! Engine configuration.
//!
//! All the knobs of a match live in [`GameConfig`]: collection sizes,
//! starting health, the death threshold. The damage multipliers used by
//! type-effectiveness resolution are fixed constants; they are part of
//! the combat rules, not per-match configuration.

use serde::{Deserialize, Serialize};

/// Number of field slots a player can occupy with summoned cryptids.
pub const DEFAULT_FIELD_SIZE: usize = 4;

/// Target hand size maintained by `fill_hand`.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Number of cards in a legal deck selection.
pub const DEFAULT_DECK_SIZE: usize = 20;

/// Starting health of each player.
pub const DEFAULT_STARTING_HP: i32 = 2000;

/// A player whose health reaches this value (or below) is dead.
pub const DEFAULT_DEAD_VALUE: i32 = 0;

/// Damage multiplier when the attacker is strong against the recipient type.
pub const STRENGTH_DMG_MULTIPLIER: f32 = 1.5;

/// Damage multiplier when the attacker is weak against the recipient type.
pub const WEAKNESS_DMG_MULTIPLIER: f32 = 0.5;

/// Per-match configuration handed to [`Player`](crate::Player) construction.
///
/// ## Example
///
/// ```
/// use cryptids_engine::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.field_size, 4);
/// assert_eq!(config.hand_size, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of field slots per player.
    pub field_size: usize,

    /// Hand size the players draw back up to each turn.
    pub hand_size: usize,

    /// Expected deck selection size.
    pub deck_size: usize,

    /// Player starting (and maximum) health.
    pub starting_hp: i32,

    /// Health threshold at or below which a player is dead.
    pub dead_value: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            hand_size: DEFAULT_HAND_SIZE,
            deck_size: DEFAULT_DECK_SIZE,
            starting_hp: DEFAULT_STARTING_HP,
            dead_value: DEFAULT_DEAD_VALUE,
        }
    }
}
