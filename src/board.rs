//! Turn coordination.
//!
//! `GameBoard` is deliberately thin glue: two [`Player`]s, an index for
//! whose turn it is, and the shared [`TypeChart`]. A caller (a UI event
//! loop or an AI driver) expresses intent as an [`Action`]; the board
//! routes it to the active player, sends attack damage to the opponent,
//! and alternates control at turn boundaries. All game rules live in
//! [`Player`] and [`Card`](crate::card::Card); the board adds only the
//! attack-legality check and the type-effectiveness lookup, which need
//! both sides at once.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::catalog::TypeChart;
use crate::error::{EngineResult, GameError};
use crate::player::{Origin, Player};

/// A caller's intent for the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    DrawToHand,
    DrawToDiscard,
    Summon {
        origin: Origin,
        index: usize,
        slot: usize,
    },
    PlayMagic {
        origin: Origin,
        index: usize,
    },
    Discard {
        origin: Origin,
        index: usize,
    },
    /// Attack with the cryptid in the active player's `attacker_slot`.
    /// With a target slot the opponent's cryptid there absorbs the hit;
    /// without one the damage lands on the opponent's health directly.
    Attack {
        attacker_slot: usize,
        target_field_slot: Option<usize>,
    },
    /// End the active player's turn and hand control to the opponent.
    EndTurn,
}

/// Two players and whose turn it is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameBoard {
    players: [Player; 2],
    chart: TypeChart,
    active: usize,
}

impl GameBoard {
    /// Start a match. The first player in the pair moves first.
    #[must_use]
    pub fn new(players: [Player; 2], chart: TypeChart) -> Self {
        Self {
            players,
            chart,
            active: 0,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Mutable access to the active player, for direct drives that
    /// bypass [`Action`] routing.
    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active]
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.active]
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub fn type_chart(&self) -> &TypeChart {
        &self.chart
    }

    /// True once either player is dead.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(Player::is_dead)
    }

    /// The surviving player once the game is over, `None` while both
    /// still stand.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match (self.players[0].is_dead(), self.players[1].is_dead()) {
            (true, false) => Some(&self.players[1]),
            (false, true) => Some(&self.players[0]),
            _ => None,
        }
    }

    /// Route an action to the active player.
    ///
    /// Errors pass through unchanged from the underlying operation; a
    /// failed action mutates nothing.
    pub fn submit_action(&mut self, action: Action) -> EngineResult<()> {
        debug!(player = %self.current_player().username(), ?action, "action submitted");
        match action {
            Action::DrawToHand => self.current_player_mut().draw_card_to_hand(),
            Action::DrawToDiscard => self.current_player_mut().draw_card_to_discard(),
            Action::Summon {
                origin,
                index,
                slot,
            } => self.current_player_mut().summon_card(origin, index, slot),
            Action::PlayMagic { origin, index } => {
                self.current_player_mut().play_magic_card(origin, index)
            }
            Action::Discard { origin, index } => {
                self.current_player_mut().discard_card(origin, index)
            }
            Action::Attack {
                attacker_slot,
                target_field_slot,
            } => self.attack(attacker_slot, target_field_slot),
            Action::EndTurn => {
                self.end_turn();
                Ok(())
            }
        }
    }

    /// End the active player's turn and pass control to the opponent.
    pub fn end_turn(&mut self) {
        self.players[self.active].end_turn();
        self.active = 1 - self.active;
    }

    /// Resolve an attack from the active player's field against the
    /// opponent.
    ///
    /// The attacker must be a cryptid cleared to attack. Against a
    /// cryptid the damage is the attacker's type-adjusted attack; a
    /// direct hit on the opponent carries the plain attack value, since
    /// players have no damage type.
    pub fn attack(
        &mut self,
        attacker_slot: usize,
        target_field_slot: Option<usize>,
    ) -> EngineResult<()> {
        let attacker = self.players[self.active].field_card(attacker_slot)?;
        if !attacker.can_attack()? {
            error!(
                player = %self.players[self.active].username(),
                card = %attacker.card_id(),
                "cryptid is not cleared to attack"
            );
            return Err(GameError::CannotAttack {
                name: attacker.name().to_string(),
            });
        }

        let opponent = 1 - self.active;
        let damage = match target_field_slot {
            Some(slot) => {
                let defender_type = self.players[opponent].field_card(slot)?.cryptid()?.damage_type;
                attacker.attack_on_type(&self.chart, defender_type)?
            }
            None => attacker.cryptid()?.attack,
        };

        debug!(
            player = %self.players[self.active].username(),
            damage,
            target = ?target_field_slot,
            "attack resolved"
        );
        self.players[opponent].attack_received(damage, target_field_slot)
    }
}
