//! Player state and card-location bookkeeping.
//!
//! A `Player` owns every card built from their deck selection, spread
//! across five collections: the shuffled deck (tail = top), the hand,
//! the discard pile, the magic cards in play, and a fixed number of
//! field slots. Cards only ever move between these collections; the
//! total count is invariant for the whole match.
//!
//! The move operations perform their precondition checks in order and
//! mutate nothing until every check has passed, so a failed call leaves
//! the player untouched. Rule violations are logged at error severity
//! where they are raised (the UI is expected to have filtered them) and
//! surfaced to the caller unchanged.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::card::{Card, Location};
use crate::catalog::{CardCatalog, CardId, CardType};
use crate::config::GameConfig;
use crate::error::{EngineResult, GameError};
use crate::rng::GameRng;

/// Which collection a move operation takes its card from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Hand,
    MagicInPlay,
}

/// One combatant: collections, health, turn counter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    username: String,

    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
    magic_in_play: Vec<Card>,
    field: Vec<Option<Card>>,

    hp_starting: i32,
    hp_current: i32,
    dead: bool,
    turn: u32,

    hand_size: usize,
    dead_value: i32,
}

impl Player {
    /// Build a player from a deck selection.
    ///
    /// Creates one card per selected id, shuffles the deck, fills the
    /// hand, then runs one `end_turn` to normalize card statuses, so a
    /// freshly constructed player already has `turn() == 1`. That first
    /// call is status normalization, not a real turn boundary.
    pub fn new(
        username: impl Into<String>,
        catalog: &CardCatalog,
        deck_selection: &[CardId],
        config: &GameConfig,
        rng: &mut GameRng,
    ) -> EngineResult<Self> {
        let mut deck = deck_selection
            .iter()
            .map(|&id| Card::new(catalog, id))
            .collect::<Result<Vec<_>, _>>()?;
        rng.shuffle(&mut deck);

        let mut player = Self {
            username: username.into(),
            deck,
            hand: Vec::new(),
            discard: Vec::new(),
            magic_in_play: Vec::new(),
            field: vec![None; config.field_size],
            hp_starting: config.starting_hp,
            hp_current: config.starting_hp,
            dead: false,
            turn: 0,
            hand_size: config.hand_size,
            dead_value: config.dead_value,
        };

        player.fill_hand();
        player.end_turn();
        Ok(player)
    }

    // === Read access ===

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current health. May go below zero; there is no clamp.
    #[must_use]
    pub fn hp_current(&self) -> i32 {
        self.hp_current
    }

    #[must_use]
    pub fn hp_starting(&self) -> i32 {
        self.hp_starting
    }

    /// True once health has reached the dead threshold.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Turn counter. Incremented once per `end_turn`; construction's
    /// normalization pass leaves it at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn magic_in_play(&self) -> &[Card] {
        &self.magic_in_play
    }

    /// The field: one optional card per slot.
    #[must_use]
    pub fn field(&self) -> &[Option<Card>] {
        &self.field
    }

    /// The card in a field slot, or `EmptySlot`/`InvalidSlot`.
    pub fn field_card(&self, slot: usize) -> EngineResult<&Card> {
        self.check_slot(slot)?;
        self.field[slot]
            .as_ref()
            .ok_or(GameError::EmptySlot { slot })
    }

    /// Mutable access to the card in a field slot, for effect drivers
    /// that apply statuses (stuns and the like) directly.
    pub fn field_card_mut(&mut self, slot: usize) -> EngineResult<&mut Card> {
        self.check_slot(slot)?;
        self.field[slot]
            .as_mut()
            .ok_or(GameError::EmptySlot { slot })
    }

    /// Number of occupied field slots.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.field.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total cards across all five collections. Constant for the whole
    /// match: cards move, they never vanish or duplicate.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.discard.len()
            + self.magic_in_play.len()
            + self.field_count()
    }

    // === Drawing ===

    /// Draw until the hand reaches its target size or the deck runs
    /// out. Partial hands are legal; exhaustion here is silent.
    pub fn fill_hand(&mut self) {
        while self.hand.len() < self.hand_size {
            let Some(card) = self.deck.pop() else { break };
            self.hand.push(Self::into_hand(card));
        }
    }

    /// Draw the top card of the deck into the hand.
    ///
    /// Fatal caller error if the deck is empty; check `deck_count()`
    /// first.
    pub fn draw_card_to_hand(&mut self) -> EngineResult<()> {
        let Some(card) = self.deck.pop() else {
            error!(username = %self.username, "draw from empty deck");
            return Err(GameError::EmptyDeck);
        };
        debug!(username = %self.username, card = %card.card_id(), "drew card to hand");
        self.hand.push(Self::into_hand(card));
        Ok(())
    }

    /// Draw the top card of the deck straight into the discard pile.
    pub fn draw_card_to_discard(&mut self) -> EngineResult<()> {
        let Some(mut card) = self.deck.pop() else {
            error!(username = %self.username, "draw from empty deck");
            return Err(GameError::EmptyDeck);
        };
        debug!(username = %self.username, card = %card.card_id(), "drew card to discard");
        card.set_location(Location::Discard);
        self.discard.push(card);
        Ok(())
    }

    fn into_hand(mut card: Card) -> Card {
        card.set_location(Location::Hand);
        // Entering the hand grants play eligibility; there is currently
        // no further gating rule.
        card.set_playable(true);
        card
    }

    // === Moves ===

    /// Summon a cryptid from `origin` at `index` into field slot `slot`.
    ///
    /// Checks, in order: the slot is free, the card is a cryptid, the
    /// card is summonable. Nothing mutates until all three pass.
    pub fn summon_card(
        &mut self,
        origin: Origin,
        index: usize,
        slot: usize,
    ) -> EngineResult<()> {
        self.check_slot(slot)?;
        self.check_index(origin, index)?;

        if self.field[slot].is_some() {
            error!(username = %self.username, slot, "summon into occupied slot");
            return Err(GameError::SlotOccupied { slot });
        }

        let card = &self.collection(origin)[index];
        if card.card_type() != CardType::Cryptid {
            error!(username = %self.username, card = %card.card_id(), "tried to summon a magic card");
            return Err(GameError::WrongCardKind {
                expected: CardType::Cryptid,
                actual: CardType::Magic,
            });
        }
        if !card.is_summonable()? {
            error!(username = %self.username, card = %card.card_id(), "card is not summonable");
            return Err(GameError::NotPlayable {
                name: card.name().to_string(),
            });
        }

        let mut card = self.collection_mut(origin).remove(index);
        card.play_card(self.turn);
        card.set_location(Location::Field);
        debug!(username = %self.username, card = %card.card_id(), slot, "summoned cryptid");
        self.field[slot] = Some(card);
        Ok(())
    }

    /// Play a magic card from `origin` at `index` into the magic-in-play
    /// collection. Same precondition shape as `summon_card` with the
    /// kind check inverted.
    pub fn play_magic_card(&mut self, origin: Origin, index: usize) -> EngineResult<()> {
        self.check_index(origin, index)?;

        let card = &self.collection(origin)[index];
        if card.card_type() != CardType::Magic {
            error!(username = %self.username, card = %card.card_id(), "tried to play a cryptid as magic");
            return Err(GameError::WrongCardKind {
                expected: CardType::Magic,
                actual: CardType::Cryptid,
            });
        }
        if !card.is_playable()? {
            error!(username = %self.username, card = %card.card_id(), "magic card is not playable");
            return Err(GameError::NotPlayable {
                name: card.name().to_string(),
            });
        }

        let mut card = self.collection_mut(origin).remove(index);
        card.play_card(self.turn);
        card.set_location(Location::Magic);
        // The effect runs for magic_level + 1 turn boundaries.
        let state = card.magic_mut()?;
        state.active_for = Some(u32::from(state.magic_level) + 1);
        debug!(username = %self.username, card = %card.card_id(), "played magic card");
        self.magic_in_play.push(card);
        Ok(())
    }

    /// Move the card at `index` in `origin` to the discard pile.
    /// Unconditional beyond index validity.
    pub fn discard_card(&mut self, origin: Origin, index: usize) -> EngineResult<()> {
        self.check_index(origin, index)?;

        let mut card = self.collection_mut(origin).remove(index);
        card.set_location(Location::Discard);
        debug!(username = %self.username, card = %card.card_id(), "discarded card");
        self.discard.push(card);
        Ok(())
    }

    // === Combat resolution ===

    /// Resolve incoming damage.
    ///
    /// With no target slot the damage hits the player's health directly.
    /// With a target slot the cryptid there absorbs it; any overkill is
    /// split evenly across the other occupied slots in increasing slot
    /// order, the first taking the integer-division remainder. Overspill
    /// redistribution is exactly one level deep; excess generated by the
    /// secondary hits is discarded. When no other cryptid is present the
    /// whole excess falls through to the player's health.
    pub fn attack_received(
        &mut self,
        damage: u32,
        target_field_slot: Option<usize>,
    ) -> EngineResult<()> {
        let Some(target) = target_field_slot else {
            self.reduce_hp(damage);
            return Ok(());
        };

        self.check_slot(target)?;
        let Some(card) = self.field[target].as_mut() else {
            error!(username = %self.username, slot = target, "attack on empty field slot");
            return Err(GameError::EmptySlot { slot: target });
        };

        let excess = card.receive_damage(damage)?;
        if excess == 0 {
            return Ok(());
        }

        let others: Vec<usize> = (0..self.field.len())
            .filter(|&slot| slot != target && self.field[slot].is_some())
            .collect();

        if others.is_empty() {
            // Nothing to spread over: the overkill hits the player.
            debug!(username = %self.username, excess, "overspill falls through to player");
            self.reduce_hp(excess);
            return Ok(());
        }

        let n = others.len() as u32;
        let per_cryptid = excess / n;
        let remainder = excess % n;

        for (i, &slot) in others.iter().enumerate() {
            let amount = if i == 0 {
                per_cryptid + remainder
            } else {
                per_cryptid
            };
            if let Some(card) = self.field[slot].as_mut() {
                // Secondary excess is discarded, not redistributed.
                let _ = card.receive_damage(amount)?;
            }
        }
        Ok(())
    }

    /// Subtract health. No lower clamp; at or below the dead threshold
    /// the player is dead.
    pub fn reduce_hp(&mut self, amount: u32) {
        self.hp_current -= amount as i32;
        if self.hp_current <= self.dead_value {
            self.dead = true;
        }
    }

    // === Turn boundary ===

    /// End the player's turn: refill the hand, cascade the end-of-turn
    /// status update over every card the player owns, then increment the
    /// turn counter. Every card sees the pre-increment turn value.
    pub fn end_turn(&mut self) {
        self.fill_hand();

        let turn = self.turn;
        for card in self
            .deck
            .iter_mut()
            .chain(self.hand.iter_mut())
            .chain(self.discard.iter_mut())
            .chain(self.magic_in_play.iter_mut())
        {
            card.update_on_turn_end(turn);
        }
        for slot in self.field.iter_mut().flatten() {
            slot.update_on_turn_end(turn);
        }

        self.turn += 1;
    }

    // === Helpers ===

    fn collection(&self, origin: Origin) -> &Vec<Card> {
        match origin {
            Origin::Hand => &self.hand,
            Origin::MagicInPlay => &self.magic_in_play,
        }
    }

    fn collection_mut(&mut self, origin: Origin) -> &mut Vec<Card> {
        match origin {
            Origin::Hand => &mut self.hand,
            Origin::MagicInPlay => &mut self.magic_in_play,
        }
    }

    fn check_slot(&self, slot: usize) -> EngineResult<()> {
        if slot >= self.field.len() {
            return Err(GameError::InvalidSlot {
                slot,
                field_size: self.field.len(),
            });
        }
        Ok(())
    }

    fn check_index(&self, origin: Origin, index: usize) -> EngineResult<()> {
        let len = self.collection(origin).len();
        if index >= len {
            return Err(GameError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}
