//! Runtime card state.
//!
//! A `Card` is one card instance in a match: catalog-derived static
//! attributes plus everything that mutates as the game progresses:
//! location, HP, stun timers, eligibility flags. Cards are created once
//! when a deck is built and never destroyed; a dead cryptid or spent
//! magic card just moves to the discard location and stays addressable.
//!
//! The two card kinds are a sum type ([`CardKind`]); kind-specific
//! operations surface [`GameError::WrongCardKind`] instead of the
//! unchecked attribute failure the kinds would otherwise invite.

use serde::{Deserialize, Serialize};

use crate::catalog::{
    CardCatalog, CardClass, CardId, CardType, CatalogEntry, DamageType, Influence, Modifier,
    SummonType, TypeChart,
};
use crate::config::{STRENGTH_DMG_MULTIPLIER, WEAKNESS_DMG_MULTIPLIER};
use crate::error::{CatalogError, GameError};

/// Where a card currently lives.
///
/// A card is in exactly one location at any time; only the `Player`
/// move operations change it, and they keep the owning collection in
/// step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Deck,
    Hand,
    Field,
    Magic,
    Discard,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Location::Deck => "deck",
            Location::Hand => "hand",
            Location::Field => "field",
            Location::Magic => "magic",
            Location::Discard => "discard",
        };
        write!(f, "{}", tag)
    }
}

/// Mutable and static state of a cryptid card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptidState {
    // Catalog-derived, immutable for the lifetime of the card.
    pub starting_hp: u32,
    pub attack: u32,
    pub summon_level: u8,
    pub class: CardClass,
    pub summon_type: SummonType,
    pub damage_type: DamageType,
    pub modifier: Modifier,

    // Runtime state.
    pub current_hp: u32,
    pub dead: bool,
    pub stunned: bool,
    pub stunned_for: u32,
    pub can_attack: bool,
    pub summonable: bool,
}

/// Mutable and static state of a magic card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicState {
    pub magic_level: u8,
    pub class: CardClass,
    pub influence: Influence,

    /// Remaining turns the effect is live; `None` when inactive.
    pub active_for: Option<u32>,
    pub playable: bool,
}

/// Kind-specific card payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Cryptid(CryptidState),
    Magic(MagicState),
}

/// One card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    card_id: CardId,
    name: String,
    location: Location,
    active: bool,
    turn_played: Option<u32>,
    kind: CardKind,
}

impl Card {
    /// Build a card from its catalog entry.
    ///
    /// Initial state: location `Deck`, inactive, statuses cleared, a
    /// cryptid at full HP. Fails if the catalog has no entry for `card_id`.
    pub fn new(catalog: &CardCatalog, card_id: CardId) -> Result<Self, CatalogError> {
        let entry = catalog
            .get(card_id)
            .ok_or(CatalogError::UnknownCard(card_id))?;

        let kind = match entry {
            CatalogEntry::Cryptid(data) => CardKind::Cryptid(CryptidState {
                starting_hp: data.hp,
                attack: data.attack,
                summon_level: data.summon_level,
                class: data.class,
                summon_type: data.summon_type,
                damage_type: data.damage_type,
                modifier: data.modifier,
                current_hp: data.hp,
                dead: false,
                stunned: false,
                stunned_for: 0,
                can_attack: false,
                summonable: false,
            }),
            CatalogEntry::Magic(data) => CardKind::Magic(MagicState {
                magic_level: data.magic_level,
                class: data.class,
                influence: data.influence,
                active_for: None,
                playable: false,
            }),
        };

        Ok(Self {
            card_id,
            name: entry.name().to_string(),
            location: Location::Deck,
            active: false,
            turn_played: None,
            kind,
        })
    }

    // === Identity and common state ===

    /// The catalog id this card was built from.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    /// The card's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This card's kind.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self.kind {
            CardKind::Cryptid(_) => CardType::Cryptid,
            CardKind::Magic(_) => CardType::Magic,
        }
    }

    /// The card's current location.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Overwrite the card's location tag. The caller is responsible for
    /// moving the card between the matching collections.
    pub fn set_location(&mut self, location: Location) -> &mut Self {
        self.location = location;
        self
    }

    /// Has this card been played this turn-cycle?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turn index at which the card was placed, if it has been played.
    #[must_use]
    pub fn turn_played(&self) -> Option<u32> {
        self.turn_played
    }

    /// Kind-specific payload, for rendering.
    #[must_use]
    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    // === Kind-checked access ===

    /// Cryptid payload, or `WrongCardKind` for a magic card.
    pub fn cryptid(&self) -> Result<&CryptidState, GameError> {
        match &self.kind {
            CardKind::Cryptid(state) => Ok(state),
            CardKind::Magic(_) => Err(GameError::WrongCardKind {
                expected: CardType::Cryptid,
                actual: CardType::Magic,
            }),
        }
    }

    pub(crate) fn cryptid_mut(&mut self) -> Result<&mut CryptidState, GameError> {
        match &mut self.kind {
            CardKind::Cryptid(state) => Ok(state),
            CardKind::Magic(_) => Err(GameError::WrongCardKind {
                expected: CardType::Cryptid,
                actual: CardType::Magic,
            }),
        }
    }

    pub(crate) fn magic_mut(&mut self) -> Result<&mut MagicState, GameError> {
        match &mut self.kind {
            CardKind::Magic(state) => Ok(state),
            CardKind::Cryptid(_) => Err(GameError::WrongCardKind {
                expected: CardType::Magic,
                actual: CardType::Cryptid,
            }),
        }
    }

    /// Magic payload, or `WrongCardKind` for a cryptid.
    pub fn magic(&self) -> Result<&MagicState, GameError> {
        match &self.kind {
            CardKind::Magic(state) => Ok(state),
            CardKind::Cryptid(_) => Err(GameError::WrongCardKind {
                expected: CardType::Magic,
                actual: CardType::Cryptid,
            }),
        }
    }

    /// Check if the cryptid is dead.
    pub fn is_dead(&self) -> Result<bool, GameError> {
        Ok(self.cryptid()?.dead)
    }

    /// Check if the cryptid is stunned.
    pub fn is_stunned(&self) -> Result<bool, GameError> {
        Ok(self.cryptid()?.stunned)
    }

    /// Check if the cryptid is eligible to be summoned from hand.
    pub fn is_summonable(&self) -> Result<bool, GameError> {
        Ok(self.cryptid()?.summonable)
    }

    /// Check if the magic card is eligible to be played from hand.
    pub fn is_playable(&self) -> Result<bool, GameError> {
        Ok(self.magic()?.playable)
    }

    /// Check if the cryptid may attack this turn.
    pub fn can_attack(&self) -> Result<bool, GameError> {
        Ok(self.cryptid()?.can_attack)
    }

    /// Grant or revoke hand-eligibility for either kind.
    pub(crate) fn set_playable(&mut self, playable: bool) {
        match &mut self.kind {
            CardKind::Cryptid(state) => state.summonable = playable,
            CardKind::Magic(state) => state.playable = playable,
        }
    }

    // === Combat ===

    /// Apply damage to a cryptid.
    ///
    /// Sets `current_hp = max(0, hp - amount)` and returns the overkill
    /// `excess = max(0, amount - hp)` for overspill redistribution. A
    /// cryptid at zero HP is dead.
    pub fn receive_damage(&mut self, amount: u32) -> Result<u32, GameError> {
        let state = self.cryptid_mut()?;
        let excess = amount.saturating_sub(state.current_hp);
        state.current_hp = state.current_hp.saturating_sub(amount);
        if state.current_hp == 0 {
            state.dead = true;
        }
        Ok(excess)
    }

    /// Damage this cryptid deals to a recipient of the given damage type.
    ///
    /// Strength scores ×1.5, weakness ×0.5. A recipient type listed in
    /// **both** sets is a chart inconsistency and resolves neutral; the
    /// tie-break existing chart data relies on. A type with no chart
    /// entry is neutral too. The result truncates toward zero.
    pub fn attack_on_type(
        &self,
        chart: &TypeChart,
        recipient_type: DamageType,
    ) -> Result<u32, GameError> {
        let state = self.cryptid()?;

        let (strong, weak) = match chart.relation(state.damage_type) {
            Some(relation) => (
                relation.strengths.contains(&recipient_type),
                relation.weaknesses.contains(&recipient_type),
            ),
            None => (false, false),
        };

        let damage = match (strong, weak) {
            (true, false) => state.attack as f32 * STRENGTH_DMG_MULTIPLIER,
            (false, true) => state.attack as f32 * WEAKNESS_DMG_MULTIPLIER,
            // Both or neither: neutral.
            _ => state.attack as f32,
        };

        Ok(damage as u32)
    }

    /// Stun the cryptid for `turns` turns.
    pub fn be_stunned(&mut self, turns: u32) -> Result<(), GameError> {
        let state = self.cryptid_mut()?;
        state.stunned = true;
        state.stunned_for = turns;
        Ok(())
    }

    // === Turn lifecycle ===

    /// Mark the card as played on `turn`. The location change is the
    /// caller's move operation, not this method.
    pub fn play_card(&mut self, turn: u32) -> &mut Self {
        self.active = true;
        self.turn_played = Some(turn);
        self
    }

    /// End-of-turn status update. No-op unless the card is active.
    ///
    /// Cryptid: tick the stun timer, then recompute `can_attack` (alive,
    /// not placed this turn, not stunned) and re-assert summonability.
    /// Magic: tick `active_for`; when expired the card deactivates.
    ///
    /// Runs before the owning player's turn counter increments, so
    /// `current_turn` is the turn being ended.
    pub fn update_on_turn_end(&mut self, current_turn: u32) {
        if !self.active {
            return;
        }

        match &mut self.kind {
            CardKind::Cryptid(state) => {
                if state.stunned_for > 0 {
                    state.stunned_for -= 1;
                    state.stunned = true;
                } else {
                    state.stunned = false;
                    state.stunned_for = 0;
                }

                state.can_attack = !state.dead
                    && self.turn_played != Some(current_turn)
                    && !state.stunned;

                // Eligibility is unconditional once placed.
                state.summonable = true;
            }
            CardKind::Magic(state) => {
                match state.active_for {
                    Some(remaining) if remaining > 0 => state.active_for = Some(remaining - 1),
                    _ => {
                        state.active_for = None;
                        self.active = false;
                    }
                }
                state.playable = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CryptidData, MagicData};

    fn test_catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.register(
            CardId::new(0),
            CatalogEntry::Cryptid(CryptidData {
                name: "Mothman".to_string(),
                class: CardClass::Cosmic,
                summon_level: 2,
                hp: 100,
                attack: 60,
                summon_type: SummonType::Normal,
                damage_type: DamageType::Blood,
                modifier: Modifier::Normal,
            }),
        );
        catalog.register(
            CardId::new(1),
            CatalogEntry::Magic(MagicData {
                name: "Sudden Mist".to_string(),
                class: CardClass::Pleasant,
                magic_level: 1,
                influence: Influence::default(),
            }),
        );
        catalog
    }

    fn cryptid() -> Card {
        Card::new(&test_catalog(), CardId::new(0)).unwrap()
    }

    fn magic() -> Card {
        Card::new(&test_catalog(), CardId::new(1)).unwrap()
    }

    #[test]
    fn test_construction_from_catalog() {
        let card = cryptid();

        assert_eq!(card.card_id(), CardId::new(0));
        assert_eq!(card.name(), "Mothman");
        assert_eq!(card.card_type(), CardType::Cryptid);
        assert_eq!(card.location(), Location::Deck);
        assert!(!card.is_active());
        assert_eq!(card.turn_played(), None);

        let state = card.cryptid().unwrap();
        assert_eq!(state.current_hp, 100);
        assert!(!state.dead);
        assert!(!state.stunned);
        assert!(!state.summonable);
    }

    #[test]
    fn test_construction_unknown_id() {
        let result = Card::new(&test_catalog(), CardId::new(99));
        assert_eq!(result.unwrap_err(), CatalogError::UnknownCard(CardId::new(99)));
    }

    #[test]
    fn test_receive_damage_partial() {
        let mut card = cryptid();

        let excess = card.receive_damage(30).unwrap();
        assert_eq!(excess, 0);
        assert_eq!(card.cryptid().unwrap().current_hp, 70);
        assert!(!card.is_dead().unwrap());
    }

    #[test]
    fn test_receive_damage_exact_kill() {
        let mut card = cryptid();

        let excess = card.receive_damage(100).unwrap();
        assert_eq!(excess, 0);
        assert_eq!(card.cryptid().unwrap().current_hp, 0);
        assert!(card.is_dead().unwrap());
    }

    #[test]
    fn test_receive_damage_overkill() {
        let mut card = cryptid();

        let excess = card.receive_damage(130).unwrap();
        assert_eq!(excess, 30);
        assert_eq!(card.cryptid().unwrap().current_hp, 0);
        assert!(card.is_dead().unwrap());
    }

    #[test]
    fn test_receive_damage_on_magic_is_wrong_kind() {
        let mut card = magic();

        let result = card.receive_damage(10);
        assert_eq!(
            result.unwrap_err(),
            GameError::WrongCardKind {
                expected: CardType::Cryptid,
                actual: CardType::Magic,
            }
        );
    }

    #[test]
    fn test_attack_on_type_strength() {
        let card = cryptid(); // blood attacker, attack 60
        let chart = TypeChart::default();

        // Blood is strong against sweat: 60 * 1.5 = 90.
        assert_eq!(card.attack_on_type(&chart, DamageType::Sweat).unwrap(), 90);
    }

    #[test]
    fn test_attack_on_type_weakness() {
        let card = cryptid();
        let chart = TypeChart::default();

        // Blood is weak against cosmic: 60 * 0.5 = 30.
        assert_eq!(card.attack_on_type(&chart, DamageType::Cosmic).unwrap(), 30);
    }

    #[test]
    fn test_attack_on_type_neutral() {
        let card = cryptid();
        let chart = TypeChart::default();

        assert_eq!(card.attack_on_type(&chart, DamageType::Tears).unwrap(), 60);
    }

    #[test]
    fn test_attack_on_type_tie_break_is_neutral() {
        let card = cryptid();

        // Inconsistent chart: sweat in both sets for blood.
        let mut chart = TypeChart::empty();
        chart.set_relation(
            DamageType::Blood,
            [DamageType::Sweat],
            [DamageType::Sweat],
        );

        assert_eq!(card.attack_on_type(&chart, DamageType::Sweat).unwrap(), 60);
    }

    #[test]
    fn test_attack_on_type_missing_entry_is_neutral() {
        let card = cryptid();
        let chart = TypeChart::empty();

        assert_eq!(card.attack_on_type(&chart, DamageType::Sweat).unwrap(), 60);
    }

    #[test]
    fn test_play_card() {
        let mut card = cryptid();
        card.play_card(3);

        assert!(card.is_active());
        assert_eq!(card.turn_played(), Some(3));
        // play_card does not move the card.
        assert_eq!(card.location(), Location::Deck);
    }

    #[test]
    fn test_update_on_turn_end_inactive_noop() {
        let mut card = cryptid();
        card.be_stunned(2).unwrap();

        card.update_on_turn_end(1);

        // Inactive card: nothing ticks.
        let state = card.cryptid().unwrap();
        assert_eq!(state.stunned_for, 2);
        assert!(state.stunned);
        assert!(!state.can_attack);
    }

    #[test]
    fn test_update_on_turn_end_stun_ticks_down() {
        let mut card = cryptid();
        card.play_card(1);
        card.be_stunned(2).unwrap();

        card.update_on_turn_end(2);
        let state = card.cryptid().unwrap();
        assert!(state.stunned);
        assert_eq!(state.stunned_for, 1);
        assert!(!state.can_attack);

        card.update_on_turn_end(3);
        let state = card.cryptid().unwrap();
        assert!(state.stunned);
        assert_eq!(state.stunned_for, 0);

        card.update_on_turn_end(4);
        let state = card.cryptid().unwrap();
        assert!(!state.stunned);
        assert!(state.can_attack);
    }

    #[test]
    fn test_update_on_turn_end_summoned_this_turn_cannot_attack() {
        let mut card = cryptid();
        card.play_card(5);

        card.update_on_turn_end(5);
        assert!(!card.can_attack().unwrap());

        card.update_on_turn_end(6);
        assert!(card.can_attack().unwrap());
    }

    #[test]
    fn test_update_on_turn_end_dead_cannot_attack() {
        let mut card = cryptid();
        card.play_card(1);
        card.receive_damage(100).unwrap();

        card.update_on_turn_end(2);
        assert!(!card.can_attack().unwrap());
    }

    #[test]
    fn test_update_on_turn_end_magic_expiry() {
        let mut card = magic();
        card.play_card(1);
        {
            // Arm the effect for two turns.
            let CardKind::Magic(state) = &mut card.kind else {
                unreachable!()
            };
            state.active_for = Some(2);
        }

        card.update_on_turn_end(1);
        assert_eq!(card.magic().unwrap().active_for, Some(1));
        assert!(card.is_active());

        card.update_on_turn_end(2);
        assert_eq!(card.magic().unwrap().active_for, Some(0));
        assert!(card.is_active());

        card.update_on_turn_end(3);
        assert_eq!(card.magic().unwrap().active_for, None);
        assert!(!card.is_active());
        assert!(card.magic().unwrap().playable);
    }

    #[test]
    fn test_kind_checked_accessors() {
        let card = magic();

        assert!(card.is_dead().is_err());
        assert!(card.is_stunned().is_err());
        assert!(card.is_summonable().is_err());
        assert!(card.is_playable().is_ok());

        let card = cryptid();
        assert!(card.is_playable().is_err());
        assert!(card.magic().is_err());
    }

    #[test]
    fn test_set_location() {
        let mut card = cryptid();
        card.set_location(Location::Hand);
        assert_eq!(card.location(), Location::Hand);
    }

    #[test]
    fn test_card_serialization() {
        let card = cryptid();
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
