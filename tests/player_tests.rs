//! Player bookkeeping integration tests.
//!
//! Exercises card-location exclusivity and count conservation across
//! operation sequences, ordered precondition checks, and the end-of-turn
//! status cascade.

use cryptids_engine::{
    CardCatalog, CardClass, CardId, CardType, CatalogEntry, CryptidData, DamageType, GameConfig,
    GameError, GameRng, Influence, Location, MagicData, Modifier, Origin, Player, SummonType,
};

fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for id in 0..3 {
        catalog.register(
            CardId::new(id),
            CatalogEntry::Cryptid(CryptidData {
                name: format!("Cryptid {}", id),
                class: CardClass::Interdimensional,
                summon_level: 1,
                hp: 60,
                attack: 25,
                summon_type: SummonType::Normal,
                damage_type: DamageType::Technological,
                modifier: Modifier::Normal,
            }),
        );
    }
    catalog.register(
        CardId::new(7),
        CatalogEntry::Magic(MagicData {
            name: "Static Veil".to_string(),
            class: CardClass::Pleasant,
            magic_level: 0,
            influence: Influence::default(),
        }),
    );
    catalog
}

fn config() -> GameConfig {
    GameConfig {
        field_size: 3,
        hand_size: 4,
        deck_size: 8,
        starting_hp: 500,
        dead_value: 0,
    }
}

fn new_player(seed: u64) -> Player {
    let selection: Vec<CardId> = (0..8)
        .map(|i| if i == 0 { CardId::new(7) } else { CardId::new(i % 3) })
        .collect();
    let mut rng = GameRng::new(seed);
    Player::new("tester", &catalog(), &selection, &config(), &mut rng).unwrap()
}

/// Every card appears in exactly one collection with the matching
/// location tag.
fn assert_locations_consistent(player: &Player) {
    for card in player.hand() {
        assert_eq!(card.location(), Location::Hand);
    }
    for card in player.discard() {
        assert_eq!(card.location(), Location::Discard);
    }
    for card in player.magic_in_play() {
        assert_eq!(card.location(), Location::Magic);
    }
    for slot in player.field().iter().flatten() {
        assert_eq!(slot.location(), Location::Field);
    }
}

// =============================================================================
// Location Exclusivity and Conservation
// =============================================================================

/// A long mixed operation sequence never loses or duplicates a card,
/// and every card's location tag matches the collection holding it.
#[test]
fn test_count_conservation_across_operations() {
    let mut player = new_player(42);
    assert_eq!(player.total_cards(), 8);

    // Summon every cryptid currently in hand, field permitting.
    let mut slot = 0;
    while slot < 3 {
        let Some(index) = player
            .hand()
            .iter()
            .position(|c| c.card_type() == CardType::Cryptid)
        else {
            break;
        };
        player.summon_card(Origin::Hand, index, slot).unwrap();
        slot += 1;
    }

    if let Some(index) = player
        .hand()
        .iter()
        .position(|c| c.card_type() == CardType::Magic)
    {
        player.play_magic_card(Origin::Hand, index).unwrap();
    }

    if !player.hand().is_empty() {
        player.discard_card(Origin::Hand, 0).unwrap();
    }
    player.end_turn();
    if player.deck_count() > 0 {
        player.draw_card_to_discard().unwrap();
    }

    assert_eq!(player.total_cards(), 8);
    assert_locations_consistent(&player);
}

/// The deck drains monotonically into the other collections; nothing
/// flows back.
#[test]
fn test_deck_only_drains() {
    let mut player = new_player(7);
    let mut previous = player.deck_count();

    for _ in 0..6 {
        if !player.hand().is_empty() {
            player.discard_card(Origin::Hand, 0).unwrap();
        }
        player.end_turn();

        assert!(player.deck_count() <= previous);
        previous = player.deck_count();
        assert_eq!(player.total_cards(), 8);
    }
}

// =============================================================================
// Ordered Checks
// =============================================================================

/// Slot validity is reported before index validity, occupancy before
/// kind, kind before playability.
#[test]
fn test_summon_check_order() {
    let mut player = new_player(3);

    // Both slot and index invalid: slot wins.
    assert_eq!(
        player.summon_card(Origin::Hand, 99, 99).unwrap_err(),
        GameError::InvalidSlot { slot: 99, field_size: 3 }
    );

    // Valid slot, invalid index.
    assert_eq!(
        player.summon_card(Origin::Hand, 99, 0).unwrap_err(),
        GameError::IndexOutOfRange { index: 99, len: 4 }
    );

    // Occupied slot is reported even for a magic card at the index.
    let cryptid_index = player
        .hand()
        .iter()
        .position(|c| c.card_type() == CardType::Cryptid)
        .unwrap();
    player.summon_card(Origin::Hand, cryptid_index, 1).unwrap();
    if let Some(magic_index) = player
        .hand()
        .iter()
        .position(|c| c.card_type() == CardType::Magic)
    {
        assert_eq!(
            player.summon_card(Origin::Hand, magic_index, 1).unwrap_err(),
            GameError::SlotOccupied { slot: 1 }
        );
    }
}

/// A failing summon leaves every collection untouched.
#[test]
fn test_failed_summon_is_idempotent() {
    let mut player = new_player(5);
    let first = player
        .hand()
        .iter()
        .position(|c| c.card_type() == CardType::Cryptid)
        .unwrap();
    player.summon_card(Origin::Hand, first, 0).unwrap();

    let hand_before: Vec<CardId> = player.hand().iter().map(|c| c.card_id()).collect();
    let occupant = player.field_card(0).unwrap().card_id();

    let second = player
        .hand()
        .iter()
        .position(|c| c.card_type() == CardType::Cryptid)
        .unwrap();
    assert_eq!(
        player.summon_card(Origin::Hand, second, 0).unwrap_err(),
        GameError::SlotOccupied { slot: 0 }
    );

    let hand_after: Vec<CardId> = player.hand().iter().map(|c| c.card_id()).collect();
    assert_eq!(hand_after, hand_before);
    assert_eq!(player.field_card(0).unwrap().card_id(), occupant);
    assert_eq!(player.total_cards(), 8);
}

// =============================================================================
// Turn-Status Cascade
// =============================================================================

/// A field cryptid whose stun counter already reached zero is unstunned
/// after end_turn; one placed this turn cannot attack regardless.
#[test]
fn test_turn_status_cascade() {
    let mut player = new_player(11);
    let index = player
        .hand()
        .iter()
        .position(|c| c.card_type() == CardType::Cryptid)
        .unwrap();
    player.summon_card(Origin::Hand, index, 0).unwrap();
    player.field_card_mut(0).unwrap().be_stunned(1).unwrap();

    // Placed this turn: cannot attack even as the stun ticks.
    player.end_turn();
    let card = player.field_card(0).unwrap();
    assert!(!card.can_attack().unwrap());
    assert_eq!(card.cryptid().unwrap().stunned_for, 0);
    assert!(card.is_stunned().unwrap());

    // Counter at zero before this call: stun clears, attack unlocks.
    player.end_turn();
    let card = player.field_card(0).unwrap();
    assert!(!card.is_stunned().unwrap());
    assert!(card.can_attack().unwrap());
}

/// Magic with level 0 expires after a single full turn.
#[test]
fn test_level_zero_magic_expires_quickly() {
    let mut player = new_player(12);
    let index = player
        .hand()
        .iter()
        .position(|c| c.card_type() == CardType::Magic)
        .unwrap();
    player.play_magic_card(Origin::Hand, index).unwrap();
    assert_eq!(player.magic_in_play()[0].magic().unwrap().active_for, Some(1));

    player.end_turn();
    assert_eq!(player.magic_in_play()[0].magic().unwrap().active_for, Some(0));
    assert!(player.magic_in_play()[0].is_active());

    player.end_turn();
    assert!(!player.magic_in_play()[0].is_active());
}

// =============================================================================
// Construction
// =============================================================================

/// Seeded construction is fully deterministic.
#[test]
fn test_seeded_construction_deterministic() {
    let a = new_player(21);
    let b = new_player(21);

    let ids = |p: &Player| -> Vec<CardId> { p.hand().iter().map(|c| c.card_id()).collect() };
    assert_eq!(ids(&a), ids(&b));
    assert_eq!(a.deck_count(), b.deck_count());
}

/// A deck smaller than the hand target yields a legal partial hand.
#[test]
fn test_partial_hand_on_short_deck() {
    let selection = [CardId::new(0), CardId::new(1)];
    let mut rng = GameRng::new(2);
    let player = Player::new("short", &catalog(), &selection, &config(), &mut rng).unwrap();

    assert_eq!(player.hand().len(), 2);
    assert_eq!(player.deck_count(), 0);
    assert_eq!(player.turn(), 1);
}

/// Construction fails cleanly on an unknown card id.
#[test]
fn test_unknown_card_id_fails_construction() {
    let selection = [CardId::new(0), CardId::new(42)];
    let mut rng = GameRng::new(2);
    let result = Player::new("bad", &catalog(), &selection, &config(), &mut rng);
    assert!(result.is_err());
}
