//! Catalog entries - static card data.
//!
//! A [`CatalogEntry`] holds the immutable, catalog-derived attributes of
//! one card id: the stats a cryptid is minted with, or the influence a
//! magic card carries. Runtime state (current HP, stun timers, location)
//! lives separately in [`Card`](crate::Card).
//!
//! The JSON format matches the minted card data: an object keyed by
//! stringified integer id, each value tagged by `card_type`.

use serde::{Deserialize, Serialize};

/// Unique identifier of a catalog entry.
///
/// Identifies the minted card, not a specific instance in a match; two
/// players can each hold a `Card` built from the same `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The two card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Cryptid,
    Magic,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Cryptid => write!(f, "cryptid"),
            CardType::Magic => write!(f, "magic"),
        }
    }
}

/// Damage type of a cryptid's attacks, and the axis of the type chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Blood,
    Sweat,
    Tears,
    Physical,
    Technological,
    Cosmic,
    Normal,
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            DamageType::Blood => "blood",
            DamageType::Sweat => "sweat",
            DamageType::Tears => "tears",
            DamageType::Physical => "physical",
            DamageType::Technological => "technological",
            DamageType::Cosmic => "cosmic",
            DamageType::Normal => "normal",
        };
        write!(f, "{}", tag)
    }
}

/// How a cryptid is brought onto the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummonType {
    Normal,
    Sacrifice,
    OnDamage,
    Mulling,
}

/// Attack modifier a cryptid is minted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    CriticalStrike,
    Poison,
    LifeSteal,
    Stun,
    Mull,
    Normal,
}

/// Card class shared by cryptid and magic cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardClass {
    Gore,
    Hairy,
    Cosmic,
    Undead,
    Interdimensional,
    Pleasant,
}

/// The influence a magic card exerts while in play.
///
/// Each field may be absent. Influence resolution is modeled but never
/// applied to combat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Influence {
    pub summon_type: Option<SummonType>,
    pub damage_type: Option<DamageType>,
    pub modifier: Option<Modifier>,
}

/// Static attributes of a minted cryptid card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptidData {
    pub name: String,
    pub class: CardClass,
    pub summon_level: u8,
    pub hp: u32,
    pub attack: u32,
    pub summon_type: SummonType,
    pub damage_type: DamageType,
    pub modifier: Modifier,
}

/// Static attributes of a minted magic card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicData {
    pub name: String,
    pub class: CardClass,
    pub magic_level: u8,
    pub influence: Influence,
}

/// One catalog entry, tagged by `card_type`.
///
/// An unrecognised tag fails deserialization, which the registry
/// surfaces as a [`CatalogError`](crate::CatalogError); malformed data
/// is never silently defaulted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "card_type", rename_all = "lowercase")]
pub enum CatalogEntry {
    Cryptid(CryptidData),
    Magic(MagicData),
}

impl CatalogEntry {
    /// The entry's card kind.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self {
            CatalogEntry::Cryptid(_) => CardType::Cryptid,
            CatalogEntry::Magic(_) => CardType::Magic,
        }
    }

    /// The entry's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Cryptid(data) => &data.name,
            CatalogEntry::Magic(data) => &data.name,
        }
    }
}
