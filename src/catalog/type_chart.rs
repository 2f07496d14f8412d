//! Damage-type effectiveness chart.
//!
//! Maps each [`DamageType`] to the set of types it is strong against and
//! the set it is weak against. Consumed only by
//! [`Card::attack_on_type`](crate::Card::attack_on_type); loaded once and
//! shared read-only for the whole process.
//!
//! Chart data is allowed to be inconsistent (a type listed in both sets)
//! and even incomplete (a mintable type with no entry at all); combat
//! resolution treats both cases as neutral.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::entry::DamageType;
use crate::error::CatalogError;

/// Strengths and weaknesses of one damage type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelation {
    pub strengths: FxHashSet<DamageType>,
    pub weaknesses: FxHashSet<DamageType>,
}

/// The type-effectiveness chart.
///
/// The default chart is the minted six-type cycle:
///
/// ```
/// use cryptids_engine::{DamageType, TypeChart};
///
/// let chart = TypeChart::default();
/// let blood = chart.relation(DamageType::Blood).unwrap();
/// assert!(blood.strengths.contains(&DamageType::Sweat));
/// assert!(blood.weaknesses.contains(&DamageType::Cosmic));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeChart {
    entries: FxHashMap<DamageType, TypeRelation>,
}

impl TypeChart {
    /// Create an empty chart (every matchup neutral).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Set the relation for a damage type.
    pub fn set_relation(
        &mut self,
        damage_type: DamageType,
        strengths: impl IntoIterator<Item = DamageType>,
        weaknesses: impl IntoIterator<Item = DamageType>,
    ) {
        self.entries.insert(
            damage_type,
            TypeRelation {
                strengths: strengths.into_iter().collect(),
                weaknesses: weaknesses.into_iter().collect(),
            },
        );
    }

    /// Get the relation for a damage type.
    ///
    /// `None` means the chart has no entry; combat treats that as
    /// neutral damage.
    #[must_use]
    pub fn relation(&self, damage_type: DamageType) -> Option<&TypeRelation> {
        self.entries.get(&damage_type)
    }

    /// Build a chart from JSON:
    /// `{ "blood": { "strengths": ["sweat"], "weaknesses": ["cosmic"] }, ... }`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: FxHashMap<DamageType, TypeRelation> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Load a chart from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_json_str(&json)
    }
}

impl Default for TypeChart {
    /// The minted chart: a cycle where each type beats the next and
    /// loses to the previous.
    fn default() -> Self {
        use DamageType::*;

        let mut chart = Self::empty();
        chart.set_relation(Blood, [Sweat], [Cosmic]);
        chart.set_relation(Sweat, [Tears], [Blood]);
        chart.set_relation(Tears, [Physical], [Sweat]);
        chart.set_relation(Physical, [Technological], [Tears]);
        chart.set_relation(Technological, [Cosmic], [Physical]);
        chart.set_relation(Cosmic, [Blood], [Technological]);
        chart
    }
}
