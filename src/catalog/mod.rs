//! Static card data: the catalog and the type chart.
//!
//! Both are immutable inputs loaded once at process start and shared by
//! reference; nothing in the engine mutates them after load.

pub mod entry;
pub mod registry;
pub mod type_chart;

pub use entry::{
    CardClass, CardId, CardType, CatalogEntry, CryptidData, DamageType, Influence, MagicData,
    Modifier, SummonType,
};
pub use registry::CardCatalog;
pub use type_chart::{TypeChart, TypeRelation};
