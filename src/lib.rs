//! In-match analytics for League of Legends data: armor penetration and
//! mitigation formulas, item gold-value annotation, participant impact
//! ranking and timeline reshaping. Pure computation over already-fetched
//! JSON structures; fetching and rendering live elsewhere.

pub mod analysis;
pub mod error;
pub mod loader;
pub mod models;

pub use analysis::damage::{
    armor_negated, damage_increase, damage_multiplier, percent_damage_increase,
    DamageIncreaseParams,
};
pub use analysis::effective_health::{effective_health, gold_per_effective_health};
pub use analysis::impact::{find_mvp, kda, kill_participation, rank_participants};
pub use analysis::item_value::{annotate_item, stat_gold_values, AnnotatedItem, StatValue};
pub use analysis::timeline::reshape_timeline;
