//! Achievement system.
//!
//! A fixed list of named predicates over [`StatsView`](crate::core::StatsView),
//! evaluated by the engine after every state-changing entry point. Unlocks
//! are permanent and reported once.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use types::{AchievementCategory, AchievementDef, AchievementId, AchievementTracker};
