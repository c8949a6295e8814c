//! Achievement types and the unlock tracker.

use crate::core::stats::StatsView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Achievement categories for grouping in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Clicks,
    Production,
    Upgrades,
    Special,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::Clicks,
        AchievementCategory::Production,
        AchievementCategory::Upgrades,
        AchievementCategory::Special,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Clicks => "Clicks",
            AchievementCategory::Production => "Production",
            AchievementCategory::Upgrades => "Upgrades",
            AchievementCategory::Special => "Special",
        }
    }
}

/// Unique identifier for each achievement. Serialized ids are stable save
/// keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Clicks
    FirstSip,    // 1
    Regular,     // 100
    Barman,      // 1,000
    ClickLegend, // 10,000

    // Lifetime earnings
    FirstPint,    // 100
    Keg,          // 1,000
    BreweryOwner, // 10,000
    BeerBaron,    // 100,000
    BeerEmperor,  // 1,000,000

    // Owned upgrades
    FirstBuy,  // 1
    Collector, // 10
    Tycoon,    // 50
    Empire,    // 100

    // Special
    #[serde(rename = "combo_5")]
    Combo5,
    #[serde(rename = "combo_10")]
    Combo10,
    #[serde(rename = "combo_20")]
    Combo20,
    GoldenCatch,
    GoldenHunter,
    FestivalFan,
    #[serde(rename = "prestige_1")]
    Prestige1,
}

/// Predicate over a stats snapshot. Must be pure.
pub type Condition = fn(&StatsView<'_>) -> bool;

/// Static definition of an achievement.
#[derive(Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub icon: &'static str,
    pub condition: Condition,
}

impl fmt::Debug for AchievementDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AchievementDef")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Unlocked achievements for the current save. Unlocks are permanent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementTracker {
    unlocked: BTreeSet<AchievementId>,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_unlocked(ids: impl IntoIterator<Item = AchievementId>) -> Self {
        Self {
            unlocked: ids.into_iter().collect(),
        }
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        self.unlocked.insert(id)
    }

    /// Check every still-locked predicate against `view` and unlock those
    /// that hold. Returns the new unlocks in definition order.
    pub fn evaluate(&mut self, view: &StatsView<'_>) -> Vec<AchievementId> {
        use super::data::ALL_ACHIEVEMENTS;

        let newly: Vec<AchievementId> = ALL_ACHIEVEMENTS
            .iter()
            .filter(|def| !self.is_unlocked(def.id) && (def.condition)(view))
            .map(|def| def.id)
            .collect();
        self.unlocked.extend(newly.iter().copied());
        newly
    }

    pub fn unlocked(&self) -> &BTreeSet<AchievementId> {
        &self.unlocked
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn total_count(&self) -> usize {
        super::data::ALL_ACHIEVEMENTS.len()
    }

    /// Unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// Count of unlocked/total in a category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        use super::data::ALL_ACHIEVEMENTS;

        let in_category: Vec<_> = ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| a.category == category)
            .collect();
        let unlocked = in_category
            .iter()
            .filter(|a| self.is_unlocked(a.id))
            .count();
        (unlocked, in_category.len())
    }
}
