//! The complete restartable state of a session.

use crate::achievements::AchievementId;
use crate::catalog::{Catalog, OwnedEntry, CLICK_UPGRADES, PRODUCERS};
use crate::core::stats::Stats;
use crate::error::SaveError;
use serde::{Deserialize, Serialize};

/// Who owns the save. Only the presentation layer cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(alias = "joueur")]
    Player,
    Admin,
}

/// Everything needed to resume a session. Effects and the combo are not
/// part of it.
///
/// Every field is required on load and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SaveSnapshot {
    pub current_amount: f64,
    pub lifetime_amount: f64,
    pub producers: Vec<OwnedEntry>,
    pub click_upgrades: Vec<OwnedEntry>,
    pub prestige_level: u32,
    pub unlocked_achievement_ids: Vec<AchievementId>,
    pub stats: Stats,
    /// Epoch milliseconds.
    pub last_save_timestamp: i64,
    pub role: Role,
}

impl SaveSnapshot {
    /// Snapshot of a brand-new session.
    pub fn fresh(now_ms: i64) -> Self {
        Self {
            current_amount: 0.0,
            lifetime_amount: 0.0,
            producers: Catalog::producers().entries(),
            click_upgrades: Catalog::click_upgrades().entries(),
            prestige_level: 0,
            unlocked_achievement_ids: Vec::new(),
            stats: Stats::default(),
            last_save_timestamp: now_ms,
            role: Role::Player,
        }
    }

    /// Structural validation beyond what the decoder already enforces.
    pub fn validate(&self) -> Result<(), SaveError> {
        check_amount("currentAmount", self.current_amount)?;
        check_amount("lifetimeAmount", self.lifetime_amount)?;
        check_amount(
            "stats.totalCookiesEverEarned",
            self.stats.total_cookies_ever_earned,
        )?;
        if self.last_save_timestamp < 0 {
            return Err(SaveError::malformed("lastSaveTimestamp is negative"));
        }
        self.producer_catalog()?;
        self.click_upgrade_catalog()?;
        Ok(())
    }

    pub fn producer_catalog(&self) -> Result<Catalog, SaveError> {
        Catalog::from_entries(PRODUCERS, &self.producers)
            .map_err(|e| SaveError::malformed(format!("producers: {e}")))
    }

    pub fn click_upgrade_catalog(&self) -> Result<Catalog, SaveError> {
        Catalog::from_entries(CLICK_UPGRADES, &self.click_upgrades)
            .map_err(|e| SaveError::malformed(format!("clickUpgrades: {e}")))
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), SaveError> {
    if !value.is_finite() {
        return Err(SaveError::malformed(format!("{field} is not finite")));
    }
    if value < 0.0 {
        return Err(SaveError::malformed(format!("{field} is negative")));
    }
    Ok(())
}
