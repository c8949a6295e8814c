//! Golden bonus rewards.

use super::types::{Effect, EffectKind};
use serde::{Deserialize, Serialize};

const GOLDEN_COLOR: &str = "#fbbf24";

/// One of the four rewards a caught golden bonus can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldenReward {
    /// Instant `max(rate × 60, 100)`.
    Jackpot,
    /// Instant `max(rate × 15, 25)`.
    MiniBonus,
    /// Production ×7 for 15 seconds.
    Frenzy,
    /// Click ×10 for 20 seconds.
    MagicFingers,
}

/// What catching a reward does to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum GoldenOutcome {
    Instant(f64),
    Effect(Effect),
}

impl GoldenReward {
    pub const ALL: [GoldenReward; 4] = [
        GoldenReward::Jackpot,
        GoldenReward::MiniBonus,
        GoldenReward::Frenzy,
        GoldenReward::MagicFingers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoldenReward::Jackpot => "Jackpot!",
            GoldenReward::MiniBonus => "Mini bonus",
            GoldenReward::Frenzy => "Frenzy!",
            GoldenReward::MagicFingers => "Magic fingers!",
        }
    }

    /// Resolve against the current auto-production rate.
    pub fn outcome(&self, auto_rate: f64) -> GoldenOutcome {
        match self {
            GoldenReward::Jackpot => GoldenOutcome::Instant((auto_rate * 60.0).max(100.0)),
            GoldenReward::MiniBonus => GoldenOutcome::Instant((auto_rate * 15.0).max(25.0)),
            GoldenReward::Frenzy => GoldenOutcome::Effect(Effect::new(
                EffectKind::ProductionMultiplier,
                7.0,
                15,
                self.label(),
                GOLDEN_COLOR,
            )),
            GoldenReward::MagicFingers => GoldenOutcome::Effect(Effect::new(
                EffectKind::ClickMultiplier,
                10.0,
                20,
                self.label(),
                GOLDEN_COLOR,
            )),
        }
    }
}
