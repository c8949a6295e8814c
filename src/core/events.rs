//! Notifications emitted by the engine for the presentation layer.

use super::offline::OfflineReport;
use crate::achievements::AchievementId;
use crate::catalog::UpgradeKind;
use crate::effects::{EffectKind, FestivalId, GoldenReward};

/// Something the player should hear about. Drained with
/// [`Engine::take_events`](super::Engine::take_events).
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AchievementUnlocked(AchievementId),
    Purchased {
        id: &'static str,
        kind: UpgradeKind,
        price: f64,
        owned: u32,
    },
    PrestigeGained {
        level: u32,
    },
    EffectStarted {
        label: String,
        kind: EffectKind,
        seconds: u32,
    },
    EffectExpired {
        label: String,
        kind: EffectKind,
    },
    /// The combo decayed after `reached` consecutive clicks.
    ComboReset {
        reached: u32,
    },
    GoldenBonusCaught {
        reward: GoldenReward,
        /// Amount credited immediately; 0 for timed rewards.
        instant: f64,
    },
    FestivalStarted(FestivalId),
    OfflineCredit(OfflineReport),
    SaveImported,
    SaveReset,
}
