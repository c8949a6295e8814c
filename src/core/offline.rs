//! Offline catch-up.
//!
//! Credits a discounted share of production for wall-clock time that passed
//! with no session running. Runs once, at session start.

use super::constants::{OFFLINE_EFFICIENCY, OFFLINE_MIN_SECONDS};
use serde::Serialize;

/// Report of offline catch-up results
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct OfflineReport {
    pub elapsed_seconds: f64,
    pub earned: f64,
    /// Auto-production rate the estimate was based on
    pub rate_per_second: f64,
    pub efficiency_percent: f64,
}

impl OfflineReport {
    pub fn credited(&self) -> bool {
        self.earned > 0.0
    }
}

/// Estimate what accrued between `last_save_ms` and `now_ms`.
///
/// A timestamp in the future clamps to zero elapsed time. Gaps of 10
/// seconds or less, and a zero rate, earn nothing.
pub fn estimate(auto_rate: f64, last_save_ms: i64, now_ms: i64) -> OfflineReport {
    let elapsed_ms = now_ms.saturating_sub(last_save_ms).max(0);
    let elapsed_seconds = elapsed_ms as f64 / 1000.0;

    let earned = if auto_rate > 0.0 && elapsed_seconds > OFFLINE_MIN_SECONDS {
        (auto_rate * elapsed_seconds * OFFLINE_EFFICIENCY).floor()
    } else {
        0.0
    };

    OfflineReport {
        elapsed_seconds,
        earned,
        rate_per_second: auto_rate,
        efficiency_percent: OFFLINE_EFFICIENCY * 100.0,
    }
}
