//! Effect types.

use serde::Serialize;

/// Which rate an effect modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectKind {
    ProductionMultiplier,
    ClickMultiplier,
    /// Multiplies purchase prices; magnitudes below 1 are discounts.
    CostReduction,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [
        EffectKind::ProductionMultiplier,
        EffectKind::ClickMultiplier,
        EffectKind::CostReduction,
    ];
}

/// A time-limited multiplicative modifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude: f64,
    pub remaining_seconds: u32,
    pub label: String,
    /// CSS-style colour for the presentation layer.
    pub color: String,
}

impl Effect {
    pub fn new(
        kind: EffectKind,
        magnitude: f64,
        seconds: u32,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            magnitude,
            remaining_seconds: seconds,
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }
}
