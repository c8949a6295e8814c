//! The set of live effects.

use super::types::{Effect, EffectKind};

/// Live effects in insertion order. Effects of the same kind stack
/// multiplicatively, so aggregate values do not depend on order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectStack {
    effects: Vec<Effect>,
}

impl EffectStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect. No deduplication. Returns false for effects that
    /// would be dead on arrival (zero duration or a non-positive or
    /// non-finite magnitude).
    pub fn add(&mut self, effect: Effect) -> bool {
        if effect.is_expired() || !effect.magnitude.is_finite() || effect.magnitude <= 0.0 {
            return false;
        }
        self.effects.push(effect);
        true
    }

    /// One second passes. Returns the effects that expired.
    pub fn tick(&mut self) -> Vec<Effect> {
        for effect in &mut self.effects {
            effect.remaining_seconds = effect.remaining_seconds.saturating_sub(1);
        }
        let (expired, live): (Vec<_>, Vec<_>) =
            self.effects.drain(..).partition(Effect::is_expired);
        self.effects = live;
        expired
    }

    /// Product of all live magnitudes of `kind`; 1.0 when there are none.
    pub fn multiplier(&self, kind: EffectKind) -> f64 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.magnitude)
            .product()
    }

    pub fn production_multiplier(&self) -> f64 {
        self.multiplier(EffectKind::ProductionMultiplier)
    }

    pub fn click_multiplier(&self) -> f64 {
        self.multiplier(EffectKind::ClickMultiplier)
    }

    pub fn cost_reduction_factor(&self) -> f64 {
        self.multiplier(EffectKind::CostReduction)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.effects.iter().any(|e| e.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.effects.iter()
    }

    pub fn as_slice(&self) -> &[Effect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
