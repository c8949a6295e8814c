//! Timed festivals.
//!
//! A festival can touch several rates at once. Each non-identity component
//! becomes its own [`Effect`] carrying the festival's name, so the stack
//! only ever deals with single-kind effects.

use super::types::{Effect, EffectKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalId {
    Oktoberfest,
    StPatrick,
    BeerFestival,
    HappyHour,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FestivalDef {
    pub id: FestivalId,
    pub name: &'static str,
    pub description: &'static str,
    pub production_multiplier: f64,
    pub click_multiplier: f64,
    pub cost_factor: f64,
    pub duration_seconds: u32,
    pub color: &'static str,
}

pub const FESTIVALS: &[FestivalDef] = &[
    FestivalDef {
        id: FestivalId::Oktoberfest,
        name: "Oktoberfest",
        description: "Production ×3 for 30 seconds!",
        production_multiplier: 3.0,
        click_multiplier: 1.0,
        cost_factor: 1.0,
        duration_seconds: 30,
        color: "#f59e0b",
    },
    FestivalDef {
        id: FestivalId::StPatrick,
        name: "St. Patrick",
        description: "Clicks ×5 for 20 seconds!",
        production_multiplier: 1.0,
        click_multiplier: 5.0,
        cost_factor: 1.0,
        duration_seconds: 20,
        color: "#22c55e",
    },
    FestivalDef {
        id: FestivalId::BeerFestival,
        name: "Beer Festival",
        description: "Everything ×2 for 45 seconds!",
        production_multiplier: 2.0,
        click_multiplier: 2.0,
        cost_factor: 1.0,
        duration_seconds: 45,
        color: "#3b82f6",
    },
    FestivalDef {
        id: FestivalId::HappyHour,
        name: "Happy Hour",
        description: "50% off all purchases for 30 seconds!",
        production_multiplier: 1.0,
        click_multiplier: 1.0,
        cost_factor: 0.5,
        duration_seconds: 30,
        color: "#a855f7",
    },
];

pub fn get_festival_def(id: FestivalId) -> &'static FestivalDef {
    match id {
        FestivalId::Oktoberfest => &FESTIVALS[0],
        FestivalId::StPatrick => &FESTIVALS[1],
        FestivalId::BeerFestival => &FESTIVALS[2],
        FestivalId::HappyHour => &FESTIVALS[3],
    }
}

impl FestivalDef {
    /// One effect per component that differs from 1.0.
    pub fn effects(&self) -> Vec<Effect> {
        [
            (EffectKind::ProductionMultiplier, self.production_multiplier),
            (EffectKind::ClickMultiplier, self.click_multiplier),
            (EffectKind::CostReduction, self.cost_factor),
        ]
        .into_iter()
        .filter(|&(_, magnitude)| magnitude != 1.0)
        .map(|(kind, magnitude)| {
            Effect::new(kind, magnitude, self.duration_seconds, self.name, self.color)
        })
        .collect()
    }
}
