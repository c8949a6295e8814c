//! Temporary multipliers and the random events that create them.

pub mod director;
pub mod festival;
pub mod golden;
pub mod stack;
pub mod types;

pub use director::{DirectorEvent, EventDirector};
pub use festival::{get_festival_def, FestivalDef, FestivalId, FESTIVALS};
pub use golden::{GoldenOutcome, GoldenReward};
pub use stack::EffectStack;
pub use types::{Effect, EffectKind};
