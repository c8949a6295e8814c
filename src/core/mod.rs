//! Core engine: ledger, timing, offline catch-up and the [`Engine`] itself.

pub mod clock;
pub mod constants;
pub mod engine;
pub mod events;
pub mod ledger;
pub mod offline;
pub mod stats;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::Engine;
pub use events::EngineEvent;
pub use ledger::ResourceLedger;
pub use offline::OfflineReport;
pub use stats::{Stats, StatsView};
pub use timer::{Scheduler, TimerHandle};
