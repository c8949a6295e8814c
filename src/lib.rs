//! Beer Clicker - idle clicker economy engine.
//!
//! The crate holds the authoritative game state and rules; rendering and
//! account management live elsewhere and talk to [`core::Engine`] through
//! its entry points and getters.

pub mod achievements;
pub mod catalog;
pub mod combo;
pub mod core;
pub mod effects;
pub mod error;
pub mod format;
pub mod prestige;
pub mod save;
pub mod simulator;

pub use crate::core::{Clock, Engine, EngineEvent, ManualClock, SystemClock};
pub use crate::error::{LedgerError, PurchaseError, SaveError};
