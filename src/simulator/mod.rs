//! Balance simulator.
//!
//! Runs headless sessions against the real engine to analyze:
//! - Production growth with a given click cadence and buying strategy
//! - Time to the first prestige
//! - Golden bonus and festival frequency

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
