//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Length of each session in game seconds
    pub duration_seconds: u64,

    /// Manual clicks per second (0 = idle play)
    pub clicks_per_second: u32,

    /// Greedily buy the upgrade with the best payback whenever affordable
    pub auto_buy: bool,

    /// Prestige as soon as the threshold is reached
    pub simulate_prestige: bool,

    /// Stop prestiging at this level
    pub target_prestige: u32,

    /// Run golden bonuses and festivals
    pub simulate_events: bool,

    /// Catch every golden bonus that appears
    pub catch_golden: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10,
            seed: None,
            duration_seconds: 3_600,
            clicks_per_second: 5,
            auto_buy: true,
            simulate_prestige: false,
            target_prestige: 1,
            simulate_events: true,
            catch_golden: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// No clicking, no events: pure production growth.
    pub fn idle_only() -> Self {
        Self {
            clicks_per_second: 0,
            simulate_events: false,
            catch_golden: false,
            ..Default::default()
        }
    }

    /// A player hammering the button for an hour.
    pub fn active_player() -> Self {
        Self {
            clicks_per_second: 10,
            ..Default::default()
        }
    }

    /// Long sessions that prestige up to `target`.
    pub fn prestige_cycle(target: u32) -> Self {
        Self {
            num_runs: 5,
            duration_seconds: 6 * 3_600,
            simulate_prestige: true,
            target_prestige: target,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_override_defaults() {
        assert_eq!(SimConfig::idle_only().clicks_per_second, 0);
        assert!(!SimConfig::idle_only().simulate_events);
        assert_eq!(SimConfig::active_player().clicks_per_second, 10);
        let cycle = SimConfig::prestige_cycle(3);
        assert!(cycle.simulate_prestige);
        assert_eq!(cycle.target_prestige, 3);
    }
}
