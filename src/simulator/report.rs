//! Simulation report generation.

use crate::format::{format_amount, format_play_time};
use serde::Serialize;

/// Outcome of one simulated session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub total_earned: f64,
    pub final_amount: f64,
    pub final_rate: f64,
    pub total_clicks: u64,
    pub upgrades_owned: u64,
    pub prestige_level: u32,
    /// Game second at which each prestige happened
    pub prestige_seconds: Vec<u64>,
    pub achievements_unlocked: usize,
    pub golden_caught: u64,
    pub golden_missed: u64,
    pub festivals_joined: u64,
    pub max_combo: u32,
}

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub duration_seconds: u64,

    pub avg_total_earned: f64,
    pub avg_final_rate: f64,
    pub avg_upgrades_owned: f64,
    pub avg_achievements: f64,
    pub avg_prestige_level: f64,
    /// Mean second of the first prestige, over runs that reached one
    pub avg_first_prestige_second: Option<f64>,
    pub avg_golden_caught: f64,
    pub avg_festivals_joined: f64,

    pub runs: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, duration_seconds: u64) -> Self {
        let first_prestige: Vec<f64> = runs
            .iter()
            .filter_map(|r| r.prestige_seconds.first().map(|&s| s as f64))
            .collect();

        Self {
            num_runs: runs.len() as u32,
            duration_seconds,
            avg_total_earned: mean(runs.iter().map(|r| r.total_earned)),
            avg_final_rate: mean(runs.iter().map(|r| r.final_rate)),
            avg_upgrades_owned: mean(runs.iter().map(|r| r.upgrades_owned as f64)),
            avg_achievements: mean(runs.iter().map(|r| r.achievements_unlocked as f64)),
            avg_prestige_level: mean(runs.iter().map(|r| f64::from(r.prestige_level))),
            avg_first_prestige_second: if first_prestige.is_empty() {
                None
            } else {
                Some(mean(first_prestige.iter().copied()))
            },
            avg_golden_caught: mean(runs.iter().map(|r| r.golden_caught as f64)),
            avg_festivals_joined: mean(runs.iter().map(|r| r.festivals_joined as f64)),
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══════════════════ SIMULATION REPORT ═══════════════════\n");
        out.push_str(&format!(
            "Runs: {}   Session length: {}\n\n",
            self.num_runs,
            format_play_time(self.duration_seconds)
        ));
        out.push_str(&format!(
            "Avg earned:        {}\n",
            format_amount(self.avg_total_earned)
        ));
        out.push_str(&format!(
            "Avg final rate:    {}/s\n",
            format_amount(self.avg_final_rate)
        ));
        out.push_str(&format!("Avg upgrades:      {:.1}\n", self.avg_upgrades_owned));
        out.push_str(&format!("Avg achievements:  {:.1}\n", self.avg_achievements));
        out.push_str(&format!("Avg prestige:      {:.2}\n", self.avg_prestige_level));
        match self.avg_first_prestige_second {
            Some(s) => out.push_str(&format!(
                "First prestige at: {}\n",
                format_play_time(s as u64)
            )),
            None => out.push_str("First prestige at: never\n"),
        }
        out.push_str(&format!("Avg golden caught: {:.1}\n", self.avg_golden_caught));
        out.push_str(&format!("Avg festivals:     {:.1}\n", self.avg_festivals_joined));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
