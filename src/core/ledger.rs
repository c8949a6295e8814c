//! Resource ledger: the only place resource amounts change.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};

/// Current and lifetime resource totals.
///
/// `lifetime` never decreases except through [`ResourceLedger::reset_for_prestige`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLedger {
    current: f64,
    lifetime: f64,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from stored amounts. Callers validate first.
    pub(crate) fn from_parts(current: f64, lifetime: f64) -> Self {
        Self { current, lifetime }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    /// Add to both totals. Zero, negative and non-finite amounts are ignored.
    pub fn credit(&mut self, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }
        self.current += amount;
        self.lifetime += amount;
    }

    /// Spend from the current total only.
    pub fn debit(&mut self, amount: f64) -> Result<(), LedgerError> {
        if amount > self.current {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available: self.current,
            });
        }
        if amount > 0.0 {
            self.current -= amount;
        }
        Ok(())
    }

    /// Administrative override. Clamps to zero and only ever raises lifetime.
    pub fn set_exact(&mut self, amount: f64) {
        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        self.current = amount;
        self.lifetime = self.lifetime.max(amount);
    }

    pub(crate) fn reset_for_prestige(&mut self) {
        self.current = 0.0;
        self.lifetime = 0.0;
    }
}
