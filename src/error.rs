//! Error types for declined actions and corrupt input.

use thiserror::Error;

/// Ledger rejected a debit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: f64, available: f64 },
}

/// A purchase was declined. Neither variant changes any state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PurchaseError {
    #[error("insufficient funds: price {price}, have {available}")]
    InsufficientFunds { price: f64, available: f64 },
    #[error("unknown upgrade id `{0}`")]
    UnknownUpgrade(String),
}

impl From<LedgerError> for PurchaseError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds {
                required,
                available,
            } => PurchaseError::InsufficientFunds {
                price: required,
                available,
            },
        }
    }
}

/// Loading, importing or writing a save failed.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("malformed save: {0}")]
    MalformedSave(String),
    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    VersionMismatch { expected: u64, found: u64 },
    #[error("checksum verification failed")]
    ChecksumMismatch,
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SaveError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SaveError::MalformedSave(reason.into())
    }

    /// True for every variant that means "the bytes were bad" rather than
    /// "the filesystem failed".
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            SaveError::MalformedSave(_)
                | SaveError::VersionMismatch { .. }
                | SaveError::ChecksumMismatch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_converts_to_purchase_error() {
        let err: PurchaseError = LedgerError::InsufficientFunds {
            required: 17.0,
            available: 3.0,
        }
        .into();
        assert_eq!(
            err,
            PurchaseError::InsufficientFunds {
                price: 17.0,
                available: 3.0
            }
        );
    }

    #[test]
    fn test_corrupt_classification() {
        assert!(SaveError::malformed("x").is_corrupt());
        assert!(SaveError::ChecksumMismatch.is_corrupt());
        let io = SaveError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_corrupt());
    }
}
