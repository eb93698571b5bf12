//! SDK error types.

use solana_sdk::{pubkey::Pubkey, signer::SignerError};

/// Errors returned by the swap SDK.
///
/// Every failure is terminal for the call that produced it: nothing is
/// retried and no partial instruction batch is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// No nonce in the bounded search yields a valid vault authority.
    #[error("no valid vault authority nonce for market {market} under program {program_id}")]
    AddressDerivationExhausted { market: Pubkey, program_id: Pubkey },

    /// The dry run returned an error, produced no logs, or emitted no swap event.
    #[error("swap simulation failed: {0}")]
    SimulationFailed(String),

    /// A simulated swap could not produce a usable output estimate.
    #[error("swap estimation failed: {0}")]
    EstimationFailed(String),

    /// A token wallet could not be resolved for the request.
    #[error("unable to resolve wallet: {0}")]
    UnresolvedWallet(String),

    #[error("invalid swap request: {0}")]
    InvalidRequest(String),

    #[error("invalid market {market}: {reason}")]
    InvalidMarket { market: Pubkey, reason: String },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("failed to sign swap transaction: {0}")]
    Signing(#[from] SignerError),

    /// Failure reported by the RPC collaborator, passed through unmodified.
    #[error(transparent)]
    Connection(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SwapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SwapError::SimulationFailed("no logs".to_string());
        assert_eq!(err.to_string(), "swap simulation failed: no logs");

        let err = SwapError::NotImplemented("transitive swap");
        assert_eq!(err.to_string(), "transitive swap is not implemented");
    }

    #[test]
    fn test_connection_error_is_transparent() {
        let err: SwapError = anyhow::anyhow!("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
    }
}
