//! Decoding of the swap program's `DidSwap` event from transaction logs.

use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use base64::{Engine, engine::general_purpose::STANDARD};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{DID_SWAP_DISCRIMINATOR, DID_SWAP_LOG_PREFIX, PROGRAM_LOG_PREFIX},
    error::{Result, SwapError},
};

/// Emitted by the swap program after every swap
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DidSwap {
    pub given_amount: u64,
    pub min_expected_swap_amount: u64,
    pub from_amount: u64,
    pub to_amount: u64,
    pub spill_amount: u64,
    pub from_mint: Pubkey,
    pub to_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub authority: Pubkey,
}

impl DidSwap {
    /// Decode the first `DidSwap` event found in `logs`
    pub fn from_logs(logs: &[String]) -> Result<Self> {
        let line = logs
            .iter()
            .find(|line| line.starts_with(DID_SWAP_LOG_PREFIX))
            .ok_or_else(|| SwapError::SimulationFailed("no swap event in logs".to_string()))?;

        Self::from_log_line(line)
    }

    fn from_log_line(line: &str) -> Result<Self> {
        let payload = line.strip_prefix(PROGRAM_LOG_PREFIX).unwrap_or(line);

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| SwapError::SimulationFailed(format!("invalid swap event encoding: {}", e)))?;

        if bytes.len() < DID_SWAP_DISCRIMINATOR.len()
            || bytes[..DID_SWAP_DISCRIMINATOR.len()] != DID_SWAP_DISCRIMINATOR
        {
            return Err(SwapError::SimulationFailed(
                "swap event discriminator mismatch".to_string(),
            ));
        }

        Self::deserialize(&mut &bytes[DID_SWAP_DISCRIMINATOR.len()..])
            .map_err(|e| SwapError::SimulationFailed(format!("invalid swap event: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn did_swap_log(event: &DidSwap) -> String {
        let mut bytes = DID_SWAP_DISCRIMINATOR.to_vec();
        event.serialize(&mut bytes).unwrap();
        format!("{}{}", PROGRAM_LOG_PREFIX, STANDARD.encode(bytes))
    }

    fn did_swap(to_amount: u64) -> DidSwap {
        DidSwap {
            given_amount: 1_000,
            min_expected_swap_amount: 1,
            from_amount: 1_000,
            to_amount,
            spill_amount: 0,
            from_mint: Pubkey::new_unique(),
            to_mint: Pubkey::new_unique(),
            quote_mint: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_log_prefix_matches_discriminator() {
        let line = did_swap_log(&did_swap(42));
        assert!(line.starts_with(DID_SWAP_LOG_PREFIX));
    }

    #[test]
    fn test_from_logs() {
        let event = did_swap(4_200);
        let logs = vec![
            "Program 22Y43yTVxuUkoRKdm9thyRhQ3SdgQS7c7kB6UNCiaczD invoke [1]".to_string(),
            "Program log: Instruction: Swap".to_string(),
            did_swap_log(&event),
            "Program 22Y43yTVxuUkoRKdm9thyRhQ3SdgQS7c7kB6UNCiaczD success".to_string(),
        ];

        assert_eq!(DidSwap::from_logs(&logs).unwrap(), event);
    }

    #[test]
    fn test_from_logs_uses_first_event() {
        let first = did_swap(1);
        let second = did_swap(2);
        let logs = vec![did_swap_log(&first), did_swap_log(&second)];

        assert_eq!(DidSwap::from_logs(&logs).unwrap().to_amount, 1);
    }

    #[test]
    fn test_from_logs_without_event() {
        let logs = vec![
            "Program log: Instruction: Swap".to_string(),
            "Program log: AAAAAAAAAAAA".to_string(),
        ];

        assert_matches!(DidSwap::from_logs(&logs), Err(SwapError::SimulationFailed(_)));
        assert_matches!(DidSwap::from_logs(&[]), Err(SwapError::SimulationFailed(_)));
    }

    #[test]
    fn test_truncated_event() {
        let line = did_swap_log(&did_swap(7));
        let truncated = &line[..DID_SWAP_LOG_PREFIX.len() + 12];

        assert_matches!(
            DidSwap::from_logs(&[truncated.to_string()]),
            Err(SwapError::SimulationFailed(_))
        );
    }
}
