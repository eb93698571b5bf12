use solana_sdk::pubkey::Pubkey;

use crate::constants::{
    DEVNET_DEX_PROGRAM_ID, DEVNET_SWAP_PROGRAM_ID, MAINNET_DEX_PROGRAM_ID, MAINNET_SWAP_PROGRAM_ID,
};

/// Cluster the SDK talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Devnet,
}

/// Program addresses used when assembling swap instructions.
///
/// Fixed for the lifetime of an SDK instance. Use [`ProgramConfig::for_network`]
/// for the known deployments or fill the fields directly for a local validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramConfig {
    pub swap_program_id: Pubkey,
    pub dex_program_id: Pubkey,
    pub token_program_id: Pubkey,
    pub associated_token_program_id: Pubkey,
}

impl ProgramConfig {
    pub fn mainnet() -> Self {
        Self {
            swap_program_id: MAINNET_SWAP_PROGRAM_ID,
            dex_program_id: MAINNET_DEX_PROGRAM_ID,
            token_program_id: spl_token::ID,
            associated_token_program_id: spl_associated_token_account::ID,
        }
    }

    pub fn devnet() -> Self {
        Self {
            swap_program_id: DEVNET_SWAP_PROGRAM_ID,
            dex_program_id: DEVNET_DEX_PROGRAM_ID,
            token_program_id: spl_token::ID,
            associated_token_program_id: spl_associated_token_account::ID,
        }
    }

    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::mainnet(),
            Network::Devnet => Self::devnet(),
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}
