//! # Serum Swap SDK
//!
//! A standalone SDK for swapping tokens through the Serum swap program and the Serum DEX order book.
//! Matching, settlement and custody all happen on chain; this SDK only assembles correctly ordered
//! instructions, estimates their outcome with a dry run and optionally submits them.
//!
//! 1. **Transaction Functions**: `swap` signs and submits, `swap_tx` returns a transaction ready for the authority signature
//! 2. **Instruction Functions (`_ix`)**: `swap_ix` returns the ordered instructions plus the extra signers
//!
//! ## 🚀 Quick Start
//!
//! ### Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serum-swap-sdk = "0.1.0"
//! ```
//!
//! ### Basic Setup
//!
//! ```rust,ignore
//! use serum_swap_sdk::{Network, ProgramConfig, SerumSwapSDK};
//! use solana_sdk::commitment_config::CommitmentLevel;
//!
//! let sdk = SerumSwapSDK::new(
//!     "https://api.mainnet-beta.solana.com",
//!     CommitmentLevel::Confirmed,
//!     ProgramConfig::for_network(Network::Mainnet),
//! );
//! ```
//!
//! ## 📖 Usage Patterns
//!
//! ### Swapping
//!
//! ```rust,ignore
//! use serum_swap_sdk::SwapRequest;
//!
//! let usdc = Pubkey::from_str("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").unwrap();
//! let srm = Pubkey::from_str("SRMuApVNdxXokk5GT7XD5cUUgXMBCoAz2LHeuAoKWRt").unwrap();
//! let srm_usdc_market = Pubkey::from_str("ByRys5tuUWDgL73G8JBAEfkdFf8JWBzPBDHsBVQ5vbQA").unwrap();
//!
//! // Buy SRM with 1 USDC, keeping the default 0.5% slippage floor
//! let request = SwapRequest::new(usdc, srm, 1_000_000, srm_usdc_market, user_keypair.pubkey());
//!
//! let expected_out = sdk.estimate(&request).await?;
//! let signature = sdk.swap(&request, &user_keypair).await?;
//! ```
//!
//! ### Manual Control
//!
//! ```rust,ignore
//! let request = SwapRequest::new(usdc, srm, 1_000_000, srm_usdc_market, user_pubkey)
//!     .min_amount_out(950_000)
//!     .referral(referral_usdc_wallet);
//!
//! let batch = sdk.swap_ix(&request).await?;
//!
//! let mut signers = vec![&user_keypair];
//! signers.extend(batch.signers());
//! let tx = Transaction::new_signed_with_payer(
//!     &batch.instructions,
//!     Some(&user_pubkey),
//!     &signers,
//!     recent_blockhash,
//! );
//! ```
//!
//! ## ⚠️ Important
//!
//! - Token wallets default to the authority's associated token accounts and must exist before swapping.
//! - When the authority has no open orders account on the market, a new one is created in the same
//!   transaction. Its keypair is returned in `InstructionBatch::signers` and must co-sign.
//!   Open orders accounts created this way are not closed afterwards.
//! - Only direct swaps through a single market are supported.
//!
//! ## 🌐 Network Configuration
//!
//! Program addresses come from [`ProgramConfig`], fixed when the SDK is created.

mod account_metas;
mod config;
mod connection;
mod constants;
mod derivation;
mod error;
mod event;
mod market;
mod open_orders;
mod params;
mod sdk;
mod serum_market;
mod types;
mod utils;

pub use sdk::{InstructionBatch, SerumSwapSDK};

pub use config::{Network, ProgramConfig};
pub use connection::{SimulationOutcome, SwapConnection};
pub use error::{Result, SwapError};
pub use params::{SubmissionOptions, SwapRequest, SwapRoute};

pub use derivation::{VaultAuthority, derive_associated_token_address, derive_vault_authority};
pub use event::DidSwap;
pub use market::{MarketState, MarketView};
pub use open_orders::{OpenOrdersHandle, open_orders_filters};
pub use serum_market::SerumMarket;
pub use types::{AccountData, Side};
pub use utils::default_min_amount_out;

pub use constants::{
    DEVNET_DEX_PROGRAM_ID, DEVNET_SWAP_PROGRAM_ID, DID_SWAP_DISCRIMINATOR, DID_SWAP_LOG_PREFIX,
    MAINNET_DEX_PROGRAM_ID, MAINNET_SWAP_PROGRAM_ID, MARKET_ACCOUNT_LEN, OPEN_ORDERS_ACCOUNT_LEN,
    SWAP_DISCRIMINATOR,
};
