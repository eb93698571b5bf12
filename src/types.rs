use anchor_lang::prelude::AccountMeta;
use solana_sdk::pubkey::Pubkey;

use crate::constants::SWAP_DISCRIMINATOR;

/// Account data structure
#[derive(Clone, Debug)]
pub struct AccountData {
    pub data: Vec<u8>,
    pub owner: Pubkey,
}

/// Order book side taken by the swap.
///
/// `Bid` buys the base currency with the quote currency, `Ask` sells base for quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Side {
    Bid = 0,
    Ask = 1,
}

/// Swap parameters, fully resolved
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub side: Side,
    pub amount: u64,
    pub min_amount_out: u64,
    pub authority: Pubkey,
    pub open_orders: Pubkey,
    pub source_wallet: Pubkey,
    pub destination_wallet: Pubkey,
    pub referral: Option<Pubkey>,
}

/// Arguments of the swap program's `swap` instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapArgs {
    pub side: Side,
    pub amount: u64,
    pub min_expected_swap_amount: u64,
}

impl SwapArgs {
    pub fn data(&self) -> Vec<u8> {
        let mut data = SWAP_DISCRIMINATOR.to_vec();
        data.push(self.side as u8);
        data.extend_from_slice(&self.amount.to_le_bytes());
        data.extend_from_slice(&self.min_expected_swap_amount.to_le_bytes());
        data
    }
}

/// Swap result with account metadata
#[derive(Debug, Clone)]
pub struct SwapAndAccountMetas {
    pub swap: SwapArgs,
    pub data: Vec<u8>,
    pub account_metas: Vec<AccountMeta>,
}
