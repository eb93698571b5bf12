use solana_sdk::{pubkey::Pubkey, sysvar};

use crate::{
    account_metas::SerumSwap,
    config::ProgramConfig,
    derivation::{VaultAuthority, derive_vault_authority},
    error::{Result, SwapError},
    market::MarketView,
    types::{Side, SwapAndAccountMetas, SwapArgs, SwapParams},
};

/// A loaded market together with the programs it is traded through
#[derive(Debug, Clone, Copy)]
pub struct SerumMarket {
    pub view: MarketView,
    pub vault_authority: VaultAuthority,
    pub programs: ProgramConfig,
}

impl SerumMarket {
    pub fn new(view: MarketView, programs: ProgramConfig) -> Result<Self> {
        let vault_authority = derive_vault_authority(&view.address, &programs.dex_program_id)?;

        if vault_authority.nonce != view.vault_signer_nonce {
            log::warn!(
                "Market {} stores vault signer nonce {}, derived {}",
                view.address,
                view.vault_signer_nonce,
                vault_authority.nonce
            );
        } else {
            log::debug!(
                "Market {} vault authority {} (nonce {})",
                view.address,
                vault_authority.address,
                vault_authority.nonce
            );
        }

        Ok(Self {
            view,
            vault_authority,
            programs,
        })
    }

    pub fn key(&self) -> Pubkey {
        self.view.address
    }

    /// Side of the book a swap from `source_mint` to `destination_mint` takes
    pub fn side(&self, source_mint: &Pubkey, destination_mint: &Pubkey) -> Result<Side> {
        let MarketView {
            base_mint,
            quote_mint,
            ..
        } = &self.view;

        if source_mint == quote_mint && destination_mint == base_mint {
            Ok(Side::Bid)
        } else if source_mint == base_mint && destination_mint == quote_mint {
            Ok(Side::Ask)
        } else {
            Err(SwapError::InvalidRequest(format!(
                "market {} trades {}/{}, cannot swap {} for {}",
                self.view.address, base_mint, quote_mint, source_mint, destination_mint
            )))
        }
    }

    pub fn get_swap_and_account_metas(&self, swap_params: &SwapParams) -> SwapAndAccountMetas {
        let SwapParams {
            side,
            amount,
            min_amount_out,
            authority,
            open_orders,
            source_wallet,
            destination_wallet,
            referral,
        } = swap_params;

        // the order payer is whatever the swap spends
        let (base_wallet, quote_wallet) = match side {
            Side::Bid => (*destination_wallet, *source_wallet),
            Side::Ask => (*source_wallet, *destination_wallet),
        };

        let swap = SwapArgs {
            side: *side,
            amount: *amount,
            min_expected_swap_amount: *min_amount_out,
        };

        SwapAndAccountMetas {
            swap,
            data: swap.data(),
            account_metas: SerumSwap {
                market: self.view.address,
                open_orders: *open_orders,
                request_queue: self.view.request_queue,
                event_queue: self.view.event_queue,
                bids: self.view.bids,
                asks: self.view.asks,
                order_payer_token_account: *source_wallet,
                base_vault: self.view.base_vault,
                quote_vault: self.view.quote_vault,
                vault_signer: self.vault_authority.address,
                base_wallet,
                authority: *authority,
                quote_wallet,
                dex_program: self.programs.dex_program_id,
                token_program: self.programs.token_program_id,
                rent: sysvar::rent::ID,
                referral: *referral,
            }
            .into(),
        }
    }
}
