use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    connection::SwapConnection,
    constants::{
        ACCOUNT_FLAG_INITIALIZED, ACCOUNT_FLAG_MARKET, ACCOUNT_HEAD_PADDING, ACCOUNT_TAIL_PADDING,
        MARKET_ACCOUNT_LEN,
    },
    error::{Result, SwapError},
    types::AccountData,
};

/// On-chain layout of a DEX market account
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct MarketState {
    pub head_padding: [u8; 5],
    pub account_flags: u64,
    pub own_address: Pubkey,
    pub vault_signer_nonce: u64,

    // coin = base, pc = quote
    pub coin_mint: Pubkey,
    pub pc_mint: Pubkey,

    pub coin_vault: Pubkey,
    pub coin_deposits_total: u64,
    pub coin_fees_accrued: u64,

    pub pc_vault: Pubkey,
    pub pc_deposits_total: u64,
    pub pc_fees_accrued: u64,
    pub pc_dust_threshold: u64,

    pub req_q: Pubkey,
    pub event_q: Pubkey,
    pub bids: Pubkey,
    pub asks: Pubkey,

    pub coin_lot_size: u64,
    pub pc_lot_size: u64,
    pub fee_rate_bps: u64,
    pub referrer_rebates_accrued: u64,

    pub tail_padding: [u8; 7],
}

/// Read-only snapshot of the market accounts a swap touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketView {
    pub address: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub request_queue: Pubkey,
    pub event_queue: Pubkey,
    pub bids: Pubkey,
    pub asks: Pubkey,
    pub base_vault: Pubkey,
    pub quote_vault: Pubkey,
    pub vault_signer_nonce: u64,
}

impl MarketView {
    /// Decode a market account fetched from the chain
    pub fn from_account(
        address: &Pubkey,
        account: &AccountData,
        dex_program_id: &Pubkey,
    ) -> Result<Self> {
        let invalid = |reason: String| SwapError::InvalidMarket {
            market: *address,
            reason,
        };

        if account.owner != *dex_program_id {
            return Err(invalid(format!(
                "owned by {}, expected {}",
                account.owner, dex_program_id
            )));
        }

        if account.data.len() < MARKET_ACCOUNT_LEN {
            return Err(invalid(format!(
                "account data is {} bytes, expected {}",
                account.data.len(),
                MARKET_ACCOUNT_LEN
            )));
        }

        let state = MarketState::deserialize(&mut &account.data[..MARKET_ACCOUNT_LEN])
            .map_err(|e| invalid(format!("failed to decode market state: {}", e)))?;

        if state.head_padding != *ACCOUNT_HEAD_PADDING || state.tail_padding != *ACCOUNT_TAIL_PADDING
        {
            return Err(invalid("missing account padding".to_string()));
        }

        let required_flags = ACCOUNT_FLAG_INITIALIZED | ACCOUNT_FLAG_MARKET;
        if state.account_flags & required_flags != required_flags {
            return Err(invalid(format!(
                "unexpected account flags {:#x}",
                state.account_flags
            )));
        }

        if state.own_address != *address {
            return Err(invalid(format!(
                "account describes market {}",
                state.own_address
            )));
        }

        Ok(Self {
            address: *address,
            base_mint: state.coin_mint,
            quote_mint: state.pc_mint,
            request_queue: state.req_q,
            event_queue: state.event_q,
            bids: state.bids,
            asks: state.asks,
            base_vault: state.coin_vault,
            quote_vault: state.pc_vault,
            vault_signer_nonce: state.vault_signer_nonce,
        })
    }
}

/// Fetch and decode a market account
pub async fn load_market(
    connection: &dyn SwapConnection,
    market: &Pubkey,
    dex_program_id: &Pubkey,
) -> Result<MarketView> {
    let account = connection.get_account(market).await?;

    MarketView::from_account(market, &account, dex_program_id)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn market_state(address: Pubkey, base_mint: Pubkey, quote_mint: Pubkey) -> MarketState {
        MarketState {
            head_padding: *ACCOUNT_HEAD_PADDING,
            account_flags: ACCOUNT_FLAG_INITIALIZED | ACCOUNT_FLAG_MARKET,
            own_address: address,
            vault_signer_nonce: 0,
            coin_mint: base_mint,
            pc_mint: quote_mint,
            coin_vault: Pubkey::new_unique(),
            coin_deposits_total: 0,
            coin_fees_accrued: 0,
            pc_vault: Pubkey::new_unique(),
            pc_deposits_total: 0,
            pc_fees_accrued: 0,
            pc_dust_threshold: 0,
            req_q: Pubkey::new_unique(),
            event_q: Pubkey::new_unique(),
            bids: Pubkey::new_unique(),
            asks: Pubkey::new_unique(),
            coin_lot_size: 100,
            pc_lot_size: 10,
            fee_rate_bps: 22,
            referrer_rebates_accrued: 0,
            tail_padding: *ACCOUNT_TAIL_PADDING,
        }
    }

    fn market_account(state: &MarketState, owner: Pubkey) -> AccountData {
        let mut data = vec![];
        state.serialize(&mut data).unwrap();
        AccountData { data, owner }
    }

    #[test]
    fn test_market_state_len() {
        let state = market_state(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        assert_eq!(market_account(&state, Pubkey::new_unique()).data.len(), MARKET_ACCOUNT_LEN);
    }

    #[test]
    fn test_from_account() {
        let dex = Pubkey::new_unique();
        let address = Pubkey::new_unique();
        let base = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let state = market_state(address, base, quote);

        let view = MarketView::from_account(&address, &market_account(&state, dex), &dex).unwrap();

        assert_eq!(view.address, address);
        assert_eq!(view.base_mint, base);
        assert_eq!(view.quote_mint, quote);
        assert_eq!(view.base_vault, state.coin_vault);
        assert_eq!(view.quote_vault, state.pc_vault);
        assert_eq!(view.request_queue, state.req_q);
        assert_eq!(view.event_queue, state.event_q);
        assert_eq!(view.bids, state.bids);
        assert_eq!(view.asks, state.asks);
    }

    #[test]
    fn test_from_account_wrong_owner() {
        let dex = Pubkey::new_unique();
        let address = Pubkey::new_unique();
        let state = market_state(address, Pubkey::new_unique(), Pubkey::new_unique());
        let account = market_account(&state, Pubkey::new_unique());

        assert_matches!(
            MarketView::from_account(&address, &account, &dex),
            Err(SwapError::InvalidMarket { .. })
        );
    }

    #[test]
    fn test_from_account_rejects_bad_layouts() {
        let dex = Pubkey::new_unique();
        let address = Pubkey::new_unique();

        let mut state = market_state(address, Pubkey::new_unique(), Pubkey::new_unique());
        state.account_flags = ACCOUNT_FLAG_INITIALIZED;
        assert_matches!(
            MarketView::from_account(&address, &market_account(&state, dex), &dex),
            Err(SwapError::InvalidMarket { .. })
        );

        let state = market_state(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        assert_matches!(
            MarketView::from_account(&address, &market_account(&state, dex), &dex),
            Err(SwapError::InvalidMarket { .. })
        );

        let short = AccountData {
            data: vec![0; MARKET_ACCOUNT_LEN - 1],
            owner: dex,
        };
        assert_matches!(
            MarketView::from_account(&address, &short, &dex),
            Err(SwapError::InvalidMarket { .. })
        );
    }
}
