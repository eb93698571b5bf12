use anchor_lang::prelude::AccountMeta;
use solana_sdk::pubkey::Pubkey;

pub(crate) struct SerumSwap {
    pub market: Pubkey,
    pub open_orders: Pubkey,
    pub request_queue: Pubkey,
    pub event_queue: Pubkey,
    pub bids: Pubkey,
    pub asks: Pubkey,
    pub order_payer_token_account: Pubkey,
    pub base_vault: Pubkey,
    pub quote_vault: Pubkey,
    pub vault_signer: Pubkey,
    pub base_wallet: Pubkey,
    pub authority: Pubkey,
    pub quote_wallet: Pubkey,
    pub dex_program: Pubkey,
    pub token_program: Pubkey,
    pub rent: Pubkey,
    // remaining accounts
    pub referral: Option<Pubkey>,
}

impl From<SerumSwap> for Vec<AccountMeta> {
    fn from(accounts: SerumSwap) -> Self {
        let mut metas = vec![
            AccountMeta::new(accounts.market, false),
            AccountMeta::new(accounts.open_orders, false),
            AccountMeta::new(accounts.request_queue, false),
            AccountMeta::new(accounts.event_queue, false),
            AccountMeta::new(accounts.bids, false),
            AccountMeta::new(accounts.asks, false),
            AccountMeta::new(accounts.order_payer_token_account, false),
            AccountMeta::new(accounts.base_vault, false),
            AccountMeta::new(accounts.quote_vault, false),
            AccountMeta::new_readonly(accounts.vault_signer, false),
            AccountMeta::new(accounts.base_wallet, false),
            AccountMeta::new_readonly(accounts.authority, true),
            AccountMeta::new(accounts.quote_wallet, false),
            AccountMeta::new_readonly(accounts.dex_program, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            AccountMeta::new_readonly(accounts.rent, false),
        ];

        if let Some(referral) = accounts.referral {
            metas.push(AccountMeta::new(referral, false));
        }

        metas
    }
}
