// Public swap inputs

use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

/// Markets a swap goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRoute {
    /// A single market trading the source mint against the destination mint
    Direct(Pubkey),
    /// Two markets sharing a quote currency, source -> quote -> destination
    Transitive { from_market: Pubkey, to_market: Pubkey },
}

/// How a finished swap transaction is sent
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionOptions {
    pub skip_preflight: bool,
    pub preflight_commitment: Option<CommitmentLevel>,
    /// Commitment to wait for, defaults to the connection's
    pub commitment: Option<CommitmentLevel>,
}

/// Swap request
#[derive(Debug, Clone)]
pub struct SwapRequest {
    pub source_mint: Pubkey,
    pub destination_mint: Pubkey,
    pub amount: u64,
    pub route: SwapRoute,
    /// Token transfer authority and fee payer
    pub authority: Pubkey,
    /// Hard floor on the destination amount, estimated when `None`
    pub min_amount_out: Option<u64>,
    pub referral: Option<Pubkey>,
    /// Defaults to the authority's associated token account for `source_mint`
    pub source_wallet: Option<Pubkey>,
    /// Defaults to the authority's associated token account for `destination_mint`
    pub destination_wallet: Option<Pubkey>,
    pub options: SubmissionOptions,
}

impl SwapRequest {
    pub fn new(
        source_mint: Pubkey,
        destination_mint: Pubkey,
        amount: u64,
        market: Pubkey,
        authority: Pubkey,
    ) -> Self {
        Self {
            source_mint,
            destination_mint,
            amount,
            route: SwapRoute::Direct(market),
            authority,
            min_amount_out: None,
            referral: None,
            source_wallet: None,
            destination_wallet: None,
            options: SubmissionOptions::default(),
        }
    }

    #[must_use]
    pub fn min_amount_out(mut self, min_amount_out: u64) -> Self {
        self.min_amount_out = Some(min_amount_out);
        self
    }

    #[must_use]
    pub fn referral(mut self, referral: Pubkey) -> Self {
        self.referral = Some(referral);
        self
    }

    #[must_use]
    pub fn source_wallet(mut self, wallet: Pubkey) -> Self {
        self.source_wallet = Some(wallet);
        self
    }

    #[must_use]
    pub fn destination_wallet(mut self, wallet: Pubkey) -> Self {
        self.destination_wallet = Some(wallet);
        self
    }

    #[must_use]
    pub fn options(mut self, options: SubmissionOptions) -> Self {
        self.options = options;
        self
    }
}
