use std::sync::Arc;

use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::{
    config::ProgramConfig,
    connection::SwapConnection,
    constants::ESTIMATE_MIN_AMOUNT_OUT,
    derivation::derive_associated_token_address,
    error::{Result, SwapError},
    event::DidSwap,
    market::load_market,
    open_orders::{OpenOrdersHandle, create_open_orders_account, resolve_open_orders},
    params::{SwapRequest, SwapRoute},
    serum_market::SerumMarket,
    types::SwapParams,
    utils::default_min_amount_out,
};

// The swap program cannot close open orders yet, so accounts created by a
// swap are kept. Flip once closing is supported on chain.
const CLOSE_CREATED_OPEN_ORDERS: bool = false;

/// Ordered instructions of one swap and the keypairs that must co-sign them
/// besides the request authority
#[derive(Debug)]
pub struct InstructionBatch {
    pub instructions: Vec<Instruction>,
    pub signers: Vec<Keypair>,
}

impl InstructionBatch {
    pub fn signers(&self) -> Vec<&Keypair> {
        self.signers.iter().collect()
    }
}

pub struct SerumSwapSDK {
    connection: Arc<dyn SwapConnection>,
    programs: ProgramConfig,
}

impl SerumSwapSDK {
    /// Create a new Serum Swap SDK instance
    pub fn new(
        rpc_endpoint: &str,
        commitment_level: CommitmentLevel,
        programs: ProgramConfig,
    ) -> Self {
        let commitment_config = CommitmentConfig {
            commitment: commitment_level,
        };

        Self {
            connection: Arc::new(RpcClient::new_with_commitment(
                rpc_endpoint.to_string(),
                commitment_config,
            )),
            programs,
        }
    }

    /// Create an SDK instance on top of any connection
    pub fn with_connection(connection: Arc<dyn SwapConnection>, programs: ProgramConfig) -> Self {
        Self {
            connection,
            programs,
        }
    }

    pub fn programs(&self) -> &ProgramConfig {
        &self.programs
    }

    /// Estimate the destination amount a swap would produce
    ///
    /// # Arguments
    /// * `request` - The swap request, its `min_amount_out` is ignored
    ///
    /// # Returns
    /// Returns the destination token amount reported by a simulated swap
    pub async fn estimate(&self, request: &SwapRequest) -> Result<u64> {
        let batch = self
            .build_swap_batch(request, ESTIMATE_MIN_AMOUNT_OUT)
            .await?;

        let message = Message::new(&batch.instructions, Some(&request.authority));
        let transaction = Transaction::new_unsigned(message);

        let outcome = self.connection.simulate_transaction(&transaction).await?;

        if let Some(err) = outcome.err {
            log::warn!(
                "Swap simulation failed: {}. Logs: {:?}",
                err,
                outcome.logs.unwrap_or_default()
            );
            return Err(SwapError::SimulationFailed(err.to_string()));
        }

        let logs = outcome
            .logs
            .filter(|logs| !logs.is_empty())
            .ok_or_else(|| SwapError::SimulationFailed("simulation produced no logs".to_string()))?;

        let event = DidSwap::from_logs(&logs)?;

        log::debug!(
            "Simulated swap of {} {} -> {} {} (spill {})",
            event.from_amount,
            event.from_mint,
            event.to_amount,
            event.to_mint,
            event.spill_amount
        );

        Ok(event.to_amount)
    }

    /// Create the instructions of a swap
    ///
    /// When the request carries no minimum output the swap is estimated first
    /// and the minimum is set 0.5% below the estimate.
    ///
    /// # Arguments
    /// * `request` - The swap request
    ///
    /// # Returns
    /// Returns an `InstructionBatch` to be submitted atomically, signed by the
    /// request authority and every keypair in `signers`
    pub async fn swap_ix(&self, request: &SwapRequest) -> Result<InstructionBatch> {
        Self::direct_market(request)?;

        let min_amount_out = match request.min_amount_out {
            Some(min_amount_out) => min_amount_out,
            None => {
                let estimate = self.estimate(request).await?;
                if estimate == 0 {
                    return Err(SwapError::EstimationFailed(
                        "simulated swap produced no output".to_string(),
                    ));
                }

                let min_amount_out = default_min_amount_out(estimate);
                log::info!(
                    "Estimated {} out, using minimum of {}",
                    estimate,
                    min_amount_out
                );
                min_amount_out
            }
        };

        self.build_swap_batch(request, min_amount_out).await
    }

    /// Create a swap transaction
    ///
    /// # Arguments
    /// * `request` - The swap request
    ///
    /// # Returns
    /// Returns a `Transaction` paid by the request authority, already signed
    /// by any new open orders account; only the authority signature is missing
    pub async fn swap_tx(&self, request: &SwapRequest) -> Result<Transaction> {
        let batch = self.swap_ix(request).await?;

        let recent_blockhash = self.connection.get_latest_blockhash().await?;
        let mut transaction = Transaction::new_with_payer(&batch.instructions, Some(&request.authority));
        transaction.try_partial_sign(&batch.signers(), recent_blockhash)?;

        Ok(transaction)
    }

    /// Build, sign and submit a swap
    ///
    /// # Arguments
    /// * `request` - The swap request
    /// * `authority` - Keypair of `request.authority`
    ///
    /// # Returns
    /// Returns the signature of the confirmed transaction
    pub async fn swap(&self, request: &SwapRequest, authority: &Keypair) -> Result<Signature> {
        if authority.pubkey() != request.authority {
            return Err(SwapError::InvalidRequest(format!(
                "signing keypair {} is not the request authority {}",
                authority.pubkey(),
                request.authority
            )));
        }

        let batch = self.swap_ix(request).await?;

        let mut signers = vec![authority];
        signers.extend(batch.signers.iter());

        let recent_blockhash = self.connection.get_latest_blockhash().await?;
        let mut transaction = Transaction::new_with_payer(&batch.instructions, Some(&request.authority));
        transaction.try_sign(&signers, recent_blockhash)?;

        let signature = self
            .connection
            .send_and_confirm_transaction(&transaction, &request.options)
            .await?;

        log::info!("Swap submitted: {}", signature);

        Ok(signature)
    }

    /// Load a market and derive its vault authority
    pub async fn load_market(&self, market: &Pubkey) -> Result<SerumMarket> {
        let view = load_market(&*self.connection, market, &self.programs.dex_program_id).await?;

        SerumMarket::new(view, self.programs)
    }

    /// Look up an open orders account of `owner` on `market`
    pub async fn resolve_open_orders(
        &self,
        market: &Pubkey,
        owner: &Pubkey,
    ) -> Result<OpenOrdersHandle> {
        resolve_open_orders(
            &*self.connection,
            &self.programs.dex_program_id,
            market,
            owner,
        )
        .await
    }

    /// Helpers internal methods
    fn direct_market(request: &SwapRequest) -> Result<Pubkey> {
        if request.amount == 0 {
            return Err(SwapError::InvalidRequest(
                "amount must be greater than zero".to_string(),
            ));
        }

        match request.route {
            SwapRoute::Direct(market) => Ok(market),
            SwapRoute::Transitive { .. } => Err(SwapError::NotImplemented("transitive swap")),
        }
    }

    fn resolve_wallet(&self, wallet: Option<Pubkey>, mint: &Pubkey, owner: &Pubkey) -> Result<Pubkey> {
        match wallet {
            Some(wallet) => Ok(wallet),
            // assumed to exist already, never created here
            None => derive_associated_token_address(
                &self.programs.associated_token_program_id,
                &self.programs.token_program_id,
                mint,
                owner,
            ),
        }
    }

    async fn build_swap_batch(
        &self,
        request: &SwapRequest,
        min_amount_out: u64,
    ) -> Result<InstructionBatch> {
        let market_key = Self::direct_market(request)?;

        let source_wallet =
            self.resolve_wallet(request.source_wallet, &request.source_mint, &request.authority)?;
        let destination_wallet = self.resolve_wallet(
            request.destination_wallet,
            &request.destination_mint,
            &request.authority,
        )?;

        let market = self.load_market(&market_key).await?;
        let side = market.side(&request.source_mint, &request.destination_mint)?;

        let mut instructions = vec![];
        let mut signers = vec![];

        // creation must precede the swap that initialises the account
        let open_orders = match self
            .resolve_open_orders(&market_key, &request.authority)
            .await?
        {
            OpenOrdersHandle::Existing(open_orders) => open_orders,
            OpenOrdersHandle::Absent => {
                let open_orders = Keypair::new();
                instructions.push(
                    create_open_orders_account(
                        &*self.connection,
                        &self.programs.dex_program_id,
                        &request.authority,
                        &open_orders,
                    )
                    .await?,
                );
                let key = open_orders.pubkey();
                signers.push(open_orders);
                key
            }
        };

        let swap_and_account_metas = market.get_swap_and_account_metas(&SwapParams {
            side,
            amount: request.amount,
            min_amount_out,
            authority: request.authority,
            open_orders,
            source_wallet,
            destination_wallet,
            referral: request.referral,
        });

        log::debug!(
            "Swap on market {}: {:?} with {} accounts",
            market_key,
            swap_and_account_metas.swap,
            swap_and_account_metas.account_metas.len()
        );

        instructions.push(Instruction {
            program_id: self.programs.swap_program_id,
            accounts: swap_and_account_metas.account_metas,
            data: swap_and_account_metas.data,
        });

        if CLOSE_CREATED_OPEN_ORDERS && !signers.is_empty() {
            return Err(SwapError::NotImplemented("closing open orders after a swap"));
        }

        Ok(InstructionBatch {
            instructions,
            signers,
        })
    }
}
