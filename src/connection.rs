use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;
use solana_account_decoder::{UiAccountEncoding, UiDataSliceConfig};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::{
    config::{
        RpcAccountInfoConfig, RpcProgramAccountsConfig, RpcSendTransactionConfig,
        RpcSimulateTransactionConfig,
    },
    filter::RpcFilterType,
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};

use crate::{params::SubmissionOptions, types::AccountData};

const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Result of a dry run
#[derive(Debug, Clone, Default)]
pub struct SimulationOutcome {
    pub err: Option<TransactionError>,
    pub logs: Option<Vec<String>>,
}

/// Network access needed by the swap SDK.
///
/// Timeouts, retries and cancellation all belong to the implementor; the SDK
/// issues each call once and surfaces whatever error comes back.
#[async_trait]
pub trait SwapConnection: Send + Sync {
    async fn get_account(&self, address: &Pubkey) -> Result<AccountData>;

    /// Keys of accounts owned by `program_id` matching every filter, in the
    /// order the node returned them
    async fn get_program_account_keys(
        &self,
        program_id: &Pubkey,
        filters: Vec<RpcFilterType>,
    ) -> Result<Vec<Pubkey>>;

    async fn get_minimum_balance_for_rent_exemption(&self, length: usize) -> Result<u64>;

    async fn get_latest_blockhash(&self) -> Result<Hash>;

    /// Execute without committing. Signatures are not verified.
    async fn simulate_transaction(&self, transaction: &Transaction) -> Result<SimulationOutcome>;

    /// Submit and wait for `options.commitment`. A transaction that lands but
    /// aborts on chain is an error carrying its `TransactionError`.
    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
        options: &SubmissionOptions,
    ) -> Result<Signature>;
}

#[async_trait]
impl SwapConnection for RpcClient {
    async fn get_account(&self, address: &Pubkey) -> Result<AccountData> {
        let account = RpcClient::get_account(self, address).await?;

        Ok(AccountData {
            data: account.data,
            owner: account.owner,
        })
    }

    async fn get_program_account_keys(
        &self,
        program_id: &Pubkey,
        filters: Vec<RpcFilterType>,
    ) -> Result<Vec<Pubkey>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(filters),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                // only the keys are needed
                data_slice: Some(UiDataSliceConfig {
                    offset: 0,
                    length: 0,
                }),
                commitment: Some(self.commitment()),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };

        let accounts = self
            .get_program_accounts_with_config(program_id, config)
            .await?;

        Ok(accounts.into_iter().map(|(key, _)| key).collect())
    }

    async fn get_minimum_balance_for_rent_exemption(&self, length: usize) -> Result<u64> {
        Ok(RpcClient::get_minimum_balance_for_rent_exemption(self, length).await?)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        Ok(RpcClient::get_latest_blockhash(self).await?)
    }

    async fn simulate_transaction(&self, transaction: &Transaction) -> Result<SimulationOutcome> {
        let config = RpcSimulateTransactionConfig {
            sig_verify: false,
            replace_recent_blockhash: true,
            commitment: Some(self.commitment()),
            ..RpcSimulateTransactionConfig::default()
        };

        let response = self
            .simulate_transaction_with_config(transaction, config)
            .await?;

        Ok(SimulationOutcome {
            err: response.value.err,
            logs: response.value.logs,
        })
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
        options: &SubmissionOptions,
    ) -> Result<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: options.skip_preflight,
            preflight_commitment: options.preflight_commitment,
            ..RpcSendTransactionConfig::default()
        };

        let signature = self.send_transaction_with_config(transaction, config).await?;

        let commitment = options
            .commitment
            .map(|commitment| CommitmentConfig { commitment })
            .unwrap_or_else(|| self.commitment());

        loop {
            match self
                .get_signature_status_with_commitment(&signature, commitment)
                .await?
            {
                Some(Ok(())) => return Ok(signature),
                // on-chain aborts surface here, not from the send
                Some(Err(err)) => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("transaction {} failed", signature)));
                }
                None => {
                    if !self
                        .is_blockhash_valid(
                            &transaction.message.recent_blockhash,
                            CommitmentConfig::processed(),
                        )
                        .await?
                    {
                        bail!(
                            "transaction {} expired before reaching {:?} commitment",
                            signature,
                            commitment.commitment
                        );
                    }

                    tokio::time::sleep(CONFIRMATION_POLL_INTERVAL).await;
                }
            }
        }
    }
}
