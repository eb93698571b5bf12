//! Open orders lookup and creation.
//!
//! The DEX requires a per-market, per-owner open orders account before any
//! order can be placed. Swaps reuse an existing one when it can be found and
//! otherwise create a fresh account in the same transaction.

use solana_rpc_client_api::filter::{Memcmp, RpcFilterType};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction,
};

use crate::{
    connection::SwapConnection,
    constants::{OPEN_ORDERS_ACCOUNT_LEN, OPEN_ORDERS_MARKET_OFFSET, OPEN_ORDERS_OWNER_OFFSET},
    error::Result,
};

/// Result of an open orders lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOrdersHandle {
    Existing(Pubkey),
    Absent,
}

/// Filters selecting the open orders accounts of `owner` on `market`
pub fn open_orders_filters(market: &Pubkey, owner: &Pubkey) -> Vec<RpcFilterType> {
    vec![
        RpcFilterType::DataSize(OPEN_ORDERS_ACCOUNT_LEN as u64),
        RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
            OPEN_ORDERS_MARKET_OFFSET,
            market.as_ref(),
        )),
        RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
            OPEN_ORDERS_OWNER_OFFSET,
            owner.as_ref(),
        )),
    ]
}

/// Find an open orders account of `owner` on `market`.
///
/// When the owner has several, the first one in the order returned by the
/// node is used. Any of them carries the same trading rights.
pub async fn resolve_open_orders(
    connection: &dyn SwapConnection,
    dex_program_id: &Pubkey,
    market: &Pubkey,
    owner: &Pubkey,
) -> Result<OpenOrdersHandle> {
    let accounts = connection
        .get_program_account_keys(dex_program_id, open_orders_filters(market, owner))
        .await?;

    let handle = match accounts.first() {
        Some(open_orders) => OpenOrdersHandle::Existing(*open_orders),
        None => OpenOrdersHandle::Absent,
    };

    log::debug!(
        "Open orders of {} on market {}: {:?} ({} found)",
        owner,
        market,
        handle,
        accounts.len()
    );

    Ok(handle)
}

/// Build the instruction allocating a new open orders account.
///
/// The account is owned by the DEX and initialised by it on first use, so
/// `open_orders` must co-sign the transaction.
pub async fn create_open_orders_account(
    connection: &dyn SwapConnection,
    dex_program_id: &Pubkey,
    payer: &Pubkey,
    open_orders: &Keypair,
) -> Result<Instruction> {
    let lamports = connection
        .get_minimum_balance_for_rent_exemption(OPEN_ORDERS_ACCOUNT_LEN)
        .await?;

    Ok(system_instruction::create_account(
        payer,
        &open_orders.pubkey(),
        lamports,
        OPEN_ORDERS_ACCOUNT_LEN as u64,
        dex_program_id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_orders_filters() {
        let market = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let filters = open_orders_filters(&market, &owner);

        assert_eq!(
            filters,
            vec![
                RpcFilterType::DataSize(3228),
                RpcFilterType::Memcmp(Memcmp::new_base58_encoded(13, market.as_ref())),
                RpcFilterType::Memcmp(Memcmp::new_base58_encoded(45, owner.as_ref())),
            ]
        );
    }
}
