//! Program derived addresses used by swaps.

use solana_sdk::pubkey::{Pubkey, PubkeyError};

use crate::{
    constants::VAULT_AUTHORITY_MAX_NONCE,
    error::{Result, SwapError},
};

/// Signer of a market's base and quote vaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAuthority {
    pub address: Pubkey,
    pub nonce: u64,
}

/// Derive the vault authority of a DEX market.
///
/// Seeds: `[market, nonce as u64 LE]`. Nonces are tried in increasing order
/// from 0 through [`VAULT_AUTHORITY_MAX_NONCE`] and the first one producing an
/// off-curve address wins.
pub fn derive_vault_authority(market: &Pubkey, program_id: &Pubkey) -> Result<VaultAuthority> {
    search_vault_authority(market, program_id, Pubkey::create_program_address)
}

fn search_vault_authority<F>(market: &Pubkey, program_id: &Pubkey, derive: F) -> Result<VaultAuthority>
where
    F: Fn(&[&[u8]], &Pubkey) -> std::result::Result<Pubkey, PubkeyError>,
{
    for nonce in 0..=VAULT_AUTHORITY_MAX_NONCE {
        if let Ok(address) = derive(&[market.as_ref(), &nonce.to_le_bytes()], program_id) {
            return Ok(VaultAuthority { address, nonce });
        }
    }

    Err(SwapError::AddressDerivationExhausted {
        market: *market,
        program_id: *program_id,
    })
}

/// Derive the associated token account of `owner` for `mint`.
///
/// Seeds: `[owner, token_program, mint]` under the associated token program.
pub fn derive_associated_token_address(
    associated_program_id: &Pubkey,
    token_program_id: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Pubkey> {
    Pubkey::try_find_program_address(
        &[owner.as_ref(), token_program_id.as_ref(), mint.as_ref()],
        associated_program_id,
    )
    .map(|(address, _)| address)
    .ok_or_else(|| {
        SwapError::UnresolvedWallet(format!("no associated token account of {owner} for {mint}"))
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use assert_matches::assert_matches;
    use spl_associated_token_account::get_associated_token_address_with_program_id;

    use super::*;

    #[test]
    fn test_vault_authority_is_valid_program_address() {
        let market = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let authority = derive_vault_authority(&market, &program_id).unwrap();

        let expected = Pubkey::create_program_address(
            &[market.as_ref(), &authority.nonce.to_le_bytes()],
            &program_id,
        )
        .unwrap();
        assert_eq!(authority.address, expected);
        assert!(!authority.address.is_on_curve());
    }

    #[test]
    fn test_vault_authority_takes_first_valid_nonce() {
        let market = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let authority = derive_vault_authority(&market, &program_id).unwrap();

        for nonce in 0..authority.nonce {
            assert!(
                Pubkey::create_program_address(&[market.as_ref(), &nonce.to_le_bytes()], &program_id)
                    .is_err()
            );
        }
    }

    #[test]
    fn test_vault_authority_search_order() {
        let market = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let tried = RefCell::new(vec![]);
        let found = Pubkey::new_unique();

        let authority = search_vault_authority(&market, &program_id, |seeds, _| {
            let nonce = u64::from_le_bytes(seeds[1].try_into().unwrap());
            tried.borrow_mut().push(nonce);
            if nonce == 7 {
                Ok(found)
            } else {
                Err(PubkeyError::InvalidSeeds)
            }
        })
        .unwrap();

        assert_eq!(authority, VaultAuthority { address: found, nonce: 7 });
        assert_eq!(*tried.borrow(), (0..=7).collect::<Vec<u64>>());
    }

    #[test]
    fn test_vault_authority_exhausted() {
        let market = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let attempts = RefCell::new(0u64);

        let result = search_vault_authority(&market, &program_id, |_, _| {
            *attempts.borrow_mut() += 1;
            Err(PubkeyError::InvalidSeeds)
        });

        assert_matches!(
            result,
            Err(SwapError::AddressDerivationExhausted { market: m, program_id: p })
                if m == market && p == program_id
        );
        assert_eq!(*attempts.borrow(), 255);
    }

    #[test]
    fn test_associated_token_address_matches_spl() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let address = derive_associated_token_address(
            &spl_associated_token_account::ID,
            &spl_token::ID,
            &mint,
            &owner,
        )
        .unwrap();

        assert_eq!(
            address,
            get_associated_token_address_with_program_id(&owner, &mint, &spl_token::ID)
        );
    }

    #[test]
    fn test_associated_token_address_is_deterministic() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let derive = || {
            derive_associated_token_address(
                &spl_associated_token_account::ID,
                &spl_token::ID,
                &mint,
                &owner,
            )
            .unwrap()
        };

        assert_eq!(derive(), derive());
        assert_ne!(
            derive(),
            derive_associated_token_address(
                &spl_associated_token_account::ID,
                &spl_token::ID,
                &Pubkey::new_unique(),
                &owner,
            )
            .unwrap()
        );
    }
}
