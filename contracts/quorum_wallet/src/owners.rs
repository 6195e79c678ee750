//! Owner registry: the fixed owner set and the approval threshold.
//!
//! Written once by `initialize`, read-only afterwards.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

/// Checks a candidate owner set and threshold before anything is stored.
pub fn validate(owners: &Vec<Address>, required: u32) -> Result<(), WalletError> {
    if owners.is_empty() {
        return Err(WalletError::NotEnoughOwners);
    }

    if required == 0 || required > owners.len() {
        return Err(WalletError::InvalidRequiredApprovals);
    }

    for i in 0..owners.len() {
        for j in (i + 1)..owners.len() {
            if owners.get_unchecked(i) == owners.get_unchecked(j) {
                return Err(WalletError::OwnerNotUnique);
            }
        }
    }

    Ok(())
}

pub fn store(env: &Env, owners: &Vec<Address>, required: u32) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Owners, owners);
    storage.set(&DataKey::Required, &required);
    for owner in owners.iter() {
        storage.set(&DataKey::Owner(owner), &true);
    }
}

pub fn is_owner(env: &Env, who: &Address) -> bool {
    env.storage().instance().has(&DataKey::Owner(who.clone()))
}

pub fn require_owner(env: &Env, who: &Address) -> Result<(), WalletError> {
    if !is_owner(env, who) {
        return Err(WalletError::NotOwner);
    }
    Ok(())
}

pub fn owners(env: &Env) -> Result<Vec<Address>, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .ok_or(WalletError::NotInitialized)
}

pub fn required(env: &Env) -> Result<u32, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Required)
        .ok_or(WalletError::NotInitialized)
}
