//! Approval ledger.
//!
//! Each transaction keeps a per-owner flag plus a running tally. The tally
//! is only ever moved by one in `record`/`clear`, right next to the flag it
//! mirrors, so quorum checks are a single storage read.

use soroban_sdk::{log, Address, Env};

use crate::errors::WalletError;
use crate::types::DataKey;

pub fn has_approved(env: &Env, tx_id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Approved(tx_id, owner.clone()))
        .unwrap_or(false)
}

pub fn count(env: &Env, tx_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ApprovalCount(tx_id))
        .unwrap_or(0u32)
}

pub fn require_not_approved(env: &Env, tx_id: u64, owner: &Address) -> Result<(), WalletError> {
    if has_approved(env, tx_id, owner) {
        return Err(WalletError::AlreadyApproved);
    }
    Ok(())
}

pub fn require_approved(env: &Env, tx_id: u64, owner: &Address) -> Result<(), WalletError> {
    if !has_approved(env, tx_id, owner) {
        return Err(WalletError::NotApproved);
    }
    Ok(())
}

pub fn require_quorum(env: &Env, tx_id: u64, required: u32) -> Result<(), WalletError> {
    let actual = count(env, tx_id);
    if actual < required {
        log!(
            env,
            "quorum not met tx={} required={} actual={}",
            tx_id,
            required,
            actual
        );
        return Err(WalletError::NotEnoughApprovals);
    }
    Ok(())
}

/// Marks `owner` as approving `tx_id` and returns the new tally.
/// Callers must have checked `require_not_approved` first.
pub fn record(env: &Env, tx_id: u64, owner: &Address) -> u32 {
    let approvals = count(env, tx_id) + 1;
    env.storage()
        .persistent()
        .set(&DataKey::Approved(tx_id, owner.clone()), &true);
    env.storage()
        .persistent()
        .set(&DataKey::ApprovalCount(tx_id), &approvals);
    approvals
}

/// Withdraws `owner`'s approval of `tx_id` and returns the new tally.
/// Callers must have checked `require_approved` first.
pub fn clear(env: &Env, tx_id: u64, owner: &Address) -> u32 {
    let approvals = count(env, tx_id) - 1;
    env.storage()
        .persistent()
        .remove(&DataKey::Approved(tx_id, owner.clone()));
    env.storage()
        .persistent()
        .set(&DataKey::ApprovalCount(tx_id), &approvals);
    approvals
}
