//! Transaction ledger: append-only, 0-based ids.

use soroban_sdk::{Address, Bytes, Env};

use crate::errors::WalletError;
use crate::types::{DataKey, Transaction};

pub fn count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::TxCount).unwrap_or(0u64)
}

pub fn exists(env: &Env, tx_id: u64) -> bool {
    tx_id < count(env)
}

/// Appends a pending transaction and returns its id.
pub fn append(env: &Env, proposer: Address, to: Address, value: i128, data: Bytes) -> u64 {
    let tx_id = count(env);
    env.storage().instance().set(&DataKey::TxCount, &(tx_id + 1));

    let tx = Transaction {
        proposer,
        to,
        value,
        data,
        executed: false,
    };
    env.storage()
        .persistent()
        .set(&DataKey::Transaction(tx_id), &tx);
    env.storage()
        .persistent()
        .set(&DataKey::ApprovalCount(tx_id), &0u32);

    tx_id
}

pub fn load(env: &Env, tx_id: u64) -> Result<Transaction, WalletError> {
    if !exists(env, tx_id) {
        return Err(WalletError::TxNotFound);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(tx_id))
        .ok_or(WalletError::TxNotFound)
}

pub fn require_pending(tx: &Transaction) -> Result<(), WalletError> {
    if tx.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    Ok(())
}

pub fn set_executed(env: &Env, tx_id: u64, tx: &mut Transaction, executed: bool) {
    tx.executed = executed;
    env.storage()
        .persistent()
        .set(&DataKey::Transaction(tx_id), tx);
}
