//! Wallet events.
//!
//! One `#[contractevent]` struct per successful state transition. The
//! macro turns the snake_case struct name into the event topic and packs
//! every field into the data map, so indexers key on e.g.
//! `approval_recorded` and read `owner`/`tx_id`/`approvals` from the body.

use soroban_sdk::{contractevent, Address, Bytes, Env};

/// Funds arrived in the wallet. `balance` is the wallet's token balance
/// after the transfer.
#[contractevent]
#[derive(Clone, Debug)]
pub struct DepositReceived {
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

/// An owner filed a new transaction. `to` is the call destination, which
/// need not be `owner`.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionProposed {
    pub owner: Address,
    pub tx_id: u64,
    pub to: Address,
    pub value: i128,
    pub data: Bytes,
}

/// `approvals` is the tally after this approval.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ApprovalRecorded {
    pub owner: Address,
    pub tx_id: u64,
    pub approvals: u32,
}

/// `approvals` is the tally after this revocation.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ApprovalRevoked {
    pub owner: Address,
    pub tx_id: u64,
    pub approvals: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionExecuted {
    pub executor: Address,
    pub tx_id: u64,
}

pub fn emit_deposit(e: &Env, event: DepositReceived) {
    event.publish(e);
}

pub fn emit_proposed(e: &Env, event: TransactionProposed) {
    event.publish(e);
}

pub fn emit_approved(e: &Env, event: ApprovalRecorded) {
    event.publish(e);
}

pub fn emit_revoked(e: &Env, event: ApprovalRevoked) {
    event.publish(e);
}

/// Call only after the external call has succeeded.
pub fn emit_executed(e: &Env, event: TransactionExecuted) {
    event.publish(e);
}
