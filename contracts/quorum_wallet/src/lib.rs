#![no_std]

//! Quorum-controlled wallet.
//!
//! A fixed set of owners holds a token balance together. Any owner may
//! propose a transaction (destination, value, payload); it runs once
//! `required` distinct owners have approved it, exactly once, under a
//! wallet-wide reentrancy lock.

mod approvals;
mod dispatch;
mod errors;
mod events;
mod owners;
mod reentrancy;
mod transactions;
mod types;
mod wallet;

pub use dispatch::{CallTarget, CallTargetClient};
pub use errors::WalletError;
pub use events::{
    ApprovalRecorded, ApprovalRevoked, DepositReceived, TransactionExecuted, TransactionProposed,
};
pub use types::Transaction;
pub use wallet::{QuorumWallet, QuorumWalletClient};

#[cfg(test)]
mod test_events;
