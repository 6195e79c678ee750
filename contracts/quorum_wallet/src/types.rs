use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    Owner(Address),
    Required,
    Token,
    TxCount,
    Transaction(u64),
    Approved(u64, Address),
    ApprovalCount(u64),
}

/// A proposed call out of the wallet.
///
/// `proposer` is the owner who filed it; `to` is the destination the
/// value and payload are sent to. Only `executed` ever changes after the
/// record is created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub proposer: Address,
    pub to: Address,
    pub value: i128,
    pub data: Bytes,
    pub executed: bool,
}
