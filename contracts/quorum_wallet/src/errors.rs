use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotEnoughOwners = 3,
    InvalidRequiredApprovals = 4,
    OwnerNotUnique = 5,
    NotOwner = 6,
    TxNotFound = 7,
    AlreadyApproved = 8,
    AlreadyExecuted = 9,
    NotApproved = 10,
    /// Approval count is below the threshold. The required and actual
    /// counts are written to the contract log.
    NotEnoughApprovals = 11,
    /// The destination rejected the transfer or the call.
    ExternalCallFailed = 12,
    /// An execution is already in flight on this wallet.
    Reentrancy = 13,
    InvalidAmount = 14,
}
