use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env, Vec};

use crate::approvals;
use crate::dispatch;
use crate::errors::WalletError;
use crate::events::{
    emit_approved, emit_deposit, emit_executed, emit_proposed, emit_revoked, ApprovalRecorded,
    ApprovalRevoked, DepositReceived, TransactionExecuted, TransactionProposed,
};
use crate::owners;
use crate::reentrancy::ReentrancyGuard;
use crate::transactions;
use crate::types::{DataKey, Transaction};

#[contract]
pub struct QuorumWallet;

#[contractimpl]
impl QuorumWallet {
    /// Fixes the owner set, the approval threshold and the token the
    /// wallet holds. Callable once.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required: u32,
        token: Address,
    ) -> Result<(), WalletError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::AlreadyInitialized);
        }

        owners::validate(&owners, required)?;

        owners::store(&env, &owners, required);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::TxCount, &0u64);
        env.storage().instance().set(&DataKey::Initialized, &true);

        log!(&env, "initialize owners={} required={}", owners.len(), required);
        Ok(())
    }

    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount < 0 {
            return Err(WalletError::InvalidAmount);
        }

        let token_client = token::TokenClient::new(&env, &Self::token_address(&env)?);
        let wallet = env.current_contract_address();
        if amount > 0 {
            token_client.transfer(&from, &wallet, &amount);
        }
        let balance = token_client.balance(&wallet);

        emit_deposit(
            &env,
            DepositReceived {
                from: from.clone(),
                amount,
                balance,
            },
        );
        log!(&env, "deposit from={} amount={}", from, amount);
        Ok(())
    }

    /// Files a transaction sending `value` and `data` to `to`. Any owner
    /// may propose a call to any destination.
    pub fn propose(
        env: Env,
        owner: Address,
        to: Address,
        value: i128,
        data: Bytes,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;

        if value < 0 {
            return Err(WalletError::InvalidAmount);
        }

        let tx_id = transactions::append(&env, owner.clone(), to.clone(), value, data.clone());

        emit_proposed(
            &env,
            TransactionProposed {
                owner: owner.clone(),
                tx_id,
                to,
                value,
                data,
            },
        );
        log!(&env, "propose tx={} owner={}", tx_id, owner);
        Ok(tx_id)
    }

    pub fn approve(env: Env, owner: Address, tx_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;
        let tx = transactions::load(&env, tx_id)?;
        transactions::require_pending(&tx)?;
        approvals::require_not_approved(&env, tx_id, &owner)?;

        let approvals = approvals::record(&env, tx_id, &owner);

        emit_approved(
            &env,
            ApprovalRecorded {
                owner: owner.clone(),
                tx_id,
                approvals,
            },
        );
        log!(&env, "approve tx={} owner={} approvals={}", tx_id, owner, approvals);
        Ok(())
    }

    pub fn revoke(env: Env, owner: Address, tx_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;
        let tx = transactions::load(&env, tx_id)?;
        transactions::require_pending(&tx)?;
        approvals::require_approved(&env, tx_id, &owner)?;

        let approvals = approvals::clear(&env, tx_id, &owner);

        emit_revoked(
            &env,
            ApprovalRevoked {
                owner: owner.clone(),
                tx_id,
                approvals,
            },
        );
        log!(&env, "revoke tx={} owner={} approvals={}", tx_id, owner, approvals);
        Ok(())
    }

    /// Runs a transaction that has reached quorum. Anyone may trigger it.
    ///
    /// The executed flag is written before the outbound call so a nested
    /// attempt on the same transaction sees it as done, and the wallet-wide
    /// lock rejects any nested `execute` at all. If the destination fails,
    /// the flag is put back and the transaction stays pending.
    pub fn execute(env: Env, executor: Address, tx_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        executor.require_auth();

        let mut tx = transactions::load(&env, tx_id)?;
        transactions::require_pending(&tx)?;
        approvals::require_quorum(&env, tx_id, owners::required(&env)?)?;

        transactions::set_executed(&env, tx_id, &mut tx, true);

        let token = Self::token_address(&env)?;
        if !dispatch::invoke(&env, &token, &tx.to, tx.value, &tx.data) {
            transactions::set_executed(&env, tx_id, &mut tx, false);
            log!(&env, "execute tx={} external call failed", tx_id);
            return Err(WalletError::ExternalCallFailed);
        }

        emit_executed(
            &env,
            TransactionExecuted {
                executor: executor.clone(),
                tx_id,
            },
        );
        log!(&env, "execute tx={} executor={}", tx_id, executor);
        Ok(())
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, WalletError> {
        owners::owners(&env)
    }

    pub fn is_owner(env: Env, who: Address) -> bool {
        owners::is_owner(&env, &who)
    }

    pub fn required(env: Env) -> Result<u32, WalletError> {
        owners::required(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, WalletError> {
        Self::token_address(&env)
    }

    pub fn balance(env: Env) -> Result<i128, WalletError> {
        let token_client = token::TokenClient::new(&env, &Self::token_address(&env)?);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    pub fn get_transaction_count(env: Env) -> u64 {
        transactions::count(&env)
    }

    pub fn transaction_exists(env: Env, tx_id: u64) -> bool {
        transactions::exists(&env, tx_id)
    }

    pub fn get_transaction(env: Env, tx_id: u64) -> Result<Transaction, WalletError> {
        transactions::load(&env, tx_id)
    }

    pub fn approval_count(env: Env, tx_id: u64) -> Result<u32, WalletError> {
        if !transactions::exists(&env, tx_id) {
            return Err(WalletError::TxNotFound);
        }
        Ok(approvals::count(&env, tx_id))
    }

    pub fn is_approved(env: Env, tx_id: u64, owner: Address) -> bool {
        approvals::has_approved(&env, tx_id, &owner)
    }

    fn require_initialized(env: &Env) -> Result<(), WalletError> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::NotInitialized);
        }
        Ok(())
    }

    fn token_address(env: &Env) -> Result<Address, WalletError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(WalletError::NotInitialized)
    }
}
