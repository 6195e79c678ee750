use soroban_sdk::{symbol_short, Env, Symbol};

use crate::errors::WalletError;

const LOCK: Symbol = symbol_short!("EXEC_LOCK");

/// Single-acquisition lock held for the whole of `execute`.
///
/// A second `acquire` while the first guard is alive fails immediately
/// with `Reentrancy`. The flag is cleared when the guard drops, on both
/// the success and the error path.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, WalletError> {
        if env.storage().temporary().has(&LOCK) {
            return Err(WalletError::Reentrancy);
        }
        env.storage().temporary().set(&LOCK, &true);
        Ok(Self { env })
    }

    pub fn is_held(env: &Env) -> bool {
        env.storage().temporary().has(&LOCK)
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&LOCK);
    }
}
