//! Outbound call capability used by `execute`.
//!
//! Nothing here panics on a destination failure; every failure mode of the
//! token transfer or the cross-contract call collapses to `false` so the
//! caller decides how to unwind.

use soroban_sdk::{contractclient, log, token, Address, Bytes, Env};

/// Interface a contract implements to receive payload-carrying calls from
/// a wallet. `wallet` is the calling wallet's address and `value` the
/// amount already transferred to the receiver for this call. Returning
/// `false` fails the execution.
#[contractclient(name = "CallTargetClient")]
pub trait CallTarget {
    fn on_execute(env: Env, wallet: Address, value: i128, data: Bytes) -> bool;
}

/// Sends `value` of the wallet token to `destination`, then hands it
/// `payload` if there is one.
pub fn invoke(
    env: &Env,
    token: &Address,
    destination: &Address,
    value: i128,
    payload: &Bytes,
) -> bool {
    let wallet = env.current_contract_address();

    if value > 0 {
        let token_client = token::TokenClient::new(env, token);
        if !matches!(
            token_client.try_transfer(&wallet, destination, &value),
            Ok(Ok(()))
        ) {
            log!(env, "transfer to {} of {} failed", destination.clone(), value);
            return false;
        }
    }

    if payload.is_empty() {
        return true;
    }

    let target = CallTargetClient::new(env, destination);
    let accepted = matches!(
        target.try_on_execute(&wallet, &value, payload),
        Ok(Ok(true))
    );
    if !accepted {
        log!(env, "call to {} was rejected", destination.clone());
    }
    accepted
}
