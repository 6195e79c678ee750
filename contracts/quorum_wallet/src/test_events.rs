#![cfg(test)]

//! Every successful transition publishes exactly one wallet event. The
//! data payload is a map of the event struct's fields, decoded here into
//! mirror `#[contracttype]` structs.

use soroban_sdk::{
    contracttype,
    testutils::{Address as _, Events},
    token::StellarAssetClient,
    Address, Bytes, Env, Symbol, TryFromVal, Val, Vec,
};

use crate::{QuorumWallet, QuorumWalletClient};

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestDepositReceived {
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestTransactionProposed {
    pub owner: Address,
    pub tx_id: u64,
    pub to: Address,
    pub value: i128,
    pub data: Bytes,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestApprovalChanged {
    pub owner: Address,
    pub tx_id: u64,
    pub approvals: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestTransactionExecuted {
    pub executor: Address,
    pub tx_id: u64,
}

fn setup(env: &Env) -> (QuorumWalletClient<'_>, Vec<Address>, Address) {
    env.mock_all_auths();
    let contract_id = env.register(QuorumWallet, ());
    let client = QuorumWalletClient::new(env, &contract_id);

    let owners = Vec::from_array(env, [Address::generate(env), Address::generate(env)]);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(env))
        .address();
    client.initialize(&owners, &2, &token);
    (client, owners, token)
}

/// Topic and data of the last event emitted by `wallet`.
fn last_wallet_event(env: &Env, wallet: &Address) -> (Symbol, Val) {
    let mut found = None;
    for (emitter, topics, data) in env.events().all().iter() {
        if &emitter == wallet {
            let topic = Symbol::try_from_val(env, &topics.get_unchecked(0))
                .expect("first topic is the event name");
            found = Some((topic, data));
        }
    }
    found.expect("wallet emitted no event")
}

#[test]
fn test_deposit_event() {
    let env = Env::default();
    let (client, _, token) = setup(&env);

    let donor = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&donor, &90);
    client.deposit(&donor, &90);

    let (topic, data) = last_wallet_event(&env, &client.address);
    assert_eq!(topic, Symbol::new(&env, "deposit_received"));
    let decoded = TestDepositReceived::try_from_val(&env, &data).expect("decode deposit");
    assert_eq!(decoded.from, donor);
    assert_eq!(decoded.amount, 90);
    assert_eq!(decoded.balance, 90);
}

#[test]
fn test_proposed_event() {
    let env = Env::default();
    let (client, owners, _) = setup(&env);

    let to = Address::generate(&env);
    let data = Bytes::from_slice(&env, &[9, 9]);
    let tx_id = client.propose(&owners.get_unchecked(1), &to, &12, &data);

    let (topic, payload) = last_wallet_event(&env, &client.address);
    assert_eq!(topic, Symbol::new(&env, "transaction_proposed"));
    let decoded = TestTransactionProposed::try_from_val(&env, &payload).expect("decode proposal");
    assert_eq!(decoded.owner, owners.get_unchecked(1));
    assert_eq!(decoded.tx_id, tx_id);
    assert_eq!(decoded.to, to);
    assert_eq!(decoded.value, 12);
    assert_eq!(decoded.data, data);
}

#[test]
fn test_approval_events_carry_tally() {
    let env = Env::default();
    let (client, owners, _) = setup(&env);

    let tx_id = client.propose(
        &owners.get_unchecked(0),
        &Address::generate(&env),
        &0,
        &Bytes::new(&env),
    );

    client.approve(&owners.get_unchecked(0), &tx_id);
    client.approve(&owners.get_unchecked(1), &tx_id);
    let (topic, data) = last_wallet_event(&env, &client.address);
    assert_eq!(topic, Symbol::new(&env, "approval_recorded"));
    let decoded = TestApprovalChanged::try_from_val(&env, &data).expect("decode approval");
    assert_eq!(decoded.owner, owners.get_unchecked(1));
    assert_eq!(decoded.tx_id, tx_id);
    assert_eq!(decoded.approvals, 2);

    client.revoke(&owners.get_unchecked(0), &tx_id);
    let (topic, data) = last_wallet_event(&env, &client.address);
    assert_eq!(topic, Symbol::new(&env, "approval_revoked"));
    let decoded = TestApprovalChanged::try_from_val(&env, &data).expect("decode revocation");
    assert_eq!(decoded.owner, owners.get_unchecked(0));
    assert_eq!(decoded.approvals, 1);
}

#[test]
fn test_executed_event() {
    let env = Env::default();
    let (client, owners, _) = setup(&env);

    let tx_id = client.propose(
        &owners.get_unchecked(0),
        &Address::generate(&env),
        &0,
        &Bytes::new(&env),
    );
    client.approve(&owners.get_unchecked(0), &tx_id);
    client.approve(&owners.get_unchecked(1), &tx_id);

    let executor = Address::generate(&env);
    client.execute(&executor, &tx_id);

    let (topic, data) = last_wallet_event(&env, &client.address);
    assert_eq!(topic, Symbol::new(&env, "transaction_executed"));
    let decoded = TestTransactionExecuted::try_from_val(&env, &data).expect("decode execution");
    assert_eq!(decoded.executor, executor);
    assert_eq!(decoded.tx_id, tx_id);
}
