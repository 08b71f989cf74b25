#![cfg(test)]

mod support;

use soroban_sdk::{testutils::Address as _, testutils::Ledger, Address, Env};
use support::{MockTokenContract, MockTokenContractClient};
use vesting_engine::{VestingEngineContract, VestingEngineContractClient, VestingError};

const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;

fn setup(env: &Env) -> (VestingEngineContractClient<'static>, Address, Address) {
    env.mock_all_auths();
    let admin = Address::generate(env);
    let creator = Address::generate(env);
    let token_admin = Address::generate(env);
    let token_id = env.register_contract(None, MockTokenContract);
    let token = MockTokenContractClient::new(env, &token_id);
    token.initialize(&token_admin, &18);

    let engine_id = env.register_contract(None, VestingEngineContract);
    let engine = VestingEngineContractClient::new(env, &engine_id);
    engine.initialize(&admin, &token_id, &creator);
    token.mint(&engine_id, &(1_000 * ONE_TOKEN));

    (engine, admin, creator)
}

#[test]
fn non_creator_cannot_create_schedule() {
    let env = Env::default();
    let (engine, _admin, _creator) = setup(&env);
    let intruder = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let start = env.ledger().timestamp();

    let result = engine.try_create_schedule(
        &intruder, &beneficiary, &start, &0, &(7 * 86_400), &1, &true, &ONE_TOKEN,
    );
    assert_eq!(result, Err(Ok(VestingError::Unauthorized)));
}

#[test]
fn granted_schedule_creator_can_then_create() {
    let env = Env::default();
    let (engine, admin, _creator) = setup(&env);
    let grantee = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let start = env.ledger().timestamp();

    engine.grant_schedule_creator(&admin, &grantee);
    let id = engine.create_schedule(&grantee, &beneficiary, &start, &0, &(7 * 86_400), &1, &true, &ONE_TOKEN);
    assert_eq!(engine.get_schedule(&id).beneficiary, beneficiary);

    engine.revoke_schedule_creator(&admin, &grantee);
    let result = engine.try_create_schedule(
        &grantee, &beneficiary, &start, &0, &(7 * 86_400), &1, &true, &ONE_TOKEN,
    );
    assert_eq!(result, Err(Ok(VestingError::Unauthorized)));
}

#[test]
fn only_beneficiary_or_admin_can_release() {
    let env = Env::default();
    let (engine, admin, creator) = setup(&env);
    let beneficiary = Address::generate(&env);
    let stranger = Address::generate(&env);
    let start = env.ledger().timestamp();

    let id = engine.create_schedule(&creator, &beneficiary, &start, &0, &(7 * 86_400), &1, &true, &ONE_TOKEN);
    env.ledger().with_mut(|li| li.timestamp = start + 7 * 86_400 + 1);

    let result = engine.try_release(&stranger, &id, &1);
    assert_eq!(result, Err(Ok(VestingError::Unauthorized)));

    // Admin can release on the beneficiary's behalf.
    engine.release(&admin, &id, &ONE_TOKEN);
}

#[test]
fn paused_contract_rejects_create_and_claim_paths() {
    let env = Env::default();
    let (engine, admin, creator) = setup(&env);
    let beneficiary = Address::generate(&env);
    let start = env.ledger().timestamp();

    engine.set_paused(&admin, &true);
    assert!(engine.is_paused());

    let result = engine.try_create_schedule(
        &creator, &beneficiary, &start, &0, &(7 * 86_400), &1, &true, &ONE_TOKEN,
    );
    assert_eq!(result, Err(Ok(VestingError::Paused)));

    engine.set_paused(&admin, &false);
    assert!(!engine.is_paused());
    let id = engine.create_schedule(&creator, &beneficiary, &start, &0, &(7 * 86_400), &1, &true, &ONE_TOKEN);
    assert_eq!(engine.get_schedule(&id).beneficiary, beneficiary);
}

#[test]
fn two_step_admin_handover() {
    let env = Env::default();
    let (engine, admin, _creator) = setup(&env);
    let nominee = Address::generate(&env);
    let impostor = Address::generate(&env);

    assert_eq!(engine.pending_admin(), None);
    engine.begin_admin_handover(&admin, &nominee);
    assert_eq!(engine.pending_admin(), Some(nominee.clone()));

    let result = engine.try_accept_admin_handover(&impostor);
    assert_eq!(result, Err(Ok(VestingError::AdminTransferFailed)));
    assert_eq!(engine.admin(), admin);

    engine.accept_admin_handover(&nominee);
    assert_eq!(engine.admin(), nominee);
    assert_eq!(engine.pending_admin(), None);

    // Old admin has lost its authority.
    let result = engine.try_set_paused(&admin, &true);
    assert_eq!(result, Err(Ok(VestingError::Unauthorized)));
}

#[test]
fn cancelled_handover_leaves_admin_unchanged() {
    let env = Env::default();
    let (engine, admin, _creator) = setup(&env);
    let nominee = Address::generate(&env);

    engine.begin_admin_handover(&admin, &nominee);
    engine.cancel_admin_handover(&admin);

    let result = engine.try_accept_admin_handover(&nominee);
    assert_eq!(result, Err(Ok(VestingError::AdminTransferFailed)));
    assert_eq!(engine.admin(), admin);
}

#[test]
fn revoke_requires_admin_and_revokable_flag() {
    let env = Env::default();
    let (engine, admin, creator) = setup(&env);
    let beneficiary = Address::generate(&env);
    let start = env.ledger().timestamp();

    let id = engine.create_schedule(&creator, &beneficiary, &start, &0, &(7 * 86_400), &1, &false, &ONE_TOKEN);

    let result = engine.try_revoke(&beneficiary, &id);
    assert_eq!(result, Err(Ok(VestingError::Unauthorized)));

    let result = engine.try_revoke(&admin, &id);
    assert_eq!(result, Err(Ok(VestingError::NotRevokable)));
}

#[test]
fn withdraw_never_touches_committed_principal() {
    let env = Env::default();
    let (engine, admin, creator) = setup(&env);
    let beneficiary = Address::generate(&env);
    let start = env.ledger().timestamp();

    engine.create_schedule(&creator, &beneficiary, &start, &0, &(7 * 86_400), &1, &true, &ONE_TOKEN);
    assert_eq!(engine.withdrawable(), 999 * ONE_TOKEN);

    let result = engine.try_withdraw(&admin, &(1_000 * ONE_TOKEN));
    assert_eq!(result, Err(Ok(VestingError::InsufficientTokensInContract)));

    engine.withdraw(&admin, &(999 * ONE_TOKEN));
    assert_eq!(engine.withdrawable(), 0);
}
