//! Persisted state layout (spec §6).
//!
//! Every field the spec's logical persisted-state table names has a
//! `DataKey` variant here. Scalars that exist once per instance live under
//! `instance()` storage; per-beneficiary and per-schedule data lives under
//! `persistent()` storage, keyed by the variant's payload.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Fingerprint, Schedule, ScheduleId};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// `bool` — set once by `initialize`, guards re-initialization.
    Initialized,
    /// `Address` — the bound underlying token adapter, immutable.
    UnderlyingToken,
    /// `Address` — current admin.
    Admin,
    /// `Address` — pending admin nominee from `begin_admin_handover`, if any.
    PendingAdmin,
    /// set of `Address` holding `ScheduleCreator`, stored as `Vec<Address>`.
    ScheduleCreators,
    /// `bool` — pause flag.
    Paused,
    /// `bool` — reentrancy lock.
    ReentrancyLock,
    /// `i128` — `committed_total`, the virtual token total supply.
    CommittedTotal,
    /// `i128` — `committed_by[beneficiary]`, the virtual balance.
    CommittedBy(Address),
    /// `u64` — per-beneficiary schedule counter.
    BeneficiaryCount(Address),
    /// `Schedule` — keyed by `keccak256(beneficiary ‖ index)`.
    Schedule(ScheduleId),
    /// `bool` — whether the Merkle claim gate capability is enabled.
    MerkleGateEnabled,
    /// `BytesN<32>` — current Merkle root.
    MerkleRoot,
    /// presence-only — claimed-fingerprint registry membership.
    Claimed(Fingerprint),
    /// `bool` — whether the purchasable capability is enabled.
    PurchasingEnabled,
    /// `Address` — payment token adapter (purchasable capability).
    PaymentToken,
    /// `Address` — payment sink (purchasable capability).
    PaymentReceiver,
    /// `i128` — price per vested token unit, scaled by `10^18` (`vTokenCost`).
    VTokenCost,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn underlying_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::UnderlyingToken)
        .expect("underlying token not set")
}

pub fn set_underlying_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::UnderlyingToken, token);
}

pub fn admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).expect("admin not set")
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingAdmin)
}

pub fn set_pending_admin(env: &Env, nominee: Option<&Address>) {
    match nominee {
        Some(a) => env.storage().instance().set(&DataKey::PendingAdmin, a),
        None => env.storage().instance().remove(&DataKey::PendingAdmin),
    }
}

pub fn schedule_creators(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::ScheduleCreators)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_schedule_creators(env: &Env, creators: &Vec<Address>) {
    env.storage().instance().set(&DataKey::ScheduleCreators, creators);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn reentrancy_locked(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::ReentrancyLock).unwrap_or(false)
}

pub fn set_reentrancy_lock(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::ReentrancyLock, &locked);
}

pub fn committed_total(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::CommittedTotal).unwrap_or(0)
}

pub fn set_committed_total(env: &Env, value: i128) {
    env.storage().instance().set(&DataKey::CommittedTotal, &value);
}

pub fn committed_by(env: &Env, beneficiary: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::CommittedBy(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_committed_by(env: &Env, beneficiary: &Address, value: i128) {
    let key = DataKey::CommittedBy(beneficiary.clone());
    if value == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &value);
    }
}

pub fn beneficiary_count(env: &Env, beneficiary: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::BeneficiaryCount(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_beneficiary_count(env: &Env, beneficiary: &Address, value: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::BeneficiaryCount(beneficiary.clone()), &value);
}

pub fn get_schedule(env: &Env, id: &ScheduleId) -> Option<Schedule> {
    env.storage().persistent().get(&DataKey::Schedule(id.clone()))
}

pub fn set_schedule(env: &Env, id: &ScheduleId, schedule: &Schedule) {
    env.storage()
        .persistent()
        .set(&DataKey::Schedule(id.clone()), schedule);
}

pub fn merkle_gate_enabled(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::MerkleGateEnabled).unwrap_or(false)
}

pub fn set_merkle_gate_enabled(env: &Env) {
    env.storage().instance().set(&DataKey::MerkleGateEnabled, &true);
}

pub fn merkle_root(env: &Env) -> Option<soroban_sdk::BytesN<32>> {
    env.storage().instance().get(&DataKey::MerkleRoot)
}

pub fn set_merkle_root(env: &Env, root: &soroban_sdk::BytesN<32>) {
    env.storage().instance().set(&DataKey::MerkleRoot, root);
}

pub fn is_claimed(env: &Env, fingerprint: &Fingerprint) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Claimed(fingerprint.clone()))
        .unwrap_or(false)
}

pub fn set_claimed(env: &Env, fingerprint: &Fingerprint) {
    env.storage()
        .persistent()
        .set(&DataKey::Claimed(fingerprint.clone()), &true);
}

pub fn purchasing_enabled(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::PurchasingEnabled).unwrap_or(false)
}

pub fn set_purchasing_enabled(env: &Env) {
    env.storage().instance().set(&DataKey::PurchasingEnabled, &true);
}

pub fn payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn payment_receiver(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentReceiver)
}

pub fn set_payment_receiver(env: &Env, receiver: &Address) {
    env.storage().instance().set(&DataKey::PaymentReceiver, receiver);
}

pub fn v_token_cost(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::VTokenCost).unwrap_or(0)
}

pub fn set_v_token_cost(env: &Env, cost: i128) {
    env.storage().instance().set(&DataKey::VTokenCost, &cost);
}
