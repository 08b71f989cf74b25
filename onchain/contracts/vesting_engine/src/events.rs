//! Observable side-channels (spec §6). This is the platform's structured
//! "logging" primitive — there is no stdout inside a WASM host, so domain
//! events double as both the off-chain-indexable record the spec requires
//! and the engineering-visible log trail a `tracing` subscriber would give
//! a host binary.

use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::types::ScheduleId;

pub fn schedule_created(env: &Env, id: &ScheduleId, beneficiary: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("create"), beneficiary.clone()), (id.clone(), amount));
    mint(env, beneficiary, amount);
}

pub fn released(env: &Env, id: &ScheduleId, beneficiary: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("release"), beneficiary.clone()), (id.clone(), amount));
    burn(env, beneficiary, amount);
}

pub fn revoked(env: &Env, id: &ScheduleId, beneficiary: &Address, refunded: i128) {
    env.events()
        .publish((symbol_short!("revoke"), beneficiary.clone()), (id.clone(), refunded));
    burn(env, beneficiary, refunded);
}

pub fn claimed(env: &Env, beneficiary: &Address, fingerprint: &BytesN<32>) {
    env.events()
        .publish((symbol_short!("claim"), beneficiary.clone()), fingerprint.clone());
}

pub fn root_rotated(env: &Env, new_root: &BytesN<32>) {
    env.events().publish((symbol_short!("root_rot"),), new_root.clone());
}

pub fn withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events().publish((symbol_short!("withdraw"), to.clone()), amount);
}

/// Pseudo-transfer with the zero counterpart on mint, so off-chain indexers
/// can track virtual supply the same way they track a real token's
/// `Transfer` events (spec §6). Soroban's `Address` has no zero value; the
/// contract's own address stands in, matching `Schedule::sentinel`.
fn mint(env: &Env, to: &Address, amount: i128) {
    let zero = env.current_contract_address();
    env.events()
        .publish((symbol_short!("vtransfer"), zero, to.clone()), amount);
}

fn burn(env: &Env, from: &Address, amount: i128) {
    let zero = env.current_contract_address();
    env.events()
        .publish((symbol_short!("vtransfer"), from.clone(), zero), amount);
}
