//! Read-only query surface (spec §4.I). No mutation, no reentrancy
//! concern. Reading a non-existent id yields `Schedule::sentinel` — the
//! in-band `duration == 0` marker — rather than `None`, matching the
//! spec's always-present read surface.

use soroban_sdk::{Address, Env};

use crate::math;
use crate::merkle;
use crate::storage;
use crate::types::{Schedule, ScheduleId};

pub fn get_schedule(env: &Env, id: ScheduleId) -> Schedule {
    storage::get_schedule(env, &id).unwrap_or_else(|| Schedule::sentinel(env))
}

pub fn get_schedule_by_index(env: &Env, beneficiary: Address, index: u64) -> Schedule {
    let id = merkle::schedule_id(env, &beneficiary, index);
    storage::get_schedule(env, &id).unwrap_or_else(|| Schedule::sentinel(env))
}

pub fn releasable_of(env: &Env, id: ScheduleId) -> i128 {
    match storage::get_schedule(env, &id) {
        Some(s) if s.exists() => math::releasable(&s, env.ledger().timestamp()),
        _ => 0,
    }
}

pub fn schedule_count(env: &Env, beneficiary: Address) -> u64 {
    storage::beneficiary_count(env, &beneficiary)
}
