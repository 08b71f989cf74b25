//! Schedule lifecycle: create / release / revoke / withdraw (spec §4.F).
//! Every value-moving operation here runs under a reentrancy guard and
//! performs the outbound token transfer only after all state mutation
//! (checks-effects-interactions), per spec §4.C and §5.

use soroban_sdk::{token, Address, Env};

use crate::access::{self, ReentrancyGuard};
use crate::error::VestingError;
use crate::events;
use crate::math;
use crate::merkle;
use crate::storage;
use crate::types::{
    Schedule, ScheduleId, ScheduleStatus, MAX_DURATION_SECONDS, MAX_RELEASE_ALL_SCHEDULES,
    MAX_START_LEAD_SECONDS, MAX_SLICE_SECONDS, MIN_DURATION_SECONDS, MIN_SLICE_SECONDS,
};

fn underlying_balance(env: &Env) -> i128 {
    let client = token::Client::new(env, &storage::underlying_token(env));
    client.balance(&env.current_contract_address())
}

/// `withdrawable = underlying_balance(self) - committed_total` (spec §4.F
/// / glossary).
pub fn withdrawable(env: &Env) -> i128 {
    underlying_balance(env) - storage::committed_total(env)
}

fn validate_tuple(
    env: &Env,
    start: u64,
    cliff_offset: u64,
    duration: u64,
    slice_seconds: u32,
    amount: i128,
) -> Result<(), VestingError> {
    if amount <= 0 {
        return Err(VestingError::InvalidAmount);
    }
    if duration < MIN_DURATION_SECONDS || duration > MAX_DURATION_SECONDS {
        return Err(VestingError::InvalidDuration);
    }
    if slice_seconds < MIN_SLICE_SECONDS || slice_seconds > MAX_SLICE_SECONDS {
        return Err(VestingError::InvalidSlicePeriod);
    }
    if cliff_offset > duration {
        return Err(VestingError::DurationShorterThanCliff);
    }
    let now = env.ledger().timestamp();
    if start > now + MAX_START_LEAD_SECONDS {
        return Err(VestingError::InvalidStart);
    }
    Ok(())
}

/// Direct create, callable by `ScheduleCreator` (spec §4.F).
#[allow(clippy::too_many_arguments)]
pub fn create(
    env: &Env,
    creator: Address,
    beneficiary: Address,
    start: u64,
    cliff_offset: u64,
    duration: u64,
    slice_seconds: u32,
    revokable: bool,
    amount: i128,
) -> Result<ScheduleId, VestingError> {
    access::require_not_paused(env)?;
    access::require_schedule_creator(env, &creator)?;
    create_internal(
        env, beneficiary, start, cliff_offset, duration, slice_seconds, revokable, amount,
    )
}

/// The shared effects of `create`, also used by the Merkle claim gate
/// (`crate::claim::claim`) with the caller as beneficiary. Pause and
/// role checks are the caller's responsibility — the direct path checks
/// `ScheduleCreator`, the claim path has no creator-role requirement.
#[allow(clippy::too_many_arguments)]
pub fn create_internal(
    env: &Env,
    beneficiary: Address,
    start: u64,
    cliff_offset: u64,
    duration: u64,
    slice_seconds: u32,
    revokable: bool,
    amount: i128,
) -> Result<ScheduleId, VestingError> {
    validate_tuple(env, start, cliff_offset, duration, slice_seconds, amount)?;
    if withdrawable(env) < amount {
        return Err(VestingError::InsufficientTokensInContract);
    }

    let index = storage::beneficiary_count(env, &beneficiary);
    let id = merkle::schedule_id(env, &beneficiary, index);

    let schedule = Schedule {
        beneficiary: beneficiary.clone(),
        start,
        cliff_absolute: start + cliff_offset,
        duration,
        slice_seconds,
        amount_total: amount,
        released: 0,
        status: ScheduleStatus::Initialized,
        revokable,
    };
    storage::set_schedule(env, &id, &schedule);
    storage::set_beneficiary_count(env, &beneficiary, index + 1);

    storage::set_committed_total(env, storage::committed_total(env) + amount);
    storage::set_committed_by(env, &beneficiary, storage::committed_by(env, &beneficiary) + amount);

    events::schedule_created(env, &id, &beneficiary, amount);
    Ok(id)
}

fn load_live(env: &Env, id: &ScheduleId) -> Result<Schedule, VestingError> {
    let schedule = storage::get_schedule(env, id).ok_or(VestingError::InvalidSchedule)?;
    if !schedule.exists() {
        return Err(VestingError::InvalidSchedule);
    }
    Ok(schedule)
}

fn apply_release(env: &Env, id: &ScheduleId, schedule: &mut Schedule, amount: i128) {
    schedule.released += amount;
    storage::set_schedule(env, id, schedule);
    storage::set_committed_total(env, storage::committed_total(env) - amount);
    storage::set_committed_by(
        env,
        &schedule.beneficiary,
        storage::committed_by(env, &schedule.beneficiary) - amount,
    );
}

/// `release(id, amount)` — callable by the schedule's beneficiary or Admin
/// (spec §4.F).
pub fn release(env: &Env, caller: Address, id: ScheduleId, amount: i128) -> Result<(), VestingError> {
    let mut schedule = load_live(env, &id)?;
    access::require_beneficiary_or_admin(env, &caller, &schedule.beneficiary)?;
    if schedule.is_revoked() {
        return Err(VestingError::ScheduleWasRevoked);
    }

    let _guard = ReentrancyGuard::enter(env)?;
    let now = env.ledger().timestamp();
    let releasable = math::releasable(&schedule, now);
    if amount <= 0 || amount > releasable {
        return Err(VestingError::InsufficientReleasableTokens);
    }

    apply_release(env, &id, &mut schedule, amount);
    events::released(env, &id, &schedule.beneficiary, amount);

    let client = token::Client::new(env, &storage::underlying_token(env));
    client.transfer(&env.current_contract_address(), &schedule.beneficiary, &amount);
    Ok(())
}

/// `release_all(beneficiary)` — releases every schedule's full releasable
/// amount, bounded by the beneficiary's counter and
/// `MAX_RELEASE_ALL_SCHEDULES` (spec §4.F).
pub fn release_all(env: &Env, caller: Address, beneficiary: Address) -> Result<i128, VestingError> {
    access::require_beneficiary_or_admin(env, &caller, &beneficiary)?;
    let _guard = ReentrancyGuard::enter(env)?;

    let count = storage::beneficiary_count(env, &beneficiary);
    let now = env.ledger().timestamp();
    let mut total_released: i128 = 0;
    let upper = count.min(MAX_RELEASE_ALL_SCHEDULES as u64);

    for index in 0..upper {
        let id = merkle::schedule_id(env, &beneficiary, index);
        let Some(mut schedule) = storage::get_schedule(env, &id) else {
            continue;
        };
        if !schedule.exists() || schedule.is_revoked() {
            continue;
        }
        let amount = math::releasable(&schedule, now);
        if amount > 0 {
            apply_release(env, &id, &mut schedule, amount);
            events::released(env, &id, &beneficiary, amount);
            total_released += amount;
        }
    }

    if total_released > 0 {
        let client = token::Client::new(env, &storage::underlying_token(env));
        client.transfer(&env.current_contract_address(), &beneficiary, &total_released);
    }
    Ok(total_released)
}

/// `revoke(id)` — Admin only, schedule must be revocable (spec §4.F).
/// Releases whatever is currently vested to the beneficiary first, then
/// returns the remainder to the free pool.
pub fn revoke(env: &Env, admin: Address, id: ScheduleId) -> Result<i128, VestingError> {
    access::require_admin(env, &admin)?;
    let mut schedule = load_live(env, &id)?;
    if schedule.is_revoked() {
        return Err(VestingError::ScheduleWasRevoked);
    }
    if !schedule.revokable {
        return Err(VestingError::NotRevokable);
    }

    let _guard = ReentrancyGuard::enter(env)?;
    let now = env.ledger().timestamp();
    let releasable = math::releasable(&schedule, now);

    if releasable > 0 {
        apply_release(env, &id, &mut schedule, releasable);
        events::released(env, &id, &schedule.beneficiary, releasable);
    }

    let unreleased = schedule.amount_total - schedule.released;
    storage::set_committed_total(env, storage::committed_total(env) - unreleased);
    storage::set_committed_by(
        env,
        &schedule.beneficiary,
        storage::committed_by(env, &schedule.beneficiary) - unreleased,
    );
    schedule.status = ScheduleStatus::Revoked;
    storage::set_schedule(env, &id, &schedule);
    events::revoked(env, &id, &schedule.beneficiary, unreleased);

    if releasable > 0 {
        let client = token::Client::new(env, &storage::underlying_token(env));
        client.transfer(&env.current_contract_address(), &schedule.beneficiary, &releasable);
    }
    Ok(releasable)
}

/// `withdraw(amount)` — Admin only, never touches committed principal
/// (spec §4.F).
pub fn withdraw(env: &Env, admin: Address, amount: i128) -> Result<(), VestingError> {
    access::require_admin(env, &admin)?;
    let _guard = ReentrancyGuard::enter(env)?;
    if amount <= 0 || amount > withdrawable(env) {
        return Err(VestingError::InsufficientTokensInContract);
    }
    events::withdrawn(env, &admin, amount);
    let client = token::Client::new(env, &storage::underlying_token(env));
    client.transfer(&env.current_contract_address(), &admin, &amount);
    Ok(())
}

/// `total_supply() := committed_total` — the virtual token total supply
/// (spec §4.F).
pub fn total_supply(env: &Env) -> i128 {
    storage::committed_total(env)
}

/// `balance_of(b) := committed_by[b]` — the virtual token balance (spec
/// §4.F).
pub fn balance_of(env: &Env, beneficiary: &Address) -> i128 {
    storage::committed_by(env, beneficiary)
}
