//! Role-based gating, pause control, and the two-step admin handover
//! (spec §4.C). Generalizes the single-`Admin`-address pattern used by every
//! sibling StelloPay contract into a two-role model: `Admin` (superset) and
//! `ScheduleCreator`.

use soroban_sdk::{Address, Env, Vec};

use crate::error::VestingError;
use crate::storage;

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VestingError> {
    caller.require_auth();
    if caller != &storage::admin(env) {
        return Err(VestingError::Unauthorized);
    }
    Ok(())
}

pub fn is_schedule_creator(env: &Env, addr: &Address) -> bool {
    addr == &storage::admin(env) || storage::schedule_creators(env).contains(addr)
}

pub fn require_schedule_creator(env: &Env, caller: &Address) -> Result<(), VestingError> {
    caller.require_auth();
    if !is_schedule_creator(env, caller) {
        return Err(VestingError::Unauthorized);
    }
    Ok(())
}

/// Either the schedule's own beneficiary or the admin may call.
pub fn require_beneficiary_or_admin(
    env: &Env,
    caller: &Address,
    beneficiary: &Address,
) -> Result<(), VestingError> {
    caller.require_auth();
    if caller != beneficiary && caller != &storage::admin(env) {
        return Err(VestingError::Unauthorized);
    }
    Ok(())
}

pub fn grant_schedule_creator(env: &Env, admin: &Address, grantee: Address) -> Result<(), VestingError> {
    require_admin(env, admin)?;
    let mut creators = storage::schedule_creators(env);
    if !creators.contains(&grantee) {
        creators.push_back(grantee);
        storage::set_schedule_creators(env, &creators);
    }
    Ok(())
}

pub fn revoke_schedule_creator(env: &Env, admin: &Address, grantee: &Address) -> Result<(), VestingError> {
    require_admin(env, admin)?;
    let creators = storage::schedule_creators(env);
    let mut next = Vec::new(env);
    for c in creators.iter() {
        if &c != grantee {
            next.push_back(c);
        }
    }
    storage::set_schedule_creators(env, &next);
    Ok(())
}

pub fn begin_admin_handover(env: &Env, admin: &Address, nominee: Address) -> Result<(), VestingError> {
    require_admin(env, admin)?;
    storage::set_pending_admin(env, Some(&nominee));
    Ok(())
}

pub fn cancel_admin_handover(env: &Env, admin: &Address) -> Result<(), VestingError> {
    require_admin(env, admin)?;
    storage::set_pending_admin(env, None);
    Ok(())
}

/// Only the exact pending nominee may accept; anyone else fails with
/// `AdminTransferFailed` (spec §4.C, §7).
pub fn accept_admin_handover(env: &Env, nominee: &Address) -> Result<(), VestingError> {
    nominee.require_auth();
    match storage::pending_admin(env) {
        Some(pending) if &pending == nominee => {
            storage::set_admin(env, nominee);
            storage::set_pending_admin(env, None);
            Ok(())
        }
        _ => Err(VestingError::AdminTransferFailed),
    }
}

pub fn require_not_paused(env: &Env) -> Result<(), VestingError> {
    if storage::is_paused(env) {
        return Err(VestingError::Paused);
    }
    Ok(())
}

pub fn set_paused(env: &Env, admin: &Address, paused: bool) -> Result<(), VestingError> {
    require_admin(env, admin)?;
    storage::set_paused(env, paused);
    Ok(())
}

/// RAII reentrancy guard: set on construction, cleared on drop so it clears
/// on every exit path of the guarded entry point, including an early `?`
/// return. Every entry point that transfers underlying tokens or native
/// currency out must hold one for its entire body (spec §4.C, §5).
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(env: &'a Env) -> Result<Self, VestingError> {
        if storage::reentrancy_locked(env) {
            return Err(VestingError::ReentrantCall);
        }
        storage::set_reentrancy_lock(env, true);
        Ok(ReentrancyGuard { env })
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        storage::set_reentrancy_lock(self.env, false);
    }
}
