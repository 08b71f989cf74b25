#![no_std]

//! A vesting accounting engine with gated claim.
//!
//! Manages a collection of token-release schedules, each gradually
//! converting a committed principal into releasable balance over time,
//! enforces per-beneficiary and per-administrator authority, and supports a
//! Merkle-gated bulk distribution mechanism by which an eligible
//! beneficiary may self-install a schedule — optionally paying a per-unit
//! fee — upon presenting a proof against an administrator-published
//! commitment.
//!
//! The Merkle claim gate and the purchasable-claim capability are both
//! optional, enabled after `initialize` via `enable_merkle_gate` /
//! `enable_purchasable`, rather than a class hierarchy of variants.

mod access;
mod claim;
mod error;
mod events;
mod lifecycle;
mod math;
mod merkle;
mod query;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

pub use error::VestingError;
pub use types::Schedule;

#[contract]
pub struct VestingEngineContract;

#[contractimpl]
impl VestingEngineContract {
    /// Binds the underlying token adapter and seeds the initial admin and
    /// `ScheduleCreator` (spec §6 configuration parameters). Construction
    /// fails with `DecimalsError` unless the adapter reports 18 decimals.
    pub fn initialize(
        env: Env,
        admin: Address,
        underlying_token: Address,
        vesting_creator: Address,
    ) -> Result<(), VestingError> {
        if storage::is_initialized(&env) {
            return Err(VestingError::AlreadyInitialized);
        }
        let token_client = soroban_sdk::token::Client::new(&env, &underlying_token);
        if token_client.decimals() != 18 {
            return Err(VestingError::DecimalsError);
        }

        storage::set_admin(&env, &admin);
        storage::set_underlying_token(&env, &underlying_token);
        let creators = Vec::from_array(&env, [vesting_creator]);
        storage::set_schedule_creators(&env, &creators);
        storage::set_initialized(&env);
        Ok(())
    }

    // ---- access control & safety envelope (spec §4.C) ----

    pub fn grant_schedule_creator(env: Env, admin: Address, grantee: Address) -> Result<(), VestingError> {
        access::grant_schedule_creator(&env, &admin, grantee)
    }

    pub fn revoke_schedule_creator(env: Env, admin: Address, grantee: Address) -> Result<(), VestingError> {
        access::revoke_schedule_creator(&env, &admin, &grantee)
    }

    pub fn begin_admin_handover(env: Env, admin: Address, nominee: Address) -> Result<(), VestingError> {
        access::begin_admin_handover(&env, &admin, nominee)
    }

    pub fn cancel_admin_handover(env: Env, admin: Address) -> Result<(), VestingError> {
        access::cancel_admin_handover(&env, &admin)
    }

    pub fn accept_admin_handover(env: Env, nominee: Address) -> Result<(), VestingError> {
        access::accept_admin_handover(&env, &nominee)
    }

    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), VestingError> {
        access::set_paused(&env, &admin, paused)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn admin(env: Env) -> Address {
        storage::admin(&env)
    }

    pub fn pending_admin(env: Env) -> Option<Address> {
        storage::pending_admin(&env)
    }

    // ---- schedule lifecycle (spec §4.F) ----

    #[allow(clippy::too_many_arguments)]
    pub fn create_schedule(
        env: Env,
        creator: Address,
        beneficiary: Address,
        start: u64,
        cliff_offset: u64,
        duration: u64,
        slice_seconds: u32,
        revokable: bool,
        amount: i128,
    ) -> Result<BytesN<32>, VestingError> {
        lifecycle::create(
            &env, creator, beneficiary, start, cliff_offset, duration, slice_seconds, revokable, amount,
        )
    }

    pub fn release(env: Env, caller: Address, schedule_id: BytesN<32>, amount: i128) -> Result<(), VestingError> {
        lifecycle::release(&env, caller, schedule_id, amount)
    }

    pub fn release_all(env: Env, caller: Address, beneficiary: Address) -> Result<i128, VestingError> {
        lifecycle::release_all(&env, caller, beneficiary)
    }

    pub fn revoke(env: Env, admin: Address, schedule_id: BytesN<32>) -> Result<i128, VestingError> {
        lifecycle::revoke(&env, admin, schedule_id)
    }

    pub fn withdraw(env: Env, admin: Address, amount: i128) -> Result<(), VestingError> {
        lifecycle::withdraw(&env, admin, amount)
    }

    // ---- virtual-token read surface (spec §4.F) ----

    pub fn total_supply(env: Env) -> i128 {
        lifecycle::total_supply(&env)
    }

    pub fn balance_of(env: Env, beneficiary: Address) -> i128 {
        lifecycle::balance_of(&env, &beneficiary)
    }

    pub fn transfer(_env: Env, _from: Address, _to: Address, _amount: i128) -> Result<(), VestingError> {
        Err(VestingError::NotSupported)
    }

    pub fn approve(_env: Env, _owner: Address, _spender: Address, _amount: i128) -> Result<(), VestingError> {
        Err(VestingError::NotSupported)
    }

    pub fn transfer_from(
        _env: Env,
        _spender: Address,
        _from: Address,
        _to: Address,
        _amount: i128,
    ) -> Result<(), VestingError> {
        Err(VestingError::NotSupported)
    }

    pub fn allowance(_env: Env, _owner: Address, _spender: Address) -> Result<i128, VestingError> {
        Err(VestingError::NotSupported)
    }

    // ---- Merkle-gated claim (spec §4.G, §4.H) ----

    pub fn enable_merkle_gate(env: Env, admin: Address, root: BytesN<32>) -> Result<(), VestingError> {
        claim::rotate_root(&env, &admin, root)
    }

    pub fn rotate_merkle_root(env: Env, admin: Address, new_root: BytesN<32>) -> Result<(), VestingError> {
        claim::rotate_root(&env, &admin, new_root)
    }

    pub fn enable_purchasable(
        env: Env,
        admin: Address,
        payment_token: Address,
        payment_receiver: Address,
        v_token_cost: i128,
    ) -> Result<(), VestingError> {
        claim::enable_purchasing(&env, &admin, payment_token, payment_receiver, v_token_cost)
    }

    pub fn set_v_token_cost(env: Env, admin: Address, cost: i128) -> Result<(), VestingError> {
        claim::set_v_token_cost(&env, &admin, cost)
    }

    pub fn set_payment_receiver(env: Env, admin: Address, receiver: Address) -> Result<(), VestingError> {
        claim::set_payment_receiver(&env, &admin, receiver)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn claim(
        env: Env,
        claimant: Address,
        proof: Vec<BytesN<32>>,
        start: u64,
        cliff_offset: u64,
        duration: u64,
        slice_seconds: u32,
        revokable: bool,
        amount: i128,
    ) -> Result<BytesN<32>, VestingError> {
        claim::claim(
            &env, claimant, proof, start, cliff_offset, duration, slice_seconds, revokable, amount,
        )
    }

    // ---- query surface (spec §4.I) ----

    pub fn get_schedule(env: Env, schedule_id: BytesN<32>) -> Schedule {
        query::get_schedule(&env, schedule_id)
    }

    pub fn get_schedule_by_index(env: Env, beneficiary: Address, index: u64) -> Schedule {
        query::get_schedule_by_index(&env, beneficiary, index)
    }

    pub fn releasable(env: Env, schedule_id: BytesN<32>) -> i128 {
        query::releasable_of(&env, schedule_id)
    }

    pub fn withdrawable(env: Env) -> i128 {
        lifecycle::withdrawable(&env)
    }

    pub fn schedule_count(env: Env, beneficiary: Address) -> u64 {
        query::schedule_count(&env, beneficiary)
    }
}
