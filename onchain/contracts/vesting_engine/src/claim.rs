//! Merkle-gated claim protocol (spec §4.H): fingerprint the requested
//! tuple, verify it against the published root, take payment if the
//! purchasable capability is enabled, then fall through to the ordinary
//! create path with the caller as beneficiary.

use soroban_sdk::{token, Address, BytesN, Env, Vec};

use crate::access::{self, ReentrancyGuard};
use crate::error::VestingError;
use crate::events;
use crate::lifecycle;
use crate::merkle;
use crate::storage;
use crate::types::Fingerprint;

/// `fingerprint = H(inner)` over the same packing as a Merkle leaf, minus
/// the outer double-hash (spec §3: "using the same canonical packing as the
/// Merkle leaf" — the fingerprint is a single hash of that packing, the
/// leaf is a double hash of it, so the two never collide by construction).
pub fn fingerprint(
    env: &Env,
    beneficiary: &Address,
    start: u64,
    cliff_offset: u64,
    duration: u64,
    slice_seconds: u32,
    revokable: bool,
    amount: i128,
) -> Fingerprint {
    let inner = merkle::pack_tuple(
        env,
        beneficiary,
        start,
        cliff_offset,
        duration,
        slice_seconds,
        revokable,
        amount,
    );
    env.crypto().keccak256(&inner).into()
}

/// Price for `amount` vested units at the current `vTokenCost`:
/// `floor(vTokenCost * amount / 10^18)` (spec §4.H).
fn price_for(env: &Env, amount: i128) -> i128 {
    use primitive_types::U256;
    let cost = U256::from(storage::v_token_cost(env) as u128);
    let amount = U256::from(amount as u128);
    let scale = U256::from(1_000_000_000_000_000_000u128);
    ((cost * amount) / scale).as_u128() as i128
}

#[allow(clippy::too_many_arguments)]
pub fn claim(
    env: &Env,
    claimant: Address,
    proof: Vec<BytesN<32>>,
    start: u64,
    cliff_offset: u64,
    duration: u64,
    slice_seconds: u32,
    revokable: bool,
    amount: i128,
) -> Result<BytesN<32>, VestingError> {
    claimant.require_auth();
    access::require_not_paused(env)?;
    let _guard = ReentrancyGuard::enter(env)?;

    if !storage::merkle_gate_enabled(env) {
        return Err(VestingError::MerkleGateDisabled);
    }

    let fp = fingerprint(
        env, &claimant, start, cliff_offset, duration, slice_seconds, revokable, amount,
    );
    if storage::is_claimed(env, &fp) {
        return Err(VestingError::AlreadyClaimed);
    }

    let root = storage::merkle_root(env).ok_or(VestingError::MerkleGateDisabled)?;
    let inner = merkle::pack_tuple(
        env, &claimant, start, cliff_offset, duration, slice_seconds, revokable, amount,
    );
    let leaf = merkle::leaf_hash(env, &inner);
    if !merkle::verify(env, &proof, &leaf, &root) {
        return Err(VestingError::InvalidProof);
    }

    if storage::purchasing_enabled(env) {
        let price = price_for(env, amount);
        let payment_token = storage::payment_token(env).ok_or(VestingError::PurchasingDisabled)?;
        let receiver = storage::payment_receiver(env).ok_or(VestingError::PurchasingDisabled)?;
        let client = token::Client::new(env, &payment_token);
        client.transfer(&claimant, &receiver, &price);
    }

    // Insert before the internal create so a failure inside create — which
    // unwinds the whole host invocation, including this insert — cannot
    // leave a claimed fingerprint with no installed schedule, and a second
    // attempt for the identical tuple still sees `AlreadyClaimed` only once
    // the first attempt has actually succeeded.
    storage::set_claimed(env, &fp);

    let id = lifecycle::create_internal(
        env, claimant.clone(), start, cliff_offset, duration, slice_seconds, revokable, amount,
    )?;

    events::claimed(env, &claimant, &fp);
    Ok(id)
}

pub fn rotate_root(env: &Env, admin: &Address, new_root: BytesN<32>) -> Result<(), VestingError> {
    access::require_admin(env, admin)?;
    storage::set_merkle_root(env, &new_root);
    storage::set_merkle_gate_enabled(env);
    events::root_rotated(env, &new_root);
    Ok(())
}

pub fn set_v_token_cost(env: &Env, admin: &Address, cost: i128) -> Result<(), VestingError> {
    access::require_admin(env, admin)?;
    const ONE: i128 = 1_000_000_000_000_000_000;
    if cost < 0 || cost >= ONE {
        return Err(VestingError::InvalidPrice);
    }
    storage::set_v_token_cost(env, cost);
    Ok(())
}

/// The zero-identity sentinel for `Address`, matching the convention already
/// used by `Schedule::sentinel` and the `events::mint`/`burn` pseudo-transfer
/// counterpart: Soroban has no universal zero `Address`, so the contract's
/// own address stands in for it.
fn is_zero_address(env: &Env, addr: &Address) -> bool {
    addr == &env.current_contract_address()
}

pub fn set_payment_receiver(env: &Env, admin: &Address, receiver: Address) -> Result<(), VestingError> {
    access::require_admin(env, admin)?;
    if is_zero_address(env, &receiver) {
        return Err(VestingError::InvalidAddress);
    }
    storage::set_payment_receiver(env, &receiver);
    Ok(())
}

pub fn enable_purchasing(
    env: &Env,
    admin: &Address,
    payment_token: Address,
    payment_receiver: Address,
    v_token_cost: i128,
) -> Result<(), VestingError> {
    access::require_admin(env, admin)?;
    if is_zero_address(env, &payment_receiver) {
        return Err(VestingError::InvalidAddress);
    }
    const ONE: i128 = 1_000_000_000_000_000_000;
    if v_token_cost < 0 || v_token_cost >= ONE {
        return Err(VestingError::InvalidPrice);
    }
    storage::set_payment_token(env, &payment_token);
    storage::set_payment_receiver(env, &payment_receiver);
    storage::set_v_token_cost(env, v_token_cost);
    storage::set_purchasing_enabled(env);
    Ok(())
}
