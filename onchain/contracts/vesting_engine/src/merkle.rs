//! Deterministic schedule-to-leaf encoding and proof verification
//! (spec §4.G). `H` is the host's native Keccak-256
//! (`env.crypto().keccak256`), bit-identical to the spec's reference hash.

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, Vec};

/// Tight concatenation of a schedule tuple's canonical byte encoding, shared
/// by leaf hashing (`leaf_hash`) and claim-registry fingerprinting
/// (`crate::claim::fingerprint`) — spec §3 requires both to use the same
/// packing.
pub fn pack_tuple(
    env: &Env,
    beneficiary: &Address,
    start: u64,
    cliff_offset: u64,
    duration: u64,
    slice_seconds: u32,
    revokable: bool,
    amount: i128,
) -> Bytes {
    let mut buf = beneficiary.to_xdr(env);
    buf.append(&Bytes::from_array(env, &start.to_be_bytes()));
    buf.append(&Bytes::from_array(env, &cliff_offset.to_be_bytes()));
    buf.append(&Bytes::from_array(env, &duration.to_be_bytes()));
    buf.append(&Bytes::from_array(env, &slice_seconds.to_be_bytes()));
    buf.append(&Bytes::from_array(env, &[revokable as u8]));
    buf.append(&Bytes::from_array(env, &amount.to_be_bytes()));
    buf
}

/// `leaf = H(H(inner))` — the double hash mitigates second-preimage
/// confusion between leaves and internal nodes (spec §4.G).
pub fn leaf_hash(env: &Env, inner: &Bytes) -> BytesN<32> {
    let once = env.crypto().keccak256(inner);
    env.crypto().keccak256(&once.into()).into()
}

fn combine(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (lo, hi) = if a.to_array() <= b.to_array() { (a, b) } else { (b, a) };
    let mut buf = Bytes::new(env);
    buf.append(&Bytes::from(lo.clone()));
    buf.append(&Bytes::from(hi.clone()));
    env.crypto().keccak256(&buf).into()
}

/// A schedule's stable identifier: `H(beneficiary ‖ index)` (spec §3).
/// Globally unique within an instance and independent of schedule contents.
pub fn schedule_id(env: &Env, beneficiary: &Address, index: u64) -> BytesN<32> {
    let mut buf = beneficiary.to_xdr(env);
    buf.append(&Bytes::from_array(env, &index.to_be_bytes()));
    env.crypto().keccak256(&buf).into()
}

/// Folds `proof` against `leaf` with the sorted-pair combine and checks the
/// terminal value against `root` (spec §4.G).
pub fn verify(env: &Env, proof: &Vec<BytesN<32>>, leaf: &BytesN<32>, root: &BytesN<32>) -> bool {
    let mut node = leaf.clone();
    for sibling in proof.iter() {
        node = combine(env, &node, &sibling);
    }
    &node == root
}
