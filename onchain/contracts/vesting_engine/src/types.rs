use soroban_sdk::{contracttype, Address, BytesN, Env};

/// Granularity bounds for `slice_seconds` (spec §3 invariant 3).
pub const MIN_SLICE_SECONDS: u32 = 1;
pub const MAX_SLICE_SECONDS: u32 = 60;

/// Duration bounds for a schedule (spec §3 invariant 3).
pub const MIN_DURATION_SECONDS: u64 = 7 * 86_400;
pub const MAX_DURATION_SECONDS: u64 = 50 * 365 * 86_400;

/// How far into the future `start` may be set, relative to creation time.
pub const MAX_START_LEAD_SECONDS: u64 = 30 * 7 * 86_400;

/// Hard per-call cap on the number of schedules `release_all` will process,
/// so a beneficiary with a pathologically large counter cannot make a single
/// invocation exceed the host's metered execution budget.
pub const MAX_RELEASE_ALL_SCHEDULES: u32 = 256;

/// A schedule's lifecycle state. `duration == 0` on a loaded-but-absent
/// record is the in-band "does not exist" sentinel described in spec §3;
/// `ScheduleStatus` only distinguishes live records from revoked ones.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleStatus {
    Initialized,
    Revoked,
}

/// The central vesting record (spec §3).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub beneficiary: Address,
    pub start: u64,
    pub cliff_absolute: u64,
    pub duration: u64,
    pub slice_seconds: u32,
    pub amount_total: i128,
    pub released: i128,
    pub status: ScheduleStatus,
    pub revokable: bool,
}

impl Schedule {
    /// The reserved sentinel returned by queries for an id that was never
    /// created: `duration == 0` marks it in-band as non-existent. Soroban's
    /// `Address` has no universal zero value, so the contract's own address
    /// stands in for it — a schedule can never legitimately vest to the
    /// contract itself.
    pub fn sentinel(env: &Env) -> Self {
        Schedule {
            beneficiary: env.current_contract_address(),
            start: 0,
            cliff_absolute: 0,
            duration: 0,
            slice_seconds: 0,
            amount_total: 0,
            released: 0,
            status: ScheduleStatus::Initialized,
            revokable: false,
        }
    }

    pub fn exists(&self) -> bool {
        self.duration != 0
    }

    pub fn is_revoked(&self) -> bool {
        matches!(self.status, ScheduleStatus::Revoked)
    }
}

/// A schedule's stable 256-bit identifier: `keccak256(beneficiary ‖ index)`.
pub type ScheduleId = BytesN<32>;

/// A claimed-tuple fingerprint: `keccak256` over the same field packing as
/// a Merkle leaf (spec §3).
pub type Fingerprint = BytesN<32>;
