//! Pure vesting math (spec §4.E): `releasable(schedule, now) -> amount`.
//!
//! The slice-quantised formula multiplies before it divides, which can
//! overflow `i128` for the combination of amounts and durations the spec
//! allows (amount up to `i128::MAX`, elapsed seconds up to ~1.6e9). The
//! intermediate product is therefore computed in a 256-bit unsigned integer
//! and narrowed back down afterward, exactly as spec §4.E and its
//! "divide-before-multiply warning" (spec §9) require.

use primitive_types::U256;

use crate::types::{Schedule, ScheduleStatus};

/// Amount of underlying token currently releasable against `schedule` at
/// time `now`. Pure function of its arguments; never touches storage.
pub fn releasable(schedule: &Schedule, now: u64) -> i128 {
    if matches!(schedule.status, ScheduleStatus::Revoked) {
        return 0;
    }
    if now < schedule.cliff_absolute {
        return 0;
    }
    if now >= schedule.start.saturating_add(schedule.duration) {
        return schedule.amount_total - schedule.released;
    }

    let elapsed = now - schedule.start;
    let slices = elapsed / schedule.slice_seconds as u64;
    let vested_seconds = slices * schedule.slice_seconds as u64;

    let total = U256::from(schedule.amount_total as u128);
    let vested_seconds_u256 = U256::from(vested_seconds);
    let duration_u256 = U256::from(schedule.duration);

    let product = total * vested_seconds_u256;
    let vested_amount = (product / duration_u256).as_u128() as i128;

    vested_amount - schedule.released
}

/// Monotonicity check used by tests: for fixed `schedule`, `releasable` is
/// non-decreasing in `now` (spec §8).
#[cfg(test)]
pub fn vested_amount(schedule: &Schedule, now: u64) -> i128 {
    releasable(schedule, now) + schedule.released
}
