//! Guarantee-cycle arithmetic for the limited banner.

/// Pulls needed to force a limited copy in the worst case.
pub const PULLS_PER_GUARANTEE: f64 = 76.0;

/// Guarantee cycles covered by `pulls`. Fractional.
pub fn attempts(pulls: f64) -> f64 {
    pulls / PULLS_PER_GUARANTEE
}

/// Guarantee cycles covered by what the player holds now plus what they are
/// expected to earn.
pub fn universal_attempts(limited_pulls: f64, expected_total_pulls: u64) -> f64 {
    attempts(limited_pulls + expected_total_pulls as f64)
}

/// Copies of the limited item reachable with `total_attempts` cycles.
///
/// Every two cycles yield a copy. A player already on guarantee gets one more
/// when the cycle count does not split evenly.
pub fn guaranteed_copies(total_attempts: f64, pity_active: bool) -> u64 {
    let bonus = if pity_active && total_attempts.rem_euclid(2.0) != 0.0 {
        1.0
    } else {
        0.0
    };
    (total_attempts / 2.0 + bonus).floor() as u64
}
