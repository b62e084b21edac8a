use super::POLYCHROMES_PER_PULL;

/// Extra polychrome value from the Residual Signal Store.
///
/// The store trades surplus pull-equivalents at two tiers, 10-for-15 and
/// 76-for-40. Both tiers are averaged over 20 and only the final value is
/// truncated. `limited_pulls` is the unfloored limited-banner pull count.
pub fn residual_polychromes(limited_pulls: f64, total_polychromes: u64, enabled: bool) -> u64 {
    if !enabled {
        return 0;
    }
    let base = limited_pulls * POLYCHROMES_PER_PULL as f64 + total_polychromes as f64;
    (((base / 10.0) * 15.0 + (base / 76.0) * 40.0) / 20.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_store_adds_nothing() {
        assert_eq!(residual_polychromes(0.0, 0, false), 0);
        assert_eq!(residual_polychromes(120.5, 90_000, false), 0);
    }

    #[test]
    fn enabled_store_floors_once() {
        // base 760: 760/10*15 = 1140, 760/76*40 = 400, (1140 + 400) / 20 = 77
        assert_eq!(residual_polychromes(4.75, 0, true), 77);
        // base 100: 150 + 52.63.. = 202.63.., / 20 = 10.13..
        assert_eq!(residual_polychromes(0.0, 100, true), 10);
    }
}
