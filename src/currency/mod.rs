//! Currency-to-pull conversion and the residual store exchange.

pub mod residual;

use serde::Serialize;

use crate::ledger::CurrencyLedger;

pub use residual::residual_polychromes;

/// Polychromes (or monochromes) spent on a single pull.
pub const POLYCHROMES_PER_PULL: u64 = 160;

/// Whole pulls available from currency, tapes and pulls already banked on a
/// banner. Currency that does not cover a full pull is dropped. Saturates at
/// `u64::MAX` instead of overflowing.
pub fn pulls(primary: u64, secondary: u64, tape_count: u64, banked: u64) -> u64 {
    (primary.saturating_add(secondary) / POLYCHROMES_PER_PULL)
        .saturating_add(tape_count)
        .saturating_add(banked)
}

/// Same as [`pulls`] but keeps the fractional pull left over from currency.
pub fn pull_equivalent(primary: u64, secondary: u64, tape_count: u64, banked: u64) -> f64 {
    let currency = primary as u128 + secondary as u128;
    currency as f64 / POLYCHROMES_PER_PULL as f64 + tape_count as f64 + banked as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTrack {
    Limited,
    WEngine,
    Standard,
}

impl BannerTrack {
    pub const ALL: [BannerTrack; 3] = [
        BannerTrack::Limited,
        BannerTrack::WEngine,
        BannerTrack::Standard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BannerTrack::Limited => "Total Limited Pulls Available",
            BannerTrack::WEngine => "W-Engine Banner Pulls",
            BannerTrack::Standard => "Standard Banner Pulls",
        }
    }

    /// Tapes redeemable on the track and the pulls already banked there.
    fn tokens(self, ledger: &CurrencyLedger) -> (u64, u64) {
        match self {
            BannerTrack::Limited => (ledger.encrypted_tapes, ledger.limited_pity_count),
            BannerTrack::WEngine => (ledger.encrypted_tapes, ledger.wengine_count),
            BannerTrack::Standard => (ledger.master_tapes, ledger.standard_count),
        }
    }

    pub fn pulls(self, ledger: &CurrencyLedger) -> u64 {
        let (tapes, banked) = self.tokens(ledger);
        pulls(ledger.combined_currency(), 0, tapes, banked)
    }

    pub fn pull_equivalent(self, ledger: &CurrencyLedger) -> f64 {
        let (tapes, banked) = self.tokens(ledger);
        pull_equivalent(ledger.polychromes, ledger.monochromes, tapes, banked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BannerPullLine {
    pub label: &'static str,
    pub pulls: u64,
}

/// Current pull totals for the three banner tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPulls {
    pub limited: u64,
    pub w_engine: u64,
    pub standard: u64,
}

impl BannerPulls {
    pub fn from_ledger(ledger: &CurrencyLedger) -> Self {
        Self {
            limited: BannerTrack::Limited.pulls(ledger),
            w_engine: BannerTrack::WEngine.pulls(ledger),
            standard: BannerTrack::Standard.pulls(ledger),
        }
    }

    /// Labelled totals in display order.
    pub fn lines(&self) -> Vec<BannerPullLine> {
        BannerTrack::ALL
            .iter()
            .map(|&track| BannerPullLine {
                label: track.label(),
                pulls: self.get(track),
            })
            .collect()
    }

    pub fn get(&self, track: BannerTrack) -> u64 {
        match track {
            BannerTrack::Limited => self.limited,
            BannerTrack::WEngine => self.w_engine,
            BannerTrack::Standard => self.standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_truncate_partial_currency() {
        assert_eq!(pulls(0, 0, 0, 0), 0);
        assert_eq!(pulls(160, 0, 0, 0), 1);
        assert_eq!(pulls(159, 0, 0, 0), 0);
        assert_eq!(pulls(100, 60, 2, 3), 6);
    }

    #[test]
    fn pull_equivalent_keeps_the_remainder() {
        assert!((pull_equivalent(240, 0, 1, 0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn banner_tracks_use_their_own_tapes_and_counters() {
        let ledger = CurrencyLedger {
            polychromes: 1600,
            monochromes: 320,
            encrypted_tapes: 5,
            master_tapes: 9,
            limited_pity_count: 30,
            wengine_count: 4,
            standard_count: 50,
        };
        let totals = BannerPulls::from_ledger(&ledger);
        assert_eq!(totals.limited, 12 + 5 + 30);
        assert_eq!(totals.w_engine, 12 + 5 + 4);
        assert_eq!(totals.standard, 12 + 9 + 50);
        assert_eq!(totals.get(BannerTrack::Standard), totals.standard);

        let lines = totals.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].label, "Total Limited Pulls Available");
        assert_eq!(lines[2].pulls, totals.standard);
    }

    #[test]
    fn huge_holdings_saturate_instead_of_overflowing() {
        assert_eq!(pulls(u64::MAX, 160, 5, 5), u64::MAX / POLYCHROMES_PER_PULL + 10);
        assert_eq!(pulls(0, 0, u64::MAX, 1), u64::MAX);
        let equivalent = pull_equivalent(u64::MAX, u64::MAX, u64::MAX, 0);
        assert!(equivalent.is_finite() && equivalent > 0.0);

        let ledger = CurrencyLedger {
            polychromes: u64::MAX,
            monochromes: 160,
            ..CurrencyLedger::default()
        };
        assert_eq!(ledger.combined_currency(), u64::MAX);
        assert_eq!(BannerTrack::Limited.pulls(&ledger), u64::MAX / POLYCHROMES_PER_PULL);
    }
}
