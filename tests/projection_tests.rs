use polychrome_core::{
    currency::{pulls, residual_polychromes},
    pity::guaranteed_copies,
    projection::{
        evaluate, project,
        series::{build_series, AccumulationPoint},
        AbsentHandling, Activity, IncomeAssumptions,
    },
};

#[test]
fn pull_conversion_truncates() {
    assert_eq!(pulls(0, 0, 0, 0), 0);
    assert_eq!(pulls(160, 0, 0, 0), 1);
    assert_eq!(pulls(159, 0, 0, 0), 0);
    assert_eq!(pulls(80, 80, 0, 0), 1);
}

#[test]
fn inactive_passes_are_absent_not_zero() {
    let projection = project(&IncomeAssumptions::new(0, false, false));
    assert_eq!(projection.total(), 0);
    let absent: Vec<Activity> = projection
        .lines
        .iter()
        .filter(|line| line.amount.is_none())
        .map(|line| line.activity)
        .collect();
    assert_eq!(
        absent,
        vec![Activity::InterKnotMembership, Activity::NewEriduCityFund]
    );
}

#[test]
fn six_week_patch_with_both_passes() {
    let projection = project(&IncomeAssumptions::new(42, true, true));
    assert_eq!(projection.amount(Activity::Dailies), Some(2520));
    assert_eq!(projection.amount(Activity::InterKnotMembership), Some(3780));
    assert_eq!(projection.amount(Activity::NewEriduCityFund), Some(1420));
}

#[test]
fn totals_at_common_horizons() {
    let cases = [
        (7, false, false, 2104),
        (7, true, true, 2970),
        (30, false, false, 9023),
        (30, true, true, 12737),
        (84, true, true, 35672),
        (100, false, false, 30082),
        (100, true, true, 42462),
    ];
    for (days, polychrome_pass, weapon_pass, expected) in cases {
        let total = project(&IncomeAssumptions::new(days, polychrome_pass, weapon_pass)).total();
        assert_eq!(total, expected, "{days} days, passes {polychrome_pass}/{weapon_pass}");
    }
}

#[test]
fn series_tracks_projection_for_every_day() {
    for (polychrome_pass, weapon_pass) in [(false, false), (false, true), (true, false), (true, true)]
    {
        let series = build_series(200, polychrome_pass, weapon_pass);
        assert_eq!(series.first(), Some(&AccumulationPoint { day: 0, total: 0 }));
        assert_eq!(series.last().map(|point| point.day), Some(200));
        for point in &series {
            let expected = evaluate(
                &IncomeAssumptions::new(point.day, polychrome_pass, weapon_pass),
                AbsentHandling::AsZero,
            )
            .total();
            assert_eq!(point.total, expected);
        }
        assert!(series.windows(2).all(|pair| pair[0].total <= pair[1].total));
    }
}

#[test]
fn disabled_residual_store_is_always_zero() {
    for (pulls, polychromes) in [(0.0, 0), (37.5, 12_636), (500.0, 1_000_000)] {
        assert_eq!(residual_polychromes(pulls, polychromes, false), 0);
    }
}

#[test]
fn guaranteed_copy_heuristic() {
    assert_eq!(guaranteed_copies(4.0, false), 2);
    assert_eq!(guaranteed_copies(5.0, true), 3);
    assert_eq!(guaranteed_copies(5.0, false), 2);
}
