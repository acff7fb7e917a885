use chrono::{Days, NaiveDate};
use fitflow_core::{
    estimate, estimate_from_snapshot, CyclePhase, Gender, OnboardingSnapshot,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn shift(anchor: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        anchor.checked_add_days(Days::new(days as u64)).unwrap()
    } else {
        anchor.checked_sub_days(Days::new(days.unsigned_abs())).unwrap()
    }
}

#[test]
fn scenario_ten_days_into_28_day_cycle() {
    let info = estimate(Some(date(2024, 1, 1)), 28, date(2024, 1, 10)).unwrap();
    assert_eq!(info.cycle_length, 28);
    assert_eq!(info.day_in_cycle, 10);
    assert_eq!(info.phase, CyclePhase::Follicular);
    assert_eq!(info.next_period_start, date(2024, 1, 29));
    assert_eq!(info.days_until_next, 19);
}

#[test]
fn scenario_today_is_last_period_start() {
    let info = estimate(Some(date(2024, 1, 1)), 28, date(2024, 1, 1)).unwrap();
    assert_eq!(info.day_in_cycle, 1);
    assert_eq!(info.days_until_next, 28);
    assert_eq!(info.phase, CyclePhase::Menstrual);
}

#[test]
fn scenario_missing_last_period_start() {
    assert!(estimate(None, 28, date(2024, 1, 1)).is_none());

    let snapshot = OnboardingSnapshot::for_cycle(Gender::Female, "", "28");
    assert!(estimate_from_snapshot(&snapshot, date(2024, 1, 1)).is_none());
}

#[test]
fn day_index_is_true_modulo_for_every_offset() {
    let anchor = date(2024, 6, 15);
    for length in [1_u32, 2, 5, 21, 28, 35, 60] {
        for offset in -150_i64..=150 {
            let today = shift(anchor, offset);
            let info = estimate(Some(anchor), length, today).unwrap();
            let expected = offset.rem_euclid(i64::from(length)) as u32;
            assert_eq!(info.day_in_cycle - 1, expected, "L={length} d={offset}");
            assert!(info.day_in_cycle >= 1 && info.day_in_cycle <= length);
        }
    }
}

#[test]
fn next_start_is_on_or_after_today_and_a_whole_cycle_step() {
    let anchor = date(2023, 11, 3);
    for length in [1_u32, 7, 28, 33] {
        for offset in -90_i64..=400 {
            let today = shift(anchor, offset);
            let info = estimate(Some(anchor), length, today).unwrap();

            assert!(info.next_period_start >= today);
            let steps = info
                .next_period_start
                .signed_duration_since(anchor)
                .num_days();
            assert!(steps >= 0);
            assert_eq!(steps % i64::from(length), 0);

            let gap = info.next_period_start.signed_duration_since(today).num_days();
            assert_eq!(i64::from(info.days_until_next), gap);
        }
    }
}

#[test]
fn phase_follows_fixed_thresholds_regardless_of_length() {
    let anchor = date(2024, 1, 1);
    let cases = [
        (0, CyclePhase::Menstrual),
        (4, CyclePhase::Menstrual),
        (5, CyclePhase::Follicular),
        (12, CyclePhase::Follicular),
        (13, CyclePhase::Ovulatory),
        (16, CyclePhase::Ovulatory),
        (17, CyclePhase::Luteal),
        (44, CyclePhase::Luteal),
    ];
    for (offset, phase) in cases {
        let info = estimate(Some(anchor), 45, shift(anchor, offset)).unwrap();
        assert_eq!(info.phase, phase, "day index {offset}");
    }

    // A 21-day cycle never reaches past day index 20, still Luteal.
    let short = estimate(Some(anchor), 21, shift(anchor, 20)).unwrap();
    assert_eq!(short.phase, CyclePhase::Luteal);
}

#[test]
fn very_old_anchor_is_computed_directly() {
    let info = estimate(Some(date(1900, 1, 1)), 28, date(2024, 1, 10)).unwrap();
    assert!(info.next_period_start >= date(2024, 1, 10));
    assert!(info.days_until_next >= 1 && info.days_until_next <= 28);
}

#[test]
fn very_large_cycle_length_degrades_to_numbers() {
    let info = estimate(Some(date(2024, 1, 1)), 100_000, date(2024, 1, 10)).unwrap();
    assert_eq!(info.day_in_cycle, 10);
    assert_eq!(info.days_until_next, 100_000 - 9);
    assert_eq!(info.phase, CyclePhase::Follicular);
}

#[test]
fn snapshot_inputs_are_parsed() {
    let today = date(2024, 1, 10);

    let defaulted = OnboardingSnapshot::for_cycle(Gender::Female, "2024-01-01", "");
    assert_eq!(
        estimate_from_snapshot(&defaulted, today).unwrap().cycle_length,
        28
    );

    let timestamped = OnboardingSnapshot::for_cycle(Gender::Female, "2024-01-01T00:00:00Z", "30");
    let info = estimate_from_snapshot(&timestamped, today).unwrap();
    assert_eq!(info.cycle_length, 30);
    assert_eq!(info.next_period_start, date(2024, 1, 31));

    let zero = OnboardingSnapshot::for_cycle(Gender::Female, "2024-01-01", "0");
    assert!(estimate_from_snapshot(&zero, today).is_none());

    let garbage = OnboardingSnapshot::for_cycle(Gender::Female, "yesterday", "28");
    assert!(estimate_from_snapshot(&garbage, today).is_none());
}
