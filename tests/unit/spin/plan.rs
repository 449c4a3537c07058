use super::*;
use crate::curve::presets::{CurvePreset, DecelerationProfile};

fn settings(min_secs: f64, rotations: u32) -> SpinSettings {
    SpinSettings {
        min_duration_secs: min_secs,
        rotation_count: rotations,
        ..SpinSettings::default()
    }
}

#[test]
fn end_position_lands_on_target_modulo_list() {
    for total in [1usize, 2, 3, 7, 10, 100, 5000] {
        for rotations in [0u32, 1, 3, 12] {
            for target in [0, total / 2, total - 1] {
                let p = plan(target, total, &settings(3.0, rotations)).unwrap();
                assert_eq!((p.end_position as usize) % total, target);
                assert_eq!(p.end_position.fract(), 0.0);
            }
        }
    }
}

#[test]
fn ten_entries_target_seven_linear() {
    let s = SpinSettings {
        min_duration_secs: 3.0,
        custom_curve: Some(CurvePreset::Linear.curve()),
        rotation_count: 4,
        ..SpinSettings::default()
    };
    let p = plan(7, 10, &s).unwrap();
    assert_eq!(p.start_position, 0.0);
    assert_eq!(p.end_position, 7.0 + 4.0 * 10.0);
    assert_eq!(p.duration_ms, 3000.0);
    assert_eq!(p.progress_at(0.5), 0.5);
    assert_eq!(p.position_at(0.5), 23.5);
}

#[test]
fn position_at_one_is_exactly_end() {
    for profile in [
        DecelerationProfile::Slow,
        DecelerationProfile::Medium,
        DecelerationProfile::Fast,
    ] {
        let s = SpinSettings {
            deceleration: profile,
            ..settings(4.0, 3)
        };
        let p = plan(3, 17, &s).unwrap();
        assert_eq!(p.position_at(1.0), p.end_position);
        assert_eq!(p.position_at(0.0), p.start_position);
    }
}

#[test]
fn positions_never_move_backwards() {
    let p = plan(42, 100, &settings(5.0, 3)).unwrap();
    let mut prev = p.start_position;
    for i in 0..=500 {
        let pos = p.position_at(i as f64 / 500.0);
        assert!(pos + 1e-9 >= prev, "step {i}: {pos} < {prev}");
        prev = pos;
    }
    assert_eq!(prev, p.end_position);
}

#[test]
fn duration_is_never_shorter_than_minimum() {
    let p = plan(0, 3, &settings(8.0, 1)).unwrap();
    assert_eq!(p.duration_ms, 8000.0);
}

#[test]
fn huge_travel_lengthens_the_spin() {
    let p = plan(10, 5000, &settings(3.0, 5)).unwrap();
    let expected_secs = p.distance() / MAX_AVERAGE_ITEMS_PER_SEC;
    assert!(expected_secs > 3.0);
    assert!((p.duration_ms - expected_secs * 1000.0).abs() < 1e-6);
}

#[test]
fn empty_list_is_rejected() {
    assert!(matches!(
        plan(0, 0, &SpinSettings::default()),
        Err(SpinError::EmptyDataset)
    ));
}

#[test]
fn target_outside_list_is_rejected() {
    assert!(matches!(
        plan(5, 5, &SpinSettings::default()),
        Err(SpinError::TargetNotFound(_))
    ));
}

#[test]
fn invalid_settings_are_rejected() {
    assert!(matches!(
        plan(0, 5, &settings(0.0, 3)),
        Err(SpinError::InvalidConfiguration(_))
    ));
}

#[test]
fn time_fraction_clamps() {
    let p = plan(1, 4, &settings(2.0, 1)).unwrap();
    assert_eq!(p.time_fraction(-10.0), 0.0);
    assert_eq!(p.time_fraction(1000.0), 0.5);
    assert_eq!(p.time_fraction(5000.0), 1.0);
}

#[test]
fn fractional_start_runs_forward_to_a_whole_row() {
    let s = settings(2.0, 1);
    let p = plan_from(3.4, 5, 10, &s).unwrap();
    assert_eq!(p.start_position, 3.4);
    assert_eq!(p.end_position, 4.0 + 1.0 + 10.0);
    assert_eq!(p.position_at(0.0), 3.4);
    assert_eq!(p.position_at(1.0), 15.0);

    // Just under a whole row: the next row wraps to index 0.
    let p = plan_from(9.5, 0, 10, &s).unwrap();
    assert_eq!(p.end_position, 10.0 + 10.0);
    assert_eq!((p.end_position as usize) % 10, 0);
}

#[test]
fn whole_start_matches_plan_offset() {
    let s = settings(2.0, 3);
    let from_zero = plan(4, 9, &s).unwrap();
    let p = plan_from(0.0, 4, 9, &s).unwrap();
    assert_eq!(p, from_zero);

    let p = plan_from(7.0, 4, 9, &s).unwrap();
    assert_eq!(p.end_position, 7.0 + 6.0 + 27.0);
    assert_eq!((p.end_position as usize) % 9, 4);
}

#[test]
fn negative_or_non_finite_start_is_rejected() {
    for start in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            plan_from(start, 0, 3, &settings(1.0, 1)),
            Err(SpinError::InvalidConfiguration(_))
        ));
    }
}
