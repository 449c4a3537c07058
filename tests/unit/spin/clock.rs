use super::*;

#[test]
fn manual_clock_moves_only_on_frames() {
    let mut clock = ManualClock::new(16.0);
    assert_eq!(clock.now_ms(), 0.0);
    assert_eq!(clock.now_ms(), 0.0);
    clock.wait_for_next_frame();
    clock.wait_for_next_frame();
    assert_eq!(clock.now_ms(), 32.0);
    clock.advance(100.0);
    assert_eq!(clock.now_ms(), 132.0);
    clock.advance(-5.0);
    assert_eq!(clock.now_ms(), 132.0);
}

#[test]
fn manual_clock_from_fps() {
    let clock = ManualClock::with_fps(50.0).unwrap();
    assert_eq!(clock.step_ms(), 20.0);
    assert!(ManualClock::with_fps(0.0).is_err());
    assert!(ManualClock::with_fps(f64::NAN).is_err());
}

#[test]
fn borrowed_clock_forwards() {
    fn drive<C: FrameClock>(mut clock: C) -> f64 {
        clock.wait_for_next_frame();
        clock.now_ms()
    }

    let mut clock = ManualClock::starting_at(10.0, 5.0);
    assert_eq!(drive(&mut clock), 15.0);
    assert_eq!(clock.now_ms(), 15.0);
}

#[test]
fn system_clock_is_monotonic() {
    let mut clock = SystemClock::new(1000.0).unwrap();
    let a = clock.now_ms();
    clock.wait_for_next_frame();
    let b = clock.now_ms();
    assert!(b >= a);
    assert!(SystemClock::new(-1.0).is_err());
}
