use super::*;

#[test]
fn window_size_is_independent_of_list_size() {
    for total in [1usize, 5, 100, 5000] {
        for radius in [0usize, 1, 4, 9] {
            for position in [0.0, 2.5, 4999.99, 123_456.7] {
                let w = visible_window(position, total, radius);
                assert_eq!(w.len(), 2 * radius + 1, "total={total} radius={radius}");
            }
        }
    }
}

#[test]
fn window_is_centered_and_ordered() {
    let w = visible_window(12.25, 10, 2);
    assert_eq!(w.reference_index, 2);
    assert_eq!(w.fraction, 0.25);
    let offsets: Vec<i64> = w.slots.iter().map(|s| s.offset).collect();
    let indices: Vec<usize> = w.slots.iter().map(|s| s.index).collect();
    assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn window_wraps_at_both_ends() {
    let w = visible_window(0.0, 10, 2);
    let indices: Vec<usize> = w.slots.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![8, 9, 0, 1, 2]);

    let w = visible_window(9.5, 10, 2);
    let indices: Vec<usize> = w.slots.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![7, 8, 9, 0, 1]);
}

#[test]
fn negative_positions_normalize() {
    let w = visible_window(-0.5, 10, 0);
    assert_eq!(w.reference_index, 9);
    assert_eq!(w.fraction, 0.5);

    let w = visible_window(-21.0, 10, 0);
    assert_eq!(w.reference_index, 9);
}

#[test]
fn single_entry_repeats() {
    for position in [0.0, 0.7, 41.3, -3.2] {
        let w = visible_window(position, 1, 3);
        assert_eq!(w.len(), 7);
        assert!(w.slots.iter().all(|s| s.index == 0));
    }
}

#[test]
fn short_list_repeats_indices() {
    let w = visible_window(1.0, 3, 3);
    let indices: Vec<usize> = w.slots.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2, 0, 1, 2, 0, 1]);
}

#[test]
fn empty_list_yields_empty_window() {
    let w = visible_window(3.0, 0, 4);
    assert!(w.is_empty());
}

#[test]
fn non_finite_position_is_treated_as_zero() {
    let w = visible_window(f64::NAN, 4, 1);
    assert_eq!(w.reference_index, 0);
}

#[test]
fn into_reuses_buffer() {
    let mut w = visible_window(0.0, 10, 4);
    visible_window_into(3.0, 10, 1, &mut w);
    assert_eq!(w.len(), 3);
    assert_eq!(w.reference_index, 3);
}

#[test]
fn entries_resolves_against_list() {
    let list = EntryList::new(vec![
        Entry::new("A", "A", "1"),
        Entry::new("B", "B", "2"),
    ]);
    let w = visible_window(1.0, list.len(), 1);
    let tickets: Vec<&str> = w
        .entries(&list)
        .map(|(_, e)| e.ticket_number.as_str())
        .collect();
    assert_eq!(tickets, vec!["1", "2", "1"]);
}

#[test]
fn oversized_radius_is_capped() {
    let w = visible_window(0.0, 3, usize::MAX / 2);
    assert_eq!(w.len(), 2 * MAX_WINDOW_RADIUS + 1);
    assert_eq!(w.slots[MAX_WINDOW_RADIUS].offset, 0);
    assert_eq!(w.slots[MAX_WINDOW_RADIUS].index, 0);
}
