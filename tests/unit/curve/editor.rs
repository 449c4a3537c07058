use super::*;

#[test]
fn set_control_point_clamps_into_unit_square() {
    let mut editor = CurveEditor::default();
    editor.set_control_point(ControlPoint::First, 1.4, -0.2);
    editor.set_control_point(ControlPoint::Second, 0.3, 0.8);

    let p = editor.params();
    assert_eq!(p, CurveParameters::new(1.0, 0.0, 0.3, 0.8));
    p.validate().unwrap();
}

#[test]
fn control_point_reads_back_handle() {
    let editor = CurveEditor::new(CurveParameters::new(0.1, 0.2, 0.3, 0.4));
    assert_eq!(
        editor.control_point(ControlPoint::Second),
        Point::new(0.3, 0.4)
    );
}

#[test]
fn presets_round_trip_through_matching_preset() {
    let mut editor = CurveEditor::default();
    for preset in CurvePreset::ALL {
        editor.apply_preset(preset);
        assert_eq!(editor.matching_preset(), Some(preset));
    }

    editor.set_control_point(ControlPoint::First, 0.33, 0.33);
    assert_eq!(editor.matching_preset(), None);
}

#[test]
fn reset_returns_to_linear() {
    let mut editor = CurveEditor::from_preset(CurvePreset::Dramatic);
    editor.reset();
    assert_eq!(editor.matching_preset(), Some(CurvePreset::Linear));
}

#[test]
fn new_clamps_out_of_range_input() {
    let editor = CurveEditor::new(CurveParameters::new(2.0, 0.5, 0.5, -3.0));
    assert_eq!(editor.params(), CurveParameters::new(1.0, 0.5, 0.5, 0.0));
}

#[test]
fn preview_starts_and_ends_on_anchors() {
    let editor = CurveEditor::from_preset(CurvePreset::EaseInOut);
    let pts = editor.preview(10);
    assert_eq!(pts.len(), 11);
    assert_eq!(pts[0], Point::new(0.0, 0.0));
    assert_eq!(pts[10], Point::new(1.0, 1.0));
}
