use super::*;

#[test]
fn defaults_validate() {
    SpinSettings::default().validate().unwrap();
}

#[test]
fn non_positive_duration_is_rejected() {
    for secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let s = SpinSettings {
            min_duration_secs: secs,
            ..SpinSettings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(SpinError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn custom_curve_out_of_range_is_rejected() {
    let s = SpinSettings {
        custom_curve: Some(CurveParameters::new(0.2, 1.5, 0.4, 1.0)),
        ..SpinSettings::default()
    };
    assert!(matches!(
        s.validate(),
        Err(SpinError::InvalidConfiguration(_))
    ));
}

#[test]
fn custom_curve_overrides_profile() {
    let custom = CurveParameters::new(0.1, 0.2, 0.3, 0.4);
    let s = SpinSettings {
        deceleration: DecelerationProfile::Fast,
        custom_curve: Some(custom),
        ..SpinSettings::default()
    };
    assert_eq!(s.resolved_curve(), custom);

    let s = SpinSettings {
        deceleration: DecelerationProfile::Fast,
        ..SpinSettings::default()
    };
    assert_eq!(s.resolved_curve(), DecelerationProfile::Fast.curve());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let s = SpinSettings::from_json_str(r#"{"rotation_count": 5, "deceleration": "slow"}"#)
        .unwrap();
    assert_eq!(s.rotation_count, 5);
    assert_eq!(s.deceleration, DecelerationProfile::Slow);
    assert_eq!(s.min_duration_secs, 5.0);
    assert!(s.custom_curve.is_none());
}

#[test]
fn json_is_validated() {
    let err = SpinSettings::from_json_str(r#"{"min_duration_secs": 0}"#).unwrap_err();
    assert!(matches!(err, SpinError::InvalidConfiguration(_)));

    let err = SpinSettings::from_json_str("[]").unwrap_err();
    assert!(matches!(err, SpinError::Serde(_)));
}
