use super::*;

#[test]
fn round2_is_half_away_from_zero() {
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(-0.125), -0.13);
    assert_eq!(round2(0.4 / 5.0), 0.08);
    assert_eq!(round2(0.4 / 35.0), 0.01);
}

#[test]
fn body_size_range_matches_reference_steps() {
    let steps = RangeConfig::new(0.8, 1.2).unwrap().quantize();
    assert_eq!(steps.step, 0.08);
    assert_eq!(steps.slider_step, 0.01);
    let values: Vec<f64> = steps.values().collect();
    assert_eq!(values, vec![0.8, 0.88, 0.96, 1.04, 1.12, 1.2]);
}

#[test]
fn negative_ranges_step_through_zero() {
    let steps = RangeConfig::new(-10.0, 15.0).unwrap().quantize();
    assert_eq!(steps.step, 5.0);
    assert_eq!(steps.slider_step, 0.71);
    let values: Vec<f64> = steps.values().collect();
    assert_eq!(values, vec![-10.0, -5.0, 0.0, 5.0, 10.0, 15.0]);
}

#[test]
fn last_value_is_exactly_max() {
    for (min, max) in [(0.5, 1.25), (0.25, 2.25), (-15.0, 20.0), (0.0, 1.0), (0.5, 1.5)] {
        let steps = RangeConfig::new(min, max).unwrap().quantize();
        let values: Vec<f64> = steps.values().collect();
        assert_eq!(values.first().copied(), Some(min));
        assert_eq!(values.last().copied(), Some(max));
        assert_eq!(values.len(), 6, "range [{min}, {max}]");
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn sequence_is_restartable() {
    let steps = RangeConfig::new(0.0, 1.0).unwrap().quantize();
    let it = steps.values();
    assert_eq!(it.len(), 6);
    let a: Vec<f64> = it.clone().collect();
    let b: Vec<f64> = it.collect();
    assert_eq!(a, b);
}

#[test]
fn slider_step_has_a_floor() {
    let steps = RangeConfig::new(0.0, 0.1).unwrap().quantize();
    assert_eq!(steps.step, 0.02);
    assert_eq!(steps.slider_step, 0.01);
}

#[test]
fn invalid_ranges_are_rejected() {
    assert!(RangeConfig::new(1.0, 1.0).is_err());
    assert!(RangeConfig::new(2.0, 1.0).is_err());
    assert!(RangeConfig::new(f64::NAN, 1.0).is_err());
    assert!(RangeConfig::new(0.0, 0.01).is_err());
}
