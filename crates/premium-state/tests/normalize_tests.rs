use premium_protocol::ContributionMap;
use premium_state::normalize::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

fn sample_map() -> ContributionMap {
    [("age", -120.0), ("bmi", -80.0), ("children", 0.0), ("smoker", -1500.0)]
        .into_iter()
        .collect()
}

#[test]
fn test_scales_against_largest_contribution() {
    let bars = normalize(&sample_map()).unwrap();
    let percents: Vec<f64> = bars.iter().map(|b| b.percent).collect();
    assert!(approx(percents[0], 8.0), "age: {}", percents[0]);
    assert!(approx(percents[1], 5.33), "bmi: {}", percents[1]);
    assert_eq!(percents[2], 0.0);
    assert_eq!(percents[3], 100.0);
}

#[test]
fn test_preserves_input_order() {
    let map: ContributionMap = [("smoker", 9000.0), ("children", 10.0), ("age", 300.0), ("bmi", -40.0)]
        .into_iter()
        .collect();
    let order: Vec<String> = normalize(&map).unwrap().into_iter().map(|b| b.feature).collect();
    assert_eq!(order, vec!["smoker", "children", "age", "bmi"]);
}

#[test]
fn test_keeps_raw_values() {
    let bars = normalize(&sample_map()).unwrap();
    let raw: Vec<f64> = bars.iter().map(|b| b.raw_value).collect();
    assert_eq!(raw, vec![-120.0, -80.0, 0.0, -1500.0]);
}

#[test]
fn test_direction_by_sign() {
    let map: ContributionMap = [("age", 250.0), ("bmi", -10.0), ("children", 0.0)]
        .into_iter()
        .collect();
    let bars = normalize(&map).unwrap();
    assert_eq!(bars[0].direction, Direction::Increases);
    assert_eq!(bars[1].direction, Direction::Decreases);
}

#[test]
fn test_zero_contribution_decreases() {
    assert_eq!(Direction::of(0.0), Direction::Decreases);
    assert_eq!(Direction::of(-0.0), Direction::Decreases);
}

#[test]
fn test_percent_always_within_bounds() {
    let maps: Vec<ContributionMap> = vec![
        [("age", 1e-9)].into_iter().collect(),
        [("age", -1e12), ("bmi", 3.0)].into_iter().collect(),
        [("age", 5.0), ("bmi", 5.0), ("children", -5.0)].into_iter().collect(),
        [("a", 0.1), ("b", 0.2), ("c", 0.30000000000000004)].into_iter().collect(),
    ];
    for map in &maps {
        for bar in normalize(map).unwrap() {
            assert!(
                (0.0..=100.0).contains(&bar.percent),
                "{} out of range: {}",
                bar.feature,
                bar.percent
            );
        }
    }
}

#[test]
fn test_single_entry_is_full_scale() {
    let map: ContributionMap = [("smoker", -42.0)].into_iter().collect();
    let bars = normalize(&map).unwrap();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].percent, 100.0);
}

#[test]
fn test_all_zero_contributions_are_zero_percent() {
    let map: ContributionMap = [("age", 0.0), ("bmi", 0.0)].into_iter().collect();
    for bar in normalize(&map).unwrap() {
        assert_eq!(bar.percent, 0.0);
        assert_eq!(bar.direction, Direction::Decreases);
    }
}

#[test]
fn test_empty_map_fails() {
    assert_eq!(normalize(&ContributionMap::new()), Err(NormalizeError::Empty));
}

#[test]
fn test_non_finite_value_fails() {
    let map: ContributionMap = [("age", 1.0), ("bmi", f64::NAN)].into_iter().collect();
    assert_eq!(
        normalize(&map),
        Err(NormalizeError::NonFinite { feature: "bmi".into() })
    );
}
