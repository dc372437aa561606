use vendessimal_core::config::SceneConfig;
use vendessimal_core::features::FeatureCategory;
use vendessimal_core::grid::GridCoord;
use vendessimal_core::primes::primes_upto;
use vendessimal_core::scene::GridScene;
use vendessimal_core::GridError;

#[test]
fn end_to_end_fifty() {
    let config = SceneConfig {
        n: 50,
        width: 20,
        modulus_a: 19,
        modulus_b: 29,
        ..SceneConfig::default()
    };
    let scene = GridScene::compute(&config).unwrap();

    assert_eq!(scene.residues.get(GridCoord::new(2, 0)), Some(99));
    assert!(scene.lucky_trace.contains_value(41));
    assert_eq!(scene.lucky_trace.points[0].coord(), GridCoord::new(2, 0));
    assert!(primes_upto(50).contains(&41));

    assert_eq!(scene.twins.category, FeatureCategory::TwinPrime);
    assert_eq!(scene.twins.values(), vec![3, 5, 7, 11, 13, 17, 19, 29, 31, 41, 43]);
    assert!(scene.rail_mask[[0, 0]] > 0.0);
}

#[test]
fn default_scene_highlights_thresholds() {
    let scene = GridScene::compute(&SceneConfig::default()).unwrap();
    assert_eq!(scene.rows, 150);
    let labels: Vec<&str> = scene.thresholds.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["1061", "1063 (prime)", "1064 = 2³·7·19"]);

    let sets = scene.feature_sets();
    assert_eq!(sets.len(), 5);
    let threshold_set = sets.last().unwrap();
    assert_eq!(threshold_set.category, FeatureCategory::Threshold);
    assert_eq!(threshold_set.points[1].label.as_deref(), Some("1063 (prime)"));
    assert!(scene.rail_sqrt2.points.iter().all(|p| p.value <= 3000));
    assert!(!scene.rail_sqrt5.is_empty());
}

#[test]
fn feature_sets_carry_every_scene_set() {
    let scene = GridScene::compute(&SceneConfig::with_n(400)).unwrap();
    let sets = scene.feature_sets();
    assert_eq!(sets[0], scene.rail_sqrt2);
    assert_eq!(sets[1], scene.rail_sqrt5);
    assert_eq!(sets[2], scene.twins);
    assert_eq!(sets[3], scene.lucky_trace);
    assert!(sets[..2].iter().all(|s| s.category == FeatureCategory::Rail));
    assert!(!sets[0].is_empty() && !sets[1].is_empty());

    // the JSON hand-off keeps both rail sets distinct
    let json = serde_json::to_value(&sets).unwrap();
    assert_eq!(json[0]["category"], "rail");
    assert_eq!(json[0]["points"], serde_json::to_value(&scene.rail_sqrt2.points).unwrap());
    assert_eq!(json[1]["points"], serde_json::to_value(&scene.rail_sqrt5.points).unwrap());
}

#[test]
fn bad_config_fails_before_computation() {
    let mut config = SceneConfig::with_n(100);
    config.triad.sigma = -1.0;
    assert!(matches!(GridScene::compute(&config), Err(GridError::InvalidParameter(_))));

    let config = SceneConfig {
        modulus_b: 0,
        ..SceneConfig::with_n(100)
    };
    assert!(matches!(GridScene::compute(&config), Err(GridError::InvalidModulus(0))));

    assert!(GridScene::compute(&SceneConfig::with_n(0)).is_err());
}

#[test]
fn scene_exports_json() {
    let scene = GridScene::compute(&SceneConfig::with_n(60)).unwrap();
    let json = scene.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["n"], 60);
    assert_eq!(value["twins"]["category"], "twin_prime");
    let back: GridScene = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn config_round_trips_through_json() {
    let config = SceneConfig::with_n(777);
    let json = config.to_json().unwrap();
    assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
}
