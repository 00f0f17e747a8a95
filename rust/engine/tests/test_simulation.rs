use pokerhand_engine::errors::EngineError;
use pokerhand_engine::simulation::{run, Predicate, SimConfig};

fn config(predicate: Predicate, target: u64, seed: u64) -> SimConfig {
    SimConfig {
        target_successes: target,
        predicate,
        seed: Some(seed),
        max_trials: None,
    }
}

#[test]
fn stops_at_target_successes() {
    let result = run(&config(Predicate::Straight, 3, 42)).unwrap();
    assert_eq!(result.successes, 3);
    assert_eq!(result.observed.len(), 3);
    assert!(result.completed);
    assert!(result.trials >= 3);
    assert!(result.observed.iter().all(|h| h.is_straight()));
}

#[test]
fn same_seed_reproduces_the_run() {
    let a = run(&config(Predicate::Flush, 2, 1234)).unwrap();
    let b = run(&config(Predicate::Flush, 2, 1234)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.base_seed, 1234);
}

#[test]
fn probability_is_successes_over_trials() {
    let result = run(&config(Predicate::Pair, 20, 9)).unwrap();
    let expected = result.successes as f64 / result.trials as f64;
    assert_eq!(result.probability(), expected);
    assert_eq!(result.percentage(), 100.0 * expected);
}

#[test]
fn pair_frequency_is_plausible() {
    // one pair is dealt about 42% of the time
    let result = run(&config(Predicate::Pair, 400, 2024)).unwrap();
    let p = result.probability();
    assert!(p > 0.30 && p < 0.55, "pair probability {} out of range", p);
}

#[test]
fn zero_target_runs_no_trials() {
    let result = run(&config(Predicate::Straight, 0, 1)).unwrap();
    assert_eq!(result.trials, 0);
    assert_eq!(result.successes, 0);
    assert!(result.completed);
    assert_eq!(result.probability(), 0.0);
}

#[test]
fn max_trials_bounds_the_run() {
    let result = run(&SimConfig {
        target_successes: 1_000,
        predicate: Predicate::StraightFlush,
        seed: Some(5),
        max_trials: Some(50),
    })
    .unwrap();
    assert_eq!(result.trials, 50);
    assert!(!result.completed);
    assert!(result.successes < 1_000);
}

#[test]
fn unseeded_run_reports_its_seed() {
    let result = run(&SimConfig {
        target_successes: 1,
        predicate: Predicate::Pair,
        seed: None,
        max_trials: None,
    })
    .unwrap();
    let again = run(&config(Predicate::Pair, 1, result.base_seed)).unwrap();
    assert_eq!(result, again);
}

#[test]
fn predicate_names_round_trip() {
    for p in Predicate::all() {
        assert_eq!(p.as_str().parse::<Predicate>().unwrap(), p);
    }
    assert_eq!("Full_House".parse::<Predicate>().unwrap(), Predicate::FullHouse);
    assert_eq!(
        "royal".parse::<Predicate>(),
        Err(EngineError::UnknownPredicate("royal".into()))
    );
}

#[test]
fn result_serializes_to_json() {
    let result = run(&config(Predicate::Straight, 1, 3)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["predicate"], "straight");
    assert_eq!(json["successes"], 1);
    assert_eq!(json["observed"].as_array().unwrap().len(), 1);
}
