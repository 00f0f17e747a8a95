use pokerhand_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const VARS: &[&str] = &[
    "POKERHAND_CONFIG",
    "POKERHAND_SEED",
    "POKERHAND_TARGET",
    "POKERHAND_MAX_TRIALS",
    "POKERHAND_PREDICATE",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, stdout, _) = run_capture(&["pokerhand", "cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["target"]["value"].as_u64(), Some(10));
    assert_eq!(json["target"]["source"].as_str(), Some("default"));
    assert_eq!(json["predicate"]["value"].as_str(), Some("straight"));
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn cfg_precedence_env_over_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 456\ntarget = 4\npredicate = \"flush\"").unwrap();
    unsafe {
        std::env::set_var("POKERHAND_CONFIG", file.path());
        std::env::set_var("POKERHAND_SEED", "789");
    }

    let (code, stdout, _) = run_capture(&["pokerhand", "cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["target"]["value"].as_u64(), Some(4));
    assert_eq!(json["target"]["source"].as_str(), Some("file"));
    assert_eq!(json["predicate"]["value"].as_str(), Some("flush"));
}

#[test]
#[serial]
fn sim_uses_config_unless_flag_given() {
    clear_env();
    unsafe {
        std::env::set_var("POKERHAND_TARGET", "2");
        std::env::set_var("POKERHAND_PREDICATE", "pair");
        std::env::set_var("POKERHAND_SEED", "3");
    }

    let (code, stdout, _) = run_capture(&["pokerhand", "sim", "--json"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["predicate"], "pair");
    assert_eq!(json["successes"], 2);
    assert_eq!(json["base_seed"], 3);

    let (code, stdout, _) = run_capture(&["pokerhand", "sim", "--json", "--target", "1"]);
    clear_env();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["successes"], 1);
}

#[test]
#[serial]
fn invalid_env_value_fails() {
    clear_env();
    unsafe {
        std::env::set_var("POKERHAND_SEED", "not-a-number");
    }
    let (code, _, stderr) = run_capture(&["pokerhand", "cfg"]);
    let (sim_code, _, _) = run_capture(&["pokerhand", "sim", "--target", "1"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid configuration"));
    assert_eq!(sim_code, 2);
}
