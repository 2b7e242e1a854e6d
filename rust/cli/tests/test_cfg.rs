mod helpers;

use cardduel_engine::config::UNIT;
use helpers::{run_cli, EnvGuard};
use serde_json::Value;
use serial_test::serial;

fn cfg_json() -> Value {
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stderr.is_empty());
    serde_json::from_str(&res.stdout).unwrap()
}

#[test]
#[serial]
fn defaults_are_reported_with_their_source() {
    let _env = EnvGuard::clean();
    let json = cfg_json();
    assert_eq!(json["min_stake"]["value"].as_u64(), Some(UNIT / 10));
    assert_eq!(json["max_stake"]["value"].as_u64(), Some(2 * UNIT));
    assert_eq!(json["pool"]["value"].as_u64(), Some(100 * UNIT));
    assert_eq!(json["bankroll"]["value"].as_u64(), Some(10 * UNIT));
    assert!(json["seed"]["value"].is_null());
    for key in ["min_stake", "max_stake", "pool", "bankroll", "seed"] {
        assert_eq!(json[key]["source"].as_str(), Some("default"), "{}", key);
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardduel.toml");
    std::fs::write(&path, "pool = \"250\"\nmax_stake = 5\nseed = 5\n").unwrap();

    let _env = EnvGuard::apply(&[
        ("CARDDUEL_CONFIG", path.to_str().unwrap()),
        ("CARDDUEL_SEED", "9"),
        ("CARDDUEL_BANKROLL", "1.25"),
    ]);
    let json = cfg_json();
    assert_eq!(json["pool"]["value"].as_u64(), Some(250 * UNIT));
    assert_eq!(json["pool"]["source"].as_str(), Some("file"));
    assert_eq!(json["max_stake"]["value"].as_u64(), Some(5 * UNIT));
    assert_eq!(json["max_stake"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(9));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["bankroll"]["value"].as_u64(), Some(UNIT + UNIT / 4));
    assert_eq!(json["bankroll"]["source"].as_str(), Some("env"));
    assert_eq!(json["min_stake"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn bad_env_amount_is_an_error() {
    let _env = EnvGuard::apply(&[("CARDDUEL_POOL", "lots")]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"));
    assert!(res.stderr.contains("CARDDUEL_POOL"));
}

#[test]
#[serial]
fn inverted_stake_bounds_are_rejected() {
    let _env = EnvGuard::apply(&[("CARDDUEL_MIN_STAKE", "3"), ("CARDDUEL_MAX_STAKE", "2")]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("min_stake must not exceed max_stake"));
}

#[test]
#[serial]
fn unknown_file_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardduel.toml");
    std::fs::write(&path, "starting_stack = 20000\n").unwrap();
    let _env = EnvGuard::apply(&[("CARDDUEL_CONFIG", path.to_str().unwrap())]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    let _env = EnvGuard::apply(&[("CARDDUEL_CONFIG", "/nonexistent/cardduel.toml")]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}
