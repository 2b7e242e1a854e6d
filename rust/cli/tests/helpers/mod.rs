//! Shared helpers for CLI integration tests.
//!
//! Tests that touch process environment must be `#[serial]` and go through
//! [`EnvGuard`], which clears every `CARDDUEL_*` setting first and restores the
//! previous values on drop.

#![allow(dead_code)]

use cardduel_cli::run;

const MANAGED_VARS: &[&str] = &[
    "CARDDUEL_CONFIG",
    "CARDDUEL_SEED",
    "CARDDUEL_MIN_STAKE",
    "CARDDUEL_MAX_STAKE",
    "CARDDUEL_POOL",
    "CARDDUEL_BANKROLL",
    "CARDDUEL_TEST_INPUT",
];

pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clears all managed variables, then applies `pairs`.
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in MANAGED_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            std::env::remove_var(key);
        }
        for (key, value) in pairs {
            if !MANAGED_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            std::env::set_var(key, value);
        }
        EnvGuard { restores }
    }

    pub fn clean() -> Self {
        Self::apply(&[])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}

pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv = std::iter::once("cardduel").chain(args.iter().copied());
    let exit_code = run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Value printed after `label: ` in command output.
pub fn field<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let prefix = format!("{}: ", label);
    text.lines()
        .find_map(|l| l.strip_prefix(prefix.as_str()))
        .map(str::trim)
}
