//! Property-based tests for the config store

use proptest::prelude::*;
use searxng_cli::cli::hoist_global_options;
use searxng_cli::config::{ConfigLoader, SearxngConfig};
use tempfile::TempDir;

fn base_url() -> impl Strategy<Value = String> {
    "https://[a-z]{1,12}\\.example\\.(com|org)(/[a-z0-9]{1,8}){0,3}"
}

/// Any base_url written with trailing slashes loads without them
#[test]
fn test_trailing_slashes_are_stripped_on_load() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(base_url(), 1usize..5), |(url, slashes)| {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("config.yml");
            std::fs::write(&path, format!("base_url: {}{}\n", url, "/".repeat(slashes))).unwrap();

            let config = ConfigLoader::load(&path).unwrap();
            prop_assert_eq!(config.base_url, url);
            Ok(())
        })
        .unwrap();
}

/// save then load returns the same config
#[test]
fn test_save_load_round_trip() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&base_url(), |url| {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("dir").join("config.yml");
            let config = SearxngConfig::new(&url);

            ConfigLoader::save(&config, &path).unwrap();
            prop_assert_eq!(ConfigLoader::load(&path).unwrap(), config);
            Ok(())
        })
        .unwrap();
}

/// Hoisting neither drops nor duplicates tokens
#[test]
fn test_hoisting_is_a_permutation() {
    let token = prop_oneof![
        Just("--verbose".to_string()),
        Just("-v".to_string()),
        Just("--config".to_string()),
        Just("-c=x.yml".to_string()),
        Just("search".to_string()),
        "[a-z]{1,6}",
    ];
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec(token, 0..10), |args| {
            let mut hoisted = hoist_global_options(&args);
            let mut original = args.clone();
            hoisted.sort();
            original.sort();
            prop_assert_eq!(hoisted, original);
            Ok(())
        })
        .unwrap();
}
