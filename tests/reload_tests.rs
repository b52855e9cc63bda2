// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration reloading.

#![cfg(feature = "file")]

mod common;

use std::fs;
use walnut::prelude::*;

#[test]
fn test_manual_reload() {
    let file = common::walnut_file("key = \"initial\"\n");
    let path = file.path().to_path_buf();

    let mut config = Config::builder().with_file(&path).unwrap().build().unwrap();
    assert_eq!(config.string("key").unwrap(), "initial");

    fs::write(&path, "key = \"updated\"\n").unwrap();

    // Value should still be old before reload
    assert_eq!(config.string("key").unwrap(), "initial");

    config.reload().unwrap();
    assert_eq!(config.string("key").unwrap(), "updated");
}

#[test]
fn test_reload_adds_and_removes_keys() {
    let file = common::walnut_file("a = 1\nb = 2\n");
    let path = file.path().to_path_buf();

    let mut config = Config::from_file(&path).unwrap();
    assert_eq!(config.keys(), vec!["a", "b"]);

    fs::write(&path, "b = 2\nc\n  d = 3\n").unwrap();
    config.reload().unwrap();

    assert_eq!(config.keys(), vec!["b", "c.d"]);
    assert!(matches!(config.int64("a"), Err(ConfigError::Undefined { .. })));
}

#[test]
fn test_failed_reload_keeps_previous_values() {
    let file = common::walnut_file("server\n  port = 8080\n");
    let path = file.path().to_path_buf();

    let mut config = Config::from_file(&path).unwrap();

    fs::write(&path, "server\n  port = 8080\n  port = 9090\n").unwrap();
    let err = config.reload().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Parse(ParseError::KeyConflict { line: 3, original_line: 2, .. })
    ));
    assert_eq!(config.int64("server.port").unwrap(), 8080);
}

#[test]
fn test_reload_after_file_removed() {
    let file = common::walnut_file("flag = true\n");
    let mut config = Config::from_file(file.path()).unwrap();

    drop(file);

    assert!(matches!(config.reload(), Err(ConfigError::SourceError { .. })));
    assert!(config.bool("flag").unwrap());
}

#[test]
fn test_reload_recovers_after_fix() {
    let file = common::walnut_file("level = 1\n");
    let path = file.path().to_path_buf();
    let mut config = Config::from_file(&path).unwrap();

    fs::write(&path, "level = one\n").unwrap();
    assert!(config.reload().is_err());
    assert_eq!(config.int64("level").unwrap(), 1);

    fs::write(&path, "level = 3\n").unwrap();
    config.reload().unwrap();
    assert_eq!(config.int64("level").unwrap(), 3);
}
