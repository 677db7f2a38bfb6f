//! Shared helpers for store-backed tests.

#![allow(dead_code)]

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding one store file.
pub struct TestStore {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Writes `content` verbatim to a fresh store file.
pub fn store_from_str(content: &str) -> TestStore {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");
    fs::write(&path, content).expect("Failed to write store");
    TestStore { _dir: dir, path }
}

/// Serializes `records` as a JSON array store.
pub fn store_from_records<T: Serialize>(records: &[T]) -> TestStore {
    let content = serde_json::to_string(records).expect("Failed to serialize records");
    store_from_str(&content)
}

pub fn store_from_values(records: Vec<Value>) -> TestStore {
    store_from_str(&Value::Array(records).to_string())
}
