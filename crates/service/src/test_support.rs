#![cfg(test)]
use std::path::PathBuf;

/// Unique scratch file under the system temp dir; callers clean it up.
pub fn temp_json_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}.json", prefix, uuid::Uuid::new_v4()))
}
