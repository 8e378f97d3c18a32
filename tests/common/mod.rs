// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use account_exporter::AccountMapping;
use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a scratch directory and an output path inside it
pub fn test_output() -> Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("aws_accounts.json");
    Ok((path, temp_dir))
}

/// Test fixture: a few accounts inserted out of name order
pub fn team_mapping() -> AccountMapping {
    [
        ("qa", "475063612724"),
        ("alice", "111122223333"),
        ("bob", "444455556666"),
        ("zoe", "777788889999"),
    ]
    .into_iter()
    .collect()
}

/// Number of entries left in a directory
pub fn entry_count(dir: &TempDir) -> Result<usize> {
    Ok(std::fs::read_dir(dir.path())?.count())
}
