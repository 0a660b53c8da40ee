//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as discovering the eligible test result files in a directory.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如发现目录中符合条件的测试结果文件。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix marking an eligible test result file.
pub const RESULT_FILE_PREFIX: &str = "TEST";

/// Expected extension of a test result file.
pub const RESULT_FILE_SUFFIX: &str = ".xml";

/// Lists the test result files in `dir`, sorted by file name.
///
/// Only regular files whose name starts with [`RESULT_FILE_PREFIX`] and ends
/// with [`RESULT_FILE_SUFFIX`] are returned; directories and other entries
/// are skipped silently.
///
/// # Arguments
/// * `dir` - Path to the directory with result files
///
/// # Returns
/// The matching file paths in sorted order, or an error if the directory
/// cannot be read.
pub fn list_result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(RESULT_FILE_PREFIX) && name.ends_with(RESULT_FILE_SUFFIX) {
            files.push(path);
        }
    }

    // Entries come from one directory, so path order is file name order.
    files.sort();
    Ok(files)
}
