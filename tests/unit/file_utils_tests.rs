/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use mdsub::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.srt", "1")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that generate_output_path swaps the extension
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/talk.srt"),
        Path::new("/tmp/output"),
        "ass",
    );
    assert_eq!(output_path, Path::new("/tmp/output/talk.ass"));

    let dotted = FileManager::generate_output_path(Path::new("talk.md"), Path::new(""), ".ass");
    assert_eq!(dotted, Path::new("talk.ass"));
}

/// Test that find_files walks subdirectories and ignores case
#[test]
fn test_find_files_withNestedFiles_shouldFindAllMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.srt", "")?;
    common::create_test_file(temp_dir.path(), "nested/b.SRT", "")?;
    common::create_test_file(temp_dir.path(), "c.txt", "")?;

    let found = FileManager::find_files(temp_dir.path(), ".srt")?;
    assert_eq!(found.len(), 2);

    Ok(())
}

/// Test script extension detection
#[test]
fn test_is_script_file_withKnownExtensions_shouldReturnTrue() {
    assert!(FileManager::is_script_file("talk.srt"));
    assert!(FileManager::is_script_file("talk.MD"));
    assert!(!FileManager::is_script_file("talk.ass"));
    assert!(!FileManager::is_script_file("talk"));
}

/// Test writing creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("deep/er/out.ass");

    FileManager::write_to_file(&target, "content")?;

    assert_eq!(FileManager::read_to_string(&target)?, "content");
    assert!(FileManager::dir_exists(temp_dir.path().join("deep/er")));

    Ok(())
}

/// Test reading a missing file reports the path
#[test]
fn test_read_to_string_withMissingFile_shouldFailWithContext() {
    let err = FileManager::read_to_string("definitely_missing.srt").unwrap_err();
    assert!(err.to_string().contains("definitely_missing.srt"));
}
