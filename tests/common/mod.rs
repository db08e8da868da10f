/*!
 * Common test utilities for the ticketgate test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ticketgate::{Controller, Outcome};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Runs the default controller over `input` and returns the outcome and stdout text
pub fn run_batch(input: &str) -> Result<(Outcome, String)> {
    run_batch_with(&Controller::default(), input)
}

/// Runs `controller` over `input` and returns the outcome and stdout text
pub fn run_batch_with(controller: &Controller, input: &str) -> Result<(Outcome, String)> {
    let mut output = Vec::new();
    let outcome = controller.run(input.as_bytes(), &mut output)?;
    Ok((outcome, String::from_utf8(output)?))
}

/// Output lines as printed
pub fn lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}
