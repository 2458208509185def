//! End-to-end tests for the docshell binary.

mod common;

use anyhow::Result;
use std::fs;
use std::process::Command;

/// Tests full binary execution generates valid output.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let workspace = common::create_workspace()?;
    let root = workspace.path();
    common::write_page(root, "index.md", &common::with_title("Home", "Hi\n"))?;
    common::write_page(root, "chapter-1.md", "# Untitled chapter\n")?;
    let output = root.join("site");

    // Act
    let result = Command::new(env!("CARGO_BIN_EXE_docshell"))
        .arg(root.join("pages"))
        .arg("-o")
        .arg(&output)
        .arg("--no-open")
        .output()?;

    // Assert
    assert!(
        result.status.success(),
        "Binary failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Generated 2 pages"));

    let index = fs::read_to_string(output.join("index.html"))?;
    assert_eq!(common::header_title(&index), Some("Home"));

    let chapter = fs::read_to_string(output.join("chapter-1/index.html"))?;
    assert_eq!(
        common::header_title(&chapter),
        Some("Introduction to Next.Js")
    );
    Ok(())
}

/// Tests missing source directory is reported as an error.
#[test]
fn test_missing_source_e2e() -> Result<()> {
    // Arrange
    let workspace = common::create_workspace()?;
    let missing = workspace.path().join("nope");

    // Act
    let result = Command::new(env!("CARGO_BIN_EXE_docshell"))
        .arg(&missing)
        .arg("--no-open")
        .current_dir(workspace.path())
        .output()?;

    // Assert
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("does not exist"));
    Ok(())
}
