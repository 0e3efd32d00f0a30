//! CLI integration tests — runs the docs-nav binary against `fixtures/docs`.
//!
//! Run with: `cargo test --test cli_build`

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs")
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// A project directory with the fixture docs under `src/`.
fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixtures_dir(), &tmp.path().join("src")).unwrap();
    tmp
}

fn run(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docs-nav"))
        .arg("--project")
        .arg(project)
        .args(args)
        .output()
        .expect("failed to run docs-nav")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn build_writes_sidebar_and_rewrites() {
    let project = setup_project();
    let output = run(project.path(), &["build"]);
    assert!(output.status.success(), "build failed: {output:?}");

    let generated = project.path().join(".vitepress/generated");
    let sidebar: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(generated.join("sidebar.json")).unwrap())
            .unwrap();
    let rewrites: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(generated.join("rewrites.json")).unwrap())
            .unwrap();

    assert_eq!(sidebar[0]["text"], "Introduction");
    assert_eq!(sidebar[0]["link"], "/introduction/");
    assert_eq!(sidebar[1]["text"], "Getting Started");
    assert_eq!(sidebar[1]["base"], "/getting-started");
    assert_eq!(sidebar[1]["collapsed"], true);
    assert_eq!(
        sidebar[1]["items"][0]["link"],
        "/getting-started/installation/"
    );

    assert_eq!(
        rewrites["02-getting-started/01-installation.md"],
        "getting-started/installation/index.md"
    );
    assert_eq!(rewrites["assets/notes.md"], "assets/notes/index.md");
    assert!(rewrites.get("index.md").is_none());
}

#[test]
fn build_respects_output_override() {
    let project = setup_project();
    let out = project.path().join("nav-out");
    let output = run(project.path(), &["--output", out.to_str().unwrap(), "build"]);
    assert!(output.status.success());
    assert!(out.join("sidebar.json").is_file());
    assert!(out.join("rewrites.json").is_file());
}

#[test]
fn config_file_changes_sidebar() {
    let project = setup_project();
    std::fs::write(
        project.path().join("docs-nav.toml"),
        "[sidebar]\ncollapsed = false\nkeep_empty_groups = false\n",
    )
    .unwrap();

    let output = run(project.path(), &["sidebar", "--json"]);
    assert!(output.status.success());
    let sidebar: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    let texts: Vec<&str> = sidebar
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["text"].as_str().unwrap())
        .collect();
    assert!(!texts.contains(&"Empty Section"));
    assert_eq!(sidebar[1]["collapsed"], false);
}

#[test]
fn sidebar_prints_tree() {
    let project = setup_project();
    let output = run(project.path(), &["sidebar"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("002 Getting Started (/getting-started)"));
    assert!(text.contains("    001 Installation → /getting-started/installation/"));
}

#[test]
fn check_fails_on_colliding_rewrites() {
    let project = setup_project();
    std::fs::write(project.path().join("src/09-faq.md"), "# FAQ again\n").unwrap();

    let output = run(project.path(), &["check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("faq/index.md"), "stderr: {stderr}");
}

#[test]
fn missing_source_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["check"]);
    assert!(!output.status.success());
}

#[test]
fn gen_config_needs_no_project() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("docs-nav.toml"), "not valid = = toml").unwrap();

    let output = run(tmp.path(), &["gen-config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("link_style = \"full\""));
}
