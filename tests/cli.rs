//! End-to-end tests driving the `slice-preview` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slice-preview"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run slice-preview")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn render_writes_default_output_file() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "HomeHero"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let html = std::fs::read_to_string(tmp.path().join("homehero-preview.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Rozwiązania dla ludzi"));

    let text = stdout(&out);
    assert!(text.contains("Generated HomeHero preview"));
    assert!(text.contains("Language: pl"));
    assert!(text.contains("Breakpoints: 375px (mobile) and 1440px (desktop)"));
}

#[test]
fn render_with_language_and_output() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "HomeHero", "en", "site/hero.html"]);
    assert!(out.status.success());

    let html = std::fs::read_to_string(tmp.path().join("site/hero.html")).unwrap();
    assert!(html.contains("Solutions for people, technology for business"));
    assert!(html.contains(r#"<html lang="en">"#));
}

#[test]
fn render_unimplemented_slice_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "HomeFaq"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not yet implemented"));
    assert!(!tmp.path().join("homefaq-preview.html").exists());
}

#[test]
fn render_rejects_unknown_language() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["render", "HomeHero", "de"]);
    assert!(!out.status.success());
}

#[test]
fn render_uses_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("slice-preview.toml"),
        "default_lang = \"en\"\n\n[variables]\n\"--primary\" = \"#abcdef\"\n",
    )
    .unwrap();
    let out = run(tmp.path(), &["render", "HomeHero"]);
    assert!(out.status.success());

    let html = std::fs::read_to_string(tmp.path().join("homehero-preview.html")).unwrap();
    assert!(html.contains("Discover our solutions"));
    assert!(html.contains("background-color: #abcdef"));
}

#[test]
fn invalid_config_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("slice-preview.toml"), "unknown_key = 1\n").unwrap();
    let out = run(tmp.path(), &["render", "HomeHero"]);
    assert!(!out.status.success());
}

#[test]
fn markup_in_config_variable_is_rejected() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("slice-preview.toml"),
        "[variables]\n\"--bg\" = \"#fff</style><script>alert(1)</script>\"\n",
    )
    .unwrap();
    let out = run(tmp.path(), &["render", "HomeHero"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("'--bg'"));
    assert!(!tmp.path().join("homehero-preview.html").exists());
}

#[test]
fn resolve_prints_inline_style() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["resolve", "flex flex-col lg:flex-row", "--breakpoint", "desktop"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(r#"style="display: flex; flex-direction: row""#));
}

#[test]
fn resolve_json() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["resolve", "text-[22px] mx-auto", "--json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["font-size"], "22px");
    assert_eq!(value["margin-left"], "auto");
}

#[test]
fn list_shows_slices() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["list"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("001 HomeHero"));
    assert!(text.contains("HomeFaq (not implemented)"));
}

#[test]
fn gen_config_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    std::fs::write(tmp.path().join("slice-preview.toml"), stdout(&out)).unwrap();
    let out = run(tmp.path(), &["render", "HomeHero"]);
    assert!(out.status.success());
}
