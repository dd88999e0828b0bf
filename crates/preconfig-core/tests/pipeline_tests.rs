//! End-to-end tests for the build pipeline against a real directory layout

use preconfig_core::{BuildPaths, Error, Stage, WriteStatus, build, check, render};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SETTINGS: &str = r#"{"site_name": "Docs", "author": "Jane"}"#;
const NAV: &str = "- Home: index.md";
const TEMPLATE: &str = "name: {{site_name}}\nauthor: {{author}}\nnav:\n{{nav_yaml}}";

fn write_inputs(root: &Path, settings: &str, nav: &str, template: &str) {
    let pre = root.join("preConfiguration");
    fs::create_dir_all(&pre).unwrap();
    fs::create_dir_all(root.join("documentation")).unwrap();
    fs::write(pre.join("config.json"), settings).unwrap();
    fs::write(pre.join("nav_config.yml"), nav).unwrap();
    fs::write(pre.join("mkdocs-template.yml.j2"), template).unwrap();
}

fn project() -> (TempDir, BuildPaths) {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), SETTINGS, NAV, TEMPLATE);
    let paths = BuildPaths::rooted(temp.path());
    (temp, paths)
}

fn output_of(paths: &BuildPaths) -> String {
    fs::read_to_string(paths.output.to_native()).unwrap()
}

#[test]
fn build_writes_rendered_document() {
    let (_temp, paths) = project();

    let report = build(&paths).unwrap();

    assert_eq!(report.status, WriteStatus::Created);
    assert_eq!(output_of(&paths), "name: Docs\nauthor: Jane\nnav:\n- Home: index.md");
    assert_eq!(report.bytes, output_of(&paths).len());
}

#[test]
fn build_is_idempotent() {
    let (_temp, paths) = project();

    build(&paths).unwrap();
    let first = fs::read(paths.output.to_native()).unwrap();
    let report = build(&paths).unwrap();
    let second = fs::read(paths.output.to_native()).unwrap();

    assert_eq!(first, second);
    assert_eq!(report.status, WriteStatus::Unchanged);
}

#[test]
fn build_replaces_previous_contents() {
    let (_temp, paths) = project();
    fs::write(paths.output.to_native(), "stale: true\n".repeat(50)).unwrap();

    let report = build(&paths).unwrap();

    assert_eq!(report.status, WriteStatus::Updated);
    assert_eq!(output_of(&paths), "name: Docs\nauthor: Jane\nnav:\n- Home: index.md");
}

#[test]
fn yaml_navigation_is_injected_verbatim() {
    let temp = TempDir::new().unwrap();
    let nav = "- Home: index.md\n- Guide:\n    - Install: guide/install.md\n    - Usage: guide/usage.md\n";
    let template = "site_name: {{ site_name }}\nsite_author: {{ author }}\ntheme:\n  name: material\nnav:\n{{ nav_yaml }}";
    write_inputs(temp.path(), SETTINGS, nav, template);

    let rendered = render(&BuildPaths::rooted(temp.path())).unwrap();

    insta::assert_snapshot!(rendered, @r###"
    site_name: Docs
    site_author: Jane
    theme:
      name: material
    nav:
    - Home: index.md
    - Guide:
        - Install: guide/install.md
        - Usage: guide/usage.md
    "###);
}

#[test]
fn missing_settings_fails_without_output() {
    let (_temp, paths) = project();
    fs::remove_file(paths.settings.to_native()).unwrap();

    let err = build(&paths).unwrap_err();

    assert!(matches!(err, Error::NotFound { stage: Stage::Settings, .. }), "{err:?}");
    assert!(!paths.output.exists());
}

#[test]
fn missing_navigation_fails_without_touching_output() {
    let (_temp, paths) = project();
    fs::write(paths.output.to_native(), "previous").unwrap();
    fs::remove_file(paths.nav.to_native()).unwrap();

    let err = build(&paths).unwrap_err();

    assert_eq!(err.stage(), Stage::Navigation);
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(output_of(&paths), "previous");
}

#[test]
fn missing_template_fails() {
    let (_temp, paths) = project();
    fs::remove_file(paths.template.to_native()).unwrap();

    let err = build(&paths).unwrap_err();
    assert!(matches!(err, Error::NotFound { stage: Stage::Template, .. }), "{err:?}");
}

#[test]
fn malformed_settings_is_parse_error() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), r#"{"site_name": "Docs""#, NAV, TEMPLATE);
    let paths = BuildPaths::rooted(temp.path());

    let err = build(&paths).unwrap_err();

    assert!(matches!(err, Error::Parse { stage: Stage::Settings, .. }), "{err:?}");
    assert!(!paths.output.exists());
}

#[test]
fn undefined_placeholder_fails_before_writing() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), SETTINGS, NAV, "name: {{site_name}}\nrepo: {{repo_url}}\n");
    let paths = BuildPaths::rooted(temp.path());

    let err = build(&paths).unwrap_err();

    match &err {
        Error::Render { missing } => assert_eq!(missing, &vec!["repo_url".to_string()]),
        other => panic!("expected Render error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "template references undefined keys: repo_url");
    assert!(!paths.output.exists());
}

#[test]
fn missing_output_directory_is_write_error() {
    let (temp, paths) = project();
    fs::remove_dir(temp.path().join("documentation")).unwrap();

    let err = build(&paths).unwrap_err();

    assert_eq!(err.stage(), Stage::Write);
    assert!(!temp.path().join("documentation").exists());
}

#[test]
fn check_reports_stale_then_current() {
    let (_temp, paths) = project();

    let before = check(&paths).unwrap();
    assert!(!before.is_current());
    assert!(before.existing.is_none());
    assert!(!paths.output.exists(), "check must not write");

    build(&paths).unwrap();

    let after = check(&paths).unwrap();
    assert!(after.is_current());
    assert_eq!(after.diff(), None);
}

#[test]
fn check_diff_shows_changed_lines() {
    let (_temp, paths) = project();
    build(&paths).unwrap();
    fs::write(
        paths.settings.to_native(),
        r#"{"site_name": "Handbook", "author": "Jane"}"#,
    )
    .unwrap();

    let diff = check(&paths).unwrap().diff().unwrap();

    assert!(diff.contains("-name: Docs"), "{diff}");
    assert!(diff.contains("+name: Handbook"), "{diff}");
}

#[test]
fn jinja_filter_in_template_fails_before_writing() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), SETTINGS, NAV, "name: {{ site_name | upper }}\nnav:\n{{nav_yaml}}");
    let paths = BuildPaths::rooted(temp.path());

    let err = build(&paths).unwrap_err();

    match &err {
        Error::Parse { stage: Stage::Template, message, .. } => {
            assert!(message.contains("`{{ site_name | upper }}`"), "{message}");
        }
        other => panic!("expected template Parse error, got {other:?}"),
    }
    assert!(!paths.output.exists());
}

#[test]
fn boolean_and_null_settings_use_python_spelling() {
    let temp = TempDir::new().unwrap();
    write_inputs(
        temp.path(),
        r#"{"site_name": "Docs", "strict": true, "edit_uri": null}"#,
        NAV,
        "site_name: {{site_name}}\nstrict: {{strict}}\nedit_uri: {{edit_uri}}\n",
    );

    let rendered = render(&BuildPaths::rooted(temp.path())).unwrap();

    assert_eq!(rendered, "site_name: Docs\nstrict: True\nedit_uri: None\n");
}
