use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary isolated from any per-user configuration on the host
fn eina_tools() -> Command {
    let mut cmd = Command::cargo_bin("eina-tools").unwrap();
    cmd.env_remove("EINA_TOOLS_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent/eina-tools-test-config");
    cmd
}

#[test]
fn idents_prints_sorted_unique_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eina-player.c");
    fs::write(
        &path,
        "obj = EINA_OBJ_NEW(x);\nw = gel_app_get_window(app);\nw2 = GEL_APP_GET_WINDOW(app);\n",
    )
    .unwrap();

    eina_tools()
        .arg("idents")
        .arg(&path)
        .assert()
        .success()
        .stdout("new,window\n");
}

#[test]
fn idents_without_matches_prints_empty_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.c");
    fs::write(&path, "int main (void) { return 0; }\n").unwrap();

    eina_tools()
        .arg("idents")
        .arg(&path)
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn idents_missing_file_fails() {
    eina_tools()
        .arg("idents")
        .arg("/nonexistent/eina.c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read source file"));
}

#[test]
fn idents_json_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lomo.c");
    fs::write(&path, "eina_obj_get_lomo(self); EINA_OBJ_GET_ART(self);").unwrap();

    eina_tools()
        .args(["--format", "json", "idents"])
        .arg(&path)
        .assert()
        .success()
        .stdout("[\"art\",\"lomo\"]\n");
}

#[test]
fn fragment_replays_navigation_from_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("about.html"), "<section>About Eina</section>").unwrap();
    fs::write(dir.path().join("download.html"), "<section>Download Eina</section>").unwrap();

    eina_tools()
        .arg("fragment")
        .arg(dir.path())
        .args(["--click", "#download"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active: #download"))
        .stdout(predicate::str::contains("<section>Download Eina</section>"))
        .stdout(predicate::str::contains("About Eina").not());
}

#[test]
fn fragment_starts_from_location_hash() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("screenshots.html"), "<section>Shots</section>").unwrap();

    eina_tools()
        .args(["-o", "json", "fragment"])
        .arg(dir.path())
        .args(["--location", "index.html#screenshots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"section\": \"<section>Shots</section>\""));
}

#[test]
fn fragment_missing_section_keeps_page() {
    let dir = TempDir::new().unwrap();

    eina_tools()
        .arg("fragment")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No section loaded"))
        .stderr(predicate::str::contains("failed to load section"));
}

#[test]
fn gobject_prints_skeleton() {
    eina_tools()
        .args(["gobject", "EinaCover", "--finalize"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/* eina-cover.h */"))
        .stdout(predicate::str::contains("G_DEFINE_TYPE (EinaCover, eina_cover, G_TYPE_OBJECT)"))
        .stdout(predicate::str::contains("object_class->finalize = eina_cover_finalize;"));
}

#[test]
fn gobject_writes_files() {
    let dir = TempDir::new().unwrap();

    eina_tools()
        .args(["gobject", "GelPlugin", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let header = fs::read_to_string(dir.path().join("gel-plugin.h")).unwrap();
    assert!(header.contains("#define GEL_TYPE_PLUGIN gel_plugin_get_type()"));
    assert!(dir.path().join("gel-plugin.c").exists());
}

#[test]
fn gobject_rejects_single_word_name() {
    eina_tools().args(["gobject", "Eina"]).assert().failure();
}

#[test]
fn gobject_json_with_output_dir_is_pure_json() {
    let dir = TempDir::new().unwrap();

    let output = eina_tools()
        .args(["--format", "json", "gobject", "GelPlugin", "--output-dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["skeleton"]["filename"], "gel-plugin");
    assert!(json["written"][0].as_str().unwrap().ends_with("gel-plugin.h"));
}

#[test]
fn gobject_text_with_output_dir_reports_files() {
    let dir = TempDir::new().unwrap();

    eina_tools()
        .args(["gobject", "GelPlugin", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Wrote"))
        .stdout(predicate::str::contains("G_DEFINE_TYPE").not());
}

#[test]
fn config_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    eina_tools()
        .args(["config", "--write"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("default_section = \"about\""));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("suffix = \".html\""));
}
