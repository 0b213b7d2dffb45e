use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkstroke_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inkstroke").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_stroke(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, json).unwrap();
    path
}

fn line_json() -> String {
    let points: Vec<String> = (0..12)
        .map(|i| format!("[{}, {}]", i * 10, i * 4))
        .collect();
    format!(r#"{{"points": [{}], "thickness": 2.5}}"#, points.join(", "))
}

#[test]
fn inkstroke_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    inkstroke_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand stroke smoothing and shape recognition",
        ));
}

#[test]
fn subcommand_is_required() {
    let temp = TempDir::new().unwrap();
    inkstroke_cmd(&temp).assert().failure();
}

#[test]
fn recognize_straight_stroke_prints_line() {
    let temp = TempDir::new().unwrap();
    let file = write_stroke(&temp, "line.json", &line_json());

    inkstroke_cmd(&temp)
        .arg("recognize")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""shape": "line""#))
        .stdout(predicate::str::contains(r#""thickness": 2.5"#));
}

#[test]
fn recognize_short_stroke_prints_null() {
    let temp = TempDir::new().unwrap();
    let file = write_stroke(
        &temp,
        "short.json",
        r#"{"points": [[0, 0], [5, 5], {"x": 10, "y": 0, "pressure": 0.4}]}"#,
    );

    inkstroke_cmd(&temp)
        .arg("recognize")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""shape": null"#));
}

#[test]
fn smooth_prints_control_points() {
    let temp = TempDir::new().unwrap();
    let file = write_stroke(
        &temp,
        "bump.json",
        r#"{"points": [[0, 0], [10, 5], [20, 0], [30, 5]]}"#,
    );

    inkstroke_cmd(&temp)
        .args(["smooth", "--smoothness", "0.3"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("control_point1"))
        .stdout(predicate::str::contains("control_point2"));
}

#[test]
fn missing_stroke_file_fails() {
    let temp = TempDir::new().unwrap();
    inkstroke_cmd(&temp)
        .arg("recognize")
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn empty_stroke_file_fails() {
    let temp = TempDir::new().unwrap();
    let file = write_stroke(&temp, "empty.json", r#"{"points": []}"#);
    inkstroke_cmd(&temp)
        .arg("smooth")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no points"));
}

#[test]
fn invalid_config_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let config = write_stroke(&temp, "config.toml", "[drawing\nstroke_width = ");
    let file = write_stroke(&temp, "line.json", &line_json());

    inkstroke_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("recognize")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn config_from_xdg_home_sets_stroke_width() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("inkstroke");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[drawing]\nstroke_width = 7.5\n").unwrap();
    let file = write_stroke(&temp, "bump.json", r#"{"points": [[0, 0], [10, 5], [20, 0]]}"#);

    inkstroke_cmd(&temp)
        .arg("smooth")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""thickness": 7.5"#));
}

#[test]
fn dump_config_schema_lists_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("stroke_width"))
        .stdout(predicate::str::contains("smoothness"))
        .stdout(predicate::str::contains("auto_snap"));
}
