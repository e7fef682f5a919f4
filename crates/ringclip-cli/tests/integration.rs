//! Integration tests for ringclip CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ringclip"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write input");
    path
}

fn square_json(x0: f64, y0: f64, x1: f64, y1: f64) -> String {
    format!(r#"[[{x0}, {y0}], [{x1}, {y0}], [{x1}, {y1}], [{x0}, {y1}], [{x0}, {y0}]]"#)
}

fn polygons_file(dir: &TempDir, name: &str, rings: &[String]) -> PathBuf {
    write_file(dir, name, &format!(r#"{{"polygons": [{}]}}"#, rings.join(", ")))
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

fn stdout_json(output: &Output) -> Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn clip_inside_produces_svg() {
    let dir = TempDir::new().unwrap();
    let subject = polygons_file(&dir, "subject.json", &[square_json(5.0, 5.0, 15.0, 15.0)]);
    let boundary = polygons_file(&dir, "boundary.json", &[square_json(0.0, 0.0, 10.0, 10.0)]);

    let output = run(&["clip", path_arg(&subject), path_arg(&boundary)]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("<polyline"), "Should have polyline elements");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn clip_inside_json_keeps_corner() {
    let dir = TempDir::new().unwrap();
    let subject = polygons_file(&dir, "subject.json", &[square_json(5.0, 5.0, 15.0, 15.0)]);
    let boundary = polygons_file(&dir, "boundary.json", &[square_json(0.0, 0.0, 10.0, 10.0)]);

    let doc = stdout_json(&run(&["clip", path_arg(&subject), path_arg(&boundary), "--format", "json"]));
    let rings = doc["polygons"][0]["rings"].as_array().expect("rings");

    assert_eq!(rings.len(), 1);
    let ring = rings[0].as_array().unwrap();
    assert_eq!(ring.len(), 3, "corner of the subject inside the boundary");
    assert_eq!(ring[1]["x"], 5.0);
    assert_eq!(ring[1]["y"], 5.0);
}

#[test]
fn clip_outside_keeps_the_rest() {
    let dir = TempDir::new().unwrap();
    let subject = polygons_file(&dir, "subject.json", &[square_json(5.0, 5.0, 15.0, 15.0)]);
    let boundary = polygons_file(&dir, "boundary.json", &[square_json(0.0, 0.0, 10.0, 10.0)]);

    let doc = stdout_json(&run(&[
        "clip",
        path_arg(&subject),
        path_arg(&boundary),
        "--outside",
        "--format",
        "json",
    ]));
    let rings = doc["polygons"][0]["rings"].as_array().expect("rings");

    assert_eq!(rings.len(), 1);
    // (10,5) -> (15,5) -> (15,15) -> (5,15) -> (5,10)
    assert_eq!(rings[0].as_array().unwrap().len(), 5);
}

#[test]
fn hull_of_disjoint_squares_keeps_both() {
    let dir = TempDir::new().unwrap();
    let input = polygons_file(
        &dir,
        "input.json",
        &[square_json(0.0, 0.0, 10.0, 10.0), square_json(20.0, 0.0, 30.0, 10.0)],
    );

    let doc = stdout_json(&run(&["hull", path_arg(&input), "-f", "json"]));
    let polygons = doc["polygons"].as_array().unwrap();

    assert_eq!(polygons.len(), 1, "hull is a single polygon");
    assert_eq!(polygons[0]["rings"].as_array().unwrap().len(), 2);
}

#[test]
fn hull_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = polygons_file(&dir, "input.json", &[square_json(0.0, 0.0, 10.0, 10.0)]);
    let out = dir.path().join("hull.svg");

    let output = run(&["hull", path_arg(&input), "-o", path_arg(&out)]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "nothing on stdout when -o is given");

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"viewBox="0.00 0.00 10.00 10.00""#), "{svg}");
}

#[test]
fn overlap_prints_bool() {
    let dir = TempDir::new().unwrap();
    let a = polygons_file(&dir, "a.json", &[square_json(0.0, 0.0, 10.0, 10.0)]);
    let b = polygons_file(&dir, "b.json", &[square_json(5.0, 5.0, 15.0, 15.0)]);
    let c = polygons_file(&dir, "c.json", &[square_json(10.0, 0.0, 20.0, 10.0)]);

    let output = run(&["overlap", path_arg(&a), path_arg(&b)]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let output = run(&["overlap", path_arg(&a), path_arg(&c)]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false", "edge contact only");
}

#[test]
fn import_svg_to_json() {
    let dir = TempDir::new().unwrap();
    let svg = write_file(
        &dir,
        "shape.svg",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
            <rect x="10" y="10" width="80" height="80"/>
        </svg>"#,
    );

    let doc = stdout_json(&run(&["import", path_arg(&svg)]));
    let ring = doc["polygons"][0]["rings"][0].as_array().expect("ring");
    assert_eq!(ring.len(), 5);
}

#[test]
fn malformed_input_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(&dir, "bad.json", r#"{"polygons": [[[0, 0], "nope"]]}"#);
    let good = polygons_file(&dir, "good.json", &[square_json(0.0, 0.0, 1.0, 1.0)]);

    let output = run(&["clip", path_arg(&bad), path_arg(&good)]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed"), "stderr: {stderr}");
}

#[test]
fn missing_file_fails() {
    let output = run(&["hull", "/definitely/not/here.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
