//! End-to-end tests: ASC file on disk through to formatted tile records.

use dtmtile_runner::output::Format;
use dtmtile_runner::{run, Args, RunnerError};
use std::io::Write;
use std::path::PathBuf;

fn write_asc(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.asc");
    let mut file = std::fs::File::create(&path).expect("create test file");
    file.write_all(contents.as_bytes()).expect("write test file");
    path
}

fn base_args(input_file: PathBuf) -> Args {
    Args {
        input_file,
        skip_rows: 0,
        min_lat: 0.0,
        max_lat: 10.0,
        min_lon: 0.0,
        max_lon: 10.0,
        min_zoom: 2,
        max_zoom: 2,
        max_tiles: 1_000_000,
        format: Format::Text,
        parallel: false,
    }
}

#[test]
fn test_reference_box_emits_two_tiles_at_zoom_2() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_asc(&dir, "1 2 3\n4 5 6\n");

    let mut out = Vec::new();
    run(&base_args(path), &mut out).expect("run succeeds");

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("z2 x2"));
    assert!(lines[0].contains("y1"));
    assert!(lines[1].contains("y2"));
}

#[test]
fn test_json_output_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_asc(&dir, "1 2\n3 4\n");

    let mut args = base_args(path);
    args.format = Format::Json;
    let mut out = Vec::new();
    run(&args, &mut out).expect("run succeeds");

    let text = String::from_utf8(out).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["zoom"], 2);
    assert_eq!(records[0]["y"], 1);
    assert_eq!(records[1]["y"], 2);
}

#[test]
fn test_parallel_output_matches_streaming() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_asc(&dir, "1 2\n3 4\n");

    let mut streamed = Vec::new();
    let mut args = base_args(path);
    args.min_zoom = 1;
    args.max_zoom = 5;
    run(&args, &mut streamed).expect("streaming run");

    let mut parallel = Vec::new();
    args.parallel = true;
    run(&args, &mut parallel).expect("parallel run");

    assert_eq!(streamed, parallel);
}

#[test]
fn test_wrong_extension_fails_before_loading() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("input.csv");
    std::fs::write(&path, "1 2\n3 4\n").expect("write test file");

    let err = run(&base_args(path), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, RunnerError::Grid(_)));
}

#[test]
fn test_degenerate_box_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_asc(&dir, "1 2\n3 4\n");

    let mut args = base_args(path);
    args.max_lat = args.min_lat;
    let err = run(&args, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, RunnerError::Pyramid(_)));
}

#[test]
fn test_skip_rows_header_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let contents = "ncols 2\nnrows 2\nxllcorner 0\nyllcorner 0\ncellsize 5\nNODATA_value -9999\n1 2\n3 4\n";
    let path = write_asc(&dir, contents);

    let mut args = base_args(path);
    args.skip_rows = 6;
    let mut out = Vec::new();
    run(&args, &mut out).expect("run succeeds");
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}
