use std::process::{Command, Output};

const EXAMPLE: &str = "37:e4:6a:2d:48:38:1a:0a:f3:72:6d:d9:17:6b:bd:5e";

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bishop-cli"))
        .args(args)
        .output()
        .expect("run bishop-cli")
}

fn stdout_ok(args: &[&str]) -> String {
    let out = run_cli(args);
    assert!(
        out.status.success(),
        "bishop-cli failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

#[test]
fn art_prints_label_then_board() {
    let s = stdout_ok(&["art", EXAMPLE]);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Fingerprint:");
    assert_eq!(lines[1], EXAMPLE);
    assert_eq!(lines[2], "+-----------------+");
    assert_eq!(lines[9], "|o + + o B o E    |");
    assert_eq!(lines[12], "+-----------------+");
}

#[test]
fn art_flag_and_positional_agree() {
    let a = stdout_ok(&["art", EXAMPLE]);
    let b = stdout_ok(&["art", "--fingerprint", EXAMPLE]);
    assert_eq!(a, b);
}

#[test]
fn art_board_only_with_title() {
    let s = stdout_ok(&["art", "--no-label", "--title", "RSA 2048", "-q", EXAMPLE]);
    let first = s.lines().next().unwrap();
    assert_eq!(first, "+---[RSA 2048]----+");
    assert_eq!(s.lines().count(), 11);
}

#[test]
fn art_status_goes_to_stderr() {
    let out = run_cli(&["art", EXAMPLE]);
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("end=(12,6)"), "stderr: {err}");

    let quiet = run_cli(&["art", "--quiet", EXAMPLE]);
    assert!(quiet.stderr.is_empty());
}

#[test]
fn art_rejects_malformed_fingerprint() {
    let out = run_cli(&["art", "37:e4:6a"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("expected 16 octets"), "stderr: {err}");
}

#[test]
fn art_requires_a_source() {
    assert!(!run_cli(&["art"]).status.success());
    assert!(!run_cli(&["art", "--random", EXAMPLE]).status.success());
}

#[test]
fn art_random_has_one_end_marker() {
    let s = stdout_ok(&["art", "--random", "-q"]);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines[0], "Fingerprint:");
    assert_eq!(lines[1].split(':').count(), 16);
    let board = lines[2..].join("\n");
    assert_eq!(board.matches('E').count(), 1);
}

#[test]
fn trace_lists_sixty_four_moves() {
    let s = stdout_ok(&["trace", EXAMPLE]);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 64);
    assert!(lines[0].starts_with("00 37 "));
    assert!(lines[63].ends_with(" 12,6"));
}

#[test]
fn quiet_silences_trace_like_art() {
    let loud = run_cli(&["trace", EXAMPLE]);
    assert!(String::from_utf8_lossy(&loud.stderr).contains("trace ok:"));

    let quiet = run_cli(&["trace", "-q", EXAMPLE]);
    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty());
    assert_eq!(quiet.stdout, loud.stdout);
}

#[test]
fn art_status_reports_walk_of_random_source() {
    let out = run_cli(&["art", "--random"]);
    assert!(out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("source=random"), "stderr: {err}");
    assert!(err.contains("max_visits="), "stderr: {err}");
}

#[test]
fn random_prints_parseable_fingerprints() {
    let s = stdout_ok(&["random", "-n", "3"]);
    let fps: Vec<&str> = s.lines().collect();
    assert_eq!(fps.len(), 3);
    for fp in fps {
        assert!(bishop_core::Fingerprint::parse(fp).is_ok(), "{fp}");
    }
}
