//! Subprocess smoke test against the UCI protocol shell (§6, §8 scenario 1).

use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn uci_handshake_and_bestmove_round_trip() {
    let exe = env!("CARGO_BIN_EXE_corvus_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let input = b"uci\nisready\nposition startpos moves e2e4\ngo movetime 50\nquit\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let id_line_index = stdout.lines().position(|l| l.starts_with("id name")).expect("missing id name");
    let uciok_index = stdout.lines().position(|l| l == "uciok").expect("missing uciok");
    assert!(uciok_index > id_line_index);
    assert!(stdout.contains("readyok"));

    let bestmove = stdout.lines().filter(|line| line.starts_with("bestmove")).last().expect("no bestmove found");
    let parts: Vec<&str> = bestmove.split_whitespace().collect();
    assert!(parts.len() >= 2, "bestmove missing move: {bestmove}");
    assert_ne!(parts[1], "0000", "engine returned null move from the starting position");
}

#[test]
fn perft_command_reports_expected_node_count() {
    let exe = env!("CARGO_BIN_EXE_corvus_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let input = b"position startpos\ngo perft 3\nquit\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.lines().any(|l| l.starts_with("8902 nodes")), "stdout: {stdout}");
}
