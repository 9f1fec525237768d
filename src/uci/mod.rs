//! UCI protocol shell (§4.I): a line-oriented loop over stdin/stdout that
//! normalizes text commands into [`EngineSession`] calls. All diagnostics
//! go through `log`, never stdout; stdout carries the protocol stream.

pub mod options;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::engine::EngineSession;
use crate::moves::Move;
use crate::search::{ScoreReport, SearchLimits, SearchReport};

/// Score scaling the protocol applies on top of the engine's internal
/// units, so a pawn (124 internal units) prints as roughly one `cp` 100
/// (§6 "Score conversion").
const CP_SCALE_NUM: i64 = 100;
const CP_SCALE_DEN: i64 = 208;

/// Runs the UCI loop to completion, returning the process exit code
/// (§4.L): 0 on `quit`, non-zero only if stdin itself errors out.
pub fn run(session: &mut EngineSession) -> i32 {
    run_over(session, io::stdin().lock())
}

/// Same loop, reading from an arbitrary [`BufRead`] rather than stdin
/// directly, so `main` can sniff the first line for protocol detection
/// and hand the rest of the stream here unread (§4.L).
pub fn run_over(session: &mut EngineSession, input: impl BufRead) -> i32 {
    let mut stdout = io::stdout();

    for line in input.lines() {
        let Ok(line) = line else {
            return 1;
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => options::print_identity_and_options(),
            "isready" => println!("readyok"),
            "ucinewgame" => session.new_game(),
            "setoption" => {
                if let Some((name, value)) = options::parse_setoption(&parts) {
                    options::apply_setoption(session, &name, value.as_deref());
                }
            }
            "position" => handle_position(session, &parts),
            "go" => handle_go(session, &parts),
            "stop" => session.stop(),
            "d" => {
                println!("{}", session.position().pretty());
                println!("Fen: {}", session.position().to_fen());
            }
            "quit" => return 0,
            other => println!("info string unrecognized command: {other}"),
        }

        let _ = stdout.flush();
    }
    0
}

fn handle_position(session: &mut EngineSession, parts: &[&str]) {
    let mut i = 1;
    let fen;
    if parts.get(i) == Some(&"startpos") {
        fen = None;
        i += 1;
    } else if parts.get(i) == Some(&"fen") {
        i += 1;
        let start = i;
        while i < parts.len() && parts[i] != "moves" {
            i += 1;
        }
        fen = Some(parts[start..i].join(" "));
    } else {
        println!("info string 'position' needs 'startpos' or 'fen'");
        return;
    }

    let moves: Vec<&str> = if parts.get(i) == Some(&"moves") {
        parts[i + 1..].to_vec()
    } else {
        Vec::new()
    };

    if let Err(e) = session.set_position(fen.as_deref(), &moves) {
        println!("info string {e}");
    }
}

fn handle_go(session: &mut EngineSession, parts: &[&str]) {
    if parts.iter().any(|&p| p == "perft") {
        let depth = find_u32(parts, "perft").unwrap_or(1);
        let start = std::time::Instant::now();
        let nodes = session.perft(depth);
        println!("{nodes} nodes in {:?}", start.elapsed());
        return;
    }

    let limits = SearchLimits {
        depth: find_u32(parts, "depth"),
        movetime: find_u64(parts, "movetime").map(Duration::from_millis),
        wtime: find_u64(parts, "wtime").map(Duration::from_millis),
        btime: find_u64(parts, "btime").map(Duration::from_millis),
        winc: find_u64(parts, "winc").map(Duration::from_millis),
        binc: find_u64(parts, "binc").map(Duration::from_millis),
        movestogo: find_u32(parts, "movestogo"),
        nodes: find_u64(parts, "nodes"),
        mate: find_u32(parts, "mate"),
        infinite: parts.iter().any(|&p| p == "infinite"),
    };

    let best = session.go(limits, |report| println!("{}", format_info(&report)));
    println!("bestmove {}", format_move(best));
}

fn find_u32(parts: &[&str], key: &str) -> Option<u32> {
    let idx = parts.iter().position(|&p| p == key)?;
    parts.get(idx + 1)?.parse().ok()
}

fn find_u64(parts: &[&str], key: &str) -> Option<u64> {
    let idx = parts.iter().position(|&p| p == key)?;
    parts.get(idx + 1)?.parse().ok()
}

fn format_move(mv: Move) -> String {
    mv.to_string()
}

/// Formats one `info …` line from a completed iteration (§6).
fn format_info(report: &SearchReport) -> String {
    let score = match report.score {
        ScoreReport::Cp(v) => format!("cp {}", (i64::from(v) * CP_SCALE_NUM) / CP_SCALE_DEN),
        ScoreReport::Mate(k) => format!("mate {k}"),
    };
    let pv = report.pv.iter().map(Move::to_string).collect::<Vec<_>>().join(" ");
    format!(
        "info depth {} score {} nodes {} time {} nps {} pv {}",
        report.depth,
        score,
        report.nodes,
        report.time.as_millis(),
        report.nps,
        pv
    )
}
