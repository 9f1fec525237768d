//! The UCI option registry: printing `option …` lines and applying
//! `setoption` (§4.J).

use crate::engine::{EngineSession, MAX_HASH_MB, MIN_HASH_MB};
use crate::tt::DEFAULT_TT_MB;

fn print_spin(name: &str, default: impl std::fmt::Display, min: impl std::fmt::Display, max: impl std::fmt::Display) {
    println!("option name {name} type spin default {default} min {min} max {max}");
}

fn print_check(name: &str, default: bool) {
    println!("option name {name} type check default {default}");
}

fn print_button(name: &str) {
    println!("option name {name} type button");
}

/// Prints the full `id`/`option`/`uciok` block for the `uci` command.
pub fn print_identity_and_options() {
    println!("id name Corvus");
    println!("id author the corvus_engine authors");
    print_spin("Hash", DEFAULT_TT_MB, MIN_HASH_MB, MAX_HASH_MB);
    print_button("Clear Hash");
    print_spin("Threads", 1, 1, 1);
    print_check("Ponder", false);
    println!("uciok");
}

/// Splits a `setoption name <N...> [value <V...>]` line into its name and
/// optional value, joining multi-word fragments on either side.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }
    let mut name_parts = Vec::new();
    let mut value_parts = Vec::new();
    let mut mode = "";
    for part in &parts[1..] {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(*part),
                "value" => value_parts.push(*part),
                _ => {}
            },
        }
    }
    if name_parts.is_empty() {
        return None;
    }
    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() { None } else { Some(value_parts.join(" ")) };
    Some((name, value))
}

/// Applies a parsed `setoption` to `session` (§4.J). Unknown option names
/// are silently ignored, matching typical GUI tolerance for engine-specific
/// extensions this engine doesn't define.
pub fn apply_setoption(session: &mut EngineSession, name: &str, value: Option<&str>) {
    match name.trim().to_ascii_lowercase().as_str() {
        "hash" => {
            if let Some(mb) = value.and_then(|v| v.parse::<usize>().ok()) {
                session.set_hash_mb(mb);
            }
        }
        "clear hash" => session.clear_hash(),
        "threads" => {
            if let Some(n) = value.and_then(|v| v.parse::<usize>().ok()) {
                session.set_threads(n);
            }
        }
        "ponder" => {
            if let Some(v) = value {
                session.set_ponder(matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"));
            }
        }
        _ => {}
    }
}
