//! XBoard/CECP command parsing: the minimal subset this engine's thin
//! adapter understands (§4.I).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XBoardCommand {
    XBoard,
    New,
    Force,
    Go,
    UserMove(String),
    Ping(u32),
    Result(String),
    Quit,
    Unknown(String),
}

/// Parses one XBoard input line. A bare move string (e.g. `e2e4`) is
/// treated as `usermove` per the protocol's relaxed-move convention.
#[must_use]
pub fn parse_xboard_command(line: &str) -> Option<XBoardCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    Some(match parts[0] {
        "xboard" => XBoardCommand::XBoard,
        "new" => XBoardCommand::New,
        "force" => XBoardCommand::Force,
        "go" => XBoardCommand::Go,
        "quit" => XBoardCommand::Quit,
        "?" => XBoardCommand::Go,
        "usermove" => XBoardCommand::UserMove(parts.get(1).map(|s| (*s).to_string()).unwrap_or_default()),
        "ping" => XBoardCommand::Ping(parts.get(1).and_then(|v| v.parse().ok()).unwrap_or(0)),
        "result" => XBoardCommand::Result(parts[1..].join(" ")),
        // protover/accepted/rejected/level/time/otim/etc. are acknowledged
        // silently by the adapter rather than modeled individually.
        "protover" | "accepted" | "rejected" | "level" | "time" | "otim" | "random" | "post"
        | "nopost" | "hard" | "easy" | "computer" | "name" => return None,
        _ if looks_like_a_move(parts[0]) => XBoardCommand::UserMove(parts[0].to_string()),
        _ => XBoardCommand::Unknown(trimmed.to_string()),
    })
}

fn looks_like_a_move(s: &str) -> bool {
    s.len() >= 4 && s.as_bytes()[0].is_ascii_lowercase() && s.as_bytes()[1].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_commands() {
        assert_eq!(parse_xboard_command("new"), Some(XBoardCommand::New));
        assert_eq!(parse_xboard_command("force"), Some(XBoardCommand::Force));
        assert_eq!(parse_xboard_command("quit"), Some(XBoardCommand::Quit));
    }

    #[test]
    fn parses_usermove_and_bare_moves() {
        assert_eq!(parse_xboard_command("usermove e2e4"), Some(XBoardCommand::UserMove("e2e4".to_string())));
        assert_eq!(parse_xboard_command("e2e4"), Some(XBoardCommand::UserMove("e2e4".to_string())));
    }

    #[test]
    fn ignores_protover_and_similar_acknowledgements() {
        assert_eq!(parse_xboard_command("protover 2"), None);
    }
}
