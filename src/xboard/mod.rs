//! Thin XBoard/CECP adapter (§4.I): normalizes the protocol's commands
//! into the same [`EngineSession`] calls the UCI loop uses, rather than
//! wiring up a second search path. Carried as an ambient convenience; this
//! crate doesn't implement SAN formatting; moves are echoed in coordinate
//! notation, which every XBoard-speaking GUI also accepts.

pub mod command;

use std::io::{self, BufRead, Write};

use crate::engine::EngineSession;
use crate::search::SearchLimits;
use crate::types::Color;

use command::{parse_xboard_command, XBoardCommand};

/// Search depth used for `go`/`usermove`-triggered moves: the adapter has
/// no XBoard `level`/`st` wiring, so it searches to a fixed, modest depth
/// rather than guessing a time budget from absent information.
const XBOARD_DEFAULT_DEPTH: u32 = 6;

pub struct XBoardHandler {
    session: EngineSession,
    force_mode: bool,
    engine_color: Option<Color>,
}

impl XBoardHandler {
    #[must_use]
    pub fn new() -> Self {
        XBoardHandler { session: EngineSession::new(), force_mode: false, engine_color: None }
    }

    pub fn run(&mut self) {
        self.run_over(io::stdin().lock());
    }

    /// Same loop, reading from an arbitrary [`BufRead`] so `main` can hand
    /// it a stream whose first line (`xboard`) was already sniffed off and
    /// re-chained (§4.L).
    pub fn run_over(&mut self, input: impl BufRead) {
        let mut stdout = io::stdout();

        for line in input.lines() {
            let Ok(line) = line else { break };
            let Some(cmd) = parse_xboard_command(&line) else { continue };
            if let Some(response) = self.handle_command(&cmd) {
                let _ = writeln!(stdout, "{response}");
            }
            let _ = stdout.flush();
            if cmd == XBoardCommand::Quit {
                break;
            }
            if self.should_think() {
                self.think_and_move(&mut stdout);
            }
        }
    }

    fn handle_command(&mut self, cmd: &XBoardCommand) -> Option<String> {
        match cmd {
            XBoardCommand::XBoard => None,
            XBoardCommand::New => {
                self.session.new_game();
                self.force_mode = false;
                self.engine_color = Some(Color::Black);
                None
            }
            XBoardCommand::Force => {
                self.force_mode = true;
                self.engine_color = None;
                None
            }
            XBoardCommand::Go => {
                self.force_mode = false;
                self.engine_color = Some(self.session.position().side_to_move());
                None
            }
            XBoardCommand::UserMove(mv) => {
                let fen = self.session.position().to_fen();
                let uci_moves = [mv.as_str()];
                if let Err(e) = self.session.set_position(Some(&fen), &uci_moves) {
                    return Some(format!("Illegal move: {mv} ({e})"));
                }
                None
            }
            XBoardCommand::Ping(n) => Some(format!("pong {n}")),
            XBoardCommand::Result(_) => {
                self.force_mode = true;
                None
            }
            XBoardCommand::Quit => None,
            XBoardCommand::Unknown(line) => Some(format!("Error (unknown command): {line}")),
        }
    }

    fn should_think(&self) -> bool {
        !self.force_mode && self.engine_color == Some(self.session.position().side_to_move())
    }

    fn think_and_move(&mut self, stdout: &mut impl Write) {
        let limits = SearchLimits { depth: Some(XBOARD_DEFAULT_DEPTH), ..SearchLimits::default() };
        let best = self.session.go(limits, |_| {});
        if best.is_null() {
            return;
        }
        let _ = writeln!(stdout, "move {best}");
        let uci_moves = [best.to_string()];
        let fen = self.session.position().to_fen();
        let _ = self.session.set_position(Some(&fen), &[uci_moves[0].as_str()]);
    }
}

impl Default for XBoardHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point for XBoard mode, mirroring [`crate::uci::run`]'s shape.
pub fn run() {
    XBoardHandler::new().run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_engine_to_play_black() {
        let mut handler = XBoardHandler::new();
        handler.handle_command(&XBoardCommand::New);
        assert!(!handler.force_mode);
        assert_eq!(handler.engine_color, Some(Color::Black));
    }

    #[test]
    fn force_disables_thinking() {
        let mut handler = XBoardHandler::new();
        handler.handle_command(&XBoardCommand::Force);
        assert!(handler.force_mode);
        assert!(!handler.should_think());
    }

    #[test]
    fn usermove_advances_the_position() {
        let mut handler = XBoardHandler::new();
        handler.handle_command(&XBoardCommand::Force);
        handler.handle_command(&XBoardCommand::UserMove("e2e4".to_string()));
        assert_eq!(handler.session.position().side_to_move(), Color::Black);
    }

    #[test]
    fn ping_echoes_pong() {
        let mut handler = XBoardHandler::new();
        assert_eq!(handler.handle_command(&XBoardCommand::Ping(7)), Some("pong 7".to_string()));
    }
}
