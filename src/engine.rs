//! Driver-facing surface (component H): the one object a protocol shell
//! talks to. Owns the live position, the transposition table, the
//! ordering tables, and the option registry; never touches stdin/stdout
//! itself.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{EngineError, MoveParseError};
use crate::moves::Move;
use crate::position::Position;
use crate::search::{self, OrderingTables, SearchLimits, SearchReport};
use crate::tt::{TranspositionTable, DEFAULT_TT_MB};
use crate::types::{Piece, Square};

pub const MIN_HASH_MB: usize = 1;
pub const MAX_HASH_MB: usize = 4096;

/// The option registry's live values (§4.J). `threads` is accepted and
/// echoed back but the search never reads more than one.
#[derive(Clone, Copy, Debug)]
pub struct EngineOptions {
    pub hash_mb: usize,
    pub threads: usize,
    pub ponder: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions { hash_mb: DEFAULT_TT_MB, threads: 1, ponder: false }
    }
}

/// Owns everything a `go` needs across calls: the position, the TT, and
/// the killer/history tables (§4.H).
pub struct EngineSession {
    position: Position,
    tt: TranspositionTable,
    tables: OrderingTables,
    stop: Arc<AtomicBool>,
    options: EngineOptions,
}

impl EngineSession {
    #[must_use]
    pub fn new() -> Self {
        let options = EngineOptions::default();
        EngineSession {
            position: Position::new(),
            tt: TranspositionTable::new(options.hash_mb),
            tables: OrderingTables::new(),
            stop: Arc::new(AtomicBool::new(false)),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The shared stop flag `go` polls; exposed so an embedder can request
    /// a stop from outside the (single-threaded) protocol loop.
    #[must_use]
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn set_hash_mb(&mut self, mb: usize) {
        let mb = mb.clamp(MIN_HASH_MB, MAX_HASH_MB);
        self.options.hash_mb = mb;
        self.tt.resize(mb);
    }

    pub fn clear_hash(&mut self) {
        self.tt.clear();
    }

    pub fn set_threads(&mut self, threads: usize) {
        self.options.threads = threads.clamp(1, 1);
    }

    pub fn set_ponder(&mut self, ponder: bool) {
        self.options.ponder = ponder;
    }

    /// Resets the TT, killer/history tables and the position to the start
    /// position (§4.H `new_game`).
    pub fn new_game(&mut self) {
        self.position = Position::new();
        self.tt.clear();
        self.tables.clear();
        self.stop.store(false, Ordering::Relaxed);
    }

    /// Sets the position from `fen` (or the start position when `None`)
    /// and applies each UCI move in order. A malformed FEN leaves the
    /// prior position untouched; an illegal move mid-list stops applying
    /// further moves but keeps the ones already played (§7).
    pub fn set_position(&mut self, fen: Option<&str>, uci_moves: &[&str]) -> Result<(), EngineError> {
        let mut pos = match fen {
            Some(fen) => Position::try_from_fen(fen)?,
            None => Position::new(),
        };
        for &mv_str in uci_moves {
            match parse_uci_move(&mut pos, mv_str) {
                Ok(mv) => pos.do_move(mv),
                Err(source) => {
                    self.position = pos;
                    return Err(EngineError::MoveParse { notation: mv_str.to_string(), source });
                }
            };
        }
        self.position = pos;
        Ok(())
    }

    /// Runs iterative deepening on the live position, reporting each
    /// completed iteration through `on_info` (§4.H `go`).
    pub fn go(&mut self, limits: SearchLimits, on_info: impl FnMut(SearchReport)) -> Move {
        self.stop.store(false, Ordering::Relaxed);
        search::iterative_deepening(&mut self.position, &mut self.tt, &mut self.tables, &limits, &self.stop, on_info)
    }

    #[must_use]
    pub fn perft(&mut self, depth: u32) -> u64 {
        self.position.perft(depth)
    }
}

impl Default for EngineSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `<from><to>[promo]` against `pos`'s legal move set so castling,
/// en-passant and promotion all resolve to the one matching encoded move.
fn parse_uci_move(pos: &mut Position, s: &str) -> Result<Move, MoveParseError> {
    if s.len() < 4 {
        return Err(MoveParseError::TooShort { notation: s.to_string() });
    }
    let from: Square = s[0..2]
        .parse()
        .map_err(|source| MoveParseError::BadSquare { notation: s.to_string(), source })?;
    let to: Square = s[2..4]
        .parse()
        .map_err(|source| MoveParseError::BadSquare { notation: s.to_string(), source })?;
    let promo = s.as_bytes().get(4).map(|b| *b as char);

    let legal = pos.generate_legal();
    legal
        .iter()
        .find(|m| m.from() == from && m.to() == to && promo_matches(promo, m.promotion_piece()))
        .copied()
        .ok_or(MoveParseError::NotLegal { notation: s.to_string() })
}

fn promo_matches(requested: Option<char>, actual: Option<Piece>) -> bool {
    match (requested, actual) {
        (Some(c), Some(p)) => promo_char(p) == c,
        (None, None) => true,
        _ => false,
    }
}

fn promo_char(p: Piece) -> char {
    match p {
        Piece::Queen => 'q',
        Piece::Rook => 'r',
        Piece::Bishop => 'b',
        Piece::Knight => 'n',
        _ => '?',
    }
}
