//! A standalone chess engine core plus the protocol shells that drive it.
//!
//! The `corvus_engine` library is built bottom-up: board primitives and
//! attack tables (`types`, `moves`, `attacks`, `zobrist`), the position
//! and its move generator (`position`), static evaluation (`eval`), the
//! transposition table (`tt`), the search (`search`), and finally the
//! driver-facing [`engine::EngineSession`] that a protocol shell talks to
//! (`uci`, `xboard`). Nothing below `engine` touches stdin/stdout.

pub mod attacks;
pub mod engine;
pub mod error;
pub mod eval;
pub mod moves;
pub mod position;
pub mod search;
pub mod tt;
pub mod types;
pub mod uci;
pub mod xboard;
pub mod zobrist;
