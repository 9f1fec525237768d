//! Precomputed, process-global attack tables (component B).
//!
//! Everything here is "compute then freeze": every table is built once
//! behind a `LazyLock` on first use and never mutated afterward.

mod magic;
mod tables;

pub use magic::{bishop_attacks, queen_attacks, rook_attacks};
pub use tables::{between, king_attacks, knight_attacks, line_through, pawn_attacks};

use crate::types::{Bitboard, Color, Piece, Square};

/// Dispatches to the right attack table for any piece type, given the
/// current occupancy (only consulted by sliders).
#[must_use]
pub fn attacks_for(piece: Piece, color: Color, sq: Square, occupied: Bitboard) -> Bitboard {
    match piece {
        Piece::Pawn => pawn_attacks(color, sq),
        Piece::Knight => knight_attacks(sq),
        Piece::Bishop => bishop_attacks(sq, occupied),
        Piece::Rook => rook_attacks(sq, occupied),
        Piece::Queen => queen_attacks(sq, occupied),
        Piece::King => king_attacks(sq),
    }
}
