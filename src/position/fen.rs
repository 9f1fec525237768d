//! FEN parsing and formatting (§6, §4.C `set_from_fen`).

use super::Position;
use crate::error::FenError;
use crate::types::{
    file_to_index, rank_to_index, Color, Piece, Square, BLACK_KINGSIDE, BLACK_QUEENSIDE,
    WHITE_KINGSIDE, WHITE_QUEENSIDE,
};

impl Position {
    /// Parses a FEN string into a new position.
    ///
    /// Errors rather than panicking; on error the caller (the protocol
    /// shell) is expected to leave the prior position untouched (§7).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        for (rank_from_top, rank_str) in parts[0].split('/').enumerate() {
            if rank_from_top >= 8 {
                return Err(FenError::InvalidRank { rank: rank_from_top });
            }
            let rank = 7 - rank_from_top;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(empty_count) = c.to_digit(10) {
                    file += empty_count as usize;
                } else {
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank: rank_from_top, files: file + 1 });
                    }
                    let color = if c.is_uppercase() { Color::White } else { Color::Black };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    pos.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
        }

        match parts[1] {
            "w" => pos.side_to_move = Color::White,
            "b" => pos.side_to_move = Color::Black,
            other => return Err(FenError::InvalidSideToMove { found: other.to_string() }),
        }

        for c in parts[2].chars() {
            match c {
                'K' => pos.castling_rights.0 |= WHITE_KINGSIDE,
                'Q' => pos.castling_rights.0 |= WHITE_QUEENSIDE,
                'k' => pos.castling_rights.0 |= BLACK_KINGSIDE,
                'q' => pos.castling_rights.0 |= BLACK_QUEENSIDE,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        pos.ep_square = if parts[3] == "-" {
            None
        } else {
            let chars: Vec<char> = parts[3].chars().collect();
            if chars.len() == 2 && ('a'..='h').contains(&chars[0]) && ('1'..='8').contains(&chars[1]) {
                Some(Square::new(rank_to_index(chars[1]), file_to_index(chars[0])))
            } else {
                return Err(FenError::InvalidEnPassant { found: parts[3].to_string() });
            }
        };

        pos.halfmove_clock = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        pos.fullmove_number = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        if pos.pieces(Color::White, Piece::King).popcount() != 1 {
            return Err(if pos.pieces(Color::White, Piece::King).popcount() == 0 {
                FenError::MissingKing { color: "white" }
            } else {
                FenError::TooManyKings { color: "white" }
            });
        }
        if pos.pieces(Color::Black, Piece::King).popcount() != 1 {
            return Err(if pos.pieces(Color::Black, Piece::King).popcount() == 0 {
                FenError::MissingKing { color: "black" }
            } else {
                FenError::TooManyKings { color: "black" }
            });
        }

        pos.hash = pos.compute_hash();
        pos.repetitions = super::RepetitionTable::default();
        pos.recalculate_incremental_eval();
        Ok(pos)
    }

    /// Parses a FEN string, panicking on malformed input.
    ///
    /// # Panics
    /// Panics if `fen` is not a valid FEN string. Prefer `try_from_fen` at
    /// any boundary that can receive untrusted input.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            ranks.push(row);
        }
        let placement = ranks.join("/");
        let side = if self.side_to_move.is_white() { "w" } else { "b" };
        let castling = self.castling_rights.to_fen_fragment();
        let ep = self.ep_square.map_or("-".to_string(), |sq| sq.to_string());
        format!(
            "{placement} {side} {castling} {ep} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }
}
