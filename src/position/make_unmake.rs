//! Move application (§4.C / §4.D `do_move`/`undo_move`/`do_null_move`).
//!
//! `do_move` updates the Zobrist hash and the tapered-eval accumulators
//! incrementally (XOR/add deltas only, never a full recompute). `undo_move`
//! restores the handful of scalar fields verbatim from the saved
//! `UnmakeInfo` rather than reversing each XOR individually — equivalent,
//! and cheaper than re-deriving which keys were touched.

use super::{clear_rights_touched_by, Position};
use crate::eval::pst;
use crate::moves::Move;
use crate::types::{CastlingRights, Color, Piece, Square};
use crate::zobrist::ZOBRIST;

/// Everything needed to reverse one `do_move`.
#[derive(Clone, Copy, Debug)]
pub struct UnmakeInfo {
    captured: Option<Piece>,
    prev_castling: CastlingRights,
    prev_ep: Option<Square>,
    prev_halfmove_clock: u32,
    prev_hash: u64,
    prev_eval_mg: [i32; 2],
    prev_eval_eg: [i32; 2],
    prev_phase: [i32; 2],
}

/// Everything needed to reverse one `do_null_move`.
#[derive(Clone, Copy, Debug)]
pub struct NullMoveInfo {
    prev_ep: Option<Square>,
    prev_hash: u64,
}

impl Position {
    fn pst_square(color: Color, sq: Square) -> Square {
        if color.is_white() {
            sq.flip_vertical()
        } else {
            sq
        }
    }

    fn place(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set_piece(sq, color, piece);
        self.hash ^= ZOBRIST.piece(piece, color, sq);
        let pst_sq = Self::pst_square(color, sq);
        self.eval_mg[color.index()] += pst::material_mg(piece) + pst::pst_mg(piece, pst_sq);
        self.eval_eg[color.index()] += pst::material_eg(piece) + pst::pst_eg(piece, pst_sq);
        self.phase[color.index()] += pst::phase_weight(piece);
    }

    fn take(&mut self, sq: Square, color: Color, piece: Piece) {
        self.remove_piece(sq, color, piece);
        self.hash ^= ZOBRIST.piece(piece, color, sq);
        let pst_sq = Self::pst_square(color, sq);
        self.eval_mg[color.index()] -= pst::material_mg(piece) + pst::pst_mg(piece, pst_sq);
        self.eval_eg[color.index()] -= pst::material_eg(piece) + pst::pst_eg(piece, pst_sq);
        self.phase[color.index()] -= pst::phase_weight(piece);
    }

    fn castling_rook_squares(color: Color, kingside: bool) -> (Square, Square) {
        let rank = if color.is_white() { 0 } else { 7 };
        if kingside {
            (Square::new(rank, 7), Square::new(rank, 5))
        } else {
            (Square::new(rank, 0), Square::new(rank, 3))
        }
    }

    /// Applies `m` to the position, assumed pseudo-legal for the side to
    /// move. Returns the information needed to undo it.
    pub fn do_move(&mut self, m: Move) -> UnmakeInfo {
        let prev_castling = self.castling_rights;
        let prev_ep = self.ep_square;
        let prev_halfmove_clock = self.halfmove_clock;
        let prev_hash = self.hash;
        let prev_eval_mg = self.eval_mg;
        let prev_eval_eg = self.eval_eg;
        let prev_phase = self.phase;

        let mover = self.side_to_move;
        let from = m.from();
        let to = m.to();
        let moving_piece =
            self.piece_at(from).map(|(_, p)| p).expect("do_move: no piece on the from-square");

        let is_pawn_move = matches!(moving_piece, Piece::Pawn);

        let captured = if m.is_en_passant() {
            let captured_sq = Square::new(from.rank(), to.file());
            self.take(captured_sq, mover.opponent(), Piece::Pawn);
            Some(Piece::Pawn)
        } else if m.is_capture() {
            let captured_piece =
                self.piece_at(to).map(|(_, p)| p).expect("do_move: capture flag with empty target");
            self.take(to, mover.opponent(), captured_piece);
            Some(captured_piece)
        } else {
            None
        };

        self.take(from, mover, moving_piece);
        let placed_piece = m.promotion_piece().unwrap_or(moving_piece);
        self.place(to, mover, placed_piece);

        if m.is_castling() {
            let (rook_from, rook_to) = Self::castling_rook_squares(mover, m.is_castle_kingside());
            self.take(rook_from, mover, Piece::Rook);
            self.place(rook_to, mover, Piece::Rook);
        }

        if let Some(ep) = prev_ep {
            self.hash ^= ZOBRIST.en_passant_file(ep.file());
        }
        self.ep_square = if m.is_double_pawn_push() {
            let ep_sq = Square::new((from.rank() + to.rank()) / 2, from.file());
            self.hash ^= ZOBRIST.en_passant_file(ep_sq.file());
            Some(ep_sq)
        } else {
            None
        };

        let touched_from = clear_rights_touched_by(&mut self.castling_rights, from);
        let touched_to = clear_rights_touched_by(&mut self.castling_rights, to);
        for mask in [touched_from, touched_to] {
            let mut bits = mask;
            while bits != 0 {
                let bit_index = bits.trailing_zeros();
                self.hash ^= ZOBRIST.castling(bit_index);
                bits &= bits - 1;
            }
        }

        self.halfmove_clock =
            if captured.is_some() || is_pawn_move { 0 } else { self.halfmove_clock + 1 };

        if !mover.is_white() {
            self.fullmove_number += 1;
        }

        self.side_to_move = mover.opponent();
        self.hash ^= ZOBRIST.side_to_move();
        self.repetitions.bump(self.hash);

        UnmakeInfo {
            captured,
            prev_castling,
            prev_ep,
            prev_halfmove_clock,
            prev_hash,
            prev_eval_mg,
            prev_eval_eg,
            prev_phase,
        }
    }

    /// Reverses the effect of `do_move(m)`, given the `UnmakeInfo` it returned.
    pub fn undo_move(&mut self, m: Move, info: UnmakeInfo) {
        self.repetitions.unbump(self.hash);
        let mover = self.side_to_move.opponent();
        self.side_to_move = mover;
        if !mover.is_white() {
            self.fullmove_number -= 1;
        }

        let from = m.from();
        let to = m.to();
        let placed_piece = self.piece_at(to).map(|(_, p)| p).expect("undo_move: to-square empty");
        self.remove_piece(to, mover, placed_piece);
        let moving_piece = m.promotion_piece().map_or(placed_piece, |_| Piece::Pawn);
        self.set_piece(from, mover, moving_piece);

        if m.is_castling() {
            let (rook_from, rook_to) = Self::castling_rook_squares(mover, m.is_castle_kingside());
            self.remove_piece(rook_to, mover, Piece::Rook);
            self.set_piece(rook_from, mover, Piece::Rook);
        }

        if let Some(captured_piece) = info.captured {
            let captured_sq =
                if m.is_en_passant() { Square::new(from.rank(), to.file()) } else { to };
            self.set_piece(captured_sq, mover.opponent(), captured_piece);
        }

        self.castling_rights = info.prev_castling;
        self.ep_square = info.prev_ep;
        self.halfmove_clock = info.prev_halfmove_clock;
        self.hash = info.prev_hash;
        self.eval_mg = info.prev_eval_mg;
        self.eval_eg = info.prev_eval_eg;
        self.phase = info.prev_phase;
    }

    /// Passes the move without moving a piece: flips the side to move and
    /// clears any en-passant target (§4.G null-move pruning).
    pub fn do_null_move(&mut self) -> NullMoveInfo {
        let prev_ep = self.ep_square;
        let prev_hash = self.hash;
        if let Some(ep) = prev_ep {
            self.hash ^= ZOBRIST.en_passant_file(ep.file());
        }
        self.ep_square = None;
        self.side_to_move = self.side_to_move.opponent();
        self.hash ^= ZOBRIST.side_to_move();
        self.repetitions.bump(self.hash);
        NullMoveInfo { prev_ep, prev_hash }
    }

    pub fn undo_null_move(&mut self, info: NullMoveInfo) {
        self.repetitions.unbump(self.hash);
        self.side_to_move = self.side_to_move.opponent();
        self.ep_square = info.prev_ep;
        self.hash = info.prev_hash;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn quiet_move_roundtrips_position() {
        let mut pos = Position::new();
        let before_hash = pos.hash();
        let m = Move::double_pawn_push(Square::new(1, 4), Square::new(3, 4));
        let info = pos.do_move(m);
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.en_passant_square(), Some(Square::new(2, 4)));
        pos.undo_move(m, info);
        assert_eq!(pos.hash(), before_hash);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.en_passant_square(), None);
    }

    #[test]
    fn capture_restores_captured_piece() {
        let mut pos = Position::try_from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
        let before = pos.to_fen();
        let m = Move::quiet(Square::new(1, 4), Square::new(3, 4));
        let push_info = pos.do_move(m);
        let capture = Move::capture(Square::new(3, 4), Square::new(3, 3));
        let capture_info = pos.do_move(capture);
        assert!(pos.pieces(Color::White, Piece::Pawn).contains(Square::new(3, 3)));
        pos.undo_move(capture, capture_info);
        pos.undo_move(m, push_info);
        assert_eq!(pos.to_fen(), before);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut pos = Position::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let m = Move::en_passant(Square::new(4, 4), Square::new(5, 3));
        let info = pos.do_move(m);
        assert!(pos.piece_at(Square::new(4, 3)).is_none());
        assert!(pos.pieces(Color::White, Piece::Pawn).contains(Square::new(5, 3)));
        let before_fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        pos.undo_move(m, info);
        assert_eq!(pos.to_fen(), before_fen);
    }

    #[test]
    fn castling_moves_both_king_and_rook() {
        let mut pos = Position::try_from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let m = Move::castle_kingside(Square::new(0, 4), Square::new(0, 6));
        let info = pos.do_move(m);
        assert!(pos.pieces(Color::White, Piece::King).contains(Square::new(0, 6)));
        assert!(pos.pieces(Color::White, Piece::Rook).contains(Square::new(0, 5)));
        pos.undo_move(m, info);
        assert!(pos.pieces(Color::White, Piece::King).contains(Square::new(0, 4)));
        assert!(pos.pieces(Color::White, Piece::Rook).contains(Square::new(0, 7)));
    }

    #[test]
    fn null_move_only_flips_side_and_clears_ep() {
        let mut pos = Position::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let info = pos.do_null_move();
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.en_passant_square(), None);
        pos.undo_null_move(info);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.en_passant_square(), Some(Square::new(5, 3)));
    }
}
