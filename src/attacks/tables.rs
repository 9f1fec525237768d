//! Non-slider pseudo-attack tables and square-relation tables (component B).

use std::sync::LazyLock;

use crate::types::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(i32, i32); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];

const KING_DELTAS: [(i32, i32); 8] =
    [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];

fn step_attacks(square: usize, deltas: &[(i32, i32)]) -> u64 {
    let rank0 = (square / 8) as i32;
    let file0 = (square % 8) as i32;
    let mut bits = 0u64;
    for &(dr, df) in deltas {
        let r = rank0 + dr;
        let f = file0 + df;
        if (0..8).contains(&r) && (0..8).contains(&f) {
            bits |= 1u64 << (r * 8 + f);
        }
    }
    bits
}

pub static KNIGHT_ATTACKS: LazyLock<[u64; 64]> = LazyLock::new(|| {
    let mut table = [0u64; 64];
    for (sq, entry) in table.iter_mut().enumerate() {
        *entry = step_attacks(sq, &KNIGHT_DELTAS);
    }
    table
});

pub static KING_ATTACKS: LazyLock<[u64; 64]> = LazyLock::new(|| {
    let mut table = [0u64; 64];
    for (sq, entry) in table.iter_mut().enumerate() {
        *entry = step_attacks(sq, &KING_DELTAS);
    }
    table
});

/// `PAWN_ATTACKS[color][square]`: diagonal capture squares only (no pushes).
pub static PAWN_ATTACKS: LazyLock<[[u64; 64]; 2]> = LazyLock::new(|| {
    let mut table = [[0u64; 64]; 2];
    for sq in 0..64 {
        let rank0 = (sq / 8) as i32;
        let file0 = (sq % 8) as i32;
        for (color_idx, dr) in [(0usize, 1i32), (1usize, -1i32)] {
            let mut bits = 0u64;
            for df in [-1, 1] {
                let r = rank0 + dr;
                let f = file0 + df;
                if (0..8).contains(&r) && (0..8).contains(&f) {
                    bits |= 1u64 << (r * 8 + f);
                }
            }
            table[color_idx][sq] = bits;
        }
    }
    table
});

/// `BETWEEN[s1][s2]`: squares strictly between two colinear squares, else empty.
pub static BETWEEN: LazyLock<Vec<Vec<u64>>> = LazyLock::new(|| {
    let mut table = vec![vec![0u64; 64]; 64];
    for s1 in 0..64 {
        for s2 in 0..64 {
            table[s1][s2] = between_bits(s1, s2);
        }
    }
    table
});

/// `LINE[s1][s2]`: all squares on the line through s1,s2 (endpoints included),
/// empty if the two squares do not share a rank, file, or diagonal.
pub static LINE: LazyLock<Vec<Vec<u64>>> = LazyLock::new(|| {
    let mut table = vec![vec![0u64; 64]; 64];
    for s1 in 0..64 {
        for s2 in 0..64 {
            table[s1][s2] = line_bits(s1, s2);
        }
    }
    table
});

fn colinear_delta(s1: usize, s2: usize) -> Option<(i32, i32)> {
    let (r1, f1) = ((s1 / 8) as i32, (s1 % 8) as i32);
    let (r2, f2) = ((s2 / 8) as i32, (s2 % 8) as i32);
    let (dr, df) = (r2 - r1, f2 - f1);
    if dr == 0 && df == 0 {
        return None;
    }
    if dr == 0 {
        Some((0, df.signum()))
    } else if df == 0 {
        Some((dr.signum(), 0))
    } else if dr.abs() == df.abs() {
        Some((dr.signum(), df.signum()))
    } else {
        None
    }
}

fn between_bits(s1: usize, s2: usize) -> u64 {
    let Some((dr, df)) = colinear_delta(s1, s2) else { return 0 };
    let mut bits = 0u64;
    let (mut r, mut f) = ((s1 / 8) as i32 + dr, (s1 % 8) as i32 + df);
    while (r * 8 + f) as usize != s2 {
        bits |= 1u64 << (r * 8 + f);
        r += dr;
        f += df;
    }
    bits
}

fn line_bits(s1: usize, s2: usize) -> u64 {
    let Some((dr, df)) = colinear_delta(s1, s2) else { return 0 };
    let mut bits = 1u64 << s1 | 1u64 << s2;
    let (mut r, mut f) = ((s1 / 8) as i32, (s1 % 8) as i32);
    while (0..8).contains(&(r - dr)) && (0..8).contains(&(f - df)) {
        r -= dr;
        f -= df;
        bits |= 1u64 << (r * 8 + f);
    }
    let (mut r, mut f) = ((s2 / 8) as i32, (s2 % 8) as i32);
    while (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
        r += dr;
        f += df;
        bits |= 1u64 << (r * 8 + f);
    }
    bits
}

#[must_use]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.index()])
}

#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.index()])
}

#[must_use]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][sq.index()])
}

#[must_use]
pub fn between(s1: Square, s2: Square) -> Bitboard {
    Bitboard(BETWEEN[s1.index()][s2.index()])
}

#[must_use]
pub fn line_through(s1: Square, s2: Square) -> Bitboard {
    Bitboard(LINE[s1.index()][s2.index()])
}
