//! End-to-end scenarios exercised against the public crate API (§8).

use corvus_engine::engine::EngineSession;
use corvus_engine::position::Position;
use corvus_engine::search::{ScoreReport, SearchLimits};

#[test]
fn starting_position_has_exactly_twenty_legal_moves() {
    let mut pos = Position::new();
    assert_eq!(pos.generate_legal().len(), 20);
}

#[test]
fn perft_start_position_matches_known_node_counts() {
    let mut pos = Position::new();
    let expected = [(1, 20), (2, 400), (3, 8902)];
    for (depth, nodes) in expected {
        assert_eq!(pos.perft(depth), nodes, "perft mismatch at depth {depth}");
    }
}

#[test]
fn perft_kiwipete_depth_three() {
    let mut pos =
        Position::try_from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(pos.perft(3), 97_862);
}

#[test]
fn fools_mate_is_found_at_depth_four() {
    let mut session = EngineSession::new();
    session.set_position(None, &["f2f3", "e7e5", "g2g4"]).unwrap();

    let limits = SearchLimits { depth: Some(4), ..SearchLimits::default() };
    let mut last_score = None;
    let best = session.go(limits, |report| last_score = Some(report.score));

    assert_eq!(best.to_string(), "d8h4");
    assert!(matches!(last_score, Some(ScoreReport::Mate(1))));
}

#[test]
fn mate_in_one_is_found_at_depth_three() {
    let mut session = EngineSession::new();
    session.set_position(Some("6k1/5ppp/8/8/8/8/5PPP/R6K w - - 0 1"), &[]).unwrap();

    let limits = SearchLimits { depth: Some(3), ..SearchLimits::default() };
    let mut last_score = None;
    let best = session.go(limits, |report| last_score = Some(report.score));

    assert_eq!(best.to_string(), "a1a8");
    assert!(matches!(last_score, Some(ScoreReport::Mate(1))));
}

#[test]
fn en_passant_capture_is_legal_and_removes_the_captured_pawn() {
    let mut pos = Position::try_from_fen("4k3/8/8/pP6/8/8/8/4K3 w - a6 0 1").unwrap();
    let legal = pos.generate_legal();
    assert!(legal.iter().any(|m| m.to_string() == "b5a6"));

    let mut session = EngineSession::new();
    session.set_position(Some("4k3/8/8/pP6/8/8/8/4K3 w - a6 0 1"), &["b5a6"]).unwrap();
    assert!(session.position().piece_at("a6".parse().unwrap()).is_some());
    assert!(session.position().piece_at("a5".parse().unwrap()).is_none());
    assert!(session.position().piece_at("b5".parse().unwrap()).is_none());
}

#[test]
fn round_trip_do_and_undo_move_restores_the_position_exactly() {
    let mut pos = Position::try_from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    )
    .unwrap();
    let before_hash = pos.hash();
    let before_fen = pos.to_fen();

    for mv in pos.generate_legal().iter().copied().collect::<Vec<_>>() {
        let info = pos.do_move(mv);
        pos.undo_move(mv, info);
        assert_eq!(pos.hash(), before_hash, "hash not restored after {mv}");
        assert_eq!(pos.to_fen(), before_fen, "fen not restored after {mv}");
    }
}

#[test]
fn search_is_deterministic_across_independent_sessions() {
    let limits = SearchLimits { depth: Some(4), ..SearchLimits::default() };

    let mut first = EngineSession::new();
    let a = first.go(limits, |_| {});

    let mut second = EngineSession::new();
    let b = second.go(limits, |_| {});

    assert_eq!(a, b);
}
