//! Rule-level properties checked through the public API.

use pawnsmith_core::{
    Color, Move, MoveKind, Piece, Position, STARTING_FEN, Square, generate_legal_moves,
    generate_pseudo_legal_moves, in_check,
};

const POSITIONS: [&str; 5] = [
    STARTING_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
];

/// Play a legal move given in coordinate notation.
fn play(position: &Position, coordinate: &str) -> Position {
    let mv = generate_legal_moves(position)
        .iter()
        .copied()
        .find(|m| m.to_coordinate() == coordinate)
        .unwrap_or_else(|| panic!("{coordinate} is not legal in {position}"));
    position.apply_move(mv)
}

fn play_all(coordinates: &[&str]) -> Position {
    coordinates
        .iter()
        .fold(Position::starting_position(), |pos, c| play(&pos, c))
}

#[test]
fn start_position_roundtrip_and_move_count() {
    let pos: Position = STARTING_FEN.parse().unwrap();
    assert_eq!(pos.to_string(), STARTING_FEN);
    assert_eq!(pos.placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    assert_eq!(generate_legal_moves(&pos).len(), 20);
}

#[test]
fn legal_moves_never_leave_own_king_attacked() {
    for text in POSITIONS {
        let root: Position = text.parse().unwrap();
        for &first in &generate_legal_moves(&root) {
            let child = root.apply_move(first);
            assert!(
                !in_check(&child, root.side_to_move()),
                "{first} from {text} leaves the mover in check"
            );
            for &reply in &generate_legal_moves(&child) {
                let grandchild = child.apply_move(reply);
                assert!(
                    !in_check(&grandchild, child.side_to_move()),
                    "{first} {reply} from {text} leaves the mover in check"
                );
            }
        }
    }
}

#[test]
fn illegal_candidates_are_exactly_the_unsafe_ones() {
    for text in POSITIONS {
        let pos: Position = text.parse().unwrap();
        let legal = generate_legal_moves(&pos);
        for &mv in &generate_pseudo_legal_moves(&pos) {
            let safe = !in_check(&pos.apply_move(mv), pos.side_to_move());
            assert_eq!(legal.contains(mv), safe, "{mv} in {text}");
        }
    }
}

#[test]
fn slider_rays_stop_at_first_occupier() {
    for text in POSITIONS {
        let pos: Position = text.parse().unwrap();
        let us = pos.side_to_move();
        for mv in &generate_pseudo_legal_moves(&pos) {
            let piece = pos.piece_on(mv.start());
            if !(piece.moves_straight() || piece.moves_diagonal()) {
                continue;
            }
            let target = pos.piece_on(mv.dest());
            assert!(!target.is_friendly(us), "{mv} lands on a friendly piece in {text}");

            // every square strictly between start and dest must be empty
            let d_rank = (mv.dest().rank() as i8 - mv.start().rank() as i8).signum();
            let d_file = (mv.dest().file() as i8 - mv.start().file() as i8).signum();
            let mut sq = mv.start().offset(d_rank, d_file).unwrap();
            while sq != mv.dest() {
                assert!(pos.piece_on(sq).is_empty(), "{mv} jumps over {sq} in {text}");
                sq = sq.offset(d_rank, d_file).unwrap();
            }
        }
    }
}

#[test]
fn castling_blocked_by_attacked_transit() {
    // black rook on f8 covers f1
    let pos: Position = "5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
    let moves = generate_legal_moves(&pos);
    assert!(!moves.iter().any(|m| m.kind() == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind() == MoveKind::CastleQueenside));

    // attacked destination
    let pos: Position = "2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
    let moves = generate_legal_moves(&pos);
    assert!(moves.iter().any(|m| m.kind() == MoveKind::CastleKingside));
    assert!(!moves.iter().any(|m| m.kind() == MoveKind::CastleQueenside));
}

#[test]
fn castling_rights_follow_the_pieces() {
    let pos = play_all(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
    assert_eq!(pos.piece_on(Square::G1), Piece::WHITE_KING);
    assert_eq!(pos.piece_on(Square::F1), Piece::WHITE_ROOK);
    assert_eq!(pos.castle_rights(Color::White), (false, false));
    assert_eq!(pos.castle_rights(Color::Black), (true, true));

    let pos = play_all(&["h2h4", "e7e5", "h1h3"]);
    assert_eq!(pos.castle_rights(Color::White), (false, true));
}

#[test]
fn center_double_pushes_set_and_clear_target() {
    let after_e4 = play_all(&["e2e4"]);
    assert_eq!(after_e4.en_passant(), Some(Square::E3));

    let after_e5 = play(&after_e4, "e7e5");
    assert_eq!(after_e5.en_passant(), Some(Square::E6));

    let after_nf3 = play(&after_e5, "g1f3");
    assert_eq!(after_nf3.en_passant(), None);
}

#[test]
fn en_passant_window_lasts_one_ply() {
    let ready = play_all(&["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(ready.en_passant(), Some(Square::D6));
    let capture = generate_legal_moves(&ready)
        .iter()
        .copied()
        .find(|m| m.kind() == MoveKind::EnPassantCapture)
        .expect("exd6 should be available");
    assert_eq!(capture.start(), Square::E5);
    assert_eq!(capture.captured(), Piece::BLACK_PAWN);

    let taken = ready.apply_move(capture);
    assert_eq!(taken.piece_on(Square::D5), Piece::EMPTY);
    assert_eq!(taken.piece_on(Square::D6), Piece::WHITE_PAWN);

    // wait a move and the chance is gone
    let later = play(&play(&ready, "g1f3"), "h7h6");
    assert!(
        !generate_legal_moves(&later)
            .iter()
            .any(|m| m.kind() == MoveKind::EnPassantCapture)
    );
}

#[test]
fn promotion_yields_four_moves() {
    let pos: Position = "4k3/1P6/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
    let from_b7: Vec<Move> = generate_legal_moves(&pos)
        .iter()
        .copied()
        .filter(|m| m.start() == Square::B7)
        .collect();
    assert_eq!(from_b7.len(), 4);
    assert!(from_b7.iter().all(|m| m.kind().promotion().is_some()));

    let mut names: Vec<String> = from_b7.iter().map(|m| m.to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["b7b8b", "b7b8n", "b7b8q", "b7b8r"]);
}

#[test]
fn checkmate_and_stalemate_have_no_moves() {
    let mated = play_all(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(generate_legal_moves(&mated).is_empty());
    assert!(in_check(&mated, Color::White));

    let stalemate: Position = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
    assert!(generate_legal_moves(&stalemate).is_empty());
    assert!(!in_check(&stalemate, Color::Black));
}

#[test]
fn history_positions_are_untouched() {
    let start = Position::starting_position();
    let copy = start;
    let _ = play(&start, "e2e4");
    assert_eq!(start, copy);
}
