//! Chess rules: piece codes, positions, move tables, and legal move generation.

mod apply_move;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;
mod tables;

pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::ParseError;
pub use fen::STARTING_FEN;
pub use movegen::{MoveList, generate_legal_moves, generate_pseudo_legal_moves, in_check, is_attacked};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{PiecesOf, Position, PrettyPosition};
pub use square::Square;
pub use tables::{DIAGONAL_STEPS, MOVE_TABLES, MoveTables, STRAIGHT_STEPS};
