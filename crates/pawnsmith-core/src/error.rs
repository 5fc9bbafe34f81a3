//! Error types for position description parsing.

/// Errors that occur when parsing a position description.
///
/// Each variant names the field that failed so a caller can report exactly
/// what was wrong with the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The description does not have exactly 6 whitespace-separated fields.
    #[error("expected 6 fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Board rank (1-8) as written in the description.
        rank: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not `w` or `b`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The field as written.
        found: String,
    },
    /// An unrecognized or repeated character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en-passant field is neither `-` nor a square name.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The field as written.
        found: String,
    },
    /// A move counter is not a non-negative integer.
    #[error("invalid {field}: \"{found}\"")]
    InvalidCounter {
        /// Which counter ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The field as written.
        found: String,
    },
}
