//! Position description parsing and serialization.
//!
//! The description has six whitespace-separated fields: piece placement
//! (rank 8 first, `/` between ranks, digits for runs of empty squares), side
//! to move, castling rights, en-passant target, halfmove clock, fullmove number.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::ParseError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Description of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a description, falling back to the starting position when it is malformed.
    ///
    /// This is the permissive entry point for callers that must always end up
    /// with a playable position. The rejected input and the reason are logged
    /// at `warn` level. Use [`str::parse`] to get the [`ParseError`] instead.
    pub fn from_description(text: &str) -> Position {
        match text.parse() {
            Ok(position) => position,
            Err(error) => {
                warn!(%error, input = text, "malformed position description, using starting position");
                Position::starting_position()
            }
        }
    }

    /// Serialize only the piece-placement field.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for rank in (0u8..8).rev() {
            let mut empty_run = 0u8;
            for file in 0u8..8 {
                match self.piece_on(Square::new(rank, file)).letter() {
                    Some(c) => {
                        if empty_run > 0 {
                            out.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        out.push(c);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push((b'0' + empty_run) as char);
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}

fn parse_placement(field: &str, position: &mut Position) -> Result<(), ParseError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0usize;

        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ParseError::InvalidPieceChar { character: c });
                }
                file += run as usize;
                continue;
            }
            let piece = Piece::from_letter(c).ok_or(ParseError::InvalidPieceChar { character: c })?;
            if file >= 8 {
                return Err(ParseError::BadRankLength {
                    rank: rank as usize + 1,
                    length: file + 1,
                });
            }
            position.put(Square::new(rank, file as u8), piece);
            file += 1;
        }

        if file != 8 {
            return Err(ParseError::BadRankLength {
                rank: rank as usize + 1,
                length: file,
            });
        }
    }
    Ok(())
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, ParseError> {
    text.parse::<u32>().map_err(|_| ParseError::InvalidCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Position, ParseError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [placement, side, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(ParseError::WrongFieldCount { found: fields.len() });
        };

        let mut position = Position::empty();
        parse_placement(placement, &mut position)?;

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ParseError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };
        position.set_side_to_move(side_to_move);
        position.set_castling(CastleRights::from_field(castling)?);

        let target = match en_passant {
            "-" => None,
            name => Some(Square::from_algebraic(name).ok_or_else(|| ParseError::InvalidEnPassant {
                found: name.to_string(),
            })?),
        };
        position.set_en_passant(target);

        let halfmove_clock = parse_counter("halfmove clock", halfmove)?;
        let fullmove_number = parse_counter("fullmove number", fullmove)?;
        position.set_counters(halfmove_clock, fullmove_number);

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.placement(), self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
