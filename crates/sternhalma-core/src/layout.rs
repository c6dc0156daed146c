//! Layout string parsing and serialization for [`Board`].
//!
//! A layout lists rows 8 down to 1 separated by `/`, with `W` and `B` for
//! pieces and digits for runs of empty cells, followed by the side to move.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::error::LayoutError;

/// The layout of the starting position.
pub const STARTING_LAYOUT: &str = "4BBBB/5BBB/6BB/7B/W7/WW6/WWW5/WWWW4 w";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let fields: Vec<&str> = layout.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(LayoutError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != Cell::SIDE as usize {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut sides = [Bitboard::EMPTY; Color::COUNT];

        for (row_index, row_str) in rows.iter().enumerate() {
            let row = Cell::SIDE - 1 - row_index as u8;
            let mut col: usize = 0;
            let mut placed: Vec<(usize, Color)> = Vec::new();

            for c in row_str.chars() {
                match c {
                    'W' => {
                        placed.push((col, Color::White));
                        col += 1;
                    }
                    'B' => {
                        placed.push((col, Color::Black));
                        col += 1;
                    }
                    '1'..='8' => col += c as usize - '0' as usize,
                    _ => return Err(LayoutError::InvalidPieceChar { character: c }),
                }
            }

            if col != Cell::SIDE as usize {
                return Err(LayoutError::BadRowLength {
                    row_index,
                    length: col,
                });
            }

            for (col, color) in placed {
                if let Some(cell) = Cell::new(row, col as u8) {
                    sides[color.index()] = sides[color.index()].with(cell);
                }
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(LayoutError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };

        Ok(Board::from_sides(sides[0], sides[1], side_to_move)?)
    }
}

impl Board {
    /// Serialize the placement and side to move as a layout string.
    pub fn to_layout(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Cell::SIDE).rev() {
            let mut empty = 0;
            for col in 0..Cell::SIDE {
                let piece = Cell::new(row, col).and_then(|cell| self.color_on(cell));
                match piece {
                    Some(color) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        let c = match color {
                            Color::White => 'W',
                            Color::Black => 'B',
                        };
                        write!(f, "{c}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.side_to_move())
    }
}
