use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;
use thiserror::Error;

use crate::board::{Board, Player};
use crate::games::omok::board::OmokBoard;
use crate::games::tile::{Tile, MAX_BOARD_SIZE};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum InvalidOmokFen {
    #[error("fen does not have the expected two fields")]
    Shape,
    #[error("fen rows do not form a square board")]
    NotSquare,
    #[error("invalid character in fen")]
    InvalidChar,
}

impl OmokBoard {
    /// Render this board as a compact single-line string: rows from top to bottom separated
    /// by `/` and the next player, eg. `".w/b. b"`.
    pub fn to_fen(&self) -> String {
        let rows = (0..self.size())
            .rev()
            .map(|y| {
                (0..self.size())
                    .map(|x| match self.stone_at(Tile::new(x, y)) {
                        None => '.',
                        Some(player) => player.to_char(),
                    })
                    .collect::<String>()
            })
            .join("/");

        format!("{} {}", rows, self.next_player().to_char())
    }

    /// Parse a board from the format produced by [OmokBoard::to_fen].
    /// The outcome is recomputed from the parsed position.
    pub fn from_fen(fen: &str) -> Result<OmokBoard, InvalidOmokFen> {
        let (rows, next) = fen.split(' ').collect_tuple().ok_or(InvalidOmokFen::Shape)?;

        let rows = rows.split('/').collect_vec();
        let size = rows.len();
        if size > MAX_BOARD_SIZE as usize || rows.iter().any(|row| row.len() != size) {
            return Err(InvalidOmokFen::NotSquare);
        }
        let size = size as u8;

        let mut grid = vec![None; size as usize * size as usize];
        for (row_index, row) in rows.iter().enumerate() {
            let y = size as usize - 1 - row_index;
            for (x, c) in row.chars().enumerate() {
                grid[Tile::new(x as u8, y as u8).index(size)] = match c {
                    '.' => None,
                    'b' => Some(Player::A),
                    'w' => Some(Player::B),
                    _ => return Err(InvalidOmokFen::InvalidChar),
                };
            }
        }

        let next_player = match next {
            "b" => Player::A,
            "w" => Player::B,
            _ => return Err(InvalidOmokFen::InvalidChar),
        };

        Ok(OmokBoard::from_parts(size, grid, next_player))
    }
}

impl Debug for OmokBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OmokBoard(next={}, stones={}, outcome={:?}, fen={:?})",
            self.next_player().to_char(),
            self.stones_placed(),
            self.outcome(),
            self.to_fen(),
        )
    }
}

impl Display for OmokBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "OmokBoard(next={}, stones={}, outcome={:?})",
            self.next_player().to_char(),
            self.stones_placed(),
            self.outcome(),
        )?;

        let size = self.size();
        let width_y = size.to_string().len();

        for y in (0..size).rev() {
            write!(f, "{:width$} ", y + 1, width = width_y)?;
            for x in 0..size {
                match self.stone_at(Tile::new(x, y)) {
                    None => write!(f, ".")?,
                    Some(player) => write!(f, "{}", player.to_char())?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "{:width$} ", "", width = width_y)?;
        for x in 0..size {
            write!(f, "{}", Tile::new(x, 0).x_char())?;
        }
        writeln!(f)?;

        Ok(())
    }
}
