use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;
use thiserror::Error;

use crate::board::{Board, Player};
use crate::games::go::board::{GoBoard, Move, State};
use crate::games::tile::{Tile, MAX_BOARD_SIZE};

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "pass"),
            Move::Place(tile) => write!(f, "{}", tile),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum InvalidFen {
    #[error("fen does not have the expected three fields")]
    Shape,
    #[error("fen rows do not form a square board")]
    NotSquare,
    #[error("invalid character in fen")]
    InvalidChar,
    #[error("invalid pass counter in fen")]
    InvalidPassCounter,
}

impl GoBoard {
    /// Render this board as a compact single-line string: rows from top to bottom separated
    /// by `/`, the next player and the current pass streak, eg. `".w/b. b 0"`.
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

        let passes = match self.state() {
            State::Normal => 0,
            State::Passed => 1,
            State::Done(_) => 2,
        };

        format!("{} {} {}", rows, self.next_player().to_char(), passes)
    }

    /// Parse a board from the format produced by [GoBoard::to_fen].
    ///
    /// The diagram does not carry capture tallies, so the parsed board starts with clean
    /// tallies; a pass counter of 2 therefore parses as a finished drawn game.
    pub fn from_fen(fen: &str) -> Result<GoBoard, InvalidFen> {
        let (rows, next, passes) = fen.split(' ').collect_tuple().ok_or(InvalidFen::Shape)?;

        let rows = rows.split('/').collect_vec();
        let size = rows.len();
        if size > MAX_BOARD_SIZE as usize || rows.iter().any(|row| row.len() != size) {
            return Err(InvalidFen::NotSquare);
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
                    _ => return Err(InvalidFen::InvalidChar),
                };
            }
        }

        let next_player = match next {
            "b" => Player::A,
            "w" => Player::B,
            _ => return Err(InvalidFen::InvalidChar),
        };

        let captured = [0; 2];
        let score = crate::games::go::Score { a: 0, b: 0 };
        let state = match passes {
            "0" => State::Normal,
            "1" => State::Passed,
            "2" => State::Done(score.to_outcome()),
            _ => return Err(InvalidFen::InvalidPassCounter),
        };

        Ok(GoBoard::from_parts(size, grid, next_player, state, captured))
    }

    fn write_debug(&self, f: &mut Formatter, include_fen: bool) -> std::fmt::Result {
        let fen = match include_fen {
            true => format!(", fen={:?}", self.to_fen()),
            false => String::new(),
        };

        write!(
            f,
            "GoBoard(next={}, state={:?}, captures={}-{}{})",
            self.next_player().to_char(),
            self.state(),
            self.captured_by(Player::A),
            self.captured_by(Player::B),
            fen,
        )
    }
}

impl Debug for GoBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_debug(f, true)
    }
}

impl Display for GoBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_debug(f, false)?;
        writeln!(f)?;

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
