use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::{
    AllMovesIterator, AvailableMovesIterator, Board, BoardDone, BoardMoves, Outcome, PlayError, Player,
};
use crate::games::tile::{Tile, MAX_BOARD_SIZE};

/// The four scan axes for win detection: horizontal, vertical and both diagonals.
/// The opposite directions are covered by only starting a count at the first stone of a run.
pub const LINE_DIRECTIONS: [(i16, i16); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// The Omok (five-in-a-row) board. No captures, no pass: a move is any empty tile, and the
/// first player to line up five or more stones along one of the four axes wins.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct OmokBoard {
    size: u8,
    grid: Vec<Option<Player>>,
    next_player: Player,
    outcome: Option<Outcome>,
    stones_placed: u16,
}

impl OmokBoard {
    /// The run length that wins the game.
    pub const WIN_RUN: u16 = 5;

    pub fn new(size: u8) -> OmokBoard {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "Size {} outside the supported range 1..={}",
            size,
            MAX_BOARD_SIZE
        );

        let area = size as usize * size as usize;
        OmokBoard {
            size,
            grid: vec![None; area],
            next_player: Player::A,
            outcome: None,
            stones_placed: 0,
        }
    }

    pub(super) fn from_parts(size: u8, grid: Vec<Option<Player>>, next_player: Player) -> OmokBoard {
        debug_assert_eq!(grid.len(), size as usize * size as usize);
        let stones_placed = grid.iter().filter(|cell| cell.is_some()).count() as u16;

        let mut board = OmokBoard {
            size,
            grid,
            next_player,
            outcome: None,
            stones_placed,
        };
        board.outcome = board.compute_outcome();
        board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn area(&self) -> u16 {
        self.size as u16 * self.size as u16
    }

    pub fn stone_at(&self, tile: Tile) -> Option<Player> {
        assert!(tile.exists(self.size));
        self.grid[tile.index(self.size)]
    }

    /// The total number of stones on the board, used by the score bridge for the
    /// fast-win bonus.
    pub fn stones_placed(&self) -> u16 {
        self.stones_placed
    }

    /// Scan the whole board for a winning run of at least [OmokBoard::WIN_RUN] stones.
    ///
    /// A run is only counted from its first stone, so every line is inspected exactly once.
    /// Pure function of the current position: no incremental bookkeeping, calling it twice
    /// yields the same answer.
    pub fn check_winner(&self) -> Option<Player> {
        for tile in Tile::all(self.size) {
            let Some(color) = self.stone_at(tile) else {
                continue;
            };

            for (dx, dy) in LINE_DIRECTIONS {
                // not the start of the run in this direction, already counted
                if self
                    .stone_at_offset(tile, -dx, -dy)
                    .map_or(false, |prev| prev == Some(color))
                {
                    continue;
                }

                let mut run = 1;
                let mut curr = tile;
                while let Some(next) = curr.offset(dx, dy, self.size) {
                    if self.stone_at(next) != Some(color) {
                        break;
                    }
                    run += 1;
                    curr = next;
                }

                if run >= Self::WIN_RUN {
                    return Some(color);
                }
            }
        }

        None
    }

    /// `Some(cell)` if the offset tile is on the board, `None` otherwise.
    fn stone_at_offset(&self, tile: Tile, dx: i16, dy: i16) -> Option<Option<Player>> {
        tile.offset(dx, dy, self.size).map(|t| self.stone_at(t))
    }

    fn compute_outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.check_winner() {
            Some(Outcome::WonBy(winner))
        } else if self.stones_placed == self.area() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

impl Board for OmokBoard {
    type Move = Tile;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;
        Ok(mv.exists(self.size) && self.grid[mv.index(self.size)].is_none())
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_can_play(mv)?;

        self.grid[mv.index(self.size)] = Some(self.next_player);
        self.stones_placed += 1;
        self.next_player = self.next_player.other();

        // the terminal outcome is computed once and then cached forever
        self.outcome = self.compute_outcome();

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl<'a> BoardMoves<'a, OmokBoard> for OmokBoard {
    type AllMovesIterator = AllMovesIterator<OmokBoard>;
    type AvailableMovesIterator = AvailableMovesIterator<'a, OmokBoard>;

    fn all_possible_moves() -> Self::AllMovesIterator {
        AllMovesIterator::default()
    }

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        AvailableMovesIterator::new(self)
    }
}

impl InternalIterator for AllMovesIterator<OmokBoard> {
    type Item = Tile;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for tile in Tile::all(MAX_BOARD_SIZE) {
            f(tile)?;
        }
        ControlFlow::Continue(())
    }
}

impl InternalIterator for AvailableMovesIterator<'_, OmokBoard> {
    type Item = Tile;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let board = self.board();
        for tile in Tile::all(board.size()) {
            if board.stone_at(tile).is_none() {
                f(tile)?;
            }
        }
        ControlFlow::Continue(())
    }
}
