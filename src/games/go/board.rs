use std::cmp::Ordering;
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use thiserror::Error;

use crate::board::{
    AllMovesIterator, AvailableMovesIterator, Board, BoardDone, BoardMoves, Outcome, PlayError, Player,
};
use crate::games::go::group::{compute_group, Group};
use crate::games::tile::{Tile, MAX_BOARD_SIZE};

/// The Go board the planner puts in front of children: plain capture Go without ko,
/// scored by comparing capture tallies once both sides pass.
///
/// The grid is replaced wholesale on every accepted placement, so clones taken for bot
/// lookahead never observe a half-applied move.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct GoBoard {
    size: u8,
    grid: Vec<Option<Player>>,
    next_player: Player,
    state: State,
    /// Stones captured *by* each player, indexed by [Player::index].
    captured: [u16; 2],
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Move {
    Pass,
    Place(Tile),
}

/// Capture tallies for both players.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

impl Score {
    /// More captures wins, equal tallies draw.
    pub fn to_outcome(self) -> Outcome {
        match self.a.cmp(&self.b) {
            Ordering::Greater => Outcome::WonBy(Player::A),
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::WonBy(Player::B),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum State {
    Normal,
    Passed,
    Done(Outcome),
}

/// Why a stone placement was rejected. The board is left untouched in every case.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMove {
    #[error("tile is outside the board")]
    OutOfBounds,
    #[error("tile is already occupied")]
    Occupied,
    #[error("placement would leave the placing group without liberties")]
    Suicide,
}

/// A fully resolved placement: the grid after captures and the number of stones removed.
struct Resolved {
    grid: Vec<Option<Player>>,
    captured: u16,
}

impl GoBoard {
    pub fn new(size: u8) -> GoBoard {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "Size {} outside the supported range 1..={}",
            size,
            MAX_BOARD_SIZE
        );

        let area = size as usize * size as usize;
        GoBoard {
            size,
            grid: vec![None; area],
            next_player: Player::A,
            state: State::Normal,
            captured: [0; 2],
        }
    }

    pub(super) fn from_parts(
        size: u8,
        grid: Vec<Option<Player>>,
        next_player: Player,
        state: State,
        captured: [u16; 2],
    ) -> GoBoard {
        debug_assert_eq!(grid.len(), size as usize * size as usize);
        GoBoard {
            size,
            grid,
            next_player,
            state,
            captured,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn area(&self) -> u16 {
        self.size as u16 * self.size as u16
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn stone_at(&self, tile: Tile) -> Option<Player> {
        assert!(tile.exists(self.size));
        self.grid[tile.index(self.size)]
    }

    /// The number of stones `player` has captured so far.
    pub fn captured_by(&self, player: Player) -> u16 {
        self.captured[player.index() as usize]
    }

    pub fn stone_count(&self) -> u16 {
        self.grid.iter().filter(|cell| cell.is_some()).count() as u16
    }

    pub fn empty_count(&self) -> u16 {
        self.area() - self.stone_count()
    }

    pub fn current_score(&self) -> Score {
        Score {
            a: self.captured_by(Player::A) as u32,
            b: self.captured_by(Player::B) as u32,
        }
    }

    /// The group the stone at `tile` belongs to, or `None` for an empty tile.
    /// Recomputed on demand, see [Group].
    pub fn group_at(&self, tile: Tile) -> Option<Group> {
        assert!(tile.exists(self.size));
        compute_group(&self.grid, self.size, tile)
    }

    /// Clone this board, place a stone for the next player on `tile` and resolve captures.
    /// Returns the resulting board and the number of stones the placement captured.
    ///
    /// On rejection the original board is all there is: no partial placement, zero captures.
    pub fn place_and_resolve(&self, tile: Tile) -> Result<(GoBoard, u16), IllegalMove> {
        let mut next = self.clone();
        let captured = next.apply_place(tile)?;
        Ok((next, captured))
    }

    /// Place a stone of `color` on a copy of the grid and resolve the consequences:
    /// adjacent enemy groups that lost their last liberty are removed first, and only then
    /// is the placing group checked for suicide. The ordering matters, it is what makes a
    /// self-atari placement that captures legal.
    fn resolve_place(&self, tile: Tile, color: Player) -> Result<Resolved, IllegalMove> {
        if !tile.exists(self.size) {
            return Err(IllegalMove::OutOfBounds);
        }
        let index = tile.index(self.size);
        if self.grid[index].is_some() {
            return Err(IllegalMove::Occupied);
        }

        let mut grid = self.grid.clone();
        grid[index] = Some(color);

        // capture resolution: a group reached through an already-cleared stone reads as
        // empty on the second visit, so nothing is counted twice
        let mut captured = 0;
        for adj in tile.all_adjacent(self.size) {
            if grid[adj.index(self.size)] != Some(color.other()) {
                continue;
            }
            let group = compute_group(&grid, self.size, adj).expect("adjacent stone must form a group");
            if group.liberties == 0 {
                captured += group.stone_count();
                for stone in group.stones {
                    grid[stone.index(self.size)] = None;
                }
            }
        }

        let own = compute_group(&grid, self.size, tile).expect("placed stone must form a group");
        if own.liberties == 0 {
            return Err(IllegalMove::Suicide);
        }

        Ok(Resolved { grid, captured })
    }

    fn apply_place(&mut self, tile: Tile) -> Result<u16, IllegalMove> {
        debug_assert!(!self.is_done());
        let curr = self.next_player;
        let resolved = self.resolve_place(tile, curr)?;

        self.grid = resolved.grid;
        self.captured[curr.index() as usize] += resolved.captured;
        self.next_player = curr.other();

        // a placement breaks any pass streak; a full board ends the game
        self.state = if self.empty_count() == 0 {
            State::Done(self.current_score().to_outcome())
        } else {
            State::Normal
        };

        Ok(resolved.captured)
    }
}

impl Board for GoBoard {
    type Move = Move;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;

        let result = match mv {
            Move::Pass => true,
            Move::Place(tile) => self.resolve_place(tile, self.next_player).is_ok(),
        };

        Ok(result)
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_done()?;

        match mv {
            Move::Pass => {
                self.state = match self.state {
                    State::Normal => State::Passed,
                    State::Passed => State::Done(self.current_score().to_outcome()),
                    State::Done(_) => unreachable!(),
                };
                self.next_player = self.next_player.other();
                Ok(())
            }
            Move::Place(tile) => match self.apply_place(tile) {
                Ok(_) => Ok(()),
                Err(_) => Err(PlayError::UnavailableMove),
            },
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.state {
            State::Normal | State::Passed => None,
            State::Done(outcome) => Some(outcome),
        }
    }
}

impl<'a> BoardMoves<'a, GoBoard> for GoBoard {
    type AllMovesIterator = AllMovesIterator<GoBoard>;
    type AvailableMovesIterator = AvailableMovesIterator<'a, GoBoard>;

    fn all_possible_moves() -> Self::AllMovesIterator {
        AllMovesIterator::default()
    }

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        AvailableMovesIterator::new(self)
    }
}

impl InternalIterator for AllMovesIterator<GoBoard> {
    type Item = Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        f(Move::Pass)?;
        for tile in Tile::all(MAX_BOARD_SIZE) {
            f(Move::Place(tile))?;
        }
        ControlFlow::Continue(())
    }
}

impl InternalIterator for AvailableMovesIterator<'_, GoBoard> {
    type Item = Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let board = self.board();

        f(Move::Pass)?;
        for tile in Tile::all(board.size()) {
            if board.is_available_move(Move::Place(tile)).unwrap() {
                f(Move::Place(tile))?;
            }
        }

        ControlFlow::Continue(())
    }
}
