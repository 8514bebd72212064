use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use internal_iterator::InternalIterator;
use rand::Rng;
use thiserror::Error;

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// Error returned by operations that require a board that is not done yet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error("board is already done")]
pub struct BoardDone;

/// Error returned by [Board::play] when the move cannot be played.
/// Move rejection is a return value on purpose, it never crosses into bot or session logic
/// as a panic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlayError {
    #[error("board is already done")]
    BoardDone,
    #[error("move is not available on this board")]
    UnavailableMove,
}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

/// The main trait of this crate. Represents the state of a game.
/// Each game implementation provides its own constructors to allow for customizable start positions.
pub trait Board: 'static + Debug + Display + Clone + Eq + Hash + Send + Sync
where
    for<'a> Self: BoardMoves<'a, Self>,
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Eq + Ord + Hash + Copy + Send + Sync;

    /// Return the next player to make a move.
    /// If the board is done this is the player that did not play the last move for consistency.
    fn next_player(&self) -> Player;

    /// Return whether the given move is available.
    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone>;

    /// Pick a random move from the `available_moves` with a uniform distribution.
    /// Can be overridden for better performance.
    fn random_available_move(&self, rng: &mut impl Rng) -> Result<Self::Move, BoardDone> {
        let count = self.available_moves()?.count();
        let index = rng.gen_range(0..count);
        Ok(self.available_moves()?.nth(index).unwrap())
    }

    /// Play the move `mv`, modifying this board.
    /// A rejected move leaves the board untouched.
    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError>;

    /// Clone this board, play `mv` on it and return the new board.
    /// The receiver is never modified, which is what makes speculative bot lookahead safe.
    fn clone_and_play(&self, mv: Self::Move) -> Result<Self, PlayError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// Play a uniformly random available move, modifying this board.
    fn play_random_available_move(&mut self, rng: &mut impl Rng) -> Result<(), BoardDone> {
        let mv = self.random_available_move(rng)?;
        self.play(mv).unwrap();
        Ok(())
    }

    /// The outcome of this board, is `None` when this game is not done yet.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether this game is done.
    fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Return `Err(BoardDone)` if this board is done, `Ok(())` otherwise.
    fn check_done(&self) -> Result<(), BoardDone> {
        match self.is_done() {
            true => Err(BoardDone),
            false => Ok(()),
        }
    }

    /// Return `Err` if `mv` cannot be played on this board, `Ok(())` otherwise.
    fn check_can_play(&self, mv: Self::Move) -> Result<(), PlayError> {
        match self.is_available_move(mv)? {
            true => Ok(()),
            false => Err(PlayError::UnavailableMove),
        }
    }
}

/// A helper trait to get the correct lifetimes for [BoardMoves::available_moves].
/// This is a workaround for the lack of generic associated types,
/// see <https://github.com/rust-lang/rust/issues/44265>.
pub trait BoardMoves<'a, B: Board> {
    type AllMovesIterator: InternalIterator<Item = B::Move>;
    type AvailableMovesIterator: InternalIterator<Item = B::Move>;

    /// All theoretically possible moves, for any possible board.
    /// Moves returned by `available_moves` will always be a subset of these moves.
    fn all_possible_moves() -> Self::AllMovesIterator;

    /// Return an iterator over available moves, is always nonempty. No guarantees are made about
    /// the ordering except that it stays consistent when the board is not modified.
    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone>;
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'b',
            Player::B => 'w',
        }
    }

    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

/// A convenient type to use for the iterator returned by [BoardMoves::all_possible_moves].
#[derive(Debug)]
pub struct AllMovesIterator<B: Board>(PhantomData<B>);

impl<B: Board> Default for AllMovesIterator<B> {
    fn default() -> Self {
        AllMovesIterator(PhantomData)
    }
}

/// A convenient type to use for the iterator returned by [BoardMoves::available_moves].
#[derive(Debug)]
pub struct AvailableMovesIterator<'a, B: Board> {
    board: &'a B,
}

impl<'a, B: Board> AvailableMovesIterator<'a, B> {
    pub fn new(board: &'a B) -> Result<Self, BoardDone> {
        board.check_done()?;
        Ok(AvailableMovesIterator { board })
    }

    pub fn board(&self) -> &'a B {
        self.board
    }
}
