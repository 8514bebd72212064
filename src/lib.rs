#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! The board game cores of a children's study planner.
//!
//! The planner ships a handful of mini-games; the two that need real rules are the
//! [Go/Baduk](https://en.wikipedia.org/wiki/Go_(game)) and
//! [Omok/Gomoku](https://en.wikipedia.org/wiki/Gomoku) boards. This crate implements them behind a
//! shared [Board](crate::board::Board) abstraction so session handling, bots and tests only need to
//! be written once.
//!
//! # Features
//!
//! The implemented games, each behind its own cargo feature:
//! * Go as [GoBoard](crate::games::go::GoBoard) (`game_go`):
//!     flood-fill group analysis, capture resolution, suicide rejection, scoring by capture count.
//! * Omok as [OmokBoard](crate::games::omok::OmokBoard) (`game_omok`):
//!     five-in-a-row win detection by whole-board scan.
//!
//! Utilities that work for any [Board](crate::board::Board):
//! * Game-playing bots, specifically:
//!     * [RandomBot](crate::ai::simple::RandomBot), which simply picks a random move.
//!     * [GoBot](crate::ai::go::GoBot) and [OmokBot](crate::ai::omok::OmokBot),
//!         the difficulty-tiered house opponents the planner puts in front of children.
//! * [Session](crate::session::Session), the strictly alternating human-vs-bot state machine,
//!     including the cancellable deferred bot move.
//! * The best-score bridge in [score](crate::score) and the external collaborator contracts
//!     in [external](crate::external).
//! * Scripted and random board generation, see [board_gen](crate::util::board_gen).
//! * A bot vs bot game runner, see [bot_game](crate::util::bot_game).
//!
//! # Examples
//!
//! ## List the available moves on a board and play a random one.
//!
//! ```
//! # #[cfg(feature = "game_omok")]
//! # use planner_games::games::omok::OmokBoard;
//! # use planner_games::board::{BoardMoves, Board};
//! # use internal_iterator::InternalIterator;
//! # let mut rng = rand::thread_rng();
//! # #[cfg(feature = "game_omok")]
//! # {
//! let mut board = OmokBoard::new(11);
//! board.available_moves().unwrap().for_each(|mv| {
//!     println!("{}", mv)
//! });
//!
//! let mv = board.random_available_move(&mut rng).unwrap();
//! board.play(mv).unwrap();
//! println!("{}", board);
//! # }
//! ```
//!
//! ## Run a full game against the house bot
//!
//! ```
//! # #[cfg(feature = "game_go")]
//! # {
//! # use planner_games::ai::Difficulty;
//! # use planner_games::ai::go::GoBot;
//! # use planner_games::board::Player;
//! # use planner_games::games::go::GoBoard;
//! # use planner_games::session::Session;
//! let bot = GoBot::new(Difficulty::Easy, rand::thread_rng());
//! let mut session = Session::new(GoBoard::new(9), Player::A, bot);
//! assert!(session.outcome().is_none());
//! # let _ = &mut session;
//! # }
//! ```

pub mod board;

pub mod wdl;

pub mod ai;

pub mod games;

pub mod session;

pub mod external;
pub mod score;

pub mod progress;

pub mod util;
