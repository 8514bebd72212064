//! The human-vs-bot game session.
//!
//! All game logic runs synchronously inside UI event handlers, so the session is a plain
//! state machine: moves are strictly alternating, a human move is only accepted while it
//! is the human's turn, and the bot reply is applied through a ticket so that a reply
//! timer firing after a reset can be told apart from a live one.

use thiserror::Error;
use tracing::debug;

use crate::ai::Bot;
use crate::board::{Board, Outcome, PlayError, Player};

/// Whose input the session is waiting for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    AwaitingHuman,
    AwaitingAi,
    Finished(SessionOutcome),
}

/// The terminal result from the human player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SessionOutcome {
    HumanWin,
    AiWin,
    Draw,
}

/// Proof that a deferred bot reply was scheduled against the current game.
///
/// The host schedules a timer after every accepted human move (the "thinking delay") and
/// hands the ticket back in [Session::play_ai]. Each ticket is unique, so a timer that
/// already fired cannot fire a second time, and a reset invalidates all outstanding
/// tickets so a stale timer cannot drop a move onto a fresh board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AiTicket {
    generation: u64,
    seq: u64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum SessionError {
    #[error("not the human player's turn")]
    NotHumanTurn,
    #[error("no bot reply is pending")]
    NoPendingAi,
    #[error("ticket is from before a reset and no longer applies")]
    StaleTicket,
    #[error("the game is already finished")]
    Finished,
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// One active game of `B` between the local human and a bot, owned by the hosting view
/// and dropped when the view goes away.
#[derive(Debug)]
pub struct Session<B: Board, T: Bot<B>> {
    start: B,
    board: B,
    human: Player,
    bot: T,
    phase: Phase,
    generation: u64,
    seq: u64,
    pending: Option<AiTicket>,
}

impl<B: Board, T: Bot<B>> Session<B, T> {
    /// Start a session on `start`, with the human playing `human`.
    pub fn new(start: B, human: Player, bot: T) -> Self {
        let phase = phase_for(&start, human);
        Session {
            board: start.clone(),
            start,
            human,
            bot,
            phase,
            generation: 0,
            seq: 0,
            pending: None,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn human_player(&self) -> Player {
        self.human
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Apply a human move. Only accepted in [Phase::AwaitingHuman]; a rejected move leaves
    /// the board and the phase exactly as they were.
    pub fn play_human(&mut self, mv: B::Move) -> Result<(), SessionError> {
        match self.phase {
            Phase::AwaitingHuman => {}
            Phase::AwaitingAi => return Err(SessionError::NotHumanTurn),
            Phase::Finished(_) => return Err(SessionError::Finished),
        }

        self.board.play(mv)?;
        debug!(mv = %mv, "human move accepted");

        self.advance_phase();
        Ok(())
    }

    /// Hand out the ticket for the pending bot reply, scheduling it if necessary.
    ///
    /// At most one reply is scheduled per human move: calling this twice without an
    /// intervening [Session::play_ai] returns the same ticket. Returns `None` when no bot
    /// reply is due.
    pub fn schedule_ai(&mut self) -> Option<AiTicket> {
        if self.phase != Phase::AwaitingAi {
            return None;
        }

        let ticket = match self.pending {
            Some(ticket) => ticket,
            None => {
                self.seq += 1;
                let ticket = AiTicket {
                    generation: self.generation,
                    seq: self.seq,
                };
                self.pending = Some(ticket);
                ticket
            }
        };
        debug!(generation = ticket.generation, seq = ticket.seq, "bot reply scheduled");
        Some(ticket)
    }

    /// Apply the deferred bot reply for `ticket`. Called by the host when the thinking
    /// delay elapses. Stale tickets (from before a reset) are rejected without touching
    /// the board.
    pub fn play_ai(&mut self, ticket: AiTicket) -> Result<B::Move, SessionError> {
        if ticket.generation != self.generation {
            debug!(generation = ticket.generation, "stale bot reply ignored");
            return Err(SessionError::StaleTicket);
        }
        if self.pending != Some(ticket) {
            return Err(SessionError::NoPendingAi);
        }
        debug_assert_eq!(self.phase, Phase::AwaitingAi);

        self.pending = None;

        let mv = self.bot.select_move(&self.board).map_err(PlayError::from)?;
        self.board.play(mv)?;
        debug!(mv = %mv, "bot move applied");

        self.advance_phase();
        Ok(mv)
    }

    /// Abandon the current game and start over from the initial position.
    ///
    /// Bumps the generation, which cancels every outstanding [AiTicket]: a timer that
    /// fires afterwards gets [SessionError::StaleTicket] instead of moving on the new
    /// board.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.board = self.start.clone();
        self.phase = phase_for(&self.board, self.human);
        debug!(generation = self.generation, "session reset");
    }

    fn advance_phase(&mut self) {
        self.phase = match self.board.outcome() {
            Some(outcome) => {
                let result = session_outcome(outcome, self.human);
                debug!(?result, "session finished");
                self.pending = None;
                Phase::Finished(result)
            }
            None => phase_for(&self.board, self.human),
        };
    }
}

fn phase_for<B: Board>(board: &B, human: Player) -> Phase {
    match board.outcome() {
        Some(outcome) => Phase::Finished(session_outcome(outcome, human)),
        None if board.next_player() == human => Phase::AwaitingHuman,
        None => Phase::AwaitingAi,
    }
}

fn session_outcome(outcome: Outcome, human: Player) -> SessionOutcome {
    match outcome {
        Outcome::WonBy(player) if player == human => SessionOutcome::HumanWin,
        Outcome::WonBy(_) => SessionOutcome::AiWin,
        Outcome::Draw => SessionOutcome::Draw,
    }
}
