#![allow(dead_code)]
//! Game session state machine
//!
//! Owns the secret, the in-progress guess, the scored history, and the
//! win/loss resolution. Presentation layers feed intents in
//! (select/undo/restart) and read state back out through snapshots and
//! drained events; no game logic lives outside this module and `game`.

use crate::game::{score_guess, SecretCode, CODE_LENGTH};
use rand::Rng;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting symbols for the current row
    Selecting,
    /// Terminal: the code was cracked
    Won,
    /// Terminal: all rows used up without cracking the code
    Lost,
}

/// One completed, scored guess row. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Vec<usize>,
    pub bulls: usize,
    pub cows: usize,
}

/// Result of attempting to select a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Symbol appended; the row still has open slots
    Placed { slot: usize },
    /// Symbol appended as the final slot and the row was scored
    Resolved { bulls: usize, cows: usize },
    /// Ignored: input is held while a reveal is in progress
    Busy,
    /// Ignored: the session has already ended
    Finished,
    /// Rejected: symbol outside the active alphabet
    OutOfRange { symbol: usize },
}

impl SelectOutcome {
    /// Whether the symbol actually entered the guess.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            SelectOutcome::Placed { .. } | SelectOutcome::Resolved { .. }
        )
    }
}

/// State-change notifications for animated/staggered presentation.
///
/// The engine only records these; whether and how they are rendered is
/// up to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SymbolAppended { slot: usize, symbol: usize },
    TurnResolved { row: usize, bulls: usize, cows: usize },
    SessionEnded { won: bool },
}

/// Configuration error: the session cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Active alphabet too small to generate a valid code
    AlphabetTooSmall { size: usize },
    /// A session with zero rows could never be played
    NoRows,
}

impl SessionError {
    /// Returns a user-friendly error message
    pub fn message(&self) -> String {
        match self {
            SessionError::AlphabetTooSmall { size } => {
                format!("Alphabet of {} symbols can't fill a {}-slot code", size, CODE_LENGTH)
            }
            SessionError::NoRows => "At least one guess row is required".to_string(),
        }
    }
}

/// Read-only view of the session for rendering.
///
/// `revealed_secret` is populated only once the session is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_guess: Vec<usize>,
    pub row_count: usize,
    pub history: Vec<TurnRecord>,
    pub status: SessionStatus,
    pub revealed_secret: Option<Vec<usize>>,
}

/// One secret-and-attempts lifecycle, from generation to win or loss.
pub struct GameSession {
    alphabet_size: usize,
    max_rows: usize,
    secret: SecretCode,
    current_guess: Vec<usize>,
    history: Vec<TurnRecord>,
    row_count: usize,
    /// Cooperative input lock: set during scoring and while the host
    /// holds the reveal; never queues work
    busy: bool,
    status: SessionStatus,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Start a new session with a freshly generated secret.
    pub fn new(alphabet_size: usize, max_rows: usize) -> Result<Self, SessionError> {
        Self::new_with_rng(alphabet_size, max_rows, &mut rand::rng())
    }

    /// Start a new session using a specific RNG (for testing/seeding).
    pub fn new_with_rng<R: Rng>(
        alphabet_size: usize,
        max_rows: usize,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if alphabet_size < CODE_LENGTH {
            return Err(SessionError::AlphabetTooSmall {
                size: alphabet_size,
            });
        }
        if max_rows == 0 {
            return Err(SessionError::NoRows);
        }

        Ok(Self {
            alphabet_size,
            max_rows,
            secret: SecretCode::generate_with_rng(rng, alphabet_size),
            current_guess: Vec::with_capacity(CODE_LENGTH),
            history: Vec::with_capacity(max_rows),
            row_count: 0,
            busy: false,
            status: SessionStatus::Selecting,
            events: Vec::new(),
        })
    }

    /// Append a symbol to the current guess.
    ///
    /// Filling the fourth slot scores the row synchronously: the record
    /// is appended to history, the guess cleared, and termination
    /// evaluated before this returns. Ignored while busy or after the
    /// session has ended; duplicates within a guess are allowed.
    pub fn select_symbol(&mut self, symbol: usize) -> SelectOutcome {
        if self.busy {
            return SelectOutcome::Busy;
        }
        if self.status != SessionStatus::Selecting {
            return SelectOutcome::Finished;
        }
        if symbol >= self.alphabet_size {
            return SelectOutcome::OutOfRange { symbol };
        }

        let slot = self.current_guess.len();
        self.current_guess.push(symbol);
        self.events.push(SessionEvent::SymbolAppended { slot, symbol });

        if self.current_guess.len() < CODE_LENGTH {
            return SelectOutcome::Placed { slot };
        }

        self.resolve_row()
    }

    /// Score the completed row and advance or terminate the session.
    fn resolve_row(&mut self) -> SelectOutcome {
        self.busy = true;

        let score = score_guess(&self.current_guess, self.secret.symbols());
        let row = self.row_count;
        self.history.push(TurnRecord {
            guess: std::mem::take(&mut self.current_guess),
            bulls: score.bulls,
            cows: score.cows,
        });
        self.row_count += 1;
        self.events.push(SessionEvent::TurnResolved {
            row,
            bulls: score.bulls,
            cows: score.cows,
        });

        if score.is_win() {
            self.status = SessionStatus::Won;
            self.events.push(SessionEvent::SessionEnded { won: true });
        } else if self.row_count >= self.max_rows {
            self.status = SessionStatus::Lost;
            self.events.push(SessionEvent::SessionEnded { won: false });
        }

        self.busy = false;
        SelectOutcome::Resolved {
            bulls: score.bulls,
            cows: score.cows,
        }
    }

    /// Remove the last symbol of the in-progress guess.
    ///
    /// Returns whether anything was removed. A no-op while busy, after
    /// the session has ended, or with an empty guess; a scored row can
    /// never be undone.
    pub fn undo(&mut self) -> bool {
        if self.busy || self.status != SessionStatus::Selecting {
            return false;
        }
        self.current_guess.pop().is_some()
    }

    /// Hold input while the host plays out its score reveal.
    ///
    /// Keeps the busy flag set between a resolved row and the next
    /// accepted input; pair with [`end_reveal`](Self::end_reveal).
    pub fn begin_reveal(&mut self) {
        self.busy = true;
    }

    /// Release the reveal hold and accept input again.
    pub fn end_reveal(&mut self) {
        self.busy = false;
    }

    /// Whether input is currently being refused.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Discard everything and start over with a fresh secret.
    ///
    /// Accepted from any state, including mid-reveal: the hold is
    /// treated as interrupted, not queued behind.
    pub fn restart(&mut self) {
        self.restart_with_rng(&mut rand::rng());
    }

    /// Restart using a specific RNG (for testing/seeding).
    pub fn restart_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.secret = SecretCode::generate_with_rng(rng, self.alphabet_size);
        self.current_guess.clear();
        self.history.clear();
        self.row_count = 0;
        self.busy = false;
        self.status = SessionStatus::Selecting;
        self.events.clear();
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Rows scored so far.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Maximum rows before the session is lost.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Take all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view of the session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_guess: self.current_guess.clone(),
            row_count: self.row_count,
            history: self.history.clone(),
            status: self.status,
            revealed_secret: if self.status == SessionStatus::Lost {
                Some(self.secret.symbols().to_vec())
            } else {
                None
            },
        }
    }
}
