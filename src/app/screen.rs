//! Application screen state management
//!
//! Sits between the key/tick loop and the game session:
//! - picks which icons from the pool are active this session
//! - paces the staggered score reveal off the tick timer
//! - switches to the results screen once the final reveal is done

use crate::app::session::{GameSession, SessionEvent, SessionSnapshot};
use crate::game::{ACTIVE_SYMBOLS, CODE_LENGTH, MAX_ROWS, SYMBOL_POOL_SIZE};
use rand::prelude::*;

/// The current application screen
pub enum Screen {
    /// Playing out the rows of a session
    Playing,
    /// Session over; `secret` is present only on a loss
    Results {
        won: bool,
        secret: Option<Vec<usize>>,
    },
}

/// Score pips being revealed one tick at a time for a resolved row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    /// Row index being revealed
    pub row: usize,
    pub bulls: usize,
    pub cows: usize,
    /// Pip positions revealed so far (0..=CODE_LENGTH)
    pub shown: usize,
}

/// Main application coordinator
pub struct AppCoordinator {
    /// The live game session
    pub session: GameSession,
    /// Indices into the icon pool for symbols 0..ACTIVE_SYMBOLS
    pub active_icons: Vec<usize>,
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    reveal: Option<RevealState>,
    /// Win/loss carried until the reveal finishes
    pending_end: Option<bool>,
}

impl Default for AppCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl AppCoordinator {
    /// Create a coordinator with a fresh session and icon set.
    pub fn new() -> Self {
        Self::new_with_rng(&mut rand::rng())
    }

    /// Create a coordinator using a specific RNG (for testing/seeding).
    pub fn new_with_rng<R: Rng>(rng: &mut R) -> Self {
        let session = GameSession::new_with_rng(ACTIVE_SYMBOLS, MAX_ROWS, rng)
            .expect("active alphabet covers the code length");

        Self {
            session,
            active_icons: pick_active_icons(rng),
            screen: Screen::Playing,
            should_quit: false,
            reveal: None,
            pending_end: None,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a symbol key (1-4). On the results screen any symbol key
    /// starts the next session instead.
    pub fn on_symbol(&mut self, symbol: usize) {
        match self.screen {
            Screen::Playing => {
                self.session.select_symbol(symbol);
                self.process_events();
            }
            Screen::Results { .. } => self.restart(),
        }
    }

    /// Handle Backspace
    pub fn on_undo(&mut self) {
        match self.screen {
            Screen::Playing => {
                self.session.undo();
            }
            Screen::Results { .. } => self.restart(),
        }
    }

    /// Handle any other (non-quit) key: only meaningful on the results
    /// screen, where it starts the next session.
    pub fn on_other_key(&mut self) {
        if let Screen::Results { .. } = self.screen {
            self.restart();
        }
    }

    /// Start a new session: fresh secret, fresh icon set.
    pub fn restart(&mut self) {
        self.restart_with_rng(&mut rand::rng());
    }

    /// Restart using a specific RNG (for testing/seeding).
    pub fn restart_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.session.restart_with_rng(rng);
        self.active_icons = pick_active_icons(rng);
        self.screen = Screen::Playing;
        self.reveal = None;
        self.pending_end = None;
    }

    /// Advance the reveal animation by one tick.
    pub fn tick(&mut self) {
        let Some(reveal) = &mut self.reveal else {
            return;
        };

        reveal.shown += 1;
        if reveal.shown < CODE_LENGTH {
            return;
        }

        // Reveal finished: re-enable input, or land on the results
        // screen if this was the final row
        self.reveal = None;
        self.session.end_reveal();
        if let Some(won) = self.pending_end.take() {
            let secret = self.session.snapshot().revealed_secret;
            self.screen = Screen::Results { won, secret };
        }
    }

    /// The reveal in progress, if any.
    pub fn reveal(&self) -> Option<&RevealState> {
        self.reveal.as_ref()
    }

    /// Read-only session view for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// React to engine events: a resolved row kicks off the staggered
    /// pip reveal and holds input until it completes.
    fn process_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::TurnResolved { row, bulls, cows } => {
                    self.session.begin_reveal();
                    self.reveal = Some(RevealState {
                        row,
                        bulls,
                        cows,
                        shown: 0,
                    });
                }
                SessionEvent::SessionEnded { won } => {
                    self.pending_end = Some(won);
                }
                SessionEvent::SymbolAppended { .. } => {}
            }
        }
    }
}

/// Shuffle the icon pool and keep the first ACTIVE_SYMBOLS entries.
fn pick_active_icons<R: Rng>(rng: &mut R) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..SYMBOL_POOL_SIZE).collect();
    pool.shuffle(rng);
    pool.truncate(ACTIVE_SYMBOLS);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::SessionStatus;
    use crate::game::SecretCode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Coordinator plus the secret its session was born with.
    fn seeded_coordinator(seed: u64) -> (AppCoordinator, Vec<usize>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let secret = SecretCode::generate_with_rng(&mut rng.clone(), ACTIVE_SYMBOLS);
        let coordinator = AppCoordinator::new_with_rng(&mut rng);
        (coordinator, secret.symbols().to_vec())
    }

    fn finish_reveal(coordinator: &mut AppCoordinator) {
        for _ in 0..CODE_LENGTH {
            coordinator.tick();
        }
    }

    #[test]
    fn test_active_icons_are_distinct_pool_entries() {
        let (coordinator, _) = seeded_coordinator(1);
        assert_eq!(coordinator.active_icons.len(), ACTIVE_SYMBOLS);
        for (i, &icon) in coordinator.active_icons.iter().enumerate() {
            assert!(icon < SYMBOL_POOL_SIZE);
            assert!(!coordinator.active_icons[..i].contains(&icon));
        }
    }

    #[test]
    fn test_resolved_row_starts_reveal_and_holds_input() {
        let (mut coordinator, _) = seeded_coordinator(2);

        for _ in 0..CODE_LENGTH {
            coordinator.on_symbol(0);
        }
        assert!(coordinator.reveal().is_some());
        assert!(coordinator.session.is_busy());

        // Input during the reveal is refused
        coordinator.on_symbol(1);
        assert!(coordinator.snapshot().current_guess.is_empty());

        finish_reveal(&mut coordinator);
        assert!(coordinator.reveal().is_none());
        assert!(!coordinator.session.is_busy());

        coordinator.on_symbol(1);
        assert_eq!(coordinator.snapshot().current_guess, vec![1]);
    }

    #[test]
    fn test_reveal_progresses_one_pip_per_tick() {
        let (mut coordinator, _) = seeded_coordinator(3);
        for _ in 0..CODE_LENGTH {
            coordinator.on_symbol(0);
        }

        assert_eq!(coordinator.reveal().unwrap().shown, 0);
        coordinator.tick();
        assert_eq!(coordinator.reveal().unwrap().shown, 1);
        coordinator.tick();
        assert_eq!(coordinator.reveal().unwrap().shown, 2);
    }

    #[test]
    fn test_tick_without_reveal_is_noop() {
        let (mut coordinator, _) = seeded_coordinator(4);
        coordinator.tick();
        assert!(matches!(coordinator.screen, Screen::Playing));
        assert!(!coordinator.session.is_busy());
    }

    #[test]
    fn test_win_lands_on_results_after_reveal() {
        let (mut coordinator, secret) = seeded_coordinator(5);

        for &s in &secret {
            coordinator.on_symbol(s);
        }
        // Still revealing, not yet on results
        assert!(matches!(coordinator.screen, Screen::Playing));

        finish_reveal(&mut coordinator);
        match &coordinator.screen {
            Screen::Results { won, secret } => {
                assert!(*won);
                assert!(secret.is_none());
            }
            _ => panic!("expected results screen"),
        }
    }

    #[test]
    fn test_loss_shows_secret_on_results() {
        let (mut coordinator, secret) = seeded_coordinator(6);

        for _ in 0..MAX_ROWS {
            for _ in 0..CODE_LENGTH {
                coordinator.on_symbol(0);
            }
            finish_reveal(&mut coordinator);
        }

        match &coordinator.screen {
            Screen::Results { won, secret: shown } => {
                assert!(!*won);
                assert_eq!(shown.as_deref(), Some(secret.as_slice()));
            }
            _ => panic!("expected results screen"),
        }
    }

    #[test]
    fn test_any_key_on_results_starts_next_session() {
        let (mut coordinator, secret) = seeded_coordinator(7);
        for &s in &secret {
            coordinator.on_symbol(s);
        }
        finish_reveal(&mut coordinator);
        assert!(matches!(coordinator.screen, Screen::Results { .. }));

        coordinator.on_other_key();
        assert!(matches!(coordinator.screen, Screen::Playing));
        assert_eq!(coordinator.session.status(), SessionStatus::Selecting);
        assert_eq!(coordinator.snapshot().row_count, 0);
    }

    #[test]
    fn test_restart_mid_reveal_clears_hold() {
        let (mut coordinator, _) = seeded_coordinator(8);
        for _ in 0..CODE_LENGTH {
            coordinator.on_symbol(0);
        }
        assert!(coordinator.session.is_busy());

        let mut rng = StdRng::seed_from_u64(99);
        coordinator.restart_with_rng(&mut rng);
        assert!(coordinator.reveal().is_none());
        assert!(!coordinator.session.is_busy());
        coordinator.on_symbol(2);
        assert_eq!(coordinator.snapshot().current_guess, vec![2]);
    }

    #[test]
    fn test_undo_routed_to_session() {
        let (mut coordinator, _) = seeded_coordinator(9);
        coordinator.on_symbol(1);
        coordinator.on_undo();
        assert!(coordinator.snapshot().current_guess.is_empty());
    }
}
