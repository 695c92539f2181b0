//! Game logic: secret code generation and bulls/cows scoring

pub mod code;
pub mod score;

pub use code::SecretCode;
pub use score::{score_guess, Score};

/// Length of the secret code (and of every completed guess)
pub const CODE_LENGTH: usize = 4;

/// Maximum number of guess rows before the session is lost
pub const MAX_ROWS: usize = 5;

/// Size of the active alphabet the secret is drawn from
pub const ACTIVE_SYMBOLS: usize = 4;

/// Total number of icon styles the presentation picks the active set from
pub const SYMBOL_POOL_SIZE: usize = 10;
