//! Guess scoring: bulls (right symbol, right spot) and cows (right
//! symbol, wrong spot)
//!
//! Repeated symbols make a naive count wrong: each secret slot may pay
//! out at most once, so scoring consumes matched entries. Two passes
//! over private copies, bulls first, then cows from what remains.

/// Score for one completed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Exact-position matches
    pub bulls: usize,
    /// Right symbol, wrong position, at most once per secret occurrence
    pub cows: usize,
}

impl Score {
    /// Whether this score means the code was cracked.
    pub fn is_win(&self) -> bool {
        self.bulls == crate::game::CODE_LENGTH
    }
}

/// Score `guess` against `secret`. Pure; inputs are not mutated.
///
/// Pass 1 consumes exact matches as bulls (`None` marks a consumed
/// slot). Pass 2 matches each remaining guess symbol against at most
/// one remaining secret occurrence, counting cows. Which occurrence a
/// cow consumes is immaterial; the first remaining one is taken.
pub fn score_guess(guess: &[usize], secret: &[usize]) -> Score {
    debug_assert_eq!(guess.len(), secret.len());

    let mut guess_left: Vec<Option<usize>> = guess.iter().map(|&g| Some(g)).collect();
    let mut secret_left: Vec<Option<usize>> = secret.iter().map(|&s| Some(s)).collect();

    let mut bulls = 0;
    for i in 0..guess_left.len() {
        if guess_left[i] == secret_left[i] {
            bulls += 1;
            guess_left[i] = None;
            secret_left[i] = None;
        }
    }

    let mut cows = 0;
    for g in guess_left.into_iter().flatten() {
        if let Some(pos) = secret_left.iter().position(|&s| s == Some(g)) {
            cows += 1;
            secret_left[pos] = None;
        }
    }

    Score { bulls, cows }
}
