#![allow(dead_code)]
//! Secret code generation
//!
//! Codes come in two flavors, each with probability 0.5:
//! - duplicate-pair: one symbol appears twice, two others once
//! - unique: four distinct symbols

use super::CODE_LENGTH;
use rand::prelude::*;
use rand::seq::index;

/// The hidden code for one session.
///
/// Fixed once generated; only its scoring effects are observable until
/// the session is lost, at which point it may be revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode {
    symbols: Vec<usize>,
}

impl SecretCode {
    /// Generate a new secret from an alphabet of `alphabet_size` symbols.
    ///
    /// Caller must ensure `alphabet_size >= CODE_LENGTH`; the session
    /// constructor validates this before any secret is drawn.
    pub fn generate(alphabet_size: usize) -> Self {
        Self::generate_with_rng(&mut rand::rng(), alphabet_size)
    }

    /// Generate a secret using a specific RNG (for testing/seeding).
    pub fn generate_with_rng<R: Rng>(rng: &mut R, alphabet_size: usize) -> Self {
        debug_assert!(alphabet_size >= CODE_LENGTH);

        let symbols = if rng.random_bool(0.5) {
            // Duplicate-pair code: pick 3 distinct symbols, duplicate the
            // first, then shuffle so the pair isn't always up front.
            let picks = index::sample(rng, alphabet_size, CODE_LENGTH - 1).into_vec();
            let mut symbols = vec![picks[0], picks[0], picks[1], picks[2]];
            symbols.shuffle(rng);
            symbols
        } else {
            // Unique code: sampling without replacement already yields a
            // uniformly random order, no extra shuffle needed.
            index::sample(rng, alphabet_size, CODE_LENGTH).into_vec()
        };

        Self { symbols }
    }

    /// The code symbols, in order.
    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// Whether this code contains a repeated symbol.
    pub fn has_duplicate(&self) -> bool {
        self.symbols
            .iter()
            .enumerate()
            .any(|(i, s)| self.symbols[..i].contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_has_expected_length() {
        for _ in 0..100 {
            let code = SecretCode::generate(4);
            assert_eq!(code.symbols().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_symbols_within_alphabet() {
        for _ in 0..100 {
            let code = SecretCode::generate(6);
            for &s in code.symbols() {
                assert!(s < 6, "symbol {} outside alphabet", s);
            }
        }
    }

    #[test]
    fn test_multiplicity_is_pair_or_all_distinct() {
        for _ in 0..200 {
            let code = SecretCode::generate(4);
            let mut counts = [0usize; 4];
            for &s in code.symbols() {
                counts[s] += 1;
            }
            let pairs = counts.iter().filter(|&&c| c == 2).count();
            let singles = counts.iter().filter(|&&c| c == 1).count();
            if code.has_duplicate() {
                // Exactly one symbol twice, two symbols once
                assert_eq!(pairs, 1, "code {:?}", code.symbols());
                assert_eq!(singles, 2, "code {:?}", code.symbols());
            } else {
                assert_eq!(singles, 4, "code {:?}", code.symbols());
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut rng1 = rand::rngs::StdRng::seed_from_u64(42);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let code1 = SecretCode::generate_with_rng(&mut rng1, 4);
            let code2 = SecretCode::generate_with_rng(&mut rng2, 4);
            assert_eq!(code1, code2);
        }
    }

    #[test]
    fn test_duplicate_fraction_near_half() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let samples = 4000;
        let duplicates = (0..samples)
            .filter(|_| SecretCode::generate_with_rng(&mut rng, 4).has_duplicate())
            .count();

        let fraction = duplicates as f64 / samples as f64;
        assert!(
            (0.45..0.55).contains(&fraction),
            "duplicate fraction {} too far from 0.5",
            fraction
        );
    }

    #[test]
    fn test_minimum_alphabet_still_valid() {
        // alphabet_size == CODE_LENGTH is the tightest legal config
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let code = SecretCode::generate_with_rng(&mut rng, CODE_LENGTH);
            assert_eq!(code.symbols().len(), CODE_LENGTH);
            assert!(code.symbols().iter().all(|&s| s < CODE_LENGTH));
        }
    }
}
