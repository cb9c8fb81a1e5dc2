use rand::Rng;
use std::ops::RangeInclusive;

// Character-set constants
pub const ALPHABET_SIZE: usize = 26;
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Marker used when rendering a cell that belongs to no word.
pub const BLACK_CELL: char = '#';

pub(crate) trait GridChar {
    /// True for the only characters a grid may hold: `A`-`Z`.
    fn is_grid_letter(&self) -> bool;
}

impl GridChar for char {
    fn is_grid_letter(&self) -> bool {
        self.is_ascii_uppercase()
    }
}

/// True if `word` is non-empty and consists only of `A`-`Z`.
pub(crate) fn is_grid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_grid_letter())
}

/// Draw a uniformly random uppercase letter.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.gen_range(UPPERCASE_ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_grid_letter() {
        assert!('A'.is_grid_letter());
        assert!('M'.is_grid_letter());
        assert!('Z'.is_grid_letter());
    }

    #[test]
    fn test_is_not_grid_letter() {
        assert!(!'a'.is_grid_letter()); // lowercase
        assert!(!'1'.is_grid_letter());
        assert!(!' '.is_grid_letter());
        assert!(!'-'.is_grid_letter());
        assert!(!'É'.is_grid_letter());
    }

    #[test]
    fn test_is_grid_word() {
        assert!(is_grid_word("CAT"));
        assert!(!is_grid_word(""));
        assert!(!is_grid_word("OK1"));
        assert!(!is_grid_word("ICE CREAM"));
        assert!(!is_grid_word("Cat"));
    }

    #[test]
    fn test_random_letter_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let c = random_letter(&mut rng);
            assert!(UPPERCASE_ALPHABET.contains(&c), "unexpected letter '{c}'");
        }
    }

    #[test]
    fn test_random_letter_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; ALPHABET_SIZE];
        for _ in 0..5_000 {
            let c = random_letter(&mut rng);
            seen[(c as u8 - b'A') as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "5000 draws should hit every letter");
    }

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(ALPHABET_SIZE, 26);
        assert_eq!(UPPERCASE_ALPHABET.count(), ALPHABET_SIZE);
        assert!(!BLACK_CELL.is_grid_letter());
    }
}
