// This file allows you to configure some of the constants that define the game of wordle.
//
// The WORD_SIZE is fixed at 5: Word, Match and the bitset types all store exactly one entry per
// position and the word list loaders reject anything else.


// how many characters are in a wordle answer?
pub const WORD_SIZE: usize = 5;
// how many turns are you allowed to play?
pub const NUM_TURNS: usize = 6;
// how many letters are in the english alphabet? (don't change this lol)
pub const ALPHABET_SIZE: usize = (('z' as usize) - ('a' as usize)) + 1;
// above this many possible answers the filtering strategy hands off to its fallback. Larger values
// play better but the lookahead is quadratic in the number of possible answers.
pub const DEFAULT_FILTER_THRESHOLD: usize = 60;

// This type allows you to switch between using f64 for all calculations and f32 if you so desire.
pub type WordleFloat = f64;

/// Returns the index of the given letter within the alphabet (like 'a' = 0, 'b' = 1, etc...)
#[inline]
pub fn letter_idx(letter: u8) -> usize {
    debug_assert!(is_normal_wordle_char(&letter));
    (letter - b'a') as usize
}

/// Given some input &str, try to clean it up such that it might be a wordle word.
///
/// This function does not trim the length of a word or remove non alpha characters. It simply
/// cleans up words that are already valid wordle words by removing any spacing and converting
/// to all lowercase.
pub fn normalize_wordle_word(str: &str) -> String {
    str.trim().to_lowercase()
}

/// Verifies that a byte represents a lowercase alphabetic character (a valid wordle char)
#[inline]
pub fn is_normal_wordle_char(v: &u8) -> bool {
    v.is_ascii_lowercase()
}
