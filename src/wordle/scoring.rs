/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::collections::HashMap;
use super::{game::*, letters::*, prelude::*, word::*};

///
/// Assigns a score, or "weight", to each word in a list. Higher weights are preferred.
///
/// The output has exactly one non-negative weight per input word, in the same order. There is no
/// promise about the scale of the weights (consumers normalize them), and a weight may depend on
/// the other words in the list (for example: how common a word's letters are among them).
///
pub trait Scoring {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat>;
}

impl<S: Scoring + ?Sized> Scoring for Box<S> {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
        (**self).weights(words)
    }
}

impl<S: Scoring + ?Sized> Scoring for &S {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
        (**self).weights(words)
    }
}

///
/// Prefers words made of common letters: a word scores, for each of its distinct letters, the
/// number of words in the list which contain that letter.
///
/// The idea is to turn as many squares yellow as possible. In practice this plays poorly on its
/// own, but it is a useful secondary score.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct LetterFrequency;

impl Scoring for LetterFrequency {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
        let mut used = [0usize; ALPHABET_SIZE];
        for word in words.iter() {
            for letter in word.letters().iter() {
                used[letter_idx(letter)] += 1;
            }
        }

        words
            .iter()
            .map(|word| {
                word.letters()
                    .iter()
                    .map(|letter| used[letter_idx(letter)])
                    .sum::<usize>() as WordleFloat
            })
            .collect()
    }
}

///
/// Like LetterFrequency, but counts letters per position: a word scores, for each position, the
/// number of words in the list with the same letter in that position. Rewards words likely to turn
/// squares green.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalFrequency;

impl Scoring for PositionalFrequency {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
        let mut found = [[0usize; ALPHABET_SIZE]; WORD_SIZE];
        for word in words.iter() {
            for (idx, letter) in word.iter().enumerate() {
                found[idx][letter_idx(letter)] += 1;
            }
        }

        words
            .iter()
            .map(|word| {
                word.iter()
                    .enumerate()
                    .map(|(idx, letter)| found[idx][letter_idx(letter)])
                    .sum::<usize>() as WordleFloat
            })
            .collect()
    }
}

/// Scores a word by its number of distinct letters, which favours guesses that test more letters.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueLetters;

impl Scoring for UniqueLetters {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
        words.iter().map(|w| w.letters().len() as WordleFloat).collect()
    }
}

///
/// Scores words by how common they are in real-world usage, independently of the other words in
/// the list. Words missing from the table get `default_weight`.
///
#[derive(Clone, Debug, Default)]
pub struct WordFrequency {
    weights: HashMap<Word, WordleFloat>,
    default_weight: WordleFloat,
}

impl WordFrequency {
    pub fn new(weights: HashMap<Word, WordleFloat>, default_weight: WordleFloat) -> Self {
        Self { weights, default_weight }
    }

    pub fn weight(&self, word: &Word) -> WordleFloat {
        self.weights.get(word).copied().unwrap_or(self.default_weight)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Scoring for WordFrequency {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
        words.iter().map(|w| self.weight(w)).collect()
    }
}

///
/// Remembers the weights of exactly one word list.
///
/// The weights for `words` are computed when the cache is built. Later calls with a list holding
/// the same words (same fingerprint) return those weights; any other list is handed to the inner
/// scoring and the result is not stored. This pays off when a strategy is asked about the same
/// possible answers over and over, which is what happens at the start of every game.
///
#[derive(Clone, Debug)]
pub struct ScoringCache<S> {
    inner: S,
    words: WordList,
    weights: Vec<WordleFloat>,
}

impl<S: Scoring> ScoringCache<S> {
    pub fn new(inner: S, words: &WordList) -> Self {
        let weights = inner.weights(words);
        Self {
            inner,
            words: words.clone(),
            weights,
        }
    }
}

impl<S: Scoring> Scoring for ScoringCache<S> {
    fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
        if self.words.same_words(words) {
            log::trace!("scoring cache hit for {} words", words.len());
            return self.weights.clone();
        }
        self.inner.weights(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn mkl(words: &[&str]) -> WordList {
        words.iter().map(|w| mkw(w)).collect()
    }

    #[test]
    fn test_letter_frequency() {
        let words = mkl(&["abcde", "aaaaa", "fghij"]);
        // a is in 2 words, b-e in 1, f-j in 1
        assert_eq!(LetterFrequency.weights(&words), vec![6.0, 2.0, 5.0]);
    }

    #[test]
    fn test_letter_frequency_counts_unique_letters_once() {
        let words = mkl(&["geese", "eagle"]);
        // e: 2, g: 2, s: 1, a: 1, l: 1
        assert_eq!(LetterFrequency.weights(&words), vec![5.0, 6.0]);
    }

    #[test]
    fn test_positional_frequency() {
        let words = mkl(&["cigar", "cider", "sugar"]);
        // cigar: c2 i2 g2 a2 r3, cider: c2 i2 d1 e1 r3, sugar: s1 u1 g2 a2 r3
        assert_eq!(PositionalFrequency.weights(&words), vec![11.0, 9.0, 9.0]);
    }

    #[test]
    fn test_unique_letters() {
        let words = mkl(&["cigar", "geese", "aaaaa"]);
        assert_eq!(UniqueLetters.weights(&words), vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_word_frequency() {
        let mut table = HashMap::new();
        table.insert(mkw("cigar"), 3.5);
        let scoring = WordFrequency::new(table, 0.25);
        let words = mkl(&["cigar", "rebut"]);
        assert_eq!(scoring.weights(&words), vec![3.5, 0.25]);
        assert_eq!(scoring.weights(&mkl(&["rebut", "cigar"])), vec![0.25, 3.5]);
    }

    #[test]
    fn test_empty_list() {
        let empty = WordList::new(Vec::new());
        assert!(LetterFrequency.weights(&empty).is_empty());
        assert!(PositionalFrequency.weights(&empty).is_empty());
        assert!(UniqueLetters.weights(&empty).is_empty());
    }

    struct Counting<'a>(&'a Cell<usize>);

    impl Scoring for Counting<'_> {
        fn weights(&self, words: &WordList) -> Vec<WordleFloat> {
            self.0.set(self.0.get() + 1);
            UniqueLetters.weights(words)
        }
    }

    #[test]
    fn test_cache() {
        let calls = Cell::new(0);
        let words = mkl(&["cigar", "geese"]);
        let cache = ScoringCache::new(Counting(&calls), &words);
        assert_eq!(calls.get(), 1);

        // same list, or an identical copy of it, is served from the cache
        assert_eq!(cache.weights(&words), vec![5.0, 3.0]);
        assert_eq!(cache.weights(&mkl(&["cigar", "geese"])), vec![5.0, 3.0]);
        assert_eq!(calls.get(), 1);

        // anything else goes to the inner scoring, and isn't remembered
        let other = mkl(&["geese"]);
        assert_eq!(cache.weights(&other), vec![3.0]);
        assert_eq!(cache.weights(&other), vec![3.0]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_boxed_scoring() {
        let boxed: Box<dyn Scoring> = Box::new(UniqueLetters);
        assert_eq!(boxed.weights(&mkl(&["geese"])), vec![3.0]);
    }
}
