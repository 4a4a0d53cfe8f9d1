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

use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;
use super::{color::*, guess::*, prelude::*, word::*};

///
/// An immutable, ordered list of words which is cheap to clone.
///
/// Every list carries a fingerprint of its contents, computed once when the list is built. Scoring
/// functions are often called repeatedly with the same possible answers, and the fingerprint
/// lets them recognise that without comparing the words one by one (see ScoringCache).
///
#[derive(Clone, Debug)]
pub struct WordList {
    words: Arc<[Word]>,
    fingerprint: u64,
}

impl WordList {
    pub fn new(words: Vec<Word>) -> Self {
        let mut hasher = DefaultHasher::new();
        words.hash(&mut hasher);
        Self {
            fingerprint: hasher.finish(),
            words: words.into(),
        }
    }

    /// A value which is equal for two lists holding the same words in the same order
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn same_words(&self, other: &WordList) -> bool {
        self.fingerprint == other.fingerprint && self.words.len() == other.words.len()
    }
}

impl Deref for WordList {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl From<Vec<Word>> for WordList {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<T: IntoIterator<Item=Word>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PartialEq for WordList {
    fn eq(&self, other: &Self) -> bool {
        self.same_words(other) && self.words == other.words
    }
}

impl Eq for WordList {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameErr {
    #[error("the game is already over")]
    AlreadyOver,
    #[error("inconsistent feedback: {0}")]
    Contradiction(#[from] Contradiction),
}

///
/// The state of one game of wordle.
///
/// A Game starts with the full list of accepted words as its possible answers. Each guess (and the
/// Match shown for it) narrows the possible answers down to the words which are consistent with
/// every guess made so far.
///
/// Games are cheap to clone: the word lists are shared, and the only owned data is the (short)
/// history of guesses. `guess` returns the next state and leaves self untouched, `add_guess` is
/// the in-place version.
///
#[derive(Clone, Debug)]
pub struct Game {
    /// an unchanging list of all words which you're allowed to guess
    words: WordList,

    /// the guesses that have been made, in order (never more than NUM_TURNS)
    guesses: Vec<Guess>,

    /// words the caller asked us to stop considering (see remove_word)
    removed: Vec<Word>,

    /// every position which some guess colored Correct
    known: MustBe,

    /// the subset of words which remain possible given the guesses
    possible: WordList,
}

impl Game {
    pub fn new(words: impl Into<WordList>) -> Self {
        let words = words.into();
        Self {
            possible: words.clone(),
            words,
            guesses: Vec::with_capacity(NUM_TURNS),
            removed: Vec::new(),
            known: MustBe::default(),
        }
    }

    /// Returns the next state of the game after making a guess, leaving this one unchanged
    pub fn guess(&self, word: Word, matched: Match) -> Result<Game, GameErr> {
        let mut next = self.clone();
        next.add_guess(word, matched)?;
        Ok(next)
    }

    ///
    /// Records a guess and narrows the possible answers.
    ///
    /// The possible answers already agree with every earlier guess, so only the constraints of the
    /// new guess need to be tested (one pass over the remaining words).
    ///
    pub fn add_guess(&mut self, word: Word, matched: Match) -> Result<(), GameErr> {
        if self.over() {
            return Err(GameErr::AlreadyOver);
        }

        let guess = Guess::new(word, matched);
        self.known = self.known.merge(guess.must_be())?;

        let before = self.possible.len();
        self.possible = guess.filter_possible(&self.possible).into();
        self.guesses.push(guess);
        log::trace!(
            "guess {} {} left {} of {} possible answers",
            word,
            matched,
            self.possible.len(),
            before,
        );

        Ok(())
    }

    ///
    /// Stops considering `word` as a possible answer, without counting it as a guess. Useful when
    /// the official game refuses to accept a word that a strategy chose.
    ///
    pub fn remove_word(&mut self, word: Word) {
        self.removed.push(word);
        if self.possible.contains(&word) {
            self.possible = self.possible.iter().copied().filter(|w| *w != word).collect();
        }
    }

    /// The words which are consistent with all guesses so far
    pub fn possible_answers(&self) -> &WordList {
        &self.possible
    }

    /// All words which can be played (not only the possible answers)
    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn removed(&self) -> &[Word] {
        &self.removed
    }

    /// The letters known at each position, merged over all guesses
    pub fn known(&self) -> MustBe {
        self.known
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Indicates whether or not the puzzle is solved (the last guess is all green)
    pub fn won(&self) -> bool {
        self.guesses.last().map(|g| g.is_correct()).unwrap_or(false)
    }

    /// The game is over once it is won or all turns have been used
    pub fn over(&self) -> bool {
        self.guess_count() >= NUM_TURNS || self.won()
    }

    ///
    /// True when no possible answers remain. This happens when the answer isn't in the word list
    /// or the feedback given was inconsistent; strategies cannot produce a guess in this state.
    ///
    pub fn is_exhausted(&self) -> bool {
        self.possible.is_empty()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, g) in self.guesses.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {} {}", idx + 1, g.word, g.matched)?;
        }
        Ok(())
    }
}
