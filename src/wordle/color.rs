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

use std::fmt::{Display, Formatter, Write};
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use self::Square::*;
use super::{prelude::*, word::*};

///
/// The three different colors that a wordle square can be...
///   * Absent = the letter is not in the answer (also indicates no further instances of a letter
///              when another square with the same letter is colored present/correct)
///   * Present = the letter is in the answer, but not in this position
///   * Correct = the letter is in the answer at this position
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Square {
    /// All three squares
    pub const ALL: [Square; 3] = [Absent, Present, Correct];

    /// The character used for this square in the text encoding of a Match
    pub fn symbol(&self) -> char {
        match self {
            Absent => '.',
            Present => 'y',
            Correct => 'G',
        }
    }

    /// Reads one character of the text encoding (case-insensitive)
    pub fn from_symbol(c: char) -> Option<Self> {
        Some(match c.to_ascii_lowercase() {
            '.' => Absent,
            'y' => Present,
            'g' => Correct,
            _ => return None,
        })
    }

    /// Gives the best emoji to represent the square (used for printing finished games)
    pub fn emoji(&self) -> &'static str {
        match self {
            Absent => "⬛",
            Present => "🟨",
            Correct => "🟩",
        }
    }
}

/// An array of Squares, one for each position in the puzzle.
pub type SquaresArray = [Square; WORD_SIZE];

/// The feedback for a guess: one Square per letter of the guess.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Match(pub SquaresArray);

/// Automatic conversion of [Square; WORD_SIZE] -> Match
impl From<SquaresArray> for Match {
    fn from(arr: SquaresArray) -> Self {
        Self(arr)
    }
}

/// Delegate indexing of the struct to it's inner value
impl Index<usize> for Match {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Delegate mutable indexing of the struct to it's inner value
impl IndexMut<usize> for Match {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Match {
    /// The match of a winning guess
    pub const WON: Match = Match([Correct; WORD_SIZE]);

    ///
    /// Compute what colors would be shown given some guess & answer. For example if the guess was
    /// "tares" and the answer was "scare" we should compute [Absent, Present, Present, Present, Present]
    ///
    /// This is implemented by:
    /// * computing a "budget" for each letter in the alphabet (based on their frequency in the answer)
    /// * performing a "GREEN pass" which marks all correctly positioned letters (and updates the budget)
    /// * performing a "YELLOW pass" to mark all present letters (based on the remaining budget for each letter)
    ///
    /// The order of the passes matters. A guess which repeats a letter more often than the answer
    /// contains it only gets as many colored squares as the answer has copies of that letter, and
    /// green squares are paid for first.
    ///
    pub fn with_guess_answer(guess: Word, answer: Word) -> Self {
        let mut out = Self::default();
        let mut budget = answer.letter_counts();
        let answer_bytes = answer.as_bytes();
        let guess_bytes = guess.as_bytes();

        // GREEN pass
        for i in 0..WORD_SIZE {
            if guess_bytes[i] == answer_bytes[i] {
                budget.remove(guess_bytes[i]);
                out[i] = Correct;
            }
        }

        // YELLOW pass
        for i in 0..WORD_SIZE {
            if out[i] != Correct && budget.remove(guess_bytes[i]) {
                out[i] = Present;
            }
        }

        out
    }

    /// Whether or not every square is Correct
    pub fn won(&self) -> bool {
        self.0.iter().all(|s| *s == Correct)
    }

    pub fn iter(&self) -> impl Iterator<Item=Square> + '_ {
        self.0.iter().copied()
    }

    /// Renders the match as a row of colored emoji
    pub fn emoji(&self) -> String {
        self.iter().map(|s| s.emoji()).collect()
    }
}

///
/// Parses the 5 character text encoding of a Match, where '.' = Absent, 'y' = Present and
/// 'g' = Correct. Case is ignored and surrounding whitespace is trimmed.
///
impl FromStr for Match {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bad = || ParseErr::BadMatch(s.to_string());
        if trimmed.chars().count() != WORD_SIZE {
            return Err(bad());
        }

        let mut out = Self::default();
        for (i, c) in trimmed.chars().enumerate() {
            out[i] = Square::from_symbol(c).ok_or_else(bad)?;
        }

        Ok(out)
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for square in self.iter() {
            f.write_char(square.symbol())?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn mkm(s: &str) -> Match {
    s.parse().expect("test match should parse")
}
