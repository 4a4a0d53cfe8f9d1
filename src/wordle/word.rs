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

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use super::{letters::*, prelude::*};

///
/// A single wordle word: exactly WORD_SIZE lowercase ascii letters.
///
/// Words are small Copy values, so they are passed around by value everywhere. The only way to
/// build one from text is through FromStr, which enforces the letter/length invariant.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Word([u8; WORD_SIZE]);

/// Errors produced when parsing the text encoding of a Word or a Match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErr {
    #[error("words must be 5 letters, got '{0}'")]
    BadWordLength(String),
    #[error("letter '{letter}' not allowed in '{word}'")]
    BadLetter { word: String, letter: char },
    #[error("unrecognized match description: '{0}'")]
    BadMatch(String),
}

impl FromStr for Word {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = normalize_wordle_word(s);
        if lower.chars().count() != WORD_SIZE {
            return Err(ParseErr::BadWordLength(s.to_string()));
        }

        let mut out = [0u8; WORD_SIZE];
        for (slot, c) in out.iter_mut().zip(lower.chars()) {
            if !c.is_ascii_lowercase() {
                return Err(ParseErr::BadLetter { word: s.to_string(), letter: c });
            }
            *slot = c as u8;
        }

        Ok(Self(out))
    }
}

impl Word {
    /// The letters of this word, as bytes in [b'a', b'z']
    #[inline]
    pub fn as_bytes(&self) -> &[u8; WORD_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item=u8> + '_ {
        self.0.iter().copied()
    }

    /// The set of (distinct) letters used by this word
    #[inline]
    pub fn letters(&self) -> Letters {
        self.iter().collect()
    }

    /// How many times each letter occurs in this word
    #[inline]
    pub fn letter_counts(&self) -> LetterCounts {
        self.iter().collect()
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // every byte is ascii lowercase, see FromStr
        for c in self.0 {
            std::fmt::Write::write_char(f, c as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn mkw(s: &str) -> Word {
    s.parse().expect("test word should parse")
}
