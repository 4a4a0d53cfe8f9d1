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
use super::prelude::*;

///
/// A set of letters from the alphabet, stored as a bitmask where bit 0 is 'a', bit 1 is 'b', etc...
///
/// Only the low ALPHABET_SIZE bits are ever set, so union/intersection/difference are single
/// bitwise operations and the size of the set is a popcount.
///
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Letters(u32);

impl Letters {
    pub const EMPTY: Letters = Letters(0);
    pub const ALL: Letters = Letters((1 << ALPHABET_SIZE) - 1);

    /// Builds the set of letters used in the given bytes (which must be lowercase ascii)
    pub fn of(letters: &[u8]) -> Self {
        letters.iter().copied().collect()
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn add_char(self, letter: u8) -> Self {
        Self(self.0 | mask(letter))
    }

    #[inline]
    pub fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Removes every letter in `other` from this set
    #[inline]
    pub fn remove(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether all letters of `other` are in this set
    #[inline]
    pub fn contains_all(self, other: Self) -> bool {
        other.remove(self).is_empty()
    }

    /// Tests membership. Anything that isn't a lowercase letter is never a member.
    #[inline]
    pub fn contains(self, letter: u8) -> bool {
        is_normal_wordle_char(&letter) && self.0 & mask(letter) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item=u8> {
        (b'a'..=b'z').filter(move |c| self.contains(*c))
    }
}

#[inline]
fn mask(letter: u8) -> u32 {
    1 << letter_idx(letter)
}

impl FromIterator<u8> for Letters {
    fn from_iter<T: IntoIterator<Item=u8>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, Letters::add_char)
    }
}

///
/// Displays the set in a regex-like form, compressing runs of 3 or more letters into a range:
///
///   {a, b, c, d} => [a-d]
///   {a, c, d}    => [acd]
///   {}           => []
///
impl Display for Letters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        let mut run = 0;
        for letter in b'a'..=b'z' + 1 {
            if letter <= b'z' && self.contains(letter) {
                if run == 0 {
                    f.write_char(letter as char)?;
                }
                run += 1;
                continue;
            }

            // the run (if any) ended on the previous letter
            let last = (letter - 1) as char;
            match run {
                0 | 1 => {}
                2 => f.write_char(last)?,
                _ => {
                    f.write_char('-')?;
                    f.write_char(last)?;
                }
            }
            run = 0;
        }
        f.write_char(']')
    }
}

///
/// A multiset of letters (how many times each letter of the alphabet occurs). Used while computing
/// feedback, where each letter of the answer can only "pay" for one colored square.
///
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    #[inline]
    pub fn add(&mut self, letter: u8) {
        self.0[letter_idx(letter)] += 1;
    }

    /// Decrements the count for `letter`, returning false (and doing nothing) if it is already 0
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        let counter = &mut self.0[letter_idx(letter)];
        if *counter > 0 {
            *counter -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn count(&self, letter: u8) -> u8 {
        self.0[letter_idx(letter)]
    }

    /// Total number of letters in the multiset
    pub fn len(&self) -> usize {
        self.0.iter().map(|c| *c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| *c == 0)
    }
}

impl FromIterator<u8> for LetterCounts {
    fn from_iter<T: IntoIterator<Item=u8>>(iter: T) -> Self {
        let mut out = Self::default();
        for letter in iter {
            out.add(letter);
        }
        out
    }
}
