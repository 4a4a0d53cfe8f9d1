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

use thiserror::Error;
use super::{color::*, letters::*, prelude::*, word::*};

///
/// A guess at the answer, along with the Match which was shown for it. This is an immutable fact
/// about the hidden answer: every possible answer must produce exactly the same Match.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Guess {
    pub word: Word,
    pub matched: Match,
}

impl Guess {
    pub fn new(word: Word, matched: Match) -> Self {
        Self { word, matched }
    }

    /// Whether or not the match indicates that this guess is the correct answer
    pub fn is_correct(&self) -> bool {
        self.matched.won()
    }

    ///
    /// Returns (must, must_not): the letters which must be present in the answer and the letters
    /// which cannot be.
    ///
    /// A guess with repeated letters will only color as many squares of a letter as there are
    /// copies of it in the answer, so a letter can be both colored and Absent within one guess
    /// (guess "geese" against answer "embed" gives ".yy.."). Any letter that is known to be present
    /// is therefore removed from must_not.
    ///
    pub fn must_include(&self) -> (Letters, Letters) {
        let mut must = Letters::EMPTY;
        let mut must_not = Letters::EMPTY;
        for (letter, square) in self.word.iter().zip(self.matched.iter()) {
            if square == Square::Absent {
                must_not = must_not.add_char(letter);
            } else {
                must = must.add_char(letter);
            }
        }

        (must, must_not.remove(must))
    }

    /// The letters this guess pins to a position (its Correct squares)
    pub fn must_be(&self) -> MustBe {
        let mut out = MustBe::default();
        for (idx, (letter, square)) in self.word.iter().zip(self.matched.iter()).enumerate() {
            if square == Square::Correct {
                out.0[idx] = Some(letter);
            }
        }
        out
    }

    ///
    /// The letters this guess rules out of a position: any square which isn't Correct tells us the
    /// answer has some other letter there (otherwise the square would have been Correct).
    ///
    pub fn must_not_be(&self) -> MustNotBe {
        let mut out = MustNotBe::default();
        for (idx, (letter, square)) in self.word.iter().zip(self.matched.iter()).enumerate() {
            if square != Square::Correct {
                out.0[idx] = out.0[idx].add_char(letter);
            }
        }
        out
    }

    /// Collects every constraint of this guess so that it can be tested against many words
    pub fn constraints(&self) -> Constraints {
        let (must, must_not) = self.must_include();
        Constraints {
            must,
            must_not,
            must_be: self.must_be(),
            must_not_be: self.must_not_be(),
        }
    }

    /// Tests if a word is still a possible answer after this guess
    pub fn allows(&self, word: Word) -> bool {
        self.constraints().allows(word)
    }

    /// Returns the subset of `words` still possible after this guess, in the same order
    pub fn filter_possible(&self, words: &[Word]) -> Vec<Word> {
        let constraints = self.constraints();
        words.iter().copied().filter(|w| constraints.allows(*w)).collect()
    }

    /// Same as filter_possible(...).len(), but without allocating
    pub fn count_possible(&self, words: &[Word]) -> usize {
        let constraints = self.constraints();
        words.iter().filter(|w| constraints.allows(**w)).count()
    }
}

///
/// Everything one Guess says about the answer, in a form that is cheap to test against a word:
///
///   * must = letters which must occur somewhere
///   * must_not = letters which cannot occur anywhere
///   * must_be = letters known at exact positions
///   * must_not_be = letters known not to be at a position
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Constraints {
    pub must: Letters,
    pub must_not: Letters,
    pub must_be: MustBe,
    pub must_not_be: MustNotBe,
}

impl Constraints {
    #[inline]
    pub fn allows(&self, word: Word) -> bool {
        let letters = word.letters();
        letters.contains_all(self.must)
            && letters.intersect(self.must_not).is_empty()
            && self.must_be.allows(word)
            && self.must_not_be.allows(word)
    }
}

/// Letters which are known to be at a given position in the answer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MustBe(pub [Option<u8>; WORD_SIZE]);

/// Two guesses claimed different Correct letters at the same position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("position {position} was known to be '{known}' but a guess says it is '{claimed}'")]
pub struct Contradiction {
    pub position: usize,
    pub known: char,
    pub claimed: char,
}

impl MustBe {
    ///
    /// Combines the knowledge of two MustBe values. If both know a letter for the same position
    /// they must agree; genuine feedback can never disagree, so disagreement means the game
    /// history is inconsistent.
    ///
    pub fn merge(self, other: MustBe) -> Result<MustBe, Contradiction> {
        let mut out = self;
        for (position, (slot, claimed)) in out.0.iter_mut().zip(other.0).enumerate() {
            match (*slot, claimed) {
                (Some(known), Some(claimed)) if known != claimed => {
                    return Err(Contradiction {
                        position,
                        known: known as char,
                        claimed: claimed as char,
                    });
                }
                (_, Some(claimed)) => *slot = Some(claimed),
                (_, None) => {}
            }
        }
        Ok(out)
    }

    pub fn allows(&self, word: Word) -> bool {
        self.0
            .iter()
            .zip(word.iter())
            .all(|(known, letter)| known.map_or(true, |k| k == letter))
    }

    /// Number of positions with a known letter
    pub fn known(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }
}

/// Letters which are known to not be at a given position in the answer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MustNotBe(pub [Letters; WORD_SIZE]);

impl MustNotBe {
    pub fn merge(self, other: MustNotBe) -> MustNotBe {
        let mut out = self;
        for (slot, letters) in out.0.iter_mut().zip(other.0) {
            *slot = slot.add(letters);
        }
        out
    }

    pub fn allows(&self, word: Word) -> bool {
        self.0
            .iter()
            .zip(word.iter())
            .all(|(excluded, letter)| !excluded.contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mkg(word: &str, matched: &str) -> Guess {
        Guess::new(mkw(word), mkm(matched))
    }

    #[test]
    fn test_must_include() {
        let (must, must_not) = mkg("campy", "gy.g.").must_include();
        assert_eq!(must, Letters::of(b"cap"));
        assert_eq!(must_not, Letters::of(b"my"));

        let (must, must_not) = mkg("eagle", ".....").must_include();
        assert_eq!(must, Letters::EMPTY);
        assert_eq!(must_not, Letters::of(b"eagle"));
    }

    #[test]
    fn test_must_include_repeated_letter() {
        // one 'e' is colored so the grey 'e's only say "no more than that"
        let (must, must_not) = mkg("geese", ".yy..").must_include();
        assert_eq!(must, Letters::of(b"e"));
        assert_eq!(must_not, Letters::of(b"gs"));
    }

    #[test]
    fn test_must_be() {
        let g = mkg("campy", "gy.g.");
        assert!(g.must_be().allows(mkw("crypt")));
        assert!(!g.must_be().allows(mkw("curve")));
        assert_eq!(g.must_be().known(), 2);
        assert!(!g.allows(mkw("campi")));
        assert!(!g.allows(mkw("curve")));
    }

    #[test]
    fn test_must_not_be() {
        let g = mkg("tilde", "yy..g");
        let m = g.must_not_be();
        assert!(!m.allows(mkw("tacit")));
        assert!(!m.allows(mkw("aisle")));
        assert!(m.allows(mkw("write")));
    }

    #[test]
    fn test_filter_possible() {
        let g = mkg("tilde", "yy..g");
        let words: Vec<Word> = [
            "write", "quite", "smite", "tilde", "tithe", "suite", "white", "unite", "title",
            "trite", "spite", "irate", "untie", "lithe", "cigar", "adieu",
        ]
        .into_iter()
        .map(mkw)
        .collect();

        let possible = g.filter_possible(&words);
        let expect: Vec<Word> = ["write", "quite", "smite", "suite", "white", "unite", "spite", "irate", "untie"]
            .into_iter()
            .map(mkw)
            .collect();
        assert_eq!(possible, expect);
        assert_eq!(g.count_possible(&words), expect.len());
    }

    #[test]
    fn test_filter_keeps_answer_for_repeated_letters() {
        let answer = mkw("embed");
        let guess = mkw("geese");
        let g = Guess::new(guess, Match::with_guess_answer(guess, answer));
        assert!(g.allows(answer));
        assert!(!g.allows(mkw("eerie")));
    }

    #[test]
    fn test_merge_must_be() {
        let a = mkg("cigar", "G....").must_be();
        let b = mkg("cider", "GG...").must_be();
        let merged = a.merge(b).expect("should agree");
        assert_eq!(merged.known(), 2);

        let c = mkg("sugar", "G....").must_be();
        assert_eq!(
            merged.merge(c),
            Err(Contradiction { position: 0, known: 'c', claimed: 's' }),
        );
    }
}
