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
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use super::{filtering::*, game::*, prelude::*, scoring::*, strategy::*, word::*};

/// The strategies which can be chosen by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// a uniformly random possible answer
    Naive,
    /// the possible answer with the most distinct letters
    Diversity,
    /// possible answers weighted by how common their letters are
    Common,
    /// possible answers weighted by how common their letters are in each position
    Selective,
    /// possible answers weighted by how common the words are (needs a frequency table)
    Frequency,
    /// the guess which leaves the fewest possible answers, on average
    Filtering,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::Naive,
        StrategyKind::Diversity,
        StrategyKind::Common,
        StrategyKind::Selective,
        StrategyKind::Frequency,
        StrategyKind::Filtering,
    ];

    pub fn name(&self) -> &'static str {
        use StrategyKind::*;
        match self {
            Naive => "naive",
            Diversity => "diversity",
            Common => "common",
            Selective => "selective",
            Frequency => "frequency",
            Filtering => "filtering",
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| ConfigErr::UnknownStrategy(s.to_string()))
    }
}

/// How the filtering strategy breaks ties, see TieBreak
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreakKind {
    Uniform,
    /// by word frequency when a table is loaded, otherwise by distinct letters
    #[default]
    Weighted,
}

impl Display for TieBreakKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TieBreakKind::Uniform => "uniform",
            TieBreakKind::Weighted => "weighted",
        })
    }
}

impl FromStr for TieBreakKind {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(TieBreakKind::Uniform),
            "weighted" => Ok(TieBreakKind::Weighted),
            _ => Err(ConfigErr::UnknownTieBreak(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigErr {
    #[error("unrecognized strategy '{0}', expected one of: naive, diversity, common, selective, frequency, filtering")]
    UnknownStrategy(String),
    #[error("unrecognized tie break '{0}', expected uniform or weighted")]
    UnknownTieBreak(String),
    #[error("opening word '{0}' is not in the word list")]
    OpeningNotAccepted(Word),
    #[error("{0} needs a word frequency table")]
    MissingFrequencies(&'static str),
    #[error("weight exponent must be a number >= 0, got {0}")]
    BadPow(WordleFloat),
}

///
/// Everything needed to build a Strategy. A Config is filled in once (usually from the command
/// line) and then used to build the strategy for a word list.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub strategy: StrategyKind,
    /// the filtering strategy falls back to "common" above this many possible answers
    pub threshold: usize,
    /// exponent applied to weights before weighted sampling
    pub pow: WordleFloat,
    /// words played first, in order, before the strategy takes over
    pub opening: Vec<Word>,
    /// play the most common possible answer on the last guess
    pub hail_mary: bool,
    pub tie_break: TieBreakKind,
    /// the frequency of words missing from the frequency table
    pub default_weight: WordleFloat,
    pub freq: Option<HashMap<Word, WordleFloat>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Naive,
            threshold: DEFAULT_FILTER_THRESHOLD,
            pow: 1.0,
            opening: Vec::new(),
            hail_mary: false,
            tie_break: TieBreakKind::default(),
            default_weight: 0.0,
            freq: None,
        }
    }
}

impl Config {
    ///
    /// Builds the configured strategy for games played on `words`.
    ///
    /// Strategies which score the possible answers cache the scores of the full word list, since
    /// that is what they're asked about at the start of every game.
    ///
    pub fn build(&self, words: &WordList) -> Result<Box<dyn Strategy>, ConfigErr> {
        if self.pow.is_nan() || self.pow < 0.0 {
            return Err(ConfigErr::BadPow(self.pow));
        }

        if let Some(word) = self.opening.iter().find(|w| !words.contains(*w)) {
            return Err(ConfigErr::OpeningNotAccepted(*word));
        }

        let mut strategy: Box<dyn Strategy> = match self.strategy {
            StrategyKind::Naive => Box::new(Naive),
            StrategyKind::Diversity => Box::new(Top::diversity()),
            StrategyKind::Common => self.common(words),
            StrategyKind::Selective => {
                Box::new(Weighted::new(ScoringCache::new(PositionalFrequency, words), self.pow))
            }
            StrategyKind::Frequency => {
                let freq = self.word_frequency("the frequency strategy")?;
                Box::new(Weighted::new(freq, self.pow))
            }
            StrategyKind::Filtering => Box::new(Filtering::new(
                self.common(words),
                self.threshold,
                self.filtering_tie_break(),
            )),
        };

        if self.hail_mary {
            let freq = self.word_frequency("hail mary")?;
            strategy = Box::new(HailMary::new(strategy, Box::new(Top::new(freq))));
        }

        if !self.opening.is_empty() {
            strategy = Box::new(Fixed::new(self.opening.clone(), strategy));
        }

        log::debug!(
            "built {} strategy (threshold {}, pow {}, {} opening words, hail mary {})",
            self.strategy,
            self.threshold,
            self.pow,
            self.opening.len(),
            self.hail_mary,
        );
        Ok(strategy)
    }

    fn common(&self, words: &WordList) -> Box<dyn Strategy> {
        Box::new(Weighted::new(ScoringCache::new(LetterFrequency, words), self.pow))
    }

    fn word_frequency(&self, needed_by: &'static str) -> Result<WordFrequency, ConfigErr> {
        self.freq
            .as_ref()
            .map(|table| WordFrequency::new(table.clone(), self.default_weight))
            .ok_or(ConfigErr::MissingFrequencies(needed_by))
    }

    fn filtering_tie_break(&self) -> TieBreak {
        match self.tie_break {
            TieBreakKind::Uniform => TieBreak::Uniform,
            TieBreakKind::Weighted => match self.word_frequency("tie break") {
                Ok(freq) => TieBreak::Weighted(Box::new(freq)),
                Err(_) => TieBreak::Weighted(Box::new(UniqueLetters)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::{color::*, testdata::TEST_WORDS};
    use rand::{rngs::StdRng, SeedableRng};
    use test_case::test_case;

    fn freq_table() -> HashMap<Word, WordleFloat> {
        let mut table = HashMap::new();
        table.insert(mkw("cigar"), 10.0);
        table.insert(mkw("cider"), 1.0);
        table
    }

    #[test_case("naive", StrategyKind::Naive)]
    #[test_case("Diversity", StrategyKind::Diversity)]
    #[test_case(" common ", StrategyKind::Common)]
    #[test_case("SELECTIVE", StrategyKind::Selective)]
    #[test_case("frequency", StrategyKind::Frequency)]
    #[test_case("filtering", StrategyKind::Filtering)]
    fn test_parse_strategy(s: &str, expected: StrategyKind) {
        assert_eq!(s.parse::<StrategyKind>(), Ok(expected));
        assert_eq!(expected.to_string().parse::<StrategyKind>(), Ok(expected));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "clever".parse::<StrategyKind>(),
            Err(ConfigErr::UnknownStrategy("clever".to_string())),
        );
        assert_eq!(
            "random".parse::<TieBreakKind>(),
            Err(ConfigErr::UnknownTieBreak("random".to_string())),
        );
        assert_eq!("Uniform".parse::<TieBreakKind>(), Ok(TieBreakKind::Uniform));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.threshold, 60);
        assert_eq!(config.pow, 1.0);
        assert_eq!(config.tie_break, TieBreakKind::Weighted);
        assert!(config.freq.is_none());
    }

    #[test]
    fn test_every_strategy_builds_and_guesses() {
        for kind in StrategyKind::ALL {
            let config = Config {
                strategy: kind,
                freq: Some(freq_table()),
                ..Config::default()
            };
            let strategy = config.build(&TEST_WORDS).expect("should build");
            let game = Game::new(TEST_WORDS.clone());
            let mut rng = StdRng::seed_from_u64(1);
            let word = strategy.guess(&game, &mut rng).expect("should guess");
            assert!(TEST_WORDS.contains(&word), "{} guessed {}", kind, word);
        }
    }

    #[test]
    fn test_opening_not_accepted() {
        let config = Config {
            opening: vec![mkw("raise"), mkw("zzzzz")],
            ..Config::default()
        };
        assert_eq!(config.build(&TEST_WORDS).err(), Some(ConfigErr::OpeningNotAccepted(mkw("zzzzz"))));
    }

    #[test_case(-1.0; "negative")]
    #[test_case(WordleFloat::NAN; "nan")]
    fn test_bad_pow(pow: WordleFloat) {
        let config = Config {
            strategy: StrategyKind::Common,
            pow,
            ..Config::default()
        };
        assert!(matches!(config.build(&TEST_WORDS), Err(ConfigErr::BadPow(_))));
    }

    #[test]
    fn test_zero_pow_builds() {
        let config = Config {
            strategy: StrategyKind::Common,
            pow: 0.0,
            ..Config::default()
        };
        assert!(config.build(&TEST_WORDS).is_ok());
    }

    #[test]
    fn test_missing_frequencies() {
        let config = Config {
            strategy: StrategyKind::Frequency,
            ..Config::default()
        };
        assert!(matches!(config.build(&TEST_WORDS), Err(ConfigErr::MissingFrequencies(_))));

        let config = Config {
            hail_mary: true,
            ..Config::default()
        };
        assert!(matches!(config.build(&TEST_WORDS), Err(ConfigErr::MissingFrequencies(_))));
    }

    #[test]
    fn test_opening_is_played_first() {
        let config = Config {
            strategy: StrategyKind::Filtering,
            opening: vec![mkw("raise"), mkw("clout")],
            ..Config::default()
        };
        let strategy = config.build(&TEST_WORDS).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(TEST_WORDS.clone());
        let answer = mkw("nymph");
        for expected in ["raise", "clout"].map(mkw) {
            let word = strategy.guess(&game, &mut rng).unwrap();
            assert_eq!(word, expected);
            game.add_guess(word, Match::with_guess_answer(word, answer)).unwrap();
        }
    }

    #[test]
    fn test_hail_mary_plays_most_common() {
        let config = Config {
            hail_mary: true,
            freq: Some(freq_table()),
            ..Config::default()
        };
        let strategy = config.build(&TEST_WORDS).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Game::new(TEST_WORDS.clone());
        // leaves the words starting with ci, and only cigar is in the table
        game.add_guess(mkw("civic"), mkm("GG...")).unwrap();
        for _ in 1..NUM_TURNS - 1 {
            game.add_guess(mkw("zzzzz"), mkm(".....")).unwrap();
        }
        assert!(game.possible_answers().contains(&mkw("cigar")));
        assert_eq!(strategy.guess(&game, &mut rng), Ok(mkw("cigar")));
    }
}
