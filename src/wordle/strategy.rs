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

use rand::{Rng, RngCore};
use thiserror::Error;
use super::{game::*, prelude::*, sample::*, scoring::*, word::*};

///
/// Chooses the next word to play in a Game.
///
/// Randomness comes from the generator passed to each call, so a whole tree of strategies can be
/// driven by a single seeded generator and replays exactly for the same seed. The returned word
/// is always one of the game's accepted words, though not necessarily a possible answer.
///
pub trait Strategy {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr> {
        (**self).guess(game, rng)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyErr {
    #[error("no possible words remain")]
    NoCandidates,
}

/// The possible answers of the game, or NoCandidates if there are none
pub(crate) fn possible_or_err(game: &Game) -> Result<&WordList, StrategyErr> {
    let possible = game.possible_answers();
    if possible.is_empty() {
        Err(StrategyErr::NoCandidates)
    } else {
        Ok(possible)
    }
}

/// Plays a possible answer chosen uniformly at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct Naive;

impl Strategy for Naive {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr> {
        let possible = possible_or_err(game)?;
        log::debug!("choosing from {} possible words", possible.len());
        Ok(possible[rng.gen_range(0..possible.len())])
    }
}

///
/// Plays a possible answer chosen at random, weighted by a Scoring. Each weight is raised to `pow`
/// first (see weighted_sample): pow > 1 follows the scoring more greedily, pow < 1 more loosely.
///
#[derive(Clone, Debug)]
pub struct Weighted<S> {
    scoring: S,
    pow: WordleFloat,
}

impl<S: Scoring> Weighted<S> {
    pub fn new(scoring: S, pow: WordleFloat) -> Self {
        Self { scoring, pow }
    }
}

impl<S: Scoring> Strategy for Weighted<S> {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr> {
        let possible = possible_or_err(game)?;
        let weights = self.scoring.weights(possible);
        let idx = weighted_sample(rng, self.pow, &weights).ok_or(StrategyErr::NoCandidates)?;
        Ok(possible[idx])
    }
}

/// Plays the best scored possible answer, choosing uniformly at random among equal scores.
#[derive(Clone, Debug)]
pub struct Top<S> {
    scoring: S,
}

impl<S: Scoring> Top<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }
}

impl Top<UniqueLetters> {
    /// Plays the possible answers with the most distinct letters, which test the most letters
    pub fn diversity() -> Self {
        Self::new(UniqueLetters)
    }
}

impl<S: Scoring> Strategy for Top<S> {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr> {
        let possible = possible_or_err(game)?;
        let weights = self.scoring.weights(possible);
        let top = weights.iter().copied().fold(WordleFloat::NEG_INFINITY, WordleFloat::max);
        let choices: Vec<Word> = possible
            .iter()
            .zip(&weights)
            .filter(|(_, w)| **w == top)
            .map(|(word, _)| *word)
            .collect();

        log::debug!("{} of {} possible words share the top score {}", choices.len(), possible.len(), top);
        match choices.len() {
            0 => Err(StrategyErr::NoCandidates),
            1 => Ok(choices[0]),
            n => Ok(choices[rng.gen_range(0..n)]),
        }
    }
}

///
/// Plays a fixed opening sequence before continuing with a follow-on strategy: the first guess of
/// the game is open[0], the second open[1], etc...
///
/// An opening word which was removed from the game (it wasn't accepted) is skipped in favour of the
/// follow-on strategy for that turn.
///
pub struct Fixed {
    open: Vec<Word>,
    follow_on: Box<dyn Strategy>,
}

impl Fixed {
    pub fn new(open: Vec<Word>, follow_on: Box<dyn Strategy>) -> Self {
        Self { open, follow_on }
    }
}

impl Strategy for Fixed {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr> {
        match self.open.get(game.guess_count()) {
            Some(word) if !game.removed().contains(word) => Ok(*word),
            _ => self.follow_on.guess(game, rng),
        }
    }
}

///
/// Uses the normal strategy for every guess but the last one allowed, where the hail mary
/// strategy is used instead. With one guess left, only an exact hit matters, so a strategy that
/// maximizes the chance of being right (like picking the most common word) beats one that
/// gathers information.
///
pub struct HailMary {
    normal: Box<dyn Strategy>,
    hail_mary: Box<dyn Strategy>,
}

impl HailMary {
    pub fn new(normal: Box<dyn Strategy>, hail_mary: Box<dyn Strategy>) -> Self {
        Self { normal, hail_mary }
    }
}

impl Strategy for HailMary {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr> {
        if game.guess_count() == NUM_TURNS - 1 {
            log::debug!("last guess, hail mary");
            self.hail_mary.guess(game, rng)
        } else {
            self.normal.guess(game, rng)
        }
    }
}
