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

use rand::RngCore;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use super::{color::*, game::*, prelude::*, strategy::*, word::*};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayErr {
    #[error(transparent)]
    Strategy(#[from] StrategyErr),
    #[error(transparent)]
    Game(#[from] GameErr),
}

///
/// Plays `game` to the end against a known answer: the strategy picks each guess and the Match is
/// computed from the answer.
///
/// Stops once the game is over, or when no possible answers remain (the answer isn't in the word
/// list), in which case the game is lost.
///
pub fn play(game: &mut Game, strategy: &dyn Strategy, answer: Word, rng: &mut dyn RngCore) -> Result<(), PlayErr> {
    while !game.over() {
        if game.is_exhausted() {
            log::warn!("no possible answers left, is '{}' in the word list?", answer);
            break;
        }

        let guess = strategy.guess(game, rng)?;
        game.add_guess(guess, Match::with_guess_answer(guess, answer))?;
    }

    log::debug!("{} {} after {} guesses", answer, if game.won() { "won" } else { "lost" }, game.guess_count());
    Ok(())
}

/// Totals over many played games
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayStats {
    pub games: usize,
    pub wins: usize,
    pub guesses: usize,
    pub min_guesses: Option<usize>,
    pub max_guesses: usize,
}

impl PlayStats {
    /// Adds a finished game to the totals
    pub fn record(&mut self, game: &Game) {
        let n = game.guess_count();
        self.games += 1;
        if game.won() {
            self.wins += 1;
        }
        self.guesses += n;
        self.min_guesses = Some(self.min_guesses.map_or(n, |m| m.min(n)));
        self.max_guesses = self.max_guesses.max(n);
    }

    /// Percentage of games won, 0 when nothing was played
    pub fn win_rate(&self) -> WordleFloat {
        if self.games == 0 {
            0.0
        } else {
            100.0 * self.wins as WordleFloat / self.games as WordleFloat
        }
    }

    pub fn avg_guesses(&self) -> WordleFloat {
        if self.games == 0 {
            0.0
        } else {
            self.guesses as WordleFloat / self.games as WordleFloat
        }
    }
}

impl Display for PlayStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Won {} of {} games ({:.1}%). Guesses: avg {:.1}, min {}, max {}",
            self.wins,
            self.games,
            self.win_rate(),
            self.avg_guesses(),
            self.min_guesses.unwrap_or(0),
            self.max_guesses,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::{filtering::*, scoring::*, testdata::TEST_WORDS};
    use rand::{rngs::StdRng, SeedableRng};

    fn mkl(words: &[&str]) -> WordList {
        words.iter().map(|w| mkw(w)).collect()
    }

    fn game_with(guesses: &[(&str, &str)]) -> Game {
        let mut game = Game::new(TEST_WORDS.clone());
        for (word, matched) in guesses {
            game.add_guess(mkw(word), mkm(matched)).unwrap();
        }
        game
    }

    #[test]
    fn test_play_until_won() {
        let strategy = Filtering::new(
            Box::new(Weighted::new(UniqueLetters, 1.0)),
            DEFAULT_FILTER_THRESHOLD,
            TieBreak::Weighted(Box::new(UniqueLetters)),
        );
        let mut rng = StdRng::seed_from_u64(42);
        for answer in ["cigar", "rebut", "sissy", "humph"].map(mkw) {
            let mut game = Game::new(TEST_WORDS.clone());
            play(&mut game, &strategy, answer, &mut rng).unwrap();
            assert!(game.over());
            assert!(game.won(), "{} lost:\n{}", answer, game);
            assert_eq!(game.guesses().last().map(|g| g.word), Some(answer));
        }
    }

    #[test]
    fn test_play_unknown_answer() {
        let mut game = Game::new(mkl(&["cigar", "rebut", "sissy"]));
        let mut rng = StdRng::seed_from_u64(1);
        play(&mut game, &Naive, mkw("humph"), &mut rng).unwrap();
        assert!(game.is_exhausted());
        assert!(!game.won());
    }

    #[test]
    fn test_play_finished_game() {
        let mut game = game_with(&[("cigar", "GGGGG")]);
        let mut rng = StdRng::seed_from_u64(1);
        play(&mut game, &Naive, mkw("cigar"), &mut rng).unwrap();
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn test_stats() {
        let mut stats = PlayStats::default();
        assert_eq!(stats.to_string(), "Won 0 of 0 games (0.0%). Guesses: avg 0.0, min 0, max 0");

        stats.record(&game_with(&[("cigar", "GGGGG")]));
        stats.record(&game_with(&[("raise", "G...y"), ("rebut", "GGGGG")]));
        stats.record(&game_with(&[("zzzzz", "....."); NUM_TURNS]));
        assert_eq!(stats.games, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.min_guesses, Some(1));
        assert_eq!(stats.max_guesses, NUM_TURNS);
        assert_eq!(stats.to_string(), "Won 2 of 3 games (66.7%). Guesses: avg 3.0, min 1, max 6");
    }
}
