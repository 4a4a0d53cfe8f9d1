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

use instant::Instant;
use rand::{Rng, RngCore};
use std::fmt::{Display, Formatter};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};
use super::{color::*, game::*, guess::*, prelude::*, sample::*, scoring::*, strategy::*, word::*};

///
/// How the filtering strategy picks between candidates that filter equally well.
///
pub enum TieBreak {
    /// every tied candidate is equally likely
    Uniform,
    /// tied candidates are sampled in proportion to a secondary score (see weighted_sample)
    Weighted(Box<dyn Scoring>),
}

impl Display for TieBreak {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TieBreak::Uniform => "uniform",
            TieBreak::Weighted(_) => "weighted",
        })
    }
}

///
/// Selects the word that filters the most from the possible answers.
///
/// How much a guess filters depends on the actual answer, which we don't know. Instead, for every
/// candidate guess we add up how many possible answers would remain for each answer that is still
/// possible: that sum is proportional to the expected number of words remaining after the guess,
/// and the candidate with the lowest sum wins.
///
/// The candidates are all the possible answers plus a random sample of accepted words. A word which
/// can't be the answer is sometimes the best at telling the remaining answers apart.
///
/// This costs O(candidates * possible^2), so once there are more than `threshold` possible answers
/// we hand the guess to the (cheaper) fallback strategy. That works out well since almost any
/// reasonable guess filters plenty when there are lots of possibilities.
///
pub struct Filtering {
    fallback: Box<dyn Strategy>,
    threshold: usize,
    tie_break: TieBreak,
}

/// The result of evaluating one candidate guess
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub word: Word,
    /// the number of possible answers left, summed across every possible answer
    pub remaining: usize,
}

impl Filtering {
    pub fn new(fallback: Box<dyn Strategy>, threshold: usize, tie_break: TieBreak) -> Self {
        Self {
            fallback,
            threshold,
            tie_break,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    ///
    /// The words worth evaluating: a sample of `threshold` playable words followed by the possible
    /// answers. Each word appears once, so a sampled possible answer only gets one vote in a tie.
    /// Words removed from the game are never sampled.
    ///
    fn candidates(&self, game: &Game, rng: &mut dyn RngCore) -> Vec<Word> {
        let sample = if game.removed().is_empty() {
            sample_words(rng, game.words(), self.threshold)
        } else {
            let playable: Vec<Word> = game
                .words()
                .iter()
                .copied()
                .filter(|w| !game.removed().contains(w))
                .collect();
            sample_words(rng, &playable, self.threshold)
        };

        let possible = game.possible_answers();
        let mut candidates: Vec<Word> = sample.into_iter().filter(|w| !possible.contains(w)).collect();
        candidates.extend(possible.iter().copied());
        candidates
    }

    ///
    /// Picks one of the tied best candidates. Runs after all scoring is finished, on a single
    /// thread, so the draws from `rng` don't depend on how the scoring was scheduled.
    ///
    fn break_tie(&self, best: Vec<Word>, rng: &mut dyn RngCore) -> Option<Word> {
        match best.len() {
            0 => None,
            1 => Some(best[0]),
            n => {
                let idx = match &self.tie_break {
                    TieBreak::Uniform => rng.gen_range(0..n),
                    TieBreak::Weighted(scoring) => {
                        let best = WordList::from(best.clone());
                        let weights = scoring.weights(&best);
                        weighted_sample(rng, 1.0, &weights)?
                    }
                };
                Some(best[idx])
            }
        }
    }
}

impl Strategy for Filtering {
    fn guess(&self, game: &Game, rng: &mut dyn RngCore) -> Result<Word, StrategyErr> {
        let possible = possible_or_err(game)?;
        log::debug!("{} possible words", possible.len());
        if possible.len() > self.threshold {
            return self.fallback.guess(game, rng);
        }

        if possible.len() == 1 {
            return Ok(possible[0]);
        }

        let start_at = Instant::now();
        let candidates = self.candidates(game, rng);
        let scored = score_candidates(&candidates, possible);
        let best_remaining = scored
            .iter()
            .map(|c| c.remaining)
            .min()
            .ok_or(StrategyErr::NoCandidates)?;
        let best: Vec<Word> = scored
            .iter()
            .filter(|c| c.remaining == best_remaining)
            .map(|c| c.word)
            .collect();
        let n_best = best.len();
        let choice = self.break_tie(best, rng).ok_or(StrategyErr::NoCandidates)?;

        let pairs = possible.len() * (possible.len() - 1);
        log::debug!(
            "{} filtered an avg of {:.1}% of words ({} candidates, {} tied, {} tie break) in {:.3}s",
            choice,
            100.0 * (1.0 - best_remaining as WordleFloat / pairs as WordleFloat),
            candidates.len(),
            n_best,
            self.tie_break,
            start_at.elapsed().as_secs_f64(),
        );

        Ok(choice)
    }
}

///
/// Sums, over every possible answer other than the candidate itself, the number of possible
/// answers which would remain after guessing the candidate.
///
/// Evaluation stops early once the running sum is above `bound`, because such a candidate can't
/// be the best; None is returned in that case.
///
pub fn remaining_after(candidate: Word, possible: &[Word], bound: usize) -> Option<usize> {
    let mut remaining = 0;
    for answer in possible.iter().copied() {
        if candidate == answer {
            continue;
        }

        let guess = Guess::new(candidate, Match::with_guess_answer(candidate, answer));
        remaining += guess.count_possible(possible);
        if remaining > bound {
            return None;
        }
    }

    Some(remaining)
}

///
/// Scores every candidate, in order. Candidates that are certainly worse than some other candidate
/// may be left out, but every candidate sharing the lowest score is always present.
///
#[cfg(not(feature = "parallel"))]
pub fn score_candidates(candidates: &[Word], possible: &[Word]) -> Vec<ScoredCandidate> {
    let mut bound = usize::MAX;
    let mut out = Vec::with_capacity(candidates.len());
    for word in candidates.iter().copied() {
        if let Some(remaining) = remaining_after(word, possible, bound) {
            bound = bound.min(remaining);
            out.push(ScoredCandidate { word, remaining });
        }
    }
    out
}

///
/// Scores every candidate, in order. Candidates that are certainly worse than some other candidate
/// may be left out, but every candidate sharing the lowest score is always present.
///
/// The candidates are scored in parallel and share the best complete score in an atomic. A
/// candidate is only abandoned when its partial sum is strictly above a score some other candidate
/// actually reached, so the set of best candidates (and their order) is the same no matter how the
/// work is split across threads.
///
#[cfg(feature = "parallel")]
pub fn score_candidates(candidates: &[Word], possible: &[Word]) -> Vec<ScoredCandidate> {
    let bound = AtomicUsize::new(usize::MAX);
    candidates
        .par_iter()
        .copied()
        .filter_map(|word| {
            let remaining = remaining_after(word, possible, bound.load(Ordering::Relaxed))?;
            bound.fetch_min(remaining, Ordering::Relaxed);
            Some(ScoredCandidate { word, remaining })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::testdata::TEST_WORDS;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{HashMap, HashSet};
    use test_case::test_case;

    fn mkl(words: &[&str]) -> WordList {
        words.iter().map(|w| mkw(w)).collect()
    }

    fn filtering(threshold: usize) -> Filtering {
        Filtering::new(
            Box::new(Weighted::new(UniqueLetters, 1.0)),
            threshold,
            TieBreak::Weighted(Box::new(UniqueLetters)),
        )
    }

    fn play(strategy: &dyn Strategy, answer: Word, seed: u64) -> Game {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(TEST_WORDS.clone());
        while !game.over() {
            let guess = strategy.guess(&game, &mut rng).expect("answer is in the word list");
            game.add_guess(guess, Match::with_guess_answer(guess, answer))
                .expect("feedback is consistent");
        }
        game
    }

    #[test]
    fn test_simulated_guesses_keep_answer() {
        let possible: Vec<Word> = TEST_WORDS.iter().copied().take(60).collect();
        for candidate in TEST_WORDS.iter().copied().step_by(7) {
            for answer in possible.iter().copied() {
                let guess = Guess::new(candidate, Match::with_guess_answer(candidate, answer));
                let left = guess.filter_possible(&possible);
                assert!(left.contains(&answer), "{} lost guessing {}", answer, candidate);
            }
        }
    }

    #[test]
    fn test_remaining_after() {
        let possible = mkl(&["cigar", "cider", "sugar"]);
        // cigar vs cider leaves {cider}, vs sugar leaves {sugar}
        assert_eq!(remaining_after(mkw("cigar"), &possible, usize::MAX), Some(2));
        // stops as soon as it's known to be worse than the bound
        assert_eq!(remaining_after(mkw("cigar"), &possible, 1), None);
        // a word matching nothing leaves all three for each answer
        assert_eq!(remaining_after(mkw("nymph"), &possible, usize::MAX), Some(9));
    }

    #[test]
    fn test_score_candidates_keeps_every_best() {
        let possible = mkl(&["cigar", "cider", "sugar"]);
        let candidates = [mkw("nymph"), mkw("cigar"), mkw("sugar"), mkw("cider")];
        let scored = score_candidates(&candidates, &possible);
        let best: Vec<Word> = scored
            .iter()
            .filter(|c| c.remaining == 2)
            .map(|c| c.word)
            .collect();
        assert_eq!(best, vec![mkw("cigar"), mkw("sugar"), mkw("cider")]);
        assert!(scored.iter().all(|c| c.remaining >= 2));
    }

    #[test]
    fn test_single_possible_answer() {
        let game = Game::new(TEST_WORDS.clone())
            .guess(mkw("cigar"), Match::with_guess_answer(mkw("cigar"), mkw("rebut")))
            .unwrap()
            .guess(mkw("rebut"), Match::WON);
        // the game is won, but a strategy asked anyway plays the only possible word
        let game = game.unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(filtering(60).guess(&game, &mut rng), Ok(mkw("rebut")));
    }

    #[test]
    fn test_falls_back_above_threshold() {
        struct Always(Word);
        impl Strategy for Always {
            fn guess(&self, _: &Game, _: &mut dyn RngCore) -> Result<Word, StrategyErr> {
                Ok(self.0)
            }
        }

        let strategy = Filtering::new(Box::new(Always(mkw("zzzzz"))), 10, TieBreak::Uniform);
        let game = Game::new(TEST_WORDS.clone());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(strategy.guess(&game, &mut rng), Ok(mkw("zzzzz")));
    }

    #[test]
    fn test_guess_is_an_accepted_word() {
        let game = Game::new(TEST_WORDS.clone())
            .guess(mkw("crane"), Match::with_guess_answer(mkw("crane"), mkw("cigar")))
            .unwrap();
        assert!(game.possible_answers().len() <= 60);
        let strategy = Filtering::new(Box::new(Naive), 60, TieBreak::Uniform);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..5 {
            let word = strategy.guess(&game, &mut rng).unwrap();
            assert!(game.words().contains(&word));
        }
    }

    #[test]
    fn test_no_candidates() {
        let mut game = Game::new(mkl(&["cigar"]));
        game.remove_word(mkw("cigar"));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(filtering(60).guess(&game, &mut rng), Err(StrategyErr::NoCandidates));
    }

    #[test]
    fn test_play_cigar() {
        let strategy = filtering(60);
        let game = play(&strategy, mkw("cigar"), 1);
        assert!(game.won(), "lost:\n{}", game);
        assert_eq!(game.guess_count(), 3);
        assert_eq!(game.to_string(), "1: geese y....\n2: hairy .yyy.\n3: cigar GGGGG");

        // the same seed replays the same game
        let again = play(&strategy, mkw("cigar"), 1);
        assert_eq!(game.guesses(), again.guesses());
    }

    #[test_case(2, 3)]
    #[test_case(3, 4)]
    fn test_play_cigar_seeds(seed: u64, guesses: usize) {
        let game = play(&filtering(60), mkw("cigar"), seed);
        assert!(game.won(), "lost:\n{}", game);
        assert_eq!(game.guess_count(), guesses);
    }

    #[test]
    fn test_candidates_are_distinct() {
        let game = Game::new(TEST_WORDS.clone())
            .guess(mkw("crane"), Match::with_guess_answer(mkw("crane"), mkw("cigar")))
            .unwrap();
        let possible = game.possible_answers().to_vec();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let candidates = filtering(60).candidates(&game, &mut rng);
            let distinct: HashSet<Word> = candidates.iter().copied().collect();
            assert_eq!(distinct.len(), candidates.len(), "repeated candidate in {:?}", candidates);
            // the possible answers are always last, and all present
            assert_eq!(candidates[candidates.len() - possible.len()..], possible[..]);
        }
    }

    #[test]
    fn test_candidates_skip_removed_words() {
        let mut game = Game::new(mkl(&["cigar", "cider", "sugar", "nymph", "humph", "rebut"]));
        game.remove_word(mkw("nymph"));
        game.add_guess(mkw("rebut"), Match::with_guess_answer(mkw("rebut"), mkw("cigar")))
            .unwrap();
        assert_eq!(game.possible_answers().to_vec(), vec![mkw("cigar")]);

        let mut rng = StdRng::seed_from_u64(5);
        let candidates = filtering(60).candidates(&game, &mut rng);
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(sorted, ["cider", "cigar", "humph", "rebut", "sugar"].map(mkw).to_vec());
        assert_eq!(candidates.last(), Some(&mkw("cigar")));
    }

    fn tie_counts(strategy: &Filtering, tied: &[Word], draws: usize) -> HashMap<Word, usize> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashMap::new();
        for _ in 0..draws {
            let word = strategy.break_tie(tied.to_vec(), &mut rng).unwrap();
            *seen.entry(word).or_insert(0) += 1;
        }
        seen
    }

    #[test]
    fn test_weighted_tie_break_follows_frequency() {
        const DRAWS: usize = 40_000;
        let mut table = HashMap::new();
        table.insert(mkw("cigar"), 1.0);
        table.insert(mkw("sugar"), 3.0);
        let strategy = Filtering::new(
            Box::new(Naive),
            60,
            TieBreak::Weighted(Box::new(WordFrequency::new(table, 0.0))),
        );

        // cider isn't in the table, so it has no weight
        let seen = tie_counts(&strategy, &["cigar", "cider", "sugar"].map(mkw), DRAWS);
        assert_eq!(seen.get(&mkw("cider")), None);

        let cigar = seen[&mkw("cigar")] as WordleFloat;
        let sugar = seen[&mkw("sugar")] as WordleFloat;
        assert!((cigar / DRAWS as WordleFloat - 0.25).abs() < 0.01, "{:?}", seen);
        assert!((sugar / cigar - 3.0).abs() < 0.15, "{:?}", seen);
    }

    #[test]
    fn test_uniform_tie_break_is_even() {
        const DRAWS: usize = 30_000;
        let strategy = Filtering::new(Box::new(Naive), 60, TieBreak::Uniform);
        let seen = tie_counts(&strategy, &["cigar", "cider", "sugar"].map(mkw), DRAWS);
        for word in ["cigar", "cider", "sugar"].map(mkw) {
            let share = seen[&word] as WordleFloat / DRAWS as WordleFloat;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "{:?}", seen);
        }
    }

    #[test]
    fn test_single_tied_word() {
        let strategy = filtering(60);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(strategy.break_tie(vec![mkw("cigar")], &mut rng), Some(mkw("cigar")));
        assert_eq!(strategy.break_tie(Vec::new(), &mut rng), None);
    }

    #[test]
    fn test_uniform_tie_break_plays_cigar() {
        let strategy = Filtering::new(Box::new(Naive), 60, TieBreak::Uniform);
        let game = play(&strategy, mkw("cigar"), 2);
        assert!(game.won(), "lost:\n{}", game);
    }
}
