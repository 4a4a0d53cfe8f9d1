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

use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use wordle_strategies::wordle::{
    data::{read_word_file, read_word_freq_file, skip_bad_words},
    prelude::*,
    *,
};

/// Play wordle games on the command line. Useful for exploring playing strategies.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the accepted word list
    #[arg(long, default_value = "./words")]
    words: PathBuf,

    /// Path to a word,weight file of word frequencies
    #[arg(long)]
    freq: Option<PathBuf>,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Play strategy. One of: naive, diversity, common, selective, frequency, filtering
    #[arg(short, long, default_value_t = StrategyKind::Naive)]
    strategy: StrategyKind,

    /// Most possible answers the filtering strategy will search
    #[arg(long, default_value_t = DEFAULT_FILTER_THRESHOLD)]
    threshold: usize,

    /// Exponent applied to weights when sampling
    #[arg(long, default_value_t = 1.0)]
    pow: f64,

    /// Opening guess, repeat for several
    #[arg(long = "open")]
    open: Vec<Word>,

    /// Play the most common possible answer on the last guess (needs --freq)
    #[arg(long)]
    hail_mary: bool,

    /// How the filtering strategy breaks ties: uniform or weighted
    #[arg(long, default_value_t = TieBreakKind::Weighted)]
    tie_break: TieBreakKind,

    /// Frequency of words missing from the --freq file
    #[arg(long, default_value_t = 0.0)]
    default_weight: f64,

    /// More logging, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play automatically against known answers
    Play {
        /// Play every answer this many times, and print totals instead of each game
        #[arg(short = 'n', long, default_value_t = 1)]
        repeat: usize,

        #[arg(required = true)]
        answers: Vec<Word>,
    },
    /// Interactively guess a wordle answer
    Interactive,
}

#[derive(Error, Debug)]
enum CliErr {
    #[error(transparent)]
    LoadData(#[from] LoadDataErr),
    #[error(transparent)]
    Config(#[from] ConfigErr),
    #[error(transparent)]
    Play(#[from] PlayErr),
    #[error(transparent)]
    Game(#[from] GameErr),
    #[error(transparent)]
    Strategy(#[from] StrategyErr),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> Result<(), CliErr> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let words = read_word_file(&cli.words, skip_bad_words)?;
    let freq = match &cli.freq {
        Some(path) => Some(read_word_freq_file(path)?),
        None => None,
    };

    let config = Config {
        strategy: cli.strategy,
        threshold: cli.threshold,
        pow: cli.pow,
        opening: cli.open.clone(),
        hail_mary: cli.hail_mary,
        tie_break: cli.tie_break,
        default_weight: cli.default_weight,
        freq,
    };
    let strategy = config.build(&words)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);

    match cli.command {
        Command::Play { repeat, answers } => play_all(&words, &*strategy, &answers, repeat, &mut rng),
        Command::Interactive => interactive(words, &*strategy, &mut rng),
    }
}

fn play_all(
    words: &WordList,
    strategy: &dyn Strategy,
    answers: &[Word],
    repeat: usize,
    rng: &mut dyn RngCore,
) -> Result<(), CliErr> {
    for answer in answers.iter().filter(|a| !words.contains(*a)) {
        log::warn!("{} is not in the word list and can't be won", answer);
    }

    if repeat == 1 {
        for answer in answers.iter().copied() {
            let mut game = Game::new(words.clone());
            play(&mut game, strategy, answer, rng)?;
            println!("{}\n", game);
        }
        return Ok(());
    }

    let mut stats = PlayStats::default();
    for _ in 0..repeat {
        for answer in answers.iter().copied() {
            let mut game = Game::new(words.clone());
            play(&mut game, strategy, answer, rng)?;
            stats.record(&game);
        }
    }

    if stats.games > 0 {
        println!("{}", stats);
    }
    Ok(())
}

fn interactive(words: WordList, strategy: &dyn Strategy, rng: &mut dyn RngCore) -> Result<(), CliErr> {
    let mut lines = io::stdin().lock().lines();
    let mut game = Game::new(words);
    while !game.over() {
        if game.is_exhausted() {
            println!("I'm out of words, is the answer in the word list?");
            return Ok(());
        }

        let guess = strategy.guess(&game, rng)?;
        println!("My guess: {}", guess);
        loop {
            print!(r#"describe match (or "again" for a different guess): "#);
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };

            let line = line.trim();
            // the game may not accept the word we chose
            if line.eq_ignore_ascii_case("again") {
                game.remove_word(guess);
                break;
            }

            match line.parse::<Match>() {
                Ok(matched) => {
                    game.add_guess(guess, matched)?;
                    break;
                }
                Err(err) => println!("{}", err),
            }
        }
    }

    if game.won() {
        println!("Solved in {} guesses", game.guess_count());
        for guess in game.guesses() {
            println!("{}", guess.matched.emoji());
        }
    } else {
        println!("Out of guesses");
    }
    Ok(())
}
