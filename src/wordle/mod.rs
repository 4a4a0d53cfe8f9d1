pub mod prelude;
pub mod letters;
pub mod word;
pub mod color;
pub mod guess;
pub mod game;
pub mod scoring;
pub mod sample;
pub mod strategy;
pub mod filtering;
pub mod data;
pub mod config;
pub mod play;

pub use color::{Match, Square};
pub use config::{Config, ConfigErr, StrategyKind, TieBreakKind};
pub use data::LoadDataErr;
pub use filtering::{Filtering, TieBreak};
pub use game::{Game, GameErr, WordList};
pub use guess::Guess;
pub use play::{play, PlayErr, PlayStats};
pub use scoring::Scoring;
pub use strategy::{Strategy, StrategyErr};
pub use word::{ParseErr, Word};
