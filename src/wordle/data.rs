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

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::Path;
use thiserror::Error;
use super::{game::*, prelude::*, word::*};

#[derive(Error, Debug)]
pub enum LoadDataErr {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed floating point text on line '{line}'")]
    BadFloat {
        line: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("malformed line '{0}', expected word,weight")]
    BadLine(String),
    #[error("line {lineno}: '{word}' is not a valid wordle word")]
    Rejected {
        word: String,
        lineno: usize,
        #[source]
        source: ParseErr,
    },
    #[error("no words were found")]
    Empty,
}

///
/// Reads a list of accepted words, one per line (like a unix "dict" file).
///
/// Anything after a '#' is a comment, and each line is trimmed. Blank lines are skipped, and only
/// the first occurrence of a repeated word is kept.
///
/// Lines which aren't valid words are passed to `on_error` along with their (1-based) line number.
/// Returning an error from `on_error` stops reading and returns that error, otherwise the line is
/// skipped. See skip_bad_words and reject_bad_words.
///
pub fn read_word_list<R, F>(reader: R, mut on_error: F) -> Result<WordList, LoadDataErr>
where
    R: BufRead,
    F: FnMut(&str, usize, &ParseErr) -> Result<(), LoadDataErr>,
{
    let mut words = Vec::new();
    let mut seen = HashSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = strip_comment(&line).trim();
        if line.is_empty() {
            continue;
        }

        let lineno = idx + 1;
        match line.parse::<Word>() {
            Ok(word) => {
                if seen.insert(word) {
                    words.push(word);
                }
            }
            Err(err) => on_error(line, lineno, &err)?,
        }
    }

    if words.is_empty() {
        return Err(LoadDataErr::Empty);
    }

    log::debug!("read {} words", words.len());
    Ok(words.into())
}

/// Opens `path` and reads it with read_word_list
pub fn read_word_file<P, F>(path: P, on_error: F) -> Result<WordList, LoadDataErr>
where
    P: AsRef<Path>,
    F: FnMut(&str, usize, &ParseErr) -> Result<(), LoadDataErr>,
{
    let path = path.as_ref();
    log::debug!("reading words from {}", path.display());
    read_word_list(BufReader::new(File::open(path)?), on_error)
}

/// An error handler for read_word_list which ignores bad lines
pub fn skip_bad_words(line: &str, lineno: usize, err: &ParseErr) -> Result<(), LoadDataErr> {
    log::trace!("skipping line {} '{}': {}", lineno, line, err);
    Ok(())
}

/// An error handler for read_word_list which fails on the first bad line
pub fn reject_bad_words(line: &str, lineno: usize, err: &ParseErr) -> Result<(), LoadDataErr> {
    Err(LoadDataErr::Rejected {
        word: line.to_string(),
        lineno,
        source: err.clone(),
    })
}

///
/// Reads a table of word frequencies, a `word,weight` pair on each line. Blank lines are skipped.
///
/// Malformed words are skipped (frequency lists tend to include plenty of words which aren't
/// accepted), but a malformed weight fails the whole read.
///
pub fn read_word_freq<R: BufRead>(reader: R) -> Result<HashMap<Word, WordleFloat>, LoadDataErr> {
    let mut out = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (word, weight) = trimmed
            .split_once(',')
            .ok_or_else(|| LoadDataErr::BadLine(line.clone()))?;

        let word = match word.trim().parse::<Word>() {
            Ok(word) => word,
            Err(err) => {
                log::trace!("skipping frequency for '{}': {}", word, err);
                continue;
            }
        };

        let weight = weight
            .trim()
            .parse::<WordleFloat>()
            .map_err(|source| LoadDataErr::BadFloat { line: line.clone(), source })?;
        out.insert(word, weight);
    }

    if out.is_empty() {
        return Err(LoadDataErr::Empty);
    }

    log::debug!("read {} word frequencies", out.len());
    Ok(out)
}

/// Opens `path` and reads it with read_word_freq
pub fn read_word_freq_file<P: AsRef<Path>>(path: P) -> Result<HashMap<Word, WordleFloat>, LoadDataErr> {
    let path = path.as_ref();
    log::debug!("reading word frequencies from {}", path.display());
    read_word_freq(BufReader::new(File::open(path)?))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_case::test_case;

    fn read(text: &str) -> Result<WordList, LoadDataErr> {
        read_word_list(Cursor::new(text), skip_bad_words)
    }

    #[test]
    fn test_read_word_list() {
        let words = read("# a comment\ncigar\n\n  REBUT  \nsissy # trailing comment\n").unwrap();
        assert_eq!(words.to_vec(), vec![mkw("cigar"), mkw("rebut"), mkw("sissy")]);
    }

    #[test]
    fn test_read_word_list_drops_duplicates() {
        let words = read("cigar\nrebut\nCigar\ncigar\nsissy\nrebut").unwrap();
        assert_eq!(words.to_vec(), vec![mkw("cigar"), mkw("rebut"), mkw("sissy")]);
    }

    #[test]
    fn test_bad_lines_go_to_handler() {
        let mut bad = Vec::new();
        let words = read_word_list(
            Cursor::new("cigar\n# comment\n\nyuk\nrebut\nab de\n"),
            |line, lineno, _| {
                bad.push((line.to_string(), lineno));
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(words.len(), 2);
        // line numbers count comments and blank lines too
        assert_eq!(bad, vec![("yuk".to_string(), 4), ("ab de".to_string(), 6)]);
    }

    #[test]
    fn test_reject_bad_words() {
        let err = read_word_list(Cursor::new("cigar\nrebut\ntoolong\n"), reject_bad_words).unwrap_err();
        match err {
            LoadDataErr::Rejected { word, lineno, source } => {
                assert_eq!(word, "toolong");
                assert_eq!(lineno, 3);
                assert_eq!(source, ParseErr::BadWordLength("toolong".to_string()));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test_case(""; "no lines")]
    #[test_case("# only a comment\n\n"; "comments")]
    #[test_case("yuk\nab de\n"; "only bad words")]
    fn test_empty_word_list(text: &str) {
        assert!(matches!(read(text), Err(LoadDataErr::Empty)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_word_file("/this/path/does/not/exist", skip_bad_words).unwrap_err();
        assert!(matches!(err, LoadDataErr::Io(_)));
    }

    #[test]
    fn test_read_word_freq() {
        let freq = read_word_freq(Cursor::new("cigar,1.5\nREBUT, 0.25\nto,7\n\nsissy,3e-2\n")).unwrap();
        assert_eq!(freq.len(), 3);
        assert_eq!(freq[&mkw("cigar")], 1.5);
        assert_eq!(freq[&mkw("rebut")], 0.25);
        assert_eq!(freq[&mkw("sissy")], 0.03);
    }

    #[test]
    fn test_read_word_freq_bad_weight() {
        let err = read_word_freq(Cursor::new("cigar,1.5\nrebut,lots\n")).unwrap_err();
        match err {
            LoadDataErr::BadFloat { line, .. } => assert_eq!(line, "rebut,lots"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_read_word_freq_bad_line() {
        let err = read_word_freq(Cursor::new("cigar 1.5\n")).unwrap_err();
        assert!(matches!(err, LoadDataErr::BadLine(line) if line == "cigar 1.5"));
    }
}
