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

use rand::{seq::index, Rng, RngCore};
use super::{prelude::*, word::*};

///
/// Picks an index at random, where each index is chosen in proportion to weights[idx]^pow.
///
/// This works by building the running (cumulative) sum of the adjusted weights, drawing a uniform
/// value in [0, total), and binary searching for the first running sum which is >= that value.
/// Weights are divided by the largest one before raising them to `pow`, so the biggest adjusted
/// weight is 1 and the sum can't overflow however large `pow` gets.
///
/// `pow` changes how strongly the weights are followed:
///   * pow = 1 samples in proportion to the weights
///   * larger pow approaches always picking the maximum weight
///   * pow = 0 is a uniform pick
///
/// Returns None for empty weights. When the adjusted weights sum to 0 (or the sum isn't finite)
/// every index is equally likely.
///
pub fn weighted_sample(rng: &mut dyn RngCore, pow: WordleFloat, weights: &[WordleFloat]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let max = weights.iter().copied().fold(0.0, WordleFloat::max);
    let scale = if max > 0.0 && max.is_finite() { max } else { 1.0 };

    let mut offsets = Vec::with_capacity(weights.len());
    let mut total: WordleFloat = 0.0;
    for weight in weights {
        total += (weight / scale).powf(pow);
        offsets.push(total);
    }

    if !(total > 0.0 && total.is_finite()) {
        log::trace!("weights sum to {}, picking uniformly among {}", total, weights.len());
        return Some(rng.gen_range(0..weights.len()));
    }

    let choice = rng.gen::<WordleFloat>() * total;
    let idx = offsets.partition_point(|offset| *offset < choice);

    // guards against float rounding leaving choice just above the last offset
    Some(idx.min(weights.len() - 1))
}

///
/// Draws `n` distinct words at random (without replacement). If there are no more than `n` words
/// then all of them are returned, in their original order.
///
pub fn sample_words(rng: &mut dyn RngCore, words: &[Word], n: usize) -> Vec<Word> {
    if words.len() <= n {
        return words.to_vec();
    }

    index::sample(rng, words.len(), n)
        .into_iter()
        .map(|idx| words[idx])
        .collect()
}
