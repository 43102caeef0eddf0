// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lexical overlap accuracy
//!
//! Both sides are case-folded and tokenized with UAX #29 word
//! segmentation, which also splits CJK text into per-ideograph tokens, then
//! scored as Jaccard similarity over the two token sets:
//! `|intersection| / |union|`. A pair with an empty tokenization on either
//! side scores 0.0.

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenize text into case-folded Unicode words
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(str::to_string)
        .collect()
}

/// Jaccard set-overlap score between a reference and a generated answer
pub fn overlap_accuracy(reference: &str, generated: &str) -> f64 {
    let reference_tokens: HashSet<String> = tokenize(reference).into_iter().collect();
    let generated_tokens: HashSet<String> = tokenize(generated).into_iter().collect();

    if reference_tokens.is_empty() || generated_tokens.is_empty() {
        return 0.0;
    }

    let intersection = reference_tokens.intersection(&generated_tokens).count();
    let union = reference_tokens.union(&generated_tokens).count();
    intersection as f64 / union as f64
}

/// Score every reference/generated pair, index-aligned with the inputs
pub fn score_all(references: &[String], generated: &[String]) -> Vec<f64> {
    references
        .iter()
        .zip(generated)
        .map(|(reference, answer)| overlap_accuracy(reference, answer))
        .collect()
}
