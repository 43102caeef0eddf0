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

//! Flesch–Kincaid readability grade
//!
//! `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`,
//! computed per text independently. Sentences and words come from UAX #29
//! segmentation; syllables from a vowel-group heuristic with silent-e
//! handling. Simple short prose grades low (can go negative, like the
//! standard formula); dense multi-clause prose grades high. Empty text
//! scores 0.0.

use unicode_segmentation::UnicodeSegmentation;

/// Grade-level estimate for one text
pub fn readability_grade(text: &str) -> f64 {
    let words: Vec<&str> = text.unicode_words().collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = text
        .unicode_sentences()
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();

    0.39 * (words.len() as f64 / sentences as f64)
        + 11.8 * (syllables as f64 / words.len() as f64)
        - 15.59
}

/// Score every text, index-aligned with the input
pub fn score_all(texts: &[String]) -> Vec<f64> {
    texts.iter().map(|text| readability_grade(text)).collect()
}

fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in lower.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    // trailing silent e ("make"), but not "-le" ("table")
    if lower.ends_with('e') && !lower.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables() {
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("window"), 2);
        assert_eq!(syllable_count("make"), 1);
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("banana"), 3);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(readability_grade(""), 0.0);
        assert_eq!(readability_grade("   "), 0.0);
    }

    #[test]
    fn test_simple_sentence_grades_low() {
        // 6 one-syllable words, one sentence
        let grade = readability_grade("The cat sat on the mat.");
        assert!(grade < 3.0, "expected low grade, got {grade}");
    }

    #[test]
    fn test_monotonic_with_complexity() {
        let simple = readability_grade("The cat sat on the mat.");
        let dense = readability_grade(
            "Notwithstanding the considerable institutional complexities, the \
             multidisciplinary committee deliberated extensively regarding \
             appropriate pharmacological interventions.",
        );
        assert!(
            dense > simple,
            "expected {dense} to exceed {simple}"
        );
    }

    #[test]
    fn test_multiple_sentences_lower_than_one_run_on() {
        // same words, more sentence breaks -> lower words-per-sentence term
        let broken = readability_grade("The cat sat. The dog ran. The bird flew.");
        let run_on = readability_grade("The cat sat and the dog ran and the bird flew.");
        assert!(run_on > broken);
    }

    #[test]
    fn test_score_all_aligned() {
        let texts = vec!["The cat sat.".to_string(), String::new()];
        let scores = score_all(&texts);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[1], 0.0);
    }
}
