//! Lexical overlap metrics (ROUGE-1 and ROUGE-L).

use std::collections::HashMap;

use raglens_core::types::RougeScores;

use crate::rounding::round_f32;

/// Compute ROUGE-1 and ROUGE-L F-measures of `hypothesis` against
/// `reference`, each rounded to 3 decimals.
///
/// Tokenization lowercases and keeps alphanumeric word characters only.
/// ROUGE-1 counts clipped unigram overlap; ROUGE-L uses the longest common
/// subsequence of the token sequences.
#[must_use]
pub fn compute_rouge(reference: &str, hypothesis: &str) -> RougeScores {
    let reference_tokens = tokenize(reference);
    let hypothesis_tokens = tokenize(hypothesis);

    let unigram_matches = clipped_unigram_matches(&reference_tokens, &hypothesis_tokens);
    let lcs = lcs_length(&reference_tokens, &hypothesis_tokens);

    RougeScores {
        rouge1: round_f32(
            f_measure(unigram_matches, reference_tokens.len(), hypothesis_tokens.len()),
            3,
        ),
        rouge_l: round_f32(
            f_measure(lcs, reference_tokens.len(), hypothesis_tokens.len()),
            3,
        ),
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn clipped_unigram_matches(reference: &[String], hypothesis: &[String]) -> usize {
    let mut reference_counts: HashMap<&str, usize> = HashMap::new();
    for token in reference {
        *reference_counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut matches = 0;
    for token in hypothesis {
        if let Some(count) = reference_counts.get_mut(token.as_str()) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }
    matches
}

fn lcs_length(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // One-row DP over the shorter-dimension table.
    let mut previous = vec![0_usize; b.len() + 1];
    let mut current = vec![0_usize; b.len() + 1];

    for token_a in a {
        for (j, token_b) in b.iter().enumerate() {
            current[j + 1] = if token_a == token_b {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[allow(clippy::cast_precision_loss)]
fn f_measure(matches: usize, reference_len: usize, hypothesis_len: usize) -> f32 {
    if matches == 0 || reference_len == 0 || hypothesis_len == 0 {
        return 0.0;
    }

    let precision = matches as f32 / hypothesis_len as f32;
    let recall = matches as f32 / reference_len as f32;
    2.0 * precision * recall / (precision + recall)
}
