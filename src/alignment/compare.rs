use std::cmp::Ordering;

use crate::alignment::diff::{diff_opcodes, DiffTag};
use crate::types::{MatchType, WordComparison, WordToken};

/// Align a transcribed word sequence against the expected reference words
/// and classify every pair.
///
/// With an empty reference this degrades to pass-through mode: every
/// hypothesis word becomes a `NoReference` comparison whose similarity is
/// the recognizer confidence. Otherwise the opcode chain from the LCS diff
/// drives classification, with `similarity` scoring the ambiguous
/// replace spans against `close_threshold` / `partial_threshold`.
pub fn align_words<F>(
    expected: &[String],
    hypothesis: &[WordToken],
    similarity: F,
    close_threshold: f64,
    partial_threshold: f64,
) -> Vec<WordComparison>
where
    F: Fn(&str, &str) -> f64,
{
    if expected.is_empty() {
        return hypothesis.iter().map(no_reference_comparison).collect();
    }

    let expected_words: Vec<&str> = expected.iter().map(String::as_str).collect();
    let hypothesis_words: Vec<&str> = hypothesis.iter().map(|w| w.text.as_str()).collect();
    let ops = diff_opcodes(&expected_words, &hypothesis_words);

    let mut comparisons = Vec::with_capacity(expected.len().max(hypothesis.len()));
    for op in &ops {
        match op.tag {
            DiffTag::Equal => {
                for (i, j) in op.expected.clone().zip(op.hypothesis.clone()) {
                    comparisons.push(exact_comparison(&hypothesis[j], &expected[i]));
                }
            }
            DiffTag::Replace => {
                // Unequal span lengths pair positionally; the longer side's
                // remainder falls through to Missing/Extra below.
                let paired = op.expected.len().min(op.hypothesis.len());
                for (i, j) in op.expected.clone().zip(op.hypothesis.clone()) {
                    let score = similarity(&hypothesis[j].text, &expected[i]);
                    comparisons.push(scored_comparison(
                        &hypothesis[j],
                        &expected[i],
                        score,
                        close_threshold,
                        partial_threshold,
                    ));
                }
                for i in op.expected.clone().skip(paired) {
                    comparisons.push(missing_comparison(&expected[i]));
                }
                for j in op.hypothesis.clone().skip(paired) {
                    comparisons.push(extra_comparison(&hypothesis[j]));
                }
            }
            DiffTag::Insert => {
                for j in op.hypothesis.clone() {
                    comparisons.push(extra_comparison(&hypothesis[j]));
                }
            }
            DiffTag::Delete => {
                for i in op.expected.clone() {
                    comparisons.push(missing_comparison(&expected[i]));
                }
            }
        }
    }

    // Missing entries carry zero timing, so omissions sort to the front.
    // The sort is stable; ties keep alignment order.
    comparisons.sort_by(|a, b| {
        a.start_time
            .partial_cmp(&b.start_time)
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        expected_words = expected.len(),
        hypothesis_words = hypothesis.len(),
        comparisons = comparisons.len(),
        exact = count_of(&comparisons, MatchType::Exact),
        missing = count_of(&comparisons, MatchType::Missing),
        extra = count_of(&comparisons, MatchType::Extra),
        "alignment: classified word comparisons"
    );

    comparisons
}

fn count_of(comparisons: &[WordComparison], match_type: MatchType) -> usize {
    comparisons
        .iter()
        .filter(|c| c.match_type == match_type)
        .count()
}

fn exact_comparison(token: &WordToken, expected: &str) -> WordComparison {
    WordComparison {
        word: token.text.clone(),
        confidence: token.confidence,
        expected: expected.to_string(),
        match_type: MatchType::Exact,
        similarity: 1.0,
        start_time: token.start_time,
        end_time: token.end_time,
    }
}

fn scored_comparison(
    token: &WordToken,
    expected: &str,
    score: f64,
    close_threshold: f64,
    partial_threshold: f64,
) -> WordComparison {
    let match_type = if score >= close_threshold {
        MatchType::Close
    } else if score >= partial_threshold {
        MatchType::Partial
    } else {
        MatchType::Mismatch
    };
    WordComparison {
        word: token.text.clone(),
        confidence: token.confidence,
        expected: expected.to_string(),
        match_type,
        similarity: score as f32,
        start_time: token.start_time,
        end_time: token.end_time,
    }
}

fn extra_comparison(token: &WordToken) -> WordComparison {
    WordComparison {
        word: token.text.clone(),
        confidence: token.confidence,
        expected: String::new(),
        match_type: MatchType::Extra,
        similarity: token.confidence,
        start_time: token.start_time,
        end_time: token.end_time,
    }
}

fn missing_comparison(expected: &str) -> WordComparison {
    WordComparison {
        word: String::new(),
        confidence: 0.0,
        expected: expected.to_string(),
        match_type: MatchType::Missing,
        similarity: 0.0,
        start_time: 0.0,
        end_time: 0.0,
    }
}

fn no_reference_comparison(token: &WordToken) -> WordComparison {
    WordComparison {
        word: token.text.clone(),
        confidence: token.confidence,
        expected: String::new(),
        match_type: MatchType::NoReference,
        similarity: token.confidence,
        start_time: token.start_time,
        end_time: token.end_time,
    }
}
