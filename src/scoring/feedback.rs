use std::cmp::Ordering;

use crate::types::WordFeedbackItem;

const SYLLABLE_HINT_THRESHOLD: f64 = 50.0;
const TONE_HINT_THRESHOLD: f64 = 70.0;
const CONGRATS_EXCELLENT_THRESHOLD: f64 = 90.0;
const HEADLINE_ALMOST_THRESHOLD: f64 = 75.0;
const HEADLINE_FOUNDATION_THRESHOLD: f64 = 60.0;

/// Build the prioritized coaching text for one assessment.
///
/// The input order is never mutated; ranking happens on a copy so callers
/// can still display words in spoken order. Always returns a non-empty
/// string, even for an empty word list.
pub fn compose_feedback(
    words: &[WordFeedbackItem],
    aggregate_score: f64,
    focus_accuracy_threshold: f64,
    max_focus_words: usize,
) -> String {
    let mut ranked: Vec<&WordFeedbackItem> = words.iter().collect();
    ranked.sort_by(|a, b| {
        a.accuracy_score
            .partial_cmp(&b.accuracy_score)
            .unwrap_or(Ordering::Equal)
    });

    let focus: Vec<&WordFeedbackItem> = ranked
        .iter()
        .copied()
        .filter(|w| w.accuracy_score < focus_accuracy_threshold)
        .take(max_focus_words)
        .collect();

    if focus.is_empty() {
        return if aggregate_score >= CONGRATS_EXCELLENT_THRESHOLD {
            "Excellent pronunciation! Every word came through clearly.".to_string()
        } else {
            "Great job! All words sounded good.".to_string()
        };
    }

    let mut lines = Vec::with_capacity(focus.len() + 3);
    lines.push(headline(aggregate_score).to_string());
    for word in &focus {
        lines.push(focus_word_line(word));
    }
    lines.push(technique_tip(aggregate_score).to_string());

    // Words above the focus threshold earn a callout for the single best.
    if let Some(best) = ranked
        .iter()
        .copied()
        .filter(|w| w.accuracy_score >= focus_accuracy_threshold)
        .max_by(|a, b| {
            a.accuracy_score
                .partial_cmp(&b.accuracy_score)
                .unwrap_or(Ordering::Equal)
        })
    {
        lines.push(format!(
            "Your best word was \"{}\" at {:.0}. Keep that up!",
            best.word, best.accuracy_score
        ));
    }

    lines.join("\n")
}

fn headline(aggregate_score: f64) -> &'static str {
    if aggregate_score >= HEADLINE_ALMOST_THRESHOLD {
        "Almost there! A few words could use some polish:"
    } else if aggregate_score >= HEADLINE_FOUNDATION_THRESHOLD {
        "Good foundation. Let's refine these words:"
    } else {
        "Let's work on the basics. Start with these words:"
    }
}

fn focus_word_line(word: &WordFeedbackItem) -> String {
    let hint = if word.accuracy_score < SYLLABLE_HINT_THRESHOLD {
        "break it into syllables and practice each part slowly"
    } else if word.accuracy_score < TONE_HINT_THRESHOLD {
        "focus on the tone and vowel length"
    } else {
        "polish the final sounds"
    };
    if word.transliteration.is_empty() {
        format!("\"{}\": {hint}.", word.word)
    } else {
        format!("\"{}\" ({}): {hint}.", word.word, word.transliteration)
    }
}

fn technique_tip(aggregate_score: f64) -> &'static str {
    if aggregate_score >= HEADLINE_ALMOST_THRESHOLD {
        "Tip: record yourself and compare with a native speaker to catch the last details."
    } else if aggregate_score >= HEADLINE_FOUNDATION_THRESHOLD {
        "Tip: exaggerate the tones while practicing; it trains your ear faster."
    } else {
        "Tip: slow down and say each syllable clearly before building up speed."
    }
}
