use speechscore_rs::{
    AssessmentContext, AssessmentInput, ErrorType, Interaction, ItemRarity, MatchType,
    PronunciationAssessorBuilder, ProviderScores, Rating, ScoringConfig, WordFeedbackItem,
    WordToken,
};

const EPS: f64 = 1e-9;

fn token(text: &str, confidence: f32, start_time: f64, end_time: f64) -> WordToken {
    WordToken {
        text: text.to_string(),
        confidence,
        start_time,
        end_time,
    }
}

fn context(
    complexity: u8,
    item_rarity: ItemRarity,
    interaction: Interaction,
    was_revealed: bool,
) -> AssessmentContext {
    AssessmentContext {
        complexity,
        item_rarity,
        interaction,
        was_revealed,
    }
}

fn assess(input: &AssessmentInput) -> speechscore_rs::AssessmentOutput {
    PronunciationAssessorBuilder::new(ScoringConfig::default())
        .build()
        .expect("default config builds")
        .assess(input)
        .expect("assessment succeeds")
}

fn provider_with(pronunciation_score: f64, words: Vec<WordFeedbackItem>) -> ProviderScores {
    ProviderScores {
        pronunciation_score,
        accuracy_score: pronunciation_score,
        fluency_score: 90.0,
        completeness_score: 100.0,
        words,
    }
}

#[test]
fn greeting_scores_full_attack_damage() {
    // 95 pronunciation, tier 3, regular item: 50 * (1 + 0.60 + 0.30) = 95.
    let input = AssessmentInput {
        reference_text: "สวัสดี ครับ".to_string(),
        hypothesis: vec![token("สวัสดี", 0.9, 0.0, 0.5), token("ครับ", 0.95, 0.5, 0.9)],
        provider_scores: Some(provider_with(95.0, vec![])),
        context: context(3, ItemRarity::Regular, Interaction::Attack, false),
    };
    let output = assess(&input);

    assert_eq!(output.rating, Rating::Excellent);
    assert!((output.attack_damage - 95.0).abs() < EPS);
    assert_eq!(output.comparisons.len(), 2);
    assert!(output
        .comparisons
        .iter()
        .all(|c| c.match_type == MatchType::Exact && c.similarity == 1.0));
}

#[test]
fn special_item_boosts_base_damage() {
    let input = AssessmentInput {
        reference_text: "สวัสดี ครับ".to_string(),
        hypothesis: vec![token("สวัสดี", 0.9, 0.0, 0.5), token("ครับ", 0.95, 0.5, 0.9)],
        provider_scores: Some(provider_with(95.0, vec![])),
        context: context(3, ItemRarity::Special, Interaction::Attack, false),
    };
    let output = assess(&input);
    assert!((output.attack_damage - 114.0).abs() < EPS);
}

#[test]
fn special_item_defense_discount_and_reveal_swing() {
    let hidden = AssessmentInput {
        reference_text: "สวัสดี".to_string(),
        hypothesis: vec![token("สวัสดี", 0.9, 0.0, 0.5)],
        provider_scores: Some(provider_with(95.0, vec![])),
        context: context(3, ItemRarity::Special, Interaction::Defense, false),
    };
    let output = assess(&hidden);
    assert!((output.defense_multiplier - 0.20).abs() < EPS);

    let revealed = AssessmentInput {
        context: context(3, ItemRarity::Special, Interaction::Defense, true),
        ..hidden
    };
    let output = assess(&revealed);
    assert!((output.defense_multiplier - 0.40).abs() < EPS);
    assert!((output.calculation_breakdown.defense_reveal_penalty - 0.20).abs() < EPS);
}

#[test]
fn near_miss_is_classified_and_coached() {
    // "ไม" for "ไหม": one character short, lands in the Partial band.
    let input = AssessmentInput {
        reference_text: "ไหม".to_string(),
        hypothesis: vec![token("ไม", 0.8, 0.0, 0.4)],
        provider_scores: None,
        context: context(2, ItemRarity::Regular, Interaction::Attack, false),
    };
    let output = assess(&input);

    assert_eq!(output.comparisons.len(), 1);
    assert_eq!(output.comparisons[0].match_type, MatchType::Partial);
    // Synthesized pronunciation: similarity 2/3 as a percentage.
    assert!((output.pronunciation_score - 200.0 / 3.0).abs() < 1e-4);
    assert_eq!(output.rating, Rating::Okay);
    assert_eq!(
        output.detailed_feedback[0].error_type,
        ErrorType::Mispronunciation
    );
    // 66.67 accuracy lands in the tone/vowel hint band.
    assert!(output.word_feedback.contains("tone and vowel length"));
}

#[test]
fn dropped_word_leads_the_comparison_list() {
    let input = AssessmentInput {
        reference_text: "หนึ่ง สอง สาม".to_string(),
        hypothesis: vec![token("หนึ่ง", 0.9, 0.1, 0.3), token("สาม", 0.85, 0.6, 0.9)],
        provider_scores: None,
        context: context(1, ItemRarity::Regular, Interaction::Attack, false),
    };
    let output = assess(&input);

    assert_eq!(output.comparisons.len(), 3);
    assert_eq!(output.comparisons[0].match_type, MatchType::Missing);
    assert_eq!(output.comparisons[0].expected, "สอง");
    assert!((output.completeness_score - 200.0 / 3.0).abs() < 1e-4);
}

#[test]
fn no_reference_mode_passes_recognizer_output_through() {
    let input = AssessmentInput {
        reference_text: String::new(),
        hypothesis: vec![token("อะไร", 0.7, 0.0, 0.4), token("นะ", 0.9, 0.4, 0.6)],
        provider_scores: None,
        context: context(1, ItemRarity::Regular, Interaction::Attack, false),
    };
    let output = assess(&input);

    assert!(output
        .comparisons
        .iter()
        .all(|c| c.match_type == MatchType::NoReference && c.expected.is_empty()));
    assert!((output.completeness_score - 100.0).abs() < EPS);
}

#[test]
fn complexity_changes_nothing_below_the_gate() {
    let base = AssessmentInput {
        reference_text: "สวัสดี".to_string(),
        hypothesis: vec![token("สวัสดี", 0.9, 0.0, 0.5)],
        provider_scores: Some(provider_with(45.0, vec![])),
        context: context(1, ItemRarity::Regular, Interaction::Attack, false),
    };
    let tier1 = assess(&base);
    let tier5 = assess(&AssessmentInput {
        context: context(5, ItemRarity::Regular, Interaction::Attack, false),
        ..base
    });

    assert_eq!(tier1.attack_damage, tier5.attack_damage);
    assert_eq!(tier1.defense_multiplier, tier5.defense_multiplier);
}

#[test]
fn provider_word_details_drive_the_coaching_text() {
    let words = vec![
        WordFeedbackItem {
            word: "สวัสดี".to_string(),
            accuracy_score: 45.0,
            error_type: ErrorType::Mispronunciation,
            transliteration: "sawatdee".to_string(),
        },
        WordFeedbackItem {
            word: "ครับ".to_string(),
            accuracy_score: 92.0,
            error_type: ErrorType::None,
            transliteration: "krap".to_string(),
        },
    ];
    let input = AssessmentInput {
        reference_text: "สวัสดี ครับ".to_string(),
        hypothesis: vec![token("สวัสดี", 0.6, 0.0, 0.5), token("ครับ", 0.95, 0.5, 0.9)],
        provider_scores: Some(provider_with(68.0, words)),
        context: context(2, ItemRarity::Regular, Interaction::Attack, false),
    };
    let output = assess(&input);

    assert!(output.word_feedback.starts_with("Good foundation"));
    assert!(output.word_feedback.contains("(sawatdee)"));
    assert!(output.word_feedback.contains("break it into syllables"));
    assert!(output.word_feedback.contains("Your best word was \"ครับ\""));
}

#[test]
fn breakdown_survives_serialization() {
    let input = AssessmentInput {
        reference_text: "สวัสดี".to_string(),
        hypothesis: vec![token("สวัสดี", 0.9, 0.0, 0.5)],
        provider_scores: Some(provider_with(95.0, vec![])),
        context: context(3, ItemRarity::Regular, Interaction::Defense, false),
    };
    let output = assess(&input);

    let json = serde_json::to_value(&output).expect("output serializes");
    assert_eq!(json["rating"], "Excellent");
    assert_eq!(json["comparisons"][0]["match_type"], "exact");
    let breakdown = &json["calculation_breakdown"];
    assert!(breakdown["attack_formula"].is_string());
    assert!((breakdown["defense_multiplier_raw"].as_f64().unwrap() - 0.40).abs() < EPS);
}

#[test]
fn bounds_hold_end_to_end() {
    for score in [0.0, 59.9, 60.0, 75.0, 90.0, 100.0] {
        for complexity in 1..=5u8 {
            for rarity in [ItemRarity::Regular, ItemRarity::Special] {
                for revealed in [false, true] {
                    let input = AssessmentInput {
                        reference_text: "สวัสดี".to_string(),
                        hypothesis: vec![token("สวัสดี", 0.9, 0.0, 0.5)],
                        provider_scores: Some(provider_with(score, vec![])),
                        context: context(complexity, rarity, Interaction::Defense, revealed),
                    };
                    let output = assess(&input);
                    assert!(output.attack_damage >= 0.0);
                    assert!((0.10..=1.00).contains(&output.defense_multiplier));
                }
            }
        }
    }
}
