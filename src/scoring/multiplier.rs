use serde::Serialize;

use crate::types::{AssessmentContext, ItemRarity, Rating};

const EXCELLENT_THRESHOLD: f64 = 90.0;
const GOOD_THRESHOLD: f64 = 75.0;
const OKAY_THRESHOLD: f64 = 60.0;
/// Complexity bonuses only reward competent pronunciation.
const COMPLEXITY_GATE_THRESHOLD: f64 = 60.0;
const REVEAL_ATTACK_PENALTY: f64 = 0.20;
const REVEAL_DEFENSE_SWING_CAP: f64 = 0.20;
const BASE_DAMAGE_REGULAR: f64 = 50.0;
const BASE_DAMAGE_SPECIAL: f64 = 60.0;
const DEFENSE_MULTIPLIER_FLOOR: f64 = 0.10;
const DEFENSE_MULTIPLIER_CEILING: f64 = 1.00;
const MIN_COMPLEXITY: u8 = 1;
const MAX_COMPLEXITY: u8 = 5;

/// Every intermediate bonus and penalty behind the final numbers, plus one
/// rendered formula string per interaction. This is the authoritative audit
/// trail; callers display it instead of recomputing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationBreakdown {
    pub base_damage: f64,
    pub attack_pronunciation_bonus: f64,
    pub attack_complexity_bonus: f64,
    pub attack_reveal_penalty: f64,
    pub attack_multiplier: f64,
    pub defense_pronunciation_bonus: f64,
    pub defense_complexity_bonus: f64,
    pub defense_reveal_penalty: f64,
    pub defense_multiplier_raw: f64,
    pub attack_formula: String,
    pub defense_formula: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiplierResult {
    pub rating: Rating,
    pub attack_damage: f64,
    /// Clamped to [0.10, 1.00]; lower means less damage taken.
    pub defense_multiplier: f64,
    pub breakdown: CalculationBreakdown,
}

/// Convert an aggregate pronunciation score plus game context into bounded
/// attack/defense numbers with a full breakdown.
pub fn calculate(pronunciation_score: f64, context: &AssessmentContext) -> MultiplierResult {
    let rating = rating_for(pronunciation_score);

    let attack_pronunciation_bonus = attack_pronunciation_bonus(rating);
    let defense_pronunciation_bonus = defense_pronunciation_bonus(rating, context.item_rarity);

    let complexity = effective_complexity(context.complexity);
    let (attack_complexity_bonus, defense_complexity_bonus) =
        if pronunciation_score >= COMPLEXITY_GATE_THRESHOLD {
            complexity_bonuses(complexity)
        } else {
            (0.0, 0.0)
        };

    let attack_reveal_penalty = if context.was_revealed {
        -REVEAL_ATTACK_PENALTY
    } else {
        0.0
    };
    // Revealing the answer cancels the accumulated defensive discount,
    // capped at a 0.20 swing.
    let defense_reveal_penalty = if context.was_revealed {
        (defense_pronunciation_bonus.abs() + defense_complexity_bonus.abs())
            .min(REVEAL_DEFENSE_SWING_CAP)
    } else {
        0.0
    };

    let base_damage = match context.item_rarity {
        ItemRarity::Special => BASE_DAMAGE_SPECIAL,
        ItemRarity::Regular => BASE_DAMAGE_REGULAR,
    };
    let attack_multiplier =
        1.0 + attack_pronunciation_bonus + attack_complexity_bonus + attack_reveal_penalty;
    let attack_damage = base_damage * attack_multiplier;

    let defense_multiplier_raw =
        1.0 + defense_pronunciation_bonus + defense_complexity_bonus + defense_reveal_penalty;
    let defense_multiplier =
        defense_multiplier_raw.clamp(DEFENSE_MULTIPLIER_FLOOR, DEFENSE_MULTIPLIER_CEILING);

    let attack_formula = format!(
        "{base_damage:.0} x (1.00 {attack_pronunciation_bonus:+.2} pronunciation \
         {attack_complexity_bonus:+.2} complexity {attack_reveal_penalty:+.2} reveal) \
         = {attack_damage:.1} damage"
    );
    let defense_formula = format!(
        "clamp(1.00 {defense_pronunciation_bonus:+.2} pronunciation \
         {defense_complexity_bonus:+.2} complexity {defense_reveal_penalty:+.2} reveal, \
         {DEFENSE_MULTIPLIER_FLOOR:.2}, {DEFENSE_MULTIPLIER_CEILING:.2}) = {defense_multiplier:.2}"
    );

    tracing::debug!(
        score = pronunciation_score,
        ?rating,
        complexity,
        interaction = ?context.interaction,
        revealed = context.was_revealed,
        attack_damage = format!("{attack_damage:.2}"),
        defense_multiplier = format!("{defense_multiplier:.2}"),
        "scoring: computed multipliers"
    );

    MultiplierResult {
        rating,
        attack_damage,
        defense_multiplier,
        breakdown: CalculationBreakdown {
            base_damage,
            attack_pronunciation_bonus,
            attack_complexity_bonus,
            attack_reveal_penalty,
            attack_multiplier,
            defense_pronunciation_bonus,
            defense_complexity_bonus,
            defense_reveal_penalty,
            defense_multiplier_raw,
            attack_formula,
            defense_formula,
        },
    }
}

pub fn rating_for(pronunciation_score: f64) -> Rating {
    if pronunciation_score >= EXCELLENT_THRESHOLD {
        Rating::Excellent
    } else if pronunciation_score >= GOOD_THRESHOLD {
        Rating::Good
    } else if pronunciation_score >= OKAY_THRESHOLD {
        Rating::Okay
    } else {
        Rating::NeedsImprovement
    }
}

fn attack_pronunciation_bonus(rating: Rating) -> f64 {
    match rating {
        Rating::Excellent => 0.60,
        Rating::Good => 0.30,
        Rating::Okay => 0.10,
        Rating::NeedsImprovement => 0.0,
    }
}

fn defense_pronunciation_bonus(rating: Rating, rarity: ItemRarity) -> f64 {
    match (rating, rarity) {
        (Rating::Excellent, ItemRarity::Regular) => -0.50,
        (Rating::Excellent, ItemRarity::Special) => -0.70,
        (Rating::Good, ItemRarity::Regular) => -0.30,
        (Rating::Good, ItemRarity::Special) => -0.50,
        (Rating::Okay, ItemRarity::Regular) => -0.10,
        (Rating::Okay, ItemRarity::Special) => -0.25,
        (Rating::NeedsImprovement, _) => 0.0,
    }
}

fn complexity_bonuses(complexity: u8) -> (f64, f64) {
    match complexity {
        1 => (0.0, 0.0),
        2 => (0.15, -0.05),
        3 => (0.30, -0.10),
        4 => (0.45, -0.15),
        _ => (0.60, -0.20),
    }
}

/// Tiers outside 1..=5 are a caller-side bug; they earn no bonus rather
/// than an arbitrary one.
fn effective_complexity(complexity: u8) -> u8 {
    if (MIN_COMPLEXITY..=MAX_COMPLEXITY).contains(&complexity) {
        complexity
    } else {
        tracing::warn!(
            complexity,
            "scoring: complexity tier outside {MIN_COMPLEXITY}..={MAX_COMPLEXITY}, treating as tier 1"
        );
        MIN_COMPLEXITY
    }
}
