// src/scoring.rs
//! Additive scoring from a declarative rule list.
//!
//! Each rule contributes `weight * measure(pair)`. Predicates measure 1.0 or
//! 0.0, counting rules measure a count, similarity rules measure a ratio.

/// One weighted rule evaluated against a pair of records.
pub struct Rule<P> {
    pub name: &'static str,
    pub weight: f64,
    pub measure: fn(&P) -> f64,
    /// Human-readable reason, given the pair and the measured value.
    pub describe: fn(&P, f64) -> String,
}

/// Points earned by one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub rule: &'static str,
    pub points: f64,
    pub reason: String,
}

/// Outcome of evaluating a rule list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Score {
    pub total: f64,
    pub contributions: Vec<Contribution>,
}

impl Score {
    /// Reasons of all contributing rules, in rule order.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.contributions.iter().map(|c| c.reason.clone()).collect()
    }
}

/// Evaluates every rule in order. Rules that contribute nothing are omitted
/// from the contribution list.
#[must_use]
pub fn evaluate<P>(rules: &[Rule<P>], pair: &P) -> Score {
    let mut score = Score::default();
    for rule in rules {
        let measured = (rule.measure)(pair);
        let points = rule.weight * measured;
        if points > 0.0 {
            score.total += points;
            score.contributions.push(Contribution {
                rule: rule.name,
                points,
                reason: (rule.describe)(pair, measured),
            });
        }
    }
    score
}

/// Predicate measure.
#[must_use]
pub fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Count measure.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn count(n: usize) -> f64 {
    n as f64
}

/// Sorts `(key, score)` pairs by score descending, then key ascending, so equal
/// scores always come out in the same order.
pub fn rank_by_score<T, K: Ord>(items: &mut [T], score: impl Fn(&T) -> f64, key: impl Fn(&T) -> K) {
    items.sort_by(|a, b| {
        score(b)
            .total_cmp(&score(a))
            .then_with(|| key(a).cmp(&key(b)))
    });
}
