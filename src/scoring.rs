//! Scoring logic for computing the confidence index.
//!
//! [`calculate`] is a pure function: it reads only its input, never fails and
//! can be called from any number of handlers at once.
//!
//! Scoring runs in two phases. First every answered field is looked up in
//! [`crate::rules::RULES`] and its deltas are summed into five accumulators,
//! all starting at [`BASELINE`]. Intermediate totals may leave 0-100. Then
//! the totals are clamped once and every other output is derived from the
//! clamped overall score.

use crate::model::{
    Bracket, Category, CategoryScores, ConfidenceIndexResult, QuizAnswers, QuizField, Timeline,
    UrgencyLevel,
};
use crate::rules::{self, Advice, FALLBACK_ADVICE, MAINTENANCE_ADVICE, MAINTENANCE_THRESHOLD, Rule};

/// Neutral starting value of every accumulator.
pub const BASELINE: i32 = 50;

/// Maximum number of issues reported in `topIssues`.
const MAX_TOP_ISSUES: usize = 3;

/// Score gain per horizon at an improvement rate of 1.0 (14, 30, 60, 90 days).
const TIMELINE_GAINS: [f64; 4] = [10.0, 18.0, 30.0, 40.0];

/// Piecewise-linear percentile curve as `(score_start, percentile_start, slope)`.
///
/// Each band covers 20 score points. The middle band is the steepest, so a
/// small change around the average moves the percentile the most.
const PERCENTILE_BANDS: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 0.5),
    (20.0, 10.0, 1.0),
    (40.0, 30.0, 2.0),
    (60.0, 70.0, 1.0),
    (80.0, 90.0, 0.45),
];

/// Percentile offsets for the extreme age brackets.
const AGE_PERCENTILE_OFFSETS: [(&str, i32); 2] = [("25-35", 5), ("56+", -5)];

/// An unhealthy answer recorded while scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Issue {
    description: &'static str,
    severity: u8,
}

/// Running totals while the rule table is folded over the answers.
#[derive(Debug, Clone)]
struct Tally {
    score: i32,
    lifestyle: i32,
    physical: i32,
    sexual: i32,
    mental: i32,
    issues: Vec<Issue>,
    advice: Vec<Advice>,
}

impl Tally {
    fn baseline() -> Self {
        Self {
            score: BASELINE,
            lifestyle: BASELINE,
            physical: BASELINE,
            sexual: BASELINE,
            mental: BASELINE,
            issues: Vec::new(),
            advice: Vec::new(),
        }
    }

    fn apply(mut self, rule: &Rule) -> Self {
        self.score += rule.global;
        self.lifestyle += rule.category_delta(Category::Lifestyle);
        self.physical += rule.category_delta(Category::Physical);
        self.sexual += rule.category_delta(Category::Sexual);
        self.mental += rule.category_delta(Category::Mental);

        if let Some(description) = rule.issue {
            self.issues.push(Issue {
                description,
                severity: rule.severity(),
            });
        }
        if let Some(advice) = rule.advice {
            self.advice.push(advice);
        }

        self
    }
}

/// Compute the confidence index for one set of quiz answers.
///
/// Fields are applied in [`QuizField::SCORED`] order. Missing fields and
/// values the rule table does not know add nothing.
///
/// # Returns
///
/// A [`ConfidenceIndexResult`] whose scores are all within 0-100, whose
/// percentile is within 1-99, and whose level, testosterone estimate and
/// urgency come from the same score bracket.
pub fn calculate(answers: &QuizAnswers) -> ConfidenceIndexResult {
    let tally = QuizField::SCORED
        .iter()
        .filter_map(|field| {
            answers
                .get(*field)
                .and_then(|value| rules::lookup(*field, value))
        })
        .fold(Tally::baseline(), Tally::apply);

    let score = clamp_score(tally.score);
    let category_scores = CategoryScores {
        lifestyle: clamp_score(tally.lifestyle),
        physical: clamp_score(tally.physical),
        sexual: clamp_score(tally.sexual),
        mental: clamp_score(tally.mental),
    };

    let bracket = Bracket::for_score(score);

    ConfidenceIndexResult {
        score,
        category_scores,
        level: bracket.level,
        testosterone_estimate: bracket.testosterone,
        urgency_level: bracket.urgency,
        percentile: percentile(score, answers.get(QuizField::Age)),
        timeline: project_timeline(score, bracket.urgency),
        top_issues: top_issues(tally.issues),
        recommendations: recommendations(&tally.advice, score),
    }
}

/// Clamp an accumulator to 0-100.
fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Estimate the percentile for a clamped score and optional age bracket.
fn percentile(score: u8, age: Option<&str>) -> u8 {
    let score = f64::from(score);
    let (start, base, slope) = PERCENTILE_BANDS
        .iter()
        .rev()
        .copied()
        .find(|(start, _, _)| score >= *start)
        .unwrap_or(PERCENTILE_BANDS[0]);

    let raw = (base + (score - start) * slope).round() as i32;
    let offset = age
        .and_then(|age| {
            AGE_PERCENTILE_OFFSETS
                .iter()
                .find(|(bracket, _)| *bracket == age)
                .map(|(_, offset)| *offset)
        })
        .unwrap_or(0);

    (raw + offset).clamp(1, 99) as u8
}

/// Project the score forward at the four horizons.
fn project_timeline(score: u8, urgency: UrgencyLevel) -> Timeline {
    let rate = urgency.improvement_rate();
    let [day14, day30, day60, day90] = TIMELINE_GAINS
        .map(|gain| (f64::from(score) + gain * rate).round().min(100.0) as u8);

    Timeline {
        day14,
        day30,
        day60,
        day90,
    }
}

/// Most severe issues first; equal severities keep collection order.
fn top_issues(mut issues: Vec<Issue>) -> Vec<String> {
    // sort_by is stable
    issues.sort_by(|a, b| b.severity.cmp(&a.severity));
    issues
        .into_iter()
        .take(MAX_TOP_ISSUES)
        .map(|issue| issue.description.to_string())
        .collect()
}

fn recommendations(advice: &[Advice], score: u8) -> Vec<String> {
    let mut recommendations: Vec<String> =
        advice.iter().map(|a| a.text().to_string()).collect();

    if score >= MAINTENANCE_THRESHOLD {
        recommendations.extend(MAINTENANCE_ADVICE.iter().map(|s| s.to_string()));
    }

    if recommendations.is_empty() {
        recommendations.push(FALLBACK_ADVICE.to_string());
    }

    recommendations
}
