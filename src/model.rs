//! Data models for the confidence index.
//!
//! # Shape
//!
//! [`QuizAnswers`] is the flat, all-optional record posted by the quiz form.
//! [`ConfidenceIndexResult`] is the value computed from it. Both are plain
//! data; the mapping between them lives in [`crate::scoring`].
//!
//! JSON keys follow the quiz form exactly (`work-stress`, `firstName`,
//! `categoryScores`, ...), and the level labels serialize as the Bulgarian
//! strings shown to the end user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One quiz field that can influence the score.
///
/// The declaration order of [`QuizField::SCORED`] is the order in which the
/// calculator applies the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizField {
    Age,
    Profession,
    WorkStress,
    Height,
    Weight,
    BodyFat,
    Diet,
    Nicotine,
    Alcohol,
    Sleep,
    SexFrequency,
    Frustration,
    OneChange,
}

impl QuizField {
    /// Every scored field, in evaluation order.
    pub const SCORED: [QuizField; 13] = [
        QuizField::Age,
        QuizField::Profession,
        QuizField::WorkStress,
        QuizField::Height,
        QuizField::Weight,
        QuizField::BodyFat,
        QuizField::Diet,
        QuizField::Nicotine,
        QuizField::Alcohol,
        QuizField::Sleep,
        QuizField::SexFrequency,
        QuizField::Frustration,
        QuizField::OneChange,
    ];

    /// The JSON key used by the quiz form.
    pub fn key(&self) -> &'static str {
        match self {
            QuizField::Age => "age",
            QuizField::Profession => "profession",
            QuizField::WorkStress => "work-stress",
            QuizField::Height => "height",
            QuizField::Weight => "weight",
            QuizField::BodyFat => "body-fat",
            QuizField::Diet => "diet",
            QuizField::Nicotine => "nicotine",
            QuizField::Alcohol => "alcohol",
            QuizField::Sleep => "sleep",
            QuizField::SexFrequency => "sex-frequency",
            QuizField::Frustration => "frustration",
            QuizField::OneChange => "one-change",
        }
    }
}

/// Answers submitted by the quiz form.
///
/// Every field holds a single categorical choice and every field is optional.
/// Values the rule table does not know are accepted and simply contribute
/// nothing to the score.
///
/// `first_name` and `email` identify the respondent for the report mail; they
/// are never scored and never logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,

    #[serde(
        rename = "work-stress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub work_stress: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    #[serde(rename = "body-fat", default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nicotine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<String>,

    #[serde(
        rename = "sex-frequency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sex_frequency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frustration: Option<String>,

    #[serde(
        rename = "one-change",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub one_change: Option<String>,

    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl QuizAnswers {
    /// The selected value for a scored field, if one was given.
    pub fn get(&self, field: QuizField) -> Option<&str> {
        let value = match field {
            QuizField::Age => &self.age,
            QuizField::Profession => &self.profession,
            QuizField::WorkStress => &self.work_stress,
            QuizField::Height => &self.height,
            QuizField::Weight => &self.weight,
            QuizField::BodyFat => &self.body_fat,
            QuizField::Diet => &self.diet,
            QuizField::Nicotine => &self.nicotine,
            QuizField::Alcohol => &self.alcohol,
            QuizField::Sleep => &self.sleep,
            QuizField::SexFrequency => &self.sex_frequency,
            QuizField::Frustration => &self.frustration,
            QuizField::OneChange => &self.one_change,
        };
        value.as_deref()
    }

    /// Number of scored fields that carry a value.
    pub fn answered_count(&self) -> usize {
        QuizField::SCORED
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }
}

/// The four sub-scores reported next to the overall index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lifestyle,
    Physical,
    Sexual,
    Mental,
}

/// Overall level of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "критично")]
    Critical,
    #[serde(rename = "ниско")]
    Low,
    #[serde(rename = "средно")]
    Average,
    #[serde(rename = "добро")]
    Good,
    #[serde(rename = "отлично")]
    Excellent,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Critical => "критично",
            Level::Low => "ниско",
            Level::Average => "средно",
            Level::Good => "добро",
            Level::Excellent => "отлично",
        }
    }
}

/// Estimated testosterone status. Always reported together with [`Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TestosteroneEstimate {
    #[serde(rename = "много нисък")]
    VeryLow,
    #[serde(rename = "нисък")]
    Low,
    #[serde(rename = "среден")]
    Average,
    #[serde(rename = "добър")]
    Good,
    #[serde(rename = "отличен")]
    Excellent,
}

impl TestosteroneEstimate {
    pub fn label(&self) -> &'static str {
        match self {
            TestosteroneEstimate::VeryLow => "много нисък",
            TestosteroneEstimate::Low => "нисък",
            TestosteroneEstimate::Average => "среден",
            TestosteroneEstimate::Good => "добър",
            TestosteroneEstimate::Excellent => "отличен",
        }
    }
}

/// How urgently the respondent should act on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "ниска")]
    Low,
    #[serde(rename = "средна")]
    Medium,
    #[serde(rename = "висока")]
    High,
}

impl UrgencyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "ниска",
            UrgencyLevel::Medium => "средна",
            UrgencyLevel::High => "висока",
        }
    }

    /// Multiplier applied to the timeline gains.
    ///
    /// Lower scores have more room to improve, so the projection is steeper.
    pub fn improvement_rate(&self) -> f64 {
        match self {
            UrgencyLevel::High => 1.5,
            UrgencyLevel::Medium => 1.2,
            UrgencyLevel::Low => 1.0,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TestosteroneEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the score bracket table.
///
/// The three labels are stored together so they can never disagree about
/// which bracket a score falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// Lowest score (inclusive) that falls in this bracket.
    pub min_score: u8,
    pub level: Level,
    pub testosterone: TestosteroneEstimate,
    pub urgency: UrgencyLevel,
}

/// Score brackets, highest first.
pub const BRACKETS: [Bracket; 5] = [
    Bracket {
        min_score: 80,
        level: Level::Excellent,
        testosterone: TestosteroneEstimate::Excellent,
        urgency: UrgencyLevel::Low,
    },
    Bracket {
        min_score: 60,
        level: Level::Good,
        testosterone: TestosteroneEstimate::Good,
        urgency: UrgencyLevel::Low,
    },
    Bracket {
        min_score: 40,
        level: Level::Average,
        testosterone: TestosteroneEstimate::Average,
        urgency: UrgencyLevel::Medium,
    },
    Bracket {
        min_score: 20,
        level: Level::Low,
        testosterone: TestosteroneEstimate::Low,
        urgency: UrgencyLevel::High,
    },
    Bracket {
        min_score: 0,
        level: Level::Critical,
        testosterone: TestosteroneEstimate::VeryLow,
        urgency: UrgencyLevel::High,
    },
];

impl Bracket {
    /// Find the bracket for a clamped score.
    ///
    /// # Thresholds
    ///
    /// - `отлично`: score >= 80
    /// - `добро`: 60 <= score < 80
    /// - `средно`: 40 <= score < 60
    /// - `ниско`: 20 <= score < 40
    /// - `критично`: score < 20
    pub fn for_score(score: u8) -> Bracket {
        BRACKETS
            .iter()
            .copied()
            .find(|bracket| score >= bracket.min_score)
            .unwrap_or(BRACKETS[BRACKETS.len() - 1])
    }
}

/// Sub-scores per category, each clamped to 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub lifestyle: u8,
    pub physical: u8,
    pub sexual: u8,
    pub mental: u8,
}

/// Projected index after 14, 30, 60 and 90 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub day14: u8,
    pub day30: u8,
    pub day60: u8,
    pub day90: u8,
}

impl Timeline {
    /// The projections in horizon order.
    pub fn values(&self) -> [u8; 4] {
        [self.day14, self.day30, self.day60, self.day90]
    }
}

/// Result of scoring one set of quiz answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceIndexResult {
    /// Overall index, 0-100, higher is better.
    pub score: u8,

    pub category_scores: CategoryScores,

    pub level: Level,

    pub testosterone_estimate: TestosteroneEstimate,

    pub urgency_level: UrgencyLevel,

    /// Estimated rank against the respondent's age group, 1-99.
    pub percentile: u8,

    pub timeline: Timeline,

    /// Up to three issues, most severe first.
    pub top_issues: Vec<String>,

    /// Specific advice first, then maintenance or fallback advice.
    pub recommendations: Vec<String>,
}
