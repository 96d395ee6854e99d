//! Rule table for the confidence index.
//!
//! Each quiz answer is looked up as a `(field, value)` pair. A matching
//! [`Rule`] says how much to add to the overall score and to each category,
//! whether the answer counts as an issue, and which advice it triggers.
//!
//! Adding or changing an answer option is a change to [`RULES`] only.
//! `height`, `firstName` and `email` have no rows and are never scored.

use serde::Serialize;

use crate::model::{Category, QuizField};

/// Advice attached to an unhealthy answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    Diet,
    Nicotine,
    Alcohol,
    Sleep,
    BodyFat,
    Weight,
    SexFrequency,
    WorkStress,
    Frustration,
}

impl Advice {
    pub fn text(&self) -> &'static str {
        match self {
            Advice::Diet => {
                "Подобрете храненето: повече протеин, зеленчуци и здравословни мазнини, по-малко захар и преработени храни."
            }
            Advice::Nicotine => {
                "Намалете или спрете никотина: той влошава кръвообращението и понижава тестостерона."
            }
            Advice::Alcohol => {
                "Ограничете алкохола: редовната употреба потиска производството на тестостерон."
            }
            Advice::Sleep => {
                "Осигурете си 7-8 часа качествен сън: по-голямата част от тестостерона се произвежда по време на сън."
            }
            Advice::BodyFat => {
                "Намалете подкожните мазнини със силови тренировки и калориен дефицит: мастната тъкан превръща тестостерона в естроген."
            }
            Advice::Weight => {
                "Работете за здравословно тегло: всеки свален килограм подобрява хормоналния баланс."
            }
            Advice::SexFrequency => {
                "Възстановете интимния живот постепенно: редовната сексуална активност поддържа либидото."
            }
            Advice::WorkStress => {
                "Управлявайте стреса: кортизолът е пряк антагонист на тестостерона. Опитайте дихателни упражнения и разходки."
            }
            Advice::Frustration => {
                "Говорете открито с партньорката си и подкрепете организма с натурални съставки за мъжко здраве."
            }
        }
    }
}

/// Appended when the overall score is at least [`MAINTENANCE_THRESHOLD`].
pub const MAINTENANCE_ADVICE: [&str; 2] = [
    "Поддържайте настоящия си начин на живот: резултатите Ви са над средното.",
    "Продължете с редовни тренировки и профилактични прегледи, за да запазите формата си.",
];

pub const MAINTENANCE_THRESHOLD: u8 = 70;

/// Used when no other advice applies.
pub const FALLBACK_ADVICE: &str =
    "Следете съня, храненето и движението си и повторете теста след 30 дни.";

/// One `(field, value)` row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: QuizField,
    pub value: &'static str,
    pub global: i32,
    pub lifestyle: i32,
    pub physical: i32,
    pub sexual: i32,
    pub mental: i32,
    pub issue: Option<&'static str>,
    pub advice: Option<Advice>,
}

impl Rule {
    const fn new(field: QuizField, value: &'static str, global: i32) -> Self {
        Self {
            field,
            value,
            global,
            lifestyle: 0,
            physical: 0,
            sexual: 0,
            mental: 0,
            issue: None,
            advice: None,
        }
    }

    const fn lifestyle(mut self, delta: i32) -> Self {
        self.lifestyle = delta;
        self
    }

    const fn physical(mut self, delta: i32) -> Self {
        self.physical = delta;
        self
    }

    const fn sexual(mut self, delta: i32) -> Self {
        self.sexual = delta;
        self
    }

    const fn mental(mut self, delta: i32) -> Self {
        self.mental = delta;
        self
    }

    const fn issue(mut self, description: &'static str) -> Self {
        self.issue = Some(description);
        self
    }

    const fn advice(mut self, advice: Advice) -> Self {
        self.advice = Some(advice);
        self
    }

    /// Delta this rule applies to one category.
    pub fn category_delta(&self, category: Category) -> i32 {
        match category {
            Category::Lifestyle => self.lifestyle,
            Category::Physical => self.physical,
            Category::Sexual => self.sexual,
            Category::Mental => self.mental,
        }
    }

    /// Severity used to rank this rule's issue.
    ///
    /// Equal to the largest penalty the rule applies to any accumulator, so a
    /// higher-ranked issue is always one that cost more points somewhere.
    pub fn severity(&self) -> u8 {
        [
            self.global,
            self.lifestyle,
            self.physical,
            self.sexual,
            self.mental,
        ]
        .into_iter()
        .filter(|delta| *delta < 0)
        .map(i32::unsigned_abs)
        .max()
        .map_or(0, |penalty| penalty.min(u32::from(u8::MAX)) as u8)
    }
}

use self::Advice as A;
use crate::model::QuizField as F;

/// The full rule table, grouped by field in evaluation order.
pub const RULES: &[Rule] = &[
    // Age
    Rule::new(F::Age, "18-24", 5).physical(5),
    Rule::new(F::Age, "25-35", 5).physical(5),
    Rule::new(F::Age, "36-45", 0),
    Rule::new(F::Age, "46-55", -5).physical(-5),
    Rule::new(F::Age, "56+", -10).physical(-10),
    // Profession
    Rule::new(F::Profession, "physical", 5).physical(5),
    Rule::new(F::Profession, "office", -5).lifestyle(-5).physical(-5),
    Rule::new(F::Profession, "driver", -5).lifestyle(-5).physical(-5),
    Rule::new(F::Profession, "shift", -5).mental(-10),
    // Work stress
    Rule::new(F::WorkStress, "calm", 10).mental(10),
    Rule::new(F::WorkStress, "moderate", 0),
    Rule::new(F::WorkStress, "high", -5)
        .mental(-10)
        .issue("Висок стрес в работата")
        .advice(A::WorkStress),
    Rule::new(F::WorkStress, "exhausting", -15)
        .mental(-15)
        .issue("Изтощителен стрес в работата")
        .advice(A::WorkStress),
    // Weight
    Rule::new(F::Weight, "100+", -5)
        .physical(-10)
        .issue("Наднормено тегло")
        .advice(A::Weight),
    // Body fat
    Rule::new(F::BodyFat, "low", 10).physical(15),
    Rule::new(F::BodyFat, "medium", 0),
    Rule::new(F::BodyFat, "high", -10)
        .physical(-20)
        .issue("Високи подкожни мазнини")
        .advice(A::BodyFat),
    // Diet
    Rule::new(F::Diet, "balanced", 10).lifestyle(10),
    Rule::new(F::Diet, "irregular", -5).lifestyle(-5),
    Rule::new(F::Diet, "fast-food", -10)
        .lifestyle(-15)
        .issue("Нездравословно хранене")
        .advice(A::Diet),
    Rule::new(F::Diet, "none", -15)
        .lifestyle(-15)
        .issue("Липса на режим на хранене")
        .advice(A::Diet),
    // Nicotine
    Rule::new(F::Nicotine, "never", 5).lifestyle(5),
    Rule::new(F::Nicotine, "occasionally", -5)
        .lifestyle(-10)
        .issue("Периодично пушене")
        .advice(A::Nicotine),
    Rule::new(F::Nicotine, "daily", -20)
        .lifestyle(-20)
        .issue("Ежедневно пушене")
        .advice(A::Nicotine),
    // Alcohol
    Rule::new(F::Alcohol, "never", 5).lifestyle(5),
    Rule::new(F::Alcohol, "weekly", -5)
        .lifestyle(-10)
        .issue("Редовна употреба на алкохол")
        .advice(A::Alcohol),
    Rule::new(F::Alcohol, "daily", -20)
        .lifestyle(-20)
        .issue("Ежедневна употреба на алкохол")
        .advice(A::Alcohol),
    // Sleep
    Rule::new(F::Sleep, "7-8", 10).lifestyle(10).mental(10),
    Rule::new(F::Sleep, "5-6", -5).lifestyle(-5).mental(-5),
    Rule::new(F::Sleep, "poor", -15)
        .lifestyle(-15)
        .mental(-15)
        .issue("Лош сън")
        .advice(A::Sleep),
    // Sex frequency
    Rule::new(F::SexFrequency, "weekly+", 15).sexual(20),
    Rule::new(F::SexFrequency, "monthly", -5).sexual(-10),
    Rule::new(F::SexFrequency, "rare", -25)
        .sexual(-25)
        .issue("Много ниска сексуална активност")
        .advice(A::SexFrequency),
    // Frustration
    Rule::new(F::Frustration, "none", 5).sexual(5).mental(5),
    Rule::new(F::Frustration, "performance", -10)
        .sexual(-15)
        .mental(-10)
        .issue("Притеснения за представянето")
        .advice(A::Frustration),
    Rule::new(F::Frustration, "libido", -10)
        .sexual(-15)
        .issue("Ниско либидо")
        .advice(A::Frustration),
    Rule::new(F::Frustration, "energy", -5)
        .physical(-10)
        .issue("Липса на енергия")
        .advice(A::Frustration),
    // One change
    Rule::new(F::OneChange, "energy", 0).physical(-5).mental(-5),
    Rule::new(F::OneChange, "libido", 0).sexual(-5),
    Rule::new(F::OneChange, "confidence", 0).mental(-5),
];

/// Find the rule for a selected answer.
///
/// Returns `None` for values the table does not know; the caller treats
/// those as neutral.
pub fn lookup(field: QuizField, value: &str) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.field == field && rule.value == value)
}

/// Accepted options for one quiz field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOptions {
    pub field: &'static str,
    pub options: Vec<&'static str>,
}

/// Every scored field with its known options, in evaluation order.
///
/// Fields without rules (such as `height`) are listed with no options.
pub fn quiz_fields() -> Vec<FieldOptions> {
    QuizField::SCORED
        .iter()
        .map(|field| FieldOptions {
            field: field.key(),
            options: RULES
                .iter()
                .filter(|rule| rule.field == *field)
                .map(|rule| rule.value)
                .collect(),
        })
        .collect()
}
