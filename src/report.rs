//! Plain-text rendering of a confidence index result.
//!
//! The report is what the mailing pipeline sends after the quiz. It contains
//! the respondent's first name when one was given, but never the email.

use std::fmt::Write;

use crate::model::{ConfidenceIndexResult, QuizAnswers};

/// Render a human-readable report for one scored quiz.
pub fn render_report(answers: &QuizAnswers, result: &ConfidenceIndexResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write_report(&mut out, answers, result);

    out
}

fn write_report(
    out: &mut String,
    answers: &QuizAnswers,
    result: &ConfidenceIndexResult,
) -> std::fmt::Result {
    match answers.first_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => writeln!(out, "Здравейте, {name}!")?,
        _ => writeln!(out, "Здравейте!")?,
    }
    writeln!(out)?;

    writeln!(
        out,
        "Вашият индекс на увереност: {}/100 ({})",
        result.score, result.level
    )?;
    writeln!(
        out,
        "Очаквано ниво на тестостерон: {}",
        result.testosterone_estimate
    )?;
    writeln!(out, "Спешност: {}", result.urgency_level)?;
    writeln!(
        out,
        "Резултатът Ви е по-добър от {}% от мъжете на Вашата възраст.",
        result.percentile
    )?;
    writeln!(out)?;

    let categories = result.category_scores;
    writeln!(out, "Резултати по категории:")?;
    writeln!(out, "  Начин на живот: {}", categories.lifestyle)?;
    writeln!(out, "  Физическо състояние: {}", categories.physical)?;
    writeln!(out, "  Сексуално здраве: {}", categories.sexual)?;
    writeln!(out, "  Психическо състояние: {}", categories.mental)?;
    writeln!(out)?;

    let timeline = result.timeline;
    writeln!(out, "Очакван прогрес:")?;
    writeln!(out, "  след 14 дни: {}", timeline.day14)?;
    writeln!(out, "  след 30 дни: {}", timeline.day30)?;
    writeln!(out, "  след 60 дни: {}", timeline.day60)?;
    writeln!(out, "  след 90 дни: {}", timeline.day90)?;

    if !result.top_issues.is_empty() {
        writeln!(out)?;
        writeln!(out, "Основни проблеми:")?;
        for (i, issue) in result.top_issues.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, issue)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Препоръки:")?;
    for recommendation in &result.recommendations {
        writeln!(out, "  - {recommendation}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate;

    #[test]
    fn test_report_greets_by_name() {
        let answers = QuizAnswers {
            first_name: Some("Иван".to_string()),
            email: Some("ivan@example.com".to_string()),
            ..Default::default()
        };
        let report = render_report(&answers, &calculate(&answers));

        assert!(report.starts_with("Здравейте, Иван!"));
        assert!(!report.contains("ivan@example.com"));
    }

    #[test]
    fn test_report_blank_name() {
        let answers = QuizAnswers {
            first_name: Some("   ".to_string()),
            ..Default::default()
        };
        let report = render_report(&answers, &calculate(&answers));

        assert!(report.starts_with("Здравейте!"));
    }

    #[test]
    fn test_report_baseline() {
        let answers = QuizAnswers::default();
        let result = calculate(&answers);
        let report = render_report(&answers, &result);

        assert!(report.contains("50/100 (средно)"));
        assert!(report.contains("Спешност: средна"));
        assert!(report.contains("след 90 дни: 98"));
        // No issues section when nothing was flagged.
        assert!(!report.contains("Основни проблеми"));
        assert!(report.contains(&result.recommendations[0]));
    }

    #[test]
    fn test_report_lists_top_issues_in_order() {
        let answers = QuizAnswers {
            sleep: Some("poor".to_string()),
            sex_frequency: Some("rare".to_string()),
            ..Default::default()
        };
        let report = render_report(&answers, &calculate(&answers));

        assert!(report.contains("  1. Много ниска сексуална активност"));
        assert!(report.contains("  2. Лош сън"));
    }
}
