//! Confidence Index - quiz scoring for a men's health funnel.
//!
//! # Overview
//!
//! Respondents answer a short lifestyle quiz (age, stress, body composition,
//! diet, nicotine, alcohol, sleep, intimacy). The answers are turned into a
//! 0-100 confidence index with four category sub-scores, a level, an urgency,
//! a percentile estimate, a 90-day improvement projection, the most severe
//! issues and a list of recommendations.
//!
//! Scoring is a pure function over plain data:
//!
//! ```
//! use confidence_index::model::QuizAnswers;
//! use confidence_index::scoring::calculate;
//!
//! let result = calculate(&QuizAnswers::default());
//! assert_eq!(result.score, 50);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Quiz answers, result types and the score bracket table
//! - [`rules`]: The `(field, value)` rule table and advice texts
//! - [`scoring`]: The calculator
//! - [`report`]: Plain-text report rendering
//! - [`config`]: Environment configuration
//! - [`api`]: HTTP API handlers

pub mod api;
pub mod config;
pub mod model;
pub mod report;
pub mod rules;
pub mod scoring;
