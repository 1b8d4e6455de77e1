//! Scoring engine.
//!
//! Turns a set of responses into [`Results`]:
//!
//! - category scores (psychological fit, technical readiness)
//! - six WISCAR dimension scores
//! - an overall score and a yes/maybe/no recommendation with confidence
//! - reasoning text, career-path matches, learning path and improvements
//!
//! Every score is an average of responses mapped from a 1-5 scale onto
//! 0-100. Apart from the confidence jitter (see [`jitter`]) the result is a
//! pure function of the responses.

pub mod jitter;
mod narrative;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogIndex, Category, WiscarDimension};
use crate::config::{JitterMode, ScoringConfig};
use crate::error::AssessmentError;
use crate::response::{Response, ResponseValue};

pub use jitter::{ConfidenceJitter, FixedJitter, NoJitter, RandomJitter};
pub use narrative::{
    career_paths, improvements, learning_path, reasoning, CareerPath, LearningLevel, LearningStage,
};

/// Neutral midpoint assumed for symbolic answers without a weight.
pub const DEFAULT_NEUTRAL_VALUE: f64 = 3.0;

/// Multiplier mapping a 1-5 answer onto 0-100.
const SCALE_FACTOR: f64 = 20.0;

/// Overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// `>= 80` yes, `>= 60` maybe, otherwise no.
    pub fn from_overall(overall: u32) -> Self {
        if overall >= 80 {
            Recommendation::Yes
        } else if overall >= 60 {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    /// Confidence base and the width of the jitter added to it.
    fn confidence_band(self) -> (f64, f64) {
        match self {
            Recommendation::Yes => (85.0, 10.0),
            Recommendation::Maybe => (65.0, 15.0),
            Recommendation::No => (40.0, 20.0),
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        };
        f.write_str(s)
    }
}

/// Scores for the six WISCAR dimensions (each 0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability: u32,
    pub real_world_alignment: u32,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u32 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world_alignment,
        }
    }

    fn set(&mut self, dimension: WiscarDimension, score: u32) {
        let slot = match dimension {
            WiscarDimension::Will => &mut self.will,
            WiscarDimension::Interest => &mut self.interest,
            WiscarDimension::Skill => &mut self.skill,
            WiscarDimension::Cognitive => &mut self.cognitive,
            WiscarDimension::Ability => &mut self.ability,
            WiscarDimension::RealWorld => &mut self.real_world_alignment,
        };
        *slot = score;
    }

    pub fn sum(&self) -> u32 {
        WiscarDimension::ALL.iter().map(|d| self.get(*d)).sum()
    }

    /// Unrounded mean of the six dimensions.
    pub fn mean(&self) -> f64 {
        f64::from(self.sum()) / WiscarDimension::ALL.len() as f64
    }
}

/// Final outcome of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub psychological_fit: u32,
    pub technical_readiness: u32,
    pub wiscar_scores: WiscarScores,
    pub overall_score: u32,
    pub recommendation: Recommendation,
    pub confidence_score: u32,
    pub reasoning: String,
    pub career_paths: Vec<CareerPath>,
    pub learning_path: Vec<LearningStage>,
    pub improvements: Vec<String>,
}

/// Average of `value * 20` over all values, rounded and clamped to 0-100.
///
/// An empty set scores 0.
pub fn category_score(values: &[f64]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let total: f64 = values.iter().map(|v| v * SCALE_FACTOR).sum();
    (total / values.len() as f64).round().clamp(0.0, 100.0) as u32
}

/// `round((psych + tech + mean(wiscar)) / 3)`, clamped to 0-100.
pub fn overall_score(psych: u32, tech: u32, wiscar: &WiscarScores) -> u32 {
    let combined = f64::from(psych) + f64::from(tech) + wiscar.mean();
    (combined / 3.0).round().clamp(0.0, 100.0) as u32
}

/// Computes [`Results`] from responses.
#[derive(Debug)]
pub struct ScoringEngine {
    neutral_value: f64,
    jitter: Box<dyn ConfidenceJitter>,
}

impl ScoringEngine {
    /// Engine with entropy-seeded jitter and the default neutral value.
    pub fn new() -> Self {
        Self::with_jitter(RandomJitter::default())
    }

    pub fn with_jitter(jitter: impl ConfidenceJitter + 'static) -> Self {
        Self {
            neutral_value: DEFAULT_NEUTRAL_VALUE,
            jitter: Box::new(jitter),
        }
    }

    /// Engine whose confidence is exactly the recommendation's base.
    pub fn deterministic() -> Self {
        Self::with_jitter(NoJitter)
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        let engine = match config.jitter {
            JitterMode::Random => Self::with_jitter(RandomJitter::new(None)),
            JitterMode::Seeded => Self::with_jitter(RandomJitter::new(Some(config.seed))),
            JitterMode::None => Self::deterministic(),
        };
        engine.neutral_value(config.neutral_value)
    }

    /// Override the value used for symbolic answers without a weight.
    pub fn neutral_value(mut self, value: f64) -> Self {
        self.neutral_value = value;
        self
    }

    /// Numeric value of a response: numbers as-is, weighted options by
    /// weight, anything else the neutral value.
    fn numeric_value(&self, index: &CatalogIndex, response: &Response) -> f64 {
        match &response.value {
            ResponseValue::Number(n) => *n,
            ResponseValue::Text(_) => index
                .get(&response.question_id)
                .and_then(|meta| meta.option_weight(&response.value))
                .unwrap_or(self.neutral_value),
        }
    }

    /// Score a full response set.
    ///
    /// Responses whose question is not in `index` are ignored.
    pub fn score<'a, I>(&mut self, index: &CatalogIndex, responses: I) -> Results
    where
        I: IntoIterator<Item = &'a Response>,
    {
        let mut psychometric = Vec::new();
        let mut technical = Vec::new();
        let mut dimensions: [Vec<f64>; 6] = Default::default();

        for response in responses {
            let Some(meta) = index.get(&response.question_id) else {
                tracing::warn!(question_id = %response.question_id, "ignoring response for unknown question");
                continue;
            };
            let value = self.numeric_value(index, response);
            match meta.category {
                Category::Psychometric => psychometric.push(value),
                Category::Technical => technical.push(value),
                Category::Wiscar => {}
            }
            if let Some(dimension) = meta.dimension() {
                dimensions[dimension_slot(dimension)].push(value);
            }
        }

        let psychological_fit = category_score(&psychometric);
        let technical_readiness = category_score(&technical);

        let mut wiscar_scores = WiscarScores::default();
        for dimension in WiscarDimension::ALL {
            wiscar_scores.set(dimension, category_score(&dimensions[dimension_slot(dimension)]));
        }

        let overall = overall_score(psychological_fit, technical_readiness, &wiscar_scores);
        let recommendation = Recommendation::from_overall(overall);
        let confidence_score = self.confidence(recommendation);

        tracing::debug!(
            psychological_fit,
            technical_readiness,
            overall,
            %recommendation,
            confidence_score,
            "scored assessment"
        );

        Results {
            psychological_fit,
            technical_readiness,
            wiscar_scores,
            overall_score: overall,
            recommendation,
            confidence_score,
            reasoning: reasoning(recommendation, overall, psychological_fit, technical_readiness),
            career_paths: career_paths(overall),
            learning_path: learning_path(recommendation),
            improvements: improvements(psychological_fit, technical_readiness, &wiscar_scores),
        }
    }

    fn confidence(&mut self, recommendation: Recommendation) -> u32 {
        let (base, span) = recommendation.confidence_band();
        (base + self.jitter.sample(span)).round().clamp(0.0, 100.0) as u32
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn dimension_slot(dimension: WiscarDimension) -> usize {
    match dimension {
        WiscarDimension::Will => 0,
        WiscarDimension::Interest => 1,
        WiscarDimension::Skill => 2,
        WiscarDimension::Cognitive => 3,
        WiscarDimension::Ability => 4,
        WiscarDimension::RealWorld => 5,
    }
}

/// Score a complete response list without navigating a session.
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidResponse`] for the first response whose
/// question is not in the catalog.
pub fn score_responses(
    catalog: &Catalog,
    responses: &[Response],
    engine: &mut ScoringEngine,
) -> Result<Results, AssessmentError> {
    if let Some(unknown) = responses.iter().find(|r| !catalog.contains(&r.question_id)) {
        return Err(AssessmentError::InvalidResponse {
            question_id: unknown.question_id.clone(),
        });
    }

    // Later entries for the same question win, as in a session.
    let store: crate::response::ResponseStore = responses.iter().cloned().collect();
    Ok(engine.score(catalog.index(), store.iter()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_questions(catalog: &Catalog, value: impl Into<ResponseValue> + Clone) -> Vec<Response> {
        catalog
            .questions()
            .map(|q| Response::new(q.id.clone(), value.clone()))
            .collect()
    }

    #[test]
    fn test_category_score_empty_is_zero() {
        assert_eq!(category_score(&[]), 0);
    }

    #[test]
    fn test_category_score_scales_and_rounds() {
        assert_eq!(category_score(&[5.0]), 100);
        assert_eq!(category_score(&[1.0]), 20);
        assert_eq!(category_score(&[3.0, 4.0]), 70);
        // (4 + 4 + 5) * 20 / 3 = 86.67
        assert_eq!(category_score(&[4.0, 4.0, 5.0]), 87);
    }

    #[test]
    fn test_category_score_clamps() {
        assert_eq!(category_score(&[10.0]), 100);
        assert_eq!(category_score(&[-3.0]), 0);
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(Recommendation::from_overall(100), Recommendation::Yes);
        assert_eq!(Recommendation::from_overall(80), Recommendation::Yes);
        assert_eq!(Recommendation::from_overall(79), Recommendation::Maybe);
        assert_eq!(Recommendation::from_overall(60), Recommendation::Maybe);
        assert_eq!(Recommendation::from_overall(59), Recommendation::No);
        assert_eq!(Recommendation::from_overall(0), Recommendation::No);
    }

    #[test]
    fn test_overall_score_formula() {
        let wiscar = WiscarScores {
            will: 60,
            interest: 60,
            skill: 60,
            cognitive: 60,
            ability: 60,
            real_world_alignment: 60,
        };
        // (80 + 70 + 60) / 3 = 70
        assert_eq!(overall_score(80, 70, &wiscar), 70);
        assert_eq!(overall_score(0, 0, &WiscarScores::default()), 0);
    }

    #[test]
    fn test_no_responses() {
        let catalog = Catalog::builtin();
        let results = ScoringEngine::deterministic().score(catalog.index(), []);
        assert_eq!(results.psychological_fit, 0);
        assert_eq!(results.technical_readiness, 0);
        assert_eq!(results.wiscar_scores, WiscarScores::default());
        assert_eq!(results.overall_score, 0);
        assert_eq!(results.recommendation, Recommendation::No);
        assert_eq!(results.confidence_score, 40);
        assert!(results.career_paths.is_empty());
        assert_eq!(results.learning_path.len(), 1);
        assert_eq!(results.improvements.len(), 4);
    }

    #[test]
    fn test_all_fives_on_psychometric_and_technical() {
        let catalog = Catalog::builtin();
        let responses: Vec<Response> = catalog
            .questions()
            .filter(|q| matches!(q.category, Category::Psychometric | Category::Technical))
            .map(|q| Response::new(q.id.clone(), 5))
            .collect();

        let results = ScoringEngine::deterministic().score(catalog.index(), &responses);
        assert_eq!(results.psychological_fit, 100);
        assert_eq!(results.technical_readiness, 100);
        assert_eq!(results.wiscar_scores.sum(), 0);
        // (100 + 100 + 0) / 3 = 66.67
        assert_eq!(results.overall_score, 67);
        assert_eq!(results.recommendation, Recommendation::Maybe);
    }

    #[test]
    fn test_all_fives_everywhere_is_yes() {
        let catalog = Catalog::builtin();
        let responses = all_questions(&catalog, 5);
        let results = ScoringEngine::deterministic().score(catalog.index(), &responses);

        assert_eq!(results.overall_score, 100);
        assert_eq!(results.recommendation, Recommendation::Yes);
        assert_eq!(results.confidence_score, 85);
        assert_eq!(results.learning_path.len(), 2);
        assert!(results.improvements.is_empty());
        assert_eq!(results.career_paths.len(), 3);
        assert_eq!(results.career_paths[0].match_score, 95);
    }

    #[test]
    fn test_symbolic_answers_use_neutral_value() {
        let catalog = Catalog::builtin();
        let responses = vec![
            Response::new("intro-2", "helping-others"),
            Response::new("psych-1", 5),
            Response::new("cognitive-1", "adaptive"),
        ];
        let results = ScoringEngine::deterministic().score(catalog.index(), &responses);
        // (3 + 5) * 20 / 2
        assert_eq!(results.psychological_fit, 80);
        assert_eq!(results.wiscar_scores.cognitive, 60);
        assert_eq!(results.wiscar_scores.will, 0);
    }

    #[test]
    fn test_custom_neutral_value() {
        let catalog = Catalog::builtin();
        let responses = vec![Response::new("tech-1", "multiple")];
        let results = ScoringEngine::deterministic()
            .neutral_value(4.0)
            .score(catalog.index(), &responses);
        assert_eq!(results.technical_readiness, 80);
    }

    #[test]
    fn test_wiscar_dimensions_do_not_leak() {
        let catalog = Catalog::builtin();
        let responses = vec![
            Response::new("will-1", 5),
            Response::new("will-2", 4),
            Response::new("real-world-1", 1),
        ];
        let results = ScoringEngine::deterministic().score(catalog.index(), &responses);
        assert_eq!(results.wiscar_scores.will, 90);
        assert_eq!(results.wiscar_scores.real_world_alignment, 20);
        assert_eq!(results.wiscar_scores.interest, 0);
        assert_eq!(results.psychological_fit, 0);
    }

    #[test]
    fn test_non_wiscar_subcategory_does_not_feed_dimension() {
        let catalog = Catalog::from_toml_str(
            r#"
[[sections]]
id = "only"
title = "Only"
description = "One question"

[[sections.questions]]
id = "tech-skill"
text = "I configure learning platforms"
type = "scale"
category = "technical"
subcategory = "skill"

[sections.questions.scale]
min = 1
max = 5
labels = ["1", "2", "3", "4", "5"]
"#,
        )
        .unwrap();
        let responses = vec![Response::new("tech-skill", 5)];
        let results = ScoringEngine::deterministic().score(catalog.index(), &responses);
        assert_eq!(results.technical_readiness, 100);
        assert_eq!(results.wiscar_scores.skill, 0);
        assert_eq!(results.overall_score, 33);
    }

    #[test]
    fn test_confidence_band_with_fixed_jitter() {
        let catalog = Catalog::builtin();
        let responses = all_questions(&catalog, 5);
        let results = ScoringEngine::with_jitter(FixedJitter(0.5)).score(catalog.index(), &responses);
        assert_eq!(results.confidence_score, 90);
    }

    #[test]
    fn test_random_confidence_stays_in_band() {
        let catalog = Catalog::builtin();
        let responses = all_questions(&catalog, 3);
        let mut engine = ScoringEngine::with_jitter(RandomJitter::new(Some(3)));
        for _ in 0..50 {
            let results = engine.score(catalog.index(), &responses);
            assert_eq!(results.recommendation, Recommendation::Maybe);
            assert!((65..=80).contains(&results.confidence_score));
        }
    }

    #[test]
    fn test_score_responses_rejects_unknown_question() {
        let catalog = Catalog::builtin();
        let responses = vec![Response::new("psych-1", 4), Response::new("bogus", 4)];
        let err = score_responses(&catalog, &responses, &mut ScoringEngine::deterministic())
            .unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidResponse {
                question_id: "bogus".into()
            }
        );
    }

    #[test]
    fn test_score_responses_last_write_wins() {
        let catalog = Catalog::builtin();
        let responses = vec![Response::new("psych-1", 1), Response::new("psych-1", 5)];
        let results =
            score_responses(&catalog, &responses, &mut ScoringEngine::deterministic()).unwrap();
        assert_eq!(results.psychological_fit, 100);
    }

    #[test]
    fn test_results_json_field_names() {
        let catalog = Catalog::builtin();
        let results = ScoringEngine::deterministic().score(catalog.index(), []);
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("psychologicalFit").is_some());
        assert!(json["wiscarScores"].get("realWorldAlignment").is_some());
        assert_eq!(json["recommendation"], "no");
    }
}
