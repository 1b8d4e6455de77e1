//! Question catalog: the static, ordered set of sections and questions.
//!
//! The catalog is built once (either the built-in Training & Enablement
//! question set or a TOML/JSON document) and never mutated afterwards.
//! Sessions share it through an `Arc`.
//!
//! On construction a [`CatalogIndex`] is computed so scoring can look up a
//! question's category, subcategory and option weights without scanning
//! the sections.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::CatalogError;
use crate::response::ResponseValue;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Likert-style numeric scale.
    Scale,
    /// Pick one of several options.
    MultipleChoice,
    /// Situational prompt answered by picking an option.
    Scenario,
}

impl QuestionType {
    fn as_str(self) -> &'static str {
        match self {
            QuestionType::Scale => "scale",
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Scenario => "scenario",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level grouping of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Psychometric => "psychometric",
            Category::Technical => "technical",
            Category::Wiscar => "wiscar",
        };
        f.write_str(s)
    }
}

/// One of the six WISCAR readiness dimensions.
///
/// Wiscar questions carry the dimension key as their subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    /// All dimensions in framework order.
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    /// Subcategory key used in the catalog.
    pub fn key(self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "real-world",
        }
    }
}

/// A selectable answer for a multiple-choice or scenario question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Value recorded when the option is picked.
    pub value: ResponseValue,
    /// Display text.
    pub label: String,
    /// Optional numeric weight (1-5) used by scoring instead of the
    /// neutral default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl QuestionOption {
    pub fn new(value: impl Into<ResponseValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            weight: None,
        }
    }

    pub fn weighted(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Numeric scale with one label per point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub min: i32,
    pub max: i32,
    pub labels: Vec<String>,
}

impl Scale {
    /// Label for a point on the scale, if in range.
    pub fn label_for(&self, point: i32) -> Option<&str> {
        if point < self.min || point > self.max {
            return None;
        }
        self.labels.get((point - self.min) as usize).map(String::as_str)
    }

    fn expected_labels(&self) -> usize {
        (self.max - self.min + 1).max(0) as usize
    }
}

/// Borrowed view of a question's response domain.
#[derive(Debug, Clone, Copy)]
pub enum ResponseDomain<'a> {
    Scale(&'a Scale),
    Options(&'a [QuestionOption]),
}

/// A single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for the question.
    pub id: String,
    /// Question text.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub category: Category,
    /// WISCAR dimension key for wiscar questions, a thematic tag otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl Question {
    /// A scale question spanning `min..=max` with one label per point.
    pub fn scale(
        id: impl Into<String>,
        text: impl Into<String>,
        category: Category,
        min: i32,
        max: i32,
        labels: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind: QuestionType::Scale,
            category,
            subcategory: None,
            options: None,
            scale: Some(Scale {
                min,
                max,
                labels: labels.iter().map(|l| l.to_string()).collect(),
            }),
        }
    }

    /// An option question (multiple-choice or scenario).
    pub fn choice(
        id: impl Into<String>,
        text: impl Into<String>,
        kind: QuestionType,
        category: Category,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            category,
            subcategory: None,
            options: Some(options),
            scale: None,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// The populated response domain, if the question is well formed.
    pub fn domain(&self) -> Option<ResponseDomain<'_>> {
        match (&self.scale, &self.options) {
            (Some(scale), None) => Some(ResponseDomain::Scale(scale)),
            (None, Some(options)) => Some(ResponseDomain::Options(options)),
            _ => None,
        }
    }

    /// Look up the option matching a recorded value.
    pub fn option_for(&self, value: &ResponseValue) -> Option<&QuestionOption> {
        self.options
            .as_deref()
            .and_then(|opts| opts.iter().find(|o| &o.value == value))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mismatch = |message: &str| CatalogError::DomainMismatch {
            question_id: self.id.clone(),
            kind: self.kind.as_str().to_string(),
            message: message.to_string(),
        };

        match (self.kind, self.domain()) {
            (_, None) => Err(mismatch("must populate exactly one of scale/options")),
            (QuestionType::Scale, Some(ResponseDomain::Options(_))) => {
                Err(mismatch("has options instead of a scale"))
            }
            (QuestionType::Scale, Some(ResponseDomain::Scale(scale))) => {
                if scale.max < scale.min || scale.labels.len() != scale.expected_labels() {
                    return Err(CatalogError::ScaleLabels {
                        question_id: self.id.clone(),
                        min: scale.min,
                        max: scale.max,
                        expected: scale.expected_labels(),
                        actual: scale.labels.len(),
                    });
                }
                Ok(())
            }
            (_, Some(ResponseDomain::Scale(_))) => Err(mismatch("has a scale instead of options")),
            (_, Some(ResponseDomain::Options(opts))) if opts.is_empty() => {
                Err(mismatch("has an empty option list"))
            }
            (_, Some(ResponseDomain::Options(_))) => Ok(()),
        }
    }
}

/// An ordered group of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

/// Lookup data for one question, precomputed at catalog load.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionMeta {
    pub category: Category,
    pub subcategory: Option<String>,
    pub section_index: usize,
    pub question_index: usize,
    /// Option value to weight, for weighted options only.
    option_weights: Vec<(ResponseValue, f64)>,
}

impl QuestionMeta {
    /// Weight attached to the option with this value, if any.
    pub fn option_weight(&self, value: &ResponseValue) -> Option<f64> {
        self.option_weights
            .iter()
            .find(|(option, _)| option == value)
            .map(|(_, weight)| *weight)
    }

    /// The WISCAR dimension this question feeds. Only wiscar questions
    /// whose subcategory names a dimension feed one.
    pub fn dimension(&self) -> Option<WiscarDimension> {
        if self.category != Category::Wiscar {
            return None;
        }
        let sub = self.subcategory.as_deref()?;
        WiscarDimension::ALL.into_iter().find(|d| d.key() == sub)
    }
}

/// Question id -> metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogIndex {
    entries: HashMap<String, QuestionMeta>,
}

impl CatalogIndex {
    fn build(sections: &[Section]) -> Self {
        let mut entries = HashMap::new();
        for (section_index, section) in sections.iter().enumerate() {
            for (question_index, question) in section.questions.iter().enumerate() {
                let option_weights = question
                    .options
                    .iter()
                    .flatten()
                    .filter_map(|o| o.weight.map(|w| (o.value.clone(), w)))
                    .collect();
                entries.insert(
                    question.id.clone(),
                    QuestionMeta {
                        category: question.category,
                        subcategory: question.subcategory.clone(),
                        section_index,
                        question_index,
                        option_weights,
                    },
                );
            }
        }
        Self { entries }
    }

    pub fn get(&self, question_id: &str) -> Option<&QuestionMeta> {
        self.entries.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.entries.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    sections: Vec<Section>,
}

/// The full, validated question catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    sections: Vec<Section>,
    #[serde(skip)]
    index: CatalogIndex,
}

impl Catalog {
    /// Build and validate a catalog from sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or a section is empty, a question id
    /// repeats, or a question's response domain does not match its type.
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        if sections.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if section.questions.is_empty() {
                return Err(CatalogError::EmptySection(section.id.clone()));
            }
            for question in &section.questions {
                if !seen.insert(question.id.as_str()) {
                    return Err(CatalogError::DuplicateQuestion(question.id.clone()));
                }
                question.validate()?;
            }
        }

        Ok(Self::indexed(sections))
    }

    fn indexed(sections: Vec<Section>) -> Self {
        let index = CatalogIndex::build(&sections);
        Self { sections, index }
    }

    /// The built-in Training & Enablement Specialist question set.
    pub fn builtin() -> Self {
        Self::indexed(builtin::sections())
    }

    /// Parse and validate a TOML catalog document (`[[sections]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = toml::from_str(content)?;
        Self::new(doc.sections)
    }

    /// Parse and validate a JSON catalog document (`{"sections": [...]}`).
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(content)?;
        Self::new(doc.sections)
    }

    /// Load a catalog file, choosing the format by extension (`.json`,
    /// anything else is read as TOML).
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        tracing::debug!(
            path = %path.display(),
            questions = catalog.total_questions(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, section_index: usize) -> Option<&Section> {
        self.sections.get(section_index)
    }

    pub fn question_at(&self, section_index: usize, question_index: usize) -> Option<&Question> {
        self.section(section_index)?.questions.get(question_index)
    }

    /// Find a question by id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        let meta = self.index.get(question_id)?;
        self.question_at(meta.section_index, meta.question_index)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.index.contains(question_id)
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Zero-based position of `(section, question)` in the flattened catalog.
    pub fn flat_position(&self, section_index: usize, question_index: usize) -> usize {
        self.sections
            .iter()
            .take(section_index)
            .map(|s| s.questions.len())
            .sum::<usize>()
            + question_index
    }

    /// Iterate all questions in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
