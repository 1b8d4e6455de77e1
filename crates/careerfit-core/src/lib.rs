//! # careerfit Core Library
//!
//! Core logic for the careerfit Training & Enablement Specialist
//! assessment. All operations are available through the standalone CLI;
//! any other renderer is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Catalog**: static, validated sections of questions with a
//!   precomputed id index
//! - **Session**: one user's responses, navigation cursor and results
//! - **Scoring**: category, WISCAR and overall scores plus the derived
//!   recommendation, career paths, learning path and improvements
//! - **Config**: TOML-based scoring and output settings
//!
//! ## Key Components
//!
//! - [`Catalog`]: question sections and lookup index
//! - [`AssessmentSession`]: navigation state machine producing [`Results`]
//! - [`ScoringEngine`]: turns responses into [`Results`]
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod config;
pub mod cursor;
pub mod error;
pub mod events;
pub mod response;
pub mod scoring;
pub mod session;

pub use catalog::{Catalog, Category, Question, QuestionOption, QuestionType, Scale, Section, WiscarDimension};
pub use config::{Config, JitterMode, OutputFormat, ScoringConfig};
pub use cursor::{Cursor, Step};
pub use error::{AssessmentError, CatalogError, ConfigError, CoreError};
pub use events::Event;
pub use response::{Response, ResponseStore, ResponseValue};
pub use scoring::{score_responses, CareerPath, LearningStage, Recommendation, Results, ScoringEngine, WiscarScores};
pub use session::{AssessmentSession, Progress, SessionState};
