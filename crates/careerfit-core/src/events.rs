use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::ResponseValue;
use crate::scoring::Recommendation;

/// Every state change in a session produces an Event.
/// The renderer drains them after each operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ResponseRecorded {
        question_id: String,
        value: ResponseValue,
        /// Whether an earlier answer was overwritten.
        replaced: bool,
        at: DateTime<Utc>,
    },
    Advanced {
        position: usize,
        question_id: String,
        at: DateTime<Utc>,
    },
    Retreated {
        position: usize,
        question_id: String,
        at: DateTime<Utc>,
    },
    /// The cursor crossed into another section (either direction).
    SectionEntered {
        section_index: usize,
        section_id: String,
        at: DateTime<Utc>,
    },
    /// The last question was passed and results were produced.
    Completed {
        overall_score: u32,
        recommendation: Recommendation,
        at: DateTime<Utc>,
    },
    Reset {
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::ResponseRecorded { at, .. }
            | Event::Advanced { at, .. }
            | Event::Retreated { at, .. }
            | Event::SectionEntered { at, .. }
            | Event::Completed { at, .. }
            | Event::Reset { at } => *at,
        }
    }
}
