//! Navigation cursor over a catalog.
//!
//! The cursor only knows indices; the catalog is passed in for bounds.
//! Scoring on completion is the session's job, the cursor just reports
//! that it stepped past the last question.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Question};

/// Outcome of a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next question in the same section.
    Question,
    /// Moved to the first question of the next section.
    Section,
    /// Stepped past the last question; the cursor is now complete.
    Completed,
    /// Nothing happened (already complete, or at the origin when retreating).
    Stay,
}

/// `(section, question)` position plus completion flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    section_index: usize,
    question_index: usize,
    complete: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// True at `(0, 0)` and not complete.
    pub fn is_at_origin(&self) -> bool {
        *self == Self::default()
    }

    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a Question> {
        catalog.question_at(self.section_index, self.question_index)
    }

    /// Zero-based position in the flattened catalog.
    pub fn position(&self, catalog: &Catalog) -> usize {
        catalog.flat_position(self.section_index, self.question_index)
    }

    pub fn advance(&mut self, catalog: &Catalog) -> Step {
        if self.complete {
            return Step::Stay;
        }

        let section_len = catalog
            .section(self.section_index)
            .map(|s| s.questions.len())
            .unwrap_or(0);
        let is_last_question = self.question_index + 1 >= section_len;
        let is_last_section = self.section_index + 1 >= catalog.sections().len();

        if !is_last_question {
            self.question_index += 1;
            Step::Question
        } else if !is_last_section {
            self.section_index += 1;
            self.question_index = 0;
            Step::Section
        } else {
            self.complete = true;
            Step::Completed
        }
    }

    /// Step back one question. A completed cursor stays put; only
    /// [`Cursor::reset`] leaves completion.
    pub fn retreat(&mut self, catalog: &Catalog) -> Step {
        if self.complete {
            Step::Stay
        } else if self.question_index > 0 {
            self.question_index -= 1;
            Step::Question
        } else if self.section_index > 0 {
            self.section_index -= 1;
            self.question_index = catalog
                .section(self.section_index)
                .map(|s| s.questions.len().saturating_sub(1))
                .unwrap_or(0);
            Step::Section
        } else {
            Step::Stay
        }
    }

    pub fn can_retreat(&self) -> bool {
        !self.complete && (self.section_index > 0 || self.question_index > 0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_whole_catalog() {
        let catalog = Catalog::builtin();
        let mut cursor = Cursor::new();
        let mut steps = Vec::new();
        for _ in 0..catalog.total_questions() {
            steps.push(cursor.advance(&catalog));
        }

        assert!(cursor.is_complete());
        assert_eq!(steps.iter().filter(|s| **s == Step::Completed).count(), 1);
        assert_eq!(steps.iter().filter(|s| **s == Step::Section).count(), 3);
        assert_eq!(*steps.last().unwrap(), Step::Completed);
        assert_eq!(cursor.advance(&catalog), Step::Stay);

        let last = cursor;
        assert!(!cursor.can_retreat());
        assert_eq!(cursor.retreat(&catalog), Step::Stay);
        assert_eq!(cursor, last);
    }

    #[test]
    fn test_section_boundary() {
        let catalog = Catalog::builtin();
        let mut cursor = Cursor::new();
        assert_eq!(cursor.advance(&catalog), Step::Question);
        assert_eq!(cursor.current(&catalog).unwrap().id, "intro-2");
        assert_eq!(cursor.advance(&catalog), Step::Section);
        assert_eq!((cursor.section_index(), cursor.question_index()), (1, 0));
        assert_eq!(cursor.current(&catalog).unwrap().id, "psych-1");
        assert_eq!(cursor.position(&catalog), 2);

        assert_eq!(cursor.retreat(&catalog), Step::Section);
        assert_eq!((cursor.section_index(), cursor.question_index()), (0, 1));
    }

    #[test]
    fn test_retreat_at_origin_is_noop() {
        let catalog = Catalog::builtin();
        let mut cursor = Cursor::new();
        assert!(!cursor.can_retreat());
        assert_eq!(cursor.retreat(&catalog), Step::Stay);
        assert!(cursor.is_at_origin());
    }

    #[test]
    fn test_reset() {
        let catalog = Catalog::builtin();
        let mut cursor = Cursor::new();
        for _ in 0..catalog.total_questions() {
            cursor.advance(&catalog);
        }
        assert!(!cursor.can_retreat());
        assert_eq!(cursor.retreat(&catalog), Step::Stay);

        cursor.reset();
        assert!(cursor.is_at_origin());
        assert!(!cursor.is_complete());
    }
}
