//! Text and recommendation artifacts derived from the numeric scores.

use serde::{Deserialize, Serialize};

use super::{Recommendation, WiscarScores};

/// Scores below this trigger an improvement suggestion.
const IMPROVEMENT_THRESHOLD: u32 = 70;
const MAX_IMPROVEMENTS: usize = 4;
const MAX_CAREER_PATHS: usize = 3;

/// A career path ranked by how well it matches the overall score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    /// Match percentage (0-100).
    #[serde(rename = "match")]
    pub match_score: u32,
    pub salary_range: String,
    pub description: String,
}

struct CareerPathTemplate {
    title: &'static str,
    salary_range: &'static str,
    description: &'static str,
    offset: u32,
}

const CAREER_PATHS: [CareerPathTemplate; 4] = [
    CareerPathTemplate {
        title: "Training & Enablement Specialist",
        salary_range: "$60k - $90k",
        description: "Design and deliver comprehensive training programs to enhance team performance and product knowledge.",
        offset: 5,
    },
    CareerPathTemplate {
        title: "Instructional Designer",
        salary_range: "$65k - $95k",
        description: "Create engaging learning experiences and educational materials using systematic design approaches.",
        offset: 10,
    },
    CareerPathTemplate {
        title: "Learning & Development Manager",
        salary_range: "$75k - $110k",
        description: "Lead organizational learning initiatives and manage training strategy across departments.",
        offset: 15,
    },
    CareerPathTemplate {
        title: "Corporate Trainer",
        salary_range: "$55k - $85k",
        description: "Deliver in-person and virtual training sessions on various professional development topics.",
        offset: 20,
    },
];

/// One stage of the suggested learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStage {
    pub level: String,
    pub description: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LearningLevel {
    pub fn stage(self) -> LearningStage {
        let (level, description, resources): (&str, &str, [&str; 4]) = match self {
            LearningLevel::Beginner => (
                "Beginner (0-6 months)",
                "Build foundational knowledge in learning theory and instructional design principles.",
                [
                    "ADDIE Model Course",
                    "Adult Learning Theory",
                    "Basic LMS Training",
                    "Communication Skills Workshop",
                ],
            ),
            LearningLevel::Intermediate => (
                "Intermediate (6-12 months)",
                "Develop practical skills in content creation and learner engagement strategies.",
                [
                    "Microlearning Design",
                    "Kirkpatrick Evaluation",
                    "Stakeholder Management",
                    "Data Analysis Basics",
                ],
            ),
            LearningLevel::Advanced => (
                "Job-Ready (12+ months)",
                "Master advanced techniques and earn industry certifications to become job-ready.",
                [
                    "ATD Certification",
                    "Portfolio Development",
                    "Advanced Analytics",
                    "Leadership Training",
                ],
            ),
        };
        LearningStage {
            level: level.to_string(),
            description: description.to_string(),
            resources: resources.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Narrative explanation of the recommendation.
pub fn reasoning(recommendation: Recommendation, overall: u32, psych: u32, tech: u32) -> String {
    match recommendation {
        Recommendation::Yes => format!(
            "Your assessment shows strong alignment with the Training & Enablement Specialist role. \
             You demonstrate excellent psychological fit ({psych}%) and solid technical readiness ({tech}%). \
             Your natural teaching inclination and communication skills position you well for success in this field."
        ),
        Recommendation::Maybe => {
            let focus = if psych < tech {
                "interpersonal skills and teaching motivation"
            } else {
                "technical learning design skills"
            };
            format!(
                "You show promise for the Training & Enablement Specialist role with some areas for development. \
                 While your overall score of {overall}% indicates potential, focusing on {focus} would strengthen your readiness."
            )
        }
        Recommendation::No => "Based on your responses, a Training & Enablement Specialist role may not be \
             the best fit at this time. Your assessment suggests exploring alternative career paths that \
             better align with your current interests and strengths."
            .to_string(),
    }
}

/// Up to three paths with a positive match, best first.
pub fn career_paths(overall: u32) -> Vec<CareerPath> {
    let mut paths: Vec<CareerPath> = CAREER_PATHS
        .iter()
        .map(|t| CareerPath {
            title: t.title.to_string(),
            match_score: overall.saturating_sub(t.offset),
            salary_range: t.salary_range.to_string(),
            description: t.description.to_string(),
        })
        .filter(|p| p.match_score > 0)
        .collect();
    paths.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    paths.truncate(MAX_CAREER_PATHS);
    paths
}

pub fn learning_path(recommendation: Recommendation) -> Vec<LearningStage> {
    let levels: &[LearningLevel] = match recommendation {
        Recommendation::Yes => &[LearningLevel::Intermediate, LearningLevel::Advanced],
        Recommendation::Maybe => &[
            LearningLevel::Beginner,
            LearningLevel::Intermediate,
            LearningLevel::Advanced,
        ],
        Recommendation::No => &[LearningLevel::Beginner],
    };
    levels.iter().map(|l| l.stage()).collect()
}

/// Suggestions for weak areas. Appended in a fixed order, then cut to four.
pub fn improvements(psych: u32, tech: u32, wiscar: &WiscarScores) -> Vec<String> {
    let mut items: Vec<&str> = Vec::new();

    if psych < IMPROVEMENT_THRESHOLD {
        items.push("Develop stronger communication and empathy skills through practice and training");
        items.push("Build experience in mentoring or teaching others informally");
    }
    if tech < IMPROVEMENT_THRESHOLD {
        items.push("Gain familiarity with learning management systems and instructional design tools");
        items.push("Study foundational learning theories and adult education principles");
    }
    if wiscar.skill < IMPROVEMENT_THRESHOLD {
        items.push("Enhance presentation and public speaking abilities");
        items.push("Develop analytical skills for learning data interpretation");
    }
    if wiscar.interest < IMPROVEMENT_THRESHOLD {
        items.push("Explore different learning methodologies to build genuine interest in the field");
    }

    items.truncate(MAX_IMPROVEMENTS);
    items.into_iter().map(String::from).collect()
}
