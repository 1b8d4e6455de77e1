//! Built-in question set for the Training & Enablement Specialist role.

use super::{Category, Question, QuestionOption, QuestionType, Section};

const AGREEMENT: [&str; 5] = [
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

fn agreement(id: &str, text: &str, category: Category, subcategory: &str) -> Question {
    Question::scale(id, text, category, 1, 5, &AGREEMENT).with_subcategory(subcategory)
}

fn options(pairs: &[(&str, &str)]) -> Vec<QuestionOption> {
    pairs
        .iter()
        .map(|(value, label)| QuestionOption::new(*value, *label))
        .collect()
}

pub(super) fn sections() -> Vec<Section> {
    vec![
        Section {
            id: "introduction".to_string(),
            title: "Role Introduction".to_string(),
            description: "Understanding the Training & Enablement Specialist role and your initial interest"
                .to_string(),
            questions: vec![
                Question::scale(
                    "intro-1",
                    "How familiar are you with the role of a Training & Enablement Specialist?",
                    Category::Psychometric,
                    1,
                    5,
                    &[
                        "Not familiar",
                        "Somewhat familiar",
                        "Moderately familiar",
                        "Very familiar",
                        "Expert level",
                    ],
                ),
                Question::choice(
                    "intro-2",
                    "What initially attracts you to this career path?",
                    QuestionType::MultipleChoice,
                    Category::Psychometric,
                    options(&[
                        ("helping-others", "Helping others learn and grow"),
                        ("content-creation", "Creating educational content"),
                        ("strategic-impact", "Strategic business impact"),
                        ("technology", "Working with learning technologies"),
                        ("variety", "Variety in daily activities"),
                    ]),
                ),
            ],
        },
        Section {
            id: "psychometric".to_string(),
            title: "Personality & Motivation Assessment".to_string(),
            description: "Understanding your psychological fit for the role".to_string(),
            questions: vec![
                agreement(
                    "psych-1",
                    "I enjoy explaining complex ideas in a simple way",
                    Category::Psychometric,
                    "communication",
                ),
                agreement(
                    "psych-2",
                    "I prefer collaborative learning environments over solo work",
                    Category::Psychometric,
                    "social",
                ),
                agreement(
                    "psych-3",
                    "I regularly seek feedback to improve my teaching or mentoring approach",
                    Category::Psychometric,
                    "growth",
                ),
                Question::choice(
                    "psych-4",
                    "When teaching someone a new skill, I typically:",
                    QuestionType::MultipleChoice,
                    Category::Psychometric,
                    options(&[
                        ("demonstrate", "Show them how to do it first"),
                        ("explain", "Explain the theory behind it"),
                        ("practice", "Let them try while I guide"),
                        ("resources", "Provide resources for self-learning"),
                    ]),
                )
                .with_subcategory("teaching-style"),
                agreement(
                    "psych-5",
                    "I am energized by helping others overcome learning challenges",
                    Category::Psychometric,
                    "motivation",
                ),
            ],
        },
        Section {
            id: "technical".to_string(),
            title: "Technical Aptitude & Knowledge".to_string(),
            description: "Assessing your current technical skills and learning capacity".to_string(),
            questions: vec![
                Question::choice(
                    "tech-1",
                    "Which learning management systems (LMS) have you used?",
                    QuestionType::MultipleChoice,
                    Category::Technical,
                    options(&[
                        ("none", "I haven't used any LMS"),
                        ("basic", "Basic platforms (Google Classroom, Canvas)"),
                        ("corporate", "Corporate LMS (Cornerstone, Workday)"),
                        ("advanced", "Advanced platforms (Articulate, Adobe Captivate)"),
                        ("multiple", "Multiple platforms across categories"),
                    ]),
                )
                .with_subcategory("tools"),
                Question::choice(
                    "tech-2",
                    "A training program shows low completion rates. Your first step would be to:",
                    QuestionType::Scenario,
                    Category::Technical,
                    options(&[
                        ("data", "Analyze completion data and identify drop-off points"),
                        ("feedback", "Survey participants about barriers"),
                        ("content", "Review and simplify the content"),
                        ("stakeholders", "Meet with stakeholders to understand context"),
                    ]),
                )
                .with_subcategory("problem-solving"),
                Question::scale(
                    "tech-3",
                    "How familiar are you with instructional design models (like ADDIE or SAM)?",
                    Category::Technical,
                    1,
                    5,
                    &[
                        "Never heard of them",
                        "Heard but don't understand",
                        "Basic understanding",
                        "Can apply with guidance",
                        "Can implement independently",
                    ],
                )
                .with_subcategory("methodology"),
                Question::choice(
                    "tech-4",
                    "You need to create training for a technical topic you're unfamiliar with. How do you proceed?",
                    QuestionType::Scenario,
                    Category::Technical,
                    options(&[
                        ("research", "Research thoroughly before involving experts"),
                        ("collaborate", "Partner with subject matter experts from the start"),
                        ("prototype", "Create a draft and iterate based on expert feedback"),
                        ("outsource", "Find existing resources or external training"),
                    ]),
                )
                .with_subcategory("learning-agility"),
            ],
        },
        Section {
            id: "wiscar".to_string(),
            title: "WISCAR Framework Analysis".to_string(),
            description: "Comprehensive assessment of your readiness across multiple dimensions"
                .to_string(),
            questions: vec![
                Question::scale(
                    "will-1",
                    "I regularly help others learn even without formal rewards",
                    Category::Wiscar,
                    1,
                    5,
                    &["Never", "Rarely", "Sometimes", "Often", "Always"],
                )
                .with_subcategory("will"),
                agreement(
                    "will-2",
                    "I maintain consistency in learning and development activities over time",
                    Category::Wiscar,
                    "will",
                ),
                agreement(
                    "interest-1",
                    "I enjoy discovering better ways to teach people",
                    Category::Wiscar,
                    "interest",
                ),
                agreement(
                    "interest-2",
                    "I find myself naturally curious about how people learn best",
                    Category::Wiscar,
                    "interest",
                ),
                Question::scale(
                    "skill-1",
                    "Rate your current presentation and public speaking skills",
                    Category::Wiscar,
                    1,
                    5,
                    &["Beginner", "Developing", "Competent", "Proficient", "Expert"],
                )
                .with_subcategory("skill"),
                Question::scale(
                    "skill-2",
                    "How comfortable are you with data analysis and reporting?",
                    Category::Wiscar,
                    1,
                    5,
                    &[
                        "Very uncomfortable",
                        "Uncomfortable",
                        "Neutral",
                        "Comfortable",
                        "Very comfortable",
                    ],
                )
                .with_subcategory("skill"),
                Question::choice(
                    "cognitive-1",
                    "You're designing training for a complex process. You would:",
                    QuestionType::Scenario,
                    Category::Wiscar,
                    options(&[
                        ("linear", "Break it into sequential, linear steps"),
                        ("modular", "Create interconnected learning modules"),
                        ("adaptive", "Design adaptive pathways based on learner needs"),
                        ("immersive", "Use simulation or hands-on practice"),
                    ]),
                )
                .with_subcategory("cognitive"),
                Question::choice(
                    "ability-1",
                    "When I make mistakes in teaching or training, I:",
                    QuestionType::MultipleChoice,
                    Category::Wiscar,
                    options(&[
                        ("reflect", "Reflect deeply and adjust my approach"),
                        ("research", "Research better methods and practices"),
                        ("seek-feedback", "Ask for feedback from learners and peers"),
                        ("experiment", "Try different approaches until I find what works"),
                    ]),
                )
                .with_subcategory("ability"),
                Question::scale(
                    "real-world-1",
                    "How important is work-life balance to you?",
                    Category::Wiscar,
                    1,
                    5,
                    &[
                        "Not important",
                        "Slightly important",
                        "Moderately important",
                        "Very important",
                        "Extremely important",
                    ],
                )
                .with_subcategory("real-world"),
                Question::choice(
                    "real-world-2",
                    "You're offered a project that requires significant overtime but great learning opportunity. You:",
                    QuestionType::Scenario,
                    Category::Wiscar,
                    options(&[
                        ("accept", "Accept enthusiastically for the growth opportunity"),
                        ("negotiate", "Negotiate for better work-life balance terms"),
                        ("decline", "Decline to protect your personal time"),
                        ("partial", "Accept with clear boundaries and timelines"),
                    ]),
                )
                .with_subcategory("real-world"),
            ],
        },
    ]
}
