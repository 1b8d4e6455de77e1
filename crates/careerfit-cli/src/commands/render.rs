//! Plain-text rendering of questions and results.

use std::io::{self, Write};

use careerfit_core::{Question, Results, Section};

pub fn write_section_header<W: Write>(out: &mut W, section: &Section) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== {} ==", section.title)?;
    writeln!(out, "{}", section.description)
}

pub fn write_question<W: Write>(
    out: &mut W,
    question: &Question,
    position: usize,
    total: usize,
    current_answer: Option<String>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{position}/{total}] {}", question.text)?;

    if let Some(scale) = &question.scale {
        for (point, label) in (scale.min..=scale.max).zip(&scale.labels) {
            writeln!(out, "  {point}. {label}")?;
        }
    }
    if let Some(options) = &question.options {
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "  {}. {} ({})", i + 1, option.label, option.value)?;
        }
    }
    if let Some(answer) = current_answer {
        writeln!(out, "  current answer: {answer} (press enter to keep)")?;
    }
    Ok(())
}

pub fn write_results<W: Write>(out: &mut W, results: &Results, show_reasoning: bool) -> io::Result<()> {
    let wiscar = &results.wiscar_scores;

    writeln!(out)?;
    writeln!(out, "== Results ==")?;
    writeln!(
        out,
        "Recommendation: {} (confidence {}%)",
        results.recommendation.to_string().to_uppercase(),
        results.confidence_score
    )?;
    writeln!(out, "Overall score:        {}%", results.overall_score)?;
    writeln!(out, "Psychological fit:    {}%", results.psychological_fit)?;
    writeln!(out, "Technical readiness:  {}%", results.technical_readiness)?;
    writeln!(out)?;
    writeln!(out, "WISCAR")?;
    writeln!(out, "  Will:                 {}%", wiscar.will)?;
    writeln!(out, "  Interest:             {}%", wiscar.interest)?;
    writeln!(out, "  Skill:                {}%", wiscar.skill)?;
    writeln!(out, "  Cognitive:            {}%", wiscar.cognitive)?;
    writeln!(out, "  Ability to learn:     {}%", wiscar.ability)?;
    writeln!(out, "  Real-world alignment: {}%", wiscar.real_world_alignment)?;

    if show_reasoning {
        writeln!(out)?;
        writeln!(out, "{}", results.reasoning)?;
    }

    if !results.career_paths.is_empty() {
        writeln!(out)?;
        writeln!(out, "Career paths")?;
        for path in &results.career_paths {
            writeln!(out, "  {}% {} ({})", path.match_score, path.title, path.salary_range)?;
            writeln!(out, "       {}", path.description)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Learning path")?;
    for stage in &results.learning_path {
        writeln!(out, "  {}: {}", stage.level, stage.description)?;
        writeln!(out, "       {}", stage.resources.join(", "))?;
    }

    if !results.improvements.is_empty() {
        writeln!(out)?;
        writeln!(out, "Areas to improve")?;
        for item in &results.improvements {
            writeln!(out, "  - {item}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerfit_core::{Catalog, ScoringEngine};

    #[test]
    fn results_text_lists_scores_and_paths() {
        let catalog = Catalog::builtin();
        let responses: Vec<_> = catalog
            .questions()
            .map(|q| careerfit_core::Response::new(q.id.clone(), 5))
            .collect();
        let results = ScoringEngine::deterministic().score(catalog.index(), &responses);

        let mut out = Vec::new();
        write_results(&mut out, &results, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Recommendation: YES (confidence 85%)"));
        assert!(text.contains(&format!("Overall score:        {}%", results.overall_score)));
        assert!(text.contains("Training & Enablement Specialist"));
        assert!(text.contains(&results.reasoning));

        let mut out = Vec::new();
        write_results(&mut out, &results, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(&results.reasoning));
    }

    #[test]
    fn question_text_lists_options() {
        let catalog = Catalog::builtin();
        let question = catalog.question("tech-2").unwrap();
        let mut out = Vec::new();
        write_question(&mut out, question, 9, 21, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[9/21]"));
        assert!(text.contains("1. Analyze completion data and identify drop-off points (data)"));
    }
}
