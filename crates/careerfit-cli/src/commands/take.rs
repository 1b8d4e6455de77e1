use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Args;
use careerfit_core::{AssessmentSession, Config, OutputFormat, Question, ResponseValue};

use super::{output_format, render};

#[derive(Args)]
pub struct TakeArgs {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line of user input, interpreted against the current question.
#[derive(Debug, PartialEq)]
enum Input {
    Answer(ResponseValue),
    /// Blank line: keep the recorded answer and move on.
    Keep,
    Back,
    Quit,
}

fn parse_input(question: &Question, line: &str) -> Result<Input, String> {
    let line = line.trim();
    match line {
        "" => return Ok(Input::Keep),
        "b" | "back" => return Ok(Input::Back),
        "q" | "quit" => return Ok(Input::Quit),
        _ => {}
    }

    if let Some(scale) = &question.scale {
        return match line.parse::<i32>() {
            Ok(point) if (scale.min..=scale.max).contains(&point) => {
                Ok(Input::Answer(ResponseValue::from(point)))
            }
            _ => Err(format!("enter a number from {} to {}", scale.min, scale.max)),
        };
    }

    let options = question.options.as_deref().unwrap_or_default();
    if let Ok(n) = line.parse::<usize>() {
        if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
            return Ok(Input::Answer(option.value.clone()));
        }
    }
    options
        .iter()
        .find(|option| option.value.to_string().eq_ignore_ascii_case(line))
        .map(|option| Input::Answer(option.value.clone()))
        .ok_or_else(|| format!("enter an option number from 1 to {} or its value", options.len()))
}

/// Walk the session to completion. Returns `false` if the user quit.
fn interview<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    input: R,
    out: &mut W,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut lines = input.lines();
    let mut shown_section = None;

    writeln!(out, "Answer with a number or option value. 'b' goes back, 'q' quits.")?;

    while !session.is_complete() {
        let question = session
            .current_question()
            .cloned()
            .ok_or("session cursor is outside the catalog")?;
        let progress = session.progress();

        if shown_section != Some(progress.section_index) {
            if let Some(section) = session.current_section() {
                render::write_section_header(out, section)?;
            }
            shown_section = Some(progress.section_index);
        }

        let current = session.response(&question.id).map(ToString::to_string);
        render::write_question(out, &question, progress.position, progress.total_questions, current)?;
        write!(out, "> ")?;
        out.flush()?;

        let line = lines
            .next()
            .ok_or("input ended before the assessment was complete")??;

        match parse_input(&question, &line) {
            Ok(Input::Quit) => {
                writeln!(out, "assessment abandoned")?;
                return Ok(false);
            }
            Ok(Input::Back) => {
                if session.can_retreat() {
                    session.retreat();
                } else {
                    writeln!(out, "already at the first question")?;
                }
            }
            Ok(Input::Keep) => {
                if session.can_advance() {
                    session.advance()?;
                } else {
                    writeln!(out, "please choose an answer")?;
                }
            }
            Ok(Input::Answer(value)) => {
                session.record_response(&question.id, value)?;
                session.advance()?;
            }
            Err(message) => writeln!(out, "{message}")?,
        }

        for event in session.drain_events() {
            tracing::debug!(?event, "session event");
        }
    }
    Ok(true)
}

pub fn run(args: TakeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let catalog = Arc::new(config.catalog()?);
    let mut session = AssessmentSession::with_engine(catalog, config.scoring_engine());
    let format = output_format(args.json, &config);

    let stdin = io::stdin();
    let finished = match format {
        // Prompts go to stderr so stdout carries only the JSON document.
        OutputFormat::Json => interview(&mut session, stdin.lock(), &mut io::stderr())?,
        OutputFormat::Text => interview(&mut session, stdin.lock(), &mut io::stdout())?,
    };
    if !finished {
        return Ok(());
    }

    let results = session.results()?;
    tracing::info!(
        session = %session.id(),
        seconds = session.duration_seconds(),
        "assessment finished"
    );
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Text => {
            let stdout = io::stdout();
            render::write_results(&mut stdout.lock(), results, config.output.show_reasoning)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerfit_core::{Catalog, QuestionType, ScoringEngine};

    fn session() -> AssessmentSession {
        AssessmentSession::with_engine(Arc::new(Catalog::builtin()), ScoringEngine::deterministic())
    }

    /// "4" for every scale question, the first option otherwise.
    fn script(catalog: &Catalog) -> Vec<String> {
        catalog
            .questions()
            .map(|q| match q.kind {
                QuestionType::Scale => "4".to_string(),
                _ => "1".to_string(),
            })
            .collect()
    }

    #[test]
    fn parse_scale_input() {
        let catalog = Catalog::builtin();
        let q = catalog.question("intro-1").unwrap();
        assert_eq!(parse_input(q, " 5 "), Ok(Input::Answer(ResponseValue::from(5))));
        assert!(parse_input(q, "6").is_err());
        assert!(parse_input(q, "yes").is_err());
        assert_eq!(parse_input(q, ""), Ok(Input::Keep));
        assert_eq!(parse_input(q, "b"), Ok(Input::Back));
        assert_eq!(parse_input(q, "q"), Ok(Input::Quit));
    }

    #[test]
    fn parse_option_input() {
        let catalog = Catalog::builtin();
        let q = catalog.question("intro-2").unwrap();
        assert_eq!(
            parse_input(q, "2"),
            Ok(Input::Answer(ResponseValue::from("content-creation")))
        );
        assert_eq!(
            parse_input(q, "Technology"),
            Ok(Input::Answer(ResponseValue::from("technology")))
        );
        assert!(parse_input(q, "0").is_err());
        assert!(parse_input(q, "9").is_err());
    }

    #[test]
    fn interview_runs_to_completion() {
        let mut session = session();
        let input = script(session.catalog()).join("\n");
        let mut out = Vec::new();

        let finished = interview(&mut session, input.as_bytes(), &mut out).unwrap();
        assert!(finished);
        assert!(session.is_complete());
        assert_eq!(session.results().unwrap().overall_score, 70);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("== Role Introduction =="));
        assert!(text.contains("== WISCAR Framework Analysis =="));
        assert!(text.contains("[21/21]"));
    }

    #[test]
    fn interview_back_and_invalid_input() {
        let mut session = session();
        let mut lines = vec!["9".to_string(), "".to_string(), "3".to_string(), "b".to_string(), "".to_string()];
        lines.extend(script(session.catalog()).into_iter().skip(1));
        let input = lines.join("\n");
        let mut out = Vec::new();

        assert!(interview(&mut session, input.as_bytes(), &mut out).unwrap());
        assert_eq!(session.response("intro-1"), Some(&ResponseValue::from(3)));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("enter a number from 1 to 5"));
        assert!(text.contains("please choose an answer"));
        assert!(text.contains("current answer: 3"));
    }

    #[test]
    fn interview_quit_and_eof() {
        let mut session = session();
        let mut out = Vec::new();
        assert!(!interview(&mut session, "4\nq\n".as_bytes(), &mut out).unwrap());
        assert!(!session.is_complete());

        let mut session = self::session();
        let err = interview(&mut session, "4\n".as_bytes(), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }
}
