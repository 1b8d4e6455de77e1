use std::path::PathBuf;

use clap::Args;
use careerfit_core::{score_responses, Config, OutputFormat, Response};

use super::{output_format, render};

#[derive(Args)]
pub struct ScoreArgs {
    /// JSON file holding `[{"questionId": ..., "value": ...}]`
    pub file: PathBuf,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let catalog = config.catalog()?;
    let mut engine = config.scoring_engine();

    let content = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("cannot read {}: {e}", args.file.display()))?;
    let responses: Vec<Response> = serde_json::from_str(&content)?;
    tracing::info!(count = responses.len(), file = %args.file.display(), "scoring responses");

    let results = score_responses(&catalog, &responses, &mut engine)?;

    match output_format(args.json, &config) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            render::write_results(&mut stdout.lock(), &results, config.output.show_reasoning)?;
        }
    }
    Ok(())
}
