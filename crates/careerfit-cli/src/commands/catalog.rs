use clap::{Subcommand, ValueEnum};
use careerfit_core::Config;

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Toml,
    Json,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List sections and their questions
    List,
    /// Show one question in full
    Show {
        /// Question id (e.g. "psych-1")
        id: String,
    },
    /// Print the whole catalog
    Export {
        #[arg(long, value_enum, default_value = "toml")]
        format: ExportFormat,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Config::load()?.catalog()?;

    match action {
        CatalogAction::List => {
            for (i, section) in catalog.sections().iter().enumerate() {
                println!("{}. {} [{}]", i + 1, section.title, section.id);
                for question in &section.questions {
                    println!(
                        "   {:<14} {:<16} {}",
                        question.id,
                        question.kind.to_string(),
                        question.category
                    );
                }
            }
            println!("{} questions", catalog.total_questions());
        }
        CatalogAction::Show { id } => {
            let question = catalog
                .question(&id)
                .ok_or_else(|| format!("unknown question: {id}"))?;
            println!("id:          {}", question.id);
            println!("type:        {}", question.kind);
            println!("category:    {}", question.category);
            if let Some(subcategory) = &question.subcategory {
                println!("subcategory: {subcategory}");
            }
            println!("text:        {}", question.text);
            if let Some(scale) = &question.scale {
                for (point, label) in (scale.min..=scale.max).zip(&scale.labels) {
                    println!("  {point}: {label}");
                }
            }
            if let Some(options) = &question.options {
                for option in options {
                    match option.weight {
                        Some(weight) => println!("  {}: {} (weight {weight})", option.value, option.label),
                        None => println!("  {}: {}", option.value, option.label),
                    }
                }
            }
        }
        CatalogAction::Export { format } => {
            let out = match format {
                ExportFormat::Toml => catalog.to_toml_string()?,
                ExportFormat::Json => catalog.to_json_string()?,
            };
            println!("{out}");
        }
    }
    Ok(())
}
