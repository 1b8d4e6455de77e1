pub mod catalog;
pub mod config;
pub mod render;
pub mod score;
pub mod take;

use careerfit_core::{Config, OutputFormat};

/// `--json` wins; otherwise the configured format.
pub(crate) fn output_format(json_flag: bool, config: &Config) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output.format
    }
}
