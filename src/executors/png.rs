//! Png command executor

use console::style;
use miette::Result;

use crate::config::PngOptions;
use crate::executors::CommandExecutor;
use crate::executors::dot::generate_dot;
use crate::rasterize::{DotRasterizer, RasterOutcome};

pub struct PngExecutor;

impl CommandExecutor for PngExecutor {
    type Config = PngOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let dot_file = generate_dot(&config.dot)?;
        let dot_path = dot_file.path().to_path_buf();

        eprintln!(
            "{} Converting to PNG with {}...",
            style("🖼").cyan(),
            style(&config.dot_program).bold()
        );

        let rasterizer = DotRasterizer::new(config.dot_program.as_str()).with_timeout(config.timeout);

        // Conversion is best effort; the DOT file stays on any failure
        let outcome = match rasterizer.rasterize(&dot_path) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!(
                    "{} Could not convert graph: {err}. The DOT file was kept at {}",
                    style("⚠").yellow(),
                    dot_path.display()
                );
                return Ok(());
            }
        };

        match outcome {
            RasterOutcome::Converted(png_path) => {
                eprintln!(
                    "{} PNG written to {}",
                    style("✓").green(),
                    style(png_path.display()).bold()
                );
                if !config.keep_dot {
                    dot_file.remove()?;
                }
            }
            RasterOutcome::TimedOut => {
                eprintln!(
                    "{} {} did not finish within {}s. The DOT file was kept at {}",
                    style("⚠").yellow(),
                    rasterizer.program(),
                    config.timeout.as_secs(),
                    dot_path.display()
                );
            }
            RasterOutcome::Failed { status, stderr } => {
                let status = status
                    .map(|code| format!("exit code {code}"))
                    .unwrap_or_else(|| "a signal".to_string());
                eprintln!(
                    "{} {} failed with {status}. The DOT file was kept at {}",
                    style("⚠").yellow(),
                    rasterizer.program(),
                    dot_path.display()
                );
                if !stderr.is_empty() {
                    eprintln!("  {}", style(stderr).dim());
                }
            }
        }

        Ok(())
    }
}
