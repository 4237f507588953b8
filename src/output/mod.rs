//! Report writers for a finished [`Analysis`].

pub mod json;
pub mod markdown;
pub mod terminal;

use crate::errors::Result;
use crate::formatting::FormattingConfig;
use crate::scoring::Analysis;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_analysis(&mut self, analysis: &Analysis) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    out: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
    }
}

/// Pick the report format: explicit flag, then a `.md` output path, then
/// the configured default, then terminal.
pub fn resolve_format(
    explicit: Option<OutputFormat>,
    configured: Option<OutputFormat>,
    output_file: Option<&Path>,
) -> OutputFormat {
    explicit
        .or_else(|| {
            output_file
                .filter(|p| is_markdown_file(p))
                .map(|_| OutputFormat::Markdown)
        })
        .or(configured)
        .unwrap_or_default()
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

/// Render a report into a string.
pub fn render_report(
    analysis: &Analysis,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    let mut buffer = Vec::new();
    create_writer(format, &mut buffer, formatting).write_analysis(analysis)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a report to `output_file`, or stdout when none is given.
///
/// Files never receive ANSI colors.
pub fn write_report(
    analysis: &Analysis,
    format: OutputFormat,
    formatting: FormattingConfig,
    output_file: Option<&Path>,
) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let content = render_report(analysis, format, FormattingConfig::plain())?;
            fs::write(path, content)?;
            tracing::info!(path = %path.display(), ?format, "Report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = create_writer(format, stdout.lock(), formatting);
            writer.write_analysis(analysis)?;
        }
    }
    Ok(())
}
