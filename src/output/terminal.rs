use super::OutputWriter;
use crate::core::format_number;
use crate::errors::Result;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::scoring::{Analysis, CharacteristicScore, GapSeverity, Rating};
use comfy_table::{presets, ContentArrangement, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatting,
            formatter: formatter_for(formatting),
        }
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        let preset = if self.formatting == FormattingConfig::plain() {
            presets::ASCII_FULL
        } else {
            presets::UTF8_FULL
        };
        table
            .load_preset(preset)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn write_header(&mut self, analysis: &Analysis) -> Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("ISO 15939 Measurement Report"))?;
        writeln!(self.writer, "{}", f.dim(&analysis.project_name))?;
        writeln!(self.writer)?;

        let score = format!("{} / 100", analysis.overall_display());
        let rating = format!("{} Quality", analysis.rating);
        let rating = match analysis.rating {
            Rating::Excellent | Rating::VeryGood => f.success(&rating),
            Rating::Good => f.info(&rating),
            Rating::Fair => f.warning(&rating),
            Rating::Poor => f.error(&rating),
        };
        writeln!(
            self.writer,
            "{} Overall Score: {}  ({})",
            f.emoji("📊", "*"),
            f.bold(&score),
            rating
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_characteristics(&mut self, analysis: &Analysis) -> Result<()> {
        if analysis.characteristics.is_empty() {
            writeln!(self.writer, "No characteristics selected.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let mut table = self.new_table();
        table.set_header(vec!["Characteristic", "Weight", "Score", "Gap", "Severity"]);
        for c in &analysis.characteristics {
            table.add_row(vec![
                c.name.clone(),
                format!("{}%", c.weight),
                c.score.to_string(),
                c.gap.label(),
                severity_label(c).to_string(),
            ]);
        }
        writeln!(self.writer, "{}", self.formatter.bold("Gap Analysis"))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, analysis: &Analysis) -> Result<()> {
        let mut table = self.new_table();
        table.set_header(vec!["Characteristic", "Metric", "Value", "Range", "Score"]);
        let mut rows = 0;
        for c in &analysis.characteristics {
            for m in &c.metrics {
                let direction = if m.inverse { " (lower is better)" } else { "" };
                table.add_row(vec![
                    c.name.clone(),
                    format!("{}{}", m.name, direction),
                    format!("{} {}", format_number(m.raw), m.unit),
                    format!("{} - {}", format_number(m.min), format_number(m.max)),
                    m.score.to_string(),
                ]);
                rows += 1;
            }
        }
        if rows > 0 {
            writeln!(self.writer, "{}", self.formatter.bold("Metrics"))?;
            writeln!(self.writer, "{table}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_advice(&mut self, analysis: &Analysis) -> Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.bold("Recommendations"))?;
        if let Some(message) = analysis.advice.all_clear_message() {
            writeln!(
                self.writer,
                "{} {}",
                f.success(&f.emoji("✓", "[OK]")),
                message
            )?;
        }
        for (i, item) in analysis.advice.items().iter().enumerate() {
            let name = item.characteristic.display_name();
            writeln!(
                self.writer,
                "{}. {} {}",
                i + 1,
                f.warning(&format!("{name}:")),
                item.text
            )?;
        }
        Ok(())
    }

    fn write_issues(&mut self, analysis: &Analysis) -> Result<()> {
        if analysis.issues.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        for issue in &analysis.issues {
            let marker = self.formatter.emoji("⚠", "[WARN]");
            writeln!(
                self.writer,
                "{}",
                self.formatter.error(&format!("{marker} {issue}"))
            )?;
        }
        Ok(())
    }
}

fn severity_label(score: &CharacteristicScore) -> &'static str {
    score
        .gap
        .severity
        .map(|s: GapSeverity| s.label())
        .unwrap_or("-")
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis) -> Result<()> {
        self.write_header(analysis)?;
        self.write_characteristics(analysis)?;
        self.write_metrics(analysis)?;
        self.write_advice(analysis)?;
        self.write_issues(analysis)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::mobile_analysis;

    fn render(analysis: &Analysis) -> String {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_analysis(analysis)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_terminal_report() {
        let text = render(&mobile_analysis());

        assert!(text.contains("Overall Score: 80.3 / 100  (Very Good Quality)"));
        assert!(text.contains("Portability"));
        assert!(text.contains("Gap: -48"));
        assert!(text.contains("Critical"));
        assert!(text.contains("Perfect"));
        assert!(text.contains("1. Performance Efficiency:"));
        assert!(text.contains("2. Portability:"));
        assert!(
            !text.contains('\u{1b}'),
            "plain output must not contain ANSI escapes"
        );
    }

    #[test]
    fn test_degenerate_issue_is_reported() {
        let mut analysis = mobile_analysis();
        analysis.issues.push(crate::scoring::ScoringIssue::DegenerateRange {
            characteristic: crate::core::CharacteristicId::Usability,
            metric: "m_flat".into(),
        });
        let text = render(&analysis);
        assert!(text.contains("[WARN] Configuration error: metric usab/m_flat"));
    }
}
