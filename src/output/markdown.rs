use super::OutputWriter;
use crate::core::format_number;
use crate::errors::Result;
use crate::scoring::Analysis;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "# ISO 15939 Measurement Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Project:** {}", analysis.project_name)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Overall Score")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{} / 100** ({} Quality)",
            analysis.overall_display(),
            analysis.rating
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gap_analysis(&mut self, analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "## Gap Analysis")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Characteristic | Weight | Score | Gap | Severity |"
        )?;
        writeln!(
            self.writer,
            "|----------------|--------|-------|-----|----------|"
        )?;
        for c in &analysis.characteristics {
            writeln!(
                self.writer,
                "| {} | {}% | {} | {} | {} |",
                c.name,
                c.weight,
                c.score,
                c.gap.label(),
                c.gap.severity.map(|s| s.label()).unwrap_or("-")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "## Metrics")?;
        for c in &analysis.characteristics {
            writeln!(self.writer)?;
            writeln!(self.writer, "### {}", c.name)?;
            writeln!(self.writer)?;
            if c.metrics.is_empty() {
                writeln!(self.writer, "_No metrics loaded._")?;
                continue;
            }
            writeln!(
                self.writer,
                "| Metric | Value | Range | Lower is better | Score |"
            )?;
            writeln!(
                self.writer,
                "|--------|-------|-------|-----------------|-------|"
            )?;
            for m in &c.metrics {
                writeln!(
                    self.writer,
                    "| {} | {} {} | {} - {} | {} | {} |",
                    m.name,
                    format_number(m.raw),
                    m.unit,
                    format_number(m.min),
                    format_number(m.max),
                    if m.inverse { "yes" } else { "no" },
                    m.score
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, analysis: &Analysis) -> Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        if let Some(message) = analysis.advice.all_clear_message() {
            writeln!(self.writer, "> {}", message)?;
        }
        for (i, item) in analysis.advice.items().iter().enumerate() {
            writeln!(
                self.writer,
                "{}. **{}**: {}",
                i + 1,
                item.characteristic.display_name(),
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
        writeln!(self.writer, "## Scoring Issues")?;
        writeln!(self.writer)?;
        for issue in &analysis.issues {
            writeln!(self.writer, "- {}", issue)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis) -> Result<()> {
        self.write_header(analysis)?;
        self.write_gap_analysis(analysis)?;
        self.write_metrics(analysis)?;
        self.write_recommendations(analysis)?;
        self.write_issues(analysis)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::mobile_analysis;

    #[test]
    fn test_markdown_report_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_analysis(&mobile_analysis())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# ISO 15939 Measurement Report\n"));
        assert!(text.contains("**80.3 / 100** (Very Good Quality)"));
        assert!(text.contains("| Compatibility | 25% | 100 | Perfect | - |"));
        assert!(text.contains("| Portability | 25% | 52 | Gap: -48 | Critical |"));
        assert!(text.contains("| Mean Response Time | 200 ms | 0 - 5000 | yes | 96 |"));
        assert!(text.contains("1. **Performance Efficiency**:"));
        assert!(!text.contains("## Scoring Issues"));
    }
}
