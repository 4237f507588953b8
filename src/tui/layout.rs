//! Frame layout: header, step indicator, content, footer, dialogs.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{Dialog, WizardApp, RESET_PROMPT};
use super::theme::Theme;
use super::views;
use crate::wizard::Step;

pub const APP_TITLE: &str = "ISO 15939 Measurement Process Simulator";
pub const APP_SUBTITLE: &str = "Learn software quality measurement using ISO 25010 quality model";

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Side-by-side panels (>= 100 cols)
    Wide,
    /// Stacked panels
    Narrow,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        if width >= 100 {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    pub fn split(&self, area: Rect) -> (Rect, Rect) {
        let (direction, constraints) = match self {
            Self::Wide => (
                Direction::Horizontal,
                [Constraint::Percentage(55), Constraint::Percentage(45)],
            ),
            Self::Narrow => (
                Direction::Vertical,
                [Constraint::Percentage(55), Constraint::Percentage(45)],
            ),
        };
        let chunks = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .split(area);
        (chunks[0], chunks[1])
    }
}

/// Calculate main layout for the wizard
pub fn calculate_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Step indicator
            Constraint::Length(3), // Section title
            Constraint::Min(3),    // Step content
            Constraint::Length(2), // Footer
        ])
        .split(area)
        .to_vec()
}

pub fn render(frame: &mut Frame, app: &WizardApp) {
    let theme = Theme::default();
    let chunks = calculate_layout(frame.area());
    let step = app.wizard().step();

    render_header(frame, app, chunks[0], &theme);
    render_step_indicator(frame, step, chunks[1], &theme);
    render_section_title(frame, step, chunks[2], &theme);
    views::render_step(frame, app, chunks[3], &theme);
    render_footer(frame, app, chunks[4], &theme);

    if let Some(dialog) = app.dialog() {
        render_dialog(frame, dialog, &theme);
    }
}

fn render_header(frame: &mut Frame, app: &WizardApp, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(APP_TITLE, theme.active_style())),
        Line::from(Span::styled(APP_SUBTITLE, theme.muted_style())),
        Line::from(Span::styled(
            app.wizard().state().project_name.clone(),
            theme.text_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Step marker text: a check mark once passed, otherwise the number.
pub fn step_marker(step: Step, current: Step) -> String {
    if step.number() < current.number() {
        "✓".to_string()
    } else {
        step.number().to_string()
    }
}

fn render_step_indicator(frame: &mut Frame, current: Step, area: Rect, theme: &Theme) {
    let mut spans = Vec::new();
    for (i, step) in Step::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ──  ", theme.pending_style()));
        }
        let style = if *step == current {
            theme.active_style()
        } else if step.number() < current.number() {
            theme.completed_style()
        } else {
            theme.pending_style()
        };
        spans.push(Span::styled(
            format!("{} {}", step_marker(*step, current), step.label()),
            style,
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

pub fn section_subtitle(step: Step) -> &'static str {
    match step {
        Step::Define => "Select the ISO 25010 quality characteristics to measure.",
        Step::Plan => {
            "Assign percentage weights to each selected dimension. Total must equal 100%."
        }
        Step::Collect => {
            "Enter simulated measurement values for each sub-characteristic based on ISO 25023 metrics."
        }
        Step::Analyze => {
            "Analysis results based on ISO 25010 quality model and ISO 15939 measurement process."
        }
    }
}

fn render_section_title(frame: &mut Frame, step: Step, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(step.title(), theme.title_style())),
        Line::from(Span::styled(section_subtitle(step), theme.muted_style())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn key_hints(step: Step) -> &'static str {
    match step {
        Step::Define => "↑↓ move  Enter/Space select  ←→ step  q quit",
        Step::Plan | Step::Collect => "↑↓ field  type to edit  Backspace delete  ←→ step  q quit",
        Step::Analyze => "↑↓ scroll  Enter new measurement  ← back  q quit",
    }
}

fn render_footer(frame: &mut Frame, app: &WizardApp, area: Rect, theme: &Theme) {
    let step = app.wizard().step();
    let previous_style = if step.previous().is_some() {
        theme.text_style()
    } else {
        theme.pending_style()
    };
    let next_label = if step.is_final() {
        "New Measurement ▸"
    } else {
        "Next ▸"
    };
    let nav = Line::from(vec![
        Span::styled("◂ Previous", previous_style),
        Span::raw("    "),
        Span::styled(format!("{} / 4", step.number()), theme.muted_style()),
        Span::raw("    "),
        Span::styled(next_label, theme.active_style()),
    ]);
    let hint = match app.status() {
        Some(status) => Line::from(Span::styled(status.to_string(), theme.badge_style())),
        None => Line::from(Span::styled(key_hints(step), theme.muted_style())),
    };
    frame.render_widget(
        Paragraph::new(vec![nav, hint]).alignment(Alignment::Center),
        area,
    );
}

/// Centered rectangle of at most `width` x `height` cells.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_dialog(frame: &mut Frame, dialog: &Dialog, theme: &Theme) {
    let (title, message, hint) = match dialog {
        Dialog::Alert { message } => (" Notice ", message.as_str(), "Press any key to continue"),
        Dialog::ConfirmReset => (" New Measurement ", RESET_PROMPT, "[y] Yes    [n] No"),
    };
    let area = centered_rect(60, 7, frame.area());
    let text = vec![
        Line::default(),
        Line::from(Span::styled(message.to_string(), theme.title_style())),
        Line::default(),
        Line::from(Span::styled(hint, theme.muted_style())),
    ];
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.badge_style()),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_from_width() {
        assert_eq!(LayoutMode::from_terminal_width(99), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_terminal_width(100), LayoutMode::Wide);
    }

    #[test]
    fn test_step_marker_checks_completed_steps() {
        assert_eq!(step_marker(Step::Define, Step::Collect), "✓");
        assert_eq!(step_marker(Step::Collect, Step::Collect), "3");
        assert_eq!(step_marker(Step::Analyze, Step::Collect), "4");
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 40, 5);
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 5));
    }

    #[test]
    fn test_calculate_layout_has_five_sections() {
        let chunks = calculate_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0].height, 3);
        assert_eq!(chunks[4].height, 2);
    }
}
