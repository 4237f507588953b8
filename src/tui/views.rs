//! Content of each wizard step.

use super::app::{DefineItem, WizardApp};
use super::layout::LayoutMode;
use super::radar;
use super::theme::Theme;
use crate::catalog::scenario;
use crate::core::{format_number, ScenarioSelection};
use crate::scoring::Analysis;
use crate::wizard::{allocator::REQUIRED_TOTAL, Step};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const NAME_COLUMN: usize = 28;

pub fn render_step(frame: &mut Frame, app: &WizardApp, area: Rect, theme: &Theme) {
    match app.wizard().step() {
        Step::Define => render_define(frame, app, area, theme),
        Step::Plan => render_plan(frame, app, area, theme),
        Step::Collect => render_collect(frame, app, area, theme),
        Step::Analyze => render_analyze(frame, app, area, theme),
    }
}

/// Pad `text` with spaces to `width` terminal columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Scroll offset that keeps `line` inside a viewport of `height` rows.
pub fn scroll_to(line: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    u16::try_from((line + 1).saturating_sub(height)).unwrap_or(u16::MAX)
}

fn focus_marker(focused: bool) -> &'static str {
    if focused {
        "▸ "
    } else {
        "  "
    }
}

fn render_lines(frame: &mut Frame, lines: Vec<Line<'static>>, focus_line: usize, area: Rect) {
    let widget = Paragraph::new(lines).scroll((scroll_to(focus_line, area.height), 0));
    frame.render_widget(widget, area);
}

fn render_define(frame: &mut Frame, app: &WizardApp, area: Rect, theme: &Theme) {
    let state = app.wizard().state();
    let mut lines = vec![Line::from(Span::styled(
        "📋 Load Predefined Case Study",
        theme.title_style(),
    ))];
    let mut focus_line = 0;

    for (index, item) in WizardApp::define_items().into_iter().enumerate() {
        let focused = index == app.cursor();
        match item {
            DefineItem::Scenario(id) => {
                let case = scenario(id);
                let active = state.selected_scenario == Some(ScenarioSelection::Preset(id));
                if focused {
                    focus_line = lines.len() + 2;
                }
                let title_style = if active {
                    theme.completed_style()
                } else {
                    theme.row_style(focused)
                };
                lines.push(Line::from(vec![
                    Span::styled(focus_marker(focused), theme.active_style()),
                    Span::styled(if active { "● " } else { "○ " }, title_style),
                    Span::styled(case.title, title_style),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {}", case.description),
                    theme.muted_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("    {} dimensions included", case.targets.len()),
                    theme.muted_style(),
                )));
            }
            DefineItem::Characteristic(id) => {
                if id.index() == 0 {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled(
                        "Or Select Dimensions Manually (ISO 25010)",
                        theme.title_style(),
                    )));
                }
                if focused {
                    focus_line = lines.len();
                }
                let selected = state.characteristic(id).selected;
                lines.push(Line::from(vec![
                    Span::styled(focus_marker(focused), theme.active_style()),
                    Span::styled(
                        if selected { "[✓] " } else { "[ ] " },
                        theme.completed_style(),
                    ),
                    Span::styled(id.display_name(), theme.row_style(focused)),
                ]));
            }
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Selected: ", theme.muted_style()),
        Span::styled(
            format!("{} dimension(s)", state.selected_count()),
            theme.active_style(),
        ),
    ]));

    render_lines(frame, lines, focus_line, area);
}

fn render_plan(frame: &mut Frame, app: &WizardApp, area: Rect, theme: &Theme) {
    let state = app.wizard().state();
    let mut lines = Vec::new();

    if state.in_case_study_mode() {
        lines.push(Line::from(vec![
            Span::styled("Case Study Mode: ", theme.active_style()),
            Span::styled(
                "You can adjust the pre-configured weights below.",
                theme.text_style(),
            ),
        ]));
        lines.push(Line::default());
    }

    let mut focus_line = 0;
    for (index, id) in app.weight_fields().into_iter().enumerate() {
        let focused = index == app.cursor();
        if focused {
            focus_line = lines.len();
        }
        let characteristic = state.characteristic(id);
        lines.push(Line::from(vec![
            Span::styled(focus_marker(focused), theme.active_style()),
            Span::styled(
                pad_to_width(&characteristic.name, NAME_COLUMN),
                theme.row_style(focused),
            ),
            Span::styled(
                format!(" {:>3} ", characteristic.weight),
                theme.field_style(focused),
            ),
            Span::styled(" %", theme.muted_style()),
        ]));
    }

    let total = state.total_weight();
    let valid = total == REQUIRED_TOTAL;
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            pad_to_width(
                if valid {
                    "Total Weight Correct"
                } else {
                    "Total Weight must be 100%"
                },
                NAME_COLUMN + 2,
            ),
            theme.status_style(valid),
        ),
        Span::styled(format!(" {:>3}%", total), theme.status_style(valid)),
    ]));

    render_lines(frame, lines, focus_line, area);
}

fn render_collect(frame: &mut Frame, app: &WizardApp, area: Rect, theme: &Theme) {
    let state = app.wizard().state();
    let fields = app.metric_fields();
    let focused_field = fields.get(app.cursor());
    let mut lines = Vec::new();
    let mut focus_line = 0;

    for characteristic in state.selected() {
        lines.push(Line::from(Span::styled(
            characteristic.name.clone(),
            theme.title_style(),
        )));
        if characteristic.metrics.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No metrics defined for this characteristic.",
                theme.muted_style(),
            )));
        }
        for metric in &characteristic.metrics {
            let focused = focused_field.is_some_and(|f| {
                f.characteristic == characteristic.id && f.metric == metric.id()
            });
            if focused {
                focus_line = lines.len() + 2;
            }
            let definition = &metric.definition;
            lines.push(Line::from(vec![
                Span::styled(focus_marker(focused), theme.active_style()),
                Span::styled(
                    pad_to_width(&definition.name, NAME_COLUMN),
                    theme.row_style(focused),
                ),
                Span::styled(
                    format!(" {:>8} ", metric.display_value()),
                    theme.field_style(focused),
                ),
                Span::styled(format!(" {}", definition.unit), theme.muted_style()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", definition.desc),
                theme.muted_style(),
            )));
            let mut info = vec![Span::styled(
                format!(
                    "    Range: {} - {}",
                    format_number(definition.min),
                    format_number(definition.max)
                ),
                theme.muted_style(),
            )];
            if definition.inverse {
                info.push(Span::styled("  Lower is better", theme.badge_style()));
            }
            lines.push(Line::from(info));
        }
        lines.push(Line::default());
    }

    render_lines(frame, lines, focus_line, area);
}

/// Text lines of the results panel: score card, gaps, recommendations.
pub fn analysis_lines(analysis: &Analysis, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Overall Weighted Quality Score",
            theme.title_style(),
        )),
        Line::from(vec![
            Span::styled(
                analysis.overall_display(),
                theme.rating_style(analysis.rating),
            ),
            Span::styled("/100", theme.muted_style()),
        ]),
        Line::from(Span::styled(
            format!("{} Quality", analysis.rating),
            theme.rating_style(analysis.rating),
        )),
        Line::default(),
        Line::from(Span::styled(
            "⚠ Gap Analysis (Target: 100)",
            theme.title_style(),
        )),
    ];

    for c in &analysis.characteristics {
        let badge = c.gap.severity.map(|s| s.label()).unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(pad_to_width(&c.name, NAME_COLUMN), theme.text_style()),
            Span::styled(
                pad_to_width(badge, 10),
                theme.severity_style(c.gap.severity),
            ),
            Span::styled(format!("{:>3}  ", c.score), theme.title_style()),
            Span::styled(c.gap.label(), theme.severity_style(c.gap.severity)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "💡 Automated Recommendations",
        theme.title_style(),
    )));
    if let Some(message) = analysis.advice.all_clear_message() {
        lines.push(Line::from(vec![
            Span::styled("✓ ", theme.completed_style()),
            Span::styled(message.to_string(), theme.completed_style()),
        ]));
    }
    for (i, item) in analysis.advice.items().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), theme.active_style()),
            Span::styled(item.text.clone(), theme.text_style()),
        ]));
    }

    if !analysis.issues.is_empty() {
        lines.push(Line::default());
        for issue in &analysis.issues {
            lines.push(Line::from(Span::styled(
                issue.to_string(),
                theme.status_style(false),
            )));
        }
    }
    lines
}

fn render_analyze(frame: &mut Frame, app: &WizardApp, area: Rect, theme: &Theme) {
    let analysis = app.wizard().analysis();
    let (text_area, chart_area) = LayoutMode::from_terminal_width(area.width).split(area);

    let text = Paragraph::new(analysis_lines(&analysis, theme))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0));
    frame.render_widget(text, text_area);
    radar::render(frame, &analysis.chart, chart_area, theme);
}
