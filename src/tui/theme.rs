//! Color themes and styling for TUI components.

use crate::scoring::{GapSeverity, Rating};
use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the wizard
pub struct Theme {
    /// Primary accent color (cyan for active elements)
    pub primary: Color,
    /// Success color (green for completed elements)
    pub success: Color,
    /// Muted color (dark gray for pending/inactive elements)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
    pub warning: Color,
    pub critical: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            warning: Color::Yellow,
            critical: Color::Red,
        }
    }

    /// Style for completed step markers (✓)
    pub fn completed_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for the active step and the focused row
    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for pending steps
    pub fn pending_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Descriptions, units, ranges
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn row_style(&self, focused: bool) -> Style {
        if focused {
            self.active_style()
        } else {
            self.text_style()
        }
    }

    /// Editable value box
    pub fn field_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Color::Black)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.primary)
        }
    }

    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn severity_style(&self, severity: Option<GapSeverity>) -> Style {
        match severity {
            Some(GapSeverity::Critical) => Style::default()
                .fg(self.critical)
                .add_modifier(Modifier::BOLD),
            Some(GapSeverity::Moderate) => Style::default().fg(self.warning),
            None => Style::default().fg(self.success),
        }
    }

    pub fn rating_style(&self, rating: Rating) -> Style {
        let color = match rating {
            Rating::Excellent | Rating::VeryGood => self.success,
            Rating::Good => self.primary,
            Rating::Fair => self.warning,
            Rating::Poor => self.critical,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self, ok: bool) -> Style {
        if ok {
            Style::default().fg(self.success)
        } else {
            Style::default()
                .fg(self.critical)
                .add_modifier(Modifier::BOLD)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default_theme();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.muted, Color::DarkGray);
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        let theme = Theme::default_theme();
        let critical = theme.severity_style(Some(GapSeverity::Critical));
        let moderate = theme.severity_style(Some(GapSeverity::Moderate));
        let none = theme.severity_style(None);
        assert_ne!(critical.fg, moderate.fg);
        assert_ne!(moderate.fg, none.fg);
    }
}
