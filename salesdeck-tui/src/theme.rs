//! SynthBrute theme and color utilities.

use crate::notifications::NotificationLevel;
use salesdeck_core::{DealStage, SortDirection};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct SynthBruteTheme {
    pub bg: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub secondary_dim: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SynthBruteTheme {
    pub fn synthbrute() -> Self {
        Self {
            bg: Color::Rgb(10, 10, 10),
            bg_secondary: Color::Rgb(26, 26, 26),
            bg_highlight: Color::Rgb(42, 42, 42),
            primary: Color::Rgb(0, 255, 255),
            primary_dim: Color::Rgb(0, 136, 136),
            secondary: Color::Rgb(255, 0, 255),
            secondary_dim: Color::Rgb(136, 0, 136),
            tertiary: Color::Rgb(255, 255, 0),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            text_muted: Color::Rgb(68, 68, 68),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Header cell of the column currently sorted on.
    pub fn sorted_header(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row(&self) -> Style {
        Style::default()
            .bg(self.bg_highlight)
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

pub fn deal_stage_color(stage: DealStage, theme: &SynthBruteTheme) -> Color {
    match stage {
        DealStage::FirstMeetingScheduled | DealStage::Discovery => theme.primary_dim,
        DealStage::Demo | DealStage::Proposal => theme.primary,
        DealStage::Negotiation => theme.tertiary,
        DealStage::ClosedWon => theme.success,
        DealStage::ClosedLost => theme.error,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &SynthBruteTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
    }
}

/// Header label with the sort marker when the column is the sort field.
pub fn header_label(title: &str, sorted: Option<SortDirection>) -> String {
    match sorted {
        Some(direction) => format!("{} {}", title, direction.arrow()),
        None => title.to_string(),
    }
}
