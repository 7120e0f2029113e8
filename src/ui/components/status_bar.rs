//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::records::AttendanceStatus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.store.is_loading() {
            "⟳ Loading records...".to_string()
        } else {
            let counts: Vec<String> = AttendanceStatus::ALL
                .iter()
                .map(|s| format!("{}: {}", s.title(), app.store.lane_count(*s)))
                .collect();
            let mode = if app.touch_input { " • touch input" } else { "" };
            format!(
                "{} • drag cards to move • r: refresh • ?: help • q: quit{}",
                counts.join("  "),
                mode
            )
        };

        let status_color = if app.store.is_loading() {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
