//! Simple modal dialog indicating loading state

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

pub struct LoadingDialog;

impl LoadingDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect_lines(40, 3, f.area());

        let title = if app.store.is_empty() {
            "Loading records"
        } else {
            "Updating"
        };
        let spinner = "⟳";
        let content = Paragraph::new(Line::from(Span::styled(
            format!("{spinner} {title}..."),
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(Clear, area);
        f.render_widget(content, area);
    }
}
