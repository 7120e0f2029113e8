//! Logs overlay showing the in-memory log buffer, newest first.

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

pub struct LogsPanel;

impl LogsPanel {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(70, 70, f.area());
        f.render_widget(Clear, area);

        let items: Vec<ListItem> = app
            .logger
            .get_logs()
            .into_iter()
            .map(ListItem::new)
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Logs ")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Gray));
        f.render_widget(list, area);
    }
}
