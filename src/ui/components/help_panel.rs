//! Help overlay listing the key and mouse bindings.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

pub struct HelpPanel;

impl HelpPanel {
    pub fn render(f: &mut Frame, _app: &App) {
        let area = LayoutManager::centered_rect(50, 60, f.area());
        f.render_widget(Clear, area);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let bindings = [
            ("drag", "move a card between lanes"),
            ("r", "refresh records"),
            ("?", "toggle this help"),
            ("L", "show logs"),
            ("Esc", "close overlay / quit"),
            ("q", "quit"),
        ];

        let mut lines = vec![Line::raw("")];
        for (key, description) in bindings {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{key:>6}"), key_style),
                Span::raw("  "),
                Span::raw(description),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Moving a card to Excused asks for a reason first.",
            Style::default().fg(Color::DarkGray),
        )));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(panel, area);
    }
}
