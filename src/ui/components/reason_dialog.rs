//! Reason modal for gated transitions.

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Reason modal dialog component
pub struct ReasonDialog;

impl ReasonDialog {
    /// Render the reason modal for the pending move
    pub fn render(f: &mut Frame, app: &App) {
        let modal = app.gate.modal();
        let Some(pending) = &modal.pending else {
            return;
        };

        let name = app
            .store
            .find(&pending.record_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| pending.record_id.clone());

        let dialog_area = LayoutManager::centered_rect_lines(60, 9, f.area());
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Reason for {} ", pending.to.title()))
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
        f.render_widget(block, dialog_area);

        // Prompt line
        let prompt_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 1,
            dialog_area.width.saturating_sub(4),
            1,
        );
        let prompt = Paragraph::new(format!("Why is {} marked as {}?", name, pending.to.title()))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(prompt, prompt_rect);

        // Reason input
        let input_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 3,
            dialog_area.width.saturating_sub(4),
            3,
        );
        let input = Paragraph::new(modal.reason_text.as_str())
            .block(Block::default().borders(Borders::ALL).title("Reason"))
            .style(Style::default().fg(Color::Green));
        f.render_widget(input, input_rect);
        f.set_cursor_position((input_rect.x + 1 + modal.cursor as u16, input_rect.y + 1));

        // Instructions
        let instructions_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 7,
            dialog_area.width.saturating_sub(4),
            1,
        );
        let instructions = Paragraph::new("Press Enter to confirm, Esc to cancel")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(instructions, instructions_rect);
    }
}
