//! Toast overlay for notifications.
//!
//! Every user-visible outcome (load failure, update failure, validation
//! error, commit success) arrives here as a notification with a
//! severity; the overlay styles and auto-expires it.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::ActiveToast;
use crate::ui::core::Severity;

pub struct Toast;

impl Toast {
    pub fn render(f: &mut Frame, toast: &ActiveToast) {
        let frame = f.area();
        let width = 44.min(frame.width.saturating_sub(4));
        let height = 4;
        if width < 10 || frame.height < height + 2 {
            return;
        }
        // Bottom-right corner, above the status bar
        let area = Rect::new(
            frame.x + frame.width - width - 2,
            frame.y + frame.height.saturating_sub(height + 2),
            width,
            height,
        );

        let color = match toast.notification.severity {
            Severity::Info => Color::Blue,
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
        };

        let body = Paragraph::new(toast.notification.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", toast.notification.title)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}
