//! Board rendering: three status lanes with draggable cards.
//!
//! Besides drawing, the render pass rebuilds the [`BoardGeometry`] the
//! gesture adapters hit-test against, so input always resolves against
//! the layout that is actually on screen.

use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::constants::{CARD_HEIGHT, GHOST_HEIGHT, GHOST_WIDTH};
use crate::records::AttendanceStatus;
use crate::ui::gesture::{BoardGeometry, CardBounds};

/// Per-lane scroll offsets plus the last-rendered geometry.
pub struct BoardView {
    scroll: HashMap<AttendanceStatus, usize>,
    pub geometry: BoardGeometry,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            scroll: HashMap::new(),
            geometry: BoardGeometry::default(),
        }
    }

    pub fn scroll_of(&self, status: AttendanceStatus) -> usize {
        self.scroll.get(&status).copied().unwrap_or(0)
    }

    /// Scroll one lane by `delta` rows; clamping against the lane
    /// length happens at render time.
    pub fn scroll_lane(&mut self, status: AttendanceStatus, delta: i32) {
        let current = self.scroll_of(status) as i32;
        let next = (current + delta).max(0) as usize;
        self.scroll.insert(status, next);
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

/// Board component
pub struct Board;

impl Board {
    pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
        let lane_areas = LayoutManager::lanes_layout(area);
        let mut geometry = BoardGeometry::default();

        for (status, lane_area) in AttendanceStatus::ALL.into_iter().zip(lane_areas) {
            geometry.lanes.push((status, lane_area));
            Self::render_lane(f, lane_area, status, app, &mut geometry);
        }

        app.board.geometry = geometry;

        Self::render_ghost(f, app);
    }

    fn render_lane(
        f: &mut Frame,
        area: Rect,
        status: AttendanceStatus,
        app: &App,
        geometry: &mut BoardGeometry,
    ) {
        let highlighted = app.gestures.highlighted_lane() == Some(status);
        let border_style = if highlighted {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = format!(" {} ({}) ", status.title(), app.store.lane_count(status));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if app.store.lane_is_empty(status) {
            let placeholder = Paragraph::new("No trainees")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(placeholder, inner);
            return;
        }

        let records = app.store.lane(status);
        let capacity = (inner.height / CARD_HEIGHT) as usize;
        let scroll = app
            .board
            .scroll_of(status)
            .min(records.len().saturating_sub(capacity));

        for (row, record) in records.iter().skip(scroll).enumerate() {
            let y = inner.y + (row as u16) * CARD_HEIGHT;
            if y + CARD_HEIGHT > inner.y + inner.height {
                break;
            }
            let card_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);

            let lifted = app.gestures.is_lifted(&record.id);
            let card_style = if lifted {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let card_border = if lifted {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };

            let mut spans = vec![Span::styled(record.name.clone(), card_style)];
            if record.reason.is_some() {
                spans.push(Span::styled(" ✎", Style::default().fg(Color::DarkGray)));
            }

            let card = Paragraph::new(Line::from(spans))
                .block(Block::default().borders(Borders::ALL).border_style(card_border));
            f.render_widget(card, card_area);

            geometry.cards.push(CardBounds {
                record_id: record.id.clone(),
                status,
                area: card_area,
            });
        }
    }

    /// Ghost card tracking the finger during a touch drag.
    fn render_ghost(f: &mut Frame, app: &App) {
        let Some(area) = app.gestures.ghost_rect(f.area(), GHOST_WIDTH, GHOST_HEIGHT) else {
            return;
        };
        let name = app
            .gestures
            .session()
            .and_then(|s| app.store.find(&s.record_id))
            .map(|r| r.name.clone())
            .unwrap_or_default();

        let ghost = Paragraph::new(name).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(Clear, area);
        f.render_widget(ghost, area);
    }
}
