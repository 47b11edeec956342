/// Screen sections for the setup wizard
pub mod form;
pub mod header;
pub mod placeholder;
pub mod roster;
pub mod sidebar;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::motion::{blend, Glow};
use super::state::{HitAreas, UiState};
use super::theme::{Theme, BACKGROUND, INDIGO};
use crate::wizard::Step;

/// Glow strength behind the form column relative to the sidebar
const SECTION_GLOW_SCALE: f64 = 0.7;

/// Render the whole wizard and return the clickable regions
pub fn render(frame: &mut Frame, state: &UiState, theme: &Theme, now: Instant) -> HitAreas {
    let mut hits = HitAreas::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),         // Main content
            Constraint::Length(1),      // Help bar
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Sidebar
            Constraint::Percentage(55), // Step section
        ])
        .split(chunks[0]);

    paint_glow(frame, columns[0], &state.glow, 1.0);
    paint_glow(frame, columns[1], &state.glow, SECTION_GLOW_SCALE);

    sidebar::render(frame, columns[0], state, theme, &mut hits);
    render_section(frame, columns[1], state, theme, now, &mut hits);
    render_help(frame, chunks[1], state.step(), theme);

    hits
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    state: &UiState,
    theme: &Theme,
    now: Instant,
    hits: &mut HitAreas,
) {
    let panel_height = match state.step() {
        Step::AddPatients => form::HEIGHT,
        Step::Info | Step::Complete => placeholder::HEIGHT,
    };

    let inner = area.inner(ratatui::layout::Margin::new(2, 1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEIGHT),
            Constraint::Length(panel_height),
            Constraint::Length(1),      // Spacing
            Constraint::Min(4),         // Roster
        ])
        .split(inner);

    header::render(frame, chunks[0], state, theme, now);

    let opacity = state.panel.opacity(now);
    match state.step() {
        Step::AddPatients => form::render(frame, chunks[1], state, theme, opacity, hits),
        step @ (Step::Info | Step::Complete) => {
            placeholder::render(frame, chunks[1], step, theme, opacity, hits)
        }
    }

    roster::render(frame, chunks[3], state, theme, now);
}

/// Tint the background of `area` with the pointer glow
fn paint_glow(frame: &mut Frame, area: Rect, glow: &Glow, scale: f64) {
    let viewport = frame.area();
    let buffer = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let alpha = glow.intensity_at(x, y, viewport.width, viewport.height) * scale;
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_bg(blend(BACKGROUND, INDIGO, alpha));
            }
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect, step: Step, theme: &Theme) {
    let keys: &[(&str, &str)] = match step {
        Step::AddPatients => &[
            ("Tab", "next field"),
            ("Enter", "add patient"),
            ("Esc", "back"),
            ("F1-F3", "steps"),
            ("Ctrl+C ×2", "quit"),
        ],
        Step::Info | Step::Complete => &[
            ("1-3", "steps"),
            ("Enter", "add patients"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, what) in keys {
        spans.push(Span::styled(*key, theme.focused));
        spans.push(Span::raw(format!(" {what}  ")));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(theme.help_bar);

    frame.render_widget(help, area);
}
