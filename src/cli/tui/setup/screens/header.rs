use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::cli::tui::setup::motion::{blend, pulse_opacity};
use crate::cli::tui::setup::state::UiState;
use crate::cli::tui::setup::theme::{Theme, BACKGROUND, TEXT};

pub const HEIGHT: u16 = 6;

/// Pulsing step label, step title and description
pub fn render(frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme, now: Instant) {
    let step = state.step();
    let pulse = pulse_opacity(now.saturating_duration_since(state.started_at));
    let label_style = Style::default()
        .fg(blend(BACKGROUND, TEXT, 0.58 * pulse))
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(format!("STEP {}", step.index() + 1), label_style)),
        Line::from(""),
        Line::from(Span::styled(step.title(), theme.title)),
        Line::from(""),
        Line::from(Span::styled(step.description(), theme.muted)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
