//! Info and Complete panels
//!
//! Neither step collects data yet; both show a short note and a shortcut back
//! to the patient form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::cli::tui::setup::motion::fade;
use crate::cli::tui::setup::state::HitAreas;
use crate::cli::tui::setup::theme::{Theme, MUTED};
use crate::wizard::Step;

pub const HEIGHT: u16 = 8;

const JUMP_LABEL: &str = "  Jump to Add Patients  ";

/// Panel copy for the steps without a form
pub fn message(step: Step) -> Option<&'static str> {
    match step {
        Step::Info => Some(
            "Complete your profile basics so patients always know who is contacting them.",
        ),
        Step::Complete => Some(
            "Review your newly onboarded patients, confirm details, and launch care automations.",
        ),
        Step::AddPatients => None,
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    step: Step,
    theme: &Theme,
    opacity: f64,
    hits: &mut HitAreas,
) {
    let Some(message) = message(step) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border);
    let inner = block.inner(area).inner(Margin::new(1, 0));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Spacing
            Constraint::Length(2),      // Message
            Constraint::Length(1),      // Spacing
            Constraint::Length(1),      // Jump button
            Constraint::Min(0),
        ])
        .split(inner);

    let text = Paragraph::new(message)
        .style(Style::default().fg(fade(MUTED, opacity)))
        .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[1]);

    let button_area = Rect {
        width: (JUMP_LABEL.len() as u16).min(chunks[3].width),
        ..chunks[3]
    };
    frame.render_widget(Paragraph::new(Span::styled(JUMP_LABEL, theme.link)), button_area);
    hits.jump = Some(button_area);
}
