//! Patient roster list shown under every step

use std::time::Instant;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::cli::tui::setup::state::UiState;
use crate::cli::tui::setup::theme::{rgb, Theme, LAVENDER};
use crate::wizard::PatientRecord;

const EMPTY_MESSAGE: &str = "Add your first patient to see them appear here in real-time.";
const DASH: &str = "—";
const NONE: &str = "None";

/// `value`, or `placeholder` when empty
pub fn display_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Labelled detail values for a roster card, in display order
pub fn details(record: &PatientRecord) -> [(&'static str, &str); 7] {
    [
        ("Age", display_or(&record.age, DASH)),
        ("Gender", record.gender.as_str()),
        ("Blood", display_or(&record.blood_type, DASH)),
        ("Allergies", display_or(&record.allergies, NONE)),
        ("Conditions", display_or(&record.conditions, NONE)),
        ("Emergency", display_or(&record.emergency_contact, DASH)),
        ("Phone", display_or(&record.emergency_phone, DASH)),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme, now: Instant) {
    let roster = &state.session.roster;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Heading
            Constraint::Min(0),         // List
        ])
        .split(area);

    let heading = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(chunks[0]);
    frame.render_widget(Paragraph::new(Span::styled("Patient Roster", theme.title)), heading[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{} saved", roster.count()), theme.faint))
            .alignment(Alignment::Right),
        heading[1],
    );

    let border_style = if state.session.highlight.is_active(now) {
        Style::default().fg(rgb(LAVENDER)).add_modifier(Modifier::BOLD)
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(chunks[1]).inner(Margin::new(1, 0));
    frame.render_widget(block, chunks[1]);

    if roster.is_empty() {
        let message_area = Rect {
            y: inner.y + inner.height / 2,
            height: (inner.height - inner.height / 2).min(2),
            ..inner
        };
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(theme.faint)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, message_area);
        return;
    }

    let mut lines = Vec::new();
    for record in roster.iter() {
        lines.extend(card_lines(record, inner.width, theme));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn card_lines(record: &PatientRecord, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let time = record.created_at.with_timezone(&Local).format("%H:%M").to_string();
    let gap = (width as usize).saturating_sub(record.name.chars().count() + time.len());

    let mut lines = vec![Line::from(vec![
        Span::styled(record.name.clone(), theme.title),
        Span::raw(" ".repeat(gap)),
        Span::styled(time, theme.faint),
    ])];

    let details = details(record);
    for row in [&details[0..3], &details[3..5], &details[5..7]] {
        let mut spans = Vec::new();
        for (label, value) in row {
            spans.push(Span::styled(format!("{label}: "), theme.faint));
            spans.push(Span::styled(value.to_string(), theme.muted));
            spans.push(Span::raw("   "));
        }
        lines.push(Line::from(spans));
    }

    lines
}
