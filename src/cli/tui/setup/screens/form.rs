//! Add Patients form

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::cli::tui::setup::motion::fade;
use crate::cli::tui::setup::state::{HitAreas, UiState};
use crate::cli::tui::setup::theme::{Theme, FAINT, MUTED, TEXT};
use crate::wizard::FieldKey;

pub const HEIGHT: u16 = 14;

const FIELD_HEIGHT: u16 = 3;
const BACK_LABEL: &str = "⟵ Back";
const SUBMIT_LABEL: &str = "  Add Patient  ";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &UiState,
    theme: &Theme,
    opacity: f64,
    hits: &mut HitAreas,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),      // Spacing
            Constraint::Length(1),      // Buttons
        ])
        .split(area);

    for (row, pair) in FieldKey::ALL.chunks(2).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);

        for (key, cell) in pair.iter().zip(cells.iter()) {
            render_field(frame, *cell, state, *key, theme, opacity);
            hits.fields.push((*key, *cell));
        }
    }

    render_buttons(frame, rows[5], theme, opacity, hits);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    state: &UiState,
    key: FieldKey,
    theme: &Theme,
    opacity: f64,
) {
    let focused = state.focused_field == key;
    let text = Style::default().fg(fade(TEXT, opacity));

    let mut label = key.label().to_string();
    if key.is_marked_required() {
        label.push_str(" *");
    }
    let (border_style, title_style) = if focused {
        (theme.focused, theme.focused)
    } else {
        (theme.border, text.add_modifier(Modifier::BOLD))
    };

    let block = Block::default()
        .title(Span::styled(format!(" {label} "), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if key.is_select() {
        let gender = state.session.form.draft().gender.as_str();
        let line = if focused {
            Line::from(vec![
                Span::styled("◀ ", theme.focused),
                Span::styled(gender, text),
                Span::styled(" ▶", theme.focused),
            ])
        } else {
            Line::from(Span::styled(gender, text))
        };
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    let value = if focused {
        state.input.value()
    } else {
        state.session.form.field(key)
    };

    let width = inner.width.max(1) as usize;
    let scroll = if focused { state.input.visual_scroll(width) } else { 0 };

    let paragraph = if value.is_empty() {
        Paragraph::new(Span::styled(key.hint(), Style::default().fg(fade(FAINT, opacity))))
    } else {
        Paragraph::new(Span::styled(value, text)).scroll((0, scroll as u16))
    };
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 {
        let offset = state.input.visual_cursor().max(scroll) - scroll;
        frame.set_cursor_position((inner.x + offset as u16, inner.y));
    }
}

fn render_buttons(frame: &mut Frame, area: Rect, theme: &Theme, opacity: f64, hits: &mut HitAreas) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BACK_LABEL.chars().count() as u16),
            Constraint::Min(0),
            Constraint::Length(SUBMIT_LABEL.len() as u16),
        ])
        .split(area);

    let back = Paragraph::new(Span::styled(
        BACK_LABEL,
        Style::default().fg(fade(MUTED, opacity)).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(back, cells[0]);

    let submit = Paragraph::new(Span::styled(SUBMIT_LABEL, theme.button))
        .alignment(Alignment::Center);
    frame.render_widget(submit, cells[2]);

    hits.back = Some(cells[0]);
    hits.submit = Some(cells[2]);
}
