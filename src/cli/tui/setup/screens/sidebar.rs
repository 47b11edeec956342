//! Sidebar with the wizard title and the three step cards

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::cli::tui::setup::state::{HitAreas, UiState};
use crate::cli::tui::setup::theme::Theme;
use crate::wizard::Step;

const CARD_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme, hits: &mut HitAreas) {
    let inner = area.inner(Margin::new(3, 2));

    let mut constraints = vec![
        Constraint::Length(1),      // Title
        Constraint::Length(1),      // Spacing
        Constraint::Length(3),      // Subtitle
        Constraint::Length(1),      // Spacing
    ];
    for _ in Step::ALL {
        constraints.push(Constraint::Length(CARD_HEIGHT));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(Paragraph::new(Span::styled("Setup Wizard", theme.title)), chunks[0]);

    let subtitle = Paragraph::new(
        "Bring patients onboard with a single flow. Smooth transitions, zero friction.",
    )
    .style(theme.muted)
    .wrap(Wrap { trim: true });
    frame.render_widget(subtitle, chunks[2]);

    for (i, step) in Step::ALL.into_iter().enumerate() {
        let card_area = chunks[4 + i * 2];
        render_step_card(frame, card_area, state, step, theme);
        hits.steps.push((step, card_area));
    }
}

fn render_step_card(frame: &mut Frame, area: Rect, state: &UiState, step: Step, theme: &Theme) {
    let active = state.step() == step;
    let complete = state.session.wizard.is_complete(step);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.card_border(active));

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", step.index() + 1), theme.badge_style(active, complete)),
            Span::raw("  "),
            Span::styled(step.title(), theme.step_title_style(active, complete)),
        ]),
        Line::from(Span::styled(step.description(), theme.muted)),
    ];

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
