use std::time::Instant;

use ratatui::layout::{Position, Rect};
use tui_input::Input;

use super::motion::{Glow, PanelTransition};
use crate::wizard::{FieldKey, SetupSession, Step};

/// Everything the wizard screens need to render and react to input
#[derive(Debug)]
pub struct UiState {
    pub session: SetupSession,

    // Form editing
    pub focused_field: FieldKey,
    /// Editing buffer for the focused text field, mirrored into the draft
    pub input: Input,

    // Motion
    pub glow: Glow,
    pub panel: PanelTransition,
    pub started_at: Instant,

    // Layout from the last frame
    pub viewport: Rect,
    pub hit_areas: HitAreas,
}

impl UiState {
    pub fn new(session: SetupSession, now: Instant) -> Self {
        let mut state = Self {
            session,
            focused_field: FieldKey::Name,
            input: Input::default(),
            glow: Glow::default(),
            panel: PanelTransition::new(now),
            started_at: now,
            viewport: Rect::default(),
            hit_areas: HitAreas::default(),
        };
        state.sync_input();
        state
    }

    pub fn step(&self) -> Step {
        self.session.step()
    }

    /// Move focus to a field and load its value into the editing buffer
    pub fn focus(&mut self, key: FieldKey) {
        self.focused_field = key;
        self.sync_input();
    }

    /// Reload the editing buffer from the draft
    pub fn sync_input(&mut self) {
        let value = self.session.form.field(self.focused_field).to_string();
        self.input = Input::new(value);
    }

    /// Copy the editing buffer into the focused draft field
    pub fn commit_input(&mut self) {
        if !self.focused_field.is_select() {
            self.session
                .form
                .set_field(self.focused_field, self.input.value());
        }
    }
}

/// Clickable regions recorded while rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub steps: Vec<(Step, Rect)>,
    pub fields: Vec<(FieldKey, Rect)>,
    pub back: Option<Rect>,
    pub submit: Option<Rect>,
    pub jump: Option<Rect>,
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Step(Step),
    Field(FieldKey),
    Back,
    Submit,
    Jump,
}

impl HitAreas {
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        let inside = |area: &Option<Rect>| area.is_some_and(|a| a.contains(position));

        if let Some((step, _)) = self.steps.iter().find(|(_, a)| a.contains(position)) {
            return Some(Hit::Step(*step));
        }
        if let Some((key, _)) = self.fields.iter().find(|(_, a)| a.contains(position)) {
            return Some(Hit::Field(*key));
        }
        if inside(&self.back) {
            return Some(Hit::Back);
        }
        if inside(&self.submit) {
            return Some(Hit::Submit);
        }
        if inside(&self.jump) {
            return Some(Hit::Jump);
        }
        None
    }
}

/// Actions produced by input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GoTo(Step), // Jump to any step
    Back,       // Previous step, floored at the first
    Submit,     // Commit the draft
    Quit,       // Exit wizard
}
