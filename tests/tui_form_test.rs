use std::time::{Duration, Instant};

use patient_setup::cli::tui::setup::app::App;
use patient_setup::cli::tui::setup::events::AppEvent;
use patient_setup::cli::tui::setup::state::{Hit, HitAreas};
use patient_setup::config::WizardConfig;
use patient_setup::wizard::{FieldKey, Gender, Step};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.dispatch(key(KeyCode::Char(c)));
    }
}

fn click(column: u16, row: u16) -> AppEvent {
    AppEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_typing_fills_focused_field() {
    let mut app = App::new(WizardConfig::default());
    type_text(&mut app, "  Jane Doe  ");
    app.dispatch(key(KeyCode::Tab));
    type_text(&mut app, "34");

    let draft = app.state().session.form.draft();
    assert_eq!(draft.name, "  Jane Doe  ");
    assert_eq!(draft.age, "34");
    assert_eq!(app.state().focused_field, FieldKey::Age);
}

#[test]
fn test_enter_submits_and_resets() {
    let mut app = App::new(WizardConfig::default());
    type_text(&mut app, "  Jane Doe  ");
    app.dispatch(key(KeyCode::Tab));
    type_text(&mut app, "34");
    app.dispatch(key(KeyCode::Tab));
    app.dispatch(key(KeyCode::Right));
    app.dispatch(key(KeyCode::Enter));

    let state = app.state();
    assert_eq!(state.session.roster.count(), 1);
    let record = state.session.roster.get(0).unwrap();
    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.age, "34");
    assert_eq!(record.gender, Gender::Female);

    assert_eq!(state.session.form.draft().name, "");
    assert_eq!(state.session.form.draft().gender, Gender::Male);
    assert_eq!(state.focused_field, FieldKey::Name);
    assert_eq!(state.input.value(), "");
    assert!(state.session.highlight.is_active(Instant::now()));
}

#[test]
fn test_blank_name_submit_is_ignored() {
    let mut app = App::new(WizardConfig::default());
    type_text(&mut app, "   ");
    app.dispatch(key(KeyCode::Enter));

    assert_eq!(app.state().session.roster.count(), 0);
    assert_eq!(app.state().session.form.draft().name, "   ");
    assert!(!app.state().session.highlight.is_active(Instant::now()));
}

#[test]
fn test_backspace_edits_field() {
    let mut app = App::new(WizardConfig::default());
    type_text(&mut app, "Sam");
    app.dispatch(key(KeyCode::Backspace));
    assert_eq!(app.state().session.form.draft().name, "Sa");
}

#[test]
fn test_gender_select_cycles() {
    let mut app = App::new(WizardConfig::default());
    app.dispatch(key(KeyCode::Tab));
    app.dispatch(key(KeyCode::Tab));
    assert_eq!(app.state().focused_field, FieldKey::Gender);

    app.dispatch(key(KeyCode::Left));
    assert_eq!(app.state().session.form.draft().gender, Gender::PreferNotToSay);

    // Letters do nothing on a select
    app.dispatch(key(KeyCode::Char('x')));
    assert_eq!(app.state().session.form.draft().gender, Gender::PreferNotToSay);
}

#[test]
fn test_focus_wraps_backwards() {
    let mut app = App::new(WizardConfig::default());
    app.dispatch(key(KeyCode::BackTab));
    assert_eq!(app.state().focused_field, FieldKey::EmergencyPhone);
}

#[test]
fn test_draft_survives_leaving_the_form() {
    let mut app = App::new(WizardConfig::default());
    type_text(&mut app, "Kim");
    app.dispatch(key(KeyCode::F(3)));
    app.dispatch(key(KeyCode::Enter));

    assert_eq!(app.state().step(), Step::AddPatients);
    assert_eq!(app.state().input.value(), "Kim");
}

#[test]
fn test_clicks_use_recorded_hit_areas() {
    let mut app = App::new(WizardConfig::default());
    app.state_mut().hit_areas = HitAreas {
        steps: vec![(Step::Complete, Rect::new(0, 10, 20, 5))],
        fields: vec![(FieldKey::Allergies, Rect::new(30, 4, 20, 3))],
        back: Some(Rect::new(30, 20, 6, 1)),
        submit: Some(Rect::new(60, 20, 15, 1)),
        jump: None,
    };
    assert_eq!(app.state().hit_areas.hit(31, 5), Some(Hit::Field(FieldKey::Allergies)));

    app.dispatch(click(31, 5));
    assert_eq!(app.state().focused_field, FieldKey::Allergies);

    app.dispatch(click(5, 12));
    assert_eq!(app.state().step(), Step::Complete);
}

#[test]
fn test_mouse_move_tracks_glow() {
    let mut app = App::new(WizardConfig::default());
    app.dispatch(AppEvent::Resize(100, 50));
    app.dispatch(AppEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 25,
        row: 10,
        modifiers: KeyModifiers::NONE,
    }));

    assert_eq!(app.state().glow.x, 25.0);
    assert_eq!(app.state().glow.y, 20.0);
}

#[test]
fn test_highlight_expired_event_clears() {
    let mut app = App::new(WizardConfig::default());
    let token = app.state_mut().session.highlight.arm(Instant::now());
    app.dispatch(AppEvent::HighlightExpired(token));
    assert!(!app.state().session.highlight.is_active(Instant::now()));
}

#[tokio::test]
async fn test_commit_schedules_highlight_clear() {
    let mut app = App::new(WizardConfig {
        highlight_ms: 20,
        ..Default::default()
    });
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    app.set_event_sender(tx);

    type_text(&mut app, "First");
    app.dispatch(key(KeyCode::Enter));
    type_text(&mut app, "Second");
    app.dispatch(key(KeyCode::Enter));

    let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timer fired")
        .expect("channel open");
    assert!(matches!(event, AppEvent::HighlightExpired(_)));

    app.dispatch(event);
    assert!(!app.state().session.highlight.is_active(Instant::now()));
    assert_eq!(app.state().session.roster.count(), 2);
}
