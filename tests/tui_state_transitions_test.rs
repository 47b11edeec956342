use patient_setup::cli::tui::setup::app::App;
use patient_setup::cli::tui::setup::events::AppEvent;
use patient_setup::config::WizardConfig;
use patient_setup::wizard::Step;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn app_on(step: Step) -> App {
    App::new(WizardConfig {
        start_step: step,
        ..Default::default()
    })
}

#[test]
fn test_starts_on_add_patients() {
    let app = App::new(WizardConfig::default());
    assert_eq!(app.state().step(), Step::AddPatients);
    assert!(!app.should_quit());
}

#[test]
fn test_function_keys_jump_anywhere() {
    let mut app = app_on(Step::AddPatients);

    app.dispatch(key(KeyCode::F(3)));
    assert_eq!(app.state().step(), Step::Complete);

    app.dispatch(key(KeyCode::F(1)));
    assert_eq!(app.state().step(), Step::Info);

    app.dispatch(key(KeyCode::F(2)));
    assert_eq!(app.state().step(), Step::AddPatients);
}

#[test]
fn test_escape_goes_back_and_clamps() {
    let mut app = app_on(Step::AddPatients);

    app.dispatch(key(KeyCode::Esc));
    assert_eq!(app.state().step(), Step::Info);

    app.dispatch(key(KeyCode::Esc));
    assert_eq!(app.state().step(), Step::Info);
}

#[test]
fn test_placeholder_number_keys() {
    let mut app = app_on(Step::Info);

    app.dispatch(key(KeyCode::Char('3')));
    assert_eq!(app.state().step(), Step::Complete);

    app.dispatch(key(KeyCode::Left));
    assert_eq!(app.state().step(), Step::AddPatients);
}

#[test]
fn test_enter_on_placeholder_jumps_to_form() {
    let mut app = app_on(Step::Complete);
    app.dispatch(key(KeyCode::Enter));
    assert_eq!(app.state().step(), Step::AddPatients);
}

#[test]
fn test_q_quits_only_outside_form() {
    let mut app = app_on(Step::AddPatients);
    app.dispatch(key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.state().session.form.draft().name, "q");

    let mut app = app_on(Step::Info);
    app.dispatch(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_double_ctrl_c_quits() {
    let mut app = app_on(Step::AddPatients);
    app.dispatch(ctrl('c'));
    assert!(!app.should_quit());
    app.dispatch(ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_q_quits() {
    let mut app = app_on(Step::AddPatients);
    app.dispatch(ctrl('q'));
    assert!(app.should_quit());
}
