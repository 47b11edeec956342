use std::io::Write;
use std::time::{Duration, Instant};
use ratatui::{
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
            KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
        },
        execute,
    },
    backend::Backend,
    Frame, Terminal,
};
use tokio::{sync::mpsc, task::AbortHandle, time};
use tracing::{debug, info};
use tui_input::backend::crossterm::EventHandler;

use crate::config::WizardConfig;
use crate::wizard::{FieldKey, HighlightToken, SetupSession, Step, SubmitOutcome};
use crate::{Result, SetupError};
use super::events::AppEvent;
use super::state::{Action, Hit, UiState};
use super::theme::Theme;

/// Main application struct
pub struct App {
    /// Session and UI state
    state: UiState,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    config: WizardConfig,
    /// Event sender for timers
    event_tx: Option<mpsc::UnboundedSender<AppEvent>>,
    /// Pending highlight clear, aborted when a newer commit supersedes it
    highlight_timer: Option<AbortHandle>,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance
    pub fn new(config: WizardConfig) -> Self {
        let session = SetupSession::new(config.start_step, config.highlight_duration());
        Self {
            state: UiState::new(session, Instant::now()),
            should_quit: false,
            theme: Theme::default(),
            config,
            event_tx: None,
            highlight_timer: None,
            last_ctrl_c: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route timer events to `tx`
    pub fn set_event_sender(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        self.event_tx = Some(tx);
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        let result = self.run_in_terminal(&mut terminal, &mut std::io::stdout()).await;

        // Cleanup runs on every exit path once the terminal is in raw mode
        if self.config.mouse {
            let _ = execute!(std::io::stdout(), DisableMouseCapture);
        }
        ratatui::restore();
        result
    }

    async fn run_in_terminal<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        out: &mut impl Write,
    ) -> Result<()> {
        if self.config.mouse {
            execute!(out, EnableMouseCapture)?;
        }
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        self.set_event_sender(event_tx.clone());

        // Spawn input handler; it stops once the receiver is gone
        let input_tx = event_tx;
        tokio::task::spawn_blocking(move || {
            while !input_tx.is_closed() {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }
                let event = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                    Ok(_) => continue,
                    Err(_) => break,
                };
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        });

        info!(step = self.state.step().title(), "Setup wizard started");
        let result = self.main_loop(terminal, &mut event_rx).await;
        info!(patients = self.state.session.roster.count(), "Setup wizard finished");
        result
    }

    /// Main event loop
    async fn main_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        let tick_rate = self.config.tick_rate();
        loop {
            // Draw UI
            terminal
                .draw(|frame| self.render(frame))
                .map_err(|e| SetupError::Terminal(e.to_string()))?;

            // Handle events with timeout for animations
            match time::timeout(tick_rate, event_rx.recv()).await {
                Ok(Some(event)) => self.dispatch(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.dispatch(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        if let Some(timer) = self.highlight_timer.take() {
            timer.abort();
        }
        Ok(())
    }

    /// Render the current state and record its clickable regions
    pub fn render(&mut self, frame: &mut Frame) {
        let now = Instant::now();
        self.state.viewport = frame.area();
        self.state.hit_areas = super::screens::render(frame, &self.state, &self.theme, now);
    }

    /// Handle an event and apply the resulting action
    pub fn dispatch(&mut self, event: AppEvent) {
        if let Some(action) = self.handle_event(event) {
            self.apply(action, Instant::now());
        }
    }

    /// Handle an event
    fn handle_event(&mut self, event: AppEvent) -> Option<Action> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Resize(width, height) => {
                self.state.viewport.width = width;
                self.state.viewport.height = height;
                None
            }
            AppEvent::HighlightExpired(token) => {
                if self.state.session.highlight.clear(token) {
                    debug!("Roster highlight cleared");
                }
                None
            }
            AppEvent::Tick => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Handle global keys first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    // Handle Ctrl+C - exit on double press
                    let now = Instant::now();
                    if let Some(last) = self.last_ctrl_c {
                        if now.duration_since(last) < Duration::from_secs(1) {
                            return Some(Action::Quit);
                        }
                    }
                    self.last_ctrl_c = Some(now);
                    return None;
                }
                KeyCode::Char('q') => return Some(Action::Quit),
                _ => {}
            }
        }

        if let KeyCode::F(n @ 1..=3) = key.code {
            return Step::from_index(n as usize - 1).map(Action::GoTo);
        }

        // Route to step-specific handler
        match self.state.step() {
            Step::AddPatients => Self::handle_form_key(&mut self.state, key),
            Step::Info | Step::Complete => Self::handle_placeholder_key(key),
        }
    }

    fn handle_form_key(state: &mut UiState, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => return Some(Action::Submit),
            KeyCode::Esc => return Some(Action::Back),
            KeyCode::Tab | KeyCode::Down => {
                state.focus(state.focused_field.next());
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.focus(state.focused_field.prev());
            }
            KeyCode::Left if state.focused_field.is_select() => {
                let gender = state.session.form.draft().gender.prev();
                state.session.form.set_gender(gender);
            }
            KeyCode::Right | KeyCode::Char(' ') if state.focused_field.is_select() => {
                let gender = state.session.form.draft().gender.next();
                state.session.form.set_gender(gender);
            }
            _ if state.focused_field.is_select() => {}
            _ => {
                // Let tui-input handle the key event
                state.input.handle_event(&Event::Key(key));
                state.commit_input();
            }
        }
        None
    }

    fn handle_placeholder_key(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                Step::from_index(c as usize - '1' as usize).map(Action::GoTo)
            }
            KeyCode::Enter => Some(Action::GoTo(Step::AddPatients)),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(Action::Back),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let viewport = self.state.viewport;
                self.state
                    .glow
                    .track(mouse.column, mouse.row, viewport.width, viewport.height);
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                match self.state.hit_areas.hit(mouse.column, mouse.row)? {
                    Hit::Step(step) => Some(Action::GoTo(step)),
                    Hit::Field(key) => {
                        self.state.focus(key);
                        None
                    }
                    Hit::Back => Some(Action::Back),
                    Hit::Submit => Some(Action::Submit),
                    Hit::Jump => Some(Action::GoTo(Step::AddPatients)),
                }
            }
            _ => None,
        }
    }

    /// Apply an action to the session
    fn apply(&mut self, action: Action, now: Instant) {
        let before = self.state.step();
        match action {
            Action::GoTo(step) => self.state.session.wizard.go_to(step),
            Action::Back => self.state.session.wizard.back(),
            Action::Submit => {
                let (outcome, token) = self.state.session.submit(now);
                if let SubmitOutcome::Committed { .. } = outcome {
                    self.state.focus(FieldKey::Name);
                }
                if let Some(token) = token {
                    self.schedule_highlight_clear(token);
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }

        if self.state.step() != before {
            self.state.panel.restart(now);
            if self.state.step() == Step::AddPatients {
                self.state.sync_input();
            }
        }
    }

    /// Post `HighlightExpired` after the highlight duration, superseding any pending clear
    fn schedule_highlight_clear(&mut self, token: HighlightToken) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        if let Some(previous) = self.highlight_timer.take() {
            previous.abort();
        }

        let delay = self.state.session.highlight.duration();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(AppEvent::HighlightExpired(token));
        });
        self.highlight_timer = Some(handle.abort_handle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mouse_capture_failure_reaches_cleanup() {
        let mut app = App::new(WizardConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let result = app.run_in_terminal(&mut terminal, &mut ClosedOutput).await;

        assert!(matches!(result, Err(SetupError::Io(_))));
        assert!(app.event_tx.is_none());
    }
}
