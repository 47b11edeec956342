use ratatui::crossterm::event::{KeyEvent, MouseEvent};

use crate::wizard::HighlightToken;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Timer events
    HighlightExpired(HighlightToken),

    // UI events
    Tick, // for animations
}
