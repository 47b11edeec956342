use ratatui::style::{Color, Modifier, Style};

/// Card and page background
pub const BACKGROUND: (u8, u8, u8) = (10, 12, 22);
/// Glow tint and active accents
pub const INDIGO: (u8, u8, u8) = (99, 102, 241);
/// Roster highlight ring
pub const LAVENDER: (u8, u8, u8) = (129, 140, 248);
/// Completed step badge
pub const CYAN: (u8, u8, u8) = (34, 211, 238);
/// Primary text
pub const TEXT: (u8, u8, u8) = (244, 246, 251);
/// Secondary text
pub const MUTED: (u8, u8, u8) = (160, 162, 170);
/// Placeholders and empty states
pub const FAINT: (u8, u8, u8) = (115, 117, 126);

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Consistent theme for the wizard
pub struct Theme {
    pub title: Style,
    pub text: Style,
    pub muted: Style,
    pub faint: Style,
    pub border: Style,
    pub active_border: Style,
    pub focused: Style,
    pub button: Style,
    pub link: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(rgb(TEXT))
                .add_modifier(Modifier::BOLD),
            text: Style::default()
                .fg(rgb(TEXT)),
            muted: Style::default()
                .fg(rgb(MUTED)),
            faint: Style::default()
                .fg(rgb(FAINT)),
            border: Style::default()
                .fg(Color::Rgb(48, 52, 66)),
            active_border: Style::default()
                .fg(rgb(INDIGO)),
            focused: Style::default()
                .fg(rgb(LAVENDER))
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Rgb(8, 9, 13))
                .bg(Color::Rgb(56, 189, 248))
                .add_modifier(Modifier::BOLD),
            link: Style::default()
                .fg(Color::Rgb(199, 210, 254))
                .bg(Color::Rgb(38, 40, 78))
                .add_modifier(Modifier::BOLD),
            help_bar: Style::default()
                .bg(Color::Rgb(30, 33, 46)),
        }
    }
}

impl Theme {
    /// Style for a step number badge
    pub fn badge_style(&self, active: bool, complete: bool) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        if complete {
            base.fg(Color::Rgb(8, 9, 13)).bg(rgb(CYAN))
        } else if active {
            base.fg(Color::Rgb(8, 9, 13)).bg(rgb(INDIGO))
        } else {
            base.fg(rgb(MUTED)).bg(Color::Rgb(32, 34, 46))
        }
    }

    /// Style for a step title in the sidebar
    pub fn step_title_style(&self, active: bool, complete: bool) -> Style {
        if active || complete {
            self.title
        } else {
            self.muted.add_modifier(Modifier::BOLD)
        }
    }

    /// Border for a step card
    pub fn card_border(&self, active: bool) -> Style {
        if active {
            self.active_border
        } else {
            self.border
        }
    }
}
