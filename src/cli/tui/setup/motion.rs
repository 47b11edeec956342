//! Animation helpers: easing, pulsing text, panel fade-in and the pointer glow

use std::time::{Duration, Instant};

use ratatui::style::Color;

use super::theme::BACKGROUND;

/// Period of the "Step N" pulse
pub const PULSE_PERIOD: Duration = Duration::from_secs(4);
/// Panel fade-in after a step change
pub const PANEL_ENTER: Duration = Duration::from_millis(450);

pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Opacity cycling 0.7 -> 1.0 -> 0.7 over [`PULSE_PERIOD`]
pub fn pulse_opacity(elapsed: Duration) -> f64 {
    let period = PULSE_PERIOD.as_secs_f64();
    let phase = (elapsed.as_secs_f64() % period) / period;
    if phase < 0.5 {
        0.7 + 0.3 * ease_in_out(phase * 2.0)
    } else {
        1.0 - 0.3 * ease_in_out((phase - 0.5) * 2.0)
    }
}

/// Linear blend of `fg` over `bg`
pub fn blend(bg: (u8, u8, u8), fg: (u8, u8, u8), alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |b: u8, f: u8| (b as f64 + (f as f64 - b as f64) * alpha).round() as u8;
    Color::Rgb(mix(bg.0, fg.0), mix(bg.1, fg.1), mix(bg.2, fg.2))
}

/// `rgb` faded toward the background by `opacity`
pub fn fade(rgb: (u8, u8, u8), opacity: f64) -> Color {
    blend(BACKGROUND, rgb, opacity)
}

/// Fade-in progress for the step panel
#[derive(Debug, Clone, Copy)]
pub struct PanelTransition {
    started: Instant,
    duration: Duration,
}

impl PanelTransition {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            duration: PANEL_ENTER,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    /// Eased opacity in 0.0..=1.0
    pub fn opacity(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        ease_out(elapsed / self.duration.as_secs_f64())
    }
}

/// Pointer position as a percentage of the terminal size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub x: f64,
    pub y: f64,
}

impl Default for Glow {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl Glow {
    /// Peak alpha at the pointer
    const STRENGTH: f64 = 0.35;
    /// Falloff radius in percent of the terminal width
    const RADIUS: f64 = 30.0;

    /// Follow the pointer. Ignored for an empty viewport.
    pub fn track(&mut self, column: u16, row: u16, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }
        self.x = (column as f64 / width as f64 * 100.0).clamp(0.0, 100.0);
        self.y = (row as f64 / height as f64 * 100.0).clamp(0.0, 100.0);
    }

    /// Tint alpha for a cell, fading to zero at [`Self::RADIUS`]
    pub fn intensity_at(&self, column: u16, row: u16, width: u16, height: u16) -> f64 {
        if width == 0 || height == 0 {
            return 0.0;
        }
        let cx = column as f64 / width as f64 * 100.0;
        let cy = row as f64 / height as f64 * 100.0;
        let distance = ((cx - self.x).powi(2) + (cy - self.y).powi(2)).sqrt();
        Self::STRENGTH * (1.0 - distance / Self::RADIUS).max(0.0)
    }
}
