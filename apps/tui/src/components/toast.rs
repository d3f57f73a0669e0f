//! Toast notifications for non-intrusive feedback.
//!
//! Used for the resume-download lifecycle; stacked in the top-right
//! corner and dismissed automatically.

use std::time::{Duration, Instant};

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::icons::Icons;

const TOAST_SECS: u64 = 3;
const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 3;

/// Toast notification variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
    Info,
}

impl ToastVariant {
    /// Color for this variant.
    pub fn color(self) -> Color {
        let theme = crate::theme::get_theme();
        match self {
            Self::Success => theme.success,
            Self::Error => theme.error,
            Self::Info => theme.info,
        }
    }

    /// Icon for this variant.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => Icons::CHECK,
            Self::Error => Icons::CROSS,
            Self::Info => Icons::INFO,
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub variant: ToastVariant,
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(variant: ToastVariant, message: String) -> Self {
        Self {
            variant,
            message,
            created_at: Instant::now(),
            duration: Duration::from_secs(TOAST_SECS),
        }
    }

    /// Whether this toast has outlived its display window.
    pub fn expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Holds the active toasts, newest first.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    max_toasts: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            max_toasts: 4,
        }
    }

    pub fn success(&mut self, message: String) {
        self.push(Toast::new(ToastVariant::Success, message));
    }

    pub fn error(&mut self, message: String) {
        self.push(Toast::new(ToastVariant::Error, message));
    }

    pub fn info(&mut self, message: String) {
        self.push(Toast::new(ToastVariant::Info, message));
    }

    fn push(&mut self, toast: Toast) {
        self.toasts.insert(0, toast);
        self.toasts.truncate(self.max_toasts);
    }

    /// Drops expired toasts; called once per frame.
    pub fn update(&mut self) {
        self.toasts.retain(|toast| !toast.expired());
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Renders the toast stack in the top-right corner and returns each
/// toast's area for animation targeting.
pub fn render_toasts_with_areas(frame: &mut Frame, area: Rect, manager: &ToastManager) -> Vec<Rect> {
    let theme = crate::theme::get_theme();
    let width = TOAST_WIDTH.min(area.width.saturating_sub(4));
    if width < 10 {
        return Vec::new();
    }

    let mut areas = Vec::new();
    let mut y = area.y + 1;
    for toast in manager.toasts() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width + 2),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let accent = toast.variant.color();
        let line = Line::from(vec![
            Span::styled(toast.variant.icon(), Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(toast.message.as_str(), Style::default().fg(theme.text)),
        ]);
        let widget = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .style(Style::default().bg(theme.bg_panel)),
            );
        frame.render_widget(widget, rect);

        areas.push(rect);
        y += TOAST_HEIGHT + 1;
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_is_not_expired() {
        let toast = Toast::new(ToastVariant::Info, "Fetching resume...".to_string());
        assert!(!toast.expired());
    }

    #[test]
    fn test_manager_keeps_newest_first() {
        let mut manager = ToastManager::new();
        manager.info("first".to_string());
        manager.success("second".to_string());

        assert_eq!(manager.toasts().len(), 2);
        assert_eq!(manager.toasts()[0].message, "second");
    }

    #[test]
    fn test_manager_caps_stack_depth() {
        let mut manager = ToastManager::new();
        for i in 0..10 {
            manager.info(format!("toast {}", i));
        }
        assert_eq!(manager.toasts().len(), 4);
        assert_eq!(manager.toasts()[0].message, "toast 9");
    }

    #[test]
    fn test_update_retains_fresh_toasts() {
        let mut manager = ToastManager::new();
        manager.error("download failed".to_string());
        manager.update();
        assert_eq!(manager.toasts().len(), 1);
    }
}
