// Toast notifications.
// Toasts stack in the top-right corner, expire after a fixed timer with a
// visible progress bar, and pause their countdown while hovered.

use std::time::Duration;

use ratatui::{prelude::*, widgets::*};

use super::click_outside::contains;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

const TOAST_WIDTH: u16 = 34;
const TOAST_HEIGHT: u16 = 4;

/// Icon shown next to a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIcon {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            ToastIcon::Success => "✔",
            ToastIcon::Error => "✖",
            ToastIcon::Info => "ℹ",
            ToastIcon::Warning => "⚠",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ToastIcon::Success => Color::Green,
            ToastIcon::Error => Color::Red,
            ToastIcon::Info => Color::Cyan,
            ToastIcon::Warning => Color::Yellow,
        }
    }
}

/// A single on-screen toast.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub icon: ToastIcon,
    remaining: Duration,
    paused: bool,
}

impl Toast {
    fn new(message: String, icon: ToastIcon) -> Self {
        Self {
            message,
            icon,
            remaining: TOAST_DURATION,
            paused: false,
        }
    }

    /// Fraction of the timer left, for the progress bar.
    pub fn progress(&self) -> f64 {
        self.remaining.as_secs_f64() / TOAST_DURATION.as_secs_f64()
    }
}

/// Queue of active toasts, newest last.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast with the standard presets: top-right placement, the
    /// fixed timer, and a progress bar.
    pub fn push(&mut self, message: impl Into<String>, icon: ToastIcon) {
        self.toasts.push(Toast::new(message.into(), icon));
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Advance timers by one frame and drop expired toasts. Hovered toasts
    /// keep their remaining time.
    pub fn tick(&mut self, elapsed: Duration) {
        for toast in &mut self.toasts {
            if !toast.paused {
                toast.remaining = toast.remaining.saturating_sub(elapsed);
            }
        }
        self.toasts.retain(|toast| !toast.remaining.is_zero());
    }

    /// Pause the toast under the mouse cursor, resume the rest.
    pub fn set_hover(&mut self, screen: Rect, column: u16, row: u16) {
        let areas = layout(screen, self.toasts.len());
        for (toast, area) in self.toasts.iter_mut().zip(areas) {
            toast.paused = contains(area, column, row);
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Screen areas for a stack of `count` toasts, anchored top-right.
/// The renderer and the hover handler both use this, so the hit test always
/// matches what is drawn.
pub fn layout(screen: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(screen.width);
    let x = screen.right().saturating_sub(width);
    (0..count as u16)
        .map(|i| {
            let y = screen.top() + 1 + i * TOAST_HEIGHT;
            let height = TOAST_HEIGHT.min(screen.bottom().saturating_sub(y));
            Rect::new(x, y, width, height)
        })
        .filter(|area| area.height > 0)
        .collect()
}

/// Draw the toast stack on top of the current view.
pub fn draw_toasts(frame: &mut Frame, queue: &ToastQueue, accent: Color) {
    let areas = layout(frame.area(), queue.len());
    for (toast, area) in queue.toasts().iter().zip(areas) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(toast.icon.color()));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let message = Line::from(vec![
            Span::styled(
                format!("{} ", toast.icon.symbol()),
                Style::default().fg(toast.icon.color()),
            ),
            Span::raw(toast.message.as_str()),
        ]);
        frame.render_widget(Paragraph::new(message), rows[0]);

        let timer = LineGauge::default()
            .filled_style(Style::default().fg(accent))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .ratio(toast.progress().clamp(0.0, 1.0))
            .label("");
        frame.render_widget(timer, rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let mut queue = ToastQueue::new();
        queue.push("saved", ToastIcon::Success);

        queue.tick(Duration::from_millis(2999));
        assert_eq!(queue.len(), 1);

        queue.tick(Duration::from_millis(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_hovered_toast_keeps_remaining_time() {
        let screen = Rect::new(0, 0, 80, 24);
        let mut queue = ToastQueue::new();
        queue.push("saved", ToastIcon::Success);

        let area = layout(screen, 1)[0];
        queue.set_hover(screen, area.x + 1, area.y + 1);
        queue.tick(TOAST_DURATION * 2);
        assert_eq!(queue.len(), 1, "paused toast must not expire");

        queue.set_hover(screen, 0, 0);
        queue.tick(TOAST_DURATION * 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_layout_anchors_top_right() {
        let screen = Rect::new(0, 0, 80, 24);
        let areas = layout(screen, 2);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].right(), screen.right());
        assert!(areas[1].top() > areas[0].top());
    }

    #[test]
    fn test_layout_clips_to_short_screens() {
        let screen = Rect::new(0, 0, 80, 6);
        let areas = layout(screen, 4);
        assert!(areas.len() < 4);
        for area in areas {
            assert!(area.bottom() <= screen.bottom());
        }
    }

    #[test]
    fn test_progress_decreases() {
        let mut queue = ToastQueue::new();
        queue.push("saved", ToastIcon::Info);
        assert!((queue.toasts()[0].progress() - 1.0).abs() < f64::EPSILON);

        queue.tick(Duration::from_millis(1500));
        let progress = queue.toasts()[0].progress();
        assert!(progress > 0.4 && progress < 0.6);
    }
}
