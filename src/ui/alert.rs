// Modal alerts.
// Fixed presets for success, error, and yes/no confirmation dialogs,
// rendered centered on top of the current view.

use crossterm::event::KeyCode;
use ratatui::{prelude::*, widgets::*};

/// Icon shown in the alert title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIcon {
    Success,
    Error,
    Question,
}

impl AlertIcon {
    fn symbol(&self) -> &'static str {
        match self {
            AlertIcon::Success => "✔",
            AlertIcon::Error => "✖",
            AlertIcon::Question => "?",
        }
    }

    fn color(&self) -> Color {
        match self {
            AlertIcon::Success => Color::Green,
            AlertIcon::Error => Color::Red,
            AlertIcon::Question => Color::Yellow,
        }
    }
}

/// Buttons offered by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertButtons {
    Ok,
    YesNo,
}

/// How the user left the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChoice {
    Confirmed,
    Dismissed,
}

/// A modal alert with a fixed option preset.
#[derive(Debug, Clone)]
pub struct Alert {
    pub icon: AlertIcon,
    pub title: String,
    pub text: Option<String>,
    pub buttons: AlertButtons,
}

impl Alert {
    pub fn success(title: impl Into<String>, text: Option<String>) -> Self {
        Self {
            icon: AlertIcon::Success,
            title: title.into(),
            text,
            buttons: AlertButtons::Ok,
        }
    }

    pub fn error(title: impl Into<String>, text: Option<String>) -> Self {
        Self {
            icon: AlertIcon::Error,
            title: title.into(),
            text,
            buttons: AlertButtons::Ok,
        }
    }

    /// Question icon with Yes/No buttons.
    pub fn confirm(title: impl Into<String>, text: Option<String>) -> Self {
        Self {
            icon: AlertIcon::Question,
            title: title.into(),
            text,
            buttons: AlertButtons::YesNo,
        }
    }

    /// Map a key press to an outcome, if it resolves the dialog.
    pub fn resolve(&self, key: KeyCode) -> Option<AlertChoice> {
        match self.buttons {
            AlertButtons::Ok => match key {
                KeyCode::Enter | KeyCode::Esc => Some(AlertChoice::Confirmed),
                _ => None,
            },
            AlertButtons::YesNo => match key {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    Some(AlertChoice::Confirmed)
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    Some(AlertChoice::Dismissed)
                }
                _ => None,
            },
        }
    }
}

/// Draw an alert dialog centered on top of the current view.
pub fn draw_alert(frame: &mut Frame, alert: &Alert) {
    let area = frame.area();

    let modal_width = area.width.min(48);
    let modal_height = area.height.min(8);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(alert.icon.color()));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(1),    // Body text
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", alert.icon.symbol()),
            Style::default()
                .fg(alert.icon.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            alert.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    if let Some(text) = &alert.text {
        let body = Paragraph::new(text.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(body, chunks[1]);
    }

    let instructions = match alert.buttons {
        AlertButtons::Ok => Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = OK ", Style::default().fg(Color::DarkGray)),
        ]),
        AlertButtons::YesNo => Line::from(vec![
            Span::styled(" y/Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = Yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("n/Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" = No ", Style::default().fg(Color::DarkGray)),
        ]),
    };
    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let success = Alert::success("Saved", None);
        assert_eq!(success.icon, AlertIcon::Success);
        assert_eq!(success.buttons, AlertButtons::Ok);

        let error = Alert::error("Failed", Some("disk full".into()));
        assert_eq!(error.icon, AlertIcon::Error);
        assert_eq!(error.buttons, AlertButtons::Ok);

        let confirm = Alert::confirm("Quit?", None);
        assert_eq!(confirm.icon, AlertIcon::Question);
        assert_eq!(confirm.buttons, AlertButtons::YesNo);
    }

    #[test]
    fn test_ok_dialog_resolution() {
        let alert = Alert::success("Saved", None);
        assert_eq!(alert.resolve(KeyCode::Enter), Some(AlertChoice::Confirmed));
        assert_eq!(alert.resolve(KeyCode::Esc), Some(AlertChoice::Confirmed));
        assert_eq!(alert.resolve(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_confirm_dialog_resolution() {
        let alert = Alert::confirm("Quit?", None);
        assert_eq!(alert.resolve(KeyCode::Char('y')), Some(AlertChoice::Confirmed));
        assert_eq!(alert.resolve(KeyCode::Enter), Some(AlertChoice::Confirmed));
        assert_eq!(alert.resolve(KeyCode::Char('n')), Some(AlertChoice::Dismissed));
        assert_eq!(alert.resolve(KeyCode::Esc), Some(AlertChoice::Dismissed));
        assert_eq!(alert.resolve(KeyCode::Tab), None);
    }
}
