// Tab bar rendering.
// Handles visual indication of the active tab.

use ratatui::{prelude::*, widgets::*};

use crate::app::Tab;

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, active: Tab, accent: Color, area: Rect) {
    let tab_titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == active {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(tab.title(), style))
        })
        .collect();

    let selected_index = Tab::ALL.iter().position(|t| *t == active).unwrap_or(0);

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" vane ")
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(accent))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
