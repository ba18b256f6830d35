// Sidebar and popup panels.
// The sidebar is a collapsible navigation column; the settings panel and
// search box are popups that report their area for click-outside dismissal.

use ratatui::{prelude::*, widgets::*};

use crate::app::Tab;

/// Draw the navigation sidebar in its column.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, active: Tab, accent: Color) {
    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == active {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(tab.title(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Menu "),
    );
    frame.render_widget(list, area);
}

/// Draw the settings panel popup. Returns the rendered area.
pub fn draw_settings_panel(
    frame: &mut Frame,
    sidebar_persisted: bool,
    storage_label: &str,
    accent: Color,
) -> Rect {
    let area = frame.area();
    let panel_width = area.width.min(44);
    let panel_height = area.height.min(7);
    let panel_area = Rect::new(
        (area.width.saturating_sub(panel_width)) / 2,
        (area.height.saturating_sub(panel_height)) / 2,
        panel_width,
        panel_height,
    );

    frame.render_widget(Clear, panel_area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Sidebar persisted: ", Style::default().fg(Color::DarkGray)),
            Span::raw(if sidebar_persisted { "open" } else { "closed" }),
        ]),
        Line::from(vec![
            Span::styled("Storage: ", Style::default().fg(Color::DarkGray)),
            Span::raw(storage_label),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(
                " or click outside to close ",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Settings "),
    );
    frame.render_widget(panel, panel_area);
    panel_area
}

/// Draw the search box popup near the top of the screen. Returns the
/// rendered area.
pub fn draw_search_box(frame: &mut Frame, input: &str, accent: Color) -> Rect {
    let area = frame.area();
    let box_width = area.width.min(50);
    let box_area = Rect::new(
        (area.width.saturating_sub(box_width)) / 2,
        area.top() + 2,
        box_width,
        area.height.min(3),
    );

    frame.render_widget(Clear, box_area);

    let input_line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(input),
        Span::styled("█", Style::default().fg(accent)),
    ]);
    let widget = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );
    frame.render_widget(widget, box_area);
    box_area
}
