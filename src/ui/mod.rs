// UI module for rendering the TUI.
// Composes the tab bar, optional sidebar, tab content, status bar, popups,
// alerts, and the toast stack.

pub mod alert;
pub mod click_outside;
pub mod sidebar;
pub mod tabs;
pub mod theme;
pub mod toast;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.last_area = frame.area();
    let accent = app.theme.accent;

    // Optional sidebar column on the left.
    let (sidebar_area, main_area) = if app.panels.sidebar_open() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(18), Constraint::Min(1)])
            .split(frame.area());
        (Some(columns[0]), columns[1])
    } else {
        (None, frame.area())
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(main_area);

    tabs::draw_tabs(frame, app.router.active(), accent, rows[0]);
    draw_content(frame, app, rows[1]);
    draw_status_bar(frame, app, rows[2]);

    if let Some(area) = sidebar_area {
        sidebar::draw_sidebar(frame, area, app.router.active(), accent);
    }

    // Popups record their rendered area for click-outside dismissal.
    app.settings_panel_area = if app.panels.settings_panel_open() {
        Some(sidebar::draw_settings_panel(
            frame,
            app.panels.sidebar_open(),
            &storage_label(app),
            accent,
        ))
    } else {
        None
    };
    app.search_box_area = if app.panels.search_box_open() {
        Some(sidebar::draw_search_box(frame, &app.search_input, accent))
    } else {
        None
    };

    if let Some(pending) = &app.alert {
        alert::draw_alert(frame, &pending.alert);
    }

    // Toasts render last, on top of everything.
    toast::draw_toasts(frame, &app.toasts, accent);
}

fn storage_label(app: &App) -> String {
    match app.panels.storage_path() {
        Some(path) => path.display().to_string(),
        None => "unavailable".to_string(),
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.router.active() {
        Tab::Overview => draw_overview_tab(frame, app, area),
        Tab::Activity => draw_activity_tab(frame, app, area),
        Tab::Settings => draw_settings_tab(frame, app, area),
    }
}

fn draw_overview_tab(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Overview ");

    if app.panels.loading() {
        let text = Paragraph::new("⏳ Starting...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let visible = app.visible_activity().len();
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Activity entries: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.activity.len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Matching filters: ", Style::default().fg(Color::DarkGray)),
            Span::raw(visible.to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Sidebar: ", Style::default().fg(Color::DarkGray)),
            Span::raw(if app.panels.sidebar_open() {
                "open"
            } else {
                "closed"
            }),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" switches views, ", Style::default().fg(Color::DarkGray)),
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::styled(" toggles the sidebar, ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::styled(" refreshes.", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_activity_tab(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_activity();

    let filter_label = match app.date_picker.selected {
        Some(preset) => preset.label(),
        None => "All dates",
    };
    let title = format!(
        " Activity: {} [page {}/{}] ",
        filter_label,
        app.pagination.current_page,
        app.pagination.total_pages()
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    if visible.is_empty() {
        let text = Paragraph::new("No activity matches the current filters")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let range = app.pagination.page_range();
    let page = visible.get(range).unwrap_or_default();
    let items: Vec<ListItem> = page
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", item.icon.symbol()),
                    Style::default().fg(item.icon.color()),
                ),
                Span::styled(
                    item.when.format("%Y-%m-%d ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(item.label.clone()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_settings_tab(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Settings ");

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Sidebar open: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.panels.sidebar_open().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Storage: ", Style::default().fg(Color::DarkGray)),
            Span::raw(storage_label(app)),
        ]),
        Line::from(vec![
            Span::styled("  Accent: ", Style::default().fg(Color::DarkGray)),
            Span::styled("███", Style::default().fg(app.theme.accent)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  x", Style::default().fg(Color::Yellow)),
            Span::styled(" resets preferences", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the status bar with the loading indicator and keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if app.loader.is_loading() {
        spans.push(Span::styled(
            " ⏳ Loading… ",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.extend([
        Span::raw(" Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  s "),
        Span::styled("Sidebar", Style::default().fg(Color::DarkGray)),
        Span::raw("  / "),
        Span::styled("Search", Style::default().fg(Color::DarkGray)),
        Span::raw("  d "),
        Span::styled("Dates", Style::default().fg(Color::DarkGray)),
        Span::raw("  n/b "),
        Span::styled("Page", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
