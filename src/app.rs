// App state and main event loop.
// Wires the router, loading signal, panel flags, toasts, and alerts into a
// synchronous draw/tick/poll loop with keyboard and mouse handling.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;

use crate::settings;
use crate::state::{DatePickerState, Loader, Pagination, PanelState, PredefinedRange};
use crate::store::{Store, Subscription};
use crate::ui;
use crate::ui::alert::{Alert, AlertChoice};
use crate::ui::click_outside::ClickOutside;
use crate::ui::theme::Theme;
use crate::ui::toast::{ToastIcon, ToastQueue};

/// Simulated page-load time after switching tabs.
const NAV_LOAD: Duration = Duration::from_millis(250);
/// Simulated duration of a manual refresh.
const REFRESH_LOAD: Duration = Duration::from_millis(600);
/// Initial app load before the shell is considered ready.
const STARTUP_LOAD: Duration = Duration::from_millis(400);
/// Activity rows per page.
const PER_PAGE: usize = 8;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Activity,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Activity, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Activity => "Activity",
            Tab::Settings => "Settings",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Overview => Tab::Activity,
            Tab::Activity => Tab::Settings,
            Tab::Settings => Tab::Overview,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Overview => Tab::Settings,
            Tab::Activity => Tab::Overview,
            Tab::Settings => Tab::Activity,
        }
    }
}

/// Tab navigation. Owns the `navigating` signal: switching tabs raises it,
/// and a later tick lowers it once the simulated load completes.
pub struct Router {
    active: Tab,
    navigating: Store<bool>,
    started: Option<Instant>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            active: Tab::default(),
            navigating: Store::new(false),
            started: None,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// The navigation-in-progress signal. Consumers subscribe; only the
    /// router mutates it.
    pub fn navigating(&self) -> &Store<bool> {
        &self.navigating
    }

    pub fn navigate(&mut self, tab: Tab) {
        if tab == self.active {
            return;
        }
        tracing::debug!(from = self.active.title(), to = tab.title(), "navigating");
        self.active = tab;
        self.started = Some(Instant::now());
        self.navigating.set(true);
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(started) = self.started {
            if now.duration_since(started) >= NAV_LOAD {
                self.started = None;
                self.navigating.set(false);
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the activity feed.
#[derive(Debug, Clone)]
pub struct ActivityItem {
    pub when: NaiveDate,
    pub label: String,
    pub icon: ToastIcon,
}

/// An open alert plus what to do when it is confirmed.
pub struct PendingAlert {
    pub alert: Alert,
    pub action: AlertAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Acknowledge,
    Quit,
    ResetPreferences,
}

/// Main application state.
pub struct App {
    pub theme: Theme,
    pub router: Router,
    pub loader: Loader,
    pub panels: PanelState,
    pub toasts: ToastQueue,
    pub alert: Option<PendingAlert>,
    pub activity: Vec<ActivityItem>,
    pub pagination: Pagination,
    pub date_picker: DatePickerState,
    pub search_input: String,
    pub today: NaiveDate,
    /// Last rendered screen area, for mouse hit tests.
    pub last_area: Rect,
    /// Popup areas recorded during draw, for click-outside dismissal.
    pub settings_panel_area: Option<Rect>,
    pub search_box_area: Option<Rect>,
    /// Whether the app should exit.
    pub should_quit: bool,
    launched_at: Instant,
    refresh_started: Option<Instant>,
    _loading_log: Subscription,
}

impl App {
    pub fn new(storage_path: Option<PathBuf>, theme: Theme, today: NaiveDate) -> Self {
        let router = Router::new();
        let loader = Loader::new(router.navigating());
        let panels = PanelState::new(storage_path);
        let loading_log = loader.subscribe(|loading: &bool| {
            tracing::debug!(loading, "global loading changed");
        });

        let activity = sample_activity(today);
        let pagination = Pagination::new(activity.len(), PER_PAGE);

        let mut toasts = ToastQueue::new();
        if panels.storage_path().is_none() {
            toasts.push("Preferences will not persist", ToastIcon::Warning);
        }

        Self {
            theme,
            router,
            loader,
            panels,
            toasts,
            alert: None,
            activity,
            pagination,
            date_picker: DatePickerState::default(),
            search_input: String::new(),
            today,
            last_area: Rect::default(),
            settings_panel_area: None,
            search_box_area: None,
            should_quit: false,
            launched_at: Instant::now(),
            refresh_started: None,
            _loading_log: loading_log,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        let mut last_frame = Instant::now();
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let now = Instant::now();
            self.tick(now.duration_since(last_frame), now);
            last_frame = now;

            self.handle_events()?;
        }
        Ok(())
    }

    /// Advance timers: navigation, refresh, startup load, toast expiry.
    pub fn tick(&mut self, elapsed: Duration, now: Instant) {
        self.router.tick(now);

        if let Some(started) = self.refresh_started {
            if now.duration_since(started) >= REFRESH_LOAD {
                self.refresh_started = None;
                self.loader.set_manual(false);
                self.toasts.push("Activity refreshed", ToastIcon::Success);
            }
        }

        if self.panels.loading() && now.duration_since(self.launched_at) >= STARTUP_LOAD {
            self.panels.set_loading(false);
        }

        self.toasts.tick(elapsed);
    }

    /// Handle keyboard and other events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // An open alert captures all input.
        if let Some(pending) = self.alert.take() {
            match pending.alert.resolve(key.code) {
                Some(choice) => self.finish_alert(pending.action, choice),
                None => self.alert = Some(pending),
            }
            return;
        }

        // So does the search box.
        if self.panels.search_box_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.panels.set_search_box_open(false);
                }
                KeyCode::Backspace => {
                    self.search_input.pop();
                    self.refresh_pagination();
                }
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                    self.refresh_pagination();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.alert = Some(PendingAlert {
                    alert: Alert::confirm("Quit vane?", None),
                    action: AlertAction::Quit,
                });
            }
            KeyCode::Tab => self.router.navigate(self.router.active().next()),
            KeyCode::BackTab => self.router.navigate(self.router.active().prev()),
            KeyCode::Char('s') => self.panels.toggle_sidebar(),
            KeyCode::Char('p') => {
                let open = self.panels.settings_panel_open();
                self.panels.set_settings_panel_open(!open);
            }
            KeyCode::Char('/') => self.panels.set_search_box_open(true),
            KeyCode::Char('r') => self.start_refresh(),
            KeyCode::Char('n') | KeyCode::Right => {
                self.pagination.next_page();
            }
            KeyCode::Char('b') | KeyCode::Left => {
                self.pagination.previous_page();
            }
            KeyCode::Char('d') => self.cycle_date_filter(),
            KeyCode::Char('x') if self.router.active() == Tab::Settings => {
                self.alert = Some(PendingAlert {
                    alert: Alert::confirm(
                        "Reset preferences?",
                        Some("The persisted sidebar state will be cleared.".into()),
                    ),
                    action: AlertAction::ResetPreferences,
                });
            }
            KeyCode::Esc => {
                self.panels.set_settings_panel_open(false);
                self.panels.set_search_box_open(false);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => {
                self.toasts.set_hover(self.last_area, mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.panels.search_box_open() {
                    if let Some(area) = self.search_box_area {
                        if ClickOutside::new(area).triggered(&mouse) {
                            self.panels.set_search_box_open(false);
                        }
                    }
                } else if self.panels.settings_panel_open() {
                    if let Some(area) = self.settings_panel_area {
                        if ClickOutside::new(area).triggered(&mouse) {
                            self.panels.set_settings_panel_open(false);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn finish_alert(&mut self, action: AlertAction, choice: AlertChoice) {
        if choice != AlertChoice::Confirmed {
            return;
        }
        match action {
            AlertAction::Acknowledge => {}
            AlertAction::Quit => self.should_quit = true,
            AlertAction::ResetPreferences => self.reset_preferences(),
        }
    }

    fn reset_preferences(&mut self) {
        let Some(path) = self.panels.storage_path().cloned() else {
            self.alert = Some(PendingAlert {
                alert: Alert::error(
                    "No settings storage",
                    Some("This environment has no persistent storage.".into()),
                ),
                action: AlertAction::Acknowledge,
            });
            return;
        };

        match settings::remove(&path) {
            Ok(()) => {
                self.panels.set_sidebar_open(false);
                self.alert = Some(PendingAlert {
                    alert: Alert::success("Preferences reset", None),
                    action: AlertAction::Acknowledge,
                });
            }
            Err(e) => {
                self.alert = Some(PendingAlert {
                    alert: Alert::error("Could not reset preferences", Some(e.to_string())),
                    action: AlertAction::Acknowledge,
                });
            }
        }
    }

    /// Raise the manual loading flag for a simulated refresh.
    fn start_refresh(&mut self) {
        if self.refresh_started.is_some() {
            return;
        }
        self.refresh_started = Some(Instant::now());
        self.loader.set_manual(true);
    }

    fn cycle_date_filter(&mut self) {
        let next = match self.date_picker.selected {
            None => Some(PredefinedRange::ALL[0]),
            Some(current) => PredefinedRange::ALL
                .iter()
                .position(|r| *r == current)
                .and_then(|i| PredefinedRange::ALL.get(i + 1))
                .copied(),
        };
        match next {
            Some(preset) => self.date_picker.select(preset, self.today),
            None => self.date_picker.clear(),
        }
        self.refresh_pagination();
    }

    /// Activity rows passing the date filter and search query.
    pub fn visible_activity(&self) -> Vec<&ActivityItem> {
        let query = self.search_input.to_lowercase();
        self.activity
            .iter()
            .filter(|item| {
                self.date_picker
                    .range
                    .is_none_or(|range| range.contains(item.when))
            })
            .filter(|item| query.is_empty() || item.label.to_lowercase().contains(&query))
            .collect()
    }

    fn refresh_pagination(&mut self) {
        let visible = self.visible_activity().len();
        self.pagination = Pagination::new(visible, PER_PAGE);
    }
}

/// Deterministic sample feed, newest first.
fn sample_activity(today: NaiveDate) -> Vec<ActivityItem> {
    const EVENTS: [(&str, ToastIcon); 6] = [
        ("Deploy completed", ToastIcon::Success),
        ("Build failed", ToastIcon::Error),
        ("New sign-up", ToastIcon::Info),
        ("Disk usage above 80%", ToastIcon::Warning),
        ("Backup finished", ToastIcon::Success),
        ("Config updated", ToastIcon::Info),
    ];

    let mut items: Vec<ActivityItem> = (0..48usize)
        .map(|i| {
            let (label, icon) = EVENTS[i % EVENTS.len()];
            ActivityItem {
                when: today - Days::new((i as u64 * 3) % 95),
                label: format!("{label} #{}", 100 + i),
                icon,
            }
        })
        .collect();
    items.sort_by(|a, b| b.when.cmp(&a.when));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        App::new(None, Theme::plain(), today)
    }

    #[test]
    fn test_navigation_drives_loading_signal() {
        let mut app = test_app();
        assert!(!app.loader.is_loading());

        app.router.navigate(Tab::Activity);
        assert!(app.loader.is_loading());
        assert_eq!(app.router.active(), Tab::Activity);

        // Completed load lowers the signal on a later tick.
        app.router.tick(Instant::now() + NAV_LOAD * 2);
        assert!(!app.loader.is_loading());
    }

    #[test]
    fn test_navigate_to_current_tab_is_a_no_op() {
        let mut app = test_app();
        app.router.navigate(Tab::Overview);
        assert!(!app.loader.is_loading());
    }

    #[test]
    fn test_refresh_raises_manual_flag_and_toasts_on_completion() {
        let mut app = test_app();
        app.start_refresh();
        assert!(app.loader.manual());
        assert!(app.loader.is_loading());

        let toasts_before = app.toasts.len();
        app.tick(Duration::from_millis(16), Instant::now() + REFRESH_LOAD * 2);
        assert!(!app.loader.is_loading());
        assert_eq!(app.toasts.len(), toasts_before + 1);
    }

    #[test]
    fn test_startup_loading_flag_clears() {
        let mut app = test_app();
        assert!(app.panels.loading());
        app.tick(Duration::from_millis(16), Instant::now() + STARTUP_LOAD * 2);
        assert!(!app.panels.loading());
    }

    #[test]
    fn test_date_filter_cycles_through_presets_and_off() {
        let mut app = test_app();
        assert!(app.date_picker.selected.is_none());

        for preset in PredefinedRange::ALL {
            app.cycle_date_filter();
            assert_eq!(app.date_picker.selected, Some(preset));
        }
        app.cycle_date_filter();
        assert!(app.date_picker.selected.is_none());
    }

    #[test]
    fn test_date_filter_narrows_visible_activity() {
        let mut app = test_app();
        let all = app.visible_activity().len();
        assert_eq!(all, app.activity.len());

        app.date_picker.select(PredefinedRange::Yesterday, app.today);
        let filtered = app.visible_activity().len();
        assert!(filtered < all);
        for item in app.visible_activity() {
            assert_eq!(item.when, app.today - Days::new(1));
        }
    }

    #[test]
    fn test_search_narrows_visible_activity_and_resets_paging() {
        let mut app = test_app();
        app.search_input = "deploy".into();
        app.refresh_pagination();

        let visible = app.visible_activity();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|i| i.label.contains("Deploy")));
        assert_eq!(app.pagination.current_page, 1);
        assert_eq!(app.pagination.total_items, visible.len());
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = test_app();
        app.alert = Some(PendingAlert {
            alert: Alert::confirm("Quit vane?", None),
            action: AlertAction::Quit,
        });

        let pending = app.alert.take().unwrap();
        app.finish_alert(pending.action, AlertChoice::Dismissed);
        assert!(!app.should_quit);

        app.finish_alert(AlertAction::Quit, AlertChoice::Confirmed);
        assert!(app.should_quit);
    }

    #[test]
    fn test_sample_activity_is_newest_first() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let items = sample_activity(today);
        for pair in items.windows(2) {
            assert!(pair[0].when >= pair[1].when);
        }
    }
}
