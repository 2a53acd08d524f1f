//! Application core: event loop, access gate, navigation, and mount
//! detection for the dashboard.

use std::collections::VecDeque;
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use modboard_core::route::{self, View};
use modboard_core::{AdminRoute, AppState, Load, gate};

use crate::action::{Action, FetchRequest};
use crate::component::Component;
use crate::event::{Event, EventReader, RENDER_RATE, TICK_RATE};
use crate::screens::{DashboardScreen, ForbiddenScreen, NotFoundScreen};
use crate::theme;
use crate::tui::Tui;

/// How many earlier paths `Esc` can walk back through.
const HISTORY_LIMIT: usize = 32;

/// Which screen fills the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showing {
    Forbidden,
    Dashboard,
    NotFound,
}

pub struct App {
    /// Current path inside the admin shell.
    path: String,
    /// Earlier paths, most recent last, for `Esc`.
    history: VecDeque<String>,
    /// Latest store snapshot from the data bridge.
    state: Arc<AppState>,
    /// Whether the dashboard was showing after the last transition.
    dashboard_mounted: bool,
    dashboard: DashboardScreen,
    not_found: NotFoundScreen,
    forbidden: ForbiddenScreen,
    running: bool,
    help_visible: bool,
    /// Host (or "demo") shown in the status bar.
    server_label: String,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Requests to the data bridge.
    fetch_tx: mpsc::UnboundedSender<FetchRequest>,
}

impl App {
    pub fn new(
        server_label: impl Into<String>,
        initial_path: impl Into<String>,
        fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            path: initial_path.into(),
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            state: Arc::default(),
            dashboard_mounted: false,
            dashboard: DashboardScreen::new(),
            not_found: NotFoundScreen::default(),
            forbidden: ForbiddenScreen::default(),
            running: true,
            help_visible: false,
            server_label: server_label.into(),
            action_tx,
            action_rx,
            fetch_tx,
        }
    }

    /// Sender the data bridge uses to push store snapshots into the loop.
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub async fn run(&mut self, cancel: &CancellationToken) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::spawn(TICK_RATE, RENDER_RATE, cancel);
        info!(path = %self.path, "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(cols, rows) => {
                    debug!(cols, rows, "terminal resized");
                    self.action_tx.send(Action::Render)?;
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Gate first, then route. Re-evaluated on every call.
    pub fn showing(&self) -> Showing {
        if !gate(self.state.session.user.as_ref()).is_granted() {
            return Showing::Forbidden;
        }
        match route::resolve(&self.path) {
            View::Dashboard => Showing::Dashboard,
            View::NotFound => Showing::NotFound,
        }
    }

    fn screen(&self) -> &dyn Component {
        match self.showing() {
            Showing::Forbidden => &self.forbidden,
            Showing::Dashboard => &self.dashboard,
            Showing::NotFound => &self.not_found,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Component {
        match self.showing() {
            Showing::Forbidden => &mut self.forbidden,
            Showing::Dashboard => &mut self.dashboard,
            Showing::NotFound => &mut self.not_found,
        }
    }

    /// Entering the dashboard from any other view mounts it, which asks
    /// for one stats and one recent-items read. Staying on it does not.
    fn sync_mount(&mut self) {
        let showing = self.showing();
        self.dashboard.set_focused(showing == Showing::Dashboard);
        self.not_found.set_focused(showing == Showing::NotFound);

        let on_dashboard = showing == Showing::Dashboard;
        if on_dashboard == self.dashboard_mounted {
            return;
        }
        self.dashboard_mounted = on_dashboard;

        if on_dashboard {
            debug!("dashboard mounted");
            self.request(FetchRequest::Dashboard);
        }
    }

    fn request(&self, request: FetchRequest) {
        if self.fetch_tx.send(request).is_err() {
            warn!(?request, "data bridge has stopped; request dropped");
        }
    }

    fn navigate(&mut self, path: String) {
        if path == self.path {
            return;
        }
        let previous = std::mem::replace(&mut self.path, path);
        debug!(from = %previous, to = %self.path, screen = self.screen().id(), "navigate");
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(previous);
        self.sync_mount();
    }

    /// The sidebar entry the cursor keys move from.
    fn current_route(&self) -> AdminRoute {
        AdminRoute::from_path(&self.path).unwrap_or_default()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            _ => {}
        }

        // Navigation only exists inside the granted shell.
        if self.showing() != Showing::Forbidden {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='5')) => {
                    let route = c
                        .to_digit(10)
                        .and_then(|n| u8::try_from(n).ok())
                        .and_then(AdminRoute::from_number);
                    if let Some(route) = route {
                        return Ok(Some(Action::SwitchRoute(route)));
                    }
                }
                (KeyModifiers::NONE, KeyCode::Tab) => {
                    return Ok(Some(Action::SwitchRoute(self.current_route().next())));
                }
                (_, KeyCode::BackTab) => {
                    return Ok(Some(Action::SwitchRoute(self.current_route().prev())));
                }
                (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),
                _ => {}
            }
        }

        self.screen_mut().handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.screen_mut().handle_mouse_event(mouse)
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::Render => {}
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::SwitchRoute(route) => self.navigate(route.path().to_owned()),
            Action::GoBack => {
                if let Some(previous) = self.history.pop_back() {
                    debug!(to = %previous, "back");
                    self.path = previous;
                    self.sync_mount();
                }
            }
            Action::Fetch(request) => self.request(*request),
            Action::StateChanged(state) => {
                self.state = Arc::clone(state);
                self.broadcast(action)?;
                self.sync_mount();
            }
            Action::Tick => self.broadcast(action)?,
        }
        Ok(())
    }

    /// Hand an action to every screen so hidden ones stay current.
    fn broadcast(&mut self, action: &Action) -> Result<()> {
        let screens: [&mut dyn Component; 3] =
            [&mut self.dashboard, &mut self.not_found, &mut self.forbidden];
        let mut follow_ups = Vec::new();
        for screen in screens {
            if let Some(next) = screen.update(action)? {
                follow_ups.push(next);
            }
        }
        for next in follow_ups {
            self.action_tx.send(next)?;
        }
        Ok(())
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if self.showing() == Showing::Forbidden {
            let [content, status] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
            self.forbidden.render(frame, content);
            self.render_status_bar(frame, status);
        } else {
            let [header, body, status] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .areas(area);
            let [sidebar, content] =
                Layout::horizontal([Constraint::Length(20), Constraint::Min(1)]).areas(body);

            self.render_header(frame, header);
            self.render_sidebar(frame, sidebar);
            self.screen().render(frame, content);
            self.render_status_bar(frame, status);
        }

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" Admin", theme::title()),
            Span::styled(format!("  {}", self.path), theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = AdminRoute::ALL
            .iter()
            .map(|&route| {
                let style = if route.is_active(&self.path) {
                    theme::nav_active()
                } else {
                    theme::nav_inactive()
                };
                Line::styled(format!(" {} {:<14}", route.number(), route.label()), style)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn session_indicator(&self) -> Span<'static> {
        let (text, color) = match (&self.state.session.user, &self.state.requests.session) {
            (_, Load::Loading) => ("◐ checking session".to_owned(), theme::AMBER),
            (Some(user), _) if user.is_admin => (format!("● {} (admin)", user.username), theme::GREEN),
            (Some(user), _) => (format!("● {}", user.username), theme::AMBER),
            (None, Load::Failed(_)) => ("○ session error".to_owned(), theme::RED),
            (None, _) => ("○ signed out".to_owned(), theme::RED),
        };
        Span::styled(text, Style::default().fg(color))
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(" "),
            self.session_indicator(),
            Span::styled(" │ ", theme::key_hint()),
            Span::styled(self.server_label.clone(), theme::text()),
            Span::styled(" │", theme::key_hint()),
        ];
        let hints = self
            .screen()
            .hints()
            .iter()
            .chain(&[("?", "help"), ("q", "quit")]);
        for (key, label) in hints {
            spans.push(Span::styled(format!(" {key}"), theme::key_hint_key()));
            spans.push(Span::styled(format!(" {label}"), theme::key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let width = 48u16.min(area.width.saturating_sub(4));
        let height = 14u16.min(area.height.saturating_sub(2));
        let help_area = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        frame.render_widget(Clear, help_area);
        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_OVERLAY));

        let entry = |key: &'static str, label: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(label, theme::key_hint()),
            ])
        };
        let lines = vec![
            Line::from(""),
            entry("1-5", "Jump to sidebar entry"),
            entry("Tab", "Next entry"),
            entry("Shift+Tab", "Previous entry"),
            entry("Esc", "Back"),
            entry("r", "Retry failed reads"),
            entry("t", "Toggle recent activity"),
            entry("?", "This help"),
            entry("q", "Quit"),
            Line::from(""),
            Line::styled("  Esc or ? to close", theme::key_hint()),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), help_area);
    }
}
