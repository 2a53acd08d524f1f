//! Dashboard screen: the content of `/admin`.
//!
//! Layout:
//! ┌─ Dashboard ───────────────────────────── updated 14:02:11 (3s ago) ─┐
//! │ ┌─ Total Users ─┐ ┌─ Total Posts ─┐ ┌─ Total Comments ─┐             │
//! │ │      100      │ │      200      │ │       300        │             │
//! │ └───────────────┘ └───────────────┘ └──────────────────┘             │
//! │ ⠋ Loading… / failure banners                                         │
//! │ ┌─ Recent Users ─┐ ┌─ Recent Posts ─┐ ┌─ Recent Comments ─┐  (t)     │
//! └──────────────────────────────────────────────────────────────────────┘

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use modboard_core::{AdminState, AppState, Load, RequestsState};

use crate::action::{Action, FetchRequest};
use crate::component::Component;
use crate::theme;
use crate::widgets::banner::failure_line;
use crate::widgets::stat_card::StatCard;

/// When the last stats fetch landed. Kept here rather than in the store so
/// reducers never read the clock.
#[derive(Debug, Clone, Copy)]
struct Updated {
    at: DateTime<Local>,
    instant: Instant,
}

pub struct DashboardScreen {
    focused: bool,
    admin: Arc<AdminState>,
    requests: Arc<RequestsState>,
    show_recent: bool,
    updated: Option<Updated>,
    throbber_state: ThrobberState,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            admin: Arc::default(),
            requests: Arc::default(),
            show_recent: false,
            updated: None,
            throbber_state: ThrobberState::default(),
        }
    }

    fn apply_state(&mut self, state: &AppState) {
        let was_ready = matches!(self.requests.stats, Load::Ready);
        let now_ready = matches!(state.requests.stats, Load::Ready);
        if now_ready && (!was_ready || self.admin.stats != state.admin.stats) {
            self.updated = Some(Updated {
                at: Local::now(),
                instant: Instant::now(),
            });
        }
        self.admin = Arc::clone(&state.admin);
        self.requests = Arc::clone(&state.requests);
    }

    /// What `r` should re-request, given which reads failed.
    fn retry_request(&self) -> Option<FetchRequest> {
        let stats = self.requests.stats.error().is_some();
        let recent = self.requests.recent.error().is_some();
        match (stats, recent) {
            (true, true) => Some(FetchRequest::Dashboard),
            (true, false) => Some(FetchRequest::Stats),
            (false, true) => Some(FetchRequest::RecentItems),
            (false, false) => None,
        }
    }

    /// `updated 14:02:11 (3s ago)`, or nothing before the first success.
    fn updated_label(&self) -> Option<String> {
        let updated = self.updated?;
        let age = Duration::from_secs(updated.instant.elapsed().as_secs());
        Some(format!(
            "updated {} ({} ago)",
            updated.at.format("%H:%M:%S"),
            humantime::format_duration(age)
        ))
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(err) = self.requests.stats.error() {
            lines.push(failure_line("stats", err));
        }
        if let Some(err) = self.requests.recent.error() {
            lines.push(failure_line("recent items", err));
        }
        lines
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let stale = self.requests.stats.is_loading();
        let stats = self.admin.stats;
        let [users, posts, comments] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
        frame.render_widget(StatCard::new("Total Users", stats.users).stale(stale), users);
        frame.render_widget(StatCard::new("Total Posts", stats.posts).stale(stale), posts);
        frame.render_widget(
            StatCard::new("Total Comments", stats.comments).stale(stale),
            comments,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut lines = self.status_lines();
        let loading = self.requests.stats.is_loading() || self.requests.recent.is_loading();

        if loading {
            let [spinner, rest] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
            let throbber = Throbber::default()
                .label("Loading…")
                .style(theme::text())
                .throbber_style(Style::default().fg(theme::ACCENT));
            frame.render_stateful_widget(throbber, spinner, &mut self.throbber_state.clone());
            frame.render_widget(Paragraph::new(lines), rest);
            return;
        }

        if lines.is_empty() && !self.show_recent {
            lines.push(Line::from(vec![
                Span::styled("t", theme::key_hint_key()),
                Span::styled(" show recent activity", theme::key_hint()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_recent(&self, frame: &mut Frame, area: Rect) {
        let users = self
            .admin
            .recent_users
            .iter()
            .map(|u| (u.id.to_string(), u.name.as_str()));
        let posts = self
            .admin
            .recent_posts
            .iter()
            .map(|p| (p.id.to_string(), p.title.as_str()));
        let comments = self
            .admin
            .recent_comments
            .iter()
            .map(|c| (c.id.to_string(), c.content.as_str()));

        let [left, middle, right] =
            Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
        frame.render_widget(recent_panel("Recent Users", users), left);
        frame.render_widget(recent_panel("Recent Posts", posts), middle);
        frame.render_widget(recent_panel("Recent Comments", comments), right);
    }
}

fn recent_panel<'a>(
    title: &'static str,
    rows: impl Iterator<Item = (String, &'a str)>,
) -> Paragraph<'a> {
    let mut lines: Vec<Line> = rows
        .map(|(id, text)| {
            Line::from(vec![
                Span::styled(format!("#{id} "), theme::muted()),
                Span::styled(text, theme::text()),
            ])
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::styled("nothing yet", theme::muted()));
    }

    Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {title} "))
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default()),
    )
}

impl Component for DashboardScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers != KeyModifiers::NONE {
            return Ok(None);
        }
        match key.code {
            KeyCode::Char('t') => {
                self.show_recent = !self.show_recent;
                Ok(None)
            }
            KeyCode::Char('r') => Ok(self.retry_request().map(Action::Fetch)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::StateChanged(state) => self.apply_state(state),
            Action::Tick if self.requests.any_loading() => self.throbber_state.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .title(" Dashboard ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        if let Some(label) = self.updated_label() {
            block = block.title_top(Line::styled(format!(" {label} "), theme::muted()).right_aligned());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status_height = u16::try_from(self.status_lines().len())
            .unwrap_or(u16::MAX)
            .saturating_add(1);
        let [cards, status, recent] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(status_height),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.render_cards(frame, cards);
        self.render_status(frame, status);
        if self.show_recent {
            self.render_recent(frame, recent);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("r", "retry"), ("t", "recent")]
    }

    fn id(&self) -> &'static str {
        "dashboard"
    }
}
