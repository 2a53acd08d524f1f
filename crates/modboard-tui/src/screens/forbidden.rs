//! Shown in place of the whole admin shell when the gate says no.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use modboard_core::{Load, RequestsState};

use crate::action::{Action, FetchRequest};
use crate::component::Component;
use crate::theme;
use crate::widgets::banner::failure_line;

#[derive(Default)]
pub struct ForbiddenScreen {
    requests: Arc<RequestsState>,
    throbber_state: ThrobberState,
}

impl ForbiddenScreen {
    fn session(&self) -> &Load {
        &self.requests.session
    }
}

impl Component for ForbiddenScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::NONE
            && key.code == KeyCode::Char('r')
            && self.session().error().is_some()
        {
            return Ok(Some(Action::Fetch(FetchRequest::Session)));
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::StateChanged(state) => self.requests = Arc::clone(&state.requests),
            Action::Tick if self.session().is_loading() => self.throbber_state.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [_, heading, hint, _, detail, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled("Forbidden!", theme::error())).alignment(Alignment::Center),
            heading,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("press ", theme::key_hint()),
                Span::styled("q", theme::key_hint_key()),
                Span::styled(" to go home", theme::key_hint()),
            ]))
            .alignment(Alignment::Center),
            hint,
        );

        match self.session() {
            Load::Loading => {
                let throbber = Throbber::default()
                    .label("checking session…")
                    .style(theme::muted())
                    .throbber_style(Style::default().fg(theme::ACCENT));
                let [_, spinner, _] = Layout::horizontal([
                    Constraint::Fill(1),
                    Constraint::Length(22),
                    Constraint::Fill(1),
                ])
                .areas(detail);
                frame.render_stateful_widget(throbber, spinner, &mut self.throbber_state.clone());
            }
            Load::Failed(err) => {
                frame.render_widget(
                    Paragraph::new(failure_line("session", err)).alignment(Alignment::Center),
                    detail,
                );
            }
            Load::Idle | Load::Ready => {}
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.session().error().is_some() {
            &[("r", "retry")]
        } else {
            &[]
        }
    }

    fn id(&self) -> &'static str {
        "forbidden"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};
    use modboard_core::{AppState, FetchError};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::widgets::testing::buffer_text;

    fn with_session(load: Load) -> ForbiddenScreen {
        let mut screen = ForbiddenScreen::default();
        let state = AppState {
            requests: Arc::new(RequestsState {
                session: load,
                ..RequestsState::default()
            }),
            ..AppState::default()
        };
        screen
            .update(&Action::StateChanged(Arc::new(state)))
            .expect("update");
        screen
    }

    fn draw(screen: &ForbiddenScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).expect("terminal");
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    fn r() -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn shows_heading_and_home_hint() {
        let text = draw(&with_session(Load::Ready));
        assert!(text.contains("Forbidden!"));
        assert!(text.contains("press q to go home"));
    }

    #[test]
    fn session_failure_offers_retry() {
        let mut screen = with_session(Load::Failed(FetchError::Network {
            reason: "dns".into(),
        }));
        assert!(draw(&screen).contains("✗ session: network"));
        assert!(matches!(
            screen.handle_key_event(r()).expect("key"),
            Some(Action::Fetch(FetchRequest::Session))
        ));
    }

    #[test]
    fn retry_ignored_when_nothing_failed() {
        let mut screen = with_session(Load::Ready);
        assert!(screen.handle_key_event(r()).expect("key").is_none());
    }
}
