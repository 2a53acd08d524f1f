//! The trait every screen implements.

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

/// A screen in the content area.
///
/// Screens receive every [`Action`] through `update` whether or not they are
/// showing, so they stay in sync with the store. Only the visible screen
/// gets input events.
pub trait Component: Send {
    /// Handle a key the app loop did not consume.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// React to an action. May return a follow-up.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect);

    /// Called when the screen becomes (or stops being) the visible one.
    fn set_focused(&mut self, _focused: bool) {}

    /// Key hints shown in the status bar while this screen is visible.
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn id(&self) -> &'static str;
}
