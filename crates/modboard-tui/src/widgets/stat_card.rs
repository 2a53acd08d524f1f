//! A bordered card with a label and one large figure.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme;

pub struct StatCard<'a> {
    label: &'a str,
    value: u64,
    stale: bool,
}

impl<'a> StatCard<'a> {
    pub fn new(label: &'a str, value: u64) -> Self {
        Self {
            label,
            value,
            stale: false,
        }
    }

    /// Dim the figure while a newer value is on its way.
    pub fn stale(mut self, stale: bool) -> Self {
        self.stale = stale;
        self
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let style = if self.stale { theme::muted() } else { theme::figure() };
        let middle = Rect {
            y: inner.y + (inner.height - 1) / 2,
            height: 1,
            ..inner
        };
        Paragraph::new(Line::styled(group_thousands(self.value), style))
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::widgets::testing::{buffer_text, row_text};

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(300), "300");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn renders_label_and_centered_value() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        StatCard::new("Total Posts", 200).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Total Posts"));
        assert!(row_text(&buf, 2).contains("200"));
    }

    #[test]
    fn zero_is_still_shown() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        StatCard::new("Total Users", 0).stale(true).render(area, &mut buf);

        assert!(buffer_text(&buf).contains('0'));
    }
}
