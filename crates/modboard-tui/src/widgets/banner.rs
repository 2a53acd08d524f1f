//! One-line failure banner for a read that did not succeed.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use modboard_core::FetchError;

use crate::theme;

/// `✗ stats: timeout (Request timed out after 30s)  r retry`
///
/// Retryable failures are drawn in amber, the rest in red.
pub fn failure_line(resource: &str, err: &FetchError) -> Line<'static> {
    let color = if err.is_retryable() { theme::AMBER } else { theme::RED };
    Line::from(vec![
        Span::styled(format!("✗ {resource}: {}", err.kind()), Style::default().fg(color)),
        Span::styled(format!(" ({err})"), theme::muted()),
        Span::raw("  "),
        Span::styled("r", theme::key_hint_key()),
        Span::styled(" retry", theme::key_hint()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn names_resource_kind_and_retry_key() {
        let line = failure_line("stats", &FetchError::Timeout { timeout_ms: 30_000 });
        let text = text(&line);
        assert!(text.starts_with("✗ stats: timeout"));
        assert!(text.ends_with("r retry"));
    }

    #[test]
    fn non_retryable_is_red() {
        let err = FetchError::Status {
            status: 404,
            message: "Not Found".into(),
        };
        let line = failure_line("recent items", &err);
        assert_eq!(line.spans[0].style.fg, Some(theme::RED));
        assert!(text(&line).contains("server status"));
    }
}
