//! # StatusBar Component
//!
//! `Messages: N` on the left, the session phase on the right, with the gap
//! between them padded so the bar spans the full width.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::PRIMARY;
use crate::core::state::Phase;
use crate::tui::component::Component;

pub struct StatusBar {
    pub message_count: usize,
    pub phase: Phase,
}

impl StatusBar {
    pub fn new(message_count: usize, phase: Phase) -> Self {
        Self { message_count, phase }
    }
}

impl Component for StatusBar {
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let badge = Style::default().fg(Color::Rgb(0xFA, 0xFA, 0xFA)).bg(PRIMARY);
        let left = format!(" Messages: {} ", self.message_count);
        let right = format!(" {} ", self.phase.label());
        let gap = (width as usize).saturating_sub(left.width() + right.width());

        vec![Line::from(vec![
            Span::styled(left, badge),
            Span::raw(" ".repeat(gap)),
            Span::styled(right, badge),
        ])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::RequestId;

    fn plain(bar: &StatusBar, width: u16) -> String {
        bar.lines(width)[0].spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_idle_status_spans_width() {
        let text = plain(&StatusBar::new(3, Phase::Idle), 40);
        assert!(text.starts_with(" Messages: 3 "));
        assert!(text.ends_with(" Ready "));
        assert_eq!(text.width(), 40);
    }

    #[test]
    fn test_awaiting_status() {
        let phase = Phase::AwaitingResponse { request: RequestId(1), tick: 2 };
        let text = plain(&StatusBar::new(2, phase), 60);
        assert!(text.ends_with(" AI is thinking... "));
    }

    #[test]
    fn test_narrow_width_has_no_gap() {
        let text = plain(&StatusBar::new(1, Phase::Idle), 5);
        assert_eq!(text, " Messages: 1  Ready ");
    }
}
