//! # InputLine Component
//!
//! Renders the pending input as `> ` followed by the buffer with a block
//! cursor marker spliced in at the cursor position. When the text is wider
//! than the terminal, the start of the line scrolls away so the marker
//! stays on screen.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::SECONDARY;
use crate::core::input::InputState;
use crate::tui::component::Component;

pub const PROMPT: &str = "> ";
pub const CURSOR_MARKER: char = '█';

pub struct InputLine<'a> {
    pub input: &'a InputState,
}

impl<'a> InputLine<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self { input }
    }

    /// Plain text of the line, fitted to `width` columns.
    pub fn text(&self, width: u16) -> String {
        let width = width as usize;
        let (before, after) = self.input.split_at_cursor();
        let fixed = PROMPT.width() + CURSOR_MARKER.width().unwrap_or(1);

        // Drop leading chars until the prompt, text and marker fit
        let mut before = before;
        let budget = width.saturating_sub(fixed);
        while before.width() > budget {
            let mut chars = before.chars();
            chars.next();
            before = chars.as_str();
        }

        let mut line = String::with_capacity(width);
        line.push_str(PROMPT);
        line.push_str(before);
        line.push(CURSOR_MARKER);

        let mut used = line.width();
        for c in after.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            line.push(c);
            used += w;
        }
        line
    }
}

impl<'a> Component for InputLine<'a> {
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        vec![Line::from(Span::styled(
            self.text(width),
            Style::default().fg(SECONDARY),
        ))]
    }
}
