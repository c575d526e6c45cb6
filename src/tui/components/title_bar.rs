//! # TitleBar Component
//!
//! Single title line at the top of the frame.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::PRIMARY;
use crate::tui::component::Component;

pub const TITLE: &str = "Mock Chat TUI";

/// Left margin before the title text.
const MARGIN: &str = "  ";

pub struct TitleBar;

impl Component for TitleBar {
    fn lines(&self, _width: u16) -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::raw(MARGIN),
            Span::styled(TITLE, Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)),
        ])]
    }
}
