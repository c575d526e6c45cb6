//! # MessageList Component
//!
//! Scrollable view of conversation history.
//!
//! `MessageList` is a transient component (created each frame) that borrows
//! the session and the view state. The wrapped transcript and the visible
//! window over it come from `core::viewport`; this component only indents
//! and styles the lines. It always yields exactly `view.pane_height()` lines
//! so the frame size stays constant however much history there is.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{ERROR, MUTED, SECONDARY};
use crate::core::state::{Session, ViewState};
use crate::core::viewport::{LineKind, transcript, visible_lines};
use crate::tui::component::Component;

/// Indent applied to every transcript line.
const PANE_PADDING: &str = "  ";

pub struct MessageList<'a> {
    pub session: &'a Session,
    pub view: &'a ViewState,
}

impl<'a> MessageList<'a> {
    pub fn new(session: &'a Session, view: &'a ViewState) -> Self {
        Self { session, view }
    }
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::User => Style::default().fg(SECONDARY),
        LineKind::Assistant => Style::default(),
        LineKind::Failed => Style::default().fg(ERROR),
        LineKind::Thinking => Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        LineKind::Blank => Style::default(),
    }
}

impl<'a> Component for MessageList<'a> {
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let all = transcript(self.session, width);
        visible_lines(&all, self.view.pane_height(), self.view.scroll_offset)
            .into_iter()
            .map(|line| match line.kind {
                LineKind::Blank => Line::default(),
                kind => Line::from(vec![
                    Span::raw(PANE_PADDING),
                    Span::styled(line.text, line_style(kind)),
                ]),
            })
            .collect()
    }
}
