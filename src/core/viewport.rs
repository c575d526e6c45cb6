//! # Viewport
//!
//! Flattens the session into transcript lines and computes which of them fit
//! in the message pane.
//!
//! ```text
//! AI: Hello! I'm your AI        ┐
//! assistant.                    │ message block (wrapped)
//!                               ┘ separator
//! You: hello
//!
//! AI is thinking..              ← only while awaiting a response
//! ```

use crate::core::state::{Message, Phase, Role, Session};
use crate::core::wrap::wrap;

/// Columns reserved for the pane's left/right padding.
pub const PANE_HORIZONTAL_OVERHEAD: u16 = 6;

/// What a transcript line belongs to, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    User,
    Assistant,
    Failed,
    Thinking,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            text: String::new(),
        }
    }
}

pub fn role_prefix(role: Role) -> &'static str {
    match role {
        Role::User => "You: ",
        Role::Assistant => "AI: ",
    }
}

fn message_kind(message: &Message) -> LineKind {
    match (message.role, message.failed) {
        (Role::User, _) => LineKind::User,
        (Role::Assistant, true) => LineKind::Failed,
        (Role::Assistant, false) => LineKind::Assistant,
    }
}

/// Flatten every message (plus the thinking indicator) into lines wrapped for
/// a terminal `width` columns wide.
pub fn transcript(session: &Session, width: u16) -> Vec<TranscriptLine> {
    let wrap_width = width.saturating_sub(PANE_HORIZONTAL_OVERHEAD) as usize;
    let mut lines = Vec::new();

    for message in session.messages() {
        let kind = message_kind(message);
        let content = format!("{}{}", role_prefix(message.role), message.content);
        lines.extend(
            wrap(&content, wrap_width)
                .into_iter()
                .map(|text| TranscriptLine { kind, text }),
        );
        lines.push(TranscriptLine::blank());
    }

    if let Phase::AwaitingResponse { tick, .. } = session.phase {
        lines.push(TranscriptLine {
            kind: LineKind::Thinking,
            text: format!("AI is thinking{}", ".".repeat(tick as usize)),
        });
    }

    lines
}

/// Largest valid scroll offset for `total` lines in a pane `height` lines tall.
pub fn max_scroll(total: usize, height: usize) -> usize {
    total.saturating_sub(height)
}

/// Index range of the lines visible at `offset`.
pub fn visible_range(total: usize, height: usize, offset: usize) -> std::ops::Range<usize> {
    let start = offset.min(max_scroll(total, height));
    let end = (start + height).min(total);
    start..end
}

/// The visible slice, padded with blank lines to exactly `height` entries.
pub fn visible_lines(lines: &[TranscriptLine], height: usize, offset: usize) -> Vec<TranscriptLine> {
    let mut visible = lines[visible_range(lines.len(), height, offset)].to_vec();
    visible.resize_with(height, TranscriptLine::blank);
    visible
}
