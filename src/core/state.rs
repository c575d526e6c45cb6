//! # Application State
//!
//! Core business state for Mockchat. This module contains domain logic only -
//! no TUI-specific types.
//!
//! ```text
//! App
//! ├── session: Session         // message history + phase
//! │   ├── messages: Vec<Message>
//! │   ├── last_id: u64
//! │   └── phase: Phase         // Idle | AwaitingResponse { request, tick }
//! ├── input: InputState        // pending input + cursor
//! ├── view: ViewState          // scroll offset + terminal size
//! ├── next_request: u64        // generation counter for requests
//! └── running: bool            // false once Quit was applied
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use chrono::{DateTime, Local};

use crate::core::input::InputState;

pub const DEFAULT_GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Number of frames in the "thinking" dot animation.
pub const THINKING_FRAMES: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub role: Role,
    pub timestamp: DateTime<Local>,
    /// Set when the content reports a generator failure instead of a reply.
    pub failed: bool,
}

/// Identifies one response request. Completions carrying any other id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse {
        request: RequestId,
        /// Animation frame, 0..THINKING_FRAMES
        tick: u8,
    },
}

impl Phase {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Phase::AwaitingResponse { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Ready",
            Phase::AwaitingResponse { .. } => "AI is thinking...",
        }
    }
}

/// Append-only message history plus the coarse session phase.
#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    last_id: u64,
    pub phase: Phase,
}

impl Session {
    /// A new session seeded with one assistant greeting (id 1).
    pub fn new(greeting: &str) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            last_id: 0,
            phase: Phase::Idle,
        };
        session.push(Role::Assistant, greeting.to_string(), false);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Append a message with the next id and return that id.
    pub(crate) fn push(&mut self, role: Role, content: String, failed: bool) -> u64 {
        self.last_id += 1;
        self.messages.push(Message {
            id: self.last_id,
            content,
            role,
            timestamp: Local::now(),
            failed,
        });
        self.last_id
    }
}

/// Scroll position and terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub scroll_offset: usize,
    pub width: u16,
    pub height: u16,
    /// When true, the viewport tracks the bottom of the transcript
    pub follow: bool,
}

/// Lines taken by the title, input, status and help rows.
pub const CHROME_LINES: u16 = 4;

impl ViewState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            scroll_offset: 0,
            width,
            height,
            follow: true,
        }
    }

    /// Height of the message pane.
    pub fn pane_height(&self) -> usize {
        self.height.saturating_sub(CHROME_LINES) as usize
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

pub struct App {
    pub session: Session,
    pub input: InputState,
    pub view: ViewState,
    next_request: u64,
    pub running: bool,
}

impl App {
    /// Dimensions start at zero until the first resize arrives.
    pub fn new(greeting: &str) -> Self {
        Self {
            session: Session::new(greeting),
            input: InputState::new(),
            view: ViewState::new(0, 0),
            next_request: 0,
            running: true,
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.view.width = width;
        self.view.height = height;
        self
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }
}
