//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component is a stateless, props-based view. It borrows what it
//! needs from core state and lays itself out as lines:
//! - `TitleBar`: Application title
//! - `MessageList`: Visible window over the wrapped transcript
//! - `InputLine`: Pending input with the cursor marker
//! - `StatusBar`: Message count and phase
//! - `HelpBar`: Static key hints
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into the whole `App`. This makes dependencies explicit and
//! components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! StatusBar::new(session.messages().len(), session.phase).lines(width);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Title line)
//! ├── message_list.rs  (Scrolled message pane)
//! ├── input_line.rs    (Input with cursor marker)
//! ├── status_bar.rs    (Count + phase)
//! └── help_bar.rs      (Key hints)
//! ```

mod help_bar;
mod input_line;
mod message_list;
mod status_bar;
mod title_bar;

pub use help_bar::HelpBar;
pub use input_line::InputLine;
pub use message_list::MessageList;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;

use ratatui::style::Color;

pub(crate) const PRIMARY: Color = Color::Rgb(0x7D, 0x56, 0xF4);
pub(crate) const SECONDARY: Color = Color::Rgb(0xF4, 0xB5, 0x56);
pub(crate) const MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);
pub(crate) const ERROR: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
