//! # Core Application Logic
//!
//! This module contains Mockchat's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct holding all application state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`input`]: Input buffer editing
//! - [`wrap`]: Greedy word wrapping
//! - [`viewport`]: Transcript flattening and the visible window over it
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod input;
pub mod state;
pub mod viewport;
pub mod wrap;
