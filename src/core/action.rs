//! # Actions
//!
//! Everything that can happen in Mockchat becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Generator replies? That's `Action::ResponseReady { request, result }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` describing the I/O the
//! event loop must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Phases
//!
//! ```text
//!            Submit (non-blank)
//!   Idle  ─────────────────────────▶  AwaitingResponse { request, tick }
//!    ▲                                     │   ▲
//!    │  ResponseReady (matching request)   │   │ Tick: tick = (tick + 1) % 4
//!    └─────────────────────────────────────┘───┘
//! ```
//!
//! `Quit` is accepted in any phase and is terminal: it forgets the awaited
//! request, so a completion racing past cancellation finds nothing to match.

use log::{debug, info};

use crate::core::state::{App, Phase, RequestId, Role, THINKING_FRAMES};
use crate::core::viewport::{max_scroll, transcript};
use crate::inference::GeneratorError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Submit,
    InsertChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
    ScrollUp,
    ScrollDown,
    Resize { width: u16, height: u16 },
    Tick,
    ResponseReady {
        request: RequestId,
        result: Result<String, GeneratorError>,
    },
    Quit,
}

/// I/O requested by `update()`, performed by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start generating a reply to `prompt`, tagged with `request`.
    SpawnRequest { request: RequestId, prompt: String },
    /// Cancel outstanding work and leave the loop.
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if !app.running {
        debug!("Ignoring {:?} after quit", action);
        return Effect::None;
    }

    let effect = match action {
        Action::Quit => {
            if let Phase::AwaitingResponse { request, .. } = app.session.phase {
                info!("Quit while awaiting request {:?}", request);
            }
            app.session.phase = Phase::Idle;
            app.running = false;
            Effect::Quit
        }
        Action::Submit => submit(app),
        Action::Tick => {
            if let Phase::AwaitingResponse { tick, .. } = &mut app.session.phase {
                *tick = (*tick + 1) % THINKING_FRAMES;
            }
            Effect::None
        }
        Action::ResponseReady { request, result } => {
            complete(app, request, result);
            Effect::None
        }
        Action::InsertChar(c) => {
            if !app.session.phase.is_awaiting() {
                app.input.insert(c);
            }
            Effect::None
        }
        Action::Backspace => {
            if !app.session.phase.is_awaiting() {
                app.input.delete_before();
            }
            Effect::None
        }
        Action::CursorLeft => {
            app.input.move_left();
            Effect::None
        }
        Action::CursorRight => {
            app.input.move_right();
            Effect::None
        }
        Action::ScrollUp => {
            let max = current_max_scroll(app);
            app.view.scroll_offset = app.view.scroll_offset.saturating_sub(1);
            app.view.follow = app.view.scroll_offset >= max;
            Effect::None
        }
        Action::ScrollDown => {
            let max = current_max_scroll(app);
            app.view.scroll_offset = (app.view.scroll_offset + 1).min(max);
            app.view.follow = app.view.scroll_offset >= max;
            Effect::None
        }
        Action::Resize { width, height } => {
            debug!("Resize to {}x{}", width, height);
            app.view.width = width;
            app.view.height = height;
            Effect::None
        }
    };

    sync_scroll(app);
    effect
}

fn submit(app: &mut App) -> Effect {
    if app.session.phase.is_awaiting() {
        debug!("Submit ignored: a response is already pending");
        return Effect::None;
    }
    if app.input.is_blank() {
        return Effect::None;
    }

    let prompt = app.input.take();
    let id = app.session.push(Role::User, prompt.clone(), false);
    let request = app.next_request_id();
    app.session.phase = Phase::AwaitingResponse { request, tick: 0 };
    info!("Submitted message {} as request {:?}", id, request);

    Effect::SpawnRequest { request, prompt }
}

fn complete(app: &mut App, request: RequestId, result: Result<String, GeneratorError>) {
    match app.session.phase {
        Phase::AwaitingResponse { request: awaited, .. } if awaited == request => {}
        _ => {
            debug!("Discarding stale response for request {:?}", request);
            return;
        }
    }

    let id = match result {
        Ok(text) => app.session.push(Role::Assistant, text, false),
        Err(e) => app.session.push(Role::Assistant, format!("Error: {e}"), true),
    };
    app.session.phase = Phase::Idle;
    info!("Request {:?} completed as message {}", request, id);
}

fn current_max_scroll(app: &App) -> usize {
    let total = transcript(&app.session, app.view.width).len();
    max_scroll(total, app.view.pane_height())
}

/// Re-establish `scroll_offset <= max_scroll`, pinning to the bottom while following.
fn sync_scroll(app: &mut App) {
    let max = current_max_scroll(app);
    if app.view.follow {
        app.view.scroll_offset = max;
    } else {
        app.view.scroll_offset = app.view.scroll_offset.min(max);
    }
}
