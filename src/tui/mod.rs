//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! [`drive`] is a single cooperative `tokio::select!` loop over three sources:
//!
//! - **Terminal events** (keys, mouse wheel, resize) from crossterm's `EventStream`.
//! - **Completions** from the generator task, delivered through a channel as
//!   `Action::ResponseReady`. The task never touches `App` itself.
//! - **Ticks** for the thinking animation. The tick branch is only armed while
//!   a response is pending.
//!
//! Each event becomes one action, goes through `update()`, and is followed by
//! exactly one redraw before the next event is taken. Quitting aborts the
//! in-flight generator task before the loop returns.

mod component;
mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream};
use crossterm::execute;
use futures::{Stream, StreamExt};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;

use crate::Provider;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, RequestId};
use crate::inference::{EchoProvider, GeneratorError, MockProvider, ResponseGenerator};

pub use event::translate;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // The frame draws its own cursor marker, so the terminal cursor stays hidden
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build a generator from the resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn ResponseGenerator> {
    match config.provider {
        Provider::Mock => Arc::new(MockProvider::new(config.latency)),
        Provider::Echo => Arc::new(EchoProvider::new(config.latency)),
    }
}

pub async fn run(config: ResolvedConfig) -> io::Result<()> {
    let provider = build_provider(&config);
    info!("Using {} generator", provider.name());

    let mut terminal = ratatui::init();
    let result = run_session(&mut terminal, &config, provider).await;
    ratatui::restore();
    result
}

async fn run_session(
    terminal: &mut DefaultTerminal,
    config: &ResolvedConfig,
    provider: Arc<dyn ResponseGenerator>,
) -> io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let size = terminal.size()?;
    let mut app = App::new(&config.greeting).with_size(size.width, size.height);

    drive(
        &mut app,
        provider,
        EventStream::new(),
        LoopTimings::from(config),
        |app| terminal.draw(|f| ui::draw_ui(f, app)).map(|_| ()),
    )
    .await
}

/// Timer settings for [`drive`].
#[derive(Debug, Clone, Copy)]
pub struct LoopTimings {
    /// Thinking animation frame interval
    pub tick_interval: Duration,
    /// Requests still running after this long complete with `GeneratorError::TimedOut`
    pub request_timeout: Duration,
}

impl From<&ResolvedConfig> for LoopTimings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            tick_interval: config.tick_interval,
            request_timeout: config.request_timeout,
        }
    }
}

/// The generator task currently producing a reply.
struct InFlight {
    request: RequestId,
    handle: AbortHandle,
}

impl InFlight {
    fn cancel(self) {
        info!("Cancelling request {:?}", self.request);
        self.handle.abort();
    }
}

/// Run the dispatcher until the user quits or `events` ends.
///
/// `draw` is called once up front and again after every processed event.
pub async fn drive<E, D>(
    app: &mut App,
    provider: Arc<dyn ResponseGenerator>,
    mut events: E,
    timings: LoopTimings,
    mut draw: D,
) -> io::Result<()>
where
    E: Stream<Item = io::Result<Event>> + Unpin,
    D: FnMut(&App) -> io::Result<()>,
{
    let (tx, mut rx) = unbounded_channel::<Action>();
    let mut in_flight: Option<InFlight> = None;
    let mut ticker = tokio::time::interval(timings.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result = loop {
        if let Err(e) = draw(&*app) {
            break Err(e);
        }

        let action = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => match translate(&event) {
                    Some(action) => action,
                    None => continue,
                },
                Some(Err(e)) => {
                    warn!("Terminal event stream failed: {}", e);
                    break Err(e);
                }
                None => {
                    info!("Terminal event stream closed");
                    Action::Quit
                }
            },
            Some(action) = rx.recv() => action,
            _ = ticker.tick(), if app.session.phase.is_awaiting() => Action::Tick,
        };

        match update(app, action) {
            Effect::SpawnRequest { request, prompt } => {
                if let Some(previous) = in_flight.take() {
                    previous.cancel();
                }
                in_flight = Some(spawn_request(
                    provider.clone(),
                    request,
                    prompt,
                    timings.request_timeout,
                    tx.clone(),
                ));
                ticker.reset();
            }
            Effect::Quit => break Ok(()),
            Effect::None => {}
        }

        if !app.session.phase.is_awaiting() {
            in_flight = None;
        }
    };

    if let Some(pending) = in_flight.take() {
        pending.cancel();
    }
    info!("Event loop stopped");
    result
}

fn spawn_request(
    provider: Arc<dyn ResponseGenerator>,
    request: RequestId,
    prompt: String,
    timeout: Duration,
    tx: UnboundedSender<Action>,
) -> InFlight {
    info!("Spawning request {:?} on {} generator", request, provider.name());

    let handle = tokio::spawn(async move {
        let result = match tokio::time::timeout(timeout, provider.generate(&prompt)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Request {:?} timed out after {:?}", request, timeout);
                Err(GeneratorError::TimedOut)
            }
        };
        debug!("Request {:?} finished (ok={})", request, result.is_ok());
        if tx.send(Action::ResponseReady { request, result }).is_err() {
            warn!("Failed to deliver request {:?}: receiver dropped", request);
        }
    });

    InFlight {
        request,
        handle: handle.abort_handle(),
    }
}
