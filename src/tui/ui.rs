use ratatui::Frame;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;

use crate::core::input::InputState;
use crate::core::state::{App, Session, ViewState};
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, InputLine, MessageList, StatusBar, TitleBar};

/// Shown instead of the layout while the terminal has no usable size.
pub const PLACEHOLDER: &str = "Loading...";

/// Lay out one full frame from a snapshot of the state.
///
/// ```text
/// ┌──────────────────────────────┐
/// │ title                        │ 1
/// │ message pane                 │ height - 4
/// │ > input█                     │ 1
/// │ Messages: N          Ready   │ 1
/// │ help                         │ 1
/// └──────────────────────────────┘
/// ```
pub fn render(session: &Session, input: &InputState, view: &ViewState) -> Text<'static> {
    if view.is_degenerate() {
        return Text::raw(PLACEHOLDER);
    }

    let width = view.width;
    let mut lines = TitleBar.lines(width);
    lines.extend(MessageList::new(session, view).lines(width));
    lines.extend(InputLine::new(input).lines(width));
    lines.extend(StatusBar::new(session.messages().len(), session.phase).lines(width));
    lines.extend(HelpBar.lines(width));
    // Terminals shorter than the chrome keep only the top rows
    lines.truncate(usize::from(view.height));
    Text::from(lines)
}

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let text = render(&app.session, &app.input, &app.view);
    frame.render_widget(Paragraph::new(text), frame.area());
}

/// The frame's characters without styling, one terminal row per line.
pub fn plain_text(text: &Text) -> String {
    text.lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
