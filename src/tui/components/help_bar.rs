use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::MUTED;
use crate::tui::component::Component;

pub const HELP_TEXT: &str = "ESC to quit • Enter to send • ↑↓ to scroll";

/// Static key hints, centred.
pub struct HelpBar;

impl Component for HelpBar {
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let pad = (width as usize).saturating_sub(HELP_TEXT.width()) / 2;
        vec![Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(HELP_TEXT, Style::default().fg(MUTED)),
        ])]
    }
}
