use ratatui::text::Line;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields, usually borrows of core state).
/// - They hold no state of their own.
/// - They lay themselves out as styled lines for a given terminal width.
///
/// # Purity
///
/// `lines` takes `&self` and performs no I/O, so laying out the same props
/// twice yields the same lines. The frame is assembled from these lines by
/// [`render`](super::ui::render) and only then handed to ratatui.
pub trait Component {
    /// Lay the component out for a terminal `width` columns wide.
    fn lines(&self, width: u16) -> Vec<Line<'static>>;
}
