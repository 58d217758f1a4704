//! Widget state.
//!
//! [`Settings`] is the full persistable state of one chat widget. It is an
//! immutable value: every operation in [`crate::update`] takes `&self` and
//! returns a fresh copy (plus an effect description where a viewport action
//! is needed). The host owns "the current" copy and sequences concurrent
//! mutations itself; the core holds no shared mutable state and needs no
//! locking.

use crate::line::LineSpec;
use crate::render::CustomRenderers;

/// Sentinel scroll offset meaning "not yet scrolled".
///
/// Any real offset the host reports compares `>=` against this, so the
/// first append after construction always auto-scrolls.
pub const SCROLL_UNSET: f64 = -1000.0;

/// The widget's full persistable state.
///
/// `input` and `custom_renderers` are transient: the buffer is session
/// state and the hooks are behavior, so neither is part of the persisted
/// JSON document (see [`crate::codec`]).
#[derive(Debug, Clone)]
pub struct Settings<S> {
    /// Current font size.
    pub font_size: i32,
    /// Baseline font size restored by a size reset.
    pub default_font_size: i32,
    /// Chat history in display order. Append-only from the widget's view.
    pub lines: Vec<LineSpec<S>>,
    /// Uncommitted input buffer.
    pub input: String,
    /// Last known/applied scroll offset of the log region.
    pub scroll: f64,
    /// Whether the host should show the font-size controls.
    pub show_size_controls: bool,
    /// Identifies the scrollable region for the host viewport service.
    pub widget_id: String,
    /// Optional render hooks.
    pub custom_renderers: Option<CustomRenderers<S>>,
}

impl<S> Settings<S> {
    /// Creates a widget with empty history and input, unset scroll, and the
    /// given size as both current and default font size.
    pub fn new(widget_id: impl Into<String>, font_size: i32, show_size_controls: bool) -> Self {
        Settings {
            font_size,
            default_font_size: font_size,
            lines: Vec::new(),
            input: String::new(),
            scroll: SCROLL_UNSET,
            show_size_controls,
            widget_id: widget_id.into(),
            custom_renderers: None,
        }
    }

    /// Returns a copy with the given render hooks installed.
    pub fn with_renderers(mut self, renderers: CustomRenderers<S>) -> Self {
        self.custom_renderers = Some(renderers);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_settings_start_empty_and_unscrolled() {
        let settings: Settings<()> = Settings::new("chat", 16, true);
        assert!(settings.lines.is_empty());
        assert!(settings.input.is_empty());
        assert_eq!(settings.scroll, SCROLL_UNSET);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.default_font_size, 16);
        assert_eq!(settings.widget_id, "chat");
        assert!(settings.show_size_controls);
        assert!(settings.custom_renderers.is_none());
    }
}
