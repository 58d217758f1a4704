//! Direct-callback effect executor.
//!
//! [`ChatHost`] owns "the current" settings copy (the core treats settings
//! as an immutable value) and executes every returned effect against a
//! [`Viewport`] immediately. Viewport failures are logged and treated as
//! no-ops: line history mutation is synchronous and already applied before
//! any effect runs, so a failed scroll costs at worst a stale scroll
//! decision.

use chatpane::{Effect, LineSpec, Settings};

use crate::viewport::Viewport;

/// Owns the current [`Settings`] and a [`Viewport`], wiring the two
/// together.
pub struct ChatHost<S, V> {
    settings: Settings<S>,
    viewport: V,
}

impl<S: Clone, V: Viewport> ChatHost<S, V> {
    pub fn new(settings: Settings<S>, viewport: V) -> Self {
        ChatHost { settings, viewport }
    }

    /// The current settings copy.
    pub fn settings(&self) -> &Settings<S> {
        &self.settings
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable viewport access, for hosts that track content size
    /// themselves (see `FrameViewport::content_height`).
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Appends a plain text line and runs the auto-scroll policy.
    pub fn add_chat(&mut self, text: &str) {
        let (next, effect) = self.settings.add_chat(text);
        self.settings = next;
        self.run_effect(effect);
    }

    /// Appends a line and runs the auto-scroll policy.
    pub fn add_line(&mut self, spec: LineSpec<S>) {
        let (next, effect) = self.settings.add_line(spec);
        self.settings = next;
        self.run_effect(effect);
    }

    /// Replaces the uncommitted input buffer.
    pub fn set_input(&mut self, text: &str) {
        self.settings = self.settings.set_input(text);
    }

    /// Commits the input buffer; returns the text unless it was empty.
    pub fn take_input(&mut self) -> Option<String> {
        let (next, text) = self.settings.take_input();
        self.settings = next;
        if text.is_empty() { None } else { Some(text) }
    }

    /// Grows, shrinks, or resets the font size.
    pub fn set_font_size(&mut self, direction: i32) {
        self.settings = self.settings.set_font_size(direction);
    }

    /// Replaces the settings wholesale (state restore) and re-applies the
    /// restored scroll offset to the viewport.
    pub fn restore(&mut self, settings: Settings<S>) {
        let effect = settings.restore_scroll();
        self.settings = settings;
        self.run_effect(effect);
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::QueryScroll { widget_id } => match self.viewport.scroll_offset(&widget_id) {
                Ok(offset) => {
                    let (next, follow_up) = self.settings.scroll_reported(offset);
                    self.settings = next;
                    if let Some(effect) = follow_up {
                        self.run_effect(effect);
                    }
                }
                Err(error) => tracing::warn!(%widget_id, %error, "scroll query failed"),
            },
            Effect::ScrollToBottom { widget_id } => {
                if let Err(error) = self.viewport.scroll_to_bottom(&widget_id) {
                    tracing::warn!(%widget_id, %error, "scroll to bottom failed");
                }
            }
            Effect::SetScroll { widget_id, offset } => {
                if let Err(error) = self.viewport.set_scroll_offset(&widget_id, offset) {
                    tracing::warn!(%widget_id, %error, "scroll restore failed");
                }
            }
        }
    }
}
