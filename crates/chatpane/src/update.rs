//! Settings operations.
//!
//! All state changes happen here. Every operation is pure: it takes
//! `&self`, returns a fresh [`Settings`] (plus an [`Effect`] where a
//! viewport action is needed), and never performs I/O. The host executes
//! the returned effects and feeds observations back through
//! [`Settings::scroll_reported`].

use crate::effects::Effect;
use crate::line::LineSpec;
use crate::state::Settings;

/// Fixed step for font-size grow/shrink.
pub const FONT_SIZE_STEP: i32 = 4;

impl<S: Clone> Settings<S> {
    /// Appends a line and asks the host for the region's current scroll
    /// offset.
    ///
    /// Feed the host's answer back through [`Self::scroll_reported`]; that
    /// is where the auto-scroll decision is made.
    pub fn add_line(&self, spec: LineSpec<S>) -> (Self, Effect) {
        let mut next = self.clone();
        next.lines.push(spec);
        let effect = Effect::QueryScroll {
            widget_id: next.widget_id.clone(),
        };
        (next, effect)
    }

    /// Appends a plain text line (no URL scanning).
    pub fn add_chat(&self, text: impl Into<String>) -> (Self, Effect) {
        self.add_line(LineSpec::Text(text.into()))
    }

    /// Applies the host's answer to an [`Effect::QueryScroll`].
    ///
    /// If the reported offset is at or past the recorded one the user is
    /// still at the bottom: record it and follow with a scroll-to-bottom.
    /// If it decreased the user scrolled up to read history: record it and
    /// leave the view alone. Never yank the view away from a user who has
    /// scrolled up.
    pub fn scroll_reported(&self, offset: f64) -> (Self, Option<Effect>) {
        let follow = offset >= self.scroll;
        tracing::debug!(
            widget_id = %self.widget_id,
            offset,
            recorded = self.scroll,
            follow,
            "scroll offset reported"
        );

        let mut next = self.clone();
        next.scroll = offset;
        let effect = follow.then(|| Effect::ScrollToBottom {
            widget_id: self.widget_id.clone(),
        });
        (next, effect)
    }

    /// Grows (`direction > 0`) or shrinks (`direction < 0`) the font by
    /// [`FONT_SIZE_STEP`], or resets it to the default (`direction == 0`).
    ///
    /// No floor or ceiling is enforced; hosts may clamp.
    pub fn set_font_size(&self, direction: i32) -> Self {
        let mut next = self.clone();
        next.font_size = match direction {
            d if d > 0 => self.font_size + FONT_SIZE_STEP,
            d if d < 0 => self.font_size - FONT_SIZE_STEP,
            _ => self.default_font_size,
        };
        next
    }

    /// Replaces the uncommitted input buffer.
    pub fn set_input(&self, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.input = text.into();
        next
    }

    /// Commits the input buffer: returns a copy with the buffer cleared
    /// along with the committed text.
    ///
    /// The caller decides what to do with the text — typically
    /// [`Self::add_line`] with a [`LineSpec::with_decorations`] line.
    pub fn take_input(&self) -> (Self, String) {
        let mut next = self.clone();
        let text = std::mem::take(&mut next.input);
        (next, text)
    }

    /// Re-issues a scroll effect after restoring persisted state.
    ///
    /// A freshly created display region reports no scroll position until
    /// one is set, so the restored offset is pushed at it (+1 to force a
    /// change even when the region already happens to sit there).
    pub fn restore_scroll(&self) -> Effect {
        Effect::SetScroll {
            widget_id: self.widget_id.clone(),
            offset: self.scroll + 1.0,
        }
    }
}
