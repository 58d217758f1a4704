//! Host viewport service.

use anyhow::{Result, bail};

/// The host's scrollable-region service.
///
/// Operations are best-effort: a failure (for example an unknown widget id)
/// is logged by the executor and treated as a no-op, never propagated as a
/// hard error. Scrolling is never load-bearing.
pub trait Viewport {
    /// Current scroll offset of the region, in host units.
    fn scroll_offset(&self, widget_id: &str) -> Result<f64>;

    /// Scrolls the region to the bottom of its content.
    fn scroll_to_bottom(&mut self, widget_id: &str) -> Result<()>;

    /// Sets an explicit scroll offset.
    fn set_scroll_offset(&mut self, widget_id: &str, offset: f64) -> Result<()>;
}

/// In-memory viewport used by tests and the demo binary.
///
/// Models one region with a fixed viewport height over growing content.
/// The host advances `content_height` as lines arrive; offsets clamp to the
/// reachable range.
#[derive(Debug, Clone)]
pub struct FrameViewport {
    widget_id: String,
    pub content_height: f64,
    pub viewport_height: f64,
    pub offset: f64,
}

impl FrameViewport {
    pub fn new(widget_id: impl Into<String>, viewport_height: f64) -> Self {
        FrameViewport {
            widget_id: widget_id.into(),
            content_height: 0.0,
            viewport_height,
            offset: 0.0,
        }
    }

    /// Largest reachable offset for the current content.
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn check_id(&self, widget_id: &str) -> Result<()> {
        if widget_id == self.widget_id {
            Ok(())
        } else {
            bail!("unknown widget id: {widget_id}")
        }
    }
}

impl Viewport for FrameViewport {
    fn scroll_offset(&self, widget_id: &str) -> Result<f64> {
        self.check_id(widget_id)?;
        Ok(self.offset)
    }

    fn scroll_to_bottom(&mut self, widget_id: &str) -> Result<()> {
        self.check_id(widget_id)?;
        self.offset = self.max_offset();
        Ok(())
    }

    fn set_scroll_offset(&mut self, widget_id: &str, offset: f64) -> Result<()> {
        self.check_id(widget_id)?;
        self.offset = offset.clamp(0.0, self.max_offset());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_is_an_error() {
        let frame = FrameViewport::new("chat", 10.0);
        assert!(frame.scroll_offset("other").is_err());
    }

    #[test]
    fn bottom_tracks_content_growth() {
        let mut frame = FrameViewport::new("chat", 10.0);
        assert_eq!(frame.max_offset(), 0.0);

        frame.content_height = 35.0;
        frame.scroll_to_bottom("chat").unwrap();
        assert_eq!(frame.offset, 25.0);
    }

    #[test]
    fn set_offset_clamps_to_reachable_range() {
        let mut frame = FrameViewport::new("chat", 10.0);
        frame.content_height = 30.0;
        frame.set_scroll_offset("chat", 99.0).unwrap();
        assert_eq!(frame.offset, 20.0);
        frame.set_scroll_offset("chat", -5.0).unwrap();
        assert_eq!(frame.offset, 0.0);
    }
}
