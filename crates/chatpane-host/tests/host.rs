//! End-to-end auto-scroll policy against the in-memory viewport.

use anyhow::{Result, bail};
use chatpane::{SCROLL_UNSET, Settings};
use chatpane_host::{ChatHost, FrameViewport, Viewport};

const LINE_HEIGHT: f64 = 1.0;

fn new_host() -> ChatHost<(), FrameViewport> {
    let settings: Settings<()> = Settings::new("chat", 16, true);
    ChatHost::new(settings, FrameViewport::new("chat", 10.0))
}

/// Appends a chat line, advancing the viewport's content like a real host
/// laying out a new row.
fn append(host: &mut ChatHost<(), FrameViewport>, text: &str) {
    host.viewport_mut().content_height += LINE_HEIGHT;
    host.add_chat(text);
}

#[test]
fn appending_at_the_bottom_follows_the_bottom() {
    let mut host = new_host();
    for i in 0..30 {
        append(&mut host, &format!("line {i}"));
    }

    // The viewport sits at the bottom of 30 lines of content.
    assert_eq!(host.viewport().offset, 20.0);
    assert_eq!(host.settings().lines.len(), 30);
    // The recorded offset is the one observed before the final scroll.
    assert!(host.settings().scroll > SCROLL_UNSET);
}

#[test]
fn appending_after_scrolling_up_leaves_the_view_alone() {
    let mut host = new_host();
    for i in 0..30 {
        append(&mut host, &format!("line {i}"));
    }

    // The user scrolls up to read history.
    host.viewport_mut().set_scroll_offset("chat", 5.0).unwrap();

    append(&mut host, "new arrival");
    assert_eq!(host.viewport().offset, 5.0);
    // The line still landed in history.
    assert_eq!(host.settings().lines.len(), 31);
}

#[test]
fn autoscroll_resumes_after_the_user_returns() {
    let mut host = new_host();
    for i in 0..30 {
        append(&mut host, &format!("line {i}"));
    }

    host.viewport_mut().set_scroll_offset("chat", 5.0).unwrap();
    append(&mut host, "while away");
    assert_eq!(host.viewport().offset, 5.0);

    // Back to the bottom; the next append follows again.
    let bottom = host.viewport().max_offset();
    host.viewport_mut().set_scroll_offset("chat", bottom).unwrap();
    append(&mut host, "welcome back");
    assert_eq!(host.viewport().offset, host.viewport().max_offset());
}

#[test]
fn restore_pushes_the_persisted_offset_at_the_viewport() {
    let mut host = new_host();
    for i in 0..30 {
        append(&mut host, &format!("line {i}"));
    }
    let encoded = chatpane::codec::encode_settings(host.settings());

    // A fresh session: new host, freshly laid-out content, offset at zero.
    let restored: Settings<()> = chatpane::codec::decode_settings(&encoded).unwrap();
    let mut fresh = new_host();
    fresh.viewport_mut().content_height = 30.0;
    let persisted_scroll = restored.scroll;
    fresh.restore(restored);

    assert_eq!(fresh.settings().lines.len(), 30);
    // restore_scroll targets the recorded offset + 1, clamped by the frame.
    let expected = (persisted_scroll + 1.0).clamp(0.0, 20.0);
    assert_eq!(fresh.viewport().offset, expected);
}

/// A viewport that always fails, standing in for a host whose region is
/// not mounted yet.
struct BrokenViewport;

impl Viewport for BrokenViewport {
    fn scroll_offset(&self, widget_id: &str) -> Result<f64> {
        bail!("no region named {widget_id}")
    }

    fn scroll_to_bottom(&mut self, widget_id: &str) -> Result<()> {
        bail!("no region named {widget_id}")
    }

    fn set_scroll_offset(&mut self, widget_id: &str, _offset: f64) -> Result<()> {
        bail!("no region named {widget_id}")
    }
}

#[test]
fn viewport_failure_is_a_no_op_for_settings() {
    let settings: Settings<()> = Settings::new("chat", 16, true);
    let mut host = ChatHost::new(settings, BrokenViewport);

    host.add_chat("hello");

    // The line is appended; scroll bookkeeping is untouched because the
    // query never produced an offset to report.
    assert_eq!(host.settings().lines.len(), 1);
    assert_eq!(host.settings().scroll, SCROLL_UNSET);
}
