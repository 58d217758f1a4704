//! Inbox-driven host runtime.
//!
//! The embedding application sends [`HostEvent`]s into an unbounded channel;
//! the runtime drains them in order against a [`ChatHost`] until every
//! sender is dropped. This keeps the core synchronous while the embedder
//! decides where events come from (UI callbacks, timers, network) and
//! sequences concurrent mutations by construction: one inbox, one consumer.

use chatpane::{LineSpec, Settings};
use chrono::Utc;
use tokio::sync::mpsc;

use crate::host::ChatHost;
use crate::viewport::Viewport;

/// Events the embedding application can send to the runtime.
#[derive(Debug)]
pub enum HostEvent<S> {
    /// Append a plain text line.
    Chat(String),
    /// Append an arbitrary line.
    Line(LineSpec<S>),
    /// Replace the input buffer.
    Input(String),
    /// Commit the input buffer as an attributed, URL-scanned, timestamped
    /// line. Empty buffers are ignored.
    Submit { user: Option<String> },
    /// Grow (`>0`), shrink (`<0`), or reset (`0`) the font size.
    FontSize(i32),
    /// Replace the settings wholesale (state restore).
    Restore(Settings<S>),
}

/// Sender half of a runtime's inbox.
pub type HostEventSender<S> = mpsc::UnboundedSender<HostEvent<S>>;

/// Inbox loop around a [`ChatHost`].
pub struct HostRuntime<S, V> {
    host: ChatHost<S, V>,
    inbox: mpsc::UnboundedReceiver<HostEvent<S>>,
}

impl<S, V> HostRuntime<S, V>
where
    S: Clone,
    V: Viewport,
{
    /// Creates a runtime and the sender half of its inbox.
    pub fn new(settings: Settings<S>, viewport: V) -> (Self, HostEventSender<S>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runtime = HostRuntime {
            host: ChatHost::new(settings, viewport),
            inbox: rx,
        };
        (runtime, tx)
    }

    /// Drains the inbox until every sender is dropped, then returns the
    /// host with its final state.
    pub async fn run(mut self) -> ChatHost<S, V> {
        while let Some(event) = self.inbox.recv().await {
            self.apply(event);
        }
        self.host
    }

    fn apply(&mut self, event: HostEvent<S>) {
        match event {
            HostEvent::Chat(text) => self.host.add_chat(&text),
            HostEvent::Line(spec) => self.host.add_line(spec),
            HostEvent::Input(text) => self.host.set_input(&text),
            HostEvent::Submit { user } => {
                if let Some(text) = self.host.take_input() {
                    let line = LineSpec::with_decorations(text, user.as_deref(), Some(Utc::now()));
                    self.host.add_line(line);
                }
            }
            HostEvent::FontSize(direction) => self.host.set_font_size(direction),
            HostEvent::Restore(settings) => self.host.restore(settings),
        }
    }
}
