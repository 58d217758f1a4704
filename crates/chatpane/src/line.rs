//! Chat line model.
//!
//! A chat line is a small tree: a base payload (`Text`, `Url`, or an opaque
//! `Custom` state) optionally wrapped by decoration variants that attribute
//! the line to a user or stamp it with a time. The tree is strictly owned —
//! no cycles — so the recursion is an ordinary boxed enum variant.

use chrono::{DateTime, TimeZone, Utc};

/// One displayable unit of chat history.
#[derive(Debug, Clone, PartialEq)]
pub enum LineSpec<S> {
    /// Literal text, never scanned for URLs.
    Text(String),
    /// Text scanned for embedded URLs at render time.
    Url(String),
    /// Attributes the inner line to a named user.
    User {
        user: String,
        inner: Box<LineSpec<S>>,
    },
    /// Stamps the inner line with a time.
    Time {
        time: DateTime<Utc>,
        inner: Box<LineSpec<S>>,
    },
    /// Opaque application payload, rendered only via a caller-supplied
    /// renderer (see [`crate::render::CustomRenderers`]).
    Custom(S),
}

impl<S> LineSpec<S> {
    /// Builds a URL-scanned message line, optionally attributed and
    /// timestamped.
    ///
    /// Decorations nest in a fixed order: time wraps user wraps the message,
    /// so a fully decorated line renders as `[HH:MM] user: message`.
    /// Hand-built values may nest in any order; consumers must not rely on
    /// an order they did not build themselves.
    pub fn with_decorations(
        message: impl Into<String>,
        user: Option<&str>,
        time: Option<DateTime<Utc>>,
    ) -> Self {
        let mut line = LineSpec::Url(message.into());
        if let Some(user) = user {
            line = LineSpec::User {
                user: user.to_string(),
                inner: Box::new(line),
            };
        }
        if let Some(time) = time {
            line = LineSpec::Time {
                time: truncate_to_millis(time),
                inner: Box::new(line),
            };
        }
        line
    }
}

/// Drops sub-millisecond precision.
///
/// The wire format carries epoch milliseconds, so values built here survive
/// an encode/decode round trip unchanged.
pub(crate) fn truncate_to_millis(time: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(time.timestamp_millis())
        .single()
        .unwrap_or(time)
}
