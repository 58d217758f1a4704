//! Line rendering to a UI-agnostic span tree.
//!
//! Rendering never touches a UI toolkit: a line becomes a flat list of
//! [`Span`]s with semantic styles, and the host translates those to its
//! native primitives (bold text, dim monospace, hyperlinks opening a new
//! browsing context).

use std::fmt;
use std::sync::Arc;

use chrono::FixedOffset;

use crate::line::LineSpec;
use crate::state::Settings;
use crate::timefmt::time_string;
use crate::url::parse_out_url;

/// Semantic style for one rendered span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanStyle {
    /// Unstyled text.
    Plain,
    /// Author prefix (`user: `), rendered bold.
    Author,
    /// Bracketed time prefix (`[HH:MM] `), rendered reduced-emphasis
    /// fixed-width.
    Timestamp,
    /// Clickable segment; the host should open `href` in a new browsing
    /// context.
    Link { href: String },
}

/// A styled run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: SpanStyle::Plain,
        }
    }

    pub fn author(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: SpanStyle::Author,
        }
    }

    pub fn timestamp(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: SpanStyle::Timestamp,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: SpanStyle::Link { href: href.into() },
        }
    }
}

/// One rendered chat line: a flat list of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLine {
    pub spans: Vec<Span>,
}

impl RenderedLine {
    /// An empty line (what a `Custom` line renders to without a state
    /// renderer).
    pub fn empty() -> Self {
        RenderedLine { spans: Vec::new() }
    }
}

/// Render-override hook: may claim any line before default rendering.
pub type Overrider<S> =
    Arc<dyn Fn(&Settings<S>, &LineSpec<S>) -> Option<RenderedLine> + Send + Sync>;

/// Renderer for opaque `Custom` payloads.
pub type StateRenderer<S> = Arc<dyn Fn(&S, &Settings<S>) -> RenderedLine + Send + Sync>;

/// Caller-supplied rendering hooks.
///
/// A strategy pair stored alongside the widget state and invoked by the
/// renderer at defined extension points only: the overrider first for every
/// line, the state renderer for `Custom` payloads.
pub struct CustomRenderers<S> {
    pub overrider: Option<Overrider<S>>,
    pub state_renderer: Option<StateRenderer<S>>,
}

impl<S> Clone for CustomRenderers<S> {
    fn clone(&self) -> Self {
        CustomRenderers {
            overrider: self.overrider.clone(),
            state_renderer: self.state_renderer.clone(),
        }
    }
}

impl<S> fmt::Debug for CustomRenderers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRenderers")
            .field("overrider", &self.overrider.is_some())
            .field("state_renderer", &self.state_renderer.is_some())
            .finish()
    }
}

/// Renders one line to spans, auto-linking URLs in `Url` lines.
///
/// The override hook is consulted first at every node (decorations recurse
/// through here, so an overrider sees inner lines too); returning `Some`
/// short-circuits default rendering for that node.
pub fn render_line<S>(
    settings: &Settings<S>,
    zone: &FixedOffset,
    spec: &LineSpec<S>,
) -> RenderedLine {
    if let Some(renderers) = &settings.custom_renderers
        && let Some(overrider) = &renderers.overrider
        && let Some(line) = overrider(settings, spec)
    {
        return line;
    }

    match spec {
        LineSpec::Text(text) => RenderedLine {
            spans: vec![Span::plain(text.clone())],
        },
        LineSpec::Url(text) => linkify(text),
        LineSpec::User { user, inner } => {
            let mut line = RenderedLine {
                spans: vec![Span::author(format!("{user}: "))],
            };
            line.spans.extend(render_line(settings, zone, inner).spans);
            line
        }
        LineSpec::Time { time, inner } => {
            let mut line = RenderedLine {
                spans: vec![Span::timestamp(format!("[{}] ", time_string(time, zone)))],
            };
            line.spans.extend(render_line(settings, zone, inner).spans);
            line
        }
        LineSpec::Custom(state) => {
            match settings
                .custom_renderers
                .as_ref()
                .and_then(|renderers| renderers.state_renderer.as_ref())
            {
                Some(render_state) => render_state(state, settings),
                None => RenderedLine::empty(),
            }
        }
    }
}

/// Interleaves plain-text segments with link segments for every URL found.
///
/// Repeatedly splits off the first URL, emitting the prefix as text and the
/// url as a link, until nothing URL-like remains.
fn linkify(text: &str) -> RenderedLine {
    let mut line = RenderedLine::empty();
    let mut rest = text.to_string();

    while let Some((prefix, url, suffix)) = parse_out_url(&rest) {
        if !prefix.is_empty() {
            line.spans.push(Span::plain(prefix));
        }
        let href = link_href(&url);
        line.spans.push(Span::link(url, href));
        rest = suffix;
    }

    if !rest.is_empty() {
        line.spans.push(Span::plain(rest));
    }
    line
}

/// Link target for an extracted url: scheme-prefixed urls are used as-is,
/// bare domains get `http://`.
fn link_href(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
