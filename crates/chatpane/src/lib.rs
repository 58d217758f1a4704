//! Embeddable chat-display widget core.
//!
//! The crate models one chat widget as a plain value: [`Settings`] holds the
//! line history, input buffer, font size, and scroll bookkeeping. Operations
//! on it are pure — each returns a fresh value plus an [`Effect`] description
//! for the embedding host to execute — so the core stays synchronous and
//! free of I/O, threads, and UI-toolkit dependencies.
//!
//! Rendering turns a [`LineSpec`] into a flat list of UI-agnostic spans with
//! URLs auto-linked; persistence is a compact JSON form with a round-trip
//! guarantee. Hosts integrate through the `chatpane-host` adapter crate or
//! by executing [`Effect`]s against their own viewport.

pub mod codec;
pub mod effects;
pub mod line;
pub mod render;
pub mod state;
pub mod timefmt;
pub mod update;
pub mod url;

pub use effects::Effect;
pub use line::LineSpec;
pub use render::{CustomRenderers, RenderedLine, Span, SpanStyle, render_line};
pub use state::{SCROLL_UNSET, Settings};
pub use update::FONT_SIZE_STEP;
pub use url::parse_out_url;
