//! Host-side adapter for the chatpane widget core.
//!
//! The core is synchronous and effect-free: its operations return effect
//! descriptions instead of performing them. This crate is the thin layer
//! that executes those descriptions against a real scrollable region:
//!
//! - [`Viewport`] — what the host must provide (read offset, scroll to
//!   bottom, set offset), plus [`FrameViewport`], an in-memory
//!   implementation for tests and demos.
//! - [`ChatHost`] — direct-callback executor owning the current settings
//!   copy.
//! - [`HostRuntime`] — an inbox-driven loop (tokio mpsc) for embedders that
//!   feed events from channels rather than calling in directly.

pub mod host;
pub mod runtime;
pub mod viewport;

pub use host::ChatHost;
pub use runtime::{HostEvent, HostEventSender, HostRuntime};
pub use viewport::{FrameViewport, Viewport};
