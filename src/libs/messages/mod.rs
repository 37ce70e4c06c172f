//! Centralized user-facing messaging.
//!
//! All text shown to the user is defined by the [`Message`] enum and emitted
//! through the `msg_*` macros, which route output either to the console or
//! through `tracing` when debug mode is active.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
