//! `gridkit-core` provides the input primitives shared by the gridkit component crates.
//!
//! The grid engine and the keyboard-navigation coordinator are headless: they consume
//! [`input::InputEvent`]s and publish state/events, and the host decides how to render.
//! This crate holds the event vocabulary plus key-pattern matching helpers, and an optional
//! `crossterm` feature that converts terminal events into it.
//!
//! No async runtime, no rendering dependency: everything runs synchronously on the host's
//! event loop.

pub mod input;
pub mod keymap;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
