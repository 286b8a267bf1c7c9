//! # desktui
//!
//! A terminal dashboard for helpdesk ticket snapshots, built with
//! Ratatui. It renders a ticket list behind a six-field filter bar and
//! a dark/light theme that persists across sessions.
//!
//! ## Architecture
//!
//! A component shell around a pure domain core:
//!
//! - [`app`] - event loop wiring terminal events to components
//! - [`components`] - the interactive units (`Home`, `StatusBar`)
//! - [`filter`] - the matching rules over ticket attributes
//! - [`theme`] / [`store`] - the persisted dark/light preference
//! - [`ticket`] / [`stats`] / [`export`] - the snapshot data model
//!
//! The domain modules take records and capabilities (`FormReader`,
//! `PreferenceStore`) instead of touching the terminal, so all of the
//! observable behavior is unit-testable headless.

#![deny(warnings)]

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod export;
pub mod filter;
pub mod mode;
pub mod stats;
pub mod store;
pub mod test_helpers;
pub mod text;
pub mod theme;
pub mod ticket;
pub mod tui;
pub mod utils;
pub mod widgets;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
