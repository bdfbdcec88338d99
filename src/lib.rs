//! # Connect Four
//!
//! Two-player Connect Four on a 7×6 board, played from the terminal.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, move resolution, win/draw detection, turn controller
//! - [`ui`] — Front ends: line-based console and a Ratatui terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`telemetry`] — Tracing subscriber setup and log destination

pub mod config;
pub mod error;
pub mod game;
pub mod telemetry;
pub mod ui;
