//! Core of a browser-style whiteboard, usable without a browser.
//!
//! The board owns a raster buffer drawn through Cairo, a gesture state
//! machine fed by pointer events, a bounded undo/redo history of PNG
//! snapshots, and a zoom transform. The `whiteboard` binary replays
//! command scripts against a board and writes the result as PNG.

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod script;
pub mod util;
pub mod view;

pub use config::Config;
pub use input::Whiteboard;
