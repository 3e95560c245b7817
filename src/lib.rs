//! Self-play reinforcement learning for tic-tac-toe
//!
//! The crate is organized around three pieces:
//!
//! - [`engine`]: a deterministic board with move/undo and an exhaustive
//!   minimax search that returns every tied-optimal move, plus the move
//!   and state history a learner trains on.
//! - [`tournament`]: a driver that plays strategy-vs-strategy episode
//!   sets, tracks win/draw statistics, and notifies trainers and
//!   observers after every episode.
//! - [`model`] and [`checkpoint`]: a state-indexed value model with
//!   versioned JSON snapshots, rotated on disk as
//!   `<name>.model.json` / `<name>-backup.model.json`.
//!
//! The seams between them are the traits in [`ports`].

pub mod checkpoint;
pub mod cli;
pub mod engine;
pub mod error;
pub mod model;
pub mod ports;
pub mod tournament;
pub mod utils;

pub use error::{Error, Result};
