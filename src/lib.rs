//! Quarter-by-quarter dice scoring game between a player and the CPU.
//!
//! [`game::GameState`] is the whole game: one `advance` action plays the next
//! quarter or resets a finished round, and every display value (score tables,
//! status line, button caption) is derived from it on demand.

pub mod game;
pub mod i18n;
pub mod logging;
pub mod storage;
#[cfg(feature = "gui")]
pub mod ui;
