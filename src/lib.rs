//! jot: a tiny to-do list with a terminal UI.
//!
//! Tasks live only in memory: a header with a live count, an input row to
//! add tasks, and a list whose rows can be toggled done, edited inline, or
//! removed behind a yes/no confirmation.

pub mod cli;
pub mod io;
pub mod keys;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
