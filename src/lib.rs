//! Terminal journal for tracking daily mood and stress. One interactive
//! session at a time, everything stays in memory and is gone once the session
//! ends.
//!

pub mod cli;
pub mod session;
pub mod utils;
