//! UI utilities for terminal output
//!
//! Progress spinners shown while long-running waits are in flight.

mod spinner;

pub use spinner::{clear_spinner, create_spinner, finish_spinner};
