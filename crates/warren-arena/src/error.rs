//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena is at its configured entity capacity.
    CapacityExceeded {
        /// Number of live entities at the time of the request.
        live: u32,
        /// The configured maximum entity count.
        capacity: u32,
    },
    /// A handle whose slot has been freed, reused, or never existed.
    StaleHandle {
        /// The slot index encoded in the handle.
        index: u32,
        /// The generation encoded in the handle.
        handle_generation: u32,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { live, capacity } => {
                write!(
                    f,
                    "arena capacity exceeded: {live} live entities, capacity {capacity}"
                )
            }
            Self::StaleHandle {
                index,
                handle_generation,
            } => {
                write!(
                    f,
                    "stale handle: slot {index}, generation {handle_generation}"
                )
            }
        }
    }
}

impl Error for ArenaError {}
