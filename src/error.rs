//! Error types for the session and configuration surfaces
//!
//! The simulation itself never fails: clamps saturate and degenerate inputs
//! fall back to defaults. Errors only describe invalid use from the outside.

use thiserror::Error;

/// Invalid use of the session state machine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `reset()` is only valid after the run has ended.
    #[error("cannot reset a session that is still playing")]
    ResetWhilePlaying,
}

/// Errors raised while loading or validating a [`crate::SimConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config JSON was malformed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Arena dimensions are unusable.
    #[error("invalid arena {width}x{height}: {reason}")]
    InvalidArena {
        width: f32,
        height: f32,
        reason: &'static str,
    },

    /// Frame pacing value out of range.
    #[error("invalid {field}: {value}")]
    InvalidTiming { field: &'static str, value: f32 },
}
