//! Exit code constants for the CLI application.
//!
//! A finished round exits with [`SUCCESS`] whatever its outcome; the result
//! is only ever reported as text.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Input closed (EOF or Ctrl+D) before the round finished.
pub const INTERRUPTED: i32 = 130;
