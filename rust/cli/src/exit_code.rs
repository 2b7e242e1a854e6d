//! Process exit codes returned by [`crate::run`].

/// Command finished normally.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or a failed command.
pub const ERROR: i32 = 2;

/// Input ended while a round was still open.
pub const INTERRUPTED: i32 = 130;
