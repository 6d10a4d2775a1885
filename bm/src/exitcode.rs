/// Standard Unix exit codes for the bm CLI application.
///
/// These codes follow the BSD convention where possible and provide
/// meaningful feedback about the type of error that occurred.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Command line usage error - invalid arguments, missing required parameters, etc.
pub const USAGE: i32 = 64;

/// A bookmark with the given name already exists
pub const DUP: i32 = 65;

/// No bookmark with the given name exists
pub const NOT_FOUND: i32 = 66;

/// Update request without any field to change
pub const NOTHING_TO_UPDATE: i32 = 67;

/// The database could not be read or written
pub const STORAGE: i32 = 74;
