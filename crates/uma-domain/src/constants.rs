//! Domain constants

/// Failed attempts that lock an account when no policy is configured
pub const MAX_FAILED_ATTEMPTS: u32 = 3;

/// Shortest signing secret accepted at configuration time (bytes)
pub const MIN_SECRET_LENGTH: usize = 32;
