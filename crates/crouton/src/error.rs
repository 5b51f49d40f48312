#![forbid(unsafe_code)]

//! Configuration errors.

use std::fmt;

/// Rejected toast configuration.
///
/// Construction itself cannot fail; the one field with a free-form input
/// surface is the timeout, and its parsing functions reject anything they
/// cannot represent instead of coercing it silently.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The timeout token was neither `false` nor a number of seconds.
    InvalidTimeout(String),
    /// The timeout seconds value was negative or not finite.
    TimeoutOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeout(token) => {
                write!(f, "invalid timeout {token:?}: expected seconds or \"false\"")
            }
            Self::TimeoutOutOfRange(secs) => {
                write!(f, "timeout of {secs} seconds is out of range")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
