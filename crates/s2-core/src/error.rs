//! Core error type.
//!
//! Sub-crates may define their own error enums and convert `S2Error` into
//! them via `#[from]` variants, or wrap it as one variant of their own enum.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `s2-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum S2Error {
    #[error("latitude {0} not in [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} not in [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Shorthand result type for all `s2-*` crates.
pub type S2Result<T> = Result<T, S2Error>;
