//! Statistics-subsystem error type.

use thiserror::Error;

use s2_core::S2Error;

/// Errors produced by `s2-stats`.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StatsError {
    #[error("sample is empty")]
    EmptySample,

    #[error("extrinsic mean is singular: the sample's vector sum cancels to zero")]
    SingularMean,

    #[error("grid cell ({lat}, {lon}) not in [-90, 89] x [-180, 179]")]
    CellOutOfRange { lat: i32, lon: i32 },

    #[error("bootstrap needs at least 100 resamples, got {0}")]
    TooFewResamples(usize),

    #[error(transparent)]
    Core(#[from] S2Error),
}

pub type StatsResult<T> = Result<T, StatsError>;
