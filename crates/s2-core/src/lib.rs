//! `s2-core` — foundational types for the `rust_s2` spherical statistics
//! workspace.
//!
//! This crate is a dependency of every other `s2-*` crate.  It intentionally
//! has no `s2-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`point`]   | `SpherePoint`, geographic conversion, separation angle    |
//! | [`numeric`] | compensated sums, 3-vector mean/median, `SymMatrix`       |
//! | [`rng`]     | `StatRng` (seedable, sentinel-0 ⇒ time-based)             |
//! | [`error`]   | `S2Error`, `S2Result`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod numeric;
pub mod point;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{S2Error, S2Result};
pub use numeric::{EPSILON, SymMatrix};
pub use point::SpherePoint;
pub use rng::StatRng;
