//! `s2-stats` — central-location estimation and resampling inference on S².
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`project`]   | azimuthal-equidistant tangent-plane projection pair        |
//! | [`extrinsic`] | `ext_mean`, `ext_median` (ambient-space estimators)        |
//! | [`medoid`]    | `medoids`, `Medoids` (O(n²) seed selection)                |
//! | [`intrinsic`] | `int_mean`, `int_median` (Fréchet fixed-point refinement)  |
//! | [`estimate`]  | `EstimatorKind`, `LocationEstimate`                        |
//! | [`bootstrap`] | `bootstrap_cones`, `BootstrapConfig`, `BootstrapCones`     |
//! | [`generate`]  | Fibonacci / grid-cell samplers, discrepancy                |
//! | [`ripley`]    | `k_poisson`, `k_ripley` spatial statistics                 |
//! | [`error`]     | `StatsError`, `StatsResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use s2_stats::{BootstrapConfig, EstimatorKind, bootstrap_cones, generate};
//!
//! let sample = generate::fibonacci(100);
//! let cones = bootstrap_cones(
//!     &sample,
//!     EstimatorKind::ExtrinsicMean,
//!     &BootstrapConfig { resamples: 10_000, seed: 42 },
//! )?;
//! println!("{} ±{:.3}°/{:.3}°", cones.estimate, cones.c95_deg, cones.c99_deg);
//! ```

pub mod bootstrap;
pub mod error;
pub mod estimate;
pub mod extrinsic;
pub mod generate;
pub mod intrinsic;
pub mod medoid;
pub mod project;
pub mod ripley;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bootstrap::{BootstrapCones, BootstrapConfig, DEFAULT_RESAMPLES, bootstrap_cones};
pub use error::{StatsError, StatsResult};
pub use estimate::{EstimatorKind, LocationEstimate};
pub use extrinsic::{ext_mean, ext_median};
pub use intrinsic::{int_mean, int_median};
pub use medoid::{Medoids, medoids};
pub use ripley::{k_poisson, k_ripley};
