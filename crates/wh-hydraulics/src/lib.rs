//! wh-hydraulics: wellbore hydraulics calculation engine.
//!
//! Provides, in oilfield units:
//! - Mean fluid velocity in a pipe or concentric annulus
//! - Newtonian Reynolds number
//! - Fanning friction factor (laminar closed form, Colebrook-White when turbulent)
//!
//! Each calculation exists in two forms. The functions in [`velocity`](mod@velocity),
//! [`reynolds`](mod@reynolds) and [`friction`] return a tagged [`HydraulicsResult`]. The
//! guarded entry points ([`velocity()`], [`reynolds()`], [`friction_factor()`] and
//! [`Calculator`]) route failures through one [`RecoveryPolicy`]: arithmetic
//! faults become NaN or signed-infinity sentinels, argument errors and solver
//! non-convergence are returned as errors.
//!
//! # Example
//!
//! ```no_run
//! use wh_hydraulics::{FlowRegime, friction_factor, reynolds, velocity};
//!
//! let diameter = 3.0; // in
//! let v = velocity(3.0, diameter, 0.0).unwrap(); // bbl/min -> ft/s
//! let nre = reynolds(v, diameter, 9.6, 2.1).unwrap();
//! let regime = FlowRegime::from_reynolds(nre);
//! let ff = friction_factor(diameter, nre, 0.005).unwrap();
//! println!("v = {v:.2} ft/s, NRe = {nre:.0} ({regime}), FF = {ff:.5}");
//! ```

pub mod calculator;
pub mod colebrook;
pub mod common;
pub mod error;
pub mod friction;
pub mod guard;
pub mod regime;
pub mod reynolds;
pub mod sweep;
pub mod velocity;

// Re-exports
pub use calculator::{Calculator, CalculatorConfig, friction_factor, reynolds, velocity};
pub use colebrook::{ColebrookConfig, ColebrookSolution, solve_colebrook};
pub use error::{FailureKind, HydraulicsError, HydraulicsResult};
pub use friction::{FrictionFactor, fanning_friction};
pub use guard::{Recovery, RecoveryPolicy, guarded};
pub use regime::{FlowRegime, LAMINAR_REYNOLDS_LIMIT};
pub use reynolds::reynolds_number;
pub use sweep::{ReynoldsSweep, SweepPoint, SweepSpacing, friction_sweep};
pub use velocity::{fluid_velocity, pipe_velocity};
