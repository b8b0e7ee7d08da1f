// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized angular tolerance (in degrees) used by every tolerant
/// angle comparison in the crate. Defaults to `1e-4`, but can be overridden:
///  1) **Build-time**: set env var `HVGRAPH_ANGLE_TOLERANCE` (e.g. `HVGRAPH_ANGLE_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-4
}

/// Returns the current angle tolerance.
/// If not set yet, it tries `HVGRAPH_ANGLE_TOLERANCE` (parsed as the active `Real`) and
/// falls back to `1e-4` degrees.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("HVGRAPH_ANGLE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the angle tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `hvgraph::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Degrees in a full turn; the domain of every angle in the crate.
pub const FULL_CIRCLE: Real = 360.0;

/// Half a turn in degrees.
pub const HALF_CIRCLE: Real = 180.0;
