use crate::base::INITIAL_BACKSTRESS;
use serde::{Deserialize, Serialize};

/// Holds options of the constitutive integrator
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Value of every backstress component at the initial state
    ///
    /// A nonzero seed avoids a zero-magnitude backstress at the first step.
    pub initial_backstress: f64,

    /// Smallest overstress magnitude accepted in a plastic step
    pub overstress_tolerance: f64,

    /// Applies the C19/C20 softening factor to Y before forming β
    ///
    /// **Note:** The reference curves were generated with the factor applied after β is
    /// formed, which leaves the response unchanged. Thus, the default is false.
    pub apply_yield_softening: bool,
}

impl Settings {
    /// Allocates a new instance
    pub fn new() -> Self {
        Settings {
            initial_backstress: INITIAL_BACKSTRESS,
            overstress_tolerance: 1e-300,
            apply_yield_softening: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}
