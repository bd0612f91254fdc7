//! Bcjsim -- material point simulator for the Bammann-Chiesa-Johnson viscoplasticity model
//!
//! The crate integrates the BCJ model along uniaxial tension or pure torsion paths
//! and compares the resulting curves with experimental stress-strain data.
//!
//! # Example
//!
//! ```
//! use bcjsim::prelude::*;
//! use bcjsim::BcjError;
//!
//! fn main() -> Result<(), BcjError> {
//!     let mut params = MaterialParameters::new();
//!     params.set_constant(3, 1.0e9)?; // yield stress magnitude
//!     params.set_constant(5, 1.0)?;
//!     params.set_constant(9, 2.0e9)?; // kinematic hardening modulus
//!     params.bulk_modulus = 160.0e9;
//!     params.shear_modulus = 80.0e9;
//!     let loading = LoadingState::new(295.0, 2e-4, 0.2, LoadingMode::Tension, 200)?;
//!     let history = integrate(&params, &loading)?;
//!     assert_eq!(history.len(), 201);
//!     assert!(history.n_plastic_steps() > 0);
//!     Ok(())
//! }
//! ```

/// Defines the result type of fallible operations
pub use crate::base::BcjResult;

/// Defines the error type of fallible operations
pub use crate::base::BcjError;

pub mod base;
pub mod calibration;
pub mod data;
pub mod material;
pub mod prelude;
