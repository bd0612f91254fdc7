//! Implements the calibration session: model runs per dataset, residuals, parameter sweeps, and plots

mod calibration;
mod config;
mod model_curve;
mod plotter;
mod residuals;
mod series;
mod sweep;
pub use crate::calibration::calibration::*;
pub use crate::calibration::config::*;
pub use crate::calibration::model_curve::*;
pub use crate::calibration::plotter::*;
pub use crate::calibration::residuals::*;
pub use crate::calibration::series::*;
pub use crate::calibration::sweep::*;
