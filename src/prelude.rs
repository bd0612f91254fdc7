//! Makes available common structures needed to run a calibration
//!
//! You may write `use bcjsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{init_logging, LoadingMode, LoadingState, MaterialParameters, DEFAULT_OUT_DIR};
pub use crate::calibration::{Calibration, CalibrationConfig, ModelCurve, ParameterSweep, Plotter, SliderRange};
pub use crate::data::{load_datasets, CurveTable, Dataset, PropsTable};
pub use crate::material::{integrate, integrate_with_settings, Settings, StateHistory};
