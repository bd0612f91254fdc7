use crate::base::{BcjError, BcjResult, LoadingMode, DEFAULT_INCREMENT_COUNT, DEFAULT_STRESS_SCALE};
use serde::{Deserialize, Serialize};

/// Holds the options shared by all runs of a calibration session
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct CalibrationConfig {
    /// Number of increments of each model run
    pub(crate) increment_count: usize,

    /// Loading mode of all datasets
    pub(crate) mode: LoadingMode,

    /// Factor converting the measured stress to the model stress units (e.g., MPa to Pa)
    pub(crate) stress_scale: f64,
}

impl CalibrationConfig {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        CalibrationConfig {
            increment_count: DEFAULT_INCREMENT_COUNT,
            mode: LoadingMode::Tension,
            stress_scale: DEFAULT_STRESS_SCALE,
        }
    }

    /// Sets the number of increments
    pub fn set_increment_count(&mut self, value: usize) -> BcjResult<&mut Self> {
        if value < 1 {
            return Err(BcjError::Domain("increment count must be ≥ 1"));
        }
        self.increment_count = value;
        Ok(self)
    }

    /// Sets the loading mode
    pub fn set_mode(&mut self, mode: LoadingMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Sets the stress scale
    pub fn set_stress_scale(&mut self, value: f64) -> BcjResult<&mut Self> {
        if !(value > 0.0) || !value.is_finite() {
            return Err(BcjError::Domain("stress scale must be > 0.0"));
        }
        self.stress_scale = value;
        Ok(self)
    }

    pub fn increment_count(&self) -> usize {
        self.increment_count
    }

    pub fn mode(&self) -> LoadingMode {
        self.mode
    }

    pub fn stress_scale(&self) -> f64 {
        self.stress_scale
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
