use super::{BcjError, BcjResult, I11, I12};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the loading modes of the material point
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingMode {
    /// Uniaxial tension along the 11 direction
    Tension,

    /// Pure torsion (shear on the 12 component)
    Torsion,
}

impl LoadingMode {
    /// Returns the tensor component used for one-dimensional curves
    pub fn component(&self) -> usize {
        match self {
            LoadingMode::Tension => I11,
            LoadingMode::Torsion => I12,
        }
    }

    /// Converts the legacy state code (1 = tension, 2 = torsion)
    pub fn from_code(code: i32) -> BcjResult<Self> {
        match code {
            1 => Ok(LoadingMode::Tension),
            2 => Ok(LoadingMode::Torsion),
            _ => Err(BcjError::UnsupportedMode(code.to_string())),
        }
    }
}

impl FromStr for LoadingMode {
    type Err = BcjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tension" | "1" => Ok(LoadingMode::Tension),
            "torsion" | "2" => Ok(LoadingMode::Torsion),
            _ => Err(BcjError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for LoadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingMode::Tension => write!(f, "tension"),
            LoadingMode::Torsion => write!(f, "torsion"),
        }
    }
}

/// Holds the test condition and the discretization of one integration run
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct LoadingState {
    /// Absolute temperature θ
    pub temperature: f64,

    /// Effective (equivalent) strain rate magnitude
    pub strain_rate: f64,

    /// Final equivalent strain
    pub total_strain: f64,

    /// Loading mode
    pub mode: LoadingMode,

    /// Number of timesteps
    pub increment_count: usize,
}

impl LoadingState {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `temperature` -- absolute temperature; must be > 0
    /// * `strain_rate` -- effective strain rate; must be > 0
    /// * `total_strain` -- final equivalent strain; must be ≥ 0
    /// * `mode` -- tension or torsion
    /// * `increment_count` -- number of timesteps; must be ≥ 1
    pub fn new(
        temperature: f64,
        strain_rate: f64,
        total_strain: f64,
        mode: LoadingMode,
        increment_count: usize,
    ) -> BcjResult<Self> {
        let state = LoadingState {
            temperature,
            strain_rate,
            total_strain,
            mode,
            increment_count,
        };
        state.validate()?;
        Ok(state)
    }

    /// Checks the preconditions of the integrator
    pub fn validate(&self) -> BcjResult<()> {
        if !(self.temperature > 0.0) || !self.temperature.is_finite() {
            return Err(BcjError::Domain("temperature must be > 0.0"));
        }
        if !(self.strain_rate > 0.0) || !self.strain_rate.is_finite() {
            return Err(BcjError::Domain("strain rate must be > 0.0"));
        }
        if !(self.total_strain >= 0.0) || !self.total_strain.is_finite() {
            return Err(BcjError::Domain("total strain must be ≥ 0.0"));
        }
        if self.increment_count < 1 {
            return Err(BcjError::Domain("increment count must be ≥ 1"));
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
