use crate::base::{read_json, write_json, BcjResult, LoadingState, MaterialParameters};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;

/// Holds reference values at one increment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub index: usize,
    pub stress_11: f64,
    pub kappa: f64,
    pub backstress_11: f64,
    pub hardening_total: f64,
    pub von_mises: f64,
}

/// Holds reference results for comparisons and tests
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReferenceData {
    pub comment: String,
    pub parameters: MaterialParameters,
    pub loading: LoadingState,
    pub beta: f64,
    pub n_plastic_steps: usize,
    pub points: Vec<ReferencePoint>,
}

impl ReferenceData {
    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> BcjResult<Self>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        read_json(full_path)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> BcjResult<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json(self, full_path, true)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
