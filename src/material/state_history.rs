use crate::base::{read_json, voigt_von_mises, write_json, BcjResult, LoadingState, Voigt};
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;

/// Holds the time series produced by one integration run
///
/// Index 0 holds the initial condition; index `i` is derived from index `i-1` only.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StateHistory {
    /// Loading state that generated this history
    pub loading: LoadingState,

    /// Rate- and temperature-dependent yield stress β used in all steps
    pub beta: f64,

    /// Total strain tensors (observable)
    pub total_strain: Vec<Voigt>,

    /// Deviatoric stress tensors (observable)
    pub deviatoric_stress: Vec<Voigt>,

    /// Accumulated plastic strain tensors
    pub plastic_strain: Vec<Voigt>,

    /// Kinematic hardening (backstress) tensors α
    pub backstress: Vec<Voigt>,

    /// Isotropic hardening κ
    pub isotropic_hardening: Vector,

    /// Diagnostic sum β + α11 + κ
    pub hardening_total: Vector,

    /// Elastic (vs plastic) flag of each step (index 0 is elastic)
    pub elastic: Vec<bool>,
}

impl StateHistory {
    /// Allocates a new instance with `increment_count + 1` zeroed entries
    pub(crate) fn new(loading: LoadingState, beta: f64) -> Self {
        let npoint = loading.increment_count + 1;
        StateHistory {
            loading,
            beta,
            total_strain: vec![[0.0; 6]; npoint],
            deviatoric_stress: vec![[0.0; 6]; npoint],
            plastic_strain: vec![[0.0; 6]; npoint],
            backstress: vec![[0.0; 6]; npoint],
            isotropic_hardening: Vector::new(npoint),
            hardening_total: Vector::new(npoint),
            elastic: vec![true; npoint],
        }
    }

    /// Returns the number of entries (increment count + 1)
    pub fn len(&self) -> usize {
        self.total_strain.len()
    }

    /// Returns the index of the final state
    pub fn final_index(&self) -> usize {
        self.len() - 1
    }

    /// Returns the number of plastic steps
    pub fn n_plastic_steps(&self) -> usize {
        self.elastic.iter().filter(|e| !**e).count()
    }

    /// Extracts the k-th component of the total strain
    pub fn strain_component(&self, k: usize) -> Vector {
        Self::component(&self.total_strain, k)
    }

    /// Extracts the k-th component of the deviatoric stress
    pub fn stress_component(&self, k: usize) -> Vector {
        Self::component(&self.deviatoric_stress, k)
    }

    /// Extracts the k-th component of the backstress
    pub fn backstress_component(&self, k: usize) -> Vector {
        Self::component(&self.backstress, k)
    }

    /// Extracts the k-th component of the plastic strain
    pub fn plastic_strain_component(&self, k: usize) -> Vector {
        Self::component(&self.plastic_strain, k)
    }

    /// Calculates the von Mises equivalent of the deviatoric stress at each entry
    pub fn von_mises(&self) -> Vector {
        let values: Vec<f64> = self.deviatoric_stress.iter().map(voigt_von_mises).collect();
        Vector::from(&values)
    }

    fn component(series: &[Voigt], k: usize) -> Vector {
        assert!(k < 6);
        let values: Vec<f64> = series.iter().map(|t| t[k]).collect();
        Vector::from(&values)
    }

    /// Reads a JSON file containing the history
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

    /// Writes a JSON file with the history
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> BcjResult<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json(self, full_path, false)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
