use super::ModelCurve;
use crate::base::{interpolate, BcjResult};
use crate::data::Dataset;

/// Holds the differences between measured and model stresses
///
/// ```text
/// rᵢ = σᵢ(data) - σvm(model)(εᵢ)
/// ```
///
/// The model stress is taken at the measured (equivalent) strain. The measured
/// stress is multiplied by the stress scale before the difference is taken.
#[derive(Clone, Debug, PartialEq)]
pub struct Residuals {
    /// Measured strains
    pub strain: Vec<f64>,

    /// Measured (scaled) stress minus model von Mises stress
    pub error: Vec<f64>,
}

impl Residuals {
    /// Calculates the residuals of a model curve against a dataset
    pub fn new(dataset: &Dataset, curve: &ModelCurve, stress_scale: f64) -> BcjResult<Self> {
        let error = dataset
            .strain
            .iter()
            .zip(&dataset.stress)
            .map(|(&e, &s)| Ok(stress_scale * s - interpolate(e, &curve.equivalent_strain, &curve.von_mises)?))
            .collect::<BcjResult<_>>()?;
        Ok(Residuals {
            strain: dataset.strain.clone(),
            error,
        })
    }

    /// Returns the sum of squared residuals
    pub fn sum_of_squares(&self) -> f64 {
        self.error.iter().map(|r| r * r).sum()
    }

    /// Returns the root-mean-square residual (zero if there are no points)
    pub fn rms(&self) -> f64 {
        if self.error.is_empty() {
            return 0.0;
        }
        f64::sqrt(self.sum_of_squares() / (self.error.len() as f64))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
