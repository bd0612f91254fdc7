use crate::base::{LoadingMode, SQRT_3};
use crate::material::StateHistory;

/// Holds the one-dimensional curves extracted from a model run
///
/// The strain, stress, and backstress are the components along the loading
/// direction (11 for tension and 12 for torsion). The equivalent strain is the
/// abscissa of the measured data:
///
/// ```text
/// tension: εeq = ε11        torsion: εeq = ε12 2/√3
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ModelCurve {
    pub strain: Vec<f64>,
    pub equivalent_strain: Vec<f64>,
    pub stress: Vec<f64>,
    pub von_mises: Vec<f64>,
    pub backstress: Vec<f64>,
    pub kappa: Vec<f64>,
    pub hardening_total: Vec<f64>,
}

impl ModelCurve {
    /// Extracts the curves from the history
    pub fn from_history(history: &StateHistory, mode: LoadingMode) -> Self {
        let k = mode.component();
        let to_equivalent = match mode {
            LoadingMode::Tension => 1.0,
            LoadingMode::Torsion => 2.0 / SQRT_3,
        };
        ModelCurve {
            strain: history.total_strain.iter().map(|e| e[k]).collect(),
            equivalent_strain: history.total_strain.iter().map(|e| e[k] * to_equivalent).collect(),
            stress: history.deviatoric_stress.iter().map(|s| s[k]).collect(),
            von_mises: history.von_mises().as_data().clone(),
            backstress: history.backstress.iter().map(|a| a[k]).collect(),
            kappa: history.isotropic_hardening.as_data().clone(),
            hardening_total: history.hardening_total.as_data().clone(),
        }
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.strain.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
