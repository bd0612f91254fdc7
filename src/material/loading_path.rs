use crate::base::{LoadingMode, LoadingState, Voigt, I11, I12, I22, I33, LATERAL_CONTRACTION, SQRT_3};

/// Holds the constant strain increment of a proportional loading path
///
/// The increment, the timestep, and the effective strain rate are derived once
/// from the loading state and are constant over all timesteps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingPath {
    /// Strain increment Δε (tensor components)
    pub delta_strain: Voigt,

    /// Timestep Δt
    pub dt: f64,

    /// Effective strain rate used by the rate-dependent laws
    pub rate: f64,
}

impl LoadingPath {
    /// Derives the loading path
    ///
    /// **Uniaxial tension**
    ///
    /// ```text
    /// Δε11 = ε / n    Δε22 = Δε33 = -0.499 Δε11    Δt = Δε11 / ε̇    rate = ε̇
    /// ```
    ///
    /// **Pure torsion** (the equivalent strain is converted to the tensor shear strain)
    ///
    /// ```text
    /// Δε12 = (ε √3/2) / n    Δt = Δε12 / ε̇    rate = ε̇ 2/√3
    /// ```
    pub fn new(loading: &LoadingState) -> Self {
        let n = loading.increment_count as f64;
        let mut delta_strain = [0.0; 6];
        match loading.mode {
            LoadingMode::Tension => {
                delta_strain[I11] = loading.total_strain / n;
                delta_strain[I22] = -LATERAL_CONTRACTION * delta_strain[I11];
                delta_strain[I33] = -LATERAL_CONTRACTION * delta_strain[I11];
                LoadingPath {
                    delta_strain,
                    dt: delta_strain[I11] / loading.strain_rate,
                    rate: loading.strain_rate,
                }
            }
            LoadingMode::Torsion => {
                let total_shear = loading.total_strain * 0.5 * SQRT_3;
                delta_strain[I12] = total_shear / n;
                LoadingPath {
                    delta_strain,
                    dt: delta_strain[I12] / loading.strain_rate,
                    rate: loading.strain_rate * 2.0 / SQRT_3,
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
