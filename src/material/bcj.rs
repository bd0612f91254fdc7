use super::{LoadingPath, Settings, StateHistory, TemperatureLaws};
use crate::base::{voigt_add, voigt_ddot_self, voigt_norm, BcjError, BcjResult, LoadingState, MaterialParameters, I11, SQRT_2_BY_3, TWO_BY_3};

/// Integrates the Bammann-Chiesa-Johnson model along a proportional loading path
///
/// Uses the default [Settings]. See [integrate_with_settings()].
pub fn integrate(params: &MaterialParameters, loading: &LoadingState) -> BcjResult<StateHistory> {
    integrate_with_settings(params, loading, &Settings::new())
}

/// Integrates the Bammann-Chiesa-Johnson model along a proportional loading path
///
/// Each timestep performs a radial return:
///
/// ```text
/// ‖α‖    = √(⅔ α:α)
/// α_tr   = α (1 - Δt (rd ε̇ + rs) ‖α‖)
/// κ_tr   = κ (1 - Δt (Rd ε̇ + Rs) κ)
/// s_tr   = s + 2G Δε
/// ξ      = s_tr - ⅔ α_tr
/// f      = ‖ξ‖ - √⅔ (κ_tr + β)
///
/// if f > 0:
///     Γ = f / (2G + ⅔ (h + H))
///     n = ξ / ‖ξ‖
///     κ = κ_tr + √⅔ H Γ
///     s = s_tr - 2G Γ n
///     α = α_tr + h Γ n
/// ```
///
/// # Input
///
/// * `params` -- material constants
/// * `loading` -- test condition and number of increments
/// * `settings` -- integrator options
///
/// # Output
///
/// Returns the history with `increment_count + 1` entries
pub fn integrate_with_settings(
    params: &MaterialParameters,
    loading: &LoadingState,
    settings: &Settings,
) -> BcjResult<StateHistory> {
    loading.validate()?;
    let path = LoadingPath::new(loading);
    let laws = TemperatureLaws::new(params, loading.temperature, path.rate, settings)?;
    let shear_mod = params.effective_shear_modulus();
    let (de, dt, rate) = (&path.delta_strain, path.dt, path.rate);

    let mut history = StateHistory::new(*loading, laws.beta);
    history.backstress[0] = [settings.initial_backstress; 6];

    let kin_recovery = dt * (laws.rd * rate + laws.rs);
    let iso_recovery = dt * (laws.rd_iso * rate + laws.rs_iso);
    let plastic_modulus = shear_mod + TWO_BY_3 * (laws.h + laws.h_iso);

    let mut s_trial = [0.0; 6];
    let mut xi = [0.0; 6];

    for i in 1..history.len() {
        // trial backstress (recovery)
        let alpha_prev = history.backstress[i - 1];
        let alpha_mag = f64::sqrt(TWO_BY_3 * voigt_ddot_self(&alpha_prev));
        let alpha_trial = voigt_add(&alpha_prev, -kin_recovery * alpha_mag, &alpha_prev);

        // trial isotropic hardening (recovery)
        let kappa_prev = history.isotropic_hardening[i - 1];
        let kappa_trial = kappa_prev - iso_recovery * kappa_prev * kappa_prev;

        // trial stress and overstress
        let s_prev = history.deviatoric_stress[i - 1];
        for k in 0..6 {
            s_trial[k] = s_prev[k] + shear_mod * de[k];
            xi[k] = s_trial[k] - TWO_BY_3 * alpha_trial[k];
        }
        let xi_mag = voigt_norm(&xi);

        // yield criterion
        let crit = xi_mag - SQRT_2_BY_3 * (kappa_trial + laws.beta);
        let eps_prev = history.total_strain[i - 1];
        let eps_p_prev = history.plastic_strain[i - 1];
        if crit <= 0.0 {
            history.isotropic_hardening[i] = kappa_trial;
            history.backstress[i] = alpha_trial;
            history.deviatoric_stress[i] = s_trial;
            history.plastic_strain[i] = eps_p_prev;
            for k in 0..6 {
                history.total_strain[i][k] = eps_prev[k] + de[k];
            }
        } else {
            if !(xi_mag > settings.overstress_tolerance) {
                return Err(BcjError::Domain("overstress direction is undefined at plastic yield"));
            }
            let gamma = crit / plastic_modulus;
            history.isotropic_hardening[i] = kappa_trial + laws.h_iso * SQRT_2_BY_3 * gamma;
            for k in 0..6 {
                let n = xi[k] / xi_mag;
                let s_new = s_trial[k] - shear_mod * gamma * n;
                history.deviatoric_stress[i][k] = s_new;
                history.backstress[i][k] = alpha_trial[k] + laws.h * gamma * n;
                history.total_strain[i][k] = eps_prev[k] + de[k];
                history.plastic_strain[i][k] = eps_p_prev[k] + de[k] - shear_mod * (s_new - s_prev[k]);
            }
            history.elastic[i] = false;
        }
        history.hardening_total[i] = laws.beta + history.backstress[i][I11] + history.isotropic_hardening[i];
    }

    log::debug!(
        "{} run at θ = {:?}: {} of {} steps plastic, β = {:?}",
        loading.mode,
        loading.temperature,
        history.n_plastic_steps(),
        loading.increment_count,
        laws.beta
    );
    Ok(history)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
