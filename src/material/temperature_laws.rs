use super::Settings;
use crate::base::{BcjError, BcjResult, MaterialParameters};

/// Holds the temperature-dependent coefficients of the evolution laws
///
/// The coefficients are computed once per run and reused at every timestep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureLaws {
    /// Rate-sensitivity drag stress scale V
    pub v: f64,

    /// Quasi-static yield scale Y (after the optional softening factor)
    pub y: f64,

    /// Reference strain rate f
    pub f: f64,

    /// Softening factor applied to Y
    pub softening: f64,

    /// Rate- and temperature-dependent yield stress β = Y + V asinh(ε̇/f)
    pub beta: f64,

    /// Dynamic recovery coefficient of the backstress
    pub rd: f64,

    /// Hardening modulus of the backstress
    pub h: f64,

    /// Static recovery coefficient of the backstress
    pub rs: f64,

    /// Dynamic recovery coefficient of the isotropic hardening
    pub rd_iso: f64,

    /// Hardening modulus of the isotropic hardening
    pub h_iso: f64,

    /// Static recovery coefficient of the isotropic hardening
    pub rs_iso: f64,
}

impl TemperatureLaws {
    /// Computes the coefficients
    ///
    /// # Input
    ///
    /// * `params` -- material constants
    /// * `temperature` -- absolute temperature θ > 0
    /// * `rate` -- effective strain rate of the loading path
    /// * `settings` -- integrator options
    pub fn new(params: &MaterialParameters, temperature: f64, rate: f64, settings: &Settings) -> BcjResult<Self> {
        if !(temperature > 0.0) {
            return Err(BcjError::Domain("temperature must be > 0.0"));
        }
        let c = |i: usize| params.c(i);
        let t = temperature;

        let v = c(1) * f64::exp(-c(2) / t);
        let mut y = c(3) * f64::exp(c(4) / t);
        let f = c(5) * f64::exp(-c(6) / t);

        let softening = if c(19) > 0.0 {
            0.5 * (1.0 + f64::tanh(f64::max(0.0, c(19) * (c(20) - t))))
        } else {
            1.0
        };
        if settings.apply_yield_softening {
            y *= softening;
        }
        let beta = y + v * f64::asinh(rate / f);
        if !settings.apply_yield_softening {
            y *= softening;
        }

        let laws = TemperatureLaws {
            v,
            y,
            f,
            softening,
            beta,
            rd: c(7) * f64::exp(-c(8) / t),
            h: c(9) - c(10) * t,
            rs: c(11) * f64::exp(-c(12) / t),
            rd_iso: c(13) * f64::exp(-c(14) / t),
            h_iso: c(15) - c(16) * t,
            rs_iso: c(17) * f64::exp(-c(18) / t),
        };
        if !laws.all_finite() {
            return Err(BcjError::Domain("temperature-dependent coefficients must be finite"));
        }
        Ok(laws)
    }

    /// Indicates whether all coefficients are finite numbers
    fn all_finite(&self) -> bool {
        [
            self.v,
            self.y,
            self.f,
            self.beta,
            self.rd,
            self.h,
            self.rs,
            self.rd_iso,
            self.h_iso,
            self.rs_iso,
        ]
        .iter()
        .all(|x| x.is_finite())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
