use crate::base::{BcjError, BcjResult};
use serde::{Deserialize, Serialize};

/// Holds the Johnson-Cook flow stress constants
///
/// ```text
/// σ = (A + B εⁿ) (1 + C ln(ε̇/ε̇₀)) (1 - T*ᵐ)
///
/// T* = (T - Tr) / (Tm - Tr)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JohnsonCook {
    /// Reference temperature Tr
    pub temperature_ref: f64,

    /// Melting temperature Tm
    pub temperature_melt: f64,

    /// Reference strain rate ε̇₀
    pub strain_rate_ref: f64,

    /// Yield stress A
    pub a: f64,

    /// Hardening modulus B
    pub b: f64,

    /// Hardening exponent n
    pub n: f64,

    /// Strain rate sensitivity C
    pub c: f64,

    /// Thermal softening exponent m
    pub m: f64,
}

/// Holds a model curve sampled at uniformly spaced strains
#[derive(Clone, Debug)]
pub struct JohnsonCookCurve {
    pub strain: Vec<f64>,
    pub stress: Vec<f64>,
}

impl JohnsonCook {
    /// Computes the homologous temperature T*
    ///
    /// Temperatures below Tr yield T* = 0.
    pub fn homologous_temperature(&self, temperature: f64) -> BcjResult<f64> {
        let den = self.temperature_melt - self.temperature_ref;
        if den == 0.0 {
            return Err(BcjError::Domain("melting temperature must differ from the reference temperature"));
        }
        Ok(f64::max(0.0, (temperature - self.temperature_ref) / den))
    }

    /// Calculates the flow stress
    pub fn flow_stress(&self, strain: f64, strain_rate: f64, temperature: f64) -> BcjResult<f64> {
        let ratio = strain_rate / self.strain_rate_ref;
        if !(ratio > 0.0) || !ratio.is_finite() {
            return Err(BcjError::Domain("strain rate ratio must be > 0.0"));
        }
        let t_star = self.homologous_temperature(temperature)?;
        let hardening = self.a + self.b * f64::powf(strain, self.n);
        let rate_term = 1.0 + self.c * f64::ln(ratio);
        let thermal_term = 1.0 - f64::powf(t_star, self.m);
        Ok(hardening * rate_term * thermal_term)
    }

    /// Generates the stress-strain curve from zero to `strain_max`
    ///
    /// The number of points is `⌊strain_max / strain_increment⌋` (at least two),
    /// spread uniformly over the interval including both ends.
    pub fn curve(
        &self,
        strain_max: f64,
        strain_increment: f64,
        strain_rate: f64,
        temperature: f64,
    ) -> BcjResult<JohnsonCookCurve> {
        if !(strain_increment > 0.0) {
            return Err(BcjError::Domain("strain increment must be > 0.0"));
        }
        if !(strain_max >= 0.0) || !strain_max.is_finite() {
            return Err(BcjError::Domain("maximum strain must be ≥ 0.0"));
        }
        let count = usize::max(2, (strain_max / strain_increment) as usize);
        let step = strain_max / ((count - 1) as f64);
        let mut strain = Vec::with_capacity(count);
        let mut stress = Vec::with_capacity(count);
        for i in 0..count {
            let eps = if i == count - 1 { strain_max } else { (i as f64) * step };
            strain.push(eps);
            stress.push(self.flow_stress(eps, strain_rate, temperature)?);
        }
        Ok(JohnsonCookCurve { strain, stress })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::JohnsonCook;
    use russell_lab::approx_eq;

    fn sample() -> JohnsonCook {
        JohnsonCook {
            temperature_ref: 293.0,
            temperature_melt: 1793.0,
            strain_rate_ref: 1.0,
            a: 350.0,
            b: 275.0,
            n: 0.36,
            c: 0.022,
            m: 1.0,
        }
    }

    #[test]
    fn flow_stress_captures_errors() {
        let mut jc = sample();
        assert_eq!(
            jc.flow_stress(0.1, 0.0, 293.0).err().unwrap().to_string(),
            "domain error: strain rate ratio must be > 0.0"
        );
        jc.temperature_melt = jc.temperature_ref;
        assert_eq!(
            jc.flow_stress(0.1, 1.0, 293.0).err().unwrap().to_string(),
            "domain error: melting temperature must differ from the reference temperature"
        );
        assert_eq!(
            sample().curve(0.1, 0.0, 1.0, 293.0).err().unwrap().to_string(),
            "domain error: strain increment must be > 0.0"
        );
    }

    #[test]
    fn flow_stress_works() {
        let jc = sample();
        // reference conditions: only the strain hardening term remains
        approx_eq(jc.flow_stress(0.0, 1.0, 293.0).unwrap(), 350.0, 1e-14);
        let expected = 350.0 + 275.0 * f64::powf(0.2, 0.36);
        approx_eq(jc.flow_stress(0.2, 1.0, 293.0).unwrap(), expected, 1e-12);
        // rate and temperature terms
        let rate_term = 1.0 + 0.022 * f64::ln(1000.0);
        let thermal_term = 1.0 - 0.5;
        approx_eq(
            jc.flow_stress(0.2, 1000.0, 1043.0).unwrap(),
            expected * rate_term * thermal_term,
            1e-12,
        );
        // at melting there is no strength left
        approx_eq(jc.flow_stress(0.2, 1.0, 1793.0).unwrap(), 0.0, 1e-12);
        // below the reference temperature no thermal softening applies
        approx_eq(jc.flow_stress(0.2, 1.0, 200.0).unwrap(), expected, 1e-12);
    }

    #[test]
    fn curve_works() {
        let jc = sample();
        let curve = jc.curve(0.1, 0.01, 1.0, 293.0).unwrap();
        assert_eq!(curve.strain.len(), 10);
        assert_eq!(curve.strain[0], 0.0);
        assert_eq!(curve.strain[9], 0.1);
        approx_eq(curve.strain[1], 0.1 / 9.0, 1e-15);
        for i in 1..curve.stress.len() {
            assert!(curve.stress[i] > curve.stress[i - 1]);
        }
        let short = jc.curve(0.0, 0.01, 1.0, 293.0).unwrap();
        assert_eq!(short.strain, &[0.0, 0.0]);
    }
}
