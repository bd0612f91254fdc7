/// Holds the six independent components of a symmetric second-order tensor
///
/// The ordering is `[11, 22, 33, 12, 23, 13]` and the off-diagonal entries hold
/// tensor (not engineering) components.
pub type Voigt = [f64; 6];

/// Index of the 11 component (uniaxial tension direction)
pub const I11: usize = 0;

/// Index of the 22 component
pub const I22: usize = 1;

/// Index of the 33 component
pub const I33: usize = 2;

/// Index of the 12 component (torsion direction)
pub const I12: usize = 3;

/// Index of the 23 component
pub const I23: usize = 4;

/// Index of the 13 component
pub const I13: usize = 5;

/// Calculates the double contraction `a : a`
///
/// ```text
/// a : a = a11² + a22² + a33² + 2 (a12² + a23² + a13²)
/// ```
pub fn voigt_ddot_self(a: &Voigt) -> f64 {
    a[I11] * a[I11] + a[I22] * a[I22] + a[I33] * a[I33] + (a[I12] * a[I12] + a[I23] * a[I23] + a[I13] * a[I13]) * 2.0
}

/// Calculates the norm `‖a‖ = √(a : a)`
pub fn voigt_norm(a: &Voigt) -> f64 {
    f64::sqrt(voigt_ddot_self(a))
}

/// Calculates the von Mises equivalent value
///
/// ```text
/// σvm = √(½ ((s11-s22)² + (s22-s33)² + (s33-s11)² + 6 (s12² + s23² + s13²)))
/// ```
pub fn voigt_von_mises(s: &Voigt) -> f64 {
    let d1 = s[I11] - s[I22];
    let d2 = s[I22] - s[I33];
    let d3 = s[I33] - s[I11];
    let shear = (s[I12] * s[I12] + s[I23] * s[I23] + s[I13] * s[I13]) * 6.0;
    f64::sqrt((d1 * d1 + d2 * d2 + d3 * d3 + shear) * 0.5)
}

/// Performs `c = a + β b`
pub fn voigt_add(a: &Voigt, beta: f64, b: &Voigt) -> Voigt {
    let mut c = [0.0; 6];
    for k in 0..6 {
        c[k] = a[k] + beta * b[k];
    }
    c
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
