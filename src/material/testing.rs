use crate::base::MaterialParameters;

/// Returns a parameter set describing a generic steel at room temperature
///
/// The constants are given in Pa and K (yield stress ≈ 1.18 GPa at 295 K).
#[allow(dead_code)]
pub(crate) fn sample_parameters() -> MaterialParameters {
    MaterialParameters {
        constants: [
            1.0e8,   // C01: V magnitude
            100.0,   // C02: V temperature dependence
            1.0e9,   // C03: Y magnitude
            50.0,    // C04: Y temperature dependence
            1.0,     // C05: f magnitude
            0.0,     // C06: f temperature dependence
            2.0e-8,  // C07: rd magnitude
            10.0,    // C08: rd temperature dependence
            2.0e9,   // C09: h magnitude
            1.0e6,   // C10: h temperature dependence
            1.0e-12, // C11: rs magnitude
            100.0,   // C12: rs temperature dependence
            2.0e-8,  // C13: Rd magnitude
            10.0,    // C14: Rd temperature dependence
            1.0e9,   // C15: H magnitude
            1.0e6,   // C16: H temperature dependence
            1.0e-12, // C17: Rs magnitude
            100.0,   // C18: Rs temperature dependence
            0.0,     // C19: softening rate
            800.0,   // C20: softening temperature
        ],
        bulk_modulus: 160.0e9,
        shear_modulus: 80.0e9,
    }
}
