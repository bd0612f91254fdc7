use super::{BcjError, BcjResult};
use serde::{Deserialize, Serialize};

/// Number of temperature-dependence constants C1…C20
pub const N_CONSTANTS: usize = 20;

/// Holds the material constants of the Bammann-Chiesa-Johnson model
///
/// The constants define the temperature dependence (θ is the absolute temperature):
///
/// ```text
/// V  = C1  exp(-C2/θ)      Y  = C3 exp(C4/θ)      f  = C5  exp(-C6/θ)
/// rd = C7  exp(-C8/θ)      h  = C9 - C10 θ        rs = C11 exp(-C12/θ)
/// Rd = C13 exp(-C14/θ)     H  = C15 - C16 θ       Rs = C17 exp(-C18/θ)
/// Yadj = ½ (1 + tanh(max(0, C19 (C20 - θ))))      (only if C19 > 0)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct MaterialParameters {
    /// Holds C1…C20 (index 0 holds C1)
    pub constants: [f64; N_CONSTANTS],

    /// Bulk modulus
    pub bulk_modulus: f64,

    /// Shear modulus G
    pub shear_modulus: f64,
}

impl MaterialParameters {
    /// Allocates a new instance with all values set to zero
    pub fn new() -> Self {
        MaterialParameters {
            constants: [0.0; N_CONSTANTS],
            bulk_modulus: 0.0,
            shear_modulus: 0.0,
        }
    }

    /// Returns the constant Ci using the 1-based numbering (C1…C20)
    ///
    /// # Panics
    ///
    /// A panic will occur if `i` is not in `1..=20`
    pub fn c(&self, i: usize) -> f64 {
        assert!(i >= 1 && i <= N_CONSTANTS);
        self.constants[i - 1]
    }

    /// Sets the constant Ci using the 1-based numbering (C1…C20)
    pub fn set_constant(&mut self, i: usize, value: f64) -> BcjResult<&mut Self> {
        if i < 1 || i > N_CONSTANTS {
            return Err(BcjError::Domain("constant index must be in 1..=20"));
        }
        self.constants[i - 1] = value;
        Ok(self)
    }

    /// Returns a copy with the constant Ci replaced
    pub fn with_constant(&self, i: usize, value: f64) -> BcjResult<Self> {
        let mut params = *self;
        params.set_constant(i, value)?;
        Ok(params)
    }

    /// Returns the shear modulus used by the constitutive update
    ///
    /// ```text
    /// 2G
    /// ```
    pub fn effective_shear_modulus(&self) -> f64 {
        self.shear_modulus * 2.0
    }
}

/// Returns the key of the constant Ci in the parameter table (e.g., "C07")
pub fn constant_key(i: usize) -> String {
    format!("C{:02}", i)
}

/// Parses a key such as "C07" into the 1-based index of the constant
pub fn parse_constant_key(key: &str) -> Option<usize> {
    let digits = key.strip_prefix('C')?;
    if digits.len() != 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let i: usize = digits.parse().ok()?;
    if i >= 1 && i <= N_CONSTANTS {
        Some(i)
    } else {
        None
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
