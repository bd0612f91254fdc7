use super::{run_dataset, CalibrationConfig};
use crate::base::{BcjError, BcjResult, MaterialParameters, N_CONSTANTS};
use crate::data::Dataset;
use rayon::prelude::*;

/// Holds the admissible range of one constant during interactive calibration
///
/// The range spans from zero to five times the initial value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    /// Allocates the range for a constant with initial value `c0`
    pub fn for_constant(c0: f64) -> Self {
        let end = 5.0 * c0;
        SliderRange {
            min: f64::min(0.0, end),
            max: f64::max(0.0, end),
        }
    }

    /// Returns whether the range collapses to a single value (e.g., for a zero constant)
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Returns whether the value lies within the range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the value at a fractional position in [0, 1]
    pub fn value_at(&self, fraction: f64) -> f64 {
        let t = f64::max(0.0, f64::min(1.0, fraction));
        self.min + t * (self.max - self.min)
    }

    /// Returns `count` uniformly spaced values including both ends
    pub fn values(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => (0..count)
                .map(|i| self.value_at((i as f64) / ((count - 1) as f64)))
                .collect(),
        }
    }
}

/// Holds the RMS residual of one trial value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub rms: f64,
}

/// Evaluates trial values of one constant against a dataset
pub struct ParameterSweep {
    /// 1-based index of the constant
    constant: usize,

    /// Trial values
    values: Vec<f64>,
}

impl ParameterSweep {
    /// Allocates a new sweep over the given values of constant `C<constant>`
    pub fn new(constant: usize, values: &[f64]) -> BcjResult<Self> {
        if constant < 1 || constant > N_CONSTANTS {
            return Err(BcjError::Domain("constant index must be in 1..=20"));
        }
        Ok(ParameterSweep {
            constant,
            values: values.to_vec(),
        })
    }

    /// Allocates a sweep over the slider range of the constant
    pub fn over_slider_range(params: &MaterialParameters, constant: usize, count: usize) -> BcjResult<Self> {
        if constant < 1 || constant > N_CONSTANTS {
            return Err(BcjError::Domain("constant index must be in 1..=20"));
        }
        let values = SliderRange::for_constant(params.c(constant)).values(count);
        ParameterSweep::new(constant, &values)
    }

    /// Runs the model for each value (in parallel)
    ///
    /// Values for which the model fails (e.g., non-finite coefficients) are reported as errors.
    pub fn run(
        &self,
        params: &MaterialParameters,
        dataset: &Dataset,
        config: &CalibrationConfig,
    ) -> BcjResult<Vec<SweepPoint>> {
        self.values
            .par_iter()
            .map(|&value| -> BcjResult<SweepPoint> {
                let trial = params.with_constant(self.constant, value)?;
                let (_, residuals) = run_dataset(&trial, dataset, config)?;
                Ok(SweepPoint {
                    value,
                    rms: residuals.rms(),
                })
            })
            .collect()
    }

    /// Returns the point with the smallest RMS residual
    pub fn best(points: &[SweepPoint]) -> Option<SweepPoint> {
        points
            .iter()
            .filter(|p| p.rms.is_finite())
            .copied()
            .min_by(|a, b| a.rms.total_cmp(&b.rms))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
