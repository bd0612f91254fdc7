use super::{Dataset, LoadSense, RawTest};
use crate::base::{interpolate, BcjError, BcjResult};

/// Default strain step of the processed curves (mm/mm)
pub const DEFAULT_STRAIN_INCREMENT: f64 = 0.0005;

/// Default number of raw points kept before processing
pub const DEFAULT_TARGET_POINT_COUNT: usize = 2000;

/// Strain removed from the end of a corrected curve (extensometer removal and failure)
pub const END_STRAIN_TRIM: f64 = 0.001;

/// Gauge height (mm) the platen extensometer readings refer to
pub const PLATEN_GAUGE_HEIGHT: f64 = 25.4;

/// Offset converting °C to K
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Holds the stress bounds (MPa) of the elastic fit at one test temperature (°C)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElasticRange {
    pub temperature: f64,
    pub stress_lower: f64,
    pub stress_upper: f64,
}

/// Holds the options of the raw data processing
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessingConfig {
    /// Strain step of the engineering and true curves
    pub(crate) strain_increment: f64,

    /// Approximate number of raw points kept
    pub(crate) target_point_count: usize,

    /// Replaces the initial loading by a fitted elastic line
    pub(crate) correct_compliance: bool,

    /// Stress bounds of the elastic fit per test temperature
    pub(crate) elastic_ranges: Vec<ElasticRange>,
}

impl ProcessingConfig {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        let range = |temperature, stress_lower, stress_upper| ElasticRange {
            temperature,
            stress_lower,
            stress_upper,
        };
        ProcessingConfig {
            strain_increment: DEFAULT_STRAIN_INCREMENT,
            target_point_count: DEFAULT_TARGET_POINT_COUNT,
            correct_compliance: true,
            elastic_ranges: vec![
                range(20.0, 30.0, 60.0),
                range(100.0, 30.0, 60.0),
                range(200.0, 20.0, 50.0),
                range(300.0, 30.0, 40.0),
            ],
        }
    }

    /// Sets the strain step
    pub fn set_strain_increment(&mut self, value: f64) -> BcjResult<&mut Self> {
        if !(value > 0.0) || !value.is_finite() {
            return Err(BcjError::Domain("strain increment must be > 0.0"));
        }
        self.strain_increment = value;
        Ok(self)
    }

    /// Sets the approximate number of raw points kept
    pub fn set_target_point_count(&mut self, value: usize) -> BcjResult<&mut Self> {
        if value < 1 {
            return Err(BcjError::Domain("target point count must be ≥ 1"));
        }
        self.target_point_count = value;
        Ok(self)
    }

    /// Enables or disables the compliance correction
    pub fn set_correct_compliance(&mut self, flag: bool) -> &mut Self {
        self.correct_compliance = flag;
        self
    }

    /// Sets (or replaces) the elastic fit bounds at a test temperature
    pub fn set_elastic_range(&mut self, temperature: f64, stress_lower: f64, stress_upper: f64) -> BcjResult<&mut Self> {
        if !temperature.is_finite() || !stress_lower.is_finite() || !stress_upper.is_finite() {
            return Err(BcjError::Domain("elastic range values must be finite"));
        }
        if !(stress_lower < stress_upper) {
            return Err(BcjError::Domain("elastic range requires lower stress < upper stress"));
        }
        let range = ElasticRange {
            temperature,
            stress_lower,
            stress_upper,
        };
        match self.elastic_ranges.iter_mut().find(|r| r.temperature == temperature) {
            Some(existing) => *existing = range,
            None => self.elastic_ranges.push(range),
        }
        Ok(self)
    }

    /// Returns the elastic fit bounds at a test temperature
    pub fn elastic_range(&self, temperature: f64) -> BcjResult<ElasticRange> {
        self.elastic_ranges
            .iter()
            .find(|r| r.temperature == temperature)
            .copied()
            .ok_or(BcjError::Domain("no elastic stress range for the test temperature"))
    }

    pub fn strain_increment(&self) -> f64 {
        self.strain_increment
    }

    pub fn target_point_count(&self) -> usize {
        self.target_point_count
    }

    pub fn correct_compliance(&self) -> bool {
        self.correct_compliance
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps every k-th point so that about `target` points remain
///
/// ```text
/// k = max(1, ⌊n / target⌋)
/// ```
pub fn reduce_points(strain: &[f64], stress: &[f64], target: usize) -> (Vec<f64>, Vec<f64>) {
    let n = usize::min(strain.len(), stress.len());
    let stride = usize::max(1, n / usize::max(1, target));
    let kept = (0..n).step_by(stride);
    (
        kept.clone().map(|i| strain[i]).collect(),
        kept.map(|i| stress[i]).collect(),
    )
}

/// Holds the elastic line fitted to the initial loading
///
/// The strains at the lower and upper stress bounds give the modulus and the
/// offset of the initial (compliant) part of the curve:
///
/// ```text
/// E = (σu - σl) / (εu - εl)
/// shift = (εu + εl)/2 - (σu + σl)/(2 E)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplianceCorrection {
    /// Fitted elastic modulus (MPa)
    pub modulus: f64,

    /// Strain offset removed from the plastic part
    pub shift: f64,

    /// Stress ending the elastic part
    pub stress_upper: f64,
}

impl ComplianceCorrection {
    /// Fits the elastic line between two stress bounds
    pub fn fit(strain: &[f64], stress: &[f64], stress_lower: f64, stress_upper: f64) -> BcjResult<Self> {
        if !(stress_lower < stress_upper) {
            return Err(BcjError::Domain("elastic range requires lower stress < upper stress"));
        }
        let strain_lower = strain_at_stress(strain, stress, stress_lower)?;
        let strain_upper = strain_at_stress(strain, stress, stress_upper)?;
        let modulus = (stress_upper - stress_lower) / (strain_upper - strain_lower);
        if !(modulus > 0.0) || !modulus.is_finite() {
            return Err(BcjError::Domain("fitted elastic modulus must be > 0.0"));
        }
        let shift = 0.5 * (strain_upper + strain_lower) - 0.5 * (stress_upper + stress_lower) / modulus;
        Ok(ComplianceCorrection {
            modulus,
            shift,
            stress_upper,
        })
    }

    /// Returns the corrected strains
    ///
    /// Points before the stress first exceeds the upper bound are placed on the
    /// elastic line (σ/E). All later points are shifted by the fitted offset.
    pub fn apply(&self, strain: &[f64], stress: &[f64]) -> Vec<f64> {
        let mut elastic = true;
        strain
            .iter()
            .zip(stress)
            .map(|(&e, &s)| {
                if s > self.stress_upper {
                    elastic = false;
                }
                if elastic {
                    s / self.modulus
                } else {
                    e - self.shift
                }
            })
            .collect()
    }
}

/// Returns the strain where the stress first reaches `target`
fn strain_at_stress(strain: &[f64], stress: &[f64], target: f64) -> BcjResult<f64> {
    let i = stress
        .iter()
        .position(|&s| s >= target)
        .ok_or(BcjError::Domain("the stress never reaches the elastic range bound"))?;
    if i == 0 {
        return Ok(strain[0]);
    }
    let (s0, s1) = (stress[i - 1], stress[i]);
    let (e0, e1) = (strain[i - 1], strain[i]);
    Ok(e0 + (target - s0) * (e1 - e0) / (s1 - s0))
}

/// Samples a curve at uniform strain steps
///
/// The samples are k Δε for k = 0, 1, 2, … up to the first one ≥ `max_strain`.
/// The first sample is the origin (0, 0).
pub fn resample(strain: &[f64], stress: &[f64], increment: f64, max_strain: f64) -> BcjResult<(Vec<f64>, Vec<f64>)> {
    if !(increment > 0.0) || !increment.is_finite() {
        return Err(BcjError::Domain("strain increment must be > 0.0"));
    }
    if !max_strain.is_finite() {
        return Err(BcjError::Domain("maximum strain must be finite"));
    }
    let mut xs = vec![0.0];
    let mut ys = vec![0.0];
    let mut k = 0;
    while xs[k] < max_strain {
        k += 1;
        let x = (k as f64) * increment;
        xs.push(x);
        ys.push(interpolate(x, strain, stress)?);
    }
    Ok((xs, ys))
}

/// Converts engineering values to true values
///
/// ```text
/// tension:      ε = ln(1 + e)     σ = s (1 + e)
/// compression:  ε = -ln(1 - e)    σ = s (1 - e)
/// ```
///
/// Shear specimens follow the compression rule (platen loading).
pub fn true_values(strain: &[f64], stress: &[f64], sense: LoadSense) -> BcjResult<(Vec<f64>, Vec<f64>)> {
    let mut true_strain = Vec::with_capacity(strain.len());
    let mut true_stress = Vec::with_capacity(strain.len());
    for (&e, &s) in strain.iter().zip(stress) {
        let (eps, sig) = match sense {
            LoadSense::Tension => (f64::ln_1p(e), s * (1.0 + e)),
            LoadSense::Compression | LoadSense::Shear => (-f64::ln_1p(-e), s * (1.0 - e)),
        };
        if !eps.is_finite() {
            return Err(BcjError::Domain("engineering strain is out of range for the true strain"));
        }
        true_strain.push(eps);
        true_stress.push(sig);
    }
    Ok((true_strain, true_stress))
}

/// Holds a raw test after reduction, compliance correction, and resampling
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedTest {
    pub specimen: String,

    /// Test temperature (°C)
    pub temperature: f64,

    pub strain_rate: f64,

    pub sense: LoadSense,

    /// Elastic fit (None if the correction is disabled)
    pub correction: Option<ComplianceCorrection>,

    /// Reduced measured curve (platen readings scaled to the specimen height)
    pub measured_strain: Vec<f64>,
    pub measured_stress: Vec<f64>,

    /// Corrected engineering curve at uniform strain steps
    pub engineering_strain: Vec<f64>,
    pub engineering_stress: Vec<f64>,

    /// True curve at uniform strain steps
    pub true_strain: Vec<f64>,
    pub true_stress: Vec<f64>,

    /// Source file
    pub file: String,
}

impl ProcessedTest {
    /// Processes a raw test
    pub fn new(raw: &RawTest, config: &ProcessingConfig) -> BcjResult<Self> {
        let (mut measured_strain, measured_stress) = reduce_points(&raw.strain, &raw.stress, config.target_point_count);
        if measured_strain.is_empty() {
            return Err(BcjError::Domain("raw test has no points"));
        }
        if raw.sense.uses_platens() {
            if !(raw.height > 0.0) {
                return Err(BcjError::Domain("specimen height must be > 0.0 for platen readings"));
            }
            let factor = PLATEN_GAUGE_HEIGHT / raw.height;
            measured_strain.iter_mut().for_each(|e| *e *= factor);
        }

        let (correction, corrected) = if config.correct_compliance {
            let range = config.elastic_range(raw.temperature)?;
            let fit = ComplianceCorrection::fit(
                &measured_strain,
                &measured_stress,
                range.stress_lower,
                range.stress_upper,
            )?;
            let corrected = fit.apply(&measured_strain, &measured_stress);
            (Some(fit), corrected)
        } else {
            (None, measured_strain.clone())
        };

        let max_engineering = corrected.iter().fold(f64::NEG_INFINITY, |acc, &e| f64::max(acc, e)) - END_STRAIN_TRIM;
        let (engineering_strain, engineering_stress) =
            resample(&corrected, &measured_stress, config.strain_increment, max_engineering)?;

        let (strain_temp, stress_temp) = true_values(&engineering_strain, &engineering_stress, raw.sense)?;
        let max_true = strain_temp.iter().fold(f64::NEG_INFINITY, |acc, &e| f64::max(acc, e));
        let (true_strain, true_stress) = resample(&strain_temp, &stress_temp, config.strain_increment, max_true)?;

        log::info!(
            "raw test <{}> processed: {} measured, {} engineering, and {} true points",
            raw.specimen,
            measured_strain.len(),
            engineering_strain.len(),
            true_strain.len()
        );
        Ok(ProcessedTest {
            specimen: raw.specimen.clone(),
            temperature: raw.temperature,
            strain_rate: raw.strain_rate,
            sense: raw.sense,
            correction,
            measured_strain,
            measured_stress,
            engineering_strain,
            engineering_stress,
            true_strain,
            true_stress,
            file: raw.file.clone(),
        })
    }

    /// Returns the true curve as a calibration dataset
    ///
    /// The temperature is converted from °C to K.
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            name: self.specimen.clone(),
            strain_rate: self.strain_rate,
            temperature: self.temperature + CELSIUS_TO_KELVIN,
            strain: self.true_strain.clone(),
            stress: self.true_stress.clone(),
            file: self.file.clone(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{reduce_points, resample, true_values, ComplianceCorrection, ProcessedTest, ProcessingConfig};
    use crate::data::{LoadSense, RawTest};
    use russell_lab::{approx_eq, array_approx_eq};

    // elastic line E = 50 GPa with a toe offset of 0.002, then linear hardening
    fn synthetic_raw(sense: LoadSense, height: f64) -> RawTest {
        let (modulus, offset) = (50_000.0, 0.002);
        let mut strain = vec![0.0];
        let mut stress = vec![0.0];
        for i in 1..=20 {
            let s = 5.0 * (i as f64);
            strain.push(offset + s / modulus);
            stress.push(s);
        }
        for i in 1..=40 {
            let ep = 0.0025 * (i as f64);
            let s = 100.0 + 1000.0 * ep;
            strain.push(offset + s / modulus + ep);
            stress.push(s);
        }
        RawTest {
            specimen: "RDT01".to_string(),
            temperature: 20.0,
            strain_rate: 0.001,
            direction: "RD".to_string(),
            sense,
            thickness: 2.0,
            width: 6.0,
            height,
            final_strain: 0.1,
            strain,
            stress,
            file: "raw.csv".to_string(),
        }
    }

    #[test]
    fn config_works() {
        let mut config = ProcessingConfig::new();
        assert_eq!(config.strain_increment(), 0.0005);
        assert_eq!(config.target_point_count(), 2000);
        assert_eq!(config.correct_compliance(), true);
        let range = config.elastic_range(200.0).unwrap();
        assert_eq!((range.stress_lower, range.stress_upper), (20.0, 50.0));
        config
            .set_strain_increment(0.001)
            .unwrap()
            .set_target_point_count(10)
            .unwrap()
            .set_correct_compliance(false)
            .set_elastic_range(200.0, 10.0, 40.0)
            .unwrap()
            .set_elastic_range(500.0, 5.0, 25.0)
            .unwrap();
        assert_eq!(config.elastic_range(200.0).unwrap().stress_lower, 10.0);
        assert_eq!(config.elastic_range(500.0).unwrap().stress_upper, 25.0);
        assert_eq!(config.elastic_ranges.len(), 5);
        assert_eq!(
            config.elastic_range(400.0).err().unwrap().to_string(),
            "domain error: no elastic stress range for the test temperature"
        );
        assert!(config.set_strain_increment(0.0).is_err());
        assert!(config.set_target_point_count(0).is_err());
        assert!(config.set_elastic_range(20.0, 60.0, 30.0).is_err());
        assert!(config.set_elastic_range(f64::NAN, 30.0, 60.0).is_err());
    }

    #[test]
    fn reduce_points_works() {
        let strain: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let stress: Vec<f64> = (0..10).map(|i| 10.0 * i as f64).collect();
        let (e, s) = reduce_points(&strain, &stress, 3);
        assert_eq!(e, &[0.0, 3.0, 6.0, 9.0]);
        assert_eq!(s, &[0.0, 30.0, 60.0, 90.0]);
        let (e, _) = reduce_points(&strain, &stress, 2000);
        assert_eq!(e.len(), 10);
        let (e, _) = reduce_points(&[], &[], 5);
        assert_eq!(e.len(), 0);
    }

    #[test]
    fn compliance_correction_works() {
        let raw = synthetic_raw(LoadSense::Tension, 0.0);
        let fit = ComplianceCorrection::fit(&raw.strain, &raw.stress, 30.0, 60.0).unwrap();
        approx_eq(fit.modulus, 50_000.0, 1e-6);
        approx_eq(fit.shift, 0.002, 1e-15);
        let corrected = fit.apply(&raw.strain, &raw.stress);
        // elastic part on the line σ/E; plastic part shifted
        approx_eq(corrected[6], 30.0 / 50_000.0, 1e-15);
        approx_eq(corrected[12], 60.0 / 50_000.0, 1e-15);
        approx_eq(corrected[30], raw.strain[30] - 0.002, 1e-15);
        approx_eq(corrected[30], 110.0 / 50_000.0 + 0.025, 1e-15);
    }

    #[test]
    fn compliance_correction_captures_errors() {
        let raw = synthetic_raw(LoadSense::Tension, 0.0);
        assert!(ComplianceCorrection::fit(&raw.strain, &raw.stress, 60.0, 30.0).is_err());
        assert_eq!(
            ComplianceCorrection::fit(&raw.strain, &raw.stress, 30.0, 500.0)
                .err()
                .unwrap()
                .to_string(),
            "domain error: the stress never reaches the elastic range bound"
        );
    }

    #[test]
    fn resample_works() {
        let (e, s) = resample(&[0.0, 0.01, 0.02], &[0.0, 100.0, 150.0], 0.005, 0.012).unwrap();
        array_approx_eq(&e, &[0.0, 0.005, 0.01, 0.015], 1e-15);
        array_approx_eq(&s, &[0.0, 50.0, 100.0, 125.0], 1e-12);
        let (e, s) = resample(&[0.0, 0.01], &[0.0, 100.0], 0.005, -1.0).unwrap();
        assert_eq!((e.len(), s.len()), (1, 1));
        assert!(resample(&[0.0], &[0.0], 0.0, 1.0).is_err());
        assert!(resample(&[0.0], &[0.0], 0.1, f64::NAN).is_err());
    }

    #[test]
    fn true_values_work() {
        let (e, s) = true_values(&[0.0, 0.1], &[0.0, 100.0], LoadSense::Tension).unwrap();
        array_approx_eq(&e, &[0.0, f64::ln(1.1)], 1e-15);
        array_approx_eq(&s, &[0.0, 110.0], 1e-12);
        let (e, s) = true_values(&[0.1], &[100.0], LoadSense::Compression).unwrap();
        approx_eq(e[0], -f64::ln(0.9), 1e-15);
        approx_eq(s[0], 90.0, 1e-12);
        assert!(true_values(&[1.0], &[100.0], LoadSense::Shear).is_err());
    }

    #[test]
    fn processed_test_works() {
        let raw = synthetic_raw(LoadSense::Tension, 0.0);
        let config = ProcessingConfig::new();
        let processed = ProcessedTest::new(&raw, &config).unwrap();
        let fit = processed.correction.unwrap();
        approx_eq(fit.modulus, 50_000.0, 1e-6);
        assert_eq!(processed.measured_strain.len(), 61);

        // engineering curve: uniform steps up to the trimmed maximum
        let n = processed.engineering_strain.len();
        approx_eq(processed.engineering_strain[1], 0.0005, 1e-15);
        let trimmed = 200.0 / 50_000.0 + 0.1 - 0.001;
        assert!(processed.engineering_strain[n - 1] > trimmed - 1e-12);
        assert!(processed.engineering_strain[n - 2] < trimmed + 1e-12);
        // linear hardening between measured points
        let i = 40; // e = 0.02
        let expected = 100.0 + 1000.0 * (0.02 - 100.0 / 50_000.0) / (1.0 + 1000.0 / 50_000.0);
        approx_eq(processed.engineering_stress[i], expected, 1e-9);

        // true curve
        let m = processed.true_strain.len();
        assert!(processed.true_strain[m - 1] >= f64::ln_1p(processed.engineering_strain[n - 1]));
        assert_eq!(processed.true_stress[0], 0.0);

        let dataset = processed.to_dataset();
        assert_eq!(dataset.name, "RDT01");
        assert_eq!(dataset.temperature, 293.15);
        assert_eq!(dataset.strain_rate, 0.001);
        assert_eq!(dataset.strain, processed.true_strain);
    }

    #[test]
    fn processed_test_scales_platen_readings() {
        let raw = synthetic_raw(LoadSense::Compression, 12.7);
        let mut config = ProcessingConfig::new();
        config.set_correct_compliance(false);
        let processed = ProcessedTest::new(&raw, &config).unwrap();
        assert_eq!(processed.correction, None);
        approx_eq(processed.measured_strain[10], 2.0 * raw.strain[10], 1e-15);

        let raw = synthetic_raw(LoadSense::Shear, 0.0);
        assert_eq!(
            ProcessedTest::new(&raw, &config).err().unwrap().to_string(),
            "domain error: specimen height must be > 0.0 for platen readings"
        );
    }

    #[test]
    fn processed_test_captures_missing_elastic_range() {
        let mut raw = synthetic_raw(LoadSense::Tension, 0.0);
        raw.temperature = 250.0;
        assert_eq!(
            ProcessedTest::new(&raw, &ProcessingConfig::new()).err().unwrap().to_string(),
            "domain error: no elastic stress range for the test temperature"
        );
    }
}
