use super::{CalibrationConfig, ModelCurve, Residuals};
use crate::base::{BcjResult, LoadingState, MaterialParameters};
use crate::data::{CurveTable, Dataset};
use crate::material::integrate;
use rayon::prelude::*;

/// Runs the model for one dataset
///
/// The test condition comes from the dataset and the total strain is the
/// largest measured strain.
pub fn run_dataset(
    params: &MaterialParameters,
    dataset: &Dataset,
    config: &CalibrationConfig,
) -> BcjResult<(ModelCurve, Residuals)> {
    let loading = LoadingState::new(
        dataset.temperature,
        dataset.strain_rate,
        dataset.max_strain(),
        config.mode,
        config.increment_count,
    )?;
    let history = integrate(params, &loading)?;
    let curve = ModelCurve::from_history(&history, config.mode);
    let residuals = Residuals::new(dataset, &curve, config.stress_scale)?;
    Ok((curve, residuals))
}

/// Holds a calibration session: a parameter set evaluated against a batch of datasets
///
/// All datasets are re-evaluated (in parallel) whenever the parameters change.
pub struct Calibration {
    /// Parameters given at construction (restored by reset)
    initial: MaterialParameters,

    /// Current parameters
    params: MaterialParameters,

    /// Experimental data
    datasets: Vec<Dataset>,

    /// Session options
    config: CalibrationConfig,

    /// Model curves (one per dataset)
    curves: Vec<ModelCurve>,

    /// Residuals (one per dataset)
    residuals: Vec<Residuals>,
}

impl Calibration {
    /// Allocates a new session and evaluates the model for every dataset
    pub fn new(params: MaterialParameters, datasets: Vec<Dataset>, config: CalibrationConfig) -> BcjResult<Self> {
        let mut calibration = Calibration {
            initial: params,
            params,
            datasets,
            config,
            curves: Vec::new(),
            residuals: Vec::new(),
        };
        calibration.evaluate()?;
        Ok(calibration)
    }

    /// Re-evaluates all datasets with new parameters
    ///
    /// On error, the previous parameters and curves are kept.
    pub fn update(&mut self, params: MaterialParameters) -> BcjResult<()> {
        let previous = self.params;
        self.params = params;
        if let Err(err) = self.evaluate() {
            self.params = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Changes one constant (1-based index) and re-evaluates all datasets
    pub fn set_constant(&mut self, i: usize, value: f64) -> BcjResult<()> {
        let params = self.params.with_constant(i, value)?;
        self.update(params)
    }

    /// Restores the initial parameters
    pub fn reset(&mut self) -> BcjResult<()> {
        self.update(self.initial)
    }

    /// Returns the current parameters
    pub fn params(&self) -> &MaterialParameters {
        &self.params
    }

    /// Returns the initial parameters
    pub fn initial_params(&self) -> &MaterialParameters {
        &self.initial
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    pub fn curves(&self) -> &[ModelCurve] {
        &self.curves
    }

    pub fn residuals(&self) -> &[Residuals] {
        &self.residuals
    }

    /// Returns the root-mean-square residual over all points of all datasets
    pub fn total_rms(&self) -> f64 {
        let count: usize = self.residuals.iter().map(|r| r.error.len()).sum();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self.residuals.iter().map(|r| r.sum_of_squares()).sum();
        f64::sqrt(sum / (count as f64))
    }

    /// Collects the strain and von Mises stress curves for export
    pub fn curve_table(&self) -> CurveTable {
        let mut table = CurveTable::new();
        for (dataset, curve) in self.datasets.iter().zip(&self.curves) {
            table.add(&dataset.name, &curve.strain, &curve.von_mises);
        }
        table
    }

    /// Runs the model for all datasets
    fn evaluate(&mut self) -> BcjResult<()> {
        let (params, config) = (&self.params, &self.config);
        let results: Vec<_> = self
            .datasets
            .par_iter()
            .map(|dataset| run_dataset(params, dataset, config))
            .collect::<BcjResult<_>>()?;
        let (curves, residuals) = results.into_iter().unzip();
        self.curves = curves;
        self.residuals = residuals;
        log::debug!(
            "{} datasets evaluated; total RMS = {:?}",
            self.datasets.len(),
            self.total_rms()
        );
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{run_dataset, Calibration};
    use crate::base::{LoadingMode, LoadingState};
    use crate::calibration::{CalibrationConfig, ModelCurve};
    use crate::data::Dataset;
    use crate::material::{integrate, sample_parameters};
    use russell_lab::approx_eq;

    // synthetic dataset sampled from the model itself (stress in MPa)
    fn synthetic_dataset(temperature: f64, strain_rate: f64, name: &str) -> Dataset {
        sampled_dataset(temperature, strain_rate, name, LoadingMode::Tension)
    }

    fn sampled_dataset(temperature: f64, strain_rate: f64, name: &str, mode: LoadingMode) -> Dataset {
        let params = sample_parameters();
        let loading = LoadingState::new(temperature, strain_rate, 0.2, mode, 200).unwrap();
        let history = integrate(&params, &loading).unwrap();
        let curve = ModelCurve::from_history(&history, mode);
        let indices = [0, 20, 50, 100, 150, 200];
        Dataset {
            name: name.to_string(),
            strain_rate,
            temperature,
            strain: indices.iter().map(|&i| curve.equivalent_strain[i]).collect(),
            stress: indices.iter().map(|&i| curve.von_mises[i] / 1e6).collect(),
            file: String::new(),
        }
    }

    #[test]
    fn run_dataset_works() {
        let params = sample_parameters();
        let dataset = synthetic_dataset(295.0, 2e-4, "T295");
        let config = CalibrationConfig::new();
        let (curve, residuals) = run_dataset(&params, &dataset, &config).unwrap();
        assert_eq!(curve.len(), 201);
        approx_eq(curve.strain[200], 0.2, 1e-13);
        assert!(residuals.rms() < 1.0); // Pa
    }

    #[test]
    fn run_dataset_measures_torsion_at_the_equivalent_strain() {
        let params = sample_parameters();
        let dataset = sampled_dataset(295.0, 2e-4, "T295-shear", LoadingMode::Torsion);
        approx_eq(dataset.max_strain(), 0.2, 1e-14);
        let mut config = CalibrationConfig::new();
        config.set_mode(LoadingMode::Torsion);
        let (curve, residuals) = run_dataset(&params, &dataset, &config).unwrap();
        approx_eq(curve.strain[200], 0.1 * f64::sqrt(3.0), 1e-14);
        approx_eq(curve.equivalent_strain[200], 0.2, 1e-14);
        assert!(residuals.rms() < 1.0); // Pa

        // the same stresses placed at the shear strain do not match
        let mut shifted = dataset.clone();
        shifted.strain = dataset.strain.iter().map(|e| e * 0.5 * f64::sqrt(3.0)).collect();
        let (_, residuals) = run_dataset(&params, &shifted, &config).unwrap();
        assert!(residuals.rms() > 1e6);
    }

    #[test]
    fn run_dataset_captures_errors() {
        let params = sample_parameters();
        let mut dataset = synthetic_dataset(295.0, 2e-4, "T295");
        dataset.temperature = -1.0;
        let config = CalibrationConfig::new();
        assert_eq!(
            run_dataset(&params, &dataset, &config).err().unwrap().to_string(),
            "domain error: temperature must be > 0.0"
        );

        let mut dataset = synthetic_dataset(295.0, 2e-4, "T295");
        dataset.strain[1] = f64::NAN;
        assert_eq!(
            run_dataset(&params, &dataset, &config).err().unwrap().to_string(),
            "domain error: interpolation abscissa must be finite"
        );
        assert!(Calibration::new(params, vec![dataset], config).is_err());
    }

    #[test]
    fn calibration_update_and_reset_work() {
        let params = sample_parameters();
        let datasets = vec![
            synthetic_dataset(295.0, 2e-4, "T295"),
            synthetic_dataset(500.0, 570.0, "T500"),
        ];
        let mut calibration = Calibration::new(params, datasets, CalibrationConfig::new()).unwrap();
        assert_eq!(calibration.curves().len(), 2);
        assert_eq!(calibration.residuals().len(), 2);
        assert!(calibration.total_rms() < 1.0);

        // softer yield stress
        calibration.set_constant(3, 0.5e9).unwrap();
        assert_eq!(calibration.params().c(3), 0.5e9);
        assert_eq!(calibration.initial_params().c(3), 1.0e9);
        let rms_soft = calibration.total_rms();
        assert!(rms_soft > 1e6);

        // invalid update keeps the previous state
        assert!(calibration.set_constant(21, 0.0).is_err());
        let mut bad = *calibration.params();
        bad.constants[0] = f64::INFINITY;
        assert!(calibration.update(bad).is_err());
        assert_eq!(calibration.params().c(3), 0.5e9);
        assert_eq!(calibration.total_rms(), rms_soft);

        calibration.reset().unwrap();
        assert_eq!(calibration.params(), &sample_parameters());
        assert!(calibration.total_rms() < 1.0);
    }

    #[test]
    fn curve_table_works() {
        let datasets = vec![
            synthetic_dataset(295.0, 2e-4, "T295"),
            synthetic_dataset(500.0, 570.0, "T500"),
        ];
        let calibration = Calibration::new(sample_parameters(), datasets, CalibrationConfig::new()).unwrap();
        let table = calibration.curve_table();
        assert_eq!(table.len(), 2);
        let text = table.to_text().unwrap();
        assert!(text.starts_with("strain-T295,VMstress-T295,strain-T500,VMstress-T500\n"));
        assert_eq!(text.lines().count(), 202);
    }

    #[test]
    fn empty_calibration_works() {
        let calibration = Calibration::new(sample_parameters(), Vec::new(), CalibrationConfig::new()).unwrap();
        assert_eq!(calibration.total_rms(), 0.0);
        assert_eq!(calibration.datasets().len(), 0);
        assert_eq!(calibration.config().increment_count(), 200);
    }
}
