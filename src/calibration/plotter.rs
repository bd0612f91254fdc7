use super::{Calibration, ModelCurve, Series};
use crate::base::{BcjError, BcjResult};
use crate::data::Dataset;
use plotpy::{Curve, Legend, Plot};
use std::ffi::OsStr;

/// Colors assigned to datasets in order (repeated with dotted lines after the seventh)
const COLORS: [&str; 7] = ["b", "c", "g", "y", "r", "m", "k"];

/// Plots measured data against model curves
pub struct Plotter {
    /// Do not draw the grid lines
    pub no_grid: bool,

    /// Do not draw the legend
    pub no_legend: bool,

    /// Holds all curves
    curves: Vec<Curve>,
}

impl Plotter {
    /// Allocates a new instance
    pub fn new() -> Self {
        Plotter {
            no_grid: false,
            no_legend: false,
            curves: Vec::new(),
        }
    }

    /// Returns the color and line style of the i-th dataset
    fn style(index: usize) -> (&'static str, &'static str) {
        let color = COLORS[index % COLORS.len()];
        let line_style = if (index / COLORS.len()) % 2 == 0 { "-" } else { ":" };
        (color, line_style)
    }

    /// Draws the measured points of a dataset
    ///
    /// # Input
    ///
    /// * `index` -- the position of the dataset (selects the color)
    /// * `dataset` -- the measured points
    /// * `stress_scale` -- the factor converting the measured stress to the plotted units
    pub fn draw_dataset(&mut self, index: usize, dataset: &Dataset, stress_scale: f64) {
        let (color, _) = Plotter::style(index);
        let y: Vec<_> = dataset.stress.iter().map(|s| stress_scale * s).collect();
        let mut curve = Curve::new();
        curve
            .set_line_style("None")
            .set_marker_style("o")
            .set_marker_color(color)
            .set_marker_line_color(color)
            .set_marker_void(true);
        curve.draw(&dataset.strain, &y);
        self.curves.push(curve);
    }

    /// Draws one model series
    ///
    /// # Input
    ///
    /// * `index` -- the position of the dataset (selects the color)
    /// * `name` -- the dataset name used in the legend
    /// * `model` -- the model output
    /// * `series` -- the quantity to draw
    pub fn draw_model(&mut self, index: usize, name: &str, model: &ModelCurve, series: Series) {
        let (color, dataset_style) = Plotter::style(index);
        let line_style = if series == Series::VonMises { dataset_style } else { series.line_style() };
        let mut curve = Curve::new();
        curve
            .set_line_color(color)
            .set_line_style(line_style)
            .set_label(&format!("{} - {}", series.label(), name));
        curve.draw(&model.strain, &series.calc(model).to_vec());
        self.curves.push(curve);
    }

    /// Draws all datasets and the von Mises model curves of a calibration session
    ///
    /// The backstress and isotropic hardening curves are added if `with_isvs` is true.
    pub fn draw_calibration(&mut self, calibration: &Calibration, with_isvs: bool) {
        let scale = calibration.config().stress_scale();
        for (i, (dataset, model)) in calibration.datasets().iter().zip(calibration.curves()).enumerate() {
            self.draw_dataset(i, dataset, scale);
            self.draw_model(i, &dataset.name, model, Series::VonMises);
            if with_isvs {
                self.draw_model(i, &dataset.name, model, Series::Backstress);
                self.draw_model(i, &dataset.name, model, Series::Kappa);
            }
        }
    }

    /// Saves the figure
    ///
    /// **Note:** Call this function after the `draw` functions.
    ///
    /// # Input
    ///
    /// * `filepath` -- may be a String, &str, or Path
    /// * `extra` -- is a function `|plot, before| {}` to perform some {pre,post}-drawing on the plot area.
    ///   The two arguments of this function are:
    ///     * `plot: &mut Plot` -- the `plot` reference that can be used perform some extra drawings.
    ///     * `before: bool` -- **true** indicates that the function is being called before all other
    ///       drawing functions. Otherwise, **false** indicates that the function is being called after
    ///       all other drawing functions, and just before the `plot.save` call.
    ///   For example, use `|_, _| {}` to do nothing.
    pub fn save<P, F>(&self, filepath: &P, mut extra: F) -> BcjResult<()>
    where
        P: AsRef<OsStr> + ?Sized,
        F: FnMut(&mut Plot, bool),
    {
        if self.curves.is_empty() {
            return Err(BcjError::Plot("there are no curves to plot"));
        }
        let mut plot = Plot::new();
        extra(&mut plot, true);
        for curve in &self.curves {
            plot.add(curve);
        }
        if !self.no_legend {
            let mut legend = Legend::new();
            legend.set_outside(true).set_num_col(2);
            legend.draw();
            plot.add(&legend);
        }
        extra(&mut plot, false);
        let (x, y) = ("True Strain (mm/mm)", "True Stress (Pa)");
        if self.no_grid {
            plot.set_label_x(x).set_label_y(y);
        } else {
            plot.grid_and_labels(x, y);
        }
        plot.save(filepath).map_err(BcjError::Plot)?;
        log::info!("figure <{}> saved", std::path::Path::new(filepath).display());
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Plotter;
    use crate::base::{LoadingMode, LoadingState};
    use crate::calibration::{Calibration, CalibrationConfig, ModelCurve, Series};
    use crate::data::Dataset;
    use crate::material::{integrate, sample_parameters};

    const SAVE_FIGURE: bool = false;

    #[test]
    fn style_works() {
        assert_eq!(Plotter::style(0), ("b", "-"));
        assert_eq!(Plotter::style(6), ("k", "-"));
        assert_eq!(Plotter::style(7), ("b", ":"));
        assert_eq!(Plotter::style(14), ("b", "-"));
    }

    #[test]
    fn save_captures_errors() {
        let plotter = Plotter::new();
        assert_eq!(
            plotter.save("/tmp/bcjsim/test/plot_error.svg", |_, _| {}).err().unwrap().to_string(),
            "plot error: there are no curves to plot"
        );
    }

    #[test]
    fn draw_model_works() {
        let params = sample_parameters();
        let loading = LoadingState::new(295.0, 2e-4, 0.2, LoadingMode::Tension, 100).unwrap();
        let history = integrate(&params, &loading).unwrap();
        let model = ModelCurve::from_history(&history, LoadingMode::Tension);
        let mut plotter = Plotter::new();
        plotter.draw_model(0, "T295", &model, Series::VonMises);
        plotter.draw_model(0, "T295", &model, Series::HardeningTotal);
        assert_eq!(plotter.curves.len(), 2);
        if SAVE_FIGURE {
            plotter
                .save("/tmp/bcjsim/test/plotter_model.svg", |plot, before| {
                    if !before {
                        plot.set_figure_size_points(600.0, 400.0);
                    }
                })
                .unwrap();
        }
    }

    #[test]
    fn draw_calibration_works() {
        let dataset = Dataset {
            name: "T295".to_string(),
            strain_rate: 2e-4,
            temperature: 295.0,
            strain: vec![0.0, 0.05, 0.1, 0.2],
            stress: vec![0.0, 1300.0, 1400.0, 1500.0],
            file: String::new(),
        };
        let calibration = Calibration::new(sample_parameters(), vec![dataset], CalibrationConfig::new()).unwrap();
        let mut plotter = Plotter::new();
        plotter.draw_calibration(&calibration, true);
        assert_eq!(plotter.curves.len(), 4);
        if SAVE_FIGURE {
            plotter.save("/tmp/bcjsim/test/plotter_calibration.svg", |_, _| {}).unwrap();
        }
    }
}
