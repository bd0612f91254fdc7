use bcjsim::base::{constant_key, parse_constant_key};
use bcjsim::prelude::*;
use bcjsim::BcjError;
use log::LevelFilter;
use std::path::Path;
use structopt::StructOpt;

/// Parses an override such as C07=1e-8
fn parse_override(text: &str) -> Result<(usize, f64), String> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| format!("override {:?} must have the form Cxx=value", text))?;
    let index = parse_constant_key(key.trim()).ok_or_else(|| format!("unknown constant {:?}", key))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("cannot parse value {:?}", value))?;
    Ok((index, value))
}

/// Parses a constant key such as C07
fn parse_key(text: &str) -> Result<usize, String> {
    parse_constant_key(text.trim()).ok_or_else(|| format!("unknown constant {:?}", text))
}

/// Places bare filenames into the default output directory
fn output_path(name: &str) -> String {
    match Path::new(name).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => name.to_string(),
        _ => format!("{}/{}", DEFAULT_OUT_DIR, name),
    }
}

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "bcj_calibrate",
    about = "Compares the BCJ model with experimental stress-strain data"
)]
struct Options {
    /// Parameter table (props) file
    #[structopt(long)]
    props: String,

    /// Experimental dataset files
    #[structopt(long, required = true, min_values = 1)]
    data: Vec<String>,

    /// Number of increments of each model run
    #[structopt(long, default_value = "200")]
    increments: usize,

    /// Loading mode: tension (1) or torsion (2)
    #[structopt(long, default_value = "tension")]
    mode: LoadingMode,

    /// Factor converting the measured stress to Pa
    #[structopt(long, default_value = "1e6")]
    stress_scale: f64,

    /// Overrides a constant, e.g., --set C07=1e-8 (may be repeated)
    #[structopt(long = "set", parse(try_from_str = parse_override))]
    overrides: Vec<(usize, f64)>,

    /// Sweeps a constant over its slider range, e.g., --sweep C03
    #[structopt(long, parse(try_from_str = parse_key))]
    sweep: Option<usize>,

    /// Number of values in the sweep
    #[structopt(long, default_value = "11")]
    sweep_count: usize,

    /// Writes the model curves to this CSV file (bare names go to /tmp/bcjsim/results)
    #[structopt(long)]
    export: Option<String>,

    /// Writes the (possibly overridden) parameters to this CSV file
    #[structopt(long)]
    save_props: Option<String>,

    /// Saves a figure to this SVG file
    #[structopt(long)]
    plot: Option<String>,

    /// Also plots the backstress and isotropic hardening
    #[structopt(long)]
    isvs: bool,

    /// Prints debug messages
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), BcjError> {
    // parse options
    let options = Options::from_args();
    init_logging(if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    // load data
    let mut props = PropsTable::read_csv(&options.props)?;
    for (index, value) in &options.overrides {
        props.parameters.set_constant(*index, *value)?;
        log::info!("{} set to {:?}", constant_key(*index), value);
    }
    let datasets = load_datasets(options.data.as_slice())?;

    // run the model
    let mut config = CalibrationConfig::new();
    config
        .set_increment_count(options.increments)?
        .set_mode(options.mode)
        .set_stress_scale(options.stress_scale)?;
    let calibration = Calibration::new(props.parameters, datasets, config)?;

    // message
    let thin_line = format!("{:─^1$}", "", 72);
    println!("\n{}", thin_line);
    println!("{:<24}{:>12}{:>12}{:>8}{:>16}", "dataset", "θ", "ε̇", "points", "RMS (Pa)");
    println!("{}", thin_line);
    for (dataset, residuals) in calibration.datasets().iter().zip(calibration.residuals()) {
        println!(
            "{:<24}{:>12}{:>12}{:>8}{:>16.6e}",
            dataset.name,
            dataset.temperature,
            dataset.strain_rate,
            dataset.strain.len(),
            residuals.rms()
        );
    }
    println!("{}", thin_line);
    println!("{:<56}{:>16.6e}", "total", calibration.total_rms());
    println!("{}\n", thin_line);

    // sweep
    if let Some(constant) = options.sweep {
        let sweep = ParameterSweep::over_slider_range(calibration.params(), constant, options.sweep_count)?;
        for dataset in calibration.datasets() {
            let points = sweep.run(calibration.params(), dataset, calibration.config())?;
            println!("sweep of {} against {}", constant_key(constant), dataset.name);
            for point in &points {
                println!("{:>16.6e}{:>16.6e}", point.value, point.rms);
            }
            if let Some(best) = ParameterSweep::best(&points) {
                println!("best: {} = {:?}\n", constant_key(constant), best.value);
            }
        }
    }

    // outputs
    if let Some(path) = &options.export {
        calibration.curve_table().write_csv(&output_path(path))?;
    }
    if let Some(path) = &options.save_props {
        props.write_csv(&output_path(path))?;
    }
    if let Some(path) = &options.plot {
        let mut plotter = Plotter::new();
        plotter.draw_calibration(&calibration, options.isvs);
        plotter.save(&output_path(path), |plot, before| {
            if !before {
                plot.set_figure_size_points(600.0, 450.0);
            }
        })?;
    }
    Ok(())
}
