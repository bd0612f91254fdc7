use bcjsim::data::{ProcessedTest, ProcessingConfig, RawTest};
use bcjsim::prelude::*;
use bcjsim::BcjError;
use log::LevelFilter;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "bcj_process",
    about = "Converts raw machine exports into true stress-strain datasets"
)]
struct Options {
    /// Raw export files
    #[structopt(required = true, min_values = 1)]
    raw: Vec<String>,

    /// Output directory of the datasets
    #[structopt(long, default_value = "/tmp/bcjsim/datasets")]
    out_dir: String,

    /// Strain step of the processed curves
    #[structopt(long, default_value = "0.0005")]
    increment: f64,

    /// Approximate number of raw points kept
    #[structopt(long, default_value = "2000")]
    points: usize,

    /// Skips the compliance correction
    #[structopt(long)]
    no_correction: bool,

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

    // configuration
    let mut config = ProcessingConfig::new();
    config
        .set_strain_increment(options.increment)?
        .set_target_point_count(options.points)?
        .set_correct_compliance(!options.no_correction);

    // process
    let thin_line = format!("{:─^1$}", "", 72);
    println!("\n{}", thin_line);
    println!("{:<16}{:>8}{:>10}{:>12}{:>14}{:>12}", "specimen", "code", "θ (°C)", "ε̇", "E (MPa)", "points");
    println!("{}", thin_line);
    for path in &options.raw {
        let raw = RawTest::read_csv(path)?;
        let processed = ProcessedTest::new(&raw, &config)?;
        let modulus = processed.correction.map_or(f64::NAN, |c| c.modulus);
        println!(
            "{:<16}{:>8}{:>10}{:>12}{:>14.1}{:>12}",
            raw.specimen,
            raw.orientation(),
            raw.temperature,
            raw.strain_rate,
            modulus,
            processed.true_strain.len()
        );
        let dataset = processed.to_dataset();
        let output = format!("{}/data_{}.csv", options.out_dir, raw.specimen.to_lowercase());
        dataset.write_csv(&output)?;
    }
    println!("{}\n", thin_line);
    Ok(())
}
