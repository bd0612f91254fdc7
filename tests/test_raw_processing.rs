use bcjsim::base::{BcjError, DEFAULT_TEST_DIR};
use bcjsim::data::{Dataset, LoadSense, ProcessedTest, ProcessingConfig, RawTest};
use russell_lab::approx_eq;

const RAW: &str = "data/raw/raw_rd07_rt.csv";

#[test]
fn test_raw_processing() -> Result<(), BcjError> {
    // read
    let raw = RawTest::read_csv(RAW)?;
    assert_eq!(raw.specimen, "RDT07");
    assert_eq!(raw.orientation(), "RDT");
    assert_eq!(raw.sense, LoadSense::Tension);
    assert_eq!(raw.temperature, 20.0);
    assert_eq!(raw.strain_rate, 0.001);
    assert_eq!(raw.strain.len(), 151);

    // the export was generated with E = 45 GPa and a toe offset of 0.1 %
    let processed = ProcessedTest::new(&raw, &ProcessingConfig::new())?;
    let fit = processed.correction.ok_or(BcjError::Domain("missing compliance correction"))?;
    approx_eq(fit.modulus, 45_000.0, 1.0);
    approx_eq(fit.shift, 0.001, 1e-7);

    // uniform steps up to the trimmed maximum strain
    assert_eq!(processed.engineering_strain.len(), 252);
    approx_eq(processed.engineering_strain[251], 0.1255, 1e-12);
    for pair in processed.true_strain.windows(2) {
        approx_eq(pair[1] - pair[0], 0.0005, 1e-12);
    }
    for pair in processed.true_stress.windows(2) {
        assert!(pair[1] >= pair[0]);
    }

    // export and read back
    let dataset = processed.to_dataset();
    assert_eq!(dataset.temperature, 293.15);
    let path = format!("{}/raw_processing/data_rdt07.csv", DEFAULT_TEST_DIR);
    dataset.write_csv(&path)?;
    let read = Dataset::read_csv(&path)?;
    assert_eq!(read.name, "RDT07");
    assert_eq!(read.strain_rate, 0.001);
    assert_eq!(read.temperature, 293.15);
    assert_eq!(read.strain, dataset.strain);
    assert_eq!(read.stress, dataset.stress);
    Ok(())
}
