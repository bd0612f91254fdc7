use super::{headed_reader, is_blank, parse_number, record_row, records_to_text};
use crate::base::{read_text, write_text, BcjError, BcjResult};
use std::ffi::OsStr;

/// Column names recognized in an experimental dataset
pub const COLUMN_STRAIN: &str = "Strain";
pub const COLUMN_STRESS: &str = "Stress";
pub const COLUMN_STRAIN_RATE: &str = "Strain Rate";
pub const COLUMN_TEMPERATURE: &str = "Temperature";
pub const COLUMN_NAME: &str = "Name";

/// Holds one experimental stress-strain curve and its test condition
///
/// The stress is kept in the units of the file (e.g., MPa).
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    /// Label of the test
    pub name: String,

    /// Strain rate of the test
    pub strain_rate: f64,

    /// Temperature of the test
    pub temperature: f64,

    /// Measured strains
    pub strain: Vec<f64>,

    /// Measured stresses
    pub stress: Vec<f64>,

    /// Source file
    pub file: String,
}

impl Dataset {
    /// Reads a dataset from a CSV file
    ///
    /// See [Dataset::from_text()]
    pub fn read_csv<P>(full_path: &P) -> BcjResult<Self>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let (file, text) = read_text(full_path)?;
        let dataset = Dataset::from_text(&file, &text)?;
        log::info!(
            "dataset <{}> read: {} points at ε̇ = {:?} and θ = {:?}",
            dataset.name,
            dataset.strain.len(),
            dataset.strain_rate,
            dataset.temperature
        );
        Ok(dataset)
    }

    /// Parses a dataset from text
    ///
    /// The first line holds the column names, in any order; extra columns are ignored.
    /// The test condition (strain rate, temperature, and name) is read from the first
    /// data row only. Empty strain or stress cells are skipped, after which both
    /// columns must have the same length.
    pub fn from_text(file: &str, text: &str) -> BcjResult<Self> {
        let mut reader = headed_reader(text);
        let header = reader.headers()?.clone();
        if is_blank(&header) {
            return Err(BcjError::format(file, 1, "missing header"));
        }
        let column = |name: &str| -> BcjResult<usize> {
            header
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| BcjError::format(file, 1, format!("missing column {:?}", name)))
        };
        let i_strain = column(COLUMN_STRAIN)?;
        let i_stress = column(COLUMN_STRESS)?;
        let i_rate = column(COLUMN_STRAIN_RATE)?;
        let i_temp = column(COLUMN_TEMPERATURE)?;
        let i_name = column(COLUMN_NAME)?;

        let mut condition: Option<(String, f64, f64)> = None;
        let mut strain = Vec::new();
        let mut stress = Vec::new();
        for result in reader.records() {
            let record = result?;
            if is_blank(&record) {
                continue;
            }
            let row = record_row(&record);
            let cell = |k: usize| record.get(k).map(|s| s.trim()).unwrap_or("");
            if condition.is_none() {
                let rate = parse_number(file, row, COLUMN_STRAIN_RATE, cell(i_rate))?;
                let temp = parse_number(file, row, COLUMN_TEMPERATURE, cell(i_temp))?;
                condition = Some((cell(i_name).to_string(), rate, temp));
            }
            if !cell(i_strain).is_empty() {
                strain.push(parse_number(file, row, COLUMN_STRAIN, cell(i_strain))?);
            }
            if !cell(i_stress).is_empty() {
                stress.push(parse_number(file, row, COLUMN_STRESS, cell(i_stress))?);
            }
        }
        let (name, strain_rate, temperature) = match condition {
            Some(c) => c,
            None => return Err(BcjError::format(file, 2, "missing data rows")),
        };
        if strain.len() != stress.len() {
            return Err(BcjError::DataLengthMismatch {
                file: file.to_string(),
                strains: strain.len(),
                stresses: stress.len(),
            });
        }
        Ok(Dataset {
            name,
            strain_rate,
            temperature,
            strain,
            stress,
            file: file.to_string(),
        })
    }

    /// Returns the dataset as CSV text
    ///
    /// The test condition is written on the first data row only.
    pub fn to_text(&self) -> BcjResult<String> {
        if self.strain.len() != self.stress.len() {
            return Err(BcjError::DataLengthMismatch {
                file: self.file.clone(),
                strains: self.strain.len(),
                stresses: self.stress.len(),
            });
        }
        let header = [COLUMN_STRAIN, COLUMN_STRESS, COLUMN_STRAIN_RATE, COLUMN_TEMPERATURE, COLUMN_NAME]
            .map(|c| c.to_string());
        let rows = self.strain.iter().zip(&self.stress).enumerate().map(|(i, (e, s))| {
            let mut row = [format!("{:?}", e), format!("{:?}", s), String::new(), String::new(), String::new()];
            if i == 0 {
                row[2] = format!("{:?}", self.strain_rate);
                row[3] = format!("{:?}", self.temperature);
                row[4] = self.name.clone();
            }
            row
        });
        records_to_text(std::iter::once(header).chain(rows))
    }

    /// Writes the dataset to a CSV file
    pub fn write_csv<P>(&self, full_path: &P) -> BcjResult<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_text(full_path, &self.to_text()?)
    }

    /// Returns the largest measured strain (zero if there are no points)
    pub fn max_strain(&self) -> f64 {
        self.strain.iter().fold(0.0, |acc, &e| f64::max(acc, e))
    }
}

/// Reads a batch of datasets
///
/// Datasets whose strain and stress columns have different lengths are
/// reported with a warning and excluded. Any other error stops the batch.
pub fn load_datasets<P>(paths: &[P]) -> BcjResult<Vec<Dataset>>
where
    P: AsRef<OsStr>,
{
    let mut datasets = Vec::with_capacity(paths.len());
    for path in paths {
        match Dataset::read_csv(path) {
            Ok(dataset) => datasets.push(dataset),
            Err(err @ BcjError::DataLengthMismatch { .. }) => log::warn!("{}; dataset excluded", err),
            Err(err) => return Err(err),
        }
    }
    Ok(datasets)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
