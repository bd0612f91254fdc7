use super::records_to_text;
use crate::base::{write_text, BcjError, BcjResult};
use std::ffi::OsStr;

/// Holds model curves for export as a column-aligned table
///
/// Each curve contributes the columns `strain-<name>` and `VMstress-<name>`.
/// Rows are aligned by increment index, so all curves must have the same length.
#[derive(Clone, Debug, Default)]
pub struct CurveTable {
    names: Vec<String>,
    strains: Vec<Vec<f64>>,
    stresses: Vec<Vec<f64>>,
}

impl CurveTable {
    /// Allocates an empty table
    pub fn new() -> Self {
        CurveTable::default()
    }

    /// Adds a curve
    pub fn add(&mut self, name: &str, strain: &[f64], stress: &[f64]) -> &mut Self {
        self.names.push(name.to_string());
        self.strains.push(strain.to_vec());
        self.stresses.push(stress.to_vec());
        self
    }

    /// Returns the number of curves
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns the table as CSV text
    pub fn to_text(&self) -> BcjResult<String> {
        let nrow = self.strains.first().map(|s| s.len()).unwrap_or(0);
        for (strain, stress) in self.strains.iter().zip(&self.stresses) {
            if strain.len() != nrow || stress.len() != nrow {
                return Err(BcjError::Domain("all curves must have the same number of points"));
            }
        }
        let header: Vec<_> = self
            .names
            .iter()
            .flat_map(|name| [format!("strain-{}", name), format!("VMstress-{}", name)])
            .collect();
        let rows = (0..nrow).map(|j| {
            self.strains
                .iter()
                .zip(&self.stresses)
                .flat_map(|(strain, stress)| [format!("{:?}", strain[j]), format!("{:?}", stress[j])])
                .collect::<Vec<_>>()
        });
        records_to_text(std::iter::once(header).chain(rows))
    }

    /// Writes the table to a CSV file
    pub fn write_csv<P>(&self, full_path: &P) -> BcjResult<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_text(full_path, &self.to_text()?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
