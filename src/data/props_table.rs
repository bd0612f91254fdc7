use super::{keyed_rows, parse_number, records_to_text, warn_unknown_row};
use crate::base::{constant_key, parse_constant_key, read_text, write_text};
use crate::base::{BcjError, BcjResult, MaterialParameters, N_CONSTANTS};
use std::ffi::OsStr;

/// Key of the bulk modulus row
pub const KEY_BULK_MOD: &str = "Bulk Mod";

/// Key of the shear modulus row
pub const KEY_SHEAR_MOD: &str = "Shear Mod";

/// Key of the free-text comment row
pub const KEY_COMMENT: &str = "Comment";

/// Holds the BCJ parameter table ("props" file)
///
/// The table has two columns: key and value. Recognized keys are
/// `C01` to `C20`, `Bulk Mod`, `Shear Mod`, and `Comment` (optional).
/// Keys are case-sensitive. Unrecognized rows are reported with a
/// warning and skipped. A repeated key overrides the earlier value.
#[derive(Clone, Debug, PartialEq)]
pub struct PropsTable {
    pub parameters: MaterialParameters,
    pub comment: String,
}

impl PropsTable {
    /// Allocates a new table
    pub fn new(parameters: MaterialParameters, comment: &str) -> Self {
        PropsTable {
            parameters,
            comment: comment.to_string(),
        }
    }

    /// Reads the table from a CSV file
    pub fn read_csv<P>(full_path: &P) -> BcjResult<Self>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let (file, text) = read_text(full_path)?;
        let table = PropsTable::from_text(&file, &text)?;
        log::info!("props file <{}> read", file);
        Ok(table)
    }

    /// Parses the table from text
    ///
    /// `file` only names the source in error messages. A missing required
    /// key is reported at row 0 (the whole table).
    pub fn from_text(file: &str, text: &str) -> BcjResult<Self> {
        let mut parameters = MaterialParameters::new();
        let mut comment = String::new();
        let mut found = [false; N_CONSTANTS + 2];
        for row in keyed_rows(text)? {
            let index = match row.key.as_str() {
                KEY_COMMENT => {
                    comment = row.value.clone();
                    continue;
                }
                KEY_BULK_MOD => N_CONSTANTS,
                KEY_SHEAR_MOD => N_CONSTANTS + 1,
                key => match parse_constant_key(key) {
                    Some(i) => i - 1,
                    None => {
                        warn_unknown_row(file, &row);
                        continue;
                    }
                },
            };
            let value = parse_number(file, row.row, &row.key, &row.value)?;
            match index {
                i if i < N_CONSTANTS => parameters.constants[i] = value,
                i if i == N_CONSTANTS => parameters.bulk_modulus = value,
                _ => parameters.shear_modulus = value,
            }
            found[index] = true;
        }
        if let Some(missing) = found.iter().position(|ok| !ok) {
            let key = match missing {
                i if i < N_CONSTANTS => constant_key(i + 1),
                i if i == N_CONSTANTS => KEY_BULK_MOD.to_string(),
                _ => KEY_SHEAR_MOD.to_string(),
            };
            return Err(BcjError::format(file, 0, format!("missing required key {}", key)));
        }
        Ok(PropsTable { parameters, comment })
    }

    /// Returns the table as CSV text
    ///
    /// Rows are written in the order `Comment`, `C01..C20`, `Bulk Mod`,
    /// `Shear Mod` with shortest round-trip number formatting.
    pub fn to_text(&self) -> BcjResult<String> {
        let mut records = vec![[KEY_COMMENT.to_string(), self.comment.clone()]];
        for i in 1..=N_CONSTANTS {
            records.push([constant_key(i), format!("{:?}", self.parameters.c(i))]);
        }
        records.push([KEY_BULK_MOD.to_string(), format!("{:?}", self.parameters.bulk_modulus)]);
        records.push([KEY_SHEAR_MOD.to_string(), format!("{:?}", self.parameters.shear_modulus)]);
        records_to_text(records)
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
