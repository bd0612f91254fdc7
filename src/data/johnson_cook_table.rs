use super::{keyed_rows, parse_number, records_to_text, warn_unknown_row, KEY_COMMENT};
use crate::base::{read_text, write_text, BcjError, BcjResult};
use crate::material::JohnsonCook;
use std::ffi::OsStr;

/// Keys of the Johnson-Cook table in saving order
const KEYS: [&str; 8] = ["A", "B", "n", "C", "m", "Tr", "Tm", "er0"];

/// Holds the Johnson-Cook parameter table
#[derive(Clone, Debug, PartialEq)]
pub struct JohnsonCookTable {
    pub model: JohnsonCook,
    pub comment: String,
}

impl JohnsonCookTable {
    /// Reads the table from a CSV file
    pub fn read_csv<P>(full_path: &P) -> BcjResult<Self>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let (file, text) = read_text(full_path)?;
        let table = JohnsonCookTable::from_text(&file, &text)?;
        log::info!("Johnson-Cook props file <{}> read", file);
        Ok(table)
    }

    /// Parses the table from text
    pub fn from_text(file: &str, text: &str) -> BcjResult<Self> {
        let mut values = [0.0; 8];
        let mut found = [false; 8];
        let mut comment = String::new();
        for row in keyed_rows(text)? {
            if row.key == KEY_COMMENT {
                comment = row.value.clone();
                continue;
            }
            match KEYS.iter().position(|k| *k == row.key) {
                Some(i) => {
                    values[i] = parse_number(file, row.row, &row.key, &row.value)?;
                    found[i] = true;
                }
                None => warn_unknown_row(file, &row),
            }
        }
        if let Some(i) = found.iter().position(|ok| !ok) {
            return Err(BcjError::format(file, 0, format!("missing required key {}", KEYS[i])));
        }
        let [a, b, n, c, m, temperature_ref, temperature_melt, strain_rate_ref] = values;
        Ok(JohnsonCookTable {
            model: JohnsonCook {
                temperature_ref,
                temperature_melt,
                strain_rate_ref,
                a,
                b,
                n,
                c,
                m,
            },
            comment,
        })
    }

    /// Writes the table to a CSV file
    pub fn write_csv<P>(&self, full_path: &P) -> BcjResult<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let jc = &self.model;
        let values = [
            jc.a,
            jc.b,
            jc.n,
            jc.c,
            jc.m,
            jc.temperature_ref,
            jc.temperature_melt,
            jc.strain_rate_ref,
        ];
        let mut records = vec![[KEY_COMMENT.to_string(), self.comment.clone()]];
        for (key, value) in KEYS.iter().zip(values) {
            records.push([key.to_string(), format!("{:?}", value)]);
        }
        write_text(full_path, &records_to_text(records)?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
