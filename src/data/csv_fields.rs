use crate::base::{BcjError, BcjResult};
use csv::{Reader, ReaderBuilder, StringRecord, WriterBuilder};

/// Allocates a reader of headerless rows with any number of fields
pub(crate) fn rows_reader(text: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// Allocates a reader whose first row names the columns
pub(crate) fn headed_reader(text: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// Returns the 1-based line where the record starts
pub(crate) fn record_row(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

/// Returns whether all fields of the record are blank
pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Writes records as CSV text
///
/// Fields are quoted only when needed (commas, quotes, or line breaks).
pub(crate) fn records_to_text<I, R, F>(records: I) -> BcjResult<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    for record in records {
        writer.write_record(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| BcjError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| BcjError::Domain("CSV output is not valid UTF-8"))
}

/// Parses a numeric field reporting the file and 1-based row on failure
///
/// NaN and infinite values are rejected as well.
pub(crate) fn parse_number(file: &str, row: usize, key: &str, field: &str) -> BcjResult<f64> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(BcjError::format(
            file,
            row,
            format!("{} value {:?} is not finite", key, field),
        )),
        Err(_) => Err(BcjError::format(
            file,
            row,
            format!("cannot parse {} value {:?}", key, field),
        )),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
