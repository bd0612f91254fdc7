use super::{is_blank, record_row, rows_reader};
use crate::base::BcjResult;

/// Holds one row of a two-column key/value table
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct KeyedRow {
    /// 1-based line where the row starts
    pub row: usize,
    pub key: String,
    pub value: String,
}

/// Splits a key/value table into rows, skipping blank lines
///
/// A row without a second column gets an empty value. Extra columns are ignored.
/// Quoted values may span several lines.
pub(crate) fn keyed_rows(text: &str) -> BcjResult<Vec<KeyedRow>> {
    let mut reader = rows_reader(text);
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        rows.push(KeyedRow {
            row: record_row(&record),
            key: record.get(0).unwrap_or_default().to_string(),
            value: record.get(1).unwrap_or_default().to_string(),
        });
    }
    Ok(rows)
}

/// Logs an unrecognized row
pub(crate) fn warn_unknown_row(file: &str, row: &KeyedRow) {
    log::warn!("extra or incorrect row {:?} in {} (row {}) ignored", row.key, file, row.row);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::keyed_rows;

    #[test]
    fn keyed_rows_works() {
        let rows = keyed_rows("Comment,steel\n\nC01,1.5\nlonely\r\nC02,2,extra\n").unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!((rows[0].row, rows[0].key.as_str(), rows[0].value.as_str()), (1, "Comment", "steel"));
        assert_eq!((rows[1].key.as_str(), rows[1].value.as_str()), ("C01", "1.5"));
        assert_eq!((rows[2].key.as_str(), rows[2].value.as_str()), ("lonely", ""));
        assert_eq!((rows[3].key.as_str(), rows[3].value.as_str()), ("C02", "2"));
    }

    #[test]
    fn keyed_rows_keeps_multiline_values() {
        let rows = keyed_rows("Comment,\"line one\nline two\"\nC01,1.5\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "line one\nline two");
        assert_eq!((rows[1].row, rows[1].key.as_str()), (3, "C01"));
    }
}
