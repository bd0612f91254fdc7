use thiserror::Error;

/// Defines the error type of all fallible operations
#[derive(Error, Debug)]
pub enum BcjError {
    /// Non-physical input or a degenerate numerical state
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// Loading mode other than uniaxial tension or pure torsion
    #[error("unsupported loading mode: {0:?}")]
    UnsupportedMode(String),

    /// Malformed or missing column, key, or numeric field in a table
    #[error("data format error in {file} (row {row}): {message}")]
    DataFormat { file: String, row: usize, message: String },

    /// Stress and strain columns of one dataset have different lengths
    #[error("data length mismatch in {file}: {strains} strains but {stresses} stresses")]
    DataLengthMismatch {
        file: String,
        strains: usize,
        stresses: usize,
    },

    /// File could not be opened, created, or written
    #[error("cannot access {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing failed
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Figure generation failed
    #[error("plot error: {0}")]
    Plot(&'static str),
}

impl BcjError {
    /// Allocates a new DataFormat error
    pub(crate) fn format(file: &str, row: usize, message: impl Into<String>) -> Self {
        BcjError::DataFormat {
            file: file.to_string(),
            row,
            message: message.into(),
        }
    }

    /// Allocates a new Io error
    pub(crate) fn io(file: &str, source: std::io::Error) -> Self {
        BcjError::Io {
            file: file.to_string(),
            source,
        }
    }
}

/// Defines the result type of all fallible operations
pub type BcjResult<T> = Result<T, BcjError>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::BcjError;

    #[test]
    fn display_works() {
        let err = BcjError::Domain("temperature must be > 0.0");
        assert_eq!(format!("{}", err), "domain error: temperature must be > 0.0");
        let err = BcjError::UnsupportedMode("shear".to_string());
        assert_eq!(format!("{}", err), "unsupported loading mode: \"shear\"");
        let err = BcjError::format("props.csv", 3, "cannot parse C03");
        assert_eq!(format!("{}", err), "data format error in props.csv (row 3): cannot parse C03");
        let err = BcjError::DataLengthMismatch {
            file: "data.csv".to_string(),
            strains: 10,
            stresses: 9,
        };
        assert_eq!(
            format!("{}", err),
            "data length mismatch in data.csv: 10 strains but 9 stresses"
        );
    }
}
