//! Error types for Sift

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not read the file as a spreadsheet: {0}")]
    FileFormat(String),

    #[error("Could not find header row with both '{date_token}' and '{narration_token}'")]
    HeaderNotFound {
        date_token: String,
        narration_token: String,
    },

    #[error("Missing expected columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("UPI spend for '{0}' exceeds the representable amount range")]
    AmountOverflow(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout config error: {0}")]
    Config(String),
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Self::FileFormat(err.to_string())
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(err: calamine::XlsxError) -> Self {
        Self::FileFormat(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_not_found_message() {
        let err = Error::HeaderNotFound {
            date_token: "date".to_string(),
            narration_token: "narration".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not find header row with both 'date' and 'narration'"
        );
    }

    #[test]
    fn test_missing_columns_message() {
        let err = Error::MissingColumns(vec!["Narration".into(), "Withdrawal Amt.".into()]);
        assert_eq!(
            err.to_string(),
            "Missing expected columns: Narration, Withdrawal Amt."
        );
    }
}
