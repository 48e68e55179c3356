use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinHealthError {
    #[error("Unsupported file format: {0}. Please upload CSV or Excel.")]
    UnsupportedFormat(String),

    #[error("Error parsing file: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for FinHealthError {
    fn from(e: csv::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(feature = "xlsx")]
impl From<calamine::Error> for FinHealthError {
    fn from(e: calamine::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FinHealthError>;
