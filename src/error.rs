use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdductError {
    #[error("Invalid adduct notation: {0}")]
    InvalidAdductFormat(String),
    #[error("Unknown adduct: {0}")]
    UnknownAdduct(String),
    #[error("Theoretical mass is zero, ppm difference is undefined")]
    ZeroTheoreticalMass,
}
