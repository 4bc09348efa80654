use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unit token is empty")]
    Empty,

    #[error("UCUM expression must be ASCII")]
    NonAscii,

    #[error("UCUM expression must not contain whitespace")]
    ContainsWhitespace,

    #[error("unknown unit symbol '{0}'")]
    UnknownUnit(String),
}
