use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatusParseError {
    #[error("Unknown status [{0}], expected one of: Completed, Pending, Failed")]
    Unknown(String)
}
