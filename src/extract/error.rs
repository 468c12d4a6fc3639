use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("task text is empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, ExtractError>;
