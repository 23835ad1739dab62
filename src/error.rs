use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
