use std::result;

use arrow::error::ArrowError;
use thiserror::Error;

pub type Result<T> = result::Result<T, UpliftGenError>;

#[derive(Error, Debug)]
pub enum UpliftGenError {
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),
    #[error("ArrowError: {0:?}")]
    ArrowError(#[from] ArrowError),
}
