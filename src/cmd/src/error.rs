use std::result;

use arrow::error::ArrowError;
use common::error::CommonError;
use thiserror::Error;
use uplift_gen::error::UpliftGenError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("BadRequest: {0}")]
    BadRequest(String),
    #[error("CommonError: {0:?}")]
    Common(#[from] CommonError),
    #[error("UpliftGenError: {0:?}")]
    UpliftGen(#[from] UpliftGenError),
    #[error("ArrowError: {0:?}")]
    Arrow(#[from] ArrowError),
    #[error("Config: {0:?}")]
    Config(#[from] config::ConfigError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}
