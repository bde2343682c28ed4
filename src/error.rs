use std::{io::Error as IoError, num::ParseIntError};

use actix_web::ResponseError;
use alloy_sol_types::Error as AbiError;
use anyhow::Error as AnyhowError;
use reqwest::Error as ReqwestError;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError;
use url::ParseError as UrlError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    URL(#[from] UrlError),

    #[error("{0}")]
    INT(#[from] ParseIntError),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),

    #[error("{0}")]
    AnyHowError(#[from] AnyhowError),

    #[error("{0}")]
    Read(#[from] ReadError),

    #[error("{0}")]
    Aggregation(#[from] AggregationError),
}

impl ResponseError for Error {}

/// One reserve read did not complete. Never retried, never swallowed;
/// propagates unchanged to the aggregation cycle.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    Transport(#[from] ReqwestError),

    #[error("Rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Call returned no result")]
    EmptyResult,

    #[error("Reserve data decode: {0}")]
    Decode(#[from] AbiError),
}

/// First failure of an aggregation cycle. No rows exist when this is
/// raised; the cycle is all-or-nothing.
#[derive(Error, Debug)]
#[error("Reading reserve {symbol} failed: {source}")]
pub struct AggregationError {
    pub symbol: String,
    pub source: ReadError,
}
