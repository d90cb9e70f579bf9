use std::io::ErrorKind;

use thiserror::Error;

use crate::Criterion;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum GraphError {
    #[error("Edge cost must be finite and non-negative: {0}")]
    InvalidCost(f64),
    #[error("Edge duration must be finite and non-negative: {0}")]
    InvalidDuration(f64),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError<L> {
    #[error("No route from {start} to {end}")]
    NoRouteFound {
        start: L,
        end: L,
        criterion: Criterion,
    },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Routes data buffer I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Routes data is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Cannot build graph: {0}")]
    InvalidRoute(#[from] GraphError),
}

impl From<std::io::Error> for LoadError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}
