use std::convert::Infallible;

use thiserror::Error;

/// Everything that can go wrong in this library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistnError {
    /// A NaN (Not a Number) was found in the parameters of a distribution.
    #[error("A NaN (Not a Number) was found in the parameters of the distribution. ")]
    NanErr,
    /// A parameter did not fullfill the conditions of the distribution.
    /// Maybe it was infinite when it was not allowed, was negative when the
    /// distribution only takes positive numbers, or was a big number when the
    /// distribution asks for a probability. Contains the name of the parameter.
    #[error(
        "The parameter `{0}` did not fullfill the conditions of the distribution. Maybe it was infinite when it was not allowed, was negative when the distribution only takes positive numbers, or was a big number when it must be a probability. "
    )]
    InvalidNumber(&'static str),
    /// The seed could not be interpreted. Contains the rejected value.
    #[error("seed must be a bool, a non-negative integer or a Generator instance, found `{0}`")]
    InvalidSeed(String),
}

impl From<Infallible> for DistnError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Checks that `value` is not a NaN and is finite.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, DistnError> {
    if value.is_nan() {
        return Err(DistnError::NanErr);
    }
    if !value.is_finite() {
        return Err(DistnError::InvalidNumber(name));
    }
    return Ok(value);
}
