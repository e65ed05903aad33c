//! R style functions for the distributions.
//!
//! For each distribution `D` there are 4 functions, named the way R names them:
//!
//!  - `dD(x, ...)`: the density (or mass for discrete distributions) at `x`.
//!  - `pD(q, ...)`: the cumulative probability `P(X <= q)`.
//!  - `qD(p, ...)`: the quantile function, the inverse of `pD`.
//!  - `rD(context, n, ...)`: `n` random draws.
//!
//! All of them are [bon] builders so the parameters with a default in R can
//! be omitted:
//!
//! ```
//! use RDistributions::{dexp, qexp, rexp, RngContext, Draws};
//!
//! let d: f64 = dexp(1.0).call().unwrap();
//! let q: f64 = qexp(0.5).rate(2.0).call().unwrap();
//! assert!((q - 2.0_f64.ln() / 2.0).abs() < 1e-12);
//!
//! let mut context: RngContext = RngContext::from_seed(7);
//! let draws: Draws<f64> = rexp(&mut context, 5).rate(2.0).seed(42_u64).call().unwrap();
//! assert_eq!(draws.len(), 5);
//! # let _ = d;
//! ```
//!
//! The `log` setter of `dD` and `pD` returns the natural logarithm of the
//! result, computed directly when possible (more precise than `.ln()`).
//!
//! Invalid parameters return the [DistnError](crate::errors::DistnError) of
//! the distribution constructor. Points outside the support are **not** errors:
//! they give `0.0` (or `-inf` with `log`), as in R.
//!

pub mod continuous;
pub mod discrete;

pub use continuous::*;
pub use discrete::*;

use tracing::warn;

use crate::seed::{Generator, ResolvedGenerator, RngContext, Seed};

/// The result of a sampler (`rD` function).
///
/// R returns a plain number when a single value is requested and a vector
/// otherwise. We do the same.
#[derive(Debug, Clone, PartialEq)]
pub enum Draws<T> {
    /// `n == 1`
    Single(T),
    /// any other `n` (including `0`)
    Many(Vec<T>),
}

impl<T> Draws<T> {
    /// Wraps the values, using [Draws::Single] if there is exactly 1.
    pub fn from_vec(mut values: Vec<T>) -> Draws<T> {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return Draws::Single(value);
            }
        }
        return Draws::Many(values);
    }

    /// Returns all the values in a vector (of length 1 for [Draws::Single]).
    pub fn into_vec(self) -> Vec<T> {
        return match self {
            Draws::Single(value) => vec![value],
            Draws::Many(values) => values,
        };
    }

    /// View of the values as a slice.
    pub fn as_slice(&self) -> &[T] {
        return match self {
            Draws::Single(value) => std::slice::from_ref(value),
            Draws::Many(values) => values.as_slice(),
        };
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        return self.as_slice().len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Returns the value if it is a [Draws::Single].
    pub fn single(&self) -> Option<&T> {
        return match self {
            Draws::Single(value) => Some(value),
            Draws::Many(_) => None,
        };
    }
}

/// Generates `n` values with `sampler` from the generator selected by `seed`.
///
/// Without a seed the default generator of `context` is used (and advanced).
pub(crate) fn draw<T, F>(
    context: &mut RngContext,
    n: usize,
    seed: Option<Seed<'_>>,
    mut sampler: F,
) -> Draws<T>
where
    F: FnMut(&mut Generator) -> T,
{
    let values: Vec<T> = match seed {
        None => {
            let rng: &mut Generator = context.generator_mut();
            (0..n).map(|_| sampler(&mut *rng)).collect::<Vec<T>>()
        }
        Some(seed) => {
            let mut rng: ResolvedGenerator<'_> = context.resolve(seed);
            (0..n).map(|_| sampler(&mut *rng)).collect::<Vec<T>>()
        }
    };

    return Draws::from_vec(values);
}

/// Emits R's warning for a quantile function evaluated outside `[0, 1]`.
pub(crate) fn warn_probability(function: &'static str, p: f64) {
    if !p.is_nan() && !(0.0..=1.0).contains(&p) {
        warn!(function, p, "NaNs produced: probability outside [0, 1]");
    }
}

/// Emits R's warning for a mass function evaluated at a non-integer point.
pub(crate) fn warn_non_integer(function: &'static str, x: f64) {
    if x.is_finite() && x.fract() != 0.0 {
        warn!(function, x, "non-integer x");
    }
}
