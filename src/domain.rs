//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for the support of the pdf or pmf of the
//! distributions (see [crate::distribution_trait]). It has 2 variants:
//!  - [DiscreteDomain]
//!  - [ContinuousDomain]
//!
//! Outside of its domain the pdf (or pmf) of a distribution is `0.0`.
//!

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) composed
/// only by integers.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscreteDomain {
    /// All the integers in the range [.0, .1] (**both** inclusive).
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(i64, i64),
    /// All the integers from the given value onwards. The value **is** included.
    From(i64),
}

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range (both inclusive).
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
}

impl DiscreteDomain {
    /// Returns true if `x` is an integer inside the domain.
    ///
    /// NaNs and infinities are never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if !x.is_finite() || x.fract() != 0.0 {
            // the value is fractional, but all variants only include integers
            return false;
        }

        return match self {
            DiscreteDomain::Range(min, max) => (*min as f64) <= x && x <= (*max as f64),
            DiscreteDomain::From(min) => (*min as f64) <= x,
        };
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            DiscreteDomain::Range(min, max) => (*min as f64, *max as f64),
            DiscreteDomain::From(min) => (*min as f64, f64::INFINITY),
        }
    }
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => !x.is_nan(),
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
        }
    }
}
