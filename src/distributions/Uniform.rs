//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b]` have
//! equal likelyhood of happening.
//!

use rand::Rng;

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistnError, check_finite},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    domain: ContinuousDomain,
    /// The minimum value
    a: f64,
    /// The maximum value
    b: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///  - `a < b` must be fulfilled or an error will be returned.
    ///  - `a` and `b` must both be finite values (no `+-inf` or NaNs)
    pub fn new(a: f64, b: f64) -> Result<Uniform, DistnError> {
        let a: f64 = check_finite("min", a)?;
        let b: f64 = check_finite("max", b)?;

        if b <= a {
            return Err(DistnError::InvalidNumber("min < max"));
        }

        let domain: ContinuousDomain = ContinuousDomain::Range(a, b);

        return Ok(Uniform { domain, a, b });
    }

    /// Return `a` (minimum value).
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Return `b` (maximum value).
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.a || self.b < x {
            return 0.0;
        }
        return 1.0 / (self.b - self.a);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }

        if x <= self.a {
            return 0.0;
        }

        if self.b <= x {
            return 1.0;
        }

        return (x - self.a) / (self.b - self.a);
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.a || self.b < x {
            return f64::NEG_INFINITY;
        }
        return -(self.b - self.a).ln();
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return f64::NAN;
        }

        if p == 0.0 {
            return self.a;
        }

        if p == 1.0 {
            return self.b;
        }

        return self.a + p * (self.b - self.a);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let ret: f64 = self.a + rng.random::<f64>() * (self.b - self.a);
        return ret;
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform {
            domain: ContinuousDomain::Range(0.0, 1.0),
            a: 0.0,
            b: 1.0,
        }
    }
}
