//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! A poission event does not have memory. Mathematically, if `e` follows
//! an Exponential distribution and `t_1 < t_2`
//! `P(t_1 < e) = P(t_1 < e | t_2 < e)`
//!
//! The Exponential distribution has a parameter: the rate `lambda` wich determines
//! how fast do events happen. The scale (`1/lambda`) is the expected waiting time.

use rand::Rng;

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistnError, check_finite},
    euclid,
};

pub const EXPONENTIAL_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates a new [Exponential] distribution. It is requiered that `0.0 < lambda`
    /// and that `lambda` is finite or an error will be returned.
    pub fn new(lambda: f64) -> Result<Exponential, DistnError> {
        let lambda: f64 = check_finite("rate", lambda)?;
        if lambda <= 0.0 {
            return Err(DistnError::InvalidNumber("rate"));
        }

        return Ok(Exponential { lambda });
    }

    /// Creates a new [Exponential] distribution from it's scale (`1/lambda`).
    pub fn from_scale(scale: f64) -> Result<Exponential, DistnError> {
        let scale: f64 = check_finite("scale", scale)?;
        if scale <= 0.0 {
            return Err(DistnError::InvalidNumber("scale"));
        }

        return Exponential::new(1.0 / scale);
    }

    /// Returns the rate `lambda`.
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// Returns the scale `1/lambda`.
    pub fn get_scale(&self) -> f64 {
        return 1.0 / self.lambda;
    }
}

impl Distribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        return self.lambda * (-self.lambda * x).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &EXPONENTIAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        // 1 - exp(-lambda * x), without cancellation for small x
        return -(-self.lambda * x).exp_m1();
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        // ln(lambda * exp(-lambda * x)) = ln(lambda) - lambda * x
        return self.lambda.ln() - self.lambda * x;
    }

    fn ln_cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        return euclid::ln_1m_exp(-self.lambda * x);
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return f64::NAN;
        }

        if p == 1.0 {
            return f64::INFINITY;
        }

        // cdf(x) = p  =>  x = -ln(1 - p) / lambda
        return -(-p).ln_1p() / self.lambda;
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // `1 - u` is in (0, 1], so the logarithm is always finite
        let r: f64 = 1.0 - rng.random::<f64>();
        return -r.ln() / self.lambda;
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Exponential { lambda: 1.0 }
    }
}
