//! # Chi-Squared distribution
//!
//! The [Chi Squared distribution](https://en.wikipedia.org/wiki/Chi-squared_distribution)
//! is a continuous distribution. It has 1 parameter: the degrees fo freedom (`k`). It
//! represents the distribution of the sum of k iid standard normal random variables.
//!
//! The Chi Squared distribution is a special case of the [Gamma distribution](crate::distributions::Gamma):
//!
//!  > ChiSquared(k) ~ Gamma(a = k/2, theta = 2)
//!
//! So every method just forwards to the inner [Gamma]. We allow non-integer
//! degrees of freedom since the Gamma has no problem with them.
//!

use rand::Rng;

use crate::{
    distribution_trait::Distribution,
    distributions::Gamma::Gamma,
    domain::ContinuousDomain,
    errors::{DistnError, check_finite},
};

pub const CHI_SQUARED_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquared {
    degrees_of_freedom: f64,
    inner: Gamma,
}

impl ChiSquared {
    /// Creates a new [ChiSquared] distribution with parameter
    /// `k` = `degrees_of_freedom`.
    ///
    /// It will return error if `degrees_of_freedom` is not finite or if it
    /// is not stricly positive.
    pub fn new(degrees_of_freedom: f64) -> Result<ChiSquared, DistnError> {
        let degrees_of_freedom: f64 = check_finite("df", degrees_of_freedom)?;
        if degrees_of_freedom <= 0.0 {
            return Err(DistnError::InvalidNumber("df"));
        }

        let inner: Gamma = Gamma::new(degrees_of_freedom * 0.5, 2.0)?;

        return Ok(ChiSquared {
            degrees_of_freedom,
            inner,
        });
    }

    /// Get the parameter degrees of freedom
    pub const fn get_degrees_of_freedom(&self) -> f64 {
        return self.degrees_of_freedom;
    }

    /// Returns the equivalent [Gamma] distribution.
    pub const fn as_gamma(&self) -> &Gamma {
        return &self.inner;
    }
}

impl Distribution for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | k) = x^(k/2 - 1) * exp(-x/2) / (2^(k/2)*gamma(k/2))
        return self.inner.pdf(x);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &CHI_SQUARED_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        return self.inner.cdf(x);
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        return self.inner.ln_pdf(x);
    }

    fn ln_cdf(&self, x: f64) -> f64 {
        return self.inner.ln_cdf(x);
    }

    fn quantile(&self, p: f64) -> f64 {
        return self.inner.quantile(p);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.inner.sample(rng);
    }
}

impl Default for ChiSquared {
    fn default() -> Self {
        ChiSquared {
            degrees_of_freedom: 2.0,
            // ChiSquared(2) ~ Gamma(1, 2)
            inner: Gamma::new(1.0, 2.0).unwrap_or_default(),
        }
    }
}
