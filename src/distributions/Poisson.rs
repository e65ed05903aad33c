//! # Poisson distribution
//!
//! The [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
//! is a discrete distribution that counts the number of poisson events in a
//! given time with a given rate.
//!
//! The poisson distribution has a single parameter: the rate `lambda`. Lambda
//! represents the avarage number of events that happen in a given amount of time.
//!
//! Some properties of the Poisson distribution:
//!  - The sumation of 2 Poisson distributed random variables is also
//!     poisson distributed with the sum of the 2 original lambdas as
//!     it's own lambda.
//!      - This means that for large lambdas, the [CLT](https://en.wikipedia.org/wiki/Central_limit_theorem)
//!         aplies and the distributions get very close to a (discrete) normal distribution.
//!  - `lambda = 0.0` is allowed: all the mass is at `0`.

use rand::Rng;

use crate::{
    configuration::POISSON_PTRS_THRESHOLD,
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::{DistnError, check_finite},
    euclid,
};

pub const POISSON_DOMAIN: DiscreteDomain = DiscreteDomain::From(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new [Poisson] distribution.
    ///
    ///  - `lambda` indicates rate. And must fullfill:
    ///      - Must be finite (no `+-inf` nor NaNs)
    ///      - `0.0 <= lambda`
    ///
    /// Otherwise an error will be returned.
    pub fn new(lambda: f64) -> Result<Poisson, DistnError> {
        let lambda: f64 = check_finite("mu", lambda)?;

        if lambda < 0.0 {
            return Err(DistnError::InvalidNumber("mu"));
        }

        return Ok(Poisson { lambda });
    }

    /// Returns the value of `lambda`
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// Knuth's method: multiply uniforms until the product drops below `exp(-lambda)`.
    ///
    /// The method is aprox. O(lambda), wich means that it is very fast for
    /// small lambdas but very slow for higher ones.
    fn sample_knuth<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // https://en.wikipedia.org/wiki/Poisson_distribution#Random_variate_generation
        let threshold: f64 = (-self.lambda).exp();
        let mut p: f64 = 1.0;
        let mut k: f64 = 0.0;

        loop {
            p *= rng.random::<f64>();
            if p <= threshold {
                return k;
            }
            k += 1.0;
        }
    }

    /// PTRS: transformed rejection with squeeze. O(1) expected time.
    fn sample_ptrs<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        /*
            Hörmann, W. (1993). "The transformed rejection method for generating
            Poisson random variables". Insurance: Mathematics and Economics.

            Same constants as numpy's `random_poisson_ptrs`.
        */
        let lambda: f64 = self.lambda;
        let slam: f64 = lambda.sqrt();
        let loglam: f64 = lambda.ln();
        let b: f64 = 0.931 + 2.53 * slam;
        let a: f64 = -0.059 + 0.02483 * b;
        let invalpha: f64 = 1.1239 + 1.1328 / (b - 3.4);
        let vr: f64 = 0.9277 - 3.6224 / (b - 2.0);

        loop {
            let u: f64 = rng.random::<f64>() - 0.5;
            let v: f64 = rng.random::<f64>();
            let us: f64 = 0.5 - u.abs();
            let k: f64 = ((2.0 * a / us + b) * u + lambda + 0.43).floor();

            if 0.07 <= us && v <= vr {
                return k;
            }

            if k < 0.0 || (us < 0.013 && us < v) {
                continue;
            }

            let lhs: f64 = v.ln() + invalpha.ln() - (a / (us * us) + b).ln();
            let rhs: f64 = -lambda + k * loglam - euclid::ln_gamma(k + 1.0);
            if lhs <= rhs {
                return k;
            }
        }
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        return self.ln_pmf(x).exp();
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &POISSON_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        if self.lambda == 0.0 || x.is_infinite() {
            return 1.0;
        }

        /*
            P(X <= k) = Q(k + 1, lambda)
            (Q is the regularized upper incomplete gamma function)
        */
        return euclid::reg_upper_gamma(x.floor() + 1.0, self.lambda);
    }

    fn ln_cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        if self.lambda == 0.0 || x.is_infinite() {
            return 0.0;
        }
        return euclid::ln_reg_upper_gamma(x.floor() + 1.0, self.lambda);
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return f64::NAN;
        }
        if p == 0.0 || self.lambda == 0.0 {
            return 0.0;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }

        /*
            Start from the Cornish-Fisher expansion:
            x ~= lambda + sigma * (z + gamma * (z^2 - 1) / 6)
            with sigma = sqrt(lambda) and the skewness gamma = 1/sigma.
            Then search for the exact value.
        */
        let sigma: f64 = self.lambda.sqrt();
        let z: f64 = euclid::inv_std_normal(p);
        let guess: f64 = if sigma < 1.0 {
            // the skewness term blows up, but the awnser is close to `lambda` anyway
            self.lambda
        } else {
            self.lambda + sigma * (z + (z * z - 1.0) / (6.0 * sigma)) + 0.5
        };

        return euclid::discrete_quantile_search(
            |y: f64| self.cdf(y),
            guess,
            POISSON_DOMAIN.get_bounds(),
            p,
        );
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.lambda == 0.0 {
            return 0.0;
        }
        if self.lambda < POISSON_PTRS_THRESHOLD {
            return self.sample_knuth(rng);
        }
        return self.sample_ptrs(rng);
    }

    fn ln_pmf(&self, x: f64) -> f64 {
        /* Usual definition:
         > P(x | lambda) = exp(-lambda) * lambda^x / x!

        But for better precision, we will use the following alternative equivalent:

         > ln(P(x | lambda)) = x * ln(lambda) - lambda - ln(Gamma(x + 1))
        */
        if x.is_nan() {
            return f64::NAN;
        }
        if !POISSON_DOMAIN.contains(x) {
            return f64::NEG_INFINITY;
        }
        if self.lambda == 0.0 {
            return if x == 0.0 { 0.0 } else { f64::NEG_INFINITY };
        }

        return x * self.lambda.ln() - self.lambda - euclid::ln_gamma(x + 1.0);
    }
}

impl Default for Poisson {
    fn default() -> Self {
        Poisson { lambda: 1.0 }
    }
}
