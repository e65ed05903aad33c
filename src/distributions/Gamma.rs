//! # Gamma distribution
//!
//! The [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
//! is a continuous probability distribution.
//!
//! It has 2 parameters, but there are 2 ways to model it:
//!
//! 1. `alpha` or shape
//! 2. `theta` or scale
//!
//! The other way is:
//!
//! 1. `alpha` or shape
//! 2. `lambda` or rate
//!
//! `theta = 1/lambda`
//!
//! All parameters (in every possible parametritzations) are stricly positive.
//! Internally we always store the scale.
//!

use rand::Rng;

use crate::{
    configuration::{
        QUANTILE_MAX_ITERATIONS, QUANTILE_PROBABILITY_TOLERANCE, QUANTILE_RELATIVE_TOLERANCE,
    },
    distribution_trait::Distribution,
    distributions::Normal::StdNormal,
    domain::ContinuousDomain,
    errors::{DistnError, check_finite},
    euclid,
};

pub const GAMMA_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {
    /// alpha or shape
    alpha: f64,
    /// theta or scale
    theta: f64,
    /// `ln(Gamma(alpha)) + alpha * ln(theta)`
    ln_normalitzation_constant: f64,
}

impl Gamma {
    /// Creates a new [Gamma] distribution with parameters `alpha` and `theta`.
    ///
    /// It will return error under the following conditions:
    ///  - `alpha` is `+-inf` or a NaN
    ///  - `theta` is `+-inf` or a NaN
    ///  - `alpha <= 0.0`
    ///  - `theta <= 0.0`
    ///
    pub fn new(alpha: f64, theta: f64) -> Result<Gamma, DistnError> {
        let alpha: f64 = check_finite("shape", alpha)?;
        let theta: f64 = check_finite("scale", theta)?;

        if alpha <= 0.0 {
            return Err(DistnError::InvalidNumber("shape"));
        }

        if theta <= 0.0 {
            return Err(DistnError::InvalidNumber("scale"));
        }

        // working on log space the constant never overflows
        let ln_normalitzation_constant: f64 = euclid::ln_gamma(alpha) + alpha * theta.ln();

        return Ok(Gamma {
            alpha,
            theta,
            ln_normalitzation_constant,
        });
    }

    /// Creates a new [Gamma] distribution with the shape `alpha` and the
    /// rate `lambda` (`theta = 1/lambda`). Same errors as [Gamma::new].
    pub fn from_rate(alpha: f64, lambda: f64) -> Result<Gamma, DistnError> {
        let lambda: f64 = check_finite("rate", lambda)?;
        if lambda <= 0.0 {
            return Err(DistnError::InvalidNumber("rate"));
        }
        return Gamma::new(alpha, 1.0 / lambda);
    }

    /// Get the parameter alpha (shape)
    pub const fn get_alpha(&self) -> f64 {
        return self.alpha;
    }

    /// Get the parameter theta (scale)
    pub const fn get_theta(&self) -> f64 {
        return self.theta;
    }

    /// Get the rate `1/theta`
    pub fn get_rate(&self) -> f64 {
        return 1.0 / self.theta;
    }

    /// Quantile of a `Gamma(alpha, 1)` for `p` in `(0, 1)`.
    ///
    /// The quantiles of a small `alpha` can be as small as `10^-100`, so the
    /// iteration works with `ln(x)` and `ln(P(alpha, x))` instead of `x` and
    /// `P(alpha, x)`. This way the precision is relative at any scale.
    fn standard_quantile(alpha: f64, p: f64) -> f64 {
        let ln_p: f64 = p.ln();

        /*
            Starting point:
             - For small x, P(alpha, x) ~= x^alpha / Gamma(alpha + 1). Solving
                for x gives a lower bound of the quantile, wich is good for alpha < 1.
             - Otherwise the Wilson-Hilferty approximation:
                x ~= alpha * (1 - c + z * sqrt(c))^3 with c = 1/(9 * alpha)
        */
        let small: f64 = ((ln_p + euclid::ln_gamma(alpha + 1.0)) / alpha).exp();
        let mut x: f64 = if alpha < 1.0 {
            small
        } else {
            let c: f64 = 1.0 / (9.0 * alpha);
            let w: f64 = 1.0 - c + euclid::inv_std_normal(p) * c.sqrt();
            if 0.0 < w { alpha * w * w * w } else { small }
        };

        if x == 0.0 {
            // the quantile underflows
            return 0.0;
        }

        let ln_gamma_alpha: f64 = euclid::ln_gamma(alpha);
        let mut lo: f64 = 0.0;
        let mut hi: f64 = f64::INFINITY;
        for _ in 0..QUANTILE_MAX_ITERATIONS {
            let ln_cdf: f64 = euclid::ln_reg_lower_gamma(alpha, x);
            let error: f64 = ln_cdf - ln_p;
            if error.abs() <= QUANTILE_PROBABILITY_TOLERANCE {
                break;
            }

            if error < 0.0 {
                lo = x;
            } else {
                hi = x;
            }

            /*
                Newton's step on t = ln(x):
                d ln(P) / dt = x * pdf(x) / P(x)
                    = exp(alpha * ln(x) - x - ln(Gamma(alpha)) - ln(P(x)))
            */
            let slope: f64 = (alpha * x.ln() - x - ln_gamma_alpha - ln_cdf).exp();
            let mut next: f64 = x * (-error / slope).exp();
            if !(lo < next && next < hi) {
                // geometric bisection
                next = match (0.0 < lo, hi.is_finite()) {
                    (true, true) => (lo * hi).sqrt(),
                    (true, false) => lo * 2.0,
                    _ => hi * 0.5,
                };
            }

            if (next - x).abs() <= QUANTILE_RELATIVE_TOLERANCE * x {
                x = next;
                break;
            }
            x = next;
        }

        return x;
    }

    /// Samples a `Gamma(alpha, 1)` for `1 <= alpha`.
    fn sample_standard_marsaglia<R: Rng + ?Sized>(alpha: f64, rng: &mut R) -> f64 {
        /*
            Marsaglia, G. and Tsang, W. W. (2000). "A Simple Method for Generating
            Gamma Variables". ACM Transactions on Mathematical Software.

            d = alpha - 1/3
            c = 1 / sqrt(9 * d)
            repeat:
                x ~ N(0, 1), v = (1 + c * x)^3 (reject if v <= 0)
                u ~ U(0, 1)
                accept d * v if u < 1 - 0.0331 * x^4
                accept d * v if ln(u) < x^2/2 + d * (1 - v + ln(v))
        */
        let d: f64 = alpha - 1.0 / 3.0;
        let c: f64 = 1.0 / (9.0 * d).sqrt();

        'sample: loop {
            let x: f64 = StdNormal.sample(rng);
            let mut v: f64 = 1.0 + c * x;
            if v <= 0.0 {
                continue 'sample;
            }
            v = v * v * v;
            let u: f64 = rng.random::<f64>();

            let x_sq: f64 = x * x;
            if u < 1.0 - 0.0331 * x_sq * x_sq {
                return d * v;
            }

            if u.ln() < 0.5 * x_sq + d * (1.0 - v + v.ln()) {
                return d * v;
            }
        }
    }
}

impl Distribution for Gamma {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            // limit of x^(alpha - 1)
            return if self.alpha < 1.0 {
                f64::INFINITY
            } else if self.alpha == 1.0 {
                1.0 / self.theta
            } else {
                0.0
            };
        }
        return self.ln_pdf(x).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &GAMMA_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        return euclid::reg_lower_gamma(self.alpha, x / self.theta);
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            return self.pdf(x).ln();
        }
        /*
            pdf(x) = x^(alpha - 1) * exp(-x / theta) / (Gamma(alpha) * theta^alpha)
            ln(pdf(x)) = (alpha - 1) * ln(x) - x / theta - ln(Gamma(alpha)) - alpha * ln(theta)
        */
        return (self.alpha - 1.0) * x.ln() - x / self.theta - self.ln_normalitzation_constant;
    }

    fn ln_cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        return euclid::ln_reg_lower_gamma(self.alpha, x / self.theta);
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return f64::NAN;
        }
        if p == 0.0 {
            return 0.0;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }

        return Gamma::standard_quantile(self.alpha, p) * self.theta;
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // https://en.wikipedia.org/wiki/Gamma_distribution#Random_variate_generation

        if 1.0 <= self.alpha {
            return Gamma::sample_standard_marsaglia(self.alpha, rng) * self.theta;
        }

        /*
            For alpha < 1 we use the boost:
            if X ~ Gamma(alpha + 1, 1) and U ~ U(0, 1), then
            X * U^(1/alpha) ~ Gamma(alpha, 1)
        */
        let boosted: f64 = Gamma::sample_standard_marsaglia(self.alpha + 1.0, rng);
        // `1 - u` is in (0, 1]
        let u: f64 = 1.0 - rng.random::<f64>();
        return boosted * u.powf(1.0 / self.alpha) * self.theta;
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Gamma {
            alpha: 1.0,
            theta: 1.0,
            ln_normalitzation_constant: 0.0,
        }
    }
}
