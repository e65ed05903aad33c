//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is the distribution that models the number of successes of `n`
//! [Bernoulli trials](https://en.wikipedia.org/wiki/Bernoulli_trial) with succes probability `p`.
//!
//! For example, if you whant to know the probability to get exacly 17 heads in 22
//! throws of a coin, we can model this as a binomial distribution with parameters
//! `n = 22` and `p = 0.5` and evaluate the pmf at `17` (adduming head = 1 and tail = 0).
//! To get the probability of getting 14 heads or less we can compute the cdf at `14`.
//!
//! `p = 0.0` and `p = 1.0` are allowed. All the mass is then at `0` and `n`
//! respectively.

use rand::Rng;

use crate::{
    configuration::BINOMIAL_INVERSION_THRESHOLD,
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::{DistnError, check_finite},
    euclid,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    domain: DiscreteDomain,
    p: f64,
    n: u64,
}

impl Binomial {
    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `n` indicates the number of trials
    ///  - `p` indicates the probability of success (returning `1.0`) of each Bernoulli trial.
    ///      - `p` must belong in the interval `[0.0, 1.0]`. Otherwise an error will be returned.
    ///
    pub fn new(n: u64, p: f64) -> Result<Binomial, DistnError> {
        let p: f64 = check_finite("prob", p)?;
        if !(0.0..=1.0).contains(&p) {
            return Err(DistnError::InvalidNumber("prob"));
        }

        let domain: DiscreteDomain = DiscreteDomain::Range(0, n.try_into().unwrap_or(i64::MAX));

        return Ok(Binomial { domain, p, n });
    }

    /// Return `p` (probability of success).
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Return `n` (number of trials).
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }

    /// Sequential search from `0` using the recurrence of the pmf.
    ///
    /// Only used when `n * min(p, 1 - p)` is small, so `q^n` does not underflow
    /// and the loop is short.
    fn sample_inversion<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        /*
            We sample from the lighter side (p' = min(p, 1 - p)) and flip at the end.

            pmf(0) = q^n
            pmf(x) = pmf(x - 1) * (n - x + 1)/x * p/q
                   = pmf(x - 1) * ((n + 1) * s / x - s)    with s = p/q
        */
        let flip: bool = 0.5 < self.p;
        let p: f64 = if flip { 1.0 - self.p } else { self.p };
        let n: f64 = self.n as f64;
        let q: f64 = 1.0 - p;
        let s: f64 = p / q;
        let a: f64 = (n + 1.0) * s;

        let mut r: f64 = (n * q.ln()).exp();
        let mut u: f64 = rng.random::<f64>();
        let mut x: f64 = 0.0;

        while r < u && x < n {
            u -= r;
            x += 1.0;
            r *= a / x - s;
        }

        return if flip { n - x } else { x };
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        return self.ln_pmf(x).exp();
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }

        let k: f64 = x.floor();
        let n: f64 = self.n as f64;
        if n <= k || self.p == 0.0 {
            return 1.0;
        }
        if self.p == 1.0 {
            // all the mass is at `n` and `k < n`
            return 0.0;
        }

        /*
            P(X <= k) = I_{1-p}(n - k, k + 1)
            (I is the regularized incomplete beta function)
        */
        return euclid::incomplete_beta(n - k, k + 1.0, 1.0 - self.p);
    }

    fn ln_cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }

        let k: f64 = x.floor();
        let n: f64 = self.n as f64;
        if n <= k || self.p == 0.0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return f64::NEG_INFINITY;
        }
        return euclid::ln_incomplete_beta(n - k, k + 1.0, 1.0 - self.p);
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return f64::NAN;
        }

        let n: f64 = self.n as f64;
        if p == 0.0 || self.p == 0.0 {
            return 0.0;
        }
        if p == 1.0 || self.p == 1.0 {
            return n;
        }

        /*
            Start from the Cornish-Fisher expansion of the normal approximation:
            x ~= mu + sigma * (z + gamma * (z^2 - 1) / 6)
            mu = n * p, sigma = sqrt(n * p * q), gamma = (q - p) / sigma
        */
        let q: f64 = 1.0 - self.p;
        let mu: f64 = n * self.p;
        let sigma: f64 = (mu * q).sqrt();
        let z: f64 = euclid::inv_std_normal(p);
        let guess: f64 = if sigma < 1.0 {
            // the skewness term blows up, but the awnser is close to `mu` anyway
            mu
        } else {
            let gamma: f64 = (q - self.p) / sigma;
            mu + sigma * (z + gamma * (z * z - 1.0) / 6.0) + 0.5
        };

        return euclid::discrete_quantile_search(
            |y: f64| self.cdf(y),
            guess,
            self.domain.get_bounds(),
            p,
        );
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.p == 0.0 || self.n == 0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return self.n as f64;
        }

        let lighter: f64 = self.p.min(1.0 - self.p);
        if (self.n as f64) * lighter < BINOMIAL_INVERSION_THRESHOLD {
            return self.sample_inversion(rng);
        }

        // inverse transform sampling with u in (0, 1)
        let mut u: f64 = rng.random::<f64>();
        while u == 0.0 {
            u = rng.random::<f64>();
        }
        return self.quantile(u);
    }

    fn ln_pmf(&self, x: f64) -> f64 {
        /*
            pmf(k) = binom(n, k) * p^k * q^(n - k)

            The binomial coefitient can be very big and `p^k * q^(n - k)` very
            small, so we join them in log space.
        */
        if x.is_nan() {
            return f64::NAN;
        }
        if !self.domain.contains(x) {
            return f64::NEG_INFINITY;
        }

        let n: f64 = self.n as f64;
        if self.p == 0.0 {
            return if x == 0.0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if self.p == 1.0 {
            return if x == n { 0.0 } else { f64::NEG_INFINITY };
        }

        return euclid::ln_binomial_coefficient(n, x) + x * self.p.ln() + (n - x) * (-self.p).ln_1p();
    }
}

impl Default for Binomial {
    fn default() -> Self {
        Binomial {
            domain: DiscreteDomain::Range(0, 1),
            p: 0.5,
            n: 1,
        }
    }
}
