//! R style functions for the discrete distributions:
//! [pois](Poisson) and [binom](Binomial).
//!
//! The draws are returned as [u64] counts.

use crate::{
    distn::{Draws, draw, warn_non_integer, warn_probability},
    distribution_trait::DiscreteDistribution,
    distributions::{Binomial::Binomial, Poisson::Poisson},
    errors::DistnError,
    seed::{RngContext, Seed},
};

fn mass<D: DiscreteDistribution>(function: &'static str, distribution: &D, x: f64, log: bool) -> f64 {
    warn_non_integer(function, x);
    if log {
        return distribution.ln_pmf(x);
    }
    return distribution.pmf(x);
}

fn cumulative<D: DiscreteDistribution>(distribution: &D, q: f64, log: bool) -> f64 {
    if log {
        return distribution.ln_cdf(q);
    }
    return distribution.cdf(q);
}

fn inverse<D: DiscreteDistribution>(function: &'static str, distribution: &D, p: f64) -> f64 {
    warn_probability(function, p);
    return distribution.quantile(p);
}

// Poisson

/// Probability mass of the [Poisson] distribution with mean `mu` at `x`.
///
/// A non-integer `x` gives `0.0` (and a warning, like R).
///
/// ```
/// use RDistributions::dpois;
/// let d: f64 = dpois(0.0).mu(2.0).call().unwrap();
/// assert!((d - (-2.0_f64).exp()).abs() < 1e-15);
/// ```
#[bon::builder]
pub fn dpois(
    #[builder(start_fn)] x: f64,
    #[builder(default = 1.0)] mu: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Poisson = Poisson::new(mu)?;
    return Ok(mass("dpois", &distribution, x, log));
}

/// Cumulative probability of the [Poisson] distribution at `q`.
#[bon::builder]
pub fn ppois(
    #[builder(start_fn)] q: f64,
    #[builder(default = 1.0)] mu: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Poisson = Poisson::new(mu)?;
    return Ok(cumulative(&distribution, q, log));
}

/// Quantile of the [Poisson] distribution: the smallest `x` such that
/// `p <= ppois(x)`. `p = 1` gives `+inf`.
#[bon::builder]
pub fn qpois(
    #[builder(start_fn)] p: f64,
    #[builder(default = 1.0)] mu: f64,
) -> Result<f64, DistnError> {
    let distribution: Poisson = Poisson::new(mu)?;
    return Ok(inverse("qpois", &distribution, p));
}

/// `n` draws of the [Poisson] distribution.
#[bon::builder]
pub fn rpois<'c, 's>(
    #[builder(start_fn)] context: &'c mut RngContext,
    #[builder(start_fn)] n: usize,
    #[builder(default = 1.0)] mu: f64,
    #[builder(into)] seed: Option<Seed<'s>>,
) -> Result<Draws<u64>, DistnError> {
    let distribution: Poisson = Poisson::new(mu)?;
    return Ok(draw(context, n, seed, |rng| distribution.sample(rng) as u64));
}

// Binomial

/// Probability mass of the [Binomial] distribution with `size` trials
/// and success probability `prob` at `x`.
///
/// ```
/// use RDistributions::dbinom;
/// // 17 heads in 22 throws of a fair coin
/// let d: f64 = dbinom(17.0).size(22).prob(0.5).call().unwrap();
/// assert!((d - 0.006278514862060547).abs() < 1e-12);
/// ```
#[bon::builder]
pub fn dbinom(
    #[builder(start_fn)] x: f64,
    size: u64,
    prob: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Binomial = Binomial::new(size, prob)?;
    return Ok(mass("dbinom", &distribution, x, log));
}

/// Cumulative probability of the [Binomial] distribution at `q`.
#[bon::builder]
pub fn pbinom(
    #[builder(start_fn)] q: f64,
    size: u64,
    prob: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Binomial = Binomial::new(size, prob)?;
    return Ok(cumulative(&distribution, q, log));
}

/// Quantile of the [Binomial] distribution: the smallest `x` such that
/// `p <= pbinom(x)`.
#[bon::builder]
pub fn qbinom(
    #[builder(start_fn)] p: f64,
    size: u64,
    prob: f64,
) -> Result<f64, DistnError> {
    let distribution: Binomial = Binomial::new(size, prob)?;
    return Ok(inverse("qbinom", &distribution, p));
}

/// `n` draws of the [Binomial] distribution.
#[bon::builder]
pub fn rbinom<'c, 's>(
    #[builder(start_fn)] context: &'c mut RngContext,
    #[builder(start_fn)] n: usize,
    size: u64,
    prob: f64,
    #[builder(into)] seed: Option<Seed<'s>>,
) -> Result<Draws<u64>, DistnError> {
    let distribution: Binomial = Binomial::new(size, prob)?;
    return Ok(draw(context, n, seed, |rng| distribution.sample(rng) as u64));
}
