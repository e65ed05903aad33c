//! R style functions for the continuous distributions:
//! [exp](Exponential), [gamma](Gamma), [norm](Normal), [chisq](ChiSquared)
//! and [unif](Uniform).

use crate::{
    distn::{Draws, draw, warn_probability},
    distribution_trait::Distribution,
    distributions::{
        ChiSquared::ChiSquared, Exponential::Exponential, Gamma::Gamma, Normal::Normal,
        Uniform::Uniform,
    },
    errors::DistnError,
    seed::{RngContext, Seed},
};

fn density<D: Distribution>(distribution: &D, x: f64, log: bool) -> f64 {
    if log {
        return distribution.ln_pdf(x);
    }
    return distribution.pdf(x);
}

fn cumulative<D: Distribution>(distribution: &D, q: f64, log: bool) -> f64 {
    if log {
        return distribution.ln_cdf(q);
    }
    return distribution.cdf(q);
}

fn inverse<D: Distribution>(function: &'static str, distribution: &D, p: f64) -> f64 {
    warn_probability(function, p);
    return distribution.quantile(p);
}

// Exponential

/// Density of the [Exponential] distribution at `x`.
///
/// ```
/// use RDistributions::dexp;
/// let d: f64 = dexp(0.0).rate(2.0).call().unwrap();
/// assert_eq!(d, 2.0);
/// ```
#[bon::builder]
pub fn dexp(
    #[builder(start_fn)] x: f64,
    #[builder(default = 1.0)] rate: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Exponential = Exponential::new(rate)?;
    return Ok(density(&distribution, x, log));
}

/// Cumulative probability of the [Exponential] distribution at `q`.
#[bon::builder]
pub fn pexp(
    #[builder(start_fn)] q: f64,
    #[builder(default = 1.0)] rate: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Exponential = Exponential::new(rate)?;
    return Ok(cumulative(&distribution, q, log));
}

/// Quantile of the [Exponential] distribution: `-ln(1 - p) / rate`.
#[bon::builder]
pub fn qexp(
    #[builder(start_fn)] p: f64,
    #[builder(default = 1.0)] rate: f64,
) -> Result<f64, DistnError> {
    let distribution: Exponential = Exponential::new(rate)?;
    return Ok(inverse("qexp", &distribution, p));
}

/// `n` draws of the [Exponential] distribution.
#[bon::builder]
pub fn rexp<'c, 's>(
    #[builder(start_fn)] context: &'c mut RngContext,
    #[builder(start_fn)] n: usize,
    #[builder(default = 1.0)] rate: f64,
    #[builder(into)] seed: Option<Seed<'s>>,
) -> Result<Draws<f64>, DistnError> {
    let distribution: Exponential = Exponential::new(rate)?;
    return Ok(draw(context, n, seed, |rng| distribution.sample(rng)));
}

// Gamma

/// Density of the [Gamma] distribution at `x`, parametrized with the
/// `shape` and the `rate` (`scale = 1/rate`).
#[bon::builder]
pub fn dgamma(
    #[builder(start_fn)] x: f64,
    shape: f64,
    #[builder(default = 1.0)] rate: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Gamma = Gamma::from_rate(shape, rate)?;
    return Ok(density(&distribution, x, log));
}

/// Cumulative probability of the [Gamma] distribution at `q`.
#[bon::builder]
pub fn pgamma(
    #[builder(start_fn)] q: f64,
    shape: f64,
    #[builder(default = 1.0)] rate: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Gamma = Gamma::from_rate(shape, rate)?;
    return Ok(cumulative(&distribution, q, log));
}

/// Quantile of the [Gamma] distribution. There is no closed form, so it
/// is computed numerically.
#[bon::builder]
pub fn qgamma(
    #[builder(start_fn)] p: f64,
    shape: f64,
    #[builder(default = 1.0)] rate: f64,
) -> Result<f64, DistnError> {
    let distribution: Gamma = Gamma::from_rate(shape, rate)?;
    return Ok(inverse("qgamma", &distribution, p));
}

/// `n` draws of the [Gamma] distribution.
#[bon::builder]
pub fn rgamma<'c, 's>(
    #[builder(start_fn)] context: &'c mut RngContext,
    #[builder(start_fn)] n: usize,
    shape: f64,
    #[builder(default = 1.0)] rate: f64,
    #[builder(into)] seed: Option<Seed<'s>>,
) -> Result<Draws<f64>, DistnError> {
    let distribution: Gamma = Gamma::from_rate(shape, rate)?;
    return Ok(draw(context, n, seed, |rng| distribution.sample(rng)));
}

// Normal

/// Density of the [Normal] distribution at `x`.
///
/// With `log` the log-density is computed directly:
/// `-(x - mean)^2 / (2 * sd^2) - ln(sd) - ln(sqrt(2 * pi))`.
#[bon::builder]
pub fn dnorm(
    #[builder(start_fn)] x: f64,
    #[builder(default = 0.0)] mean: f64,
    #[builder(default = 1.0)] sd: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Normal = Normal::new(mean, sd)?;
    return Ok(density(&distribution, x, log));
}

/// Cumulative probability of the [Normal] distribution at `q`.
#[bon::builder]
pub fn pnorm(
    #[builder(start_fn)] q: f64,
    #[builder(default = 0.0)] mean: f64,
    #[builder(default = 1.0)] sd: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Normal = Normal::new(mean, sd)?;
    return Ok(cumulative(&distribution, q, log));
}

/// Quantile of the [Normal] distribution.
///
/// ```
/// use RDistributions::qnorm;
/// let z: f64 = qnorm(0.975).call().unwrap();
/// assert!((z - 1.959963984540054).abs() < 1e-9);
/// ```
#[bon::builder]
pub fn qnorm(
    #[builder(start_fn)] p: f64,
    #[builder(default = 0.0)] mean: f64,
    #[builder(default = 1.0)] sd: f64,
) -> Result<f64, DistnError> {
    let distribution: Normal = Normal::new(mean, sd)?;
    return Ok(inverse("qnorm", &distribution, p));
}

/// `n` draws of the [Normal] distribution.
#[bon::builder]
pub fn rnorm<'c, 's>(
    #[builder(start_fn)] context: &'c mut RngContext,
    #[builder(start_fn)] n: usize,
    #[builder(default = 0.0)] mean: f64,
    #[builder(default = 1.0)] sd: f64,
    #[builder(into)] seed: Option<Seed<'s>>,
) -> Result<Draws<f64>, DistnError> {
    let distribution: Normal = Normal::new(mean, sd)?;
    return Ok(draw(context, n, seed, |rng| distribution.sample(rng)));
}

// Chi squared

/// Density of the [ChiSquared] distribution with `df` degrees of freedom at `x`.
#[bon::builder]
pub fn dchisq(
    #[builder(start_fn)] x: f64,
    df: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: ChiSquared = ChiSquared::new(df)?;
    return Ok(density(&distribution, x, log));
}

/// Cumulative probability of the [ChiSquared] distribution at `q`.
#[bon::builder]
pub fn pchisq(
    #[builder(start_fn)] q: f64,
    df: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: ChiSquared = ChiSquared::new(df)?;
    return Ok(cumulative(&distribution, q, log));
}

/// Quantile of the [ChiSquared] distribution.
#[bon::builder]
pub fn qchisq(#[builder(start_fn)] p: f64, df: f64) -> Result<f64, DistnError> {
    let distribution: ChiSquared = ChiSquared::new(df)?;
    return Ok(inverse("qchisq", &distribution, p));
}

/// `n` draws of the [ChiSquared] distribution.
#[bon::builder]
pub fn rchisq<'c, 's>(
    #[builder(start_fn)] context: &'c mut RngContext,
    #[builder(start_fn)] n: usize,
    df: f64,
    #[builder(into)] seed: Option<Seed<'s>>,
) -> Result<Draws<f64>, DistnError> {
    let distribution: ChiSquared = ChiSquared::new(df)?;
    return Ok(draw(context, n, seed, |rng| distribution.sample(rng)));
}

// Uniform

/// Density of the [Uniform] distribution on `[min, max]` at `x`.
#[bon::builder]
pub fn dunif(
    #[builder(start_fn)] x: f64,
    #[builder(default = 0.0)] min: f64,
    #[builder(default = 1.0)] max: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Uniform = Uniform::new(min, max)?;
    return Ok(density(&distribution, x, log));
}

/// Cumulative probability of the [Uniform] distribution at `q`.
#[bon::builder]
pub fn punif(
    #[builder(start_fn)] q: f64,
    #[builder(default = 0.0)] min: f64,
    #[builder(default = 1.0)] max: f64,
    #[builder(default)] log: bool,
) -> Result<f64, DistnError> {
    let distribution: Uniform = Uniform::new(min, max)?;
    return Ok(cumulative(&distribution, q, log));
}

/// Quantile of the [Uniform] distribution: `min + p * (max - min)`.
#[bon::builder]
pub fn qunif(
    #[builder(start_fn)] p: f64,
    #[builder(default = 0.0)] min: f64,
    #[builder(default = 1.0)] max: f64,
) -> Result<f64, DistnError> {
    let distribution: Uniform = Uniform::new(min, max)?;
    return Ok(inverse("qunif", &distribution, p));
}

/// `n` draws of the [Uniform] distribution.
///
/// The draws always come from the generator selected by `seed`.
#[bon::builder]
pub fn runif<'c, 's>(
    #[builder(start_fn)] context: &'c mut RngContext,
    #[builder(start_fn)] n: usize,
    #[builder(default = 0.0)] min: f64,
    #[builder(default = 1.0)] max: f64,
    #[builder(into)] seed: Option<Seed<'s>>,
) -> Result<Draws<f64>, DistnError> {
    let distribution: Uniform = Uniform::new(min, max)?;
    return Ok(draw(context, n, seed, |rng| distribution.sample(rng)));
}
