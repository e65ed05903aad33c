//! This script contains the interfaces used to comunicate with the distributions.
//!
//! The R style functions in [crate::distn] only talk to the distributions
//! trough these 2 traits:
//!  - [Distribution] for continuous distributions.
//!  - [DiscreteDistribution] for discrete distributions.
//!

use rand::Rng;

use crate::configuration::{
    QUANTILE_MAX_ITERATIONS, QUANTILE_PROBABILITY_TOLERANCE, QUANTILE_RELATIVE_TOLERANCE,
    QUANTILE_USE_NEWTONS_ITER,
};
use crate::domain::{ContinuousDomain, DiscreteDomain};

/// The trait for any continuous distribution.
///
/// None of the provided methods are guaranteed to work if the implemented [Distribution::pdf]
/// is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve.
///
/// None of the methods panic. A NaN input returns a NaN.
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// Outside of the [domain](Distribution::get_domain) it must return `0.0`.
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich points
    /// the pdf is non-zero. The returned domain should be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function): `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended.

    /// Evaluates the natural logarithm of [Distribution::pdf].
    ///
    /// The deafult implementation just computes `pdf(x).ln()`, wich loses
    /// all precision when the pdf underflows.
    fn ln_pdf(&self, x: f64) -> f64 {
        return self.pdf(x).ln();
    }

    /// Evaluates the natural logarithm of [Distribution::cdf].
    fn ln_cdf(&self, x: f64) -> f64 {
        return self.cdf(x).ln();
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function),
    /// the inverse function of [Distribution::cdf].
    ///
    ///  - `p = 0.0` and `p = 1.0` return the bounds of the domain.
    ///  - if `p` is outside the range `[0.0, 1.0]` (or a NaN), a NaN is returned.
    ///
    /// The deafult implementation brackets the awnser and then does a
    /// [Newton's method](https://en.wikipedia.org/wiki/Newton%27s_method)
    /// iteration protected by bisection (see [crate::configuration]).
    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return f64::NAN;
        }

        let bounds: (f64, f64) = self.get_domain().get_bounds();
        if p == 0.0 {
            return bounds.0;
        }
        if p == 1.0 {
            return bounds.1;
        }

        /*
            Plan:

            1. Find `lo` and `hi` such that `cdf(lo) <= p <= cdf(hi)`. If the
                bound of the domain is finite we just use it, otherwise we keep
                doubling the distance until the value is bracketed.
            2. Iterate. Every step we shrink the bracket [lo, hi] with the
                sign of `cdf(x) - p`. Then the next guess is the Newton's
                step if it falls inside the bracket or the midpoint otherwise.
        */

        let mut lo: f64 = if bounds.0.is_finite() {
            bounds.0
        } else {
            let mut candidate: f64 = bounds.1.min(0.0) - 1.0;
            let mut step: f64 = 1.0;
            while p < self.cdf(candidate) && candidate.is_finite() {
                step *= 2.0;
                candidate -= step;
            }
            candidate
        };

        let mut hi: f64 = if bounds.1.is_finite() {
            bounds.1
        } else {
            let mut candidate: f64 = lo.max(0.0) + 1.0;
            let mut step: f64 = 1.0;
            while self.cdf(candidate) < p && candidate.is_finite() {
                lo = candidate;
                step *= 2.0;
                candidate += step;
            }
            candidate
        };

        let mut x: f64 = 0.5 * (lo + hi);
        for _ in 0..QUANTILE_MAX_ITERATIONS {
            let error: f64 = self.cdf(x) - p;
            if error.abs() <= QUANTILE_PROBABILITY_TOLERANCE * p {
                break;
            }

            if error < 0.0 {
                lo = x;
            } else {
                hi = x;
            }

            let mut next: f64 = 0.5 * (lo + hi);
            if QUANTILE_USE_NEWTONS_ITER {
                let density: f64 = self.pdf(x);
                if f64::EPSILON < density {
                    // x_n+1 = x_n - f(x_n)/f'(x_n)
                    let newton: f64 = x - error / density;
                    if lo < newton && newton < hi {
                        next = newton;
                    }
                }
            }

            if (next - x).abs() <= QUANTILE_RELATIVE_TOLERANCE * x.abs() {
                x = next;
                break;
            }
            x = next;
        }

        return x;
    }

    /// Samples the distribution at random using the given generator.
    ///
    /// The deafult method is [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling)
    /// unless the deadult method is overriden. Inverse transform sampling simply
    /// generates a random uniform number and evaluates the inverse cdf function
    /// (the [Distribution::quantile] function) and returns the result.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut u: f64 = rng.random::<f64>();
        while u == 0.0 {
            // `quantile(0.0)` may be an infinity
            u = rng.random::<f64>();
        }
        return self.quantile(u);
    }

    // Multiple variants.

    /// [Distribution::pdf] evaluated at multiple points.
    fn pdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.pdf(*x)).collect::<Vec<f64>>()
    }

    /// [Distribution::cdf] evaluated at multiple points.
    fn cdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.cdf(*x)).collect::<Vec<f64>>()
    }

    /// [Distribution::quantile] evaluated at multiple points.
    fn quantile_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.quantile(*x)).collect::<Vec<f64>>()
    }

    /// Generates `n` samples with [Distribution::sample].
    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect::<Vec<f64>>()
    }
}

/// The trait for any discrete distribution.
///
/// It is assumed that the [domain](DiscreteDistribution::get_domain) only
/// contains integers.
pub trait DiscreteDistribution {
    //Requiered methods:

    /// Evaluates the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass Function) of the distribution at point x.
    ///
    /// Must return `0.0` for any point outside the domain (including non-integers).
    fn pmf(&self, x: f64) -> f64;

    /// Returns a reference to the pmf domain, wich indicates at wich points the pmf
    /// is non-zero. The returned domain should be constant and not change.
    fn get_domain(&self) -> &DiscreteDomain;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function): `P(X <= x)`. Non-integer values of
    /// `x` are valid: `cdf(x) = cdf(floor(x))`.
    fn cdf(&self, x: f64) -> f64;

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function):
    /// the smallest `x` in the domain such that `p <= cdf(x)`.
    ///
    ///  - `p = 0.0` and `p = 1.0` return the bounds of the domain.
    ///  - if `p` is outside the range `[0.0, 1.0]` (or a NaN), a NaN is returned.
    fn quantile(&self, p: f64) -> f64;

    /// Samples the distribution at random using the given generator.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    // Provided methods:

    /// Evaluates the natural logarithm of [DiscreteDistribution::pmf].
    fn ln_pmf(&self, x: f64) -> f64 {
        return self.pmf(x).ln();
    }

    /// Evaluates the natural logarithm of [DiscreteDistribution::cdf].
    ///
    /// The deafult implementation computes `cdf(x).ln()`, wich is `-inf`
    /// when the cdf underflows. Override it if the cdf can be computed in log space.
    fn ln_cdf(&self, x: f64) -> f64 {
        return self.cdf(x).ln();
    }

    // Multiple variants.

    /// [DiscreteDistribution::pmf] evaluated at multiple points.
    fn pmf_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.pmf(*x)).collect::<Vec<f64>>()
    }

    /// [DiscreteDistribution::cdf] evaluated at multiple points.
    fn cdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.cdf(*x)).collect::<Vec<f64>>()
    }

    /// [DiscreteDistribution::quantile] evaluated at multiple points.
    fn quantile_multiple(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|x| self.quantile(*x)).collect::<Vec<f64>>()
    }

    /// Generates `n` samples with [DiscreteDistribution::sample].
    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect::<Vec<f64>>()
    }
}
