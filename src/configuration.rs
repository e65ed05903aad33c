//! This file contains the deafult values and other value choices used trough the library.
//!
//! Most of them control the numerical methods used when there is no closed
//! form for a function (the quantile of the [Gamma](crate::distributions::Gamma)
//! or the incomplete gamma and beta functions, for example).
//!

/// Values used by the special functions in [crate::euclid].
///
/// The continued fractions and the series converge quickly for small parameters,
/// but the number of iterations needed grows with the square root of the
/// parameters. The limits are generous so that distributions with large
/// parameters (a Binomial with `size = 10^6`, for example) still converge.
pub mod special_functions {

    /// Relative precision at wich a series or continued fraction is considered converged.
    pub static SERIES_EPSILON: f64 = 1.0e-15;

    /// Maximum number of terms for the series/continued fraction of the
    /// [regularized incomplete gamma](crate::euclid::reg_lower_gamma).
    pub static INCOMPLETE_GAMMA_MAX_ITERATIONS: usize = 10_000;

    /// Maximum number of iterations for the continued fraction of the
    /// [regularized incomplete beta](crate::euclid::incomplete_beta).
    pub static INCOMPLETE_BETA_MAX_ITERATIONS: usize = 10_000;

    /// Any value with an absolute value smaller than this is replaced by it in
    /// the [Lentz's method](https://en.wikipedia.org/wiki/Lentz%27s_algorithm) to avoid divisions by 0.
    pub static LENTZ_FLOOR: f64 = 1.0e-300;
}

/// Determines if a Newton's method iteration is used in the (deafult)
/// quantile function (continuous).
///
/// It generally improves precision and speed, but you may want to disable it
/// if it leads to errors. Bisection is always used as a fallback.
pub static QUANTILE_USE_NEWTONS_ITER: bool = true;

/// Maximum number of iterations of the (deafult) quantile function (continuous).
pub static QUANTILE_MAX_ITERATIONS: usize = 400;

/// The (deafult) quantile function stops when `|cdf(x) - p|` is below
/// `QUANTILE_PROBABILITY_TOLERANCE * p`.
pub static QUANTILE_PROBABILITY_TOLERANCE: f64 = 1.0e-15;

/// The (deafult) quantile function stops when 2 consecutive guesses differ
/// less than `QUANTILE_RELATIVE_TOLERANCE * |x|`. The tolerance is relative
/// so that very small quantiles keep all their significant digits.
pub static QUANTILE_RELATIVE_TOLERANCE: f64 = 1.0e-14;

/// The discrete quantile functions search for the smallest `x` such that
/// `p * (1 - DISCRETE_QUANTILE_FUZZ) <= cdf(x)`. The fuzz avoids moving one
/// step too far because of rounding errors in the cdf.
///
/// Equal to `64 * f64::EPSILON`, the same value R uses.
pub static DISCRETE_QUANTILE_FUZZ: f64 = 64.0 * f64::EPSILON;

/// For rates (`mu`) smaller than this the [Poisson](crate::distributions::Poisson)
/// is sampled by multiplying uniforms (Knuth). For bigger rates, the PTRS
/// (transformed rejection with squeeze) algorithm is used.
pub static POISSON_PTRS_THRESHOLD: f64 = 10.0;

/// For `size * min(prob, 1 - prob)` smaller than this the
/// [Binomial](crate::distributions::Binomial) is sampled by sequential inversion
/// starting at `0`. Otherwise it is sampled trough its quantile function.
pub static BINOMIAL_INVERSION_THRESHOLD: f64 = 30.0;
