#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// ^Disable warning "crate `RDistributions` should have a snake case name convert the identifier to snake case: `r_distributions`"
// The distribution files are also named in PascalCase. The rest of the names
// follow the snake_case convention.

//! # R Distributions
//!
//! The probability distribution functions of R, in Rust.
//!
//! For each distribution there are 4 functions with the names R uses:
//! `d` (density/mass), `p` (cumulative probability), `q` (quantile) and
//! `r` (random draws). See [distn] for the details.
//!
//!  - [x] Exponential: [dexp], [pexp], [qexp], [rexp]
//!  - [x] Gamma: [dgamma], [pgamma], [qgamma], [rgamma]
//!  - [x] Normal: [dnorm], [pnorm], [qnorm], [rnorm]
//!  - [x] Chi-squared: [dchisq], [pchisq], [qchisq], [rchisq]
//!  - [x] Uniform: [dunif], [punif], [qunif], [runif]
//!  - [x] Poisson: [dpois], [ppois], [qpois], [rpois]
//!  - [x] Binomial: [dbinom], [pbinom], [qbinom], [rbinom]
//!
//! ```
//! use RDistributions::{pnorm, qnorm, rnorm, Draws, RngContext};
//!
//! let p: f64 = pnorm(1.96).call().unwrap();
//! let z: f64 = qnorm(p).call().unwrap();
//! assert!((z - 1.96).abs() < 1e-9);
//!
//! let mut context: RngContext = RngContext::from_seed(123);
//! let a: Draws<f64> = rnorm(&mut context, 3).mean(10.0).seed(42_u64).call().unwrap();
//! let b: Draws<f64> = rnorm(&mut context, 3).mean(10.0).seed(42_u64).call().unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Random numbers
//!
//! There is no hidden global generator. The default generator (R's
//! `.Random.seed`) lives in a [RngContext] that is given to every `r` function.
//! The `seed` setter selects a different generator, see [seed] and [test_seed].
//!
//! ## Distributions
//!
//! The functions are thin wrappers around the distributions in [distributions],
//! wich implement the traits [Distribution](distribution_trait::Distribution)
//! and [DiscreteDistribution](distribution_trait::DiscreteDistribution).
//! They can also be used directly.
//!
//! ## Warnings
//!
//! R prints a warning in some cases (like a non-integer `x` in `dpois`). We
//! emit them as [tracing] events at the `WARN` level. No subscriber is installed
//! by this library.
//!

pub mod configuration;
pub mod distn;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod seed;

pub use distn::{
    Draws, dbinom, dchisq, dexp, dgamma, dnorm, dpois, dunif, pbinom, pchisq, pexp, pgamma, pnorm,
    ppois, punif, qbinom, qchisq, qexp, qgamma, qnorm, qpois, qunif, rbinom, rchisq, rexp, rgamma,
    rnorm, rpois, runif,
};
pub use errors::DistnError;
pub use seed::{Generator, ResolvedGenerator, RngContext, Seed, test_seed};
