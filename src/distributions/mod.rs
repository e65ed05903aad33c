//! The distributions the [R style functions](crate::distn) are built on.
//!
//! Continuous distributions implement [Distribution](crate::distribution_trait::Distribution)
//! and discrete ones implement [DiscreteDistribution](crate::distribution_trait::DiscreteDistribution).

// Discrete
pub mod Binomial;
pub mod Poisson;

// Continuous
pub mod ChiSquared;
pub mod Exponential;
pub mod Gamma;
pub mod Normal;
pub mod Uniform;
