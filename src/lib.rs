#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `GoodnessOfFit` should have a snake case name convert the identifier to snake case: `goodness_of_fit`"
// The rest of the names will follow the snake_case convention.

//! # Goodness Of Fit
//!
//!
//! This library performs [goodness of fit](https://en.wikipedia.org/wiki/Goodness_of_fit)
//! testing: given a collected sample and a candidate distribution we compute a
//! [P value](https://en.wikipedia.org/wiki/P-value) that quantifies how compatible
//! the sample is with that distribution. It provides:
//!
//! - [x] [Pearson's chi-squared statistic](goodness_of_fit::pearson_statistic) for discrete data
//! - [x] [Asymptotic chi-squared P values](goodness_of_fit::pearson_chi2) (with the
//!     degrees of freedom correction for estimated parameters)
//! - [x] [Monte Carlo P values under fixed margins](goodness_of_fit::pearson_simulate)
//!     (sequential conditional binomial draws)
//! - [x] [Parametric bootstrap P values](goodness_of_fit::pearson_simulate_from_sample)
//!     (re-estimating the parameters on every simulated sample)
//! - [x] [Kolmogorov-Smirnov statistic](goodness_of_fit::kolmogorov_smirnov_statistic)
//!     for continuous data
//! - [x] [Monte Carlo Kolmogorov-Smirnov P values](goodness_of_fit::kolmogorov_smirnov_simulate)
//! - [x] The distributions needed to support the tests (and usable on their own)
//! - [ ] Asymptotic Kolmogorov-Smirnov P values (Kolmogorov distribution)
//! - [ ] Tests for 2 samples
//!
//! ## Distributions
//!
//! We have defined the traits [Distribution](distribution_trait::Distribution)
//! (continuous, requieres a cdf) and
//! [DiscreteDistribution](distribution_trait::DiscreteDistribution)
//! (requieres a pmf and random sampling) that define the interface the tests
//! need from a distribution. The implemented ones:
//!
//! ### Continuous distributions:
//!
//!  - [x] [Chi-squared distribution](crate::distributions::ChiSquared) ([Wiki](https://en.wikipedia.org/wiki/Chi-squared_distribution))
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!
//! ### Discrete distributions:
//!
//!  - [x] [Bernoulli](distributions::Bernoulli) ([Wiki](https://en.wikipedia.org/wiki/Bernoulli_distribution))
//!  - [x] [Binomial](distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Discrete Uniform](distributions::DiscreteUniform) ([Wiki](https://en.wikipedia.org/wiki/Discrete_uniform_distribution))
//!
//! If your null hypothesys distribution is not among these, implement
//! [DiscreteDistribution](distribution_trait::DiscreteDistribution) (or
//! [Distribution](distribution_trait::Distribution)) for your own type and
//! everything else works the same.
//!
//! ## Randomness
//!
//! All the Monte Carlo functions take the random number generator as an
//! explicit argument (any [rand::Rng]). There is no hidden global stream:
//! if you need reproducible results, pass a seeded generator
//! (for example [rand::rngs::StdRng] trough [rand::SeedableRng::seed_from_u64]).
//! This also means the simulations can be partitioned among threads by giving
//! each worker its own generator and summing the partial success counts.
//!
//! ***
//!

pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod goodness_of_fit;
pub mod samples;
