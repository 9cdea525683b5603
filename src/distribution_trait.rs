//! This script contains the interfaces used to comunicate with the distributions.
//!
//! They are deliverately small: a goodness of fit test only needs to evaluate
//! the pmf (to get the expected counts), the cdf (to compare against the
//! empirical cdf) and to draw random samples (to build the empirical null
//! distribution). Anything else a distribution may offer is not requiered
//! here.
//!

use rand::Rng;

use crate::domain::{ContinuousDomain, DiscreteDomain};
use crate::errors::TestError;
use crate::samples::Samples;

/// The trait for any discrete distribution.
///
/// None of the provided methods are guaranteed to work if the implemented
/// [DiscreteDistribution::pmf] is NOT a
/// [valid pmf](https://en.wikipedia.org/wiki/Probability_mass_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The sum of the pmf over the whole domain must be 1
pub trait DiscreteDistribution {
    // Requiered methods:

    /// Evaluates the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass Function) of the distribution at point `x`.
    /// The function should not be evaluated outside the domain (because it
    /// should return 0.0 anyway).
    fn pmf(&self, x: f64) -> f64;

    /// Returns a reference to the pmf domain, wich indicates at wich points the pmf can
    /// be evaluated. The returned domain should be constant and not change.
    fn get_domain(&self) -> &DiscreteDomain;

    /// Samples the distribution `n` times using the given random number
    /// generator (the `rvs` operation).
    ///
    /// The generator is an explicit argument on purpose: there is no hidden
    /// global stream, so seeding `rng` makes the draws reproducible.
    fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64>;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended.

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function).
    /// If the function is evaluated outside the domain of the pmf, it will
    /// return either `0.0` or `1.0`. **Panicks** if `x` is a NaN.
    ///
    /// The deafult implemetation accumulates the pmf over the (finite) domain,
    /// wich is `O(len(domain))`.
    fn cdf(&self, x: f64) -> f64 {
        assert!(!x.is_nan(), "Tried to evaluate the cdf with a NaN value. \n");

        let domain: &DiscreteDomain = self.get_domain();

        let mut accumulator: f64 = 0.0;
        for point in domain.iter() {
            if x < point {
                break;
            }
            accumulator += self.pmf(point);
        }

        return accumulator.clamp(0.0, 1.0);
    }

    /// Samples the distribution once.
    ///
    /// The method [DiscreteDistribution::sample_multiple] is more effitient
    /// for multiple sampling.
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let aux: Vec<f64> = self.sample_multiple(1, rng);
        return aux[0];
    }
}

/// The trait for any continuous distribution.
///
/// Only the cdf is requiered: the
/// [Kolmogorov-Smirnov statistic](crate::goodness_of_fit::kolmogorov_smirnov_statistic)
/// compares the empirical cdf of the data against it, and the asymptotic
/// chi-squared P value only evaluates the cdf of the reference distribution.
pub trait Distribution {
    // Requiered methods:

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function) at `x`.
    ///
    /// Must be monotonically increasing from `0.0` to `1.0`.
    /// **Panicks** if `x` is a NaN.
    fn cdf(&self, x: f64) -> f64;

    /// Returns a reference to the cdf [ContinuousDomain], wich indicates at wich points
    /// the distribution has probability mass. The returned domain should be
    /// constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;
}

/// The external *distribution estimator* capability: fits a
/// [DiscreteDistribution] to the given data.
///
/// This is the seam that the
/// [parametric bootstrap](crate::goodness_of_fit::pearson_simulate_from_sample)
/// calls once per simulated sample to re-estimate the parameters. A failed
/// fit must be reported with [TestError::EstimatorFailure] (or any other
/// fitting [TestError]); the tests propagate the error and never retry.
///
/// Any closure `Fn(&mut Samples) -> Result<D, TestError>` is an estimator:
///
/// ```
/// use GoodnessOfFit::distributions::Bernoulli::Bernoulli;
/// use GoodnessOfFit::errors::TestError;
/// use GoodnessOfFit::samples::Samples;
///
/// let estimator = |data: &mut Samples| -> Result<Bernoulli, TestError> {
///     return Bernoulli::estimate(data);
/// };
/// ```
pub trait DiscreteEstimator {
    /// The type of the fitted distribution.
    type Distr: DiscreteDistribution;

    /// Fits a distribution to `data`.
    fn fit(&self, data: &mut Samples) -> Result<Self::Distr, TestError>;
}

impl<D, F> DiscreteEstimator for F
where
    D: DiscreteDistribution,
    F: Fn(&mut Samples) -> Result<D, TestError>,
{
    type Distr = D;

    fn fit(&self, data: &mut Samples) -> Result<D, TestError> {
        return self(data);
    }
}
