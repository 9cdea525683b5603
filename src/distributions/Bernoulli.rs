//! # Bernoulli distribution
//!
//! The [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution)
//! is a discrete distribution with a single parameter `p`. It models an
//! experiment with only 2 possible outcomes: `1` (with probability `p`,
//! usually interpreted as succes) and `0` (with probability `1 - p`, failure).
//!
//! It also comes with a maximum likelyhood [estimator](Bernoulli::estimate)
//! (`p = sample mean`), wich makes it the simplest distribution that can be
//! used with the [parametric bootstrap](crate::goodness_of_fit::pearson_simulate_from_sample).
//!

use rand::Rng;

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::{AdvStatError, TestError},
    samples::Samples,
};

pub const BERNOULLI_DOMAIN: DiscreteDomain = DiscreteDomain::Range(0, 1);

#[derive(Debug, Clone, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a new [Bernoulli] distribution.
    ///
    ///  - `p` indicates the probability of success (returning 1).
    ///      - `p` must belong in the interval `[0.0, 1.0]`. Otherwise an error will be returned.
    pub const fn new(p: f64) -> Result<Bernoulli, AdvStatError> {
        if p.is_nan() {
            return Err(AdvStatError::NanErr);
        }

        if !(0.0 <= p && p <= 1.0) {
            return Err(AdvStatError::InvalidNumber);
        }

        return Ok(Bernoulli { p });
    }

    /// Creates a new [Bernoulli] distribution without checking for the
    /// correcness of the inputs.
    ///
    ///  - `p` indicates the probability of success (returning 1).
    ///
    /// ## Safety
    ///
    /// If `p` is not a valid probability (`p` belongs to the interval `[0, 1]`),
    /// the returned distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(p: f64) -> Bernoulli {
        return Bernoulli { p };
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Fits a [Bernoulli] distribution to `data` with the
    /// [maximum likelyhood estimator](https://en.wikipedia.org/wiki/Maximum_likelihood_estimation):
    /// `p` = sample mean (clamped to `[0, 1]`, so non `{0, 1}` data does not
    /// produce an invalid distribution).
    ///
    /// Returns [TestError::NotEnoughSamples] if `data` is empty.
    pub fn estimate(data: &mut Samples) -> Result<Bernoulli, TestError> {
        let Some(mean) = data.mean() else {
            return Err(TestError::NotEnoughSamples);
        };

        return Ok(Bernoulli {
            p: mean.clamp(0.0, 1.0),
        });
    }
}

impl DiscreteDistribution for Bernoulli {
    fn pmf(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 1.0 - self.p;
        }
        if x == 1.0 {
            return self.p;
        }
        return 0.0;
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &BERNOULLI_DOMAIN;
    }

    fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            let q: f64 = rng.random::<f64>();
            ret.push(if q < self.p { 1.0 } else { 0.0 });
        }
        return ret;
    }

    fn cdf(&self, x: f64) -> f64 {
        assert!(
            !x.is_nan(),
            "Tried to evaluate the Bernoulli cdf with a NaN value. \n"
        );

        if x < 0.0 {
            return 0.0;
        }
        if x < 1.0 {
            return 1.0 - self.p;
        }
        return 1.0;
    }
}
