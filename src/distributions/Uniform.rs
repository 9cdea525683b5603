//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b]` have
//! equal likelyhood of happening.
//!
//! Note that this distribution is different from the
//! [discrete uniform distribution](crate::distributions::DiscreteUniform).
//!
//! The standard uniform ([STD_UNIFORM], on `[0, 1]`) plays a special role in
//! the [Kolmogorov-Smirnov simulation](crate::goodness_of_fit::kolmogorov_smirnov_simulate):
//! by the [probability integral transform](https://en.wikipedia.org/wiki/Probability_integral_transform),
//! if the data follows the tested cdf, then the transformed data follows
//! [STD_UNIFORM]. So the simulated reference samples are drawn from it directly.
//!

use rand::Rng;

use crate::{
    distribution_trait::Distribution, domain::ContinuousDomain, errors::AdvStatError,
};

/// The standard uniform distribution (on the interval `[0, 1]`).
pub const STD_UNIFORM: Uniform = unsafe { Uniform::new_unchecked(0.0, 1.0) };

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    domain: ContinuousDomain,
    /// The minimum value
    a: f64,
    /// The maximum value
    b: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///  - `a < b` must be fulfilled or an error will be returned.
    ///  - `a` and `b` must both be finite values (no `+-inf` or NaNs)
    pub const fn new(a: f64, b: f64) -> Result<Uniform, AdvStatError> {
        if !a.is_finite() || !b.is_finite() {
            let error: AdvStatError = if a.is_nan() || b.is_nan() {
                AdvStatError::NanErr
            } else {
                AdvStatError::InvalidNumber
            };

            return Err(error);
        }

        if b <= a {
            return Err(AdvStatError::NumericalError);
        }

        let domain: ContinuousDomain = ContinuousDomain::Range(a, b);

        return Ok(Uniform { domain, a, b });
    }

    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    /// Does not do any checks.
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///
    /// ## Safety
    ///
    /// If the folllowing conditions are not fullfiled, the returned distribution
    /// will be invalid.
    ///
    ///  - `a < b`.
    ///  - `a` and `b` must both be finite values (no `+-inf` or NaNs)
    ///
    #[must_use]
    pub const unsafe fn new_unchecked(a: f64, b: f64) -> Uniform {
        let domain: ContinuousDomain = ContinuousDomain::Range(a, b);

        return Uniform { domain, a, b };
    }

    /// Return `a` (minimum value).
    #[must_use]
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Return `b` (maximum value).
    #[must_use]
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }

    /// Samples the distribution `n` times with the given random number
    /// generator (the `rvs` operation).
    #[must_use]
    pub fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let d: f64 = self.b - self.a;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            let q: f64 = rng.random::<f64>();
            ret.push(self.a + q * d);
        }

        return ret;
    }
}

impl Distribution for Uniform {
    fn cdf(&self, x: f64) -> f64 {
        assert!(
            !x.is_nan(),
            "Tried to evaluate the Uniform cdf with a NaN value. \n"
        );

        if x < self.a {
            return 0.0;
        }

        if self.b < x {
            return 1.0;
        }

        return (x - self.a) / (self.b - self.a);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }
}
