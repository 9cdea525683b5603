//! # Discrete uniform distribution
//!
//! The [discrete uniform distribution](https://en.wikipedia.org/wiki/Discrete_uniform_distribution)
//! is a discrete distribution where all the integers in `[a, b]` (both
//! included) have the same probability of being sampled (`1/(b - a + 1)`).
//!
//! A fair die is the classical example (`a = 1`, `b = 6`). Note that this
//! distribution is different from the continuous
//! [Uniform](crate::distributions::Uniform) distribution.
//!

use rand::Rng;

use crate::{
    distribution_trait::DiscreteDistribution, domain::DiscreteDomain, errors::AdvStatError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteUniform {
    domain: DiscreteDomain,
    a: i64,
    b: i64,
}

impl DiscreteUniform {
    /// Creates a new [DiscreteUniform] distribution on the integers of
    /// `[a, b]` (both inclusive).
    ///
    /// It will return an error if `b < a`.
    pub const fn new(a: i64, b: i64) -> Result<DiscreteUniform, AdvStatError> {
        if b < a {
            return Err(AdvStatError::InvalidNumber);
        }

        return Ok(DiscreteUniform {
            domain: DiscreteDomain::Range(a, b),
            a,
            b,
        });
    }

    /// Creates a new [DiscreteUniform] distribution on the integers of
    /// `[a, b]` (both inclusive) without checking `a <= b`.
    ///
    /// ## Safety
    ///
    /// If `b < a`, the returned distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(a: i64, b: i64) -> DiscreteUniform {
        return DiscreteUniform {
            domain: DiscreteDomain::Range(a, b),
            a,
            b,
        };
    }

    /// Return `a` (minimum value).
    #[must_use]
    pub const fn get_a(&self) -> i64 {
        return self.a;
    }

    /// Return `b` (maximum value).
    #[must_use]
    pub const fn get_b(&self) -> i64 {
        return self.b;
    }
}

impl DiscreteDistribution for DiscreteUniform {
    fn pmf(&self, x: f64) -> f64 {
        if x.fract() != 0.0 || x < self.a as f64 || (self.b as f64) < x {
            return 0.0;
        }
        return 1.0 / ((self.b - self.a + 1) as f64);
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.domain;
    }

    fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let k: f64 = (self.b - self.a + 1) as f64;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            let q: f64 = rng.random::<f64>();
            // q < 1.0, but clamp anyway in case k * q rounds up to k
            let offset: f64 = (k * q).floor().clamp(0.0, k - 1.0);
            ret.push(self.a as f64 + offset);
        }

        return ret;
    }

    fn cdf(&self, x: f64) -> f64 {
        assert!(
            !x.is_nan(),
            "Tried to evaluate the DiscreteUniform cdf with a NaN value. \n"
        );

        if x < self.a as f64 {
            return 0.0;
        }
        if (self.b as f64) <= x {
            return 1.0;
        }

        let count: f64 = x.floor() - self.a as f64 + 1.0;
        return count / ((self.b - self.a + 1) as f64);
    }
}
