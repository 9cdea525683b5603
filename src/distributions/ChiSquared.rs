//! # Chi-Squared distribution
//!
//! The [Chi Squared distribution](https://en.wikipedia.org/wiki/Chi-squared_distribution)
//! is a continuous distribution. It has 1 parameter: the degrees fo freedom (`k`). It
//! represents the distribution of the sum of k iid standard normal random variables.
//!
//! In this library it is the reference distribution of the asymptotic
//! [Pearson P value](crate::goodness_of_fit::pearson_chi2): under the null
//! hypothesys, the Pearson statistic follows (asymptotically) a Chi Squared
//! with `number_of_bins - params - 1` degrees of freedom.
//!

use std::{f64, num::NonZero};

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::AdvStatError,
    euclid::{self, ln_gamma},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquared {
    degrees_of_freedom: f64,
    normalitzation_constant: f64,
}

pub const CHI_SQUARED_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

impl ChiSquared {
    /// Creates a new [ChiSquared] distribution with parameter
    /// `k` = `degrees_of_freedom`.
    ///
    /// It will return an error if `degrees_of_freedom` is 0.
    pub fn new(degrees_of_freedom: u64) -> Result<ChiSquared, AdvStatError> {
        if degrees_of_freedom == 0 {
            return Err(AdvStatError::InvalidNumber);
        }

        let c: f64 = ChiSquared::compute_normalitzation_constant(degrees_of_freedom as f64);

        return Ok(ChiSquared {
            degrees_of_freedom: degrees_of_freedom as f64,
            normalitzation_constant: c,
        });
    }

    /// Creates a new [ChiSquared] distribution with parameter
    /// `k` = `degrees_of_freedom` without checking if it is not 0 (or an integer).
    ///
    /// ## Safety
    ///
    /// If the preconditions are not fullfiled, the returned distribution
    /// will be invalid.
    #[must_use]
    pub unsafe fn new_unchecked(degrees_of_freedom: f64) -> ChiSquared {
        let c: f64 = ChiSquared::compute_normalitzation_constant(degrees_of_freedom);

        return ChiSquared {
            degrees_of_freedom,
            normalitzation_constant: c,
        };
    }

    #[must_use]
    pub fn compute_normalitzation_constant(k: f64) -> f64 {
        assert!(0.0 < k);

        /*
            c = 1/(2^(k*0.5) * gamma(k*0.5))
            ln(c) = -ln(2^(k*0.5) * gamma(k*0.5))
            ln(c) = -(k*0.5)*ln(2) - ln_gamma(k*0.5)
         */

        let d: f64 = k * 0.5;
        let ln_c: f64 = -d * f64::consts::LN_2 - ln_gamma(d);

        return ln_c.exp();
    }

    /// Get the parameter degrees of freedom
    #[must_use]
    pub fn get_degrees_of_freedom(&self) -> NonZero<u64> {
        // Safety: we checked it is non-zero in the creation of the struct.
        return unsafe { NonZero::new_unchecked(self.degrees_of_freedom as u64) };
    }

    #[must_use]
    pub fn get_normalitzation_constant(&self) -> f64 {
        return self.normalitzation_constant;
    }

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// of the distribution at point `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        // let norm(k) = 1.0 / (2^(k/2)*gamma(k/2))
        // pdf(x | k) = norm(k) * x^(k/2 - 1) * exp(-x/2)
        if x < 0.0 {
            return 0.0;
        }
        return x.powf(self.degrees_of_freedom * 0.5 - 1.0)
            * (-0.5 * x).exp()
            * self.normalitzation_constant;
    }
}

impl Distribution for ChiSquared {
    /// Evaluates the cdf of the Chi Squared distribution.
    ///
    /// We use the closed form in terms of the
    /// [regularized lower incomplete gamma function](euclid::lower_incomplete_gamma_regularized):
    ///
    /// > `cdf(x | k) = P(k/2, x/2)`
    ///
    /// **Panicks** if `x` is a NaN.
    fn cdf(&self, x: f64) -> f64 {
        assert!(
            !x.is_nan(),
            "Tried to evaluate the ChiSquared cdf with a NaN value. \n"
        );

        if x <= 0.0 {
            return 0.0;
        }

        return euclid::lower_incomplete_gamma_regularized(self.degrees_of_freedom * 0.5, x * 0.5);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &CHI_SQUARED_DOMAIN;
    }
}
