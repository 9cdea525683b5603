
//! This file contains the deafult values and other value choices used trough the library.
//!


/// The deafult number of decimal digits that the P values are rounded to.
///
/// All the test functions accept a `digits` argument to override it.
pub static DEFAULT_PVALUE_DIGITS: u32 = 4;

/// How far the sum of a probability vector may be from `1.0` before we
/// consider it invalid.
///
/// The probability vectors are usually computed by evaluating a pmf on every
/// element of the support, so the sum only misses `1.0` by the accumulated
/// floating point error.
pub static PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

/// During the fixed margin simulations the conditional probability of a bin is
/// `p_j / (1 - p_1 - ... - p_{j-1})`. With exact arithmetic this is always
/// inside `[0, 1]`, but the substractions drift. Values that exceed `1.0` by
/// less than this tolerance are clamped, bigger violations are an error
/// ([crate::errors::TestError::ConditionalProbability]).
pub static CONDITIONAL_PROBABILITY_DRIFT_TOLERANCE: f64 = 1e-9;

/// Values used by the numerical evaluation of the
/// [regularized lower incomplete gamma function](crate::euclid::lower_incomplete_gamma_regularized)
/// (the chi-squared cdf).
pub mod incomplete_gamma {

    /// Maximum number of terms of the series expansion / iterations of the
    /// continued fraction before giving up on convergence.
    pub static MAX_ITERATIONS: usize = 512;

    /// Relative convergence criteria. The iteration stops once the terms
    /// change the result by less than this factor.
    pub static CONVERGENCE_EPSILON: f64 = 1e-15;

    /// A very small number used by the modified Lentz's method to avoid
    /// divisions by 0.
    pub static LENTZ_TINY: f64 = 1e-300;
}
