//! # Goodness of fit tests
//!
//! This module contains [goodness of fit](https://en.wikipedia.org/wiki/Goodness_of_fit)
//! tests: statistical tests that answer the question "could this sample have
//! been generated by this distribution?".
//!
//! All the tests in this module share the same structure:
//!
//!  1. Compute a **statistic** from the data. The statistic measures how far
//!     the sample is from what the candidate distribution predicts (bigger
//!     values = worse fit).
//!  2. Compute the **P value**: the probability of observing a statistic at
//!     least as extreme as the one we got, assuming the candidate distribution
//!     (the null hypothesys) is true. A small P value is evidence against the
//!     null hypothesys.
//!
//! The P value can be obtained in 2 ways:
//!
//!  - **Asymptotically**: for the [Pearson statistic](pearson_statistic) and a
//!    large enough sample, the statistic follows (approximately) a
//!    [ChiSquared](crate::distributions::ChiSquared) distribution and the
//!    P value is just `1 - cdf(statistic)`. See [pearson_chi2].
//!  - **By simulation** ([Monte Carlo](https://en.wikipedia.org/wiki/Monte_Carlo_method)):
//!    generate many samples from the null distribution, compute the statistic
//!    of each one, and count how often the simulated statistic is at least as
//!    big as the observed one. This is exact up to simulation noise and does
//!    not requiere the asymptotic regime. See [pearson_simulate],
//!    [pearson_simulate_from_sample] and [kolmogorov_smirnov_simulate].
//!
//! When the parameters of the null distribution were themselves estimated from
//! the data, the simulated samples must be refitted too (otherwise the P value
//! is biased upwards). That is the
//! [parametric bootstrap](pearson_simulate_from_sample) variant, wich accepts
//! an external [estimator](crate::distribution_trait::DiscreteEstimator).
//!
//! ## Randomness
//!
//! Every simulation based function takes the random number generator as an
//! explicit `&mut R` argument. There is no hidden global stream: pass a seeded
//! [StdRng](https://docs.rs/rand/latest/rand/rngs/struct.StdRng.html) and the
//! result is fully reproducible, pass [rand::rng()] and it is not.
//!
//! ## Rounding
//!
//! All the P values are rounded to `digits` decimal digits
//! ([DEFAULT_PVALUE_DIGITS] if not overriden) with
//! [euclid::round_to_digits] (ties away from zero). The statistics themselves
//! are never rounded.
//!

use rand::Rng;

use crate::{
    configuration::{
        CONDITIONAL_PROBABILITY_DRIFT_TOLERANCE, DEFAULT_PVALUE_DIGITS,
    },
    distribution_trait::{DiscreteDistribution, DiscreteEstimator, Distribution},
    distributions::{Binomial::Binomial, ChiSquared::ChiSquared, Uniform::STD_UNIFORM},
    errors::TestError,
    euclid,
    samples::Samples,
};

/// Groups `data` into the frequency counts of the values of `support` and
/// evaluates `pmf` on each one of them.
///
/// Returns `(probs, freqs)` where `probs[j] = pmf(support[j])` and `freqs[j]`
/// is the number of samples exacly equal to `support[j]`.
///
/// Samples that do not match any value of `support` are **silently dropped**:
/// they contribute to no bin. If the caller needs to detect this truncation,
/// compare the sum of `freqs` with [Samples::count].
#[must_use]
pub fn group_sample<F>(data: &Samples, pmf: F, support: &[f64]) -> (Vec<f64>, Vec<u64>)
where
    F: Fn(f64) -> f64,
{
    let mut probs: Vec<f64> = Vec::with_capacity(support.len());
    let mut freqs: Vec<u64> = Vec::with_capacity(support.len());

    for &point in support {
        let mut counter: u64 = 0;
        for &sample in data.peek_data() {
            if sample == point {
                counter += 1;
            }
        }

        probs.push(pmf(point));
        freqs.push(counter);
    }

    return (probs, freqs);
}

/// Computes the [Pearson statistic](https://en.wikipedia.org/wiki/Pearson%27s_chi-squared_test)
/// of the observed frequencies `freqs` against the null probabilities `probs`:
///
/// > `T = sum_j (freqs[j] - n*probs[j])^2 / (n*probs[j])`
///
/// where `n` is the total number of observations (the sum of `freqs`).
///
/// `T = 0` if and only if every observed frequency matches its expected count
/// exacly. Otherwise `T` is stricly positive.
///
/// ## Errors
///
///  - [TestError::InvalidArguments] if `probs` and `freqs` have different
///    lengths, are empty, or some probability is negative.
///  - [TestError::NanErr] if some probability is NaN or infinite.
///  - [TestError::ZeroProbabilityBin] if some probability is `0.0` while
///    `n != 0` (the expected count is 0 and the division is undefined).
pub fn pearson_statistic(probs: &[f64], freqs: &[u64]) -> Result<f64, TestError> {
    if probs.len() != freqs.len() || probs.is_empty() {
        return Err(TestError::InvalidArguments);
    }

    let mut n: u64 = 0;
    for &f in freqs {
        n += f;
    }

    if n == 0 {
        // No observations: every expected count is also 0, perfect fit.
        return Ok(0.0);
    }

    let n: f64 = n as f64;
    let mut statistic: f64 = 0.0;

    for (j, (&p, &f)) in probs.iter().zip(freqs.iter()).enumerate() {
        if !p.is_finite() {
            return Err(TestError::NanErr);
        }
        if p < 0.0 {
            return Err(TestError::InvalidArguments);
        }
        if p == 0.0 {
            return Err(TestError::ZeroProbabilityBin(j));
        }

        let expected: f64 = n * p;
        let deviation: f64 = f as f64 - expected;
        statistic += deviation * deviation / expected;
    }

    return Ok(statistic);
}

/// Performs the [Pearson chi squared test](https://en.wikipedia.org/wiki/Pearson%27s_chi-squared_test)
/// with the asymptotic P value.
///
/// Under the null hypothesys, the [Pearson statistic](pearson_statistic)
/// asymptotically follows a [ChiSquared] distribution with
/// `probs.len() - params - 1` degrees of freedom, where `params` is the number
/// of parameters of the null distribution that were estimated from the data
/// (`0` if the distribution was fully specified beforehand).
///
/// Returns the P value `1 - cdf(statistic)` rounded to `digits` decimal
/// digits ([DEFAULT_PVALUE_DIGITS] by deafult).
///
/// ## Errors
///
///  - [TestError::InvalidDegreesOfFreedom] if `probs.len() - params - 1 < 1`.
///  - Any error of [pearson_statistic].
///
/// ## Example
///
/// ```
/// use GoodnessOfFit::goodness_of_fit::pearson_chi2;
///
/// // A die thrown 60 times, is it fair?
/// let probs: [f64; 6] = [1.0 / 6.0; 6];
/// let freqs: [u64; 6] = [5, 8, 9, 8, 10, 20];
///
/// let p: f64 = pearson_chi2().probs(&probs).freqs(&freqs).call().unwrap();
/// assert!(p < 0.05); // we reject: the die looks loaded
/// ```
#[bon::builder]
pub fn pearson_chi2(
    probs: &[f64],
    freqs: &[u64],
    #[builder(default)] params: usize,
    #[builder(default = DEFAULT_PVALUE_DIGITS)] digits: u32,
) -> Result<f64, TestError> {
    let statistic: f64 = pearson_statistic(probs, freqs)?;

    if probs.len() < params + 2 {
        return Err(TestError::InvalidDegreesOfFreedom);
    }
    let degrees_of_freedom: u64 = (probs.len() - params - 1) as u64;

    // Safety: degrees_of_freedom is at least 1.
    let chi_squared: ChiSquared =
        unsafe { ChiSquared::new_unchecked(degrees_of_freedom as f64) };

    let p_value: f64 = 1.0 - chi_squared.cdf(statistic);

    return Ok(euclid::round_to_digits(p_value, digits));
}

/// Performs the [Pearson chi squared test](pearson_chi2) directly from a
/// sample: fits the null distribution to `data` with `estimator`, groups the
/// sample on `support` (see [group_sample]) and delegates to [pearson_chi2].
///
/// `params` must be the number of parameters that `estimator` estimates. Note
/// that the fact that the parameters were fitted to the same data makes the
/// asymptotic approximation less reliable for small samples, prefer
/// [pearson_simulate_from_sample] in that case.
///
/// ## Errors
///
///  - [TestError::NotEnoughSamples] if `data` is empty.
///  - Any error returned by `estimator`.
///  - Any error of [pearson_chi2].
#[bon::builder]
pub fn pearson_chi2_from_sample<E: DiscreteEstimator>(
    data: &mut Samples,
    estimator: &E,
    support: &[f64],
    params: usize,
    #[builder(default = DEFAULT_PVALUE_DIGITS)] digits: u32,
) -> Result<f64, TestError> {
    if data.count() == 0 {
        return Err(TestError::NotEnoughSamples);
    }

    let distribution: E::Distr = estimator.fit(data)?;

    let (probs, freqs): (Vec<f64>, Vec<u64>) =
        group_sample(data, |x: f64| distribution.pmf(x), support);

    return pearson_chi2()
        .probs(&probs)
        .freqs(&freqs)
        .params(params)
        .digits(digits)
        .call();
}

/// Draws the frequency counts of a multinomial distribution with probabilities
/// `probs` conditioned on the total being exacly `n`.
///
/// Uses the stick breaking decomposition: the count of bin `j`, given the
/// counts of the previous bins, follows a
/// `Binomial(n - drawn_so_far, probs[j] / mass_left)` where `mass_left` is the
/// probability not consumed by the previous bins.
fn simulate_fixed_margin_frequencies<R: Rng>(
    probs: &[f64],
    n: u64,
    rng: &mut R,
) -> Result<Vec<u64>, TestError> {
    let mut freqs: Vec<u64> = Vec::with_capacity(probs.len());

    let mut drawn: u64 = 0;
    let mut consumed_mass: f64 = 0.0;

    for (j, &p) in probs.iter().enumerate() {
        let remaining: u64 = n - drawn;
        let mass_left: f64 = 1.0 - consumed_mass;

        let count: u64 = if remaining == 0 || mass_left <= 0.0 {
            0
        } else {
            let conditional_p: f64 = p / mass_left;

            if 1.0 + CONDITIONAL_PROBABILITY_DRIFT_TOLERANCE < conditional_p {
                // More than floating point drift: the probabilities do not sum to 1.
                return Err(TestError::ConditionalProbability(j));
            }

            let conditional_p: f64 = conditional_p.clamp(0.0, 1.0);

            // Safety: conditional_p has just been clamped to [0, 1].
            let binomial: Binomial = unsafe { Binomial::new_unchecked(conditional_p, remaining) };
            binomial.sample_single(rng)
        };

        freqs.push(count);
        drawn += count;
        consumed_mass += p;
    }

    return Ok(freqs);
}

/// Computes the P value of the [Pearson statistic](pearson_statistic) by
/// [Monte Carlo simulation](https://en.wikipedia.org/wiki/Monte_Carlo_method)
/// with a **fixed margin**: every simulated frequency vector has the same
/// total count `n` as the observed one (a multinomial draw conditioned on the
/// total, generated by stick breaking with sequential conditional
/// [Binomial] draws).
///
/// The P value is the fraction of the `sims` simulations whose statistic is at
/// least as big as the observed one, rounded to `digits` decimal digits.
/// With `sims = 1` the result is always `0.0` or `1.0`; increase `sims` to
/// reduce the simulation noise (the standard deviation of the estimate decays
/// as `1/sqrt(sims)`).
///
/// Unlike [pearson_chi2], this function does not rely on the asymptotic
/// regime, so it stays valid for small samples.
///
/// ## Errors
///
///  - [TestError::InvalidSimulationCount] if `sims` is 0.
///  - [TestError::ConditionalProbability] if `probs` does not sum to 1.
///  - Any error of [pearson_statistic].
#[bon::builder]
pub fn pearson_simulate<R: Rng>(
    sims: usize,
    probs: &[f64],
    freqs: &[u64],
    #[builder(default = DEFAULT_PVALUE_DIGITS)] digits: u32,
    rng: &mut R,
) -> Result<f64, TestError> {
    if sims == 0 {
        return Err(TestError::InvalidSimulationCount);
    }

    let observed_statistic: f64 = pearson_statistic(probs, freqs)?;

    let mut n: u64 = 0;
    for &f in freqs {
        n += f;
    }

    let mut successes: usize = 0;
    for _ in 0..sims {
        let simulated_freqs: Vec<u64> = simulate_fixed_margin_frequencies(probs, n, rng)?;
        let simulated_statistic: f64 = pearson_statistic(probs, &simulated_freqs)?;

        if observed_statistic <= simulated_statistic {
            successes += 1;
        }
    }

    let p_value: f64 = successes as f64 / sims as f64;

    return Ok(euclid::round_to_digits(p_value, digits));
}

/// Computes the P value of the [Pearson statistic](pearson_statistic) by
/// [parametric bootstrap](https://en.wikipedia.org/wiki/Bootstrapping_(statistics)):
/// the null distribution is fitted to `data` with `estimator`, and **every
/// simulated sample is refitted** with the same estimator before its statistic
/// is computed.
///
/// The refit per simulation is what makes the P value honest when the null
/// parameters come from the data itself: the simulated statistics then
/// fluctuate for the same 2 reasons the observed one does (sampling noise and
/// estimation noise). Skipping the refit would inflate the P value.
///
/// The procedure is:
///
///  1. Fit `estimator` to `data` and group the sample on `support`,
///     obtaining the observed statistic.
///  2. For each of the `sims` simulations: draw a sample of the same size from
///     the fitted distribution, refit `estimator` to it, regroup the simulated
///     sample against the refitted pmf, and compute its statistic.
///  3. The P value is the fraction of simulations with a statistic at least as
///     big as the observed one, rounded to `digits` decimal digits.
///
/// If the estimator fails on any simulated sample, the whole test fails with
/// that error (no retries; retrying or skipping failed simulations would bias
/// the denominator).
///
/// ## Errors
///
///  - [TestError::InvalidSimulationCount] if `sims` is 0.
///  - [TestError::NotEnoughSamples] if `data` is empty.
///  - Any error returned by `estimator` (on the original or a simulated sample).
///  - Any error of [pearson_statistic].
#[bon::builder]
pub fn pearson_simulate_from_sample<E: DiscreteEstimator, R: Rng>(
    sims: usize,
    data: &mut Samples,
    estimator: &E,
    support: &[f64],
    #[builder(default = DEFAULT_PVALUE_DIGITS)] digits: u32,
    rng: &mut R,
) -> Result<f64, TestError> {
    if sims == 0 {
        return Err(TestError::InvalidSimulationCount);
    }

    let size: usize = data.count();
    if size == 0 {
        return Err(TestError::NotEnoughSamples);
    }

    let distribution: E::Distr = estimator.fit(data)?;

    let (probs, freqs): (Vec<f64>, Vec<u64>) =
        group_sample(data, |x: f64| distribution.pmf(x), support);
    let observed_statistic: f64 = pearson_statistic(&probs, &freqs)?;

    let mut successes: usize = 0;
    for _ in 0..sims {
        let simulated_data: Vec<f64> = distribution.sample_multiple(size, rng);
        let mut simulated_samples: Samples =
            Samples::new_move(simulated_data).map_err(|_| TestError::NanErr)?;

        let refitted: E::Distr = estimator.fit(&mut simulated_samples)?;

        let (simulated_probs, simulated_freqs): (Vec<f64>, Vec<u64>) =
            group_sample(&simulated_samples, |x: f64| refitted.pmf(x), support);
        let simulated_statistic: f64 =
            pearson_statistic(&simulated_probs, &simulated_freqs)?;

        if observed_statistic <= simulated_statistic {
            successes += 1;
        }
    }

    let p_value: f64 = successes as f64 / sims as f64;

    return Ok(euclid::round_to_digits(p_value, digits));
}

/// Computes the two sided
/// [Kolmogorov-Smirnov statistic](https://en.wikipedia.org/wiki/Kolmogorov%E2%80%93Smirnov_test):
/// the maximum vertical distance between the
/// [empirical cdf](https://en.wikipedia.org/wiki/Empirical_distribution_function)
/// of `data` and the cdf of `distribution`:
///
/// > `D = max_j max((j+1)/n - cdf(x_j), cdf(x_j) - j/n)`
///
/// where `x_0 <= x_1 <= ... <= x_{n-1}` is the sorted sample. `D` always
/// belongs to `[0, 1]`. The data of `data` is left untouched (the sort is done
/// on a copy).
///
/// Returns [TestError::NotEnoughSamples] if `data` is empty.
pub fn kolmogorov_smirnov_statistic<D: Distribution>(
    data: &Samples,
    distribution: &D,
) -> Result<f64, TestError> {
    let n: usize = data.count();
    if n == 0 {
        return Err(TestError::NotEnoughSamples);
    }

    let sorted: Vec<f64> = data.sorted_data();
    let n: f64 = n as f64;

    let mut statistic: f64 = 0.0;
    for (j, &x) in sorted.iter().enumerate() {
        let value: f64 = distribution.cdf(x);

        let above: f64 = (j + 1) as f64 / n - value;
        let below: f64 = value - j as f64 / n;

        statistic = statistic.max(above.max(below));
    }

    return Ok(statistic);
}

/// Computes the P value of the
/// [Kolmogorov-Smirnov statistic](kolmogorov_smirnov_statistic) by
/// [Monte Carlo simulation](https://en.wikipedia.org/wiki/Monte_Carlo_method).
///
/// By the [probability integral transform](https://en.wikipedia.org/wiki/Probability_integral_transform),
/// the distribution of the statistic under the null hypothesys does not depend
/// on the tested (continuous) distribution, only on the sample size. So each
/// simulation draws a sample of the same size from the
/// [standard uniform](STD_UNIFORM) and computes its statistic against the
/// standard uniform itself.
///
/// The P value is the fraction of the `sims` simulations whose statistic is at
/// least as big as the observed one, rounded to `digits` decimal digits.
///
/// ## Errors
///
///  - [TestError::InvalidSimulationCount] if `sims` is 0.
///  - [TestError::NotEnoughSamples] if `data` is empty.
#[bon::builder]
pub fn kolmogorov_smirnov_simulate<D: Distribution, R: Rng>(
    sims: usize,
    data: &Samples,
    distribution: &D,
    #[builder(default = DEFAULT_PVALUE_DIGITS)] digits: u32,
    rng: &mut R,
) -> Result<f64, TestError> {
    if sims == 0 {
        return Err(TestError::InvalidSimulationCount);
    }

    let size: usize = data.count();
    if size == 0 {
        return Err(TestError::NotEnoughSamples);
    }

    let observed_statistic: f64 = kolmogorov_smirnov_statistic(data, distribution)?;

    let mut successes: usize = 0;
    for _ in 0..sims {
        let simulated_data: Vec<f64> = STD_UNIFORM.sample_multiple(size, rng);
        // Safety: the standard uniform only samples values in [0, 1).
        let simulated_samples: Samples = unsafe { Samples::new_move_unchecked(simulated_data) };

        let simulated_statistic: f64 =
            kolmogorov_smirnov_statistic(&simulated_samples, &STD_UNIFORM)?;

        if observed_statistic <= simulated_statistic {
            successes += 1;
        }
    }

    let p_value: f64 = successes as f64 / sims as f64;

    return Ok(euclid::round_to_digits(p_value, digits));
}
