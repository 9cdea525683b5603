//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is the distribution that models the number of successes of `n`
//! [Bernoulli trials](crate::distributions::Bernoulli) with succes probability `p`.
//!
//! For example, if you whant to know the probability to get exacly 17 heads in 22
//! throws of a coin, we can model this as a binomial distribution with parameters
//! `n = 22` and `p = 0.5` and evaluate the pmf at `17` (assuming head = 1 and tail = 0).
//!
//! In this library the Binomial is also the engine of the
//! [fixed margin simulation](crate::goodness_of_fit::pearson_simulate): a
//! multinomial draw with a fixed total is generated as a sequence of
//! conditional binomial draws (stick-breaking).
//!

use rand::Rng;

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::AdvStatError,
    euclid::ln_gamma,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    domain: DiscreteDomain,
    p: f64,
    n: u64,
}

impl Binomial {
    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `p` indicates the probability of success (returning `1.0`) of each Bernoulli trial.
    ///      - `p` must belong in the interval `[0.0, 1.0]`. Otherwise an error will be returned.
    ///  - `n` indicates the number of trials
    ///
    pub fn new(p: f64, n: u64) -> Result<Binomial, AdvStatError> {
        if p.is_nan() {
            return Err(AdvStatError::NanErr);
        }
        if !(0.0 <= p && p <= 1.0) {
            return Err(AdvStatError::InvalidNumber);
        }

        let domain: DiscreteDomain = DiscreteDomain::Range(0, n.try_into().unwrap_or(i64::MAX));

        return Ok(Binomial { domain, p, n });
    }

    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `p` indicates the probability of success (returning `1.0`) of each Bernoulli trial.
    ///  - `n` indicates the number of trials
    ///
    /// ## Safety
    ///
    /// If `p` is not a valid probability (`p` belongs to the interval `[0, 1]`),
    /// the returned distribution will be invalid.
    #[must_use]
    pub unsafe fn new_unchecked(p: f64, n: u64) -> Binomial {
        let domain: DiscreteDomain = DiscreteDomain::Range(0, n.try_into().unwrap_or(i64::MAX));

        return Binomial { domain, p, n };
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Return `n` (number of trials).
    #[must_use]
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }

    /// Samples the distribution once and returns the number of successes
    /// directly as an integer.
    ///
    /// Uses [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling)
    /// with the pmf recurrence
    /// `pmf(k+1) = pmf(k) * (n-k)/(k+1) * p/(1-p)`, wich is `O(n)` in the
    /// worst case. If `(1-p)^n` underflows to 0 (very large `n`), the
    /// recurrence cannot even start and we fall back to the
    /// [normal approximation](https://en.wikipedia.org/wiki/Binomial_distribution#Normal_approximation)
    /// (clamped and rounded to the domain).
    #[must_use]
    pub fn sample_single<R: Rng>(&self, rng: &mut R) -> u64 {
        if self.p <= 0.0 || self.n == 0 {
            return 0;
        }
        if 1.0 <= self.p {
            return self.n;
        }

        let n_f: f64 = self.n as f64;
        let q: f64 = 1.0 - self.p;

        // pmf(0) = (1-p)^n, computed in log space
        let pmf_0: f64 = (n_f * q.ln()).exp();

        if pmf_0 == 0.0 {
            // Normal approximation: mean n*p, variance n*p*q.
            // Box-Muller transform for the standard normal draw.
            let u_1: f64 = loop {
                let u: f64 = rng.random::<f64>();
                if 0.0 < u {
                    break u;
                }
            };
            let u_2: f64 = rng.random::<f64>();
            let std_normal: f64 =
                (-2.0 * u_1.ln()).sqrt() * (std::f64::consts::TAU * u_2).cos();

            let approx: f64 = n_f * self.p + std_normal * (n_f * self.p * q).sqrt();
            return approx.round().clamp(0.0, n_f) as u64;
        }

        let u: f64 = rng.random::<f64>();
        let ratio: f64 = self.p / q;

        let mut pmf: f64 = pmf_0;
        let mut accumulator: f64 = pmf_0;
        let mut k: u64 = 0;

        while accumulator < u && k < self.n {
            k += 1;
            pmf = pmf * ((self.n - k + 1) as f64 / k as f64) * ratio;
            accumulator += pmf;
        }

        return k;
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, x: f64) -> f64 {
        if x.fract() != 0.0 || x < 0.0 || (self.n as f64) < x {
            return 0.0;
        }

        let k: u64 = x as u64;

        // handle the degenerate cases (0^0 and ln(0) issues)
        if self.p <= 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if 1.0 <= self.p {
            return if k == self.n { 1.0 } else { 0.0 };
        }

        // ln(pmf) = ln(binom(n, k)) + k*ln(p) + (n-k)*ln(1-p)
        // The binomial coeffitient is computed with ln_gamma to avoid
        // overflowing for large n.
        let n_f: f64 = self.n as f64;
        let k_f: f64 = k as f64;

        let ln_binomial_coef: f64 =
            ln_gamma(n_f + 1.0) - ln_gamma(k_f + 1.0) - ln_gamma(n_f - k_f + 1.0);
        let ln_pmf: f64 = ln_binomial_coef + k_f * self.p.ln() + (n_f - k_f) * (1.0 - self.p).ln();

        return ln_pmf.exp();
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.domain;
    }

    fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(self.sample_single(rng) as f64);
        }
        return ret;
    }
}
