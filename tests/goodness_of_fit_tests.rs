use GoodnessOfFit::configuration::PROBABILITY_SUM_TOLERANCE;
use GoodnessOfFit::distribution_trait::DiscreteDistribution;
use GoodnessOfFit::distributions::Binomial::Binomial;
use GoodnessOfFit::distributions::DiscreteUniform::DiscreteUniform;
use GoodnessOfFit::distributions::Uniform::{STD_UNIFORM, Uniform};
use GoodnessOfFit::errors::TestError;
use GoodnessOfFit::goodness_of_fit::*;
use GoodnessOfFit::samples::Samples;
use assert_approx_eq::assert_approx_eq;
use rand::{SeedableRng, rngs::StdRng};

const UNIFORM_3: f64 = 1.0 / 3.0;

/// The sample of the worked die example: 8 throws of a 3 sided die.
/// Grouped on the support [1, 2, 3] it gives the frequencies [3, 2, 3].
fn die_sample() -> Samples {
    return Samples::new(&[1.0, 1.0, 2.0, 3.0, 3.0, 3.0, 1.0, 2.0])
        .expect("The sample contains no NaNs");
}

#[cfg(test)]
mod grouping_tests {
    use super::*;

    #[test]
    fn group_sample_counts_and_probabilities() {
        let data: Samples = die_sample();
        let support: [f64; 3] = [1.0, 2.0, 3.0];

        let (probs, freqs): (Vec<f64>, Vec<u64>) =
            group_sample(&data, |_| UNIFORM_3, &support);

        assert_eq!(freqs, vec![3, 2, 3]);
        assert_eq!(freqs.iter().sum::<u64>() as usize, data.count());

        let total_probability: f64 = probs.iter().sum::<f64>();
        assert!((total_probability - 1.0).abs() < PROBABILITY_SUM_TOLERANCE);
    }

    #[test]
    fn group_sample_drops_values_outside_the_support() {
        let data: Samples =
            Samples::new(&[1.0, 2.0, 7.0, 2.0]).expect("The sample contains no NaNs");
        let support: [f64; 2] = [1.0, 2.0];

        let (_, freqs): (Vec<f64>, Vec<u64>) = group_sample(&data, |_| 0.5, &support);

        // the 7.0 matches no bin
        assert_eq!(freqs, vec![1, 2]);
        assert!((freqs.iter().sum::<u64>() as usize) < data.count());
    }

    #[test]
    fn group_sample_empty_support() {
        let data: Samples = die_sample();
        let (probs, freqs): (Vec<f64>, Vec<u64>) = group_sample(&data, |_| 1.0, &[]);

        assert!(probs.is_empty());
        assert!(freqs.is_empty());
    }
}

#[cfg(test)]
mod pearson_statistic_tests {
    use super::*;

    #[test]
    fn exact_match_gives_zero() {
        let probs: [f64; 2] = [0.5, 0.5];
        let freqs: [u64; 2] = [5, 5];

        let statistic: f64 = pearson_statistic(&probs, &freqs).expect("Valid inputs");
        assert_eq!(statistic, 0.0);
    }

    #[test]
    fn statistic_is_non_negative() {
        let probs: [f64; 3] = [UNIFORM_3; 3];
        let freqs: [u64; 3] = [8, 0, 0];

        let statistic: f64 = pearson_statistic(&probs, &freqs).expect("Valid inputs");
        assert!(0.0 < statistic);
    }

    #[test]
    fn worked_die_example() {
        // n = 8, expected count 8/3 per bin:
        // T = ((3 - 8/3)^2 + (2 - 8/3)^2 + (3 - 8/3)^2) / (8/3) = 0.25
        let probs: [f64; 3] = [UNIFORM_3; 3];
        let freqs: [u64; 3] = [3, 2, 3];

        let statistic: f64 = pearson_statistic(&probs, &freqs).expect("Valid inputs");
        assert_approx_eq!(statistic, 0.25, 1e-12_f64);
    }

    #[test]
    fn no_observations_is_a_perfect_fit() {
        let probs: [f64; 3] = [UNIFORM_3; 3];
        let freqs: [u64; 3] = [0, 0, 0];

        let statistic: f64 = pearson_statistic(&probs, &freqs).expect("Valid inputs");
        assert_eq!(statistic, 0.0);
    }

    #[test]
    fn zero_probability_bin_is_reported() {
        let probs: [f64; 3] = [0.5, 0.5, 0.0];
        let freqs: [u64; 3] = [4, 5, 0];

        let result: Result<f64, TestError> = pearson_statistic(&probs, &freqs);
        assert_eq!(result.unwrap_err(), TestError::ZeroProbabilityBin(2));
    }

    #[test]
    fn invalid_arguments() {
        // mismatched lengths
        let result: Result<f64, TestError> = pearson_statistic(&[0.5, 0.5], &[1, 2, 3]);
        assert_eq!(result.unwrap_err(), TestError::InvalidArguments);

        // empty
        let result: Result<f64, TestError> = pearson_statistic(&[], &[]);
        assert_eq!(result.unwrap_err(), TestError::InvalidArguments);

        // negative probability
        let result: Result<f64, TestError> = pearson_statistic(&[1.5, -0.5], &[1, 2]);
        assert_eq!(result.unwrap_err(), TestError::InvalidArguments);

        // NaN probability
        let result: Result<f64, TestError> = pearson_statistic(&[0.5, f64::NAN], &[1, 2]);
        assert_eq!(result.unwrap_err(), TestError::NanErr);
    }
}

#[cfg(test)]
mod pearson_chi2_tests {
    use super::*;

    #[test]
    fn worked_die_example() {
        // T = 0.25 with 2 degrees of freedom:
        // P = 1 - ChiSquaredCdf(0.25 | 2) = exp(-0.125) = 0.882496... -> 0.8825
        let probs: [f64; 3] = [UNIFORM_3; 3];
        let freqs: [u64; 3] = [3, 2, 3];

        let p: f64 = pearson_chi2()
            .probs(&probs)
            .freqs(&freqs)
            .call()
            .expect("Valid inputs");

        assert_approx_eq!(p, 0.8825, 1e-12_f64);
    }

    #[test]
    fn more_digits_less_rounding() {
        let probs: [f64; 3] = [UNIFORM_3; 3];
        let freqs: [u64; 3] = [3, 2, 3];

        let p: f64 = pearson_chi2()
            .probs(&probs)
            .freqs(&freqs)
            .digits(8)
            .call()
            .expect("Valid inputs");

        assert_approx_eq!(p, (-0.125_f64).exp(), 1e-8_f64);
    }

    #[test]
    fn perfect_fit_gives_p_value_one() {
        let probs: [f64; 4] = [0.25; 4];
        let freqs: [u64; 4] = [25, 25, 25, 25];

        let p: f64 = pearson_chi2()
            .probs(&probs)
            .freqs(&freqs)
            .call()
            .expect("Valid inputs");

        assert_eq!(p, 1.0);
    }

    #[test]
    fn estimated_parameters_reduce_the_degrees_of_freedom() {
        let probs: [f64; 3] = [UNIFORM_3; 3];
        let freqs: [u64; 3] = [3, 2, 3];

        // k = 3 and params = 2 leaves 0 degrees of freedom
        let result: Result<f64, TestError> = pearson_chi2()
            .probs(&probs)
            .freqs(&freqs)
            .params(2)
            .call();

        assert_eq!(result.unwrap_err(), TestError::InvalidDegreesOfFreedom);
    }

    #[test]
    fn bigger_statistic_gives_smaller_p_value() {
        let probs: [f64; 4] = [0.25; 4];
        let frequency_tables: [[u64; 4]; 4] = [
            [100, 100, 100, 100],
            [102, 98, 101, 99],
            [110, 90, 105, 95],
            [130, 70, 115, 85],
        ];

        let mut previous: f64 = f64::INFINITY;
        for freqs in &frequency_tables {
            let p: f64 = pearson_chi2()
                .probs(&probs)
                .freqs(freqs)
                .digits(10)
                .call()
                .expect("Valid inputs");

            assert!(p < previous);
            previous = p;
        }
    }

    #[test]
    fn loaded_die_is_rejected() {
        let probs: [f64; 6] = [1.0 / 6.0; 6];
        let freqs: [u64; 6] = [5, 8, 9, 8, 10, 20];

        let p: f64 = pearson_chi2()
            .probs(&probs)
            .freqs(&freqs)
            .call()
            .expect("Valid inputs");

        assert!(p < 0.05);
    }
}

#[cfg(test)]
mod pearson_simulate_tests {
    use super::*;

    #[test]
    fn zero_simulations_is_an_error() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);

        let result: Result<f64, TestError> = pearson_simulate()
            .sims(0)
            .probs(&[0.5, 0.5])
            .freqs(&[5, 5])
            .rng(&mut rng)
            .call();

        assert_eq!(result.unwrap_err(), TestError::InvalidSimulationCount);
    }

    #[test]
    fn one_simulation_gives_a_degenerate_p_value() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);

        let p: f64 = pearson_simulate()
            .sims(1)
            .probs(&[0.25; 4])
            .freqs(&[30, 20, 26, 24])
            .rng(&mut rng)
            .call()
            .expect("Valid inputs");

        assert!(p == 0.0 || p == 1.0);
    }

    #[test]
    fn minimal_statistic_gives_p_value_one() {
        // With n = 8 over 3 equiprobable bins, the frequencies [3, 2, 3] (and
        // its permutations) achieve the smallest possible statistic (0.25).
        // Every simulated statistic is therefore at least as big and the
        // Monte Carlo P value is exactly 1, regardless of the generator.
        let mut rng: StdRng = StdRng::seed_from_u64(2);

        let p: f64 = pearson_simulate()
            .sims(500)
            .probs(&[UNIFORM_3; 3])
            .freqs(&[3, 2, 3])
            .rng(&mut rng)
            .call()
            .expect("Valid inputs");

        assert_eq!(p, 1.0);
    }

    #[test]
    fn agrees_with_the_asymptotic_p_value_for_large_samples() {
        // n = 400 with expected counts of 100 per bin is comfortably inside
        // the asymptotic regime, so both P values should be close.
        let probs: [f64; 4] = [0.25; 4];
        let freqs: [u64; 4] = [110, 90, 105, 95];

        let asymptotic: f64 = pearson_chi2()
            .probs(&probs)
            .freqs(&freqs)
            .call()
            .expect("Valid inputs");

        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let simulated: f64 = pearson_simulate()
            .sims(100_000)
            .probs(&probs)
            .freqs(&freqs)
            .rng(&mut rng)
            .call()
            .expect("Valid inputs");

        assert!((asymptotic - simulated).abs() < 0.01);
    }

    #[test]
    fn bigger_statistic_gives_smaller_p_value() {
        let probs: [f64; 4] = [0.25; 4];
        let close_freqs: [u64; 4] = [102, 98, 101, 99];
        let far_freqs: [u64; 4] = [130, 70, 115, 85];

        let mut rng: StdRng = StdRng::seed_from_u64(4);
        let p_close: f64 = pearson_simulate()
            .sims(2000)
            .probs(&probs)
            .freqs(&close_freqs)
            .rng(&mut rng)
            .call()
            .expect("Valid inputs");

        let p_far: f64 = pearson_simulate()
            .sims(2000)
            .probs(&probs)
            .freqs(&far_freqs)
            .rng(&mut rng)
            .call()
            .expect("Valid inputs");

        assert!(p_far < p_close);
    }

    #[test]
    fn same_seed_same_p_value() {
        let probs: [f64; 3] = [0.2, 0.3, 0.5];
        let freqs: [u64; 3] = [25, 30, 45];

        let mut rng_a: StdRng = StdRng::seed_from_u64(42);
        let p_a: f64 = pearson_simulate()
            .sims(1000)
            .probs(&probs)
            .freqs(&freqs)
            .rng(&mut rng_a)
            .call()
            .expect("Valid inputs");

        let mut rng_b: StdRng = StdRng::seed_from_u64(42);
        let p_b: f64 = pearson_simulate()
            .sims(1000)
            .probs(&probs)
            .freqs(&freqs)
            .rng(&mut rng_b)
            .call()
            .expect("Valid inputs");

        assert_eq!(p_a, p_b);
    }

    #[test]
    fn probabilities_over_one_are_detected() {
        // [0.8, 0.8] sums to 1.6: the conditional probability of the second
        // bin is 0.8 / 0.2 = 4, far beyond floating point drift.
        let mut rng: StdRng = StdRng::seed_from_u64(5);

        let result: Result<f64, TestError> = pearson_simulate()
            .sims(100)
            .probs(&[0.8, 0.8])
            .freqs(&[5, 5])
            .rng(&mut rng)
            .call();

        assert_eq!(result.unwrap_err(), TestError::ConditionalProbability(1));
    }
}

#[cfg(test)]
mod parametric_bootstrap_tests {
    use super::*;

    /// Fits a Binomial with 3 trials (the MLE of `p` is `mean / 3`).
    fn binomial_3_estimator(data: &mut Samples) -> Result<Binomial, TestError> {
        let Some(mean) = data.mean() else {
            return Err(TestError::NotEnoughSamples);
        };

        let p: f64 = (mean / 3.0).clamp(0.0, 1.0);
        return Binomial::new(p, 3).map_err(|e| TestError::EstimatorFailure(e.to_string()));
    }

    #[test]
    fn from_sample_with_a_fixed_distribution_matches_the_direct_test() {
        // 60 throws of a (loaded) die against a fixed DiscreteUniform(1, 6):
        // the estimator ignores the data, so the asymptotic P value from the
        // sample must be identical to the one from the grouped frequencies.
        let mut data_vec: Vec<f64> = Vec::new();
        let freqs: [u64; 6] = [5, 8, 9, 8, 10, 20];
        for (face, &f) in freqs.iter().enumerate() {
            for _ in 0..f {
                data_vec.push((face + 1) as f64);
            }
        }
        let mut data: Samples = Samples::new_move(data_vec).expect("No NaNs");

        let estimator = |_: &mut Samples| -> Result<DiscreteUniform, TestError> {
            return DiscreteUniform::new(1, 6)
                .map_err(|e| TestError::EstimatorFailure(e.to_string()));
        };
        let support: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let p_from_sample: f64 = pearson_chi2_from_sample()
            .data(&mut data)
            .estimator(&estimator)
            .support(&support)
            .params(0)
            .call()
            .expect("Valid inputs");

        let p_direct: f64 = pearson_chi2()
            .probs(&[1.0 / 6.0; 6])
            .freqs(&freqs)
            .call()
            .expect("Valid inputs");

        assert_eq!(p_from_sample, p_direct);
    }

    #[test]
    fn bootstrap_p_value_is_a_probability_and_is_reproducible() {
        let mut generator_rng: StdRng = StdRng::seed_from_u64(10);
        let source: Binomial = Binomial::new(0.4, 3).expect("Valid parameters");
        let data_vec: Vec<f64> = source.sample_multiple(60, &mut generator_rng);

        let support: [f64; 4] = [0.0, 1.0, 2.0, 3.0];

        let mut data_a: Samples = Samples::new_move(data_vec.clone()).expect("No NaNs");
        let mut rng_a: StdRng = StdRng::seed_from_u64(11);
        let p_a: f64 = pearson_simulate_from_sample()
            .sims(500)
            .data(&mut data_a)
            .estimator(&binomial_3_estimator)
            .support(&support)
            .rng(&mut rng_a)
            .call()
            .expect("Valid inputs");

        assert!(0.0 <= p_a && p_a <= 1.0);

        let mut data_b: Samples = Samples::new_move(data_vec).expect("No NaNs");
        let mut rng_b: StdRng = StdRng::seed_from_u64(11);
        let p_b: f64 = pearson_simulate_from_sample()
            .sims(500)
            .data(&mut data_b)
            .estimator(&binomial_3_estimator)
            .support(&support)
            .rng(&mut rng_b)
            .call()
            .expect("Valid inputs");

        assert_eq!(p_a, p_b);
    }

    #[test]
    fn estimator_failures_are_propagated() {
        let mut data: Samples = Samples::new(&[0.0, 1.0, 2.0]).expect("No NaNs");
        let mut rng: StdRng = StdRng::seed_from_u64(12);

        let failing = |_: &mut Samples| -> Result<Binomial, TestError> {
            return Err(TestError::EstimatorFailure(String::from(
                "the optimizer did not converge",
            )));
        };

        let result: Result<f64, TestError> = pearson_simulate_from_sample()
            .sims(10)
            .data(&mut data)
            .estimator(&failing)
            .support(&[0.0, 1.0, 2.0])
            .rng(&mut rng)
            .call();

        assert!(matches!(
            result.unwrap_err(),
            TestError::EstimatorFailure(_)
        ));
    }

    #[test]
    fn empty_sample_is_an_error() {
        let mut data: Samples = Samples::new(&[]).expect("No NaNs");
        let mut rng: StdRng = StdRng::seed_from_u64(13);

        let result: Result<f64, TestError> = pearson_simulate_from_sample()
            .sims(10)
            .data(&mut data)
            .estimator(&binomial_3_estimator)
            .support(&[0.0, 1.0, 2.0, 3.0])
            .rng(&mut rng)
            .call();

        assert_eq!(result.unwrap_err(), TestError::NotEnoughSamples);
    }
}

#[cfg(test)]
mod kolmogorov_smirnov_tests {
    use super::*;

    /// `n` evenly spread points on (0, 1): the best possible agreement of a
    /// sample of that size with the standard uniform (D = 1/(2n)).
    fn uniform_quantiles(n: usize) -> Samples {
        let data: Vec<f64> = (0..n).map(|j| (j as f64 + 0.5) / n as f64).collect();
        return Samples::new_move(data).expect("No NaNs");
    }

    #[test]
    fn statistic_of_a_single_sample() {
        let data: Samples = Samples::new(&[0.5]).expect("No NaNs");

        let d: f64 = kolmogorov_smirnov_statistic(&data, &STD_UNIFORM).expect("Valid inputs");
        assert_approx_eq!(d, 0.5, 1e-12_f64);
    }

    #[test]
    fn statistic_of_evenly_spread_points() {
        let data: Samples = uniform_quantiles(50);

        let d: f64 = kolmogorov_smirnov_statistic(&data, &STD_UNIFORM).expect("Valid inputs");
        assert_approx_eq!(d, 0.01, 1e-12_f64);
    }

    #[test]
    fn statistic_does_not_depend_on_the_sample_order() {
        let shuffled: Samples =
            Samples::new(&[0.9, 0.1, 0.5, 0.3, 0.7]).expect("No NaNs");
        let sorted: Samples = Samples::new(&[0.1, 0.3, 0.5, 0.7, 0.9]).expect("No NaNs");

        let d_shuffled: f64 =
            kolmogorov_smirnov_statistic(&shuffled, &STD_UNIFORM).expect("Valid inputs");
        let d_sorted: f64 =
            kolmogorov_smirnov_statistic(&sorted, &STD_UNIFORM).expect("Valid inputs");

        assert_eq!(d_shuffled, d_sorted);

        // and the caller's data is left in its original order
        assert_eq!(shuffled.peek_data()[0], 0.9);
    }

    #[test]
    fn statistic_against_a_scaled_uniform() {
        let data: Samples = Samples::new(&[0.5]).expect("No NaNs");
        let uniform: Uniform = Uniform::new(0.0, 2.0).expect("Valid parameters");

        // cdf(0.5) = 0.25, so D = max(1 - 0.25, 0.25 - 0) = 0.75
        let d: f64 = kolmogorov_smirnov_statistic(&data, &uniform).expect("Valid inputs");
        assert_approx_eq!(d, 0.75, 1e-12_f64);
    }

    #[test]
    fn empty_sample_is_an_error() {
        let data: Samples = Samples::new(&[]).expect("No NaNs");

        let result: Result<f64, TestError> = kolmogorov_smirnov_statistic(&data, &STD_UNIFORM);
        assert_eq!(result.unwrap_err(), TestError::NotEnoughSamples);
    }

    #[test]
    fn well_specified_data_is_not_rejected() {
        let data: Samples = uniform_quantiles(50);
        let mut rng: StdRng = StdRng::seed_from_u64(20);

        let p: f64 = kolmogorov_smirnov_simulate()
            .sims(1000)
            .data(&data)
            .distribution(&STD_UNIFORM)
            .rng(&mut rng)
            .call()
            .expect("Valid inputs");

        // D = 0.01 is about as good as a sample of 50 can fit: essentially
        // every simulated sample does worse.
        assert!(0.5 < p);
    }

    #[test]
    fn mis_specified_data_is_rejected() {
        // 100 points all below 0.1, tested against the standard uniform
        let data_vec: Vec<f64> = (0..100).map(|j| (j as f64 + 0.5) / 1000.0).collect();
        let data: Samples = Samples::new_move(data_vec).expect("No NaNs");
        let mut rng: StdRng = StdRng::seed_from_u64(21);

        let p: f64 = kolmogorov_smirnov_simulate()
            .sims(1000)
            .data(&data)
            .distribution(&STD_UNIFORM)
            .rng(&mut rng)
            .call()
            .expect("Valid inputs");

        assert!(p < 0.05);
    }

    #[test]
    fn zero_simulations_is_an_error() {
        let data: Samples = uniform_quantiles(10);
        let mut rng: StdRng = StdRng::seed_from_u64(22);

        let result: Result<f64, TestError> = kolmogorov_smirnov_simulate()
            .sims(0)
            .data(&data)
            .distribution(&STD_UNIFORM)
            .rng(&mut rng)
            .call();

        assert_eq!(result.unwrap_err(), TestError::InvalidSimulationCount);
    }

    #[test]
    fn same_seed_same_p_value() {
        let data: Samples = uniform_quantiles(30);

        let mut rng_a: StdRng = StdRng::seed_from_u64(23);
        let p_a: f64 = kolmogorov_smirnov_simulate()
            .sims(500)
            .data(&data)
            .distribution(&STD_UNIFORM)
            .rng(&mut rng_a)
            .call()
            .expect("Valid inputs");

        let mut rng_b: StdRng = StdRng::seed_from_u64(23);
        let p_b: f64 = kolmogorov_smirnov_simulate()
            .sims(500)
            .data(&data)
            .distribution(&STD_UNIFORM)
            .rng(&mut rng_b)
            .call()
            .expect("Valid inputs");

        assert_eq!(p_a, p_b);
    }
}
