//! Euclid contains the usefull math functions used trough the library.
//!
//! Mainly the [ln_gamma] function and the
//! [regularized lower incomplete gamma function](lower_incomplete_gamma_regularized)
//! (wich gives us a closed form cdf for the
//! [chi-squared distribution](crate::distributions::ChiSquared)), and the
//! [rounding contract](round_to_digits) of the P values.

use crate::configuration::incomplete_gamma;

/// The coeffitients of the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// with `g = 7` and `n = 9`.
const LANCZOS_COEFFITIENTS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// `ln(2 * pi) / 2`
const HALF_LN_TWO_PI: f64 = 0.91893853320467274178;

/// Computes the natural logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function)
/// at `x`.
///
/// We use the log because the gamma function grows extremely fast (`gamma(x)`
/// overflows an f64 arround `x = 171.6`) and the values we actually need are
/// ratios of gammas, wich are computed more safely as differences of logs.
///
/// Uses the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// (`g = 7`, 9 coeffitients) with the reflection formula for `x < 0.5`.
///
/// **Panicks** if `x` is a NaN. Returns `inf` for `x = 0.0` and for the
/// negative integers (the poles of the gamma function).
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    assert!(!x.is_nan(), "Tried to evaluate ln_gamma with a NaN value. \n");

    if x < 0.5 {
        // Reflection formula:
        // gamma(x) * gamma(1 - x) = pi / sin(pi * x)
        // ln_gamma(x) = ln(pi / |sin(pi * x)|) - ln_gamma(1 - x)
        let sin_pi_x: f64 = (std::f64::consts::PI * x).sin();
        if sin_pi_x == 0.0 {
            // pole at 0 and the negative integers
            return f64::INFINITY;
        }
        return (std::f64::consts::PI / sin_pi_x.abs()).ln() - ln_gamma(1.0 - x);
    }

    let z: f64 = x - 1.0;
    let mut sum: f64 = LANCZOS_COEFFITIENTS[0];
    for (i, coeffitient) in LANCZOS_COEFFITIENTS.iter().enumerate().skip(1) {
        sum += coeffitient / (z + i as f64);
    }

    let base: f64 = z + 7.5;
    return HALF_LN_TWO_PI + (z + 0.5) * base.ln() - base + sum.ln();
}

/// Computes the [regularized lower incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function#Regularized_gamma_functions_and_Poisson_random_variables)
/// `P(a, x) = lower_gamma(a, x) / gamma(a)`.
///
/// `P(a, x)` goes from 0 (at `x = 0`) to 1 (as `x -> inf`). It is the cdf of a
/// [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution) with
/// shape `a` and scale 1, wich also gives the cdf of the
/// [chi-squared distribution](crate::distributions::ChiSquared):
///
/// > `ChiSquaredCdf(x | k) = P(k/2, x/2)`
///
/// Requieres `0.0 < a`. Returns `0.0` for `x <= 0.0`.
///
/// For `x < a + 1` the series expansion converges fast, otherwise we evaluate
/// the continued fraction of the complement `Q(a, x)` with the modified
/// Lentz's method and return `1 - Q(a, x)`.
///
/// **Panicks** if `a` or `x` is a NaN or if `a <= 0.0`.
#[must_use]
pub fn lower_incomplete_gamma_regularized(a: f64, x: f64) -> f64 {
    assert!(
        !a.is_nan() && !x.is_nan(),
        "Tried to evaluate the incomplete gamma function with a NaN value. \n"
    );
    assert!(
        0.0 < a,
        "Tried to evaluate the incomplete gamma function with a non-positive shape. \n"
    );

    if x <= 0.0 {
        return 0.0;
    }

    // exp(-x + a*ln(x) - ln_gamma(a)), the prefactor of both expansions
    let ln_prefactor: f64 = -x + a * x.ln() - ln_gamma(a);
    let prefactor: f64 = ln_prefactor.exp();

    if x < a + 1.0 {
        // Series expansion:
        // P(a, x) = prefactor * sumatory{n = 0 -> inf} x^n / (a * (a+1) * ... * (a+n))
        let mut term: f64 = 1.0 / a;
        let mut sum: f64 = term;
        let mut denominator: f64 = a;

        for _ in 0..incomplete_gamma::MAX_ITERATIONS {
            denominator += 1.0;
            term = term * x / denominator;
            sum += term;
            if term.abs() < sum.abs() * incomplete_gamma::CONVERGENCE_EPSILON {
                break;
            }
        }

        return (prefactor * sum).clamp(0.0, 1.0);
    }

    // Continued fraction for the complement (modified Lentz's method):
    // Q(a, x) = prefactor / (x + 1 - a - 1/(x + 3 - a - 2*(2 - a)/(x + 5 - a - ...)))
    let tiny: f64 = incomplete_gamma::LENTZ_TINY;

    let mut b: f64 = x + 1.0 - a;
    let mut c: f64 = 1.0 / tiny;
    let mut d: f64 = 1.0 / b;
    let mut fraction: f64 = d;

    for i in 1..incomplete_gamma::MAX_ITERATIONS {
        let i_f: f64 = i as f64;
        let numerator: f64 = -i_f * (i_f - a);
        b += 2.0;

        d = numerator * d + b;
        if d.abs() < tiny {
            d = tiny;
        }
        c = b + numerator / c;
        if c.abs() < tiny {
            c = tiny;
        }

        d = 1.0 / d;
        let delta: f64 = d * c;
        fraction = fraction * delta;

        if (delta - 1.0).abs() < incomplete_gamma::CONVERGENCE_EPSILON {
            break;
        }
    }

    let q: f64 = prefactor * fraction;
    return (1.0 - q).clamp(0.0, 1.0);
}

/// Rounds `x` to `digits` decimal places.
///
/// This is the rounding contract of every P value returned by the library.
/// The value is scaled by `10^digits`, rounded with [f64::round] and scaled
/// back. [f64::round] rounds ties **half away from zero**:
///
/// > `round_to_digits(0.00125, 4) == 0.0013`
/// > `round_to_digits(-0.00125, 4) == -0.0013`
///
/// (up to the usual caveat that not every decimal fraction is representable
/// exactly in binary)
#[must_use]
pub fn round_to_digits(x: f64, digits: u32) -> f64 {
    let scale: f64 = 10.0_f64.powi(digits as i32);
    return (x * scale).round() / scale;
}
