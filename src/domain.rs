//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for the pmf or cdf of the distributions (see
//! [crate::distribution_trait]). It has 2 variants:
//!  - [DiscreteDomain]
//!  - [ContinuousDomain]
//!
//! Discrete domains are always **finite** here: a goodness of fit test bins
//! the data into finitely many categories, so the supports we work with are
//! either an integer range or an explicit list of values.
//!

use core::f64;

/// The bounds returned for an empty domain: `(-0.0, 0.0)`.
pub const DEFAULT_EMPTY_DOMAIN_BOUNDS: (f64, f64) = (-0.0, 0.0);

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) composed of
/// finitely many elements.
///
/// [DiscreteDomain] assumes that most discrete domains only include integers.
/// If your domain does not fit this description, you may be interested on the
/// [DiscreteDomain::Custom] variant, wich allows you to manually indicate the
/// values you want to include on your domain.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DiscreteDomain {
    /// All the integers in the range [.0, .1] (**both** inclusive).
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(i64, i64),
    /// Detemine manually at wich points can this function be evaluated.
    ///
    /// This variant has the following **invariants**:
    ///  - No infinities (either positive or negative)
    ///  - No NaNs
    ///  - No repeated elements
    ///  - The values in the vector must be sorted
    ///
    /// Use [DiscreteDomain::new_discrete_custom] when creating this variant to ensure
    /// all the invariants are fullfilled.
    Custom(Vec<f64>),
    /// The degenerate empty variant (also what [Default] gives).
    #[default]
    Empty,
}

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
    /// All the numbers until the given value.
    To(f64),
}

impl DiscreteDomain {
    /// Create a domain composed only by the given `values` ([DiscreteDomain::Custom]).
    /// This method makes sure to fullfill the necessary invariants:
    ///  - No infinities (either positive or negative)
    ///  - No NaNs
    ///  - No repeated elements
    ///  - The values in the vector must be sorted
    #[must_use]
    pub fn new_discrete_custom(values: &[f64]) -> Self {
        let mut points: Vec<f64> = values
            .iter()
            .copied()
            .filter(|&x| x.is_finite())
            .collect::<Vec<f64>>();
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());

        // remove duplicate elements. (will remove all because `points` is sorted).
        points.dedup();

        return DiscreteDomain::Custom(points);
    }

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            DiscreteDomain::Range(min, max) => {
                if x.fract() != 0.0 {
                    // the value is fractional, but the range only includes integers
                    return false;
                }
                let x_int: i64 = x as i64;
                return (*min <= x_int) && (x_int <= *max);
            }
            DiscreteDomain::Custom(vec) => {
                return vec
                    .binary_search_by(|other| other.partial_cmp(&x).unwrap())
                    .is_ok();
            }
            DiscreteDomain::Empty => return false,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// It is guaranteed that return.0 <= return.1. The values themselves
    /// are included in the domain.
    ///
    /// If the domain is empty, [DEFAULT_EMPTY_DOMAIN_BOUNDS] = `(-0.0, 0.0)` is returned.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            DiscreteDomain::Range(min, max) => (*min as f64, *max as f64),
            DiscreteDomain::Custom(vec) => match vec.first() {
                Some(first) => (*first, *vec.last().unwrap()),
                None => DEFAULT_EMPTY_DOMAIN_BOUNDS,
            },
            DiscreteDomain::Empty => DEFAULT_EMPTY_DOMAIN_BOUNDS,
        }
    }

    /// Returns the number of elements in the domain.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DiscreteDomain::Range(min, max) => (max - min + 1).max(0) as usize,
            DiscreteDomain::Custom(vec) => vec.len(),
            DiscreteDomain::Empty => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Returns an iterator that iterates trough all the elements in the
    /// domain, in increasing order.
    #[must_use]
    pub fn iter(&self) -> DiscreteDomainIterator<'_> {
        return DiscreteDomainIterator {
            domain: self,
            index: 0,
        };
    }
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, *max),
        }
    }
}

pub struct DiscreteDomainIterator<'a> {
    domain: &'a DiscreteDomain,
    index: usize,
}

impl Iterator for DiscreteDomainIterator<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let i: usize = self.index;
        if self.domain.len() <= i {
            return None;
        }
        self.index += 1;

        match self.domain {
            DiscreteDomain::Range(min, _) => return Some((*min + i as i64) as f64),
            DiscreteDomain::Custom(vec) => return vec.get(i).copied(),
            DiscreteDomain::Empty => return None,
        }
    }
}
