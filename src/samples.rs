//! The [Samples] container stores the data collected for a test.
//!
//! It validates the data once at construction (no NaNs, no `+-inf`) so the
//! tests do not need to re-check it, and caches the statistics that have
//! already been computed.
//!

use crate::errors::AdvStatError;

#[derive(Debug)]
pub struct Samples {
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, Default)]
pub struct SampleProperties {
    /// the average of the sample
    ///
    /// Or None if `data.len() == 0`
    pub mean: Option<f64>,
    /// Determines if the data is sorted
    pub is_sorted: bool,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`), otherwise
    /// [AdvStatError::NanErr] is returned.
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, AdvStatError> {
        let invalid_contained: bool = data.iter().any(|f: &f64| !f.is_finite());
        if invalid_contained {
            return Err(AdvStatError::NanErr);
        }

        return Ok(Samples {
            data: Vec::from(data),
            properties: SampleProperties::empty(),
        });
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`), otherwise
    /// [AdvStatError::NanErr] is returned.
    ///
    /// If you don't want to move the data (to keep ownership of it),
    /// use [Samples::new].
    pub fn new_move(data: Vec<f64>) -> Result<Samples, AdvStatError> {
        let invalid_contained: bool = data.iter().any(|f: &f64| !f.is_finite());
        if invalid_contained {
            return Err(AdvStatError::NanErr);
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::empty(),
        });
    }

    /// Creates a new instance of [Samples] with the given `data`
    /// without validating it.
    ///
    /// ## Safety
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`). If it does,
    /// the methods of the returned [Samples] may return wrong results
    /// or panic.
    #[must_use]
    pub unsafe fn new_move_unchecked(data: Vec<f64>) -> Samples {
        return Samples {
            data,
            properties: SampleProperties::empty(),
        };
    }

    /// Gives a reference to the contained data.
    ///
    /// Note that the data may be sorted or not (depending on
    /// calls to other methods).
    #[must_use]
    pub fn peek_data(&self) -> &Vec<f64> {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    ///
    /// If you do not want to drop self, use [Samples::peek_data]
    #[must_use]
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Returns a reference to the internal field that contains
    /// all computed statistics ([SampleProperties]).
    #[must_use]
    pub fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// Returns [None] if there is not enough samples to compute the mean.
    ///
    /// If the mean was already computed, it just returns the value
    /// stored in [SampleProperties] and the operation is constant time.
    pub fn mean(&mut self) -> Option<f64> {
        // If it is already computed, jut return it.
        if self.properties.mean.is_some() {
            return self.properties.mean;
        }

        let n: usize = self.data.len();
        if n == 0 {
            // No mean for 0 samples.
            return None;
        }

        // actual computation of the mean.
        let mut mean: f64 = 0.0;

        for &s in &self.data {
            mean += s;
        }

        mean = mean / n as f64;

        // Store for use in the future.
        self.properties.mean = Some(mean);
        return Some(mean);
    }

    /// Forces to sort the internal data if it is not sorted already.
    #[inline]
    pub fn sort_data(&mut self) {
        if self.properties.is_sorted {
            return;
        }

        self.data.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());

        self.properties.is_sorted = true;
    }

    /// Returns a sorted **copy** of the data (ascending).
    ///
    /// The original data is left untouched, so the caller keeps seeing the
    /// samples in the order they were collected. Use [Samples::sort_data] if
    /// an in-place sort is acceptable.
    #[must_use]
    pub fn sorted_data(&self) -> Vec<f64> {
        let mut copy: Vec<f64> = self.data.clone();
        if !self.properties.is_sorted {
            copy.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        }
        return copy;
    }
}

impl SampleProperties {
    #[must_use]
    pub fn empty() -> SampleProperties {
        SampleProperties {
            mean: None,
            is_sorted: false,
        }
        // is_sorted: data MAY be actually sorted but we cannot assume it is.
    }
}
