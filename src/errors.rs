use thiserror::Error;

/// An enum that indicates what went wrong when constructing or evaluating
/// a distribution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvStatError {
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// The a number did not fullfill the conditions of the function.
    /// Maybe it was infinite when it was not allowed, was negative when the function
    /// only takes positive number, or was a big numer when the function asks for a
    /// probability.
    #[error(
        "The a number did not fullfill the conditions of the function. Maybe it was infinite when it was not allowed, was negative when the function only takes positive number, or was a big numer when the function asks for a probability. "
    )]
    InvalidNumber,
    /// There was an error when performing some numerical computation. Overflow/underflow/division by 0
    #[error(
        "There was an error when performing some numerical computation. Overflow/underflow/division by 0"
    )]
    NumericalError,
}

/// An enum that indicates what went wrong with a goodness of fit test.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TestError {
    /// A NaN (Not a Number) was found in the input. (Or maybe `+- inf` depending on the function)
    #[error(
        "A NaN (Not a Number) was found in the input. (Or maybe `+- inf` depending on the function)"
    )]
    NanErr,
    /// There were not enough samples to do the operation.
    #[error("There were not enough samples to do the operation. ")]
    NotEnoughSamples,
    /// The arguments violated some of the function preconditions.
    #[error("The arguments violated some of the function preconditions. ")]
    InvalidArguments,
    /// The number of simulations must be stricly positive.
    #[error("The number of simulations must be stricly positive. ")]
    InvalidSimulationCount,
    /// The degrees of freedom of the test were less than 1. This happens when
    /// `number_of_bins - params - 1 < 1`.
    #[error(
        "The degrees of freedom of the test were less than 1 (`number_of_bins - params - 1 < 1`). "
    )]
    InvalidDegreesOfFreedom,
    /// The probability of the given bin is 0 but the observed frequency is not.
    /// Computing the statistic would requiere a division by 0. Remove the bin
    /// from the support or use a pmf that assigns it non-zero probability.
    #[error(
        "The probability of bin {0} is 0, the expected count is 0 and the statistic is undefined (division by 0). "
    )]
    ZeroProbabilityBin(usize),
    /// During a fixed margin simulation, the conditional probability of the
    /// given bin exceeded 1 by more than the drift tolerance. The probability
    /// vector probably does not sum to 1.
    #[error(
        "The conditional probability of bin {0} exceeded 1 during the simulation. The probability vector probably does not sum to 1. "
    )]
    ConditionalProbability(usize),
    /// The external distribution estimator failed to fit the sample. The error
    /// is propagated to the caller and the estimate is never retried.
    #[error("The distribution estimator could not fit the sample: {0} ")]
    EstimatorFailure(String),
}
