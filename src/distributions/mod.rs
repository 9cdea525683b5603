// Discrete
pub mod Bernoulli;
pub mod Binomial;
pub mod DiscreteUniform;

// Continuous
pub mod ChiSquared;
pub mod Uniform;
