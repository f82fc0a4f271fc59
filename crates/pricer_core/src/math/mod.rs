//! Numerical building blocks shared by the model and pricing layers.
//!
//! - [`random_variable`]: path-wise random variable algebra

pub mod random_variable;

pub use random_variable::RandomVariable;
