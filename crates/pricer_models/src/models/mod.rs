//! Stochastic process models.
//!
//! - [`process`]: the `LognormalProcessModel` and `SimulatedProcess` traits
//!   connecting model specifications to discretisation schemes
//! - [`hybrid`]: the three-factor cross-currency model
//!
//! Models are paired with schemes through generics; there is no runtime
//! downcasting between model kinds.

pub mod hybrid;
pub mod process;

pub use process::{LognormalProcessModel, SimulatedProcess};
