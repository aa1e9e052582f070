//! Immutable data types for selections.
//!
//! Scalars, producer shapes, and configuration. Nothing in this module awaits
//! or calls user code.

pub mod options;
pub mod scalar;
pub mod value;

pub use options::{DefaultParams, Event, Phase, SelectOptions};
pub use scalar::Scalar;
pub use value::{Action, Callable, Case, Pending, Rejection, Settled, Spec, Switch, Value};
