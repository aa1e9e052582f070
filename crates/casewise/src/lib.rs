//! Ordered, async-aware case matching.
//!
//! A selection pairs cases with actions, tests them in insertion order
//! against a switch value, and dispatches the action of the first case that
//! matches, falling back to a default. Switches, cases, and actions may each
//! be a plain scalar, a callable, or a pending computation; all three are
//! resolved uniformly.
//!
//! # Architecture
//!
//! - [`data`] - Scalars, producer shapes, and options
//! - [`core`] - Pure classification and the match decision
//! - [`effects`] - Switch, case, and action resolution
//! - [`holder`] - Case storage and the first-match-wins scan
//! - [`builder`] - The `on` / `otherwise` fluent API
//!
//! # Example
//!
//! ```
//! use casewise::{select, select_on, Scalar, Spec};
//!
//! # tokio_test_block(async {
//! let sound = select_on("dog")?
//!     .on("cat", "meow")
//!     .on("dog", "woof")
//!     .otherwise("nothing")
//!     .exe()
//!     .await?;
//! assert_eq!(sound, Some(Scalar::from("woof")));
//!
//! let describe = select()
//!     .on(1, Spec::call(|p: &[Scalar]| format!("{} is one", p[0])))
//!     .otherwise(Spec::call(|p: &[Scalar]| format!("{} is other", p[0])));
//! assert_eq!(describe.match_with(1, [1]).await?, Some(Scalar::from("1 is one")));
//! assert_eq!(describe.match_with(9, [9]).await?, Some(Scalar::from("9 is other")));
//! # Ok::<(), casewise::Error>(())
//! # });
//! # fn tokio_test_block<F: std::future::Future<Output = Result<(), casewise::Error>>>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f).unwrap();
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod data;
pub mod effects;
mod error;
pub mod holder;

pub use builder::{Entry, Post, PostBuilder, Sealed, Sequence, SequenceBuilder, entry, select, select_on, select_with};
pub use data::{
    Action, Callable, Case, DefaultParams, Event, Pending, Phase, Rejection, Scalar, SelectOptions, Settled, Spec,
    Switch, Value,
};
pub use error::{Error, ErrorKind, Result};
pub use holder::{CaseList, DeferredHolder, ImmediateHolder};
