//! Pure classification and match decisions.
//!
//! Nothing here awaits or invokes user callables.

mod classify;
mod decide;

pub use classify::{Kind, classify, is_absent, is_callable, is_pending, is_resolvable, is_scalar};
pub use decide::decide;
