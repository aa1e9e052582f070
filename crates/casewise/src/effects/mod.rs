//! Resolution steps that call user code and await.
//!
//! Each step is a free async function over borrowed specifications, so a
//! shared case list can be resolved by any number of callers at once.

mod action;
mod case;
mod switch;

pub use action::dispatch_action;
pub use case::{evaluate_case, resolve_case};
pub use switch::resolve_switch;
