use tracing::trace;

use crate::core::{classify, is_absent};
use crate::data::{Scalar, Settled, Spec, Value};
use crate::error::{Error, Result};

/// Run an action and normalize its outcome.
///
/// A scalar action is returned as is and never sees `params`. A callable
/// action is called with `params`; a void or null result becomes `None`, a
/// pending result is awaited. A pending action is awaited directly.
pub async fn dispatch_action(action: &Spec, params: &[Scalar]) -> Result<Option<Scalar>> {
    match action {
        Spec::Scalar(s) => Ok(Some(s.clone())),
        Spec::Pending(p) => settle(p.wait().await),
        Spec::Callable(f) => match f.call(params) {
            produced if is_absent(&produced) => Ok(None),
            Value::Scalar(s) => Ok(Some(s)),
            Value::Pending(p) => settle(p.wait().await),
            other => {
                trace!(result = ?classify(&other), "action returned an unusable value");
                Err(Error::InvalidActionResult)
            }
        },
    }
}

fn settle(settled: Settled) -> Result<Option<Scalar>> {
    settled.map_err(Error::Rejected)
}
