use tracing::trace;

use crate::core::{classify, decide};
use crate::data::{Scalar, Settled, Spec, Value};
use crate::error::{Error, Result};

/// Resolve one case specification against the resolved switch.
///
/// A callable case receives the switch as its only argument. If it hands
/// back another callable, that one is called once more with the switch;
/// deeper nesting is rejected. A pending case is awaited without the switch.
pub async fn resolve_case(switch: &Scalar, case: &Spec, index: usize) -> Result<Scalar> {
    let args = std::slice::from_ref(switch);
    let produced = match case {
        Spec::Scalar(s) => return Ok(s.clone()),
        Spec::Pending(p) => return settle(p.wait().await, index),
        Spec::Callable(test) => match test.call(args) {
            Value::Callable(inner) => inner.call(args),
            other => other,
        },
    };

    match produced {
        Value::Scalar(s) => Ok(s),
        Value::Pending(p) => settle(p.wait().await, index),
        other => {
            trace!(index, result = ?classify(&other), "case resolved to an unusable value");
            Err(Error::InvalidCaseResult { index })
        }
    }
}

/// Resolve a case and decide whether it matches.
pub async fn evaluate_case(switch: &Scalar, case: &Spec, index: usize) -> Result<bool> {
    let resolved = resolve_case(switch, case, index).await?;
    let matched = decide(switch, &resolved);
    trace!(index, %resolved, matched, "case tested");
    Ok(matched)
}

fn settle(settled: Settled, index: usize) -> Result<Scalar> {
    match settled {
        Ok(Some(s)) => Ok(s),
        Ok(None) => Err(Error::InvalidCaseResult { index }),
        Err(rejection) => Err(Error::Rejected(rejection)),
    }
}
