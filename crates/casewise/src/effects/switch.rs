use tracing::trace;

use crate::core::classify;
use crate::data::{Scalar, Settled, Spec, Value};
use crate::error::{Error, Result};

/// Resolve a switch specification to a single scalar.
///
/// A thunk is called with no arguments and its result awaited if pending.
/// A thunk returning another callable is not followed.
pub async fn resolve_switch(switch: &Spec) -> Result<Scalar> {
    match switch {
        Spec::Scalar(s) => Ok(s.clone()),
        Spec::Pending(p) => settle(p.wait().await),
        Spec::Callable(thunk) => match thunk.call(&[]) {
            Value::Scalar(s) => Ok(s),
            Value::Pending(p) => settle(p.wait().await),
            other => {
                trace!(result = ?classify(&other), "switch thunk returned an unusable value");
                Err(Error::InvalidSwitchResult)
            }
        },
    }
}

fn settle(settled: Settled) -> Result<Scalar> {
    match settled {
        Ok(Some(s)) => Ok(s),
        Ok(None) => Err(Error::InvalidSwitchResult),
        Err(rejection) => Err(Error::Rejected(rejection)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pending;

    #[tokio::test]
    async fn test_scalar_passes_through() {
        assert_eq!(resolve_switch(&Spec::from(5)).await.unwrap(), Scalar::from(5));
    }

    #[tokio::test]
    async fn test_thunk_and_pending_shapes() {
        let thunk = Spec::thunk(|| "dog");
        assert_eq!(resolve_switch(&thunk).await.unwrap(), Scalar::from("dog"));

        let async_thunk = Spec::thunk(|| Pending::new(async { "dog" }));
        assert_eq!(resolve_switch(&async_thunk).await.unwrap(), Scalar::from("dog"));

        let pending = Spec::from(Pending::new(async { 7 }));
        assert_eq!(resolve_switch(&pending).await.unwrap(), Scalar::from(7));
    }

    #[tokio::test]
    async fn test_nested_thunk_is_not_followed() {
        let nested = Spec::thunk(|| Value::thunk(|| 1));
        assert!(matches!(resolve_switch(&nested).await, Err(Error::InvalidSwitchResult)));
    }

    #[tokio::test]
    async fn test_void_results_fail() {
        let void = Spec::thunk(|| ());
        assert!(matches!(resolve_switch(&void).await, Err(Error::InvalidSwitchResult)));

        let null = Spec::thunk(|| None::<Scalar>);
        assert!(matches!(resolve_switch(&null).await, Err(Error::InvalidSwitchResult)));

        let settles_void = Spec::from(Pending::unit(async {}));
        assert!(matches!(resolve_switch(&settles_void).await, Err(Error::InvalidSwitchResult)));
    }

    #[tokio::test]
    async fn test_rejection_surfaces() {
        let rejected = Spec::from(Pending::rejected("offline"));
        let err = resolve_switch(&rejected).await.unwrap_err();
        assert_eq!(err.to_string(), "offline");
    }
}
