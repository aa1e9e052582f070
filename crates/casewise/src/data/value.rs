//! Producer shapes: the raw [`Value`] a callable may return, and the
//! [`Spec`] accepted at each boundary of a selection.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};

use super::scalar::Scalar;
use crate::core::{Kind, classify};

/// Reason carried by a pending value that failed to settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection(Arc<str>);

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(Arc::from(reason.into()))
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a [`Pending`] settles to. `Ok(None)` is a void result.
pub type Settled = Result<Option<Scalar>, Rejection>;

/// A shared, cloneable awaitable.
///
/// Every clone observes the same settlement, so a pending case registered on
/// a reusable selection can be awaited by any number of resolutions.
#[derive(Clone)]
pub struct Pending(Shared<BoxFuture<'static, Settled>>);

impl Pending {
    /// Wrap a future producing a scalar.
    pub fn new<F, T>(fut: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Into<Scalar> + 'static,
    {
        Self::settle(fut.map(|v| Ok(Some(v.into()))))
    }

    /// Wrap a future producing nothing.
    pub fn unit<F>(fut: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self::settle(fut.map(|()| Ok(None)))
    }

    /// Wrap a fallible future; an `Err` becomes a [`Rejection`].
    pub fn try_new<F, T, E>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Into<Scalar> + 'static,
        E: fmt::Display + 'static,
    {
        Self::settle(fut.map(|r| match r {
            Ok(v) => Ok(Some(v.into())),
            Err(e) => Err(Rejection::new(e.to_string())),
        }))
    }

    pub fn ready(value: impl Into<Scalar>) -> Self {
        let settled: Settled = Ok(Some(value.into()));
        Self::settle(futures_util::future::ready(settled))
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        let settled: Settled = Err(Rejection::new(reason));
        Self::settle(futures_util::future::ready(settled))
    }

    /// Wrap a future that already yields a [`Settled`].
    pub fn settle<F>(fut: F) -> Self
    where
        F: Future<Output = Settled> + Send + 'static,
    {
        Self(fut.boxed().shared())
    }

    pub(crate) async fn wait(&self) -> Settled {
        self.0.clone().await
    }
}

impl fmt::Debug for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.peek() {
            Some(settled) => f.debug_tuple("Pending").field(settled).finish(),
            None => f.write_str("Pending(<unsettled>)"),
        }
    }
}

type CallFn = dyn Fn(&[Scalar]) -> Value + Send + Sync;

/// A shared callable taking any number of scalar arguments.
///
/// Switch thunks are called with no arguments, case tests with the resolved
/// switch, and actions with the invocation parameters.
#[derive(Clone)]
pub struct Callable(Arc<CallFn>);

impl Callable {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&[Scalar]) -> R + Send + Sync + 'static,
        R: Into<Value> + 'static,
    {
        Self(Arc::new(move |args: &[Scalar]| -> Value { f(args).into() }))
    }

    pub fn call(&self, args: &[Scalar]) -> Value {
        (self.0)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable { ... }")
    }
}

/// Any shape a producer can hand back.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A void result.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    Scalar(Scalar),
    Callable(Callable),
    Pending(Pending),
}

impl Value {
    /// Build a zero-argument callable.
    pub fn thunk<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<Value> + 'static,
    {
        Value::Callable(Callable::new(move |_: &[Scalar]| f()))
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self { Value::Scalar(s) }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self { Value::Callable(c) }
}

impl From<Pending> for Value {
    fn from(p: Pending) -> Self { Value::Pending(p) }
}

impl From<Spec> for Value {
    fn from(spec: Spec) -> Self {
        match spec {
            Spec::Scalar(s) => Value::Scalar(s),
            Spec::Callable(c) => Value::Callable(c),
            Spec::Pending(p) => Value::Pending(p),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self { Value::Undefined }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self { Value::Scalar(Scalar::from(v)) }
            }

            impl From<$ty> for Spec {
                fn from(v: $ty) -> Self { Spec::Scalar(Scalar::from(v)) }
            }
        )*
    };
}

value_from_scalar!(&str, String, &String, bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// A resolvable specification: the tagged union accepted for a switch, a
/// case, or an action.
#[derive(Debug, Clone)]
pub enum Spec {
    Scalar(Scalar),
    Callable(Callable),
    Pending(Pending),
}

/// The subject of a selection.
pub type Switch = Spec;
/// A case test paired with an action.
pub type Case = Spec;
/// What runs when a case wins.
pub type Action = Spec;

impl Spec {
    /// A switch producer called with no arguments.
    pub fn thunk<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<Value> + 'static,
    {
        Spec::Callable(Callable::new(move |_: &[Scalar]| f()))
    }

    /// A case test called with the resolved switch.
    ///
    /// Returning the literal `true` matches outright; any other result is
    /// compared with the switch.
    pub fn test<F, R>(f: F) -> Self
    where
        F: Fn(&Scalar) -> R + Send + Sync + 'static,
        R: Into<Value> + 'static,
    {
        Spec::Callable(Callable::new(move |args: &[Scalar]| match args.first() {
            Some(switch) => f(switch).into(),
            None => Value::Undefined,
        }))
    }

    /// An action called with the invocation parameters.
    pub fn call<F, R>(f: F) -> Self
    where
        F: Fn(&[Scalar]) -> R + Send + Sync + 'static,
        R: Into<Value> + 'static,
    {
        Spec::Callable(Callable::new(f))
    }

    pub fn pending(p: Pending) -> Self {
        Spec::Pending(p)
    }
}

impl From<Scalar> for Spec {
    fn from(s: Scalar) -> Self { Spec::Scalar(s) }
}

impl From<Callable> for Spec {
    fn from(c: Callable) -> Self { Spec::Callable(c) }
}

impl From<Pending> for Spec {
    fn from(p: Pending) -> Self { Spec::Pending(p) }
}

impl TryFrom<Value> for Spec {
    type Error = Value;

    /// Fails with the original value when it is absent.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match (classify(&value), value) {
            (Kind::Scalar, Value::Scalar(s)) => Ok(Spec::Scalar(s)),
            (Kind::Callable, Value::Callable(c)) => Ok(Spec::Callable(c)),
            (Kind::Pending, Value::Pending(p)) => Ok(Spec::Pending(p)),
            (_, other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_is_shared_across_clones() {
        let pending = Pending::new(async { "dog" });
        let other = pending.clone();
        assert_eq!(pending.wait().await, Ok(Some(Scalar::from("dog"))));
        assert_eq!(other.wait().await, Ok(Some(Scalar::from("dog"))));
        // Awaiting again after settlement yields the same value.
        assert_eq!(pending.wait().await, Ok(Some(Scalar::from("dog"))));
    }

    #[tokio::test]
    async fn test_pending_try_new_rejects() {
        let pending = Pending::try_new(async { Err::<i32, _>("token expired") });
        assert_eq!(pending.wait().await, Err(Rejection::new("token expired")));
    }

    #[tokio::test]
    async fn test_pending_unit_settles_void() {
        assert_eq!(Pending::unit(async {}).wait().await, Ok(None));
    }

    #[test]
    fn test_callable_receives_arguments() {
        let double = Callable::new(|args: &[Scalar]| args[0].as_f64().map(|n| n * 2.0));
        assert!(matches!(double.call(&[Scalar::from(4)]), Value::Scalar(Scalar::Num(n)) if n == 8.0));
        let nothing = Callable::new(|_: &[Scalar]| ());
        assert!(matches!(nothing.call(&[]), Value::Undefined));
    }

    #[test]
    fn test_option_maps_to_null() {
        assert!(matches!(Value::from(None::<Scalar>), Value::Null));
        assert!(matches!(Value::from(Some("x")), Value::Scalar(_)));
    }

    #[test]
    fn test_spec_rejects_absent_values() {
        assert!(Spec::try_from(Value::Null).is_err());
        assert!(Spec::try_from(Value::Undefined).is_err());
        assert!(matches!(Spec::try_from(Value::from(3)), Ok(Spec::Scalar(_))));
    }

    #[test]
    fn test_spec_conversion_follows_classification() {
        let samples = vec![
            Value::Undefined,
            Value::Null,
            Value::from("dog"),
            Value::from(false),
            Value::thunk(|| 1),
            Value::from(Pending::ready(2)),
        ];
        for value in samples {
            let kind = classify(&value);
            match Spec::try_from(value) {
                Ok(Spec::Scalar(_)) => assert_eq!(kind, Kind::Scalar),
                Ok(Spec::Callable(_)) => assert_eq!(kind, Kind::Callable),
                Ok(Spec::Pending(_)) => assert_eq!(kind, Kind::Pending),
                Err(_) => assert_eq!(kind, Kind::Absent),
            }
        }
    }

    #[test]
    fn test_case_test_passes_switch() {
        let case = Spec::test(|x: &Scalar| x == &Scalar::from("test"));
        let Spec::Callable(c) = case else { panic!("expected callable") };
        assert!(matches!(c.call(&[Scalar::from("test")]), Value::Scalar(Scalar::Bool(true))));
        assert!(matches!(c.call(&[Scalar::from("other")]), Value::Scalar(Scalar::Bool(false))));
    }
}
