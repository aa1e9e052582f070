use crate::data::Value;

/// The shape of a [`Value`].
///
/// Exactly one kind holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Absent,
    Scalar,
    Callable,
    Pending,
}

/// Classify a value. The absent check runs first; every other kind
/// assumes a present value.
pub fn classify(value: &Value) -> Kind {
    if is_absent(value) {
        return Kind::Absent;
    }
    match value {
        Value::Scalar(_) => Kind::Scalar,
        Value::Callable(_) => Kind::Callable,
        Value::Pending(_) => Kind::Pending,
        Value::Undefined | Value::Null => Kind::Absent,
    }
}

pub fn is_absent(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Null)
}

pub fn is_scalar(value: &Value) -> bool {
    !is_absent(value) && matches!(value, Value::Scalar(_))
}

pub fn is_callable(value: &Value) -> bool {
    !is_absent(value) && matches!(value, Value::Callable(_))
}

pub fn is_pending(value: &Value) -> bool {
    !is_absent(value) && matches!(value, Value::Pending(_))
}

/// Scalar, callable, or pending.
pub fn is_resolvable(value: &Value) -> bool {
    is_scalar(value) || is_callable(value) || is_pending(value)
}
