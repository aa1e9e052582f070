use std::fmt;

/// A concrete value that can be matched on or returned from an action.
///
/// Equality is strict: two scalars are equal only when they hold the same
/// variant and the same value. `Num(1.0)` never equals `Str("1")`, and
/// `Num(NAN)` never equals itself.
///
/// Every number is an `f64`. Integers beyond 2^53 lose precision on
/// conversion, so distinct large integers may compare equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Scalar {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// `true` only for the literal boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Scalar::Bool(true))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Num(n) if n.is_infinite() => f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" }),
            // Integral numbers print without a trailing ".0"
            Scalar::Num(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Scalar::Num(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self { Scalar::Str(s.to_owned()) }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self { Scalar::Str(s) }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self { Scalar::Str(s.clone()) }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self { Scalar::Bool(b) }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self { Scalar::Num(n) }
}

impl From<f32> for Scalar {
    fn from(n: f32) -> Self { Scalar::Num(f64::from(n)) }
}

macro_rules! scalar_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(n: $ty) -> Self { Scalar::Num(f64::from(n)) }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, u8, u16, u32);

impl From<i64> for Scalar {
    fn from(n: i64) -> Self { Scalar::Num(n as f64) }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self { Scalar::Num(n as f64) }
}

impl From<usize> for Scalar {
    fn from(n: usize) -> Self { Scalar::Num(n as f64) }
}

impl PartialEq<str> for Scalar {
    fn eq(&self, other: &str) -> bool { self.as_str() == Some(other) }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool { self.as_str() == Some(*other) }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool { self.as_f64() == Some(*other) }
}

impl PartialEq<i32> for Scalar {
    fn eq(&self, other: &i32) -> bool { self.as_f64() == Some(f64::from(*other)) }
}

impl PartialEq<bool> for Scalar {
    fn eq(&self, other: &bool) -> bool { self.as_bool() == Some(*other) }
}
