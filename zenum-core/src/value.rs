// Primitive values held by enumeration constants

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A primitive constant value
///
/// `PartialEq` is exact equality: both sides must be the same kind with an
/// equal payload, so `Int(1) != Double(1.0)`. Loose matching goes through
/// [`Value::loose_eq`] and is only used while validating candidates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
}

/// Rule deciding when a candidate loosely equals a declared constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coercion {
    /// Exact equality only
    Exact,
    /// Exact equality, plus integers matching integral doubles of the same
    /// magnitude. Strings, booleans and null never coerce.
    #[default]
    Numeric,
}

// 2^63 as a double; every double at or above it overflows i64.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Value {
    /// Short name of the value kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Compare under the given coercion rule
    pub fn loose_eq(&self, other: &Value, coercion: Coercion) -> bool {
        match (coercion, self, other) {
            (_, a, b) if a == b => true,
            (Coercion::Numeric, Value::Int(i), Value::Double(d))
            | (Coercion::Numeric, Value::Double(d), Value::Int(i)) => int_matches_double(*i, *d),
            _ => false,
        }
    }
}

fn int_matches_double(int: i64, double: f64) -> bool {
    double.is_finite()
        && double.fract() == 0.0
        && double >= i64::MIN as f64
        && double < I64_UPPER
        && double as i64 == int
}

/// Integers must fit in i64. A larger integer is an error, never a double.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a boolean, an i64 integer, a double or a string")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Int(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        i64::try_from(n)
            .map(Value::Int)
            .map_err(|_| E::custom(format!("integer {} is out of range for i64", n)))
    }

    fn visit_f64<E: de::Error>(self, d: f64) -> Result<Value, E> {
        Ok(Value::Double(d))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::Str(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::Str(s))
    }
}

/// String form of the value, not its constant name
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(d) => write!(f, "{}", d),
            Value::Str(s) => f.write_str(s),
        }
    }
}

// Convenience From implementations for declaring constants

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Value::Double(f64::from(d))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
