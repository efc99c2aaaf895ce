//! Relational-value adapter.
//!
//! [`ToValue`] turns a payload into a [`Value`] and [`FromValue`] reads one
//! back. The set of supported payload types is closed: scalars, timestamps,
//! durations (read only), byte strings and a handful of slice types which
//! travel as array literals. Payload types outside that set take part by
//! implementing the two traits themselves, or [`BinaryCodec`] through
//! [`Binary`].
//!
//! Reading accepts a fixed table of cross-family conversions:
//!
//! | from       | to |
//! |------------|----|
//! | bool       | bool, integers and floats (0/1), `String` (`true`/`false`) |
//! | int64      | integers (truncating cast), floats, bool (0/1 only), `String` |
//! | float64    | `f64`, `f32`, integers (whole numbers in range only), `String` (shortest round-trip form) |
//! | text       | integers and floats (parsed), bool, `String`, `Vec<u8>`, timestamps, durations, arrays |
//! | bytes      | `Vec<u8>`, `String` (UTF-8), [`Binary`] payloads, anything text converts to |
//! | timestamp  | timestamps, `String` (RFC 3339) |
//!
//! Any other pair fails with [`TristateError::Unsupported`].

use std::any::type_name;
use std::fmt;

// used for timestamps and durations
use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::array;
use crate::duration::parse_duration;
use crate::error::{Result, TristateError};
use crate::tristate::Tristate;
use crate::value::Value;

/// A payload that can be written as a relational value.
pub trait ToValue {
    fn to_value(&self) -> Result<Value>;
}

/// A payload that can be read from a relational value.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

fn unsupported<T>(value: &Value) -> TristateError {
    TristateError::unsupported(value.kind(), type_name::<T>())
}

fn text_of<T>(value: &Value) -> Result<&str> {
    match value.as_str() {
        Some(text) => Ok(text),
        None if matches!(value, Value::Bytes(_)) => {
            Err(TristateError::convert(value.kind(), type_name::<T>(), "invalid UTF-8"))
        }
        None => Err(unsupported::<T>(value)),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

// RFC 3339 first, then the layouts SQLite drivers commonly write
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(text) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(t.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .map(|t| t.and_utc())
}

// ------------- Containers -------------
impl<T: ToValue> ToValue for Tristate<T> {
    fn to_value(&self) -> Result<Value> {
        match self {
            Tristate::Present(value) => value.to_value(),
            Tristate::Absent | Tristate::Unset => Ok(Value::Null),
        }
    }
}
impl<T: FromValue> FromValue for Tristate<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Tristate::Absent),
            _ => T::from_value(value).map(Tristate::Present),
        }
    }
}

impl<T> Tristate<T> {
    /// Overwrites this container from a relational value. NULL makes it
    /// `Absent`. On error the container is left as it was.
    pub fn scan(&mut self, value: &Value) -> Result<()>
    where
        T: FromValue,
    {
        match Self::from_value(value) {
            Ok(scanned) => {
                *self = scanned;
                Ok(())
            }
            Err(error) => {
                debug!(from = value.kind(), to = type_name::<T>(), %error, "scan failed");
                Err(error)
            }
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value> {
        self.as_ref().map_or(Ok(Value::Null), ToValue::to_value)
    }
}
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            _ => T::from_value(value).map(Some),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}
impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

// ------------- Scalars -------------
impl ToValue for bool {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}
impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            Value::Int(i) => Err(TristateError::convert(value.kind(), "bool", format!("{} is not 0 or 1", i))),
            Value::Text(_) | Value::Bytes(_) => {
                let text = text_of::<bool>(value)?;
                parse_bool(text).ok_or_else(|| {
                    TristateError::convert(value.kind(), "bool", format!("invalid syntax {:?}", text))
                })
            }
            _ => Err(unsupported::<bool>(value)),
        }
    }
}

macro_rules! integers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Result<Value> {
                    i64::try_from(*self)
                        .map(Value::Int)
                        .map_err(|e| TristateError::Unencodable {
                            type_name: type_name::<$ty>(),
                            reason: e.to_string(),
                        })
                }
            }
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self> {
                    match value {
                        // narrowing keeps the low bits, like a cast from a wider column
                        Value::Int(i) => Ok(*i as $ty),
                        Value::Bool(b) => Ok(*b as $ty),
                        // REAL columns hand back whole numbers as floats
                        Value::Float(x) if x.fract() == 0.0
                            && *x >= <$ty>::MIN as f64
                            && *x < <$ty>::MAX as f64 + 1.0 => Ok(*x as $ty),
                        Value::Float(x) => Err(TristateError::convert(
                            value.kind(),
                            type_name::<$ty>(),
                            format!("{} is not an integer in range", x),
                        )),
                        Value::Text(_) | Value::Bytes(_) => text_of::<$ty>(value)?
                            .parse::<$ty>()
                            .map_err(|e| TristateError::convert(value.kind(), type_name::<$ty>(), e)),
                        _ => Err(unsupported::<$ty>(value)),
                    }
                }
            }
        )+
    };
}

integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! floats {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Result<Value> {
                    Ok(Value::Float(f64::from(*self)))
                }
            }
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self> {
                    match value {
                        Value::Float(x) => Ok(*x as $ty),
                        Value::Int(i) => Ok(*i as $ty),
                        Value::Bool(b) => Ok(if *b { 1. } else { 0. }),
                        Value::Text(_) | Value::Bytes(_) => text_of::<$ty>(value)?
                            .parse::<$ty>()
                            .map_err(|e| TristateError::convert(value.kind(), type_name::<$ty>(), e)),
                        _ => Err(unsupported::<$ty>(value)),
                    }
                }
            }
        )+
    };
}

floats!(f32, f64);

impl ToValue for str {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}
impl ToValue for String {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.clone()))
    }
}
impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Text(text) => Ok(text.clone()),
            Value::Bytes(bytes) => String::from_utf8(bytes.clone())
                .map_err(|e| TristateError::convert(value.kind(), "String", e)),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(x) => Ok(x.to_string()),
            Value::Timestamp(t) => Ok(t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Null => Err(unsupported::<String>(value)),
        }
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Timestamp(*self))
    }
}
impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Timestamp(t) => Ok(*t),
            Value::Text(_) | Value::Bytes(_) => {
                let text = text_of::<Self>(value)?;
                parse_timestamp(text).ok_or_else(|| {
                    TristateError::convert(value.kind(), "timestamp", format!("unrecognized layout {:?}", text))
                })
            }
            _ => Err(unsupported::<Self>(value)),
        }
    }
}

// Durations are read from their string form only.
impl FromValue for Duration {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_duration(text_of::<Self>(value)?),
            _ => Err(unsupported::<Self>(value)),
        }
    }
}

// ------------- Byte strings -------------
impl ToValue for Vec<u8> {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bytes(self.clone()))
    }
}
impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bytes(bytes) => Ok(bytes.clone()),
            Value::Text(text) => Ok(text.clone().into_bytes()),
            _ => Err(unsupported::<Self>(value)),
        }
    }
}

/// A payload with its own binary encoding.
pub trait BinaryCodec: Sized {
    type Error: fmt::Display;
    fn encode_binary(&self) -> Vec<u8>;
    fn decode_binary(bytes: &[u8]) -> std::result::Result<Self, Self::Error>;
}

/// Stores a [`BinaryCodec`] payload as bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Binary<T>(pub T);

impl<T: BinaryCodec> ToValue for Binary<T> {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bytes(self.0.encode_binary()))
    }
}
impl<T: BinaryCodec> FromValue for Binary<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bytes(bytes) => T::decode_binary(bytes)
                .map(Binary)
                .map_err(|e| TristateError::convert(value.kind(), type_name::<T>(), e)),
            _ => Err(unsupported::<Self>(value)),
        }
    }
}

// ------------- Arrays -------------
fn array_elements<T>(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Text(_) | Value::Bytes(_) => array::decode(text_of::<T>(value)?),
        _ => Err(unsupported::<T>(value)),
    }
}

macro_rules! arrays {
    ($($ty:ty => $quoted:expr),+ $(,)?) => {
        $(
            impl ToValue for Vec<$ty> {
                fn to_value(&self) -> Result<Value> {
                    Ok(Value::Text(array::encode(self.iter().map(|e| e.to_string()), $quoted)))
                }
            }
            impl FromValue for Vec<$ty> {
                fn from_value(value: &Value) -> Result<Self> {
                    array_elements::<Self>(value)?
                        .iter()
                        .map(|e| {
                            e.parse::<$ty>()
                                .map_err(|err| TristateError::convert(value.kind(), type_name::<Self>(), err))
                        })
                        .collect()
                }
            }
        )+
    };
}

arrays!(i64 => false, i32 => false, f64 => false, f32 => false, String => true);

impl ToValue for Vec<bool> {
    fn to_value(&self) -> Result<Value> {
        let elements = self.iter().map(|b| if *b { "t" } else { "f" }.to_string());
        Ok(Value::Text(array::encode(elements, false)))
    }
}
impl FromValue for Vec<bool> {
    fn from_value(value: &Value) -> Result<Self> {
        array_elements::<Self>(value)?
            .iter()
            .map(|e| {
                parse_bool(e).ok_or_else(|| {
                    TristateError::convert(value.kind(), type_name::<Self>(), format!("invalid element {:?}", e))
                })
            })
            .collect()
    }
}

impl ToValue for Vec<Vec<u8>> {
    fn to_value(&self) -> Result<Value> {
        let elements = self.iter().map(|b| format!("\\x{}", hex::encode(b)));
        Ok(Value::Text(array::encode(elements, true)))
    }
}
impl FromValue for Vec<Vec<u8>> {
    fn from_value(value: &Value) -> Result<Self> {
        array_elements::<Self>(value)?
            .iter()
            .map(|e| {
                let digits = e.strip_prefix("\\x").ok_or_else(|| {
                    TristateError::convert(value.kind(), type_name::<Self>(), format!("invalid bytea element {:?}", e))
                })?;
                hex::decode(digits).map_err(|err| TristateError::convert(value.kind(), type_name::<Self>(), err))
            })
            .collect()
    }
}
