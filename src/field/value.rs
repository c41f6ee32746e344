//! Type-erased field values.
//!
//! # Responsibilities
//! - `Field::value()`: dispatch on the tag, return the matching accessor result
//! - `Display`: the text form used by line renderers
//! - `Serialize`: the JSON form used by structured renderers
//!
//! Generic consumers only; typed accessors are the fast path.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use num_complex::Complex;
use serde::{Serialize, Serializer};

use crate::field::{Field, FieldType, Reflect, Slice};

/// A field value with its tag erased into an enum.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    String(&'a str),
    Int64(i64),
    Int32(i32),
    Int16(i16),
    Int8(i8),
    Int(isize),
    Uint64(u64),
    Uint32(u32),
    Uint16(u16),
    Uint8(u8),
    Uint(usize),
    Float64(f64),
    Float32(f32),
    Complex128(Complex<f64>),
    Complex64(Complex<f32>),
    Bool(bool),
    Time(DateTime<Utc>),
    Duration(Duration),
    Stringer(&'a (dyn fmt::Display + Send + Sync)),
    Slice(&'a Slice),
    /// `None` is the untyped nil.
    Reflect(Option<&'a dyn Reflect>),
}

impl Field {
    /// The field value, whatever its type.
    pub fn value(&self) -> Value<'_> {
        match self.field_type() {
            FieldType::String => Value::String(self.as_string()),
            FieldType::Int64 => Value::Int64(self.as_int64()),
            FieldType::Int32 => Value::Int32(self.as_int32()),
            FieldType::Int16 => Value::Int16(self.as_int16()),
            FieldType::Int8 => Value::Int8(self.as_int8()),
            FieldType::Int => Value::Int(self.as_int()),
            FieldType::Uint64 => Value::Uint64(self.as_uint64()),
            FieldType::Uint32 => Value::Uint32(self.as_uint32()),
            FieldType::Uint16 => Value::Uint16(self.as_uint16()),
            FieldType::Uint8 => Value::Uint8(self.as_uint8()),
            FieldType::Uint => Value::Uint(self.as_uint()),
            FieldType::Float64 => Value::Float64(self.as_float64()),
            FieldType::Float32 => Value::Float32(self.as_float32()),
            FieldType::Complex128 => Value::Complex128(self.as_complex128()),
            FieldType::Complex64 => Value::Complex64(self.as_complex64()),
            FieldType::Bool => Value::Bool(self.as_bool()),
            FieldType::Time => Value::Time(self.as_time()),
            FieldType::Duration => Value::Duration(self.as_duration()),
            FieldType::Stringer => self.as_stringer().map_or(Value::Reflect(None), Value::Stringer),
            FieldType::Slice => self.as_slice().map_or(Value::Reflect(None), Value::Slice),
            FieldType::Reflect => Value::Reflect(self.as_reflect()),
        }
    }
}

impl Value<'_> {
    /// The tag this value was read under.
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::String(_) => FieldType::String,
            Value::Int64(_) => FieldType::Int64,
            Value::Int32(_) => FieldType::Int32,
            Value::Int16(_) => FieldType::Int16,
            Value::Int8(_) => FieldType::Int8,
            Value::Int(_) => FieldType::Int,
            Value::Uint64(_) => FieldType::Uint64,
            Value::Uint32(_) => FieldType::Uint32,
            Value::Uint16(_) => FieldType::Uint16,
            Value::Uint8(_) => FieldType::Uint8,
            Value::Uint(_) => FieldType::Uint,
            Value::Float64(_) => FieldType::Float64,
            Value::Float32(_) => FieldType::Float32,
            Value::Complex128(_) => FieldType::Complex128,
            Value::Complex64(_) => FieldType::Complex64,
            Value::Bool(_) => FieldType::Bool,
            Value::Time(_) => FieldType::Time,
            Value::Duration(_) => FieldType::Duration,
            Value::Stringer(_) => FieldType::Stringer,
            Value::Slice(_) => FieldType::Slice,
            Value::Reflect(_) => FieldType::Reflect,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::String(v) => f.write_str(v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Uint64(v) => write!(f, "{}", v),
            Value::Uint32(v) => write!(f, "{}", v),
            Value::Uint16(v) => write!(f, "{}", v),
            Value::Uint8(v) => write!(f, "{}", v),
            Value::Uint(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Complex128(v) => write!(f, "({})", v),
            Value::Complex64(v) => write!(f, "({})", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Time(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Duration(v) => write!(f, "{:?}", v),
            Value::Stringer(v) => write!(f, "{}", v),
            Value::Slice(v) => {
                f.write_str("[")?;
                for (i, elem) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                f.write_str("]")
            }
            Value::Reflect(Some(v)) => write!(f, "{:?}", v),
            Value::Reflect(None) => f.write_str("<nil>"),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.field_type(), self)
    }
}

impl PartialEq for Value<'_> {
    /// Floats compare by bit pattern; stringer and reflect values compare by
    /// their rendered text.
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Value::Float64(a), Value::Float64(b)) => a.to_bits() == b.to_bits(),
            (Value::Float32(a), Value::Float32(b)) => a.to_bits() == b.to_bits(),
            (Value::Slice(a), Value::Slice(b)) => a == b,
            (Value::Reflect(None), Value::Reflect(None)) => true,
            (Value::Reflect(None), _) | (_, Value::Reflect(None)) => false,
            (a, b) if a.field_type() == b.field_type() => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Value::String(v) => serializer.serialize_str(v),
            Value::Int64(v) => serializer.serialize_i64(v),
            Value::Int32(v) => serializer.serialize_i32(v),
            Value::Int16(v) => serializer.serialize_i16(v),
            Value::Int8(v) => serializer.serialize_i8(v),
            Value::Int(v) => serializer.serialize_i64(v as i64),
            Value::Uint64(v) => serializer.serialize_u64(v),
            Value::Uint32(v) => serializer.serialize_u32(v),
            Value::Uint16(v) => serializer.serialize_u16(v),
            Value::Uint8(v) => serializer.serialize_u8(v),
            Value::Uint(v) => serializer.serialize_u64(v as u64),
            Value::Float64(v) if v.is_finite() => serializer.serialize_f64(v),
            Value::Float32(v) if v.is_finite() => serializer.serialize_f32(v),
            Value::Bool(v) => serializer.serialize_bool(v),
            Value::Slice(v) if v.is_nil() => serializer.serialize_none(),
            Value::Slice(v) => serializer.collect_seq(v.iter()),
            Value::Reflect(None) => serializer.serialize_none(),
            // non-finite floats, complex, time, duration, stringer, reflect
            _ => serializer.collect_str(self),
        }
    }
}
