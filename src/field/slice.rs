//! Homogeneous slice payloads.
//!
//! Each variant keeps `Option<Vec<T>>` so a nil slice stays distinguishable
//! from an empty one all the way to the renderer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use num_complex::Complex;

use crate::field::{FieldType, Value};

/// A copied slice of one of the scalar field types.
#[derive(Debug, Clone)]
pub enum Slice {
    String(Option<Vec<String>>),
    Int64(Option<Vec<i64>>),
    Int32(Option<Vec<i32>>),
    Int16(Option<Vec<i16>>),
    Int8(Option<Vec<i8>>),
    Int(Option<Vec<isize>>),
    Uint64(Option<Vec<u64>>),
    Uint32(Option<Vec<u32>>),
    Uint16(Option<Vec<u16>>),
    Uint8(Option<Vec<u8>>),
    Uint(Option<Vec<usize>>),
    Float64(Option<Vec<f64>>),
    Float32(Option<Vec<f32>>),
    Complex128(Option<Vec<Complex<f64>>>),
    Complex64(Option<Vec<Complex<f32>>>),
    Bool(Option<Vec<bool>>),
    Time(Option<Vec<DateTime<Utc>>>),
    Duration(Option<Vec<Duration>>),
}

/// Expands `$body` once per variant with `$v` bound to the inner
/// `Option<Vec<_>>`.
macro_rules! each_variant {
    ($slice:expr, |$v:ident| $body:expr) => {
        match $slice {
            Slice::String($v) => $body,
            Slice::Int64($v) => $body,
            Slice::Int32($v) => $body,
            Slice::Int16($v) => $body,
            Slice::Int8($v) => $body,
            Slice::Int($v) => $body,
            Slice::Uint64($v) => $body,
            Slice::Uint32($v) => $body,
            Slice::Uint16($v) => $body,
            Slice::Uint8($v) => $body,
            Slice::Uint($v) => $body,
            Slice::Float64($v) => $body,
            Slice::Float32($v) => $body,
            Slice::Complex128($v) => $body,
            Slice::Complex64($v) => $body,
            Slice::Bool($v) => $body,
            Slice::Time($v) => $body,
            Slice::Duration($v) => $body,
        }
    };
}

impl Slice {
    /// The field type of the elements.
    pub fn elem_type(&self) -> FieldType {
        match self {
            Slice::String(_) => FieldType::String,
            Slice::Int64(_) => FieldType::Int64,
            Slice::Int32(_) => FieldType::Int32,
            Slice::Int16(_) => FieldType::Int16,
            Slice::Int8(_) => FieldType::Int8,
            Slice::Int(_) => FieldType::Int,
            Slice::Uint64(_) => FieldType::Uint64,
            Slice::Uint32(_) => FieldType::Uint32,
            Slice::Uint16(_) => FieldType::Uint16,
            Slice::Uint8(_) => FieldType::Uint8,
            Slice::Uint(_) => FieldType::Uint,
            Slice::Float64(_) => FieldType::Float64,
            Slice::Float32(_) => FieldType::Float32,
            Slice::Complex128(_) => FieldType::Complex128,
            Slice::Complex64(_) => FieldType::Complex64,
            Slice::Bool(_) => FieldType::Bool,
            Slice::Time(_) => FieldType::Time,
            Slice::Duration(_) => FieldType::Duration,
        }
    }

    /// True when the slice was built from a nil (absent) input.
    pub fn is_nil(&self) -> bool {
        each_variant!(self, |v| v.is_none())
    }

    pub fn len(&self) -> usize {
        each_variant!(self, |v| v.as_ref().map_or(0, Vec::len))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index` as a [`Value`].
    pub fn get(&self, index: usize) -> Option<Value<'_>> {
        let value = match self {
            Slice::String(v) => Value::String(v.as_ref()?.get(index)?.as_str()),
            Slice::Int64(v) => Value::Int64(*v.as_ref()?.get(index)?),
            Slice::Int32(v) => Value::Int32(*v.as_ref()?.get(index)?),
            Slice::Int16(v) => Value::Int16(*v.as_ref()?.get(index)?),
            Slice::Int8(v) => Value::Int8(*v.as_ref()?.get(index)?),
            Slice::Int(v) => Value::Int(*v.as_ref()?.get(index)?),
            Slice::Uint64(v) => Value::Uint64(*v.as_ref()?.get(index)?),
            Slice::Uint32(v) => Value::Uint32(*v.as_ref()?.get(index)?),
            Slice::Uint16(v) => Value::Uint16(*v.as_ref()?.get(index)?),
            Slice::Uint8(v) => Value::Uint8(*v.as_ref()?.get(index)?),
            Slice::Uint(v) => Value::Uint(*v.as_ref()?.get(index)?),
            Slice::Float64(v) => Value::Float64(*v.as_ref()?.get(index)?),
            Slice::Float32(v) => Value::Float32(*v.as_ref()?.get(index)?),
            Slice::Complex128(v) => Value::Complex128(*v.as_ref()?.get(index)?),
            Slice::Complex64(v) => Value::Complex64(*v.as_ref()?.get(index)?),
            Slice::Bool(v) => Value::Bool(*v.as_ref()?.get(index)?),
            Slice::Time(v) => Value::Time(*v.as_ref()?.get(index)?),
            Slice::Duration(v) => Value::Duration(*v.as_ref()?.get(index)?),
        };
        Some(value)
    }

    /// Iterates over the elements as [`Value`]s. A nil slice yields nothing.
    pub fn iter(&self) -> SliceIter<'_> {
        SliceIter { slice: self, index: 0 }
    }
}

fn bits_eq<T, B: PartialEq>(a: &Option<Vec<T>>, b: &Option<Vec<T>>, bits: fn(&T) -> B) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| bits(x) == bits(y)),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for Slice {
    /// Nil and empty differ; float elements compare by bit pattern.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Slice::String(a), Slice::String(b)) => a == b,
            (Slice::Int64(a), Slice::Int64(b)) => a == b,
            (Slice::Int32(a), Slice::Int32(b)) => a == b,
            (Slice::Int16(a), Slice::Int16(b)) => a == b,
            (Slice::Int8(a), Slice::Int8(b)) => a == b,
            (Slice::Int(a), Slice::Int(b)) => a == b,
            (Slice::Uint64(a), Slice::Uint64(b)) => a == b,
            (Slice::Uint32(a), Slice::Uint32(b)) => a == b,
            (Slice::Uint16(a), Slice::Uint16(b)) => a == b,
            (Slice::Uint8(a), Slice::Uint8(b)) => a == b,
            (Slice::Uint(a), Slice::Uint(b)) => a == b,
            (Slice::Float64(a), Slice::Float64(b)) => bits_eq(a, b, |v| v.to_bits()),
            (Slice::Float32(a), Slice::Float32(b)) => bits_eq(a, b, |v| v.to_bits()),
            (Slice::Complex128(a), Slice::Complex128(b)) => {
                bits_eq(a, b, |v| (v.re.to_bits(), v.im.to_bits()))
            }
            (Slice::Complex64(a), Slice::Complex64(b)) => {
                bits_eq(a, b, |v| (v.re.to_bits(), v.im.to_bits()))
            }
            (Slice::Bool(a), Slice::Bool(b)) => a == b,
            (Slice::Time(a), Slice::Time(b)) => a == b,
            (Slice::Duration(a), Slice::Duration(b)) => a == b,
            _ => false,
        }
    }
}

/// Iterator returned by [`Slice::iter`].
#[derive(Debug, Clone)]
pub struct SliceIter<'a> {
    slice: &'a Slice,
    index: usize,
}

impl<'a> Iterator for SliceIter<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slice.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
