//! Typed field constructors.
//!
//! Every scalar type gets three constructors:
//! - `Field::T(key, value)`
//! - `Field::T_opt(key, Option<T>)`: `None` becomes an untyped-nil reflect field
//! - `Field::Ts(key, Option<&[T]>)`: `None` is kept as a nil slice, `Some` is copied
//!
//! # Encoding
//! - signed integers are sign-extended, unsigned integers zero-extended
//! - floats keep their IEEE-754 bit pattern (NaN payloads and -0.0 survive)
//! - bool is 0 or 1, duration is its nanosecond count (saturating)

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use num_complex::Complex;

use crate::field::{Field, FieldType, Reflect, Slice, Stringer};

macro_rules! word_constructors {
    ($(
        $(#[$doc:meta])*
        $plain:ident, $opt:ident, $slice:ident: $t:ty => $variant:ident, |$v:ident| $encode:expr;
    )*) => {
        impl Field {
            $(
                $(#[$doc])*
                pub fn $plain(key: impl Into<Cow<'static, str>>, value: $t) -> Self {
                    let $v = value;
                    Field::from_word(key.into(), FieldType::$variant, $encode)
                }

                #[doc = concat!("Like [`Field::", stringify!($plain), "`]; `None` gives an untyped-nil reflect field.")]
                pub fn $opt(key: impl Into<Cow<'static, str>>, value: Option<$t>) -> Self {
                    match value {
                        Some(v) => Self::$plain(key, v),
                        None => Self::nil(key),
                    }
                }

                #[doc = concat!("Slice of `", stringify!($t), "`; `None` is kept as a nil slice.")]
                pub fn $slice(key: impl Into<Cow<'static, str>>, values: Option<&[$t]>) -> Self {
                    Self::slice(key, Slice::$variant(values.map(<[$t]>::to_vec)))
                }
            )*
        }
    };
}

macro_rules! ref_constructors {
    ($(
        $(#[$doc:meta])*
        $plain:ident, $opt:ident, $slice:ident: $t:ty => $variant:ident;
    )*) => {
        impl Field {
            $(
                $(#[$doc])*
                pub fn $plain(key: impl Into<Cow<'static, str>>, value: $t) -> Self {
                    Field::from_ref(key.into(), FieldType::$variant, Some(Arc::new(value)))
                }

                #[doc = concat!("Like [`Field::", stringify!($plain), "`]; `None` gives an untyped-nil reflect field.")]
                pub fn $opt(key: impl Into<Cow<'static, str>>, value: Option<$t>) -> Self {
                    match value {
                        Some(v) => Self::$plain(key, v),
                        None => Self::nil(key),
                    }
                }

                #[doc = concat!("Slice of `", stringify!($t), "`; `None` is kept as a nil slice.")]
                pub fn $slice(key: impl Into<Cow<'static, str>>, values: Option<&[$t]>) -> Self {
                    Self::slice(key, Slice::$variant(values.map(<[$t]>::to_vec)))
                }
            )*
        }
    };
}

word_constructors! {
    int64, int64_opt, int64s: i64 => Int64, |v| v as u64;
    int32, int32_opt, int32s: i32 => Int32, |v| v as i64 as u64;
    int16, int16_opt, int16s: i16 => Int16, |v| v as i64 as u64;
    int8, int8_opt, int8s: i8 => Int8, |v| v as i64 as u64;
    /// Platform-width signed integer.
    int, int_opt, ints: isize => Int, |v| v as i64 as u64;
    uint64, uint64_opt, uint64s: u64 => Uint64, |v| v;
    uint32, uint32_opt, uint32s: u32 => Uint32, |v| u64::from(v);
    uint16, uint16_opt, uint16s: u16 => Uint16, |v| u64::from(v);
    uint8, uint8_opt, uint8s: u8 => Uint8, |v| u64::from(v);
    /// Platform-width unsigned integer.
    uint, uint_opt, uints: usize => Uint, |v| v as u64;
    float64, float64_opt, float64s: f64 => Float64, |v| v.to_bits();
    float32, float32_opt, float32s: f32 => Float32, |v| u64::from(v.to_bits());
    bool, bool_opt, bools: bool => Bool, |v| u64::from(v);
    /// Durations beyond `u64::MAX` nanoseconds saturate.
    duration, duration_opt, durations: Duration => Duration,
        |v| u64::try_from(v.as_nanos()).unwrap_or(u64::MAX);
}

ref_constructors! {
    complex128, complex128_opt, complex128s: Complex<f64> => Complex128;
    complex64, complex64_opt, complex64s: Complex<f32> => Complex64;
    /// A UTC instant.
    time, time_opt, times: DateTime<Utc> => Time;
}

impl Field {
    /// A string field. `&'static str` keys and values are not copied.
    pub fn string(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Field::from_str_slot(key.into(), value.into())
    }

    /// Like [`Field::string`]; `None` gives an untyped-nil reflect field.
    pub fn string_opt<V>(key: impl Into<Cow<'static, str>>, value: Option<V>) -> Self
    where
        V: Into<Cow<'static, str>>,
    {
        match value {
            Some(v) => Self::string(key, v),
            None => Self::nil(key),
        }
    }

    /// Slice of strings; `None` is kept as a nil slice.
    pub fn strings(key: impl Into<Cow<'static, str>>, values: Option<&[&str]>) -> Self {
        let copied = values.map(|v| v.iter().map(|s| (*s).to_owned()).collect());
        Self::slice(key, Slice::String(copied))
    }

    /// A field rendered through the value's `Display` implementation.
    pub fn stringer<S>(key: impl Into<Cow<'static, str>>, value: S) -> Self
    where
        S: fmt::Display + Send + Sync + 'static,
    {
        Self::from_stringer(key, Stringer::new(value))
    }

    /// Like [`Field::stringer`]; `None` gives an untyped-nil reflect field.
    pub fn stringer_opt<S>(key: impl Into<Cow<'static, str>>, value: Option<S>) -> Self
    where
        S: fmt::Display + Send + Sync + 'static,
    {
        match value {
            Some(v) => Self::stringer(key, v),
            None => Self::nil(key),
        }
    }

    pub(crate) fn from_stringer(key: impl Into<Cow<'static, str>>, value: Stringer) -> Self {
        Field::from_ref(key.into(), FieldType::Stringer, Some(Arc::new(value)))
    }

    /// A slice field from an already owned [`Slice`].
    pub fn slice(key: impl Into<Cow<'static, str>>, value: Slice) -> Self {
        Field::from_ref(key.into(), FieldType::Slice, Some(Arc::new(value)))
    }

    /// A generic field holding `value` as is. The unit value `()` is the
    /// untyped nil.
    pub fn reflect<V: Reflect>(key: impl Into<Cow<'static, str>>, value: V) -> Self {
        if (&value as &dyn Any).is::<()>() {
            return Self::nil(key);
        }
        Field::from_ref(key.into(), FieldType::Reflect, Some(Arc::new(value)))
    }

    /// An untyped-nil reflect field.
    pub fn nil(key: impl Into<Cow<'static, str>>) -> Self {
        Field::from_ref(key.into(), FieldType::Reflect, None)
    }
}
