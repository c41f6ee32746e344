//! Best-effort classification of dynamically typed values.
//!
//! # Dispatch Order
//! ```text
//! exact scalar type        (String, i64, ..., DateTime<Utc>, Duration)
//!     → optional form      (Option<T>)
//!     → slice form         (Vec<T>, &'static [T])
//!     → optional slice     (Option<Vec<T>>, Option<&'static [T]>; None is a nil slice)
//! Stringer capability      (any! macro: any Display type; Field::any: Stringer)
//! Reflect fallback         (everything else, () is the untyped nil)
//! ```
//!
//! # Design Decisions
//! - Concrete types are checked before the Stringer capability, so numbers
//!   that happen to implement `Display` keep their numeric type
//! - Concrete checks are `TypeId` comparisons, no runtime reflection
//! - There is no failure mode; every value ends at Reflect at worst

use std::any::Any;
use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use num_complex::Complex;

use crate::field::{Field, Reflect, Slice, Stringer};

type Key = Cow<'static, str>;

impl Field {
    /// Builds the most specific field for `value`.
    ///
    /// Values of a supported scalar type (or its `Option`, `Vec` or
    /// `&'static [T]` form) get their typed constructor; [`Stringer`] handles
    /// become stringer fields; anything else becomes a reflect field. Use the
    /// [`any!`](crate::any!) macro to also recognise arbitrary `Display`
    /// types.
    pub fn any<V: Reflect>(key: impl Into<Cow<'static, str>>, value: V) -> Self {
        match classify(key.into(), &value) {
            Ok(field) => field,
            Err(key) => Field::reflect(key, value),
        }
    }
}

macro_rules! try_scalar {
    ($key:ident, $value:ident; $($t:ty => $plain:ident, $opt:ident, $variant:ident;)*) => {
        $(
            if let Some(v) = $value.downcast_ref::<$t>() {
                return Ok(Field::$plain($key, *v));
            }
            if let Some(v) = $value.downcast_ref::<Option<$t>>() {
                return Ok(Field::$opt($key, *v));
            }
            if let Some(v) = $value.downcast_ref::<Vec<$t>>() {
                return Ok(Field::slice($key, Slice::$variant(Some(v.clone()))));
            }
            if let Some(v) = $value.downcast_ref::<&'static [$t]>() {
                return Ok(Field::slice($key, Slice::$variant(Some(v.to_vec()))));
            }
            if let Some(v) = $value.downcast_ref::<Option<Vec<$t>>>() {
                return Ok(Field::slice($key, Slice::$variant(v.clone())));
            }
            if let Some(v) = $value.downcast_ref::<Option<&'static [$t]>>() {
                return Ok(Field::slice($key, Slice::$variant(v.map(<[$t]>::to_vec))));
            }
        )*
    };
}

/// Matches `value` against the concrete scalar, optional and slice types and
/// the [`Stringer`] handle. Gives the key back when nothing matches.
pub(crate) fn classify(key: Key, value: &dyn Any) -> Result<Field, Key> {
    if let Some(v) = value.downcast_ref::<String>() {
        return Ok(Field::string(key, v.clone()));
    }
    if let Some(v) = value.downcast_ref::<&'static str>() {
        return Ok(Field::string(key, *v));
    }
    if let Some(v) = value.downcast_ref::<Cow<'static, str>>() {
        return Ok(Field::string(key, v.clone()));
    }
    if let Some(v) = value.downcast_ref::<Option<String>>() {
        return Ok(Field::string_opt(key, v.clone()));
    }
    if let Some(v) = value.downcast_ref::<Option<&'static str>>() {
        return Ok(Field::string_opt(key, *v));
    }
    if let Some(v) = value.downcast_ref::<Vec<String>>() {
        return Ok(Field::slice(key, Slice::String(Some(v.clone()))));
    }
    if let Some(v) = value.downcast_ref::<Vec<&'static str>>() {
        return Ok(Field::strings(key, Some(v.as_slice())));
    }
    if let Some(v) = value.downcast_ref::<&'static [&'static str]>() {
        return Ok(Field::strings(key, Some(*v)));
    }
    if let Some(v) = value.downcast_ref::<Option<Vec<String>>>() {
        return Ok(Field::slice(key, Slice::String(v.clone())));
    }
    if let Some(v) = value.downcast_ref::<Option<Vec<&'static str>>>() {
        return Ok(Field::strings(key, v.as_deref()));
    }
    if let Some(v) = value.downcast_ref::<Option<&'static [&'static str]>>() {
        return Ok(Field::strings(key, *v));
    }

    try_scalar! {
        key, value;
        i64 => int64, int64_opt, Int64;
        i32 => int32, int32_opt, Int32;
        i16 => int16, int16_opt, Int16;
        i8 => int8, int8_opt, Int8;
        isize => int, int_opt, Int;
        u64 => uint64, uint64_opt, Uint64;
        u32 => uint32, uint32_opt, Uint32;
        u16 => uint16, uint16_opt, Uint16;
        u8 => uint8, uint8_opt, Uint8;
        usize => uint, uint_opt, Uint;
        f64 => float64, float64_opt, Float64;
        f32 => float32, float32_opt, Float32;
        Complex<f64> => complex128, complex128_opt, Complex128;
        Complex<f32> => complex64, complex64_opt, Complex64;
        bool => bool, bool_opt, Bool;
        DateTime<Utc> => time, time_opt, Time;
        Duration => duration, duration_opt, Duration;
    }

    if let Some(v) = value.downcast_ref::<Stringer>() {
        return Ok(Field::from_stringer(key, v.clone()));
    }

    Err(key)
}

/// Call-site dispatch used by the [`any!`](crate::any!) macro.
///
/// `Probe<T>` answers `classify_display` when `T: Display` and
/// `&Probe<T>` answers it otherwise; method resolution picks the former
/// whenever the bound holds.
#[doc(hidden)]
pub mod dispatch {
    use super::*;

    pub struct Probe<T>(Cell<Option<T>>);

    impl<T> Probe<T> {
        pub fn new(value: T) -> Self {
            Self(Cell::new(Some(value)))
        }
    }

    pub trait ViaDisplay {
        fn classify_display(&self, key: Key) -> Field;
    }

    pub trait ViaReflect {
        fn classify_display(&self, key: Key) -> Field;
    }

    impl<T> ViaDisplay for Probe<T>
    where
        T: Reflect + fmt::Display,
    {
        fn classify_display(&self, key: Key) -> Field {
            let Some(value) = self.0.take() else {
                return Field::nil(key);
            };
            match classify(key, &value) {
                Ok(field) => field,
                Err(key) => Field::stringer(key, value),
            }
        }
    }

    impl<T> ViaReflect for &Probe<T>
    where
        T: Reflect,
    {
        fn classify_display(&self, key: Key) -> Field {
            let Some(value) = self.0.take() else {
                return Field::nil(key);
            };
            Field::any(key, value)
        }
    }
}

/// Builds the most specific field for a value, recognising `Display` types
/// as stringers.
///
/// ```
/// use ink::{any, FieldType};
///
/// struct Version(u8, u8);
/// impl std::fmt::Display for Version {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "v{}.{}", self.0, self.1)
///     }
/// }
/// impl std::fmt::Debug for Version {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "Version({}, {})", self.0, self.1)
///     }
/// }
///
/// assert_eq!(any!("uptime_days", 9u64).field_type(), FieldType::Uint64);
/// assert_eq!(any!("version", Version(1, 2)).field_type(), FieldType::Stringer);
/// ```
#[macro_export]
macro_rules! any {
    ($key:expr, $value:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::field::any::dispatch::{ViaDisplay as _, ViaReflect as _};
        (&$crate::field::any::dispatch::Probe::new($value))
            .classify_display(::std::convert::Into::into($key))
    }};
}
