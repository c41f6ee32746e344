//! Typed key/value fields.
//!
//! # Data Flow
//! ```text
//! caller value
//!     → constructors.rs (typed constructor, or any.rs classifier)
//!     → Field { key, type, slot }
//!     → sink (reads back via typed accessors or value())
//! ```
//!
//! # Design Decisions
//! - Three storage slots: inline string, inline 64-bit word, shared reference
//! - Integers, floats, bools and durations never allocate (word slot)
//! - Floats are stored as their IEEE-754 bit pattern, not converted
//! - Accessors are total: a mismatched accessor returns its zero value
//! - Fields are immutable; cloning shares the reference slot

pub mod any;
pub mod constructors;
pub mod kind;
pub mod slice;
pub mod value;

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use num_complex::Complex;

pub use kind::FieldType;
pub use slice::Slice;
pub use value::Value;

/// Any value that can live in the reference slot of a [`Field`].
///
/// Implemented for every `'static + Debug + Send + Sync` type; the `Debug`
/// output is what renderers fall back to for [`FieldType::Reflect`].
pub trait Reflect: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Sync> Reflect for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A shared handle to a value rendered through `Display`.
#[derive(Clone)]
pub struct Stringer(Arc<dyn fmt::Display + Send + Sync>);

impl Stringer {
    pub fn new<S>(value: S) -> Self
    where
        S: fmt::Display + Send + Sync + 'static,
    {
        Self(Arc::new(value))
    }

    pub fn as_display(&self) -> &(dyn fmt::Display + Send + Sync) {
        &*self.0
    }
}

impl fmt::Display for Stringer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Stringer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stringer({})", self.0)
    }
}

/// Storage slot of a field.
#[derive(Debug, Clone)]
enum Repr {
    Str(Cow<'static, str>),
    Word(u64),
    /// `None` is the untyped nil.
    Ref(Option<Arc<dyn Reflect>>),
}

/// An immutable, typed key/value pair.
///
/// Build fields with the constructors (`Field::string`, `Field::int64s`,
/// `Field::any`, ...); inspect them with [`Field::field_type`] and the
/// matching `as_*` accessor.
#[derive(Debug, Clone)]
pub struct Field {
    key: Cow<'static, str>,
    ty: FieldType,
    repr: Repr,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            key: Cow::Borrowed(""),
            ty: FieldType::String,
            repr: Repr::Str(Cow::Borrowed("")),
        }
    }
}

macro_rules! word_accessors {
    ($(
        $(#[$doc:meta])*
        $name:ident -> $t:ty, $variant:ident, |$w:ident| $decode:expr;
    )*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> $t {
                match self.word(FieldType::$variant) {
                    Some($w) => $decode,
                    None => <$t>::default(),
                }
            }
        )*
    };
}

impl Field {
    pub(crate) fn from_str_slot(key: Cow<'static, str>, value: Cow<'static, str>) -> Self {
        Self { key, ty: FieldType::String, repr: Repr::Str(value) }
    }

    pub(crate) fn from_word(key: Cow<'static, str>, ty: FieldType, word: u64) -> Self {
        Self { key, ty, repr: Repr::Word(word) }
    }

    pub(crate) fn from_ref(
        key: Cow<'static, str>,
        ty: FieldType,
        value: Option<Arc<dyn Reflect>>,
    ) -> Self {
        Self { key, ty, repr: Repr::Ref(value) }
    }

    /// The field's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field's type tag.
    pub fn field_type(&self) -> FieldType {
        self.ty
    }

    fn word(&self, ty: FieldType) -> Option<u64> {
        match self.repr {
            Repr::Word(w) if self.ty == ty => Some(w),
            _ => None,
        }
    }

    fn reference<T: Any>(&self, ty: FieldType) -> Option<&T> {
        if self.ty != ty {
            return None;
        }
        match &self.repr {
            Repr::Ref(Some(r)) => <dyn Reflect as Reflect>::as_any(&**r).downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The string value, or `""` unless the type is [`FieldType::String`].
    pub fn as_string(&self) -> &str {
        match &self.repr {
            Repr::Str(s) if self.ty == FieldType::String => s,
            _ => "",
        }
    }

    word_accessors! {
        /// The `i64` value, or `0` unless the type is [`FieldType::Int64`].
        as_int64 -> i64, Int64, |w| w as i64;
        as_int32 -> i32, Int32, |w| w as i32;
        as_int16 -> i16, Int16, |w| w as i16;
        as_int8 -> i8, Int8, |w| w as i8;
        as_int -> isize, Int, |w| w as i64 as isize;
        /// The `u64` value, or `0` unless the type is [`FieldType::Uint64`].
        as_uint64 -> u64, Uint64, |w| w;
        as_uint32 -> u32, Uint32, |w| w as u32;
        as_uint16 -> u16, Uint16, |w| w as u16;
        as_uint8 -> u8, Uint8, |w| w as u8;
        as_uint -> usize, Uint, |w| w as usize;
        /// The `f64` value rebuilt from its bit pattern, or `0.0` unless the
        /// type is [`FieldType::Float64`].
        as_float64 -> f64, Float64, |w| f64::from_bits(w);
        as_float32 -> f32, Float32, |w| f32::from_bits(w as u32);
        /// The bool value, or `false` unless the type is [`FieldType::Bool`].
        as_bool -> bool, Bool, |w| w != 0;
        /// The duration, or zero unless the type is [`FieldType::Duration`].
        as_duration -> Duration, Duration, |w| Duration::from_nanos(w);
    }

    pub fn as_complex128(&self) -> Complex<f64> {
        self.reference::<Complex<f64>>(FieldType::Complex128)
            .copied()
            .unwrap_or_default()
    }

    pub fn as_complex64(&self) -> Complex<f32> {
        self.reference::<Complex<f32>>(FieldType::Complex64)
            .copied()
            .unwrap_or_default()
    }

    /// The instant, or the Unix epoch unless the type is [`FieldType::Time`].
    pub fn as_time(&self) -> DateTime<Utc> {
        self.reference::<DateTime<Utc>>(FieldType::Time)
            .copied()
            .unwrap_or_default()
    }

    /// The `Display` value, or `None` unless the type is
    /// [`FieldType::Stringer`].
    pub fn as_stringer(&self) -> Option<&(dyn fmt::Display + Send + Sync)> {
        self.reference::<Stringer>(FieldType::Stringer)
            .map(Stringer::as_display)
    }

    /// The slice, or `None` unless the type is [`FieldType::Slice`].
    ///
    /// A nil slice is `Some` with [`Slice::is_nil`] returning true.
    pub fn as_slice(&self) -> Option<&Slice> {
        self.reference::<Slice>(FieldType::Slice)
    }

    /// The generic value, or `None` unless the type is
    /// [`FieldType::Reflect`]. `None` is also the untyped nil.
    pub fn as_reflect(&self) -> Option<&dyn Reflect> {
        if self.ty != FieldType::Reflect {
            return None;
        }
        match &self.repr {
            Repr::Ref(Some(r)) => Some(&**r),
            _ => None,
        }
    }

    /// True for an untyped-nil [`FieldType::Reflect`] field.
    pub fn is_nil(&self) -> bool {
        self.ty == FieldType::Reflect && matches!(self.repr, Repr::Ref(None))
    }
}

impl PartialEq for Field {
    /// Bit-exact for floats; stringer and reflect payloads compare by
    /// identity.
    fn eq(&self, other: &Self) -> bool {
        if self.key != other.key || self.ty != other.ty {
            return false;
        }
        match self.ty {
            FieldType::Complex128 => self.as_complex128() == other.as_complex128(),
            FieldType::Complex64 => self.as_complex64() == other.as_complex64(),
            FieldType::Time => self.as_time() == other.as_time(),
            FieldType::Slice => self.as_slice() == other.as_slice(),
            _ => match (&self.repr, &other.repr) {
                (Repr::Str(a), Repr::Str(b)) => a == b,
                (Repr::Word(a), Repr::Word(b)) => a == b,
                (Repr::Ref(None), Repr::Ref(None)) => true,
                (Repr::Ref(Some(a)), Repr::Ref(Some(b))) => Arc::ptr_eq(a, b),
                _ => false,
            },
        }
    }
}
