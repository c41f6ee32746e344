//! Field type tags.
//!
//! # Design Decisions
//! - Closed set: adding a tag is a breaking change for every renderer
//! - `#[repr(u8)]` so a tag fits in the `Field` header next to the slot

use std::fmt;

/// Describes which kind of value a [`Field`](crate::Field) carries.
///
/// The tag alone decides which accessor returns a meaningful value; every
/// other accessor answers with its zero value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    /// `String`, stored in the string slot.
    #[default]
    String = 0,
    Int64 = 1,
    Int32 = 2,
    Int16 = 3,
    Int8 = 4,
    /// Platform-width signed integer (`isize`).
    Int = 5,
    Uint64 = 6,
    Uint32 = 7,
    Uint16 = 8,
    Uint8 = 9,
    /// Platform-width unsigned integer (`usize`).
    Uint = 10,
    Float64 = 11,
    Float32 = 12,
    /// `Complex<f64>`, stored in the reference slot.
    Complex128 = 13,
    /// `Complex<f32>`, stored in the reference slot.
    Complex64 = 14,
    Bool = 15,
    /// UTC instant, stored in the reference slot.
    Time = 16,
    /// Nanosecond tick count, stored in the word slot.
    Duration = 17,
    /// A value rendered through its `Display` implementation.
    Stringer = 18,
    /// A homogeneous slice of one of the scalar types.
    Slice = 19,
    /// Any other value, including the untyped nil.
    Reflect = 20,
}

impl FieldType {
    /// Every tag, in declaration order.
    pub const ALL: [FieldType; 21] = [
        FieldType::String,
        FieldType::Int64,
        FieldType::Int32,
        FieldType::Int16,
        FieldType::Int8,
        FieldType::Int,
        FieldType::Uint64,
        FieldType::Uint32,
        FieldType::Uint16,
        FieldType::Uint8,
        FieldType::Uint,
        FieldType::Float64,
        FieldType::Float32,
        FieldType::Complex128,
        FieldType::Complex64,
        FieldType::Bool,
        FieldType::Time,
        FieldType::Duration,
        FieldType::Stringer,
        FieldType::Slice,
        FieldType::Reflect,
    ];

    /// Lowercase tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int64 => "int64",
            FieldType::Int32 => "int32",
            FieldType::Int16 => "int16",
            FieldType::Int8 => "int8",
            FieldType::Int => "int",
            FieldType::Uint64 => "uint64",
            FieldType::Uint32 => "uint32",
            FieldType::Uint16 => "uint16",
            FieldType::Uint8 => "uint8",
            FieldType::Uint => "uint",
            FieldType::Float64 => "float64",
            FieldType::Float32 => "float32",
            FieldType::Complex128 => "complex128",
            FieldType::Complex64 => "complex64",
            FieldType::Bool => "bool",
            FieldType::Time => "time",
            FieldType::Duration => "duration",
            FieldType::Stringer => "stringer",
            FieldType::Slice => "slice",
            FieldType::Reflect => "reflect",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
