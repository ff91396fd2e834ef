use derive_more::Display;
use num_enum::{FromPrimitive, IntoPrimitive};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

pub use field::Field;
pub use message::Message;

pub mod field;
pub mod message;

/// Identity of a [`SpacetimeEvent`](crate::SpacetimeEvent), allocated from a
/// process-wide monotonic counter.
pub type EventId = i64;

/// Sentinel parent id carried by root events. Allocated ids start at zero and
/// only grow, so this value never collides with a real id.
pub const PARENT_NONE: EventId = -1;

/// Log severity.
///
/// Any integer outside the four defined levels is carried through as-is and
/// displayed as `"?"`.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Display,
    IntoPrimitive,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
#[serde(from = "i32", into = "i32")]
pub enum Level {
    #[display("DEBUG")]
    Debug = 0,
    #[display("INFO")]
    Info = 1,
    #[display("WARNING")]
    Warning = 2,
    #[display("ERROR")]
    Error = 3,
    #[display("?")]
    #[num_enum(catch_all)]
    Other(i32),
}

impl Level {
    /// Display name of this level. Total over every `i32`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Other(_) => "?",
        }
    }
}

/// Scalar value attached to a [`Field`].
///
/// Serializes as the bare JSON scalar.
#[derive(Clone, PartialEq, PartialOrd, Hash, Debug, Display, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[display("{_0}")]
    String(String),
    #[display("{_0}")]
    Integer(i64),
    #[display("{_0}")]
    Float(OrderedFloat<f64>),
    #[display("{_0}")]
    Boolean(bool),
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_owned())
    }
}

impl From<i8> for FieldValue {
    fn from(v: i8) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<i16> for FieldValue {
    fn from(v: i16) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(OrderedFloat(v.into()))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(OrderedFloat(v))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}
