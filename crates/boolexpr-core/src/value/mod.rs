mod float;


use crate::node::RawExpression;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

// re-exports
pub use float::{Float64, NonFiniteFloat};

///
/// CONSTANTS
///

/// ISO-8601 timestamp layout used by the plain string form.
pub(crate) const ISO_TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

///
/// Value
///
/// Opaque comparison operand. The tree never inspects a value; it is
/// carried untouched to the renderer, which decides how (or whether) a
/// given variant can be expressed in its dialect.
///
/// Expression → a dialect-native operand (e.g. `TODAY()`), emitted verbatim.
/// Null       → an absent value; dialects choose presence/emptiness syntax.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Value {
    Bool(bool),
    Date(Date),
    Expression(RawExpression),
    Float64(Float64),
    Int(i64),
    /// Ordered list of values; order is preserved through rendering.
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(PrimitiveDateTime),
    Uint(u64),
}

impl Value {
    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Date(_) => ValueKind::Date,
            Self::Expression(_) => ValueKind::Expression,
            Self::Float64(_) => ValueKind::Float64,
            Self::Int(_) => ValueKind::Int,
            Self::List(_) => ValueKind::List,
            Self::Null => ValueKind::Null,
            Self::Text(_) => ValueKind::Text,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Uint(_) => ValueKind::Uint,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::Expression(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
            Self::Text(v) => f.write_str(v),
            Self::Timestamp(v) => {
                let formatted = v.format(ISO_TIMESTAMP).map_err(|_| fmt::Error)?;
                f.write_str(&formatted)
            }
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

///
/// ValueKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ValueKind {
    #[display("bool")]
    Bool,
    #[display("date")]
    Date,
    #[display("expression")]
    Expression,
    #[display("float64")]
    Float64,
    #[display("int")]
    Int,
    #[display("list")]
    List,
    #[display("null")]
    Null,
    #[display("text")]
    Text,
    #[display("timestamp")]
    Timestamp,
    #[display("uint")]
    Uint,
}

//
// Conversions
//

macro_rules! impl_from_int {
    ($variant:ident => $($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::$variant(n.into())
                }
            }
        )*
    };
}

impl_from_int!(Int => i8, i16, i32, i64);
impl_from_int!(Uint => u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Float64> for Value {
    fn from(v: Float64) -> Self {
        Self::Float64(v)
    }
}

impl TryFrom<f64> for Value {
    type Error = NonFiniteFloat;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Float64::try_from(v).map(Self::Float64)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(v: PrimitiveDateTime) -> Self {
        Self::Timestamp(v)
    }
}

impl From<RawExpression> for Value {
    fn from(v: RawExpression) -> Self {
        Self::Expression(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::from_list(items)
    }
}
