use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(u8)]
pub enum CompareOp {
    #[display("EQ")]
    Eq = 0x01,
    #[display("NE")]
    Ne = 0x02,
    #[display("LT")]
    Lt = 0x03,
    #[display("LTE")]
    Lte = 0x04,
    #[display("GT")]
    Gt = 0x05,
    #[display("GTE")]
    Gte = 0x06,
}

impl CompareOp {
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Lt, Self::Lte, Self::Gt, Self::Gte];

    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Conventional infix symbol; dialects may map operators differently.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

///
/// Comparison
///
/// Leaf node: a relational test between two opaque operands. Neither side
/// is parsed or type-checked here.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Comparison {
    op: CompareOp,
    lval: Value,
    rval: Value,
}

impl Comparison {
    pub fn new(op: CompareOp, lval: impl Into<Value>, rval: impl Into<Value>) -> Self {
        Self {
            op,
            lval: lval.into(),
            rval: rval.into(),
        }
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub const fn lval(&self) -> &Value {
        &self.lval
    }

    #[must_use]
    pub const fn rval(&self) -> &Value {
        &self.rval
    }
}
