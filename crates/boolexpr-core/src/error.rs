use crate::{
    node::{LogicOp, NodeKind},
    value::Value,
};
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
///
/// Umbrella error for callers that construct, configure and render in one
/// flow and want a single `?` target.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Expr(#[from] ExprError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

///
/// Arity
///
/// Child-count requirement of a compound operator.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Arity {
    #[display("at least one")]
    AtLeastOne,

    #[display("exactly one")]
    ExactlyOne,
}

impl Arity {
    #[must_use]
    pub const fn of(op: LogicOp) -> Self {
        match op {
            LogicOp::And | LogicOp::Or => Self::AtLeastOne,
            LogicOp::Not => Self::ExactlyOne,
        }
    }

    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::AtLeastOne => count >= 1,
            Self::ExactlyOne => count == 1,
        }
    }
}

///
/// ExprError
///
/// Construction-time failures. The tree performs no other validation;
/// operand content is the renderer's concern.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ExprError {
    #[error("{op} requires {expected} condition; got {got}")]
    InvalidArity {
        op: LogicOp,
        expected: Arity,
        got: usize,
    },
}

impl ExprError {
    pub(crate) const fn invalid_arity(op: LogicOp, got: usize) -> Self {
        Self::InvalidArity {
            op,
            expected: Arity::of(op),
            got,
        }
    }
}

///
/// RenderError
///
/// `MissingCapability` is the only failure the dispatch walk itself
/// produces. `UnsupportedValue` is raised by concrete dialects for operands
/// they cannot express.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RenderError {
    #[error("renderer does not support {kind} nodes (at {})", path_label(.path))]
    MissingCapability { kind: NodeKind, path: Vec<usize> },

    #[error("{renderer} renderer cannot express {kind} operand {value}", kind = .value.kind())]
    UnsupportedValue {
        renderer: &'static str,
        value: Value,
    },
}

impl RenderError {
    #[must_use]
    pub const fn missing(kind: NodeKind) -> Self {
        Self::MissingCapability {
            kind,
            path: Vec::new(),
        }
    }

    #[must_use]
    pub const fn unsupported(renderer: &'static str, value: Value) -> Self {
        Self::UnsupportedValue { renderer, value }
    }

    /// Attach the child-index path of the node being rendered.
    /// Paths already set by a deeper frame are kept.
    #[must_use]
    pub(crate) fn at(self, at: &[usize]) -> Self {
        match self {
            Self::MissingCapability { kind, path } if path.is_empty() => {
                Self::MissingCapability {
                    kind,
                    path: at.to_vec(),
                }
            }
            other => other,
        }
    }
}

// root, root/0, root/1/2 ...
fn path_label(path: &[usize]) -> String {
    let mut label = String::from("root");
    for index in path {
        label.push('/');
        label.push_str(&index.to_string());
    }

    label
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid renderer config: {0}")]
    Toml(#[from] toml::de::Error),
}
