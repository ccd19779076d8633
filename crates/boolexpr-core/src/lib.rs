//! Core of boolexpr: the condition tree, its construction API, and the
//! renderer protocol with the bundled dialects.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod build;
pub mod error;
pub mod node;
pub mod render;
pub mod value;

mod config;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Construction vocabulary and the renderer trait.
/// Concrete renderers and their configs stay under `render::*`.
///

pub mod prelude {
    pub use crate::{
        build::{Fields, and, and_with, eq, expression, gt, gte, lt, lte, ne, not, not_with, or, or_with},
        node::{CompareOp, Comparison, Compound, LogicOp, Node, NodeKind, RawExpression},
        render::Render,
        value::{Float64, NonFiniteFloat, Value},
    };
}

// re-exports
pub use error::{ConfigError, Error, ExprError, RenderError};
pub use node::Node;
pub use value::Value;
