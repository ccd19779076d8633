//! ## Crate layout
//! - `core`: condition tree, construction API, renderer protocol and the
//!   bundled LDAP, infix, Airtable and Python dialects.
//!
//! The `prelude` module carries everything needed to build a tree and hand
//! it to a renderer; concrete dialects live under `render`.

pub use boolexpr_core as core;
pub use boolexpr_core::{and, or};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// re-exports
pub use boolexpr_core::{ConfigError, Error, ExprError, Node, RenderError, Value, build, node, render, value};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        prelude::*,
        render::{
            airtable::AirtableRenderer,
            infix::{InfixConfig, InfixRenderer},
            ldap::{LdapConfig, LdapRenderer},
            python::PythonRenderer,
        },
    };
    pub use serde::{Deserialize, Serialize};
}
