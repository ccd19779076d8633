use crate::{config, error::ConfigError};
use serde::Deserialize;
use std::collections::BTreeMap;

///
/// CONSTANTS
///

/// Active Directory matching rule for transitive group membership.
pub const AD_MEMBER_OF_TRANSITIVE: &str = "memberOf:1.2.840.113556.1.4.1941";

///
/// LdapConfig
///
/// escape_values      → RFC 4515 escaping of text operands (default off,
///                      so `*` in a text value stays a substring wildcard)
/// attribute_aliases  → attribute name rewritten before emission
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LdapConfig {
    pub escape_values: bool,
    pub attribute_aliases: BTreeMap<String, String>,
}

impl LdapConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        config::from_toml_str(src)
    }

    /// Defaults plus the transitive `memberOf` rule used by Active Directory.
    #[must_use]
    pub fn active_directory() -> Self {
        Self::default().with_alias("memberOf", AD_MEMBER_OF_TRANSITIVE)
    }

    #[must_use]
    pub fn with_alias(mut self, attribute: impl Into<String>, emitted: impl Into<String>) -> Self {
        self.attribute_aliases
            .insert(attribute.into(), emitted.into());
        self
    }

    #[must_use]
    pub fn with_escaping(mut self, escape_values: bool) -> Self {
        self.escape_values = escape_values;
        self
    }

    pub(crate) fn attribute<'a>(&'a self, name: &'a str) -> &'a str {
        self.attribute_aliases
            .get(name)
            .map_or(name, String::as_str)
    }
}
