//! Human-readable infix renderer with configurable keywords.


use crate::{
    config,
    error::{ConfigError, RenderError},
    node::{CompareOp, Comparison, RawExpression},
    render::Render,
};
use serde::Deserialize;

/// Placeholder replaced by the joined child strings.
pub const ITEMS_PLACEHOLDER: &str = "{items}";

///
/// CompoundFormat
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CompoundFormat {
    pub template: String,
    #[serde(default)]
    pub separator: String,
}

impl CompoundFormat {
    pub fn new(template: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            separator: separator.into(),
        }
    }

    fn apply(&self, items: &[String]) -> String {
        self.template
            .replace(ITEMS_PLACEHOLDER, &items.join(&self.separator))
    }
}

///
/// OperatorSymbols
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OperatorSymbols {
    pub eq: String,
    pub ne: String,
    pub lt: String,
    pub lte: String,
    pub gt: String,
    pub gte: String,
}

impl OperatorSymbols {
    #[must_use]
    pub fn get(&self, op: CompareOp) -> &str {
        match op {
            CompareOp::Eq => &self.eq,
            CompareOp::Ne => &self.ne,
            CompareOp::Lt => &self.lt,
            CompareOp::Lte => &self.lte,
            CompareOp::Gt => &self.gt,
            CompareOp::Gte => &self.gte,
        }
    }
}

impl Default for OperatorSymbols {
    fn default() -> Self {
        Self {
            eq: CompareOp::Eq.symbol().to_string(),
            ne: CompareOp::Ne.symbol().to_string(),
            lt: CompareOp::Lt.symbol().to_string(),
            lte: CompareOp::Lte.symbol().to_string(),
            gt: CompareOp::Gt.symbol().to_string(),
            gte: CompareOp::Gte.symbol().to_string(),
        }
    }
}

///
/// InfixConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InfixConfig {
    pub and: CompoundFormat,
    pub or: CompoundFormat,
    pub not: CompoundFormat,
    pub operators: OperatorSymbols,
}

impl InfixConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        config::from_toml_str(src)
    }
}

impl Default for InfixConfig {
    fn default() -> Self {
        Self {
            and: CompoundFormat::new("({items})", " and "),
            or: CompoundFormat::new("({items})", " or "),
            not: CompoundFormat::new("not {items}", ""),
            operators: OperatorSymbols::default(),
        }
    }
}

///
/// InfixRenderer
///
/// `(foo=1 and oof=1 and not (bar=2 or baz=3))` with the default config.
/// Operands use their plain string form and are never quoted.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InfixRenderer {
    config: InfixConfig,
}

impl InfixRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: InfixConfig) -> Self {
        Self { config }
    }
}

impl Render for InfixRenderer {
    fn render_comparison(&self, cmp: &Comparison) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            cmp.lval(),
            self.config.operators.get(cmp.op()),
            cmp.rval()
        ))
    }

    fn render_and(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(self.config.and.apply(children))
    }

    fn render_or(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(self.config.or.apply(children))
    }

    fn render_not(&self, child: &str) -> Result<String, RenderError> {
        Ok(self.config.not.apply(&[child.to_string()]))
    }

    fn render_expression(&self, raw: &RawExpression) -> Result<String, RenderError> {
        Ok(raw.payload().to_string())
    }
}
