//! Reference renderer: LDAP search filters (RFC 4515 prefix notation).

mod config;


use crate::{
    error::RenderError,
    node::{CompareOp, Comparison, RawExpression},
    render::Render,
    value::Value,
};
use std::fmt::Write as _;
use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

// re-exports
pub use config::{AD_MEMBER_OF_TRANSITIVE, LdapConfig};

const RENDERER: &str = "ldap";

/// LDAP GeneralizedTime, always emitted as UTC.
const GENERALIZED_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day][hour][minute][second]Z");

///
/// LdapRenderer
///
/// AND → (&…)   OR → (|…)   NOT → (!…)   comparison → (attr<op>value)
///
/// LDAP has no inequality operator, so NE is emitted as a negated
/// equality; `ne(a, b)` and `not(eq(a, b))` produce the same filter.
///
/// Text values are emitted as given unless [`LdapConfig::with_escaping`]
/// is set. Attribute names are emitted as given too; the Active Directory
/// transitive `memberOf` rule is opt-in through
/// [`LdapConfig::active_directory`].
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LdapRenderer {
    config: LdapConfig,
}

impl LdapRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: LdapConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &LdapConfig {
        &self.config
    }

    fn attribute(&self, lval: &Value) -> Result<String, RenderError> {
        match lval {
            Value::Text(name) => Ok(self.config.attribute(name).to_string()),
            Value::Expression(raw) => Ok(raw.payload().to_string()),
            Value::List(_) | Value::Null => Err(RenderError::unsupported(RENDERER, lval.clone())),
            other => Ok(other.to_string()),
        }
    }

    fn value(&self, rval: &Value) -> Result<String, RenderError> {
        match rval {
            Value::Bool(true) => Ok("TRUE".to_string()),
            Value::Bool(false) => Ok("FALSE".to_string()),
            Value::Date(date) => generalized_time(date.midnight(), rval),
            Value::Timestamp(ts) => generalized_time(*ts, rval),
            Value::Text(text) if self.config.escape_values => Ok(escape(text)),
            Value::Text(text) => Ok(text.clone()),
            Value::Expression(raw) => Ok(raw.payload().to_string()),
            Value::Float64(_) | Value::Int(_) | Value::Uint(_) => Ok(rval.to_string()),
            Value::List(_) | Value::Null => Err(RenderError::unsupported(RENDERER, rval.clone())),
        }
    }

    fn equality(&self, attribute: &str, rval: &Value) -> Result<String, RenderError> {
        // absent attribute: negated presence filter
        if rval.is_null() {
            return Ok(format!("(!({attribute}=*))"));
        }

        Ok(format!("({attribute}={})", self.value(rval)?))
    }
}

impl Render for LdapRenderer {
    fn render_comparison(&self, cmp: &Comparison) -> Result<String, RenderError> {
        let attribute = self.attribute(cmp.lval())?;

        match cmp.op() {
            CompareOp::Eq => self.equality(&attribute, cmp.rval()),
            CompareOp::Ne => Ok(format!("(!{})", self.equality(&attribute, cmp.rval())?)),
            op @ (CompareOp::Lt | CompareOp::Lte | CompareOp::Gt | CompareOp::Gte) => Ok(format!(
                "({attribute}{}{})",
                op.symbol(),
                self.value(cmp.rval())?
            )),
        }
    }

    fn render_and(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(format!("(&{})", children.concat()))
    }

    fn render_or(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(format!("(|{})", children.concat()))
    }

    fn render_not(&self, child: &str) -> Result<String, RenderError> {
        Ok(format!("(!{child})"))
    }

    fn render_expression(&self, raw: &RawExpression) -> Result<String, RenderError> {
        Ok(raw.payload().to_string())
    }
}

fn generalized_time(ts: PrimitiveDateTime, original: &Value) -> Result<String, RenderError> {
    ts.format(GENERALIZED_TIME)
        .map_err(|_| RenderError::unsupported(RENDERER, original.clone()))
}

/// RFC 4515 value escaping.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '*' | '(' | ')' | '\\' | '\0' => {
                let _ = write!(out, "\\{:02x}", u32::from(ch));
            }
            _ => out.push(ch),
        }
    }

    out
}
