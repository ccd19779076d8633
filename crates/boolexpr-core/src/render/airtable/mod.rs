//! Airtable formula renderer (`filterByFormula` syntax).


use crate::{
    error::RenderError,
    node::{Comparison, RawExpression},
    render::Render,
    value::{ISO_TIMESTAMP, Value},
};

const RENDERER: &str = "airtable";

///
/// AirtableRenderer
///
/// AND(a, b)   OR(a, b)   NOT(a)   {field}<op>value
///
/// Null       → EMPTY()
/// Bool       → 1 / 0
/// Date, Timestamp → quoted ISO-8601
/// Text       → single-quoted, `\` and `'` escaped
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AirtableRenderer;

impl AirtableRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn field(lval: &Value) -> Result<String, RenderError> {
        match lval {
            Value::Text(name) if name.starts_with('{') && name.ends_with('}') => Ok(name.clone()),
            Value::Text(name) => Ok(format!("{{{name}}}")),
            Value::Expression(raw) => Ok(raw.payload().to_string()),
            other => Err(RenderError::unsupported(RENDERER, other.clone())),
        }
    }

    fn value(rval: &Value) -> Result<String, RenderError> {
        match rval {
            Value::Null => Ok("EMPTY()".to_string()),
            Value::Bool(v) => Ok(u8::from(*v).to_string()),
            Value::Date(date) => Ok(format!("'{date}'")),
            Value::Timestamp(ts) => ts
                .format(ISO_TIMESTAMP)
                .map(|formatted| format!("'{formatted}'"))
                .map_err(|_| RenderError::unsupported(RENDERER, rval.clone())),
            Value::Text(text) => Ok(quote(text)),
            Value::Expression(raw) => Ok(raw.payload().to_string()),
            Value::Float64(_) | Value::Int(_) | Value::Uint(_) => Ok(rval.to_string()),
            Value::List(_) => Err(RenderError::unsupported(RENDERER, rval.clone())),
        }
    }
}

impl Render for AirtableRenderer {
    fn render_comparison(&self, cmp: &Comparison) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            Self::field(cmp.lval())?,
            cmp.op().symbol(),
            Self::value(cmp.rval())?
        ))
    }

    fn render_and(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(format!("AND({})", children.join(", ")))
    }

    fn render_or(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(format!("OR({})", children.join(", ")))
    }

    fn render_not(&self, child: &str) -> Result<String, RenderError> {
        Ok(format!("NOT({child})"))
    }

    fn render_expression(&self, raw: &RawExpression) -> Result<String, RenderError> {
        Ok(raw.payload().to_string())
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        if matches!(ch, '\'' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');

    out
}
