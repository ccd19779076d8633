//! Python boolean-expression renderer; operands are emitted as Python
//! literals so the output can be evaluated against local names.


use crate::{
    error::RenderError,
    node::{CompareOp, Comparison, RawExpression},
    render::Render,
    value::{Float64, Value},
};
use std::fmt::Write as _;
use time::{Date, PrimitiveDateTime};

///
/// PythonRenderer
///
/// (a and b)   (a or b)   not a   field <op> literal
///
/// Text       → `'…'` (double quotes when the text holds `'` and no `"`)
/// Null       → None
/// Bool       → True / False
/// Date       → datetime.date(y, m, d)
/// Timestamp  → datetime.datetime(y, m, d, H, M[, S[, us]])
/// List       → [a, b]
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PythonRenderer;

impl PythonRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn field(lval: &Value) -> String {
        match lval {
            Value::Text(name) => name.clone(),
            other => literal(other),
        }
    }

    const fn symbol(op: CompareOp) -> &'static str {
        match op {
            CompareOp::Eq => " == ",
            CompareOp::Ne => " != ",
            CompareOp::Lt => " < ",
            CompareOp::Lte => " <= ",
            CompareOp::Gt => " > ",
            CompareOp::Gte => " >= ",
        }
    }
}

impl Render for PythonRenderer {
    fn render_comparison(&self, cmp: &Comparison) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            Self::field(cmp.lval()),
            Self::symbol(cmp.op()),
            literal(cmp.rval())
        ))
    }

    fn render_and(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(format!("({})", children.join(" and ")))
    }

    fn render_or(&self, children: &[String]) -> Result<String, RenderError> {
        Ok(format!("({})", children.join(" or ")))
    }

    fn render_not(&self, child: &str) -> Result<String, RenderError> {
        Ok(format!("not {child}"))
    }

    fn render_expression(&self, raw: &RawExpression) -> Result<String, RenderError> {
        Ok(raw.payload().to_string())
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Date(date) => date_literal(*date),
        Value::Expression(raw) => raw.payload().to_string(),
        Value::Float64(v) => float_literal(*v),
        Value::Int(v) => v.to_string(),
        Value::List(items) => {
            let items: Vec<_> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Null => "None".to_string(),
        Value::Text(text) => str_literal(text),
        Value::Timestamp(ts) => timestamp_literal(*ts),
        Value::Uint(v) => v.to_string(),
    }
}

fn date_literal(date: Date) -> String {
    format!(
        "datetime.date({}, {}, {})",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

// trailing zero fields are dropped: seconds only when non-zero, micros likewise
fn timestamp_literal(ts: PrimitiveDateTime) -> String {
    let mut out = format!(
        "datetime.datetime({}, {}, {}, {}, {}",
        ts.year(),
        u8::from(ts.month()),
        ts.day(),
        ts.hour(),
        ts.minute()
    );

    let micros = ts.microsecond();
    if ts.second() != 0 || micros != 0 {
        let _ = write!(out, ", {}", ts.second());
    }
    if micros != 0 {
        let _ = write!(out, ", {micros}");
    }
    out.push(')');

    out
}

// shortest round-trip digits; scientific outside [1e-4, 1e16)
fn float_literal(v: Float64) -> String {
    let v = v.get();
    let magnitude = v.abs();

    if v == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let plain = v.to_string();
        return if plain.contains('.') { plain } else { format!("{plain}.0") };
    }

    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = exp.strip_prefix('-').map_or(("+", exp), |d| ("-", d));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => sci,
    }
}

fn str_literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);

    out
}
