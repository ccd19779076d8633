use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// RawExpression
///
/// Pre-formatted, dialect-native content. Renderers emit the payload as-is;
/// nothing here quotes, escapes or validates it.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("{payload}")]
pub struct RawExpression {
    payload: String,
}

impl RawExpression {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }
}
