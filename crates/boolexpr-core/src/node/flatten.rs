use crate::node::{Compound, LogicOp, Node};

impl Node {
    ///
    /// Reduce the depth of nested AND / OR compounds.
    ///
    /// Rules, applied at every depth:
    /// - AND(AND(a, b), c)   → AND(a, b, c)
    /// - OR(a, OR(b, c))     → OR(a, b, c)
    /// - NOT(x)              → NOT(flatten(x))
    ///
    /// NOT is never merged into NOT; NOT(NOT(x)) keeps both negations.
    /// Child order is preserved and the result is idempotent under a
    /// second pass.
    ///
    #[must_use]
    pub fn flatten(&self) -> Self {
        match self {
            Self::Compound(compound) => Self::Compound(flatten_compound(compound)),
            Self::Comparison(_) | Self::Expression(_) => self.clone(),
        }
    }
}

fn flatten_compound(compound: &Compound) -> Compound {
    let op = compound.op();
    let mut out = Vec::with_capacity(compound.len());

    for child in compound {
        let flattened = child.flatten();

        match flattened {
            Node::Compound(inner) if op != LogicOp::Not && inner.op() == op => {
                let (_, grandchildren) = inner.into_parts();
                out.extend(grandchildren);
            }
            other => out.push(other),
        }
    }

    tracing::trace!(op = %op, before = compound.len(), after = out.len(), "flattened compound");

    Compound::new_unchecked(op, out)
}
