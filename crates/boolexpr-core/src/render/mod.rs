//! Renderer protocol.
//!
//! A renderer supplies one capability per node kind. Dispatch first
//! flattens the tree (see [`Node::flatten`]) so chained combinators such
//! as `a & b & c` render as one compound, then walks it post-order: every
//! child is rendered before its parent's capability runs, so compound
//! capabilities only ever see finished child strings. The walk is pure;
//! it holds no state between calls and the same tree may be rendered from
//! several threads at once.

pub mod airtable;
pub mod infix;
pub mod ldap;
pub mod python;


use crate::{
    error::RenderError,
    node::{Comparison, LogicOp, Node, NodeKind, RawExpression},
};

///
/// Render
///
/// Every capability defaults to `MissingCapability`; a dialect overrides
/// only the ones it can express.
///

pub trait Render {
    fn render_comparison(&self, cmp: &Comparison) -> Result<String, RenderError> {
        let _ = cmp;
        Err(RenderError::missing(NodeKind::Comparison))
    }

    fn render_and(&self, children: &[String]) -> Result<String, RenderError> {
        let _ = children;
        Err(RenderError::missing(NodeKind::And))
    }

    fn render_or(&self, children: &[String]) -> Result<String, RenderError> {
        let _ = children;
        Err(RenderError::missing(NodeKind::Or))
    }

    fn render_not(&self, child: &str) -> Result<String, RenderError> {
        let _ = child;
        Err(RenderError::missing(NodeKind::Not))
    }

    fn render_expression(&self, raw: &RawExpression) -> Result<String, RenderError> {
        let _ = raw;
        Err(RenderError::missing(NodeKind::Expression))
    }

    /// Render a whole tree with this dialect.
    fn render(&self, node: &Node) -> Result<String, RenderError> {
        render(self, node)
    }
}

/// Render `node` with `renderer`.
///
/// The walk runs over `node.flatten()`. Fails on the first node whose
/// capability the renderer lacks; no partial output is returned, and the
/// reported child path indexes into the flattened tree.
pub fn render<R: Render + ?Sized>(renderer: &R, node: &Node) -> Result<String, RenderError> {
    let flat = node.flatten();
    let mut path = Vec::new();

    render_at(renderer, &flat, &mut path)
}

fn render_at<R: Render + ?Sized>(
    renderer: &R,
    node: &Node,
    path: &mut Vec<usize>,
) -> Result<String, RenderError> {
    let kind = node.kind();
    tracing::trace!(kind = %kind, depth = path.len(), "rendering node");

    let rendered = match node {
        Node::Comparison(cmp) => renderer.render_comparison(cmp),
        Node::Expression(raw) => renderer.render_expression(raw),
        Node::Compound(compound) => {
            let mut children = Vec::with_capacity(compound.len());
            for (index, child) in compound.iter().enumerate() {
                path.push(index);
                children.push(render_at(renderer, child, path)?);
                path.pop();
            }

            match (compound.op(), children.as_slice()) {
                (LogicOp::And, _) => renderer.render_and(&children),
                (LogicOp::Or, _) => renderer.render_or(&children),
                (LogicOp::Not, [child]) => renderer.render_not(child),
                (LogicOp::Not, _) => unreachable!("NOT compound holds exactly one child"),
            }
        }
    };

    rendered.map_err(|err| {
        let err = err.at(path.as_slice());
        if let RenderError::MissingCapability { kind, path } = &err {
            tracing::debug!(kind = %kind, ?path, "renderer lacks capability");
        }

        err
    })
}
