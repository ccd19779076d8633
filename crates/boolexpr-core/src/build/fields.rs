use crate::{build::eq, node::Node, value::Value};
use derive_more::IntoIterator;

///
/// Fields
///
/// Ordered `name = value` pairs, each expanding to an equality
/// comparison. Insertion order is the order children appear in.
///

#[derive(Clone, Debug, Default, Eq, IntoIterator, PartialEq)]
pub struct Fields(Vec<(String, Value)>);

impl Fields {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a pair; duplicate names are kept as separate comparisons.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_comparisons(self) -> impl Iterator<Item = Node> {
        self.0.into_iter().map(|(name, value)| eq(name, value))
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
