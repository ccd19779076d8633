use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// NonFiniteFloat
///
/// A NaN or infinite operand; comparison filters cannot carry it.
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
#[error("float operand must be finite; got {0}")]
pub struct NonFiniteFloat(pub f64);

///
/// Float64
///
/// Finite float operand. Zero has a single representation, so two
/// comparisons against `0.0` and `-0.0` are the same condition and the
/// derived `Eq`/`Hash`/`Ord` on `Value` stay lawful.
///

#[derive(Clone, Copy, Debug, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Float64(f64);

impl Float64 {
    /// `None` for NaN and the infinities.
    #[must_use]
    pub fn try_new(v: f64) -> Option<Self> {
        v.is_finite().then(|| Self(v + 0.0))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float64 {}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<i32> for Float64 {
    fn from(n: i32) -> Self {
        Self(f64::from(n))
    }
}

impl From<Float64> for f64 {
    fn from(x: Float64) -> Self {
        x.0
    }
}

impl TryFrom<f64> for Float64 {
    type Error = NonFiniteFloat;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v).ok_or(NonFiniteFloat(v))
    }
}
