mod key;

#[cfg(test)]
mod tests;

pub use key::{ScalarKey, ScalarTag};

use derive_more::Display;
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// ScalarError
///
/// Rejections raised while canonicalizing driver input into a payload.
/// Carries a description of the offending value for diagnostics.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ScalarError {
    #[error("expected a scalar or null payload, got {kind}")]
    UnexpectedValue { kind: String },
}

///
/// Scalar
///
/// Canonical scalar-or-null payload of an enum value.
///
/// Canonicalization never widens: `Int(0)`, `Text("0")`, `Bool(false)` and
/// `Null` are four distinct payloads with four distinct registry keys. The
/// `Display` form is what sub-type patterns are matched against (`Null`
/// renders as the empty string).
///

#[derive(Clone, Debug, Display, PartialEq, Serialize)]
pub enum Scalar {
    #[display("{_0}")]
    Bool(bool),
    #[display("{_0}")]
    Float(f64),
    #[display("{_0}")]
    Int(i64),
    #[display("")]
    Null,
    #[display("{_0}")]
    Text(String),
}

impl Scalar {
    /// Wrap a float payload. NaN and infinities have no canonical registry
    /// key and are rejected.
    pub fn try_float(value: f64) -> Result<Self, ScalarError> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            Err(ScalarError::UnexpectedValue {
                kind: format!("non-finite float {value}"),
            })
        }
    }

    /// Canonicalize an object that knows how to render itself as text.
    pub fn from_display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Text(value.to_string())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable variant tag for this payload.
    #[must_use]
    pub const fn tag(&self) -> ScalarTag {
        match self {
            Self::Bool(_) => ScalarTag::Bool,
            Self::Float(_) => ScalarTag::Float,
            Self::Int(_) => ScalarTag::Int,
            Self::Null => ScalarTag::Null,
            Self::Text(_) => ScalarTag::Text,
        }
    }

    /// Canonical registry key for this payload.
    #[must_use]
    pub fn key(&self) -> ScalarKey {
        ScalarKey::from(self)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<f64> for Scalar {
    type Error = ScalarError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_float(value)
    }
}

/// Driver-boundary canonicalization: dynamic column values arrive as JSON
/// scalars. Compound values can not become enum payloads.
impl TryFrom<serde_json::Value> for Scalar {
    type Error = ScalarError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        match value {
            Json::Null => Ok(Self::Null),
            Json::Bool(flag) => Ok(Self::Bool(flag)),
            Json::String(text) => Ok(Self::Text(text)),
            Json::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return Ok(Self::Int(int));
                }
                if number.is_f64()
                    && let Some(float) = number.as_f64()
                {
                    return Self::try_float(float);
                }

                Err(ScalarError::UnexpectedValue {
                    kind: format!("number {number} outside the 64-bit payload range"),
                })
            }
            Json::Array(items) => Err(ScalarError::UnexpectedValue {
                kind: format!("array of {} items", items.len()),
            }),
            Json::Object(entries) => Err(ScalarError::UnexpectedValue {
                kind: format!("object with {} entries", entries.len()),
            }),
        }
    }
}

/// Driver-boundary serialization of a payload back into a dynamic value.
impl From<&Scalar> for serde_json::Value {
    fn from(scalar: &Scalar) -> Self {
        use serde_json::Value as Json;

        match scalar {
            Scalar::Bool(flag) => Json::Bool(*flag),
            Scalar::Float(float) => {
                serde_json::Number::from_f64(*float).map_or(Json::Null, Json::Number)
            }
            Scalar::Int(int) => Json::Number((*int).into()),
            Scalar::Null => Json::Null,
            Scalar::Text(text) => Json::String(text.clone()),
        }
    }
}
