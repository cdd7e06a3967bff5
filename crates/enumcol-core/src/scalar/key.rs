use crate::scalar::Scalar;
use serde::Serialize;

///
/// ScalarTag
///
/// Stable canonical payload-variant tag. The tag is what keeps registry
/// keys injective across heterogeneous payloads: `Int(0)` and `Text("0")`
/// share a text form but never a tag.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ScalarTag {
    Bool = 1,
    Float = 2,
    Int = 3,
    Null = 4,
    Text = 5,
}

impl ScalarTag {
    /// Stable byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable payload kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Null => "Null",
            Self::Text => "Text",
        }
    }
}

impl std::fmt::Display for ScalarTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ScalarKey
///
/// Injective registry key for a canonical payload: tag plus
/// format-preserving value. Floats are keyed by raw IEEE-754 bits so the
/// key is `Eq + Hash`; NaN never reaches this point because
/// canonicalization rejects non-finite floats.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ScalarKey {
    Bool(bool),
    Float(u64),
    Int(i64),
    Null,
    Text(String),
}

impl ScalarKey {
    /// Stable variant tag for this key.
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

    /// Diagnostic rendering: tag plus payload, e.g. `Text("0")`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Bool(flag) => format!("Bool({flag})"),
            Self::Float(bits) => format!("Float({})", f64::from_bits(*bits)),
            Self::Int(int) => format!("Int({int})"),
            Self::Null => "Null".to_string(),
            Self::Text(text) => format!("Text({text:?})"),
        }
    }
}

impl From<&Scalar> for ScalarKey {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Bool(flag) => Self::Bool(*flag),
            Scalar::Float(float) => Self::Float(float.to_bits()),
            Scalar::Int(int) => Self::Int(*int),
            Scalar::Null => Self::Null,
            Scalar::Text(text) => Self::Text(text.clone()),
        }
    }
}
