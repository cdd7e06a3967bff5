use crate::scalar::{Scalar, ScalarKey};
use std::{fmt, sync::Arc};

///
/// EnumValue
///
/// Identity-cached immutable wrapper around one canonical payload.
///
/// Instances only exist inside an [`EnumRegistry`](crate::registry::EnumRegistry),
/// which guarantees exactly one per `(namespace, payload)` pair. The handle
/// is cheap to clone and every clone shares identity: there is no operation
/// that manufactures a second logical identity for an equal key.
///

#[derive(Clone, Debug)]
pub struct EnumValue {
    inner: Arc<EnumInner>,
}

#[derive(Debug)]
struct EnumInner {
    namespace: String,
    scalar: Scalar,
}

impl EnumValue {
    pub(crate) fn new(namespace: impl Into<String>, scalar: Scalar) -> Self {
        Self {
            inner: Arc::new(EnumInner {
                namespace: namespace.into(),
                scalar,
            }),
        }
    }

    /// Registry partition this value belongs to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    /// Canonical payload.
    #[must_use]
    pub fn scalar(&self) -> &Scalar {
        &self.inner.scalar
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.inner.scalar.is_null()
    }

    /// Canonical registry key of the payload.
    #[must_use]
    pub fn key(&self) -> ScalarKey {
        self.inner.scalar.key()
    }

    /// Identity comparison: both handles point at the same registry entry.
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Value comparison, class-strict: payloads and namespaces must both
    /// match. `ArticleType("draft")` is never `Role("draft")`.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.is_value(other) && self.inner.namespace == other.inner.namespace
    }

    /// Lenient value comparison across namespaces. Think twice: payloads
    /// from unrelated enum families compare equal here.
    #[must_use]
    pub fn is_value(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.scalar, f)
    }
}
