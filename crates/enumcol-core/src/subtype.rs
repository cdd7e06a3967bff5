use crate::{factory::EnumFactory, scalar::Scalar};
use regex::Regex;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};
use thiserror::Error as ThisError;

///
/// SubtypeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SubtypeError {
    #[error("sub-type delegate '{delegate}' is already registered under host '{host}'")]
    AlreadyRegistered { host: String, delegate: String },

    #[error("sub-type delegate '{delegate}' is not registered under host '{host}'")]
    NotRegistered { host: String, delegate: String },

    #[error("sub-type delegate is not usable: {reason}")]
    InvalidSubtype { reason: String },

    #[error("sub-type pattern {pattern:?} is malformed: {reason}")]
    InvalidPatternFormat { pattern: String, reason: String },
}

///
/// SubtypeMatcher
///
/// Pluggable predicate deciding whether a raw value belongs to a delegate.
/// Dispatch tests the value's text form before any registry lookup happens,
/// so the predicate sees the raw payload rendering.
///

pub trait SubtypeMatcher: Send + Sync {
    fn matches(&self, raw: &str) -> bool;
}

///
/// RegexMatcher
///
/// The stock predicate: an anchored-or-not regular expression over the text
/// form.
///

#[derive(Clone, Debug)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile `pattern`; malformed patterns are rejected with
    /// [`SubtypeError::InvalidPatternFormat`].
    pub fn new(pattern: &str) -> Result<Self, SubtypeError> {
        let regex = Regex::new(pattern).map_err(|err| SubtypeError::InvalidPatternFormat {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self { regex })
    }
}

impl SubtypeMatcher for RegexMatcher {
    fn matches(&self, raw: &str) -> bool {
        self.regex.is_match(raw)
    }
}

struct Route {
    delegate: Arc<dyn EnumFactory>,
    matcher: Arc<dyn SubtypeMatcher>,
}

///
/// SubtypeDispatch
///
/// Ordered per-host delegate routing. Each host class keeps its own route
/// list: identical pattern text under two hosts never interferes. Routes
/// are scanned in registration order and the first match wins; no match
/// means the host's own default delegate services the value.
///

#[derive(Default)]
pub struct SubtypeDispatch {
    routes: Mutex<HashMap<String, Vec<Route>>>,
}

impl SubtypeDispatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `delegate` under `host` with a pluggable predicate.
    /// A delegate may only be registered once per host; callers wanting
    /// idempotence check [`Self::is_registered`] first.
    pub fn register(
        &self,
        host: &str,
        delegate: Arc<dyn EnumFactory>,
        matcher: Arc<dyn SubtypeMatcher>,
    ) -> Result<(), SubtypeError> {
        if delegate.namespace().is_empty() {
            return Err(SubtypeError::InvalidSubtype {
                reason: "delegate namespace is empty".to_string(),
            });
        }

        let mut routes = self.lock();
        let host_routes = routes.entry(host.to_string()).or_default();
        if host_routes
            .iter()
            .any(|route| route.delegate.namespace() == delegate.namespace())
        {
            return Err(SubtypeError::AlreadyRegistered {
                host: host.to_string(),
                delegate: delegate.namespace().to_string(),
            });
        }
        host_routes.push(Route { delegate, matcher });

        Ok(())
    }

    /// Regex convenience over [`Self::register`].
    pub fn register_pattern(
        &self,
        host: &str,
        delegate: Arc<dyn EnumFactory>,
        pattern: &str,
    ) -> Result<(), SubtypeError> {
        let matcher = RegexMatcher::new(pattern)?;
        self.register(host, delegate, Arc::new(matcher))
    }

    /// Remove a prior registration. Identity of values already created
    /// through the delegate is unaffected.
    pub fn unregister(&self, host: &str, delegate_namespace: &str) -> Result<(), SubtypeError> {
        let missing = || SubtypeError::NotRegistered {
            host: host.to_string(),
            delegate: delegate_namespace.to_string(),
        };

        let mut routes = self.lock();
        let host_routes = routes.get_mut(host).ok_or_else(missing)?;
        let position = host_routes
            .iter()
            .position(|route| route.delegate.namespace() == delegate_namespace)
            .ok_or_else(missing)?;
        host_routes.remove(position);

        Ok(())
    }

    /// Check-then-register support.
    #[must_use]
    pub fn is_registered(&self, host: &str, delegate_namespace: &str) -> bool {
        self.lock().get(host).is_some_and(|host_routes| {
            host_routes
                .iter()
                .any(|route| route.delegate.namespace() == delegate_namespace)
        })
    }

    /// First delegate whose predicate accepts the raw text form, in
    /// registration order. `None` means the host's own default delegate.
    #[must_use]
    pub fn resolve(&self, host: &str, raw: &Scalar) -> Option<Arc<dyn EnumFactory>> {
        let text = raw.to_string();
        let routes = self.lock();

        routes
            .get(host)?
            .iter()
            .find(|route| route.matcher.matches(&text))
            .map(|route| route.delegate.clone())
    }

    /// Test-isolation reset.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Route>>> {
        self.routes.lock().expect("sub-type dispatch mutex poisoned")
    }
}
