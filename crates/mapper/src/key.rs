use std::borrow::{Borrow, Cow};
use std::fmt;

/// Opaque name of a logical data shape, e.g. `Api.Post` or `Component.PhotoModify`.
///
/// Tags are compared as plain strings. `Borrow<str>` lets registry lookups take `&str`
/// without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    #[must_use]
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TypeTag {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl Borrow<str> for TypeTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// The ordered `(source, target)` pair a resolver is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolverKey {
    pub source: TypeTag,
    pub target: TypeTag,
}

impl ResolverKey {
    pub fn new(source: impl Into<TypeTag>, target: impl Into<TypeTag>) -> Self {
        Self { source: source.into(), target: target.into() }
    }
}

impl fmt::Display for ResolverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
