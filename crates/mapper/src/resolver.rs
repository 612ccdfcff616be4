use crate::error::MapperResult;
use crate::registry::Registry;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Builds a new value from the input.
pub type ProjectionFn = dyn Fn(&Registry, &Value) -> MapperResult<Value> + Send + Sync;

/// Writes into a caller-held component, given the raw response.
pub type HydrationFn = dyn Fn(&Registry, &Value, &mut Value) -> MapperResult<()> + Send + Sync;

/// A registered transformation.
///
/// The registry is passed in at call time so resolvers can dispatch nested fields
/// without holding a reference to it.
#[derive(Clone)]
pub enum Resolver {
    Projection(Arc<ProjectionFn>),
    Hydration(Arc<HydrationFn>),
}

impl Resolver {
    pub fn projection<F>(resolve: F) -> Self
    where
        F: Fn(&Registry, &Value) -> MapperResult<Value> + Send + Sync + 'static,
    {
        Self::Projection(Arc::new(resolve))
    }

    pub fn hydration<F>(hydrate: F) -> Self
    where
        F: Fn(&Registry, &Value, &mut Value) -> MapperResult<()> + Send + Sync + 'static,
    {
        Self::Hydration(Arc::new(hydrate))
    }

    #[must_use]
    pub const fn kind(&self) -> ResolverKind {
        match self {
            Self::Projection(_) => ResolverKind::Projection,
            Self::Hydration(_) => ResolverKind::Hydration,
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resolver::{:?}(..)", self.kind())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverKind {
    Projection,
    Hydration,
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Projection => "projection",
            Self::Hydration => "hydration",
        })
    }
}
