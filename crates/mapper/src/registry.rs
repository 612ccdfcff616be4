use crate::access::Navigate;
use crate::error::{MapperError, MapperResult};
use crate::key::{ResolverKey, TypeTag};
use crate::resolver::{Resolver, ResolverKind};
use fxhash::FxHashMap;
use serde_json::Value;
use tracing::{debug, trace};

/// Resolvers keyed by source tag, then target tag.
///
/// The registry is built once and then shared read-only; [`Registry::map`] and
/// [`Registry::hydrate`] take `&self`. Cloning is cheap, resolvers are reference counted.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    resolvers: FxHashMap<TypeTag, FxHashMap<TypeTag, Resolver>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `resolver` with the pair. A later registration for the same pair
    /// replaces the earlier one; other pairs are untouched.
    pub fn register(
        &mut self,
        source: impl Into<TypeTag>,
        target: impl Into<TypeTag>,
        resolver: Resolver,
    ) -> &mut Self {
        let (source, target) = (source.into(), target.into());
        let kind = resolver.kind();
        let targets = self.resolvers.entry(source.clone()).or_default();

        if targets.insert(target.clone(), resolver).is_some() {
            debug!(%source, %target, %kind, "Replaced registered resolver");
        } else {
            trace!(%source, %target, %kind, "Registered resolver");
        }
        self
    }

    pub fn register_projection<F>(
        &mut self,
        source: impl Into<TypeTag>,
        target: impl Into<TypeTag>,
        resolve: F,
    ) -> &mut Self
    where
        F: Fn(&Self, &Value) -> MapperResult<Value> + Send + Sync + 'static,
    {
        self.register(source, target, Resolver::projection(resolve))
    }

    pub fn register_hydration<F>(
        &mut self,
        source: impl Into<TypeTag>,
        target: impl Into<TypeTag>,
        hydrate: F,
    ) -> &mut Self
    where
        F: Fn(&Self, &Value, &mut Value) -> MapperResult<()> + Send + Sync + 'static,
    {
        self.register(source, target, Resolver::hydration(hydrate))
    }

    #[must_use]
    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.resolvers.get(source).is_some_and(|targets| targets.contains_key(target))
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.values().map(|targets| targets.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.values().all(|targets| targets.is_empty())
    }

    /// Every registered pair with its resolver kind, sorted by source then target.
    #[must_use]
    pub fn pairs(&self) -> Vec<(ResolverKey, ResolverKind)> {
        let mut pairs: Vec<_> = self
            .resolvers
            .iter()
            .flat_map(|(source, targets)| {
                targets.iter().map(move |(target, resolver)| {
                    (
                        ResolverKey { source: source.clone(), target: target.clone() },
                        resolver.kind(),
                    )
                })
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    /// Looks up the resolver for the exact pair.
    pub fn resolver(&self, source: &str, target: &str) -> MapperResult<&Resolver> {
        self.resolvers.get(source).and_then(|targets| targets.get(target)).ok_or_else(|| {
            debug!(source, target, "No resolver registered");
            MapperError::UnresolvedMapping { key: owned_key(source, target), context: None }
        })
    }

    /// Runs the resolver registered for `(source, target)` on `value`.
    ///
    /// Projection resolvers return their output. A hydration resolver is driven with
    /// `value` as a `{ "response": .., "component": .. }` bundle and the hydrated
    /// component is returned; a null component starts out as an empty object.
    ///
    /// # Errors
    /// [`MapperError::UnresolvedMapping`] for an unknown pair, otherwise whatever the
    /// resolver raises, unchanged.
    pub fn map(&self, value: &Value, source: &str, target: &str) -> MapperResult<Value> {
        let resolver = self.resolver(source, target)?;
        trace!(source, target, kind = %resolver.kind(), "Dispatching mapping");

        match resolver {
            Resolver::Projection(project) => project(self, value),
            Resolver::Hydration(hydrate) => {
                let response = value.field("response")?;
                let mut component = value.field("component")?.clone();
                hydrate(self, response, &mut component)?;
                Ok(component)
            }
        }
    }

    /// Runs a hydration resolver against a caller-held component and hands it back.
    ///
    /// # Errors
    /// [`MapperError::UnresolvedMapping`] for an unknown pair,
    /// [`MapperError::KindMismatch`] if the pair holds a projection resolver, otherwise
    /// whatever the resolver raises.
    pub fn hydrate<'c>(
        &self,
        response: &Value,
        component: &'c mut Value,
        source: &str,
        target: &str,
    ) -> MapperResult<&'c mut Value> {
        let resolver = self.resolver(source, target)?;
        trace!(source, target, "Dispatching hydration");

        let Resolver::Hydration(hydrate) = resolver else {
            return Err(MapperError::KindMismatch {
                key: owned_key(source, target),
                actual: resolver.kind(),
                context: None,
            });
        };
        hydrate(self, response, component)?;
        Ok(component)
    }
}

/// Maps every element of `items` through the `(source, target)` resolver.
///
/// Dispatch itself never iterates; list-valued fields call this explicitly.
pub fn map_each(
    registry: &Registry,
    items: &[Value],
    source: &str,
    target: &str,
) -> MapperResult<Value> {
    items.iter().map(|item| registry.map(item, source, target)).collect()
}

fn owned_key(source: &str, target: &str) -> ResolverKey {
    ResolverKey::new(source.to_owned(), target.to_owned())
}
