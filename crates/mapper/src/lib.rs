//! # Mapper
//!
//! A type-tagged object mapping engine for API payloads and view models.
//!
//! ## Overview
//!
//! A [`Registry`] associates an ordered pair of type tags (`"Api.Post"` → `"Photo"`)
//! with a [`Resolver`]. Tags are opaque strings naming logical shapes, so one Rust type
//! (`serde_json::Value`) can carry every shape and a "hydrate this component" target is
//! just another tag.
//!
//! * **Projection resolvers** build a new value from the input.
//! * **Hydration resolvers** write into a caller-held component and leave everything else alone.
//! * Resolvers receive the registry as an argument and may call [`Registry::map`] for nested
//!   fields; lookups happen at call time, so registration order only matters for replacement.
//! * The [`access`] module reads deep, possibly absent fields: only navigation through a
//!   missing value is recovered ([`safe`]), every other failure propagates.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use shutter_mapper::{Collaborators, MapperError, catalog};
//! use shutter_mapper::domain::constants::{API_TAG, TAG};
//!
//! let registry = catalog::build(&Collaborators::builder().build());
//!
//! let tag = registry.map(&json!({ "value": "sunset" }), API_TAG, TAG)?;
//! assert_eq!(tag, "sunset");
//!
//! let err = registry.map(&tag, TAG, "Nowhere").unwrap_err();
//! assert!(matches!(err, MapperError::UnresolvedMapping { .. }));
//! # Ok::<(), MapperError>(())
//! ```

pub mod access;
pub mod catalog;
pub mod collaborators;
mod error;
mod key;
pub mod pagination;
mod registry;
mod resolver;
mod view;

pub use access::{Navigate, ensure_object, optional, plain_text, pluck, safe, truthy};
pub use collaborators::{
    ChronoDateFormatter, Clock, Collaborators, CollaboratorsBuilder, DateFormatter, FixedClock,
    Navigation, SharedNavigation, SystemClock,
};
pub use error::{MapperError, MapperErrorExt, MapperResult};
pub use key::{ResolverKey, TypeTag};
pub use pagination::{PageItems, PageState, hydrate_page};
pub use registry::{Registry, map_each};
pub use resolver::{HydrationFn, ProjectionFn, Resolver, ResolverKind};
pub use shutter_domain as domain;
pub use view::PhotoView;
