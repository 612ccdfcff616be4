//! The application's resolver set.
//!
//! Each submodule registers the resolvers for one area of the domain. Collaborators
//! are captured at install time; the navigation snapshot and the clock are still read
//! on every call.

mod linked_data;
mod listing;
mod location;
mod media;
mod photo_modify;
mod post;
mod subscription;
mod tag;
mod user;

use crate::collaborators::Collaborators;
use crate::registry::Registry;
use tracing::info;

/// Registers the full catalog into `registry`, replacing any resolver for the same pairs.
pub fn install(registry: &mut Registry, collaborators: &Collaborators) {
    let before = registry.len();

    user::register(registry, collaborators);
    post::register(registry, collaborators);
    media::register(registry, collaborators);
    tag::register(registry);
    location::register(registry);
    subscription::register(registry);
    photo_modify::register(registry);
    listing::register(registry);
    linked_data::register(registry, collaborators);

    info!(
        resolvers = registry.len(),
        added = registry.len().saturating_sub(before),
        "Resolver catalog installed"
    );
}

/// A fresh registry holding only the catalog.
#[must_use]
pub fn build(collaborators: &Collaborators) -> Registry {
    let mut registry = Registry::new();
    install(&mut registry, collaborators);
    registry
}
