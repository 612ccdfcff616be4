use super::tag::map_tags;
use crate::access::{Navigate, plain_text, pluck};
use crate::collaborators::Collaborators;
use crate::error::MapperResult;
use crate::registry::Registry;
use serde_json::{Value, json};
use shutter_domain::config::MappingConfig;
use shutter_domain::constants::{
    API_EXIF, API_LOCATION, API_POST, API_RAW_POST, API_THUMBNAIL, EXIF, LOCATION, MAP_IMAGE,
    PHOTO, THUMBNAIL,
};
use shutter_domain::navigation::RouteState;
use std::sync::Arc;

/// Route query keys carried over from the current navigation state into photo routes.
const CARRIED_QUERY: [&str; 3] = ["tag", "search_phrase", "page"];

pub(super) fn register(registry: &mut Registry, collaborators: &Collaborators) {
    let navigation = Arc::clone(collaborators.navigation());
    let mapping = collaborators.mapping().clone();
    registry.register_projection(API_POST, PHOTO, move |registry, post| {
        if post.is_null() {
            return Ok(Value::Null);
        }
        photo(registry, post, &navigation.current(), &mapping)
    });

    let mapping = collaborators.mapping().clone();
    registry.register_projection(API_POST, MAP_IMAGE, move |registry, post| {
        map_image(registry, post, &mapping)
    });

    registry.register_projection(API_RAW_POST, PHOTO, |registry, response| {
        registry.map(response.field("data")?, API_POST, PHOTO)
    });
}

fn photo(
    registry: &Registry,
    post: &Value,
    route: &RouteState,
    mapping: &MappingConfig,
) -> MapperResult<Value> {
    let id = pluck(post, &["id"])?;
    let thumbnails = pluck(post, &["photo", "thumbnails"])?;
    let query: serde_json::Map<String, Value> = CARRIED_QUERY
        .iter()
        .map(|key| ((*key).to_owned(), route.lookup(key).map_or(Value::Null, Value::from)))
        .collect();

    Ok(json!({
        "id": id,
        "route": {
            "name": mapping.photo_route,
            "params": { "id": id },
            "query": query,
        },
        "description": pluck(post, &["description"])?,
        "exif": registry.map(&pluck(post, &["photo", "exif"])?, API_EXIF, EXIF)?,
        "averageColor": pluck(post, &["photo", "avg_color"])?,
        "thumbnail": thumbnail(registry, &thumbnails, &mapping.preview_size)?,
        "original": thumbnail(registry, &thumbnails, &mapping.original_size)?,
        "tags": map_tags(registry, post)?,
        "location": registry.map(&pluck(post, &["photo", "location"])?, API_LOCATION, LOCATION)?,
    }))
}

fn thumbnail(registry: &Registry, thumbnails: &Value, size: &str) -> MapperResult<Value> {
    registry.map(&pluck(thumbnails, &[size])?, API_THUMBNAIL, THUMBNAIL)
}

/// Marker shape for the map view. Every field tolerates a missing post.
fn map_image(registry: &Registry, post: &Value, mapping: &MappingConfig) -> MapperResult<Value> {
    let id = pluck(post, &["id"])?;
    let link_url = if id.is_null() {
        Value::Null
    } else {
        Value::String(format!("{}{}", mapping.photo_link_prefix, plain_text(&id)))
    };

    Ok(json!({
        "imageUrl": pluck(post, &["photo", "thumbnails", mapping.original_size.as_str(), "url"])?,
        "linkUrl": link_url,
        "title": pluck(post, &["description"])?,
        "location": registry.map(&pluck(post, &["photo", "location"])?, API_LOCATION, LOCATION)?,
    }))
}
