//! The photo edit form: hydrated from the post and photo envelopes, and turned back
//! into outbound `Api.Post` / `Api.Photo` payloads on save.
//!
//! The post envelope is expected first. Hydrating the photo envelope first and the
//! post envelope second replaces `component.post` and drops the photo.

use super::tag::map_tags;
use crate::access::{Navigate, ensure_object, pluck, safe, truthy};
use crate::error::MapperResult;
use crate::registry::{Registry, map_each};
use serde_json::{Map, Value, json};
use shutter_domain::constants::{
    API_PHOTO, API_POST, API_RAW_PHOTO, API_RAW_POST, API_TAG, COMPONENT_PHOTO_MODIFY, TAG,
};

pub(super) fn register(registry: &mut Registry) {
    registry.register_hydration(API_RAW_POST, COMPONENT_PHOTO_MODIFY, hydrate_post);

    registry.register_hydration(API_RAW_PHOTO, COMPONENT_PHOTO_MODIFY, |_, response, component| {
        let photo = response.field("data")?.clone();

        let post = ensure_object(component)?.entry("post").or_insert(Value::Null);
        if !truthy(post) {
            *post = Value::Object(Map::new());
        }
        ensure_object(post)?.insert("photo".to_owned(), photo);
        Ok(())
    });

    registry.register_projection(COMPONENT_PHOTO_MODIFY, API_POST, |registry, component| {
        let tags = component.field("tags")?.items()?;
        Ok(json!({
            "id": pluck(component, &["postId"])?,
            "photo": { "id": pluck(component, &["photoId"])? },
            "description": pluck(component, &["description"])?,
            "tags": map_each(registry, tags, TAG, API_TAG)?,
        }))
    });

    registry.register_projection(COMPONENT_PHOTO_MODIFY, API_PHOTO, |_, component| {
        Ok(json!({
            "location": {
                "latitude": pluck(component, &["location", "lat"])?,
                "longitude": pluck(component, &["location", "lng"])?,
            },
        }))
    });
}

fn hydrate_post(registry: &Registry, response: &Value, component: &mut Value) -> MapperResult<()> {
    let post = response.field("data")?;
    let description = pluck(post, &["description"])?;
    let tags = map_tags(registry, post)?;
    let location = safe(
        || {
            Ok(json!({
                "lat": post.path(&["photo", "location", "latitude"])?,
                "lng": post.path(&["photo", "location", "longitude"])?,
            }))
        },
        Value::Null,
    )?;

    let fields = ensure_object(component)?;
    fields.insert("post".to_owned(), post.clone());
    fields.insert("description".to_owned(), description);
    fields.insert("tags".to_owned(), tags);
    fields.insert("location".to_owned(), location);
    Ok(())
}
