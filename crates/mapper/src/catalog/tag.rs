use crate::access::{Navigate, pluck, truthy};
use crate::error::MapperResult;
use crate::registry::{Registry, map_each};
use serde_json::{Value, json};
use shutter_domain::constants::{API_TAG, TAG};

pub(super) fn register(registry: &mut Registry) {
    registry.register_projection(API_TAG, TAG, |_, tag| pluck(tag, &["value"]));
    registry.register_projection(TAG, API_TAG, |_, tag| Ok(json!({ "value": tag })));
}

/// `post.tags` mapped to bare tag strings; a missing or empty list gives `[]`.
pub(super) fn map_tags(registry: &Registry, post: &Value) -> MapperResult<Value> {
    let tags = pluck(post, &["tags"])?;
    if !truthy(&tags) {
        return Ok(Value::Array(Vec::new()));
    }
    map_each(registry, tags.items()?, API_TAG, TAG)
}
