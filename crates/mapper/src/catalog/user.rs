use crate::access::Navigate;
use crate::collaborators::Collaborators;
use crate::error::MapperError;
use crate::registry::Registry;
use serde_json::{Value, json};
use shutter_domain::constants::{API_USER, USER};
use std::sync::Arc;

/// `Api.User -> User`. `expires_at` is an absolute instant in epoch milliseconds.
pub(super) fn register(registry: &mut Registry, collaborators: &Collaborators) {
    let clock = Arc::clone(collaborators.clock());

    registry.register_projection(API_USER, USER, move |_, user| {
        let expires_at = match user.field("expires_in")? {
            Value::Null => Value::Null,
            seconds => {
                let seconds = seconds.as_i64().ok_or_else(|| {
                    MapperError::malformed(format!(
                        "expires_in must be whole seconds, found {seconds}"
                    ))
                })?;
                let millis = seconds
                    .checked_mul(1000)
                    .and_then(|ms| clock.now().timestamp_millis().checked_add(ms))
                    .ok_or_else(|| MapperError::malformed("expires_in is out of range"))?;
                Value::from(millis)
            }
        };

        Ok(json!({
            "id": user.field("id")?,
            "name": user.field("name")?,
            "expires_at": expires_at,
        }))
    });
}
